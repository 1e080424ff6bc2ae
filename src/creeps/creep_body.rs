use screeps::Part::{Move, Work};
use screeps::{Part, MAX_CREEP_SIZE};
use derive_more::Constructor;
use crate::creeps::creep_role::CreepRole;

/// Energy required for the full-sized 5W1M miner that exhausts a source before it regenerates.
const FULL_MINER_COST: u32 = 550;
/// Reservers with more than two claim parts reserve faster than needed.
const MAX_RESERVER_PAIRS: u32 = 2;

#[derive(Debug, Clone, Constructor, Eq, PartialEq)]
pub struct CreepBody {
    pub parts: Vec<Part>,
}

impl CreepBody {
    /// The body template of given role that fits within the energy budget. Creeps are never made
    /// smaller than the minimal working body of their role, even if the budget is lower.
    pub fn for_role(role: CreepRole, energy: u32) -> CreepBody {
        match role {
            CreepRole::Miner => {
                let parts = if energy >= FULL_MINER_COST {
                    vec![Work, Work, Work, Work, Work, Move]
                } else {
                    vec![Work, Work, Move, Move]
                };
                CreepBody::new(parts)
            }
            CreepRole::Hauler => Self::paired_with_move(role.primary_part(), energy, MAX_CREEP_SIZE / 2),
            CreepRole::Scout => CreepBody::new(vec![Move]),
            CreepRole::Reserver => Self::paired_with_move(role.primary_part(), energy, MAX_RESERVER_PAIRS),
        }
    }

    /// A body with equal number of given part and `Move` parts, so that it moves at full speed on
    /// plains.
    fn paired_with_move(part: Part, energy: u32, max_pairs: u32) -> CreepBody {
        let pair_cost = part.cost() + Move.cost();
        let pairs = (energy / pair_cost).clamp(1, max_pairs);
        let mut parts = vec![part; pairs as usize];
        parts.extend(vec![Move; pairs as usize]);
        CreepBody::new(parts)
    }

    pub fn count_parts(&self, part: Part) -> u32 {
        self.parts.iter().filter(|&&p| p == part).count() as u32
    }
}

#[cfg(test)]
mod tests {
    use enum_iterator::all;
    use screeps::Part::{Carry, Claim, Move, Work};
    use screeps::MAX_CREEP_SIZE;
    use crate::creeps::creep_body::CreepBody;
    use crate::creeps::creep_role::CreepRole;

    #[test]
    fn test_miner_body_depends_on_energy() {
        let small = CreepBody::for_role(CreepRole::Miner, 300);
        assert_eq!(small.count_parts(Work), 2);
        assert_eq!(small.count_parts(Move), 2);

        let full = CreepBody::for_role(CreepRole::Miner, 800);
        assert_eq!(full.count_parts(Work), 5);
        assert_eq!(full.count_parts(Move), 1);
    }

    #[test]
    fn test_hauler_body_fits_energy() {
        let hauler = CreepBody::for_role(CreepRole::Hauler, 1500);
        assert_eq!(hauler.count_parts(Carry), 15);
        assert_eq!(hauler.count_parts(Move), 15);
    }

    #[test]
    fn test_hauler_body_is_capped() {
        let hauler = CreepBody::for_role(CreepRole::Hauler, 100_000);
        assert_eq!(hauler.parts.len() as u32, MAX_CREEP_SIZE);

        let tiny = CreepBody::for_role(CreepRole::Hauler, 0);
        assert_eq!(tiny.parts, vec![Carry, Move]);
    }

    #[test]
    fn test_reserver_body() {
        let reserver = CreepBody::for_role(CreepRole::Reserver, 5000);
        assert_eq!(reserver.count_parts(Claim), 2);
        assert_eq!(reserver.count_parts(Move), 2);
        assert_eq!(CreepBody::for_role(CreepRole::Scout, 5000).parts, vec![Move]);
    }

    #[test]
    fn test_every_role_gets_its_primary_part() {
        for role in all::<CreepRole>() {
            for energy in [0, 300, 550, 5000] {
                assert!(CreepBody::for_role(role, energy).count_parts(role.primary_part()) > 0);
            }
        }
    }
}

use derive_more::Constructor;
use screeps::Position;
use crate::creeps::creep_role::CreepRole;

/// State of a live creep as read this tick.
#[derive(Debug, Clone, Eq, PartialEq, Constructor)]
pub struct CreepInfo {
    /// Globally unique creep name.
    pub name: String,
    pub role: CreepRole,
    pub pos: Position,
    /// `None` while the creep is still spawning.
    pub ticks_to_live: Option<u32>,
    pub used_capacity: u32,
    pub store_capacity: u32,
}

impl CreepInfo {
    /// Whether the creep is spawned and will die in fewer than `ticks` ticks.
    pub fn dies_within(&self, ticks: u32) -> bool {
        self.ticks_to_live.is_some_and(|ticks_to_live| ticks_to_live < ticks)
    }

    pub fn is_carrying(&self) -> bool {
        self.used_capacity > 0
    }

    /// Fraction of the store that is used. Zero for creeps that cannot carry anything.
    pub fn carry_ratio(&self) -> f32 {
        if self.store_capacity == 0 {
            0.0
        } else {
            self.used_capacity as f32 / self.store_capacity as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use screeps::{Position, RoomName};
    use crate::creeps::creep_info::CreepInfo;
    use crate::creeps::creep_role::CreepRole::Hauler;
    use crate::geometry::position_utils::PositionUtils;

    #[test]
    fn test_spawning_creep_does_not_die_soon() {
        let pos = Position::new_from_raw(5, 5, RoomName::new("W1N1").unwrap());
        let mut creep = CreepInfo::new("hauler1".into(), Hauler, pos, None, 0, 0);
        assert!(!creep.dies_within(1500));
        assert_eq!(creep.carry_ratio(), 0.0);

        creep.ticks_to_live = Some(59);
        creep.store_capacity = 100;
        creep.used_capacity = 90;
        assert!(creep.dies_within(60));
        assert!(!creep.dies_within(59));
        assert!(creep.carry_ratio() > 0.8);
    }
}

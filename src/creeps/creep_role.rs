use std::fmt::{Display, Formatter};
use enum_iterator::Sequence;
use screeps::Part;
use serde::{Deserialize, Serialize};

/// Role of a mining creep. A creep never changes its role.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Sequence, Serialize, Deserialize)]
pub enum CreepRole {
    Miner,
    Hauler,
    Scout,
    Reserver,
}

impl Display for CreepRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl CreepRole {
    pub fn primary_part(self) -> Part {
        match self {
            CreepRole::Miner => Part::Work,
            CreepRole::Hauler => Part::Carry,
            CreepRole::Scout => Part::Move,
            CreepRole::Reserver => Part::Claim,
        }
    }
}

use derive_more::Constructor;
use screeps::Position;
use crate::creeps::creep_command::CreepCommand;
use crate::creeps::creep_info::CreepInfo;
use crate::creeps::orders::Orders;
use crate::travel::travel_spec::TravelSpec;

#[derive(Debug, Clone, Constructor)]
pub struct ScoutOrders {
    /// Where the scout should stay, within range, to keep the room visible.
    pub travel_spec: TravelSpec,
}

impl ScoutOrders {
    pub fn around(center: Position, range: u8) -> Self {
        Self::new(TravelSpec::new(center, range))
    }
}

impl Orders for ScoutOrders {
    fn decide(&self, scout: &CreepInfo) -> CreepCommand {
        if self.travel_spec.is_in_range(scout.pos) {
            CreepCommand::Idle
        } else {
            CreepCommand::TravelTo(self.travel_spec)
        }
    }
}

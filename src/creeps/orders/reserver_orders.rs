use derive_more::Constructor;
use screeps::CONTROLLER_RESERVE_MAX;
use crate::creeps::creep_command::CreepCommand;
use crate::creeps::creep_info::CreepInfo;
use crate::creeps::orders::Orders;
use crate::geometry::position_utils::PositionUtils;
use crate::travel::travel_spec::TravelSpec;
use crate::world::world_view::ControllerData;

#[derive(Debug, Clone, Constructor)]
pub struct ReserverOrders {
    pub controller: ControllerData,
    /// The reservation is renewed until it is this close to the maximum.
    pub renew_margin: u32,
}

impl Orders for ReserverOrders {
    fn decide(&self, reserver: &CreepInfo) -> CreepCommand {
        if !reserver.pos.is_near(self.controller.pos) {
            return CreepCommand::TravelTo(TravelSpec::new(self.controller.pos, 1));
        }

        let renew = match self.controller.reservation_ticks_to_end {
            None => true,
            Some(ticks_to_end) => ticks_to_end < CONTROLLER_RESERVE_MAX.saturating_sub(self.renew_margin),
        };
        if renew {
            CreepCommand::ReserveController(self.controller.id)
        } else {
            CreepCommand::Idle
        }
    }
}

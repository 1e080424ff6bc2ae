use derive_more::Constructor;
use crate::creeps::creep_command::CreepCommand;
use crate::creeps::creep_info::CreepInfo;
use crate::creeps::orders::Orders;
use crate::geometry::position_utils::PositionUtils;
use crate::travel::travel_spec::TravelSpec;
use crate::world::world_view::{ConstructionSiteData, ContainerData, SourceData};

#[derive(Debug, Clone, Constructor)]
pub struct MinerOrders {
    pub source: SourceData,
    /// The container over the work position, if built.
    pub container: Option<ContainerData>,
    /// The container construction site over the work position, if placed.
    pub construction_site: Option<ConstructionSiteData>,
}

impl Orders for MinerOrders {
    fn decide(&self, miner: &CreepInfo) -> CreepCommand {
        if !miner.pos.is_near(self.source.pos) {
            return CreepCommand::TravelTo(TravelSpec::new(self.source.work_pos, 0));
        }

        if let Some(construction_site) = self.construction_site {
            if miner.is_carrying() {
                return CreepCommand::Build(construction_site.id);
            }
        }

        if self.source.energy > 0 {
            CreepCommand::Harvest(self.source.id)
        } else {
            match self.container {
                Some(container) if miner.is_carrying() && container.is_damaged() => CreepCommand::Repair(container.id),
                _ => CreepCommand::Idle,
            }
        }
    }
}

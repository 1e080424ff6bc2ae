//! Decisions of what mining creeps do in the current tick. Each decision is made from scratch
//! from the current state of the creep and the world, so creeps recover on their own when a tick
//! is skipped or a command fails.

use log::{trace, warn};
use crate::creeps::creep_command::CreepCommand;
use crate::creeps::creep_info::CreepInfo;
use crate::creeps::creep_role::CreepRole;
use crate::creeps::orders::hauler_orders::HaulerOrders;
use crate::creeps::orders::miner_orders::MinerOrders;
use crate::creeps::orders::reserver_orders::ReserverOrders;
use crate::creeps::orders::scout_orders::ScoutOrders;
use crate::utils::result_utils::ResultUtils;
use crate::world::world_view::WorldView;

pub mod hauler_orders;
pub mod miner_orders;
pub mod reserver_orders;
pub mod scout_orders;

pub trait Orders {
    /// The single command for the creep this tick.
    fn decide(&self, creep: &CreepInfo) -> CreepCommand;
}

/// Orders for one of the mining roles.
#[derive(Debug, Clone)]
pub enum RoleOrders {
    Miner(MinerOrders),
    Hauler(HaulerOrders),
    Scout(ScoutOrders),
    Reserver(ReserverOrders),
}

impl RoleOrders {
    pub fn role(&self) -> CreepRole {
        match self {
            RoleOrders::Miner(_) => CreepRole::Miner,
            RoleOrders::Hauler(_) => CreepRole::Hauler,
            RoleOrders::Scout(_) => CreepRole::Scout,
            RoleOrders::Reserver(_) => CreepRole::Reserver,
        }
    }

    /// Issues the command decided for each of the creeps. Creeps of other roles are skipped.
    pub fn dispatch<W>(&self, world: &mut W, creeps: &[CreepInfo])
    where
        W: WorldView + ?Sized,
    {
        for creep in creeps {
            if creep.role != self.role() {
                warn!("Skipping {} {} given {} orders.", creep.role, creep.name, self.role());
                continue;
            }

            let command = self.decide(creep);
            trace!("{} {}: {:?}.", creep.role, creep.name, command);
            if command != CreepCommand::Idle {
                world
                    .issue_command(&creep.name, command)
                    .warn_if_err(&format!("{} {} failed to execute {:?}", creep.role, creep.name, command));
            }
        }
    }
}

impl Orders for RoleOrders {
    fn decide(&self, creep: &CreepInfo) -> CreepCommand {
        match self {
            RoleOrders::Miner(orders) => orders.decide(creep),
            RoleOrders::Hauler(orders) => orders.decide(creep),
            RoleOrders::Scout(orders) => orders.decide(creep),
            RoleOrders::Reserver(orders) => orders.decide(creep),
        }
    }
}

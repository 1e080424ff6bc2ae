use screeps::{ConstructionSite, ObjectId, Source, StructureContainer, StructureController, StructureStorage};
use crate::travel::travel_spec::TravelSpec;

/// The single action a creep is ordered to perform in a tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CreepCommand {
    /// Nothing to do this tick.
    Idle,
    TravelTo(TravelSpec),
    Harvest(ObjectId<Source>),
    Build(ObjectId<ConstructionSite>),
    Repair(ObjectId<StructureContainer>),
    Withdraw(ObjectId<StructureContainer>),
    /// Transfers everything the creep carries.
    TransferAll(ObjectId<StructureStorage>),
    ReserveController(ObjectId<StructureController>),
    /// Recycles the creep in the nearest spawn.
    Recycle,
}

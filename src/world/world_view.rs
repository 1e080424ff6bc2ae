use derive_more::Constructor;
use screeps::{ConstructionSite, ObjectId, Position, RoomName, Source, StructureContainer, StructureController, StructureStorage};
use crate::creeps::creep_command::CreepCommand;
use crate::errors::MiningError;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Constructor)]
pub struct SourceData {
    pub id: ObjectId<Source>,
    pub pos: Position,
    /// The tile next to the source where the miner stands and the container is built.
    pub work_pos: Position,
    pub energy: u32,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Constructor)]
pub struct ContainerData {
    pub id: ObjectId<StructureContainer>,
    pub pos: Position,
    pub hits: u32,
    pub hits_max: u32,
    pub energy: u32,
}

impl ContainerData {
    pub fn is_damaged(&self) -> bool {
        self.hits < self.hits_max
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Constructor)]
pub struct ConstructionSiteData {
    pub id: ObjectId<ConstructionSite>,
    pub pos: Position,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Constructor)]
pub struct StorageData {
    pub id: ObjectId<StructureStorage>,
    pub pos: Position,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Constructor)]
pub struct ControllerData {
    pub id: ObjectId<StructureController>,
    pub pos: Position,
    /// Ticks until the current reservation ends, `None` if the controller is not reserved.
    pub reservation_ticks_to_end: Option<u32>,
}

/// Result of a path search. When the search runs out of operations, the length of the best
/// partial path is reported.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Constructor)]
pub struct PathSearch {
    pub length: u32,
    pub incomplete: bool,
}

/// Access to the game state in the current tick. Everything read through it is valid only until
/// the end of the tick.
pub trait WorldView {
    fn is_room_visible(&self, room_name: RoomName) -> bool;

    /// Whether the room's controller is still owned by the bot.
    fn is_room_owned(&self, room_name: RoomName) -> bool;

    /// Sources in a visible room, in a stable order.
    fn sources(&self, room_name: RoomName) -> Vec<SourceData>;

    fn container_at(&self, pos: Position) -> Option<ContainerData>;

    fn construction_site_at(&self, pos: Position) -> Option<ConstructionSiteData>;

    fn storage(&self, room_name: RoomName) -> Option<StorageData>;

    fn controller(&self, room_name: RoomName) -> Option<ControllerData>;

    /// Number of walkable tiles around the position.
    fn steppable_adjacent_count(&self, pos: Position) -> u32;

    /// Length of the shortest path ignoring creeps, searched with at most `max_ops` operations.
    fn path_length(&self, from: Position, to: Position, max_ops: u32) -> PathSearch;

    /// Fails with `ConstructionSiteFailed` when the site cannot be placed.
    fn create_container_site(&mut self, pos: Position) -> Result<(), MiningError>;

    /// Fails with `CommandFailed` when the game rejects the command.
    fn issue_command(&mut self, creep_name: &str, command: CreepCommand) -> Result<(), MiningError>;
}

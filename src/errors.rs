use screeps::RoomName;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum MiningError {
    #[error("room {0} is not visible")]
    RoomVisibilityError(RoomName),
    #[error("room {0} is no longer owned")]
    DepotRoomLost(RoomName),
    #[error("room {0} has no storage")]
    StorageMissing(RoomName),
    #[error("room {0} has no controller")]
    ControllerMissing(RoomName),
    #[error("failed to place a construction site")]
    ConstructionSiteFailed,
    #[error("creep failed to execute a command")]
    CommandFailed,
}

impl MiningError {
    /// Whether the mining process cannot continue at all after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, MiningError::DepotRoomLost(_))
    }
}

use crate::utils::priority::Priority;

pub const MINING_PROCESS_PRIORITY: Priority = Priority(180);

pub const MINER_SPAWN_PRIORITY: Priority = Priority(200);
pub const HAULER_SPAWN_PRIORITY: Priority = Priority(150);
pub const RESERVER_SPAWN_PRIORITY: Priority = Priority(110);
pub const SCOUT_SPAWN_PRIORITY: Priority = Priority(60);

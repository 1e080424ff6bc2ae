pub mod distance_cache;
pub mod mine_process;
pub mod mine_source;
pub mod remote_room;
pub mod sizing;

/// Coordinate of the middle of a room along either axis.
pub const ROOM_CENTER: u8 = 25;

/// Number of reservers kept around a remote controller unless configured otherwise.
pub const DEFAULT_RESERVER_COUNT: u32 = 1;

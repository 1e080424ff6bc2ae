use std::fmt::Display;
use derive_more::Constructor;
use screeps::Position;

/// Where a creep should go. The travel is finished once the creep is within `range` of `target`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Constructor)]
pub struct TravelSpec {
    pub target: Position,
    pub range: u8,
}

impl TravelSpec {
    pub fn is_in_range(&self, pos: Position) -> bool {
        pos.room_name() == self.target.room_name() && pos.get_range_to(self.target) <= self.range as u32
    }
}

impl Display for TravelSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} (range: {})", self.target.room_name(), self.target.xy(), self.range)
    }
}

use screeps::{Position, RoomCoordinate, RoomName};
use crate::consts::ROOM_CENTER;

pub trait PositionUtils {
    /// Whether the other position is this one or one of its neighbors. Always false for positions
    /// in different rooms that are not next to each other.
    fn is_near(self, other: Self) -> bool;

    fn f(&self) -> String;

    #[cfg(test)]
    fn new_from_raw(x: u8, y: u8, room_name: RoomName) -> Self;
}

impl PositionUtils for Position {
    #[inline]
    fn is_near(self, other: Self) -> bool {
        self.get_range_to(other) <= 1
    }

    #[inline]
    fn f(&self) -> String {
        format!("({},{},{})", self.room_name(), self.x(), self.y())
    }

    #[cfg(test)]
    fn new_from_raw(x: u8, y: u8, room_name: RoomName) -> Self {
        unsafe {
            Self::new(
                RoomCoordinate::unchecked_new(x),
                RoomCoordinate::unchecked_new(y),
                room_name
            )
        }
    }
}

/// The middle tile of given room.
pub fn room_center(room_name: RoomName) -> Position {
    // The center is within room bounds.
    let center = unsafe { RoomCoordinate::unchecked_new(ROOM_CENTER) };
    Position::new(center, center, room_name)
}

#[cfg(test)]
mod tests {
    use crate::geometry::position_utils::{room_center, PositionUtils};
    use screeps::{Position, RoomName};

    #[test]
    fn test_is_near() {
        let room_name = RoomName::new("W1N1").unwrap();
        let pos = Position::new_from_raw(10, 10, room_name);
        assert!(pos.is_near(pos));
        assert!(pos.is_near(Position::new_from_raw(11, 9, room_name)));
        assert!(!pos.is_near(Position::new_from_raw(12, 10, room_name)));
    }

    #[test]
    fn test_room_center() {
        let room_name = RoomName::new("E3S7").unwrap();
        let center = room_center(room_name);
        assert_eq!(center, Position::new_from_raw(25, 25, room_name));
        assert_eq!(center.f(), "(E3S7,25,25)");
    }
}

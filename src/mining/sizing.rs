//! Target numbers of creeps in mining clusters.

use std::cmp::min;
use crate::creeps::creep_info::CreepInfo;

/// One miner, or two when the only miner is about to die so that its replacement arrives in time.
pub fn miner_quantity(miners: &[CreepInfo], replacement_ticks: u32) -> u32 {
    match miners {
        [miner] if miner.dies_within(replacement_ticks) => 2,
        _ => 1,
    }
}

/// A scout is only needed until the room becomes visible.
pub fn scout_quantity(room_visible: bool) -> u32 {
    if room_visible {
        0
    } else {
        1
    }
}

/// Reservers are needed once the reservation runs low, as many as configured but no more than
/// can stand next to the controller.
pub fn reserver_quantity(
    reservation_ticks_to_end: Option<u32>,
    reserver_count: u32,
    steppable_adjacent: u32,
    refresh_ticks: u32,
) -> u32 {
    if reservation_ticks_to_end.unwrap_or(0) >= refresh_ticks {
        0
    } else {
        min(reserver_count, steppable_adjacent)
    }
}

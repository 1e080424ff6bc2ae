use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/// Tunable heuristics of source mining. The defaults are the values the mining processes were
/// balanced with, but none of them is required for correctness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Hauler payload required per tile of distance between the storage and a remote source.
    pub payload_per_tile: u32,
    /// The payload is rounded up to a multiple of this so that small changes in distance do not
    /// change hauler bodies.
    pub payload_rounding: u32,
    /// Payload added on top of the distance-based one.
    pub payload_floor: u32,
    /// Haulers with fewer ticks to live than the distance plus this margin are recycled.
    pub hauler_retire_margin: u32,
    /// Fraction of the store above which a hauler goes to unload.
    pub hauler_full_ratio: f32,
    /// Distance assumed for haulers in the same room as the storage.
    pub local_hauler_distance: u32,
    /// A replacement miner is spawned when the only miner has fewer ticks to live than this.
    pub miner_replacement_ticks: u32,
    /// No reservers are spawned while the reservation lasts at least this long.
    pub reservation_refresh_ticks: u32,
    /// Reservers renew the reservation until it is this close to the maximum.
    pub reservation_renew_margin: u32,
    /// Range from the room center at which a scout is considered to be in place.
    pub scout_range: u8,
    /// Pathfinder operations budget when measuring the distance to a remote source.
    pub path_max_ops: u32,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            payload_per_tile: 20,
            payload_rounding: 100,
            payload_floor: 200,
            hauler_retire_margin: 30,
            hauler_full_ratio: 0.8,
            local_hauler_distance: 50,
            miner_replacement_ticks: 60,
            reservation_refresh_ticks: 3500,
            reservation_renew_margin: 5,
            scout_range: 20,
            path_max_ops: 6000,
        }
    }
}

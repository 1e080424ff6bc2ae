use derive_more::Constructor;
use screeps::Part::{Carry, Move};
use screeps::{CARRY_CAPACITY, MAX_CREEP_SIZE};
use crate::config::MiningConfig;

/// Number of haulers serving a remote source and the energy budget of each of their bodies.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Constructor)]
pub struct HaulerPlan {
    pub quantity: u32,
    pub energy_per_creep: u32,
}

/// Energy a single round trip of haulers should move, growing linearly with the distance so that
/// the container at the source neither overflows nor stays empty.
/// Always a multiple of the configured rounding (when the floor is one too).
pub fn target_payload(distance: u32, config: &MiningConfig) -> u32 {
    let rounding = config.payload_rounding.max(1);
    (distance * config.payload_per_tile).div_ceil(rounding) * rounding + config.payload_floor
}

/// Sizes haulers built out of units of `unit_cost` energy carrying `unit_capacity` each. Half of
/// `max_parts` is reserved for `Move` parts. When a single hauler of the maximum size cannot carry
/// the target payload, the work is split between two maximum-size haulers.
pub fn plan_haulers(
    distance: u32,
    unit_capacity: u32,
    unit_cost: u32,
    max_parts: u32,
    config: &MiningConfig,
) -> HaulerPlan {
    let payload = target_payload(distance, config);
    let required_energy = payload.div_ceil(unit_capacity.max(1)) * unit_cost;
    let max_energy = unit_cost * (max_parts / 2);
    if required_energy > max_energy {
        HaulerPlan::new(2, max_energy)
    } else {
        HaulerPlan::new(1, required_energy)
    }
}

/// Hauler plan for standard `Carry` and `Move` pairs.
pub fn remote_hauler_plan(distance: u32, config: &MiningConfig) -> HaulerPlan {
    plan_haulers(distance, CARRY_CAPACITY, Carry.cost() + Move.cost(), MAX_CREEP_SIZE, config)
}

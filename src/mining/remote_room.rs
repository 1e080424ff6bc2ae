use screeps::RoomName;
use crate::config::MiningConfig;
use crate::creeps::orders::reserver_orders::ReserverOrders;
use crate::creeps::orders::scout_orders::ScoutOrders;
use crate::creeps::orders::RoleOrders;
use crate::errors::MiningError;
use crate::errors::MiningError::ControllerMissing;
use crate::geometry::position_utils::room_center;
use crate::mining::sizing::{reserver_quantity, scout_quantity};
use crate::priorities::{RESERVER_SPAWN_PRIORITY, SCOUT_SPAWN_PRIORITY};
use crate::spawning::creep_cluster::{ensure_cluster_size, ClusterKey, CreepClusters, SpawnOptions};
use crate::world::world_view::WorldView;

/// Keeps a scout spawned from `room_name` in the middle of `mine_room_name` for as long as the
/// latter is not visible.
pub fn scout_room<W, C>(world: &mut W, clusters: &mut C, room_name: RoomName, mine_room_name: RoomName, config: &MiningConfig)
where
    W: WorldView + ?Sized,
    C: CreepClusters + ?Sized,
{
    let quantity = scout_quantity(world.is_room_visible(mine_room_name));
    let scouts = ensure_cluster_size(
        clusters,
        ClusterKey::Scouts(mine_room_name),
        SpawnOptions::new(room_name, SCOUT_SPAWN_PRIORITY, None),
        |_| quantity,
    );
    RoleOrders::Scout(ScoutOrders::around(room_center(mine_room_name), config.scout_range)).dispatch(world, &scouts);
}

/// Keeps the controller of the visible `mine_room_name` reserved with reservers spawned from
/// `room_name`.
pub fn reserve_room<W, C>(
    world: &mut W,
    clusters: &mut C,
    room_name: RoomName,
    mine_room_name: RoomName,
    reserver_count: u32,
    config: &MiningConfig,
) -> Result<(), MiningError>
where
    W: WorldView + ?Sized,
    C: CreepClusters + ?Sized,
{
    let controller = world.controller(mine_room_name).ok_or(ControllerMissing(mine_room_name))?;
    let quantity = reserver_quantity(
        controller.reservation_ticks_to_end,
        reserver_count,
        world.steppable_adjacent_count(controller.pos),
        config.reservation_refresh_ticks,
    );
    let reservers = ensure_cluster_size(
        clusters,
        ClusterKey::Reservers(mine_room_name),
        SpawnOptions::new(room_name, RESERVER_SPAWN_PRIORITY, None),
        |_| quantity,
    );
    RoleOrders::Reserver(ReserverOrders::new(controller, config.reservation_renew_margin)).dispatch(world, &reservers);

    Ok(())
}

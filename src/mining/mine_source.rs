use log::debug;
use screeps::RoomName;
use crate::config::MiningConfig;
use crate::creeps::orders::hauler_orders::HaulerOrders;
use crate::creeps::orders::miner_orders::MinerOrders;
use crate::creeps::orders::RoleOrders;
use crate::errors::MiningError;
use crate::errors::MiningError::StorageMissing;
use crate::geometry::position_utils::PositionUtils;
use crate::hauling::hauler_plan::remote_hauler_plan;
use crate::mining::distance_cache::DistanceCache;
use crate::mining::sizing::miner_quantity;
use crate::priorities::{HAULER_SPAWN_PRIORITY, MINER_SPAWN_PRIORITY};
use crate::spawning::creep_cluster::{ensure_cluster_size, ClusterKey, CreepClusters, SpawnOptions};
use crate::utils::result_utils::ResultUtils;
use crate::world::world_view::{SourceData, StorageData, WorldView};

/// What is shared by all sources mined by one process in a tick.
#[derive(Debug, Clone, Copy)]
pub struct SourceMiningContext<'a> {
    /// The owned room where creeps are spawned and the energy is delivered.
    pub room_name: RoomName,
    /// The room with the sources.
    pub mine_room_name: RoomName,
    pub storage: Option<StorageData>,
    pub config: &'a MiningConfig,
}

impl SourceMiningContext<'_> {
    pub fn is_remote(&self) -> bool {
        self.room_name != self.mine_room_name
    }
}

/// Keeps a container next to the source, a miner working on it and, once both the container and
/// the storage exist, haulers moving the energy to the storage.
/// Fails with `StorageMissing` when the haulers cannot work yet. Mining continues regardless.
pub fn mine_source<W, C>(
    world: &mut W,
    clusters: &mut C,
    source: &SourceData,
    context: &SourceMiningContext<'_>,
    distances: &mut DistanceCache,
) -> Result<(), MiningError>
where
    W: WorldView + ?Sized,
    C: CreepClusters + ?Sized,
{
    let work_pos = source.work_pos;

    let container = world.container_at(work_pos);
    let mut construction_site = None;
    if container.is_none() {
        construction_site = world.construction_site_at(work_pos);
        if construction_site.is_none() {
            debug!("Placing a container construction site for source {} at {}.", source.id, work_pos.f());
            world
                .create_container_site(work_pos)
                .warn_if_err(&format!("Failed to place a container at {}", work_pos.f()));
        }
    }

    let miners = ensure_cluster_size(
        clusters,
        ClusterKey::Miners(source.id),
        SpawnOptions::new(context.room_name, MINER_SPAWN_PRIORITY, None),
        |miners| miner_quantity(miners, context.config.miner_replacement_ticks),
    );
    RoleOrders::Miner(MinerOrders::new(*source, container, construction_site)).dispatch(world, &miners);

    let Some(container) = container else {
        return Ok(());
    };
    let storage = context.storage.ok_or(StorageMissing(context.room_name))?;

    let (quantity, energy, distance) = if context.is_remote() {
        let distance = distances.distance_to(&*world, storage.pos, source, context.config.path_max_ops);
        let plan = remote_hauler_plan(distance, context.config);
        (plan.quantity, Some(plan.energy_per_creep), distance)
    } else {
        (1, None, context.config.local_hauler_distance)
    };
    let haulers = ensure_cluster_size(
        clusters,
        ClusterKey::Haulers(source.id),
        SpawnOptions::new(context.room_name, HAULER_SPAWN_PRIORITY, energy),
        |_| quantity,
    );
    let orders = HaulerOrders::new(
        container,
        storage,
        distance,
        context.config.hauler_retire_margin,
        context.config.hauler_full_ratio,
    );
    RoleOrders::Hauler(orders).dispatch(world, &haulers);

    Ok(())
}

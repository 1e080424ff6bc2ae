use std::fmt::{Display, Formatter};
use derive_more::Constructor;
use log::trace;
use screeps::{ObjectId, RoomName, Source};
use crate::creeps::creep_body::CreepBody;
use crate::creeps::creep_info::CreepInfo;
use crate::creeps::creep_role::CreepRole;
use crate::utils::priority::Priority;

/// Identifies a cluster of creeps of one role working on one source or room. Keys of different
/// sources or rooms never collide.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum ClusterKey {
    Miners(ObjectId<Source>),
    Haulers(ObjectId<Source>),
    Scouts(RoomName),
    Reservers(RoomName),
}

impl ClusterKey {
    pub fn role(&self) -> CreepRole {
        match self {
            ClusterKey::Miners(_) => CreepRole::Miner,
            ClusterKey::Haulers(_) => CreepRole::Hauler,
            ClusterKey::Scouts(_) => CreepRole::Scout,
            ClusterKey::Reservers(_) => CreepRole::Reserver,
        }
    }
}

impl Display for ClusterKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ClusterKey::Miners(source_id) => write!(f, "miners_{}", source_id),
            ClusterKey::Haulers(source_id) => write!(f, "haulers_{}", source_id),
            ClusterKey::Scouts(room_name) => write!(f, "scout_{}", room_name),
            ClusterKey::Reservers(room_name) => write!(f, "reservists_{}", room_name),
        }
    }
}

/// How the creeps of a cluster are to be spawned.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Constructor)]
pub struct SpawnOptions {
    pub spawn_room: RoomName,
    pub priority: Priority,
    /// Energy budget of a single creep's body. `None` lets the spawning code use what the spawn
    /// room can afford.
    pub energy: Option<u32>,
}

impl SpawnOptions {
    /// The body to spawn creeps of given role with when the spawn room can afford at most
    /// `available_energy`.
    pub fn body(&self, role: CreepRole, available_energy: u32) -> CreepBody {
        let energy = self.energy.map_or(available_energy, |energy| energy.min(available_energy));
        CreepBody::for_role(role, energy)
    }
}

/// The part of the bot that spawns creeps, keeps track of which are alive and assigns them to
/// clusters.
pub trait CreepClusters {
    /// Requests that the cluster is kept at `quantity` live creeps spawned with given options.
    /// Called each tick with the current target. Creeps above the target are not killed, but not
    /// replaced either.
    fn size_cluster(&mut self, key: ClusterKey, quantity: u32, options: SpawnOptions);

    /// Live creeps of the cluster, in a stable order.
    fn creeps(&self, key: ClusterKey) -> Vec<CreepInfo>;
}

/// Updates the target size of the cluster, computed from its current creeps, and returns these
/// creeps.
pub fn ensure_cluster_size<C, F>(clusters: &mut C, key: ClusterKey, options: SpawnOptions, quantity: F) -> Vec<CreepInfo>
where
    C: CreepClusters + ?Sized,
    F: FnOnce(&[CreepInfo]) -> u32,
{
    let creeps = clusters.creeps(key);
    let quantity = quantity(&creeps);
    if creeps.len() as u32 != quantity {
        trace!(
            "Sizing {} from {} to {} {} creeps with priority {}.",
            key,
            creeps.len(),
            quantity,
            key.role(),
            options.priority
        );
    }
    clusters.size_cluster(key, quantity, options);
    creeps
}

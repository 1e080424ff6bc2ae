use log::{debug, info};
use screeps::RoomName;
use serde::{Deserialize, Serialize};
use crate::config::MiningConfig;
use crate::consts::DEFAULT_RESERVER_COUNT;
use crate::errors::MiningError;
use crate::errors::MiningError::{DepotRoomLost, RoomVisibilityError};
use crate::mining::distance_cache::DistanceCache;
use crate::mining::mine_source::{mine_source, SourceMiningContext};
use crate::mining::remote_room::{reserve_room, scout_room};
use crate::priorities::MINING_PROCESS_PRIORITY;
use crate::spawning::creep_cluster::CreepClusters;
use crate::utils::priority::Priority;
use crate::utils::result_utils::ResultUtils;
use crate::world::world_view::WorldView;

/// Persistent state of a mining process.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MineProcessData {
    /// The owned room with the storage where the energy is delivered and creeps are spawned.
    pub room: RoomName,
    /// The room with the mined sources. `None` or `room` for local mining.
    #[serde(default)]
    pub mine: Option<RoomName>,
    /// Number of reservers kept around the controller of a remote room.
    #[serde(default = "default_reserver_count")]
    pub reserver_count: u32,
    #[serde(default)]
    pub distances: DistanceCache,
}

fn default_reserver_count() -> u32 {
    DEFAULT_RESERVER_COUNT
}

impl MineProcessData {
    pub fn local(room: RoomName) -> Self {
        Self {
            room,
            mine: None,
            reserver_count: DEFAULT_RESERVER_COUNT,
            distances: DistanceCache::default(),
        }
    }

    pub fn remote(room: RoomName, mine: RoomName, reserver_count: u32) -> Self {
        Self {
            room,
            mine: Some(mine),
            reserver_count,
            distances: DistanceCache::default(),
        }
    }

    /// The room with the mined sources when it is not the owned room.
    pub fn remote_room(&self) -> Option<RoomName> {
        self.mine.filter(|&mine| mine != self.room)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ProcessStatus {
    /// The process should be run again next tick.
    Running,
    /// The process has nothing more to do and should be removed.
    Finished,
}

/// Mines all sources in a room, local or remote, delivering the energy to the storage of an owned
/// room. Everything is decided anew each tick from the state of the world, so the process may be
/// skipped for any number of ticks.
#[derive(Debug, Clone)]
pub struct MineProcess {
    data: MineProcessData,
    config: MiningConfig,
}

impl MineProcess {
    pub fn new(data: MineProcessData, config: MiningConfig) -> Self {
        Self {
            data,
            config,
        }
    }

    pub fn descriptor(&self) -> String {
        match self.data.remote_room() {
            Some(mine) => format!("{} to {}", self.data.room, mine),
            None => self.data.room.to_string(),
        }
    }

    pub fn priority(&self) -> Priority {
        MINING_PROCESS_PRIORITY
    }

    /// The state to persist between global resets.
    pub fn data(&self) -> &MineProcessData {
        &self.data
    }

    /// Runs one tick of mining.
    pub fn run_once<W, C>(&mut self, world: &mut W, clusters: &mut C) -> ProcessStatus
    where
        W: WorldView + ?Sized,
        C: CreepClusters + ?Sized,
    {
        match self.run_tick(world, clusters) {
            Ok(()) => ProcessStatus::Running,
            Err(e) if e.is_fatal() => {
                info!("Stopping mining {}: {}.", self.descriptor(), e);
                ProcessStatus::Finished
            }
            Err(e) => {
                debug!("Mining {} waiting: {}.", self.descriptor(), e);
                ProcessStatus::Running
            }
        }
    }

    fn run_tick<W, C>(&mut self, world: &mut W, clusters: &mut C) -> Result<(), MiningError>
    where
        W: WorldView + ?Sized,
        C: CreepClusters + ?Sized,
    {
        let room_name = self.data.room;
        if !world.is_room_owned(room_name) {
            return Err(DepotRoomLost(room_name));
        }
        if !world.is_room_visible(room_name) {
            return Err(RoomVisibilityError(room_name));
        }

        let mine_room_name = match self.data.remote_room() {
            Some(mine_room_name) => {
                scout_room(world, clusters, room_name, mine_room_name, &self.config);
                if !world.is_room_visible(mine_room_name) {
                    return Err(RoomVisibilityError(mine_room_name));
                }
                reserve_room(world, clusters, room_name, mine_room_name, self.data.reserver_count, &self.config)
                    .warn_if_err(&format!("Failed to reserve {}", mine_room_name));
                mine_room_name
            }
            None => room_name,
        };

        let context = SourceMiningContext {
            room_name,
            mine_room_name,
            storage: world.storage(room_name),
            config: &self.config,
        };
        for source in world.sources(mine_room_name) {
            if let Err(e) = mine_source(world, clusters, &source, &context, &mut self.data.distances) {
                debug!("Not hauling from source {}: {}.", source.id, e);
            }
        }

        Ok(())
    }
}

use std::cell::Cell;
use rustc_hash::{FxHashMap, FxHashSet};
use screeps::{ObjectId, Position, RoomName};
use crate::creeps::creep_command::CreepCommand;
use crate::creeps::creep_info::CreepInfo;
use crate::creeps::creep_role::CreepRole;
use crate::errors::MiningError;
use crate::geometry::position_utils::PositionUtils;
use crate::spawning::creep_cluster::{ClusterKey, CreepClusters, SpawnOptions};
use crate::world::world_view::{
    ConstructionSiteData,
    ContainerData,
    ControllerData,
    PathSearch,
    SourceData,
    StorageData,
    WorldView,
};

pub const ROOM: &str = "W1N1";

pub fn room(name: &str) -> RoomName {
    RoomName::new(name).unwrap()
}

/// Position in the default test room.
pub fn pos(x: u8, y: u8) -> Position {
    Position::new_from_raw(x, y, room(ROOM))
}

pub fn object_id<T>(n: u32) -> ObjectId<T> {
    format!("5bbcab9b{:016x}", n).parse().unwrap()
}

pub fn creep(
    name: &str,
    role: CreepRole,
    pos: Position,
    ticks_to_live: Option<u32>,
    used_capacity: u32,
    store_capacity: u32,
) -> CreepInfo {
    CreepInfo::new(name.to_string(), role, pos, ticks_to_live, used_capacity, store_capacity)
}

pub fn source_at(n: u32, pos: Position, work_pos: Position, energy: u32) -> SourceData {
    SourceData::new(object_id(n), pos, work_pos, energy)
}

pub fn container_at(n: u32, pos: Position, energy: u32) -> ContainerData {
    ContainerData::new(object_id(n), pos, 250_000, 250_000, energy)
}

pub fn construction_site_at(n: u32, pos: Position) -> ConstructionSiteData {
    ConstructionSiteData::new(object_id(n), pos)
}

pub fn storage_at(n: u32, pos: Position) -> StorageData {
    StorageData::new(object_id(n), pos)
}

pub fn controller_at(n: u32, pos: Position, reservation_ticks_to_end: Option<u32>) -> ControllerData {
    ControllerData::new(object_id(n), pos, reservation_ticks_to_end)
}

/// In-memory world recording everything the mining code does to it.
#[derive(Debug, Default)]
pub struct FakeWorld {
    pub visible_rooms: FxHashSet<RoomName>,
    pub owned_rooms: FxHashSet<RoomName>,
    pub sources: FxHashMap<RoomName, Vec<SourceData>>,
    pub containers: Vec<ContainerData>,
    pub construction_sites: Vec<ConstructionSiteData>,
    pub storages: FxHashMap<RoomName, StorageData>,
    pub controllers: FxHashMap<RoomName, ControllerData>,
    pub steppable_adjacent: u32,
    pub path: Option<PathSearch>,
    pub path_searches: Cell<u32>,
    pub created_sites: Vec<Position>,
    pub commands: Vec<(String, CreepCommand)>,
    /// Creeps whose commands are rejected.
    pub failing_creeps: FxHashSet<String>,
}

impl FakeWorld {
    /// A world with the given room owned and visible.
    pub fn with_owned_room(room_name: RoomName) -> Self {
        let mut world = Self::default();
        world.visible_rooms.insert(room_name);
        world.owned_rooms.insert(room_name);
        world
    }

    pub fn commands_of(&self, creep_name: &str) -> Vec<CreepCommand> {
        self.commands
            .iter()
            .filter(|(name, _)| name == creep_name)
            .map(|(_, command)| *command)
            .collect()
    }
}

impl WorldView for FakeWorld {
    fn is_room_visible(&self, room_name: RoomName) -> bool {
        self.visible_rooms.contains(&room_name)
    }

    fn is_room_owned(&self, room_name: RoomName) -> bool {
        self.owned_rooms.contains(&room_name)
    }

    fn sources(&self, room_name: RoomName) -> Vec<SourceData> {
        self.sources.get(&room_name).cloned().unwrap_or_default()
    }

    fn container_at(&self, pos: Position) -> Option<ContainerData> {
        self.containers.iter().find(|container| container.pos == pos).copied()
    }

    fn construction_site_at(&self, pos: Position) -> Option<ConstructionSiteData> {
        self.construction_sites.iter().find(|site| site.pos == pos).copied()
    }

    fn storage(&self, room_name: RoomName) -> Option<StorageData> {
        self.storages.get(&room_name).copied()
    }

    fn controller(&self, room_name: RoomName) -> Option<ControllerData> {
        self.controllers.get(&room_name).copied()
    }

    fn steppable_adjacent_count(&self, _pos: Position) -> u32 {
        self.steppable_adjacent
    }

    fn path_length(&self, from: Position, to: Position, _max_ops: u32) -> PathSearch {
        self.path_searches.set(self.path_searches.get() + 1);
        self.path.unwrap_or_else(|| PathSearch::new(from.get_range_to(to), false))
    }

    fn create_container_site(&mut self, pos: Position) -> Result<(), MiningError> {
        if self.construction_site_at(pos).is_some() {
            return Err(MiningError::ConstructionSiteFailed);
        }
        self.created_sites.push(pos);
        Ok(())
    }

    fn issue_command(&mut self, creep_name: &str, command: CreepCommand) -> Result<(), MiningError> {
        if self.failing_creeps.contains(creep_name) {
            return Err(MiningError::CommandFailed);
        }
        self.commands.push((creep_name.to_string(), command));
        Ok(())
    }
}

/// In-memory creep clusters recording sizing requests.
#[derive(Debug, Default)]
pub struct FakeClusters {
    pub creeps: FxHashMap<ClusterKey, Vec<CreepInfo>>,
    pub requests: Vec<(ClusterKey, u32, SpawnOptions)>,
}

impl FakeClusters {
    /// The last requested size and spawn options of the cluster.
    pub fn requested(&self, key: ClusterKey) -> Option<(u32, SpawnOptions)> {
        self.requests
            .iter()
            .rev()
            .find(|(requested_key, _, _)| *requested_key == key)
            .map(|&(_, quantity, options)| (quantity, options))
    }
}

impl CreepClusters for FakeClusters {
    fn size_cluster(&mut self, key: ClusterKey, quantity: u32, options: SpawnOptions) {
        self.requests.push((key, quantity, options));
    }

    fn creeps(&self, key: ClusterKey) -> Vec<CreepInfo> {
        self.creeps.get(&key).cloned().unwrap_or_default()
    }
}

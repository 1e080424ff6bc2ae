use log::debug;
use rustc_hash::FxHashMap;
use screeps::{ObjectId, Position, Source};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use crate::geometry::position_utils::PositionUtils;
use crate::world::world_view::{SourceData, WorldView};

/// Distances from the storage to sources, measured once per source and kept for the lifetime of
/// the mining process. Terrain does not change, so the entries are never invalidated.
#[serde_as]
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct DistanceCache {
    #[serde_as(as = "Vec<(_, _)>")]
    distances: FxHashMap<ObjectId<Source>, u32>,
}

impl DistanceCache {
    /// Length of the path from `origin` to the source. The path is searched only the first time.
    /// When the search runs out of operations, the length of the partial path is used.
    pub fn distance_to<W>(&mut self, world: &W, origin: Position, source: &SourceData, max_ops: u32) -> u32
    where
        W: WorldView + ?Sized,
    {
        if let Some(&distance) = self.distances.get(&source.id) {
            return distance;
        }

        let search = world.path_length(origin, source.pos, max_ops);
        if search.incomplete {
            debug!(
                "Path from {} to source {} not found within {} operations. Using partial length {}.",
                origin.f(),
                source.id,
                max_ops,
                search.length
            );
        } else {
            debug!("Distance from {} to source {} is {}.", origin.f(), source.id, search.length);
        }
        self.distances.insert(source.id, search.length);
        search.length
    }

    pub fn get(&self, source_id: ObjectId<Source>) -> Option<u32> {
        self.distances.get(&source_id).copied()
    }
}

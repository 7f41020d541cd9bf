//! Spatial Index Module
//!
//! R-tree over the rooms and tables on the canvas, used to route a
//! pointer-down to the entity under the cursor in O(log n).

use crate::types::{RoomId, TableId};
use rstar::{RTree, RTreeObject, AABB};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The entity a canvas point resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum HitTarget {
    Room(RoomId),
    Table(TableId),
}

/// Bounding box of one entity, in canvas coordinates.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub target: HitTarget,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(target: HitTarget, position: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            target,
            min_x: position.0,
            min_y: position.1,
            max_x: position.0 + size.0,
            max_y: position.1 + size.1,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
    }
}

/// Spatial index for canvas entities.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<HitTarget, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert an entity, replacing any previous box for the same target.
    pub fn insert(&mut self, target: HitTarget, position: (f32, f32), size: (f32, f32)) {
        if let Some(old_entry) = self.entries.remove(&target) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(target, position, size);
        self.tree.insert(entry);
        self.entries.insert(target, entry);
    }

    /// Move an entity whose size is unchanged.
    pub fn update_position(&mut self, target: HitTarget, position: (f32, f32)) {
        let Some(entry) = self.entries.get(&target) else {
            return;
        };
        let size = (entry.max_x - entry.min_x, entry.max_y - entry.min_y);
        self.insert(target, position, size);
    }

    /// All entities whose box contains the point, in no particular order.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<HitTarget> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.target)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<I>(&mut self, items: I)
    where
        I: Iterator<Item = (HitTarget, (f32, f32), (f32, f32))>,
    {
        let entries: Vec<SpatialEntry> = items
            .map(|(target, pos, size)| SpatialEntry::new(target, pos, size))
            .collect();

        self.entries = entries.iter().map(|e| (e.target, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}

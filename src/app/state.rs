//! Editor state - the LayoutEditor struct and its constructors.

use crate::input::DragState;
use crate::selection::SelectionState;
use crate::settings::EditorSettings;
use crate::spatial_index::{HitTarget, SpatialIndex};
use crate::store::LayoutStore;
use crate::types::{RoomId, TableId};

/// The interactive layout model.
///
/// Owns the three independently lifecycled slots (entities, selection,
/// drag target) plus the hit-test index derived from the entities. All
/// mutation goes through the command and pointer methods.
pub struct LayoutEditor {
    /// Rooms and tables
    pub(crate) store: LayoutStore,
    /// Selected room and table
    pub(crate) selection: SelectionState,
    /// Drag state machine
    pub(crate) drag: DragState,
    /// Hit-test index, kept in sync with entity geometry
    pub(crate) hit_index: SpatialIndex,
}

impl LayoutEditor {
    /// A fresh editor holding the main hall, with nothing selected.
    pub fn new(settings: EditorSettings) -> Self {
        Self::from_store(LayoutStore::with_initial_room(settings))
    }

    /// An editor with no rooms at all.
    pub fn empty(settings: EditorSettings) -> Self {
        Self::from_store(LayoutStore::new(settings))
    }

    fn from_store(store: LayoutStore) -> Self {
        let mut editor = Self {
            store,
            selection: SelectionState::new(),
            drag: DragState::default(),
            hit_index: SpatialIndex::new(),
        };
        editor.rebuild_hit_index();
        editor
    }

    pub fn settings(&self) -> &EditorSettings {
        self.store.defaults()
    }

    pub(crate) fn rebuild_hit_index(&mut self) {
        let table_size = self.store.defaults().table_size;
        let rooms = self
            .store
            .rooms()
            .iter()
            .map(|room| (HitTarget::Room(room.id), (room.x, room.y), room.size()));
        let tables = self
            .store
            .tables()
            .iter()
            .map(|table| (HitTarget::Table(table.id), (table.x, table.y), (table_size, table_size)));
        self.hit_index.rebuild(rooms.chain(tables));
    }

    pub(crate) fn index_room(&mut self, id: RoomId) {
        if let Some(room) = self.store.room(id) {
            self.hit_index
                .insert(HitTarget::Room(id), (room.x, room.y), room.size());
        }
    }

    pub(crate) fn index_table(&mut self, id: TableId) {
        let table_size = self.store.defaults().table_size;
        if let Some(table) = self.store.table(id) {
            self.hit_index.insert(
                HitTarget::Table(id),
                (table.x, table.y),
                (table_size, table_size),
            );
        }
    }
}

impl Default for LayoutEditor {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

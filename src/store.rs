//! Entity store - the authoritative room and table collections.
//!
//! Collections are shared snapshots (`Rc<Vec<_>>`). Every successful mutation
//! installs a freshly built collection instead of editing in place, so a view
//! holding an older snapshot can detect change with [`Rc::ptr_eq`]. Updates
//! addressed to an unknown id leave the collection, and its identity, alone.

use crate::constants::{INITIAL_ROOM_NAME, INITIAL_ROOM_POSITION, INITIAL_ROOM_SIZE, ROOM_NAME_PREFIX};
use crate::settings::EditorSettings;
use crate::types::{Room, RoomId, SeatCount, Table, TableId};
use std::rc::Rc;
use tracing::{debug, trace};

pub struct LayoutStore {
    rooms: Rc<Vec<Room>>,
    tables: Rc<Vec<Table>>,
    next_room_id: u64,
    next_table_id: u64,
    defaults: EditorSettings,
}

impl LayoutStore {
    /// Create an empty store. Ids start at 1.
    pub fn new(defaults: EditorSettings) -> Self {
        Self {
            rooms: Rc::new(Vec::new()),
            tables: Rc::new(Vec::new()),
            next_room_id: 1,
            next_table_id: 1,
            defaults,
        }
    }

    /// Create a store seeded with the main hall as room 1.
    pub fn with_initial_room(defaults: EditorSettings) -> Self {
        let mut store = Self::new(defaults);
        store.insert_room(
            INITIAL_ROOM_NAME.to_string(),
            INITIAL_ROOM_SIZE,
            INITIAL_ROOM_POSITION,
        );
        store
    }

    pub fn defaults(&self) -> &EditorSettings {
        &self.defaults
    }

    /// Current room snapshot, in creation order.
    pub fn rooms(&self) -> &Rc<Vec<Room>> {
        &self.rooms
    }

    /// Current table snapshot, in creation order.
    pub fn tables(&self) -> &Rc<Vec<Table>> {
        &self.tables
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    pub fn table(&self, id: TableId) -> Option<&Table> {
        self.tables.iter().find(|table| table.id == id)
    }

    /// Append a room with the configured default size and position.
    ///
    /// The name is "Room N" where N is the room count after insertion.
    pub fn create_room(&mut self) -> RoomId {
        let name = format!("{} {}", ROOM_NAME_PREFIX, self.rooms.len() + 1);
        let size = self.defaults.room_size;
        let position = self.defaults.room_position;
        self.insert_room(name, size, position)
    }

    /// Append a room with explicit geometry.
    pub fn insert_room(&mut self, name: String, size: (f32, f32), position: (f32, f32)) -> RoomId {
        let id = RoomId(self.next_room_id);
        self.next_room_id += 1;

        debug!(room = %id, name = %name, "Room created");
        append(
            &mut self.rooms,
            Room {
                id,
                name,
                width: size.0,
                height: size.1,
                x: position.0,
                y: position.1,
            },
        );
        id
    }

    /// Append a table under `target`.
    ///
    /// Without a target room this does nothing and returns `None`: every
    /// table must record the room it was created in.
    pub fn create_table(&mut self, target: Option<RoomId>) -> Option<TableId> {
        let Some(room_id) = target else {
            trace!("Add table ignored: no room selected");
            return None;
        };

        let id = TableId(self.next_table_id);
        self.next_table_id += 1;

        debug!(table = %id, room = %room_id, "Table created");
        append(
            &mut self.tables,
            Table {
                id,
                x: self.defaults.table_position.0,
                y: self.defaults.table_position.1,
                seats: self.defaults.default_seats,
                room_id,
            },
        );
        Some(id)
    }

    /// Move a room's top-left corner. Returns false if the id is unknown.
    pub fn update_room_position(&mut self, id: RoomId, x: f32, y: f32) -> bool {
        let updated = replace_where(&mut self.rooms, |room| room.id == id, |room| {
            room.x = x;
            room.y = y;
        });
        if !updated {
            trace!(room = %id, "Position update for unknown room ignored");
        }
        updated
    }

    /// Move a table's top-left corner. Returns false if the id is unknown.
    pub fn update_table_position(&mut self, id: TableId, x: f32, y: f32) -> bool {
        let updated = replace_where(&mut self.tables, |table| table.id == id, |table| {
            table.x = x;
            table.y = y;
        });
        if !updated {
            trace!(table = %id, "Position update for unknown table ignored");
        }
        updated
    }

    /// Replace a table's seat count. Returns false if the id is unknown.
    pub fn update_seats(&mut self, id: TableId, seats: SeatCount) -> bool {
        let updated = replace_where(&mut self.tables, |table| table.id == id, |table| {
            table.seats = seats;
        });
        if updated {
            debug!(table = %id, seats = %seats, "Seats updated");
        } else {
            trace!(table = %id, "Seat update for unknown table ignored");
        }
        updated
    }
}

fn append<T: Clone>(items: &mut Rc<Vec<T>>, item: T) {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend(items.iter().cloned());
    next.push(item);
    *items = Rc::new(next);
}

fn replace_where<T: Clone>(
    items: &mut Rc<Vec<T>>,
    matches: impl Fn(&T) -> bool,
    update: impl FnOnce(&mut T),
) -> bool {
    let Some(index) = items.iter().position(matches) else {
        return false;
    };
    let mut next: Vec<T> = items.as_ref().clone();
    update(&mut next[index]);
    *items = Rc::new(next);
    true
}

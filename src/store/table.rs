use std::collections::HashMap;

use super::traits::StoredRecord;

/// One entity table: records keyed by id, plus the next id to hand out.
///
/// Ids start at 1 and are never reused, even after a removal.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: HashMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            next_id: 1,
        }
    }
}

impl<T: StoredRecord + Clone> Table<T> {
    /// Assigns the next id, builds the record with it and stores it.
    pub fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;

        let record = build(id);
        debug_assert_eq!(record.id(), id, "record built with a foreign id");
        self.rows.insert(id, record.clone());
        record
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.rows.get(&id)
    }

    /// Applies `merge` to the stored record and returns the updated copy.
    pub fn update(&mut self, id: i64, merge: impl FnOnce(&mut T)) -> Option<T> {
        let record = self.rows.get_mut(&id)?;
        merge(record);
        Some(record.clone())
    }

    pub fn remove(&mut self, id: i64) -> Option<T> {
        self.rows.remove(&id)
    }

    /// All records ordered by id.
    pub fn all(&self) -> Vec<T> {
        self.sorted(|_| true)
    }

    /// Records whose `project_id` equals `project_id`, ordered by id.
    pub fn for_project(&self, project_id: i64) -> Vec<T> {
        self.sorted(|record| record.project_id() == Some(project_id))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn sorted(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        let mut out: Vec<T> = self.rows.values().filter(|record| keep(record)).cloned().collect();
        out.sort_by_key(|record| record.id());
        out
    }
}

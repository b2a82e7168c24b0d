use std::collections::HashMap;

use crate::{Cell, TermInt};

/// Which cells the snake body currently covers, keyed by row then column.
///
/// A cell is counted once per body segment on it, so a snake that grows into
/// its own body keeps the cell occupied until every segment there is gone.
/// Food is never recorded here.
#[derive(Debug, Default)]
pub struct OccupancyGrid {
    rows: HashMap<TermInt, HashMap<TermInt, usize>>,
}

impl OccupancyGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, (x, y): Cell) {
        *self.rows.entry(y).or_default().entry(x).or_insert(0) += 1;
    }

    pub fn clear(&mut self, (x, y): Cell) {
        if let Some(row) = self.rows.get_mut(&y) {
            if let Some(count) = row.get_mut(&x) {
                *count -= 1;
                if *count == 0 {
                    row.remove(&x);
                }
            }
            if row.is_empty() {
                self.rows.remove(&y);
            }
        }
    }

    pub fn is_occupied(&self, (x, y): Cell) -> bool {
        self.rows.get(&y).map_or(false, |row| row.contains_key(&x))
    }

    /// Number of distinct occupied cells.
    pub fn len(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

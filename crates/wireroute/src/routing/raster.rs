use std::collections::HashSet;

use super::types::{Direction, GridCell, Rect, quantize};

/// Grid cells covered by at least one inflated obstacle.
#[derive(Debug, Clone, Default)]
pub struct BlockedCells {
    cells: HashSet<GridCell>,
}

impl BlockedCells {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_blocked(&self, cell: GridCell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn block(&mut self, cell: GridCell) {
        self.cells.insert(cell);
    }

    /// Mark a cell free. Returns whether it was blocked.
    pub fn unblock(&mut self, cell: GridCell) -> bool {
        self.cells.remove(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.cells.iter().copied()
    }

    /// Whether every 4-neighbor of `cell` is blocked.
    pub fn is_sealed(&self, cell: GridCell) -> bool {
        Direction::ALL
            .iter()
            .all(|&dir| self.is_blocked(cell.step(dir)))
    }
}

/// Add every cell covered by the obstacles, grown by `inflate` pixels, to `blocked`.
///
/// Bounds are floor-quantized and the resulting cell range is inclusive on both ends,
/// so a rectangle edge lying exactly on a grid line also blocks the cell beyond it.
pub fn rasterize(obstacles: &[Rect], grid_size: f64, inflate: f64, blocked: &mut BlockedCells) {
    for rect in obstacles {
        let min_col = quantize(rect.x - inflate, grid_size);
        let max_col = quantize(rect.x + rect.width + inflate, grid_size);
        let min_row = quantize(rect.y - inflate, grid_size);
        let max_row = quantize(rect.y + rect.height + inflate, grid_size);

        for col in min_col..=max_col {
            for row in min_row..=max_row {
                blocked.block(GridCell::new(col, row));
            }
        }
    }
}

/// Free a straight exit for a terminal whose neighbors are all blocked.
///
/// Walks outward in each direction until the first free cell and unblocks the shortest
/// run found; on equal length the earlier direction in [`Direction::ALL`] wins.
/// Returns the freed cells in walking order (empty when the terminal was not sealed).
pub fn escape_pin(terminal: GridCell, blocked: &mut BlockedCells) -> Vec<GridCell> {
    if !blocked.is_sealed(terminal) {
        return Vec::new();
    }

    let mut best: Option<Vec<GridCell>> = None;
    for dir in Direction::ALL {
        let mut run = Vec::new();
        let mut cell = terminal.step(dir);
        // The blocked set is finite, so every walk ends at a free cell.
        while blocked.is_blocked(cell) {
            run.push(cell);
            if best.as_ref().is_some_and(|b| run.len() >= b.len()) {
                break;
            }
            cell = cell.step(dir);
        }
        if best.as_ref().is_none_or(|b| run.len() < b.len()) {
            best = Some(run);
        }
    }

    let run = best.unwrap_or_default();
    for &cell in &run {
        blocked.unblock(cell);
    }
    run
}

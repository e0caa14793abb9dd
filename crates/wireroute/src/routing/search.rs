use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use log::{debug, trace};

use super::raster::BlockedCells;
use super::types::{Direction, GridCell};

/// State key for the node table: a cell together with how the search arrived there.
///
/// Keying on the arrival direction lets two paths that reach the same cell facing
/// different ways coexist, which keeps the result optimal under the bend penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct StateKey {
    cell: GridCell,
    arrival: Option<Direction>,
}

/// A* search node, stored in the arena.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub cell: GridCell,
    /// Cost so far: steps plus bend penalties.
    pub g: f64,
    /// `g` plus the Manhattan estimate to the goal.
    pub f: f64,
    /// Direction of the move that reached this node; `None` for the start.
    pub arrival: Option<Direction>,
    /// Arena index of the predecessor.
    pub parent: Option<usize>,
}

/// Frontier entry. `BinaryHeap` is a max-heap, so the ordering is reversed:
/// lowest `f` first, then earliest discovery.
#[derive(Debug)]
struct FrontierEntry {
    f: f64,
    seq: u64,
    node: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .partial_cmp(&self.f)
            .unwrap_or(Ordering::Equal)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A successful search: the node arena and the index of the node that reached the goal.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub nodes: Vec<SearchNode>,
    pub goal: usize,
    pub expanded: usize,
}

impl SearchResult {
    /// Total cost of the path found.
    pub fn cost(&self) -> f64 {
        self.nodes[self.goal].g
    }
}

/// Inclusive cell window the search may visit.
///
/// The bounding box of every blocked cell and both terminals, grown by one cell. The ring
/// just outside the obstacles is always free and any path that strays further out can be
/// clamped back onto it without becoming longer or gaining bends, so the window never
/// hides a cheaper route. It also makes the search space finite, so an enclosed goal
/// ends with an empty frontier.
#[derive(Debug, Clone, Copy)]
struct SearchBounds {
    min: GridCell,
    max: GridCell,
}

impl SearchBounds {
    fn around(start: GridCell, goal: GridCell, blocked: &BlockedCells) -> Self {
        let mut min = GridCell::new(start.col.min(goal.col), start.row.min(goal.row));
        let mut max = GridCell::new(start.col.max(goal.col), start.row.max(goal.row));
        for cell in blocked.iter() {
            min.col = min.col.min(cell.col);
            min.row = min.row.min(cell.row);
            max.col = max.col.max(cell.col);
            max.row = max.row.max(cell.row);
        }
        Self {
            min: GridCell::new(min.col.saturating_sub(1), min.row.saturating_sub(1)),
            max: GridCell::new(max.col.saturating_add(1), max.row.saturating_add(1)),
        }
    }

    fn contains(&self, cell: GridCell) -> bool {
        (self.min.col..=self.max.col).contains(&cell.col)
            && (self.min.row..=self.max.row).contains(&cell.row)
    }
}

fn heuristic(from: GridCell, to: GridCell) -> f64 {
    from.manhattan_to(to) as f64
}

/// Find the cheapest 4-connected path from `start` to `goal` that avoids `blocked`.
///
/// Each step costs 1, plus `bend_penalty` when its direction differs from the direction
/// used to reach the current cell. The caller is responsible for making sure the start
/// and goal cells are not in `blocked`.
///
/// Returns `None` when the frontier runs dry without reaching the goal.
/// The search never leaves the bounding box of the blocked cells and terminals
/// grown by one cell.
pub fn find_path(
    start: GridCell,
    goal: GridCell,
    blocked: &BlockedCells,
    bend_penalty: f64,
) -> Option<SearchResult> {
    trace!("[search] start={start} goal={goal} blocked={}", blocked.len());

    let bounds = SearchBounds::around(start, goal, blocked);
    let mut nodes: Vec<SearchNode> = Vec::new();
    let mut best: HashMap<StateKey, usize> = HashMap::new();
    let mut open = BinaryHeap::new();
    let mut seq: u64 = 0;

    let start_key = StateKey {
        cell: start,
        arrival: None,
    };
    nodes.push(SearchNode {
        cell: start,
        g: 0.0,
        f: heuristic(start, goal),
        arrival: None,
        parent: None,
    });
    best.insert(start_key, 0);
    open.push(FrontierEntry {
        f: nodes[0].f,
        seq,
        node: 0,
    });

    let mut expanded = 0usize;

    while let Some(entry) = open.pop() {
        let current_idx = entry.node;
        let current = nodes[current_idx].clone();
        let current_key = StateKey {
            cell: current.cell,
            arrival: current.arrival,
        };

        // A cheaper route to this state was queued after this entry.
        if best.get(&current_key) != Some(&current_idx) {
            continue;
        }

        if current.cell == goal {
            debug!(
                "[search] reached goal {goal} cost={} expanded={expanded}",
                current.g
            );
            return Some(SearchResult {
                nodes,
                goal: current_idx,
                expanded,
            });
        }

        expanded += 1;

        for dir in Direction::ALL {
            let neighbor = current.cell.step(dir);
            if !bounds.contains(neighbor) || blocked.is_blocked(neighbor) {
                continue;
            }

            let turn_cost = match current.arrival {
                Some(arrival) if arrival != dir => bend_penalty,
                _ => 0.0,
            };
            let g = current.g + 1.0 + turn_cost;

            let key = StateKey {
                cell: neighbor,
                arrival: Some(dir),
            };
            if let Some(&existing) = best.get(&key) {
                if g >= nodes[existing].g {
                    continue;
                }
            }

            let f = g + heuristic(neighbor, goal);
            let idx = nodes.len();
            nodes.push(SearchNode {
                cell: neighbor,
                g,
                f,
                arrival: Some(dir),
                parent: Some(current_idx),
            });
            best.insert(key, idx);

            seq += 1;
            open.push(FrontierEntry { f, seq, node: idx });
        }
    }

    debug!("[search] no path from {start} to {goal} after {expanded} expansions");
    None
}

pub mod path;
pub mod raster;
pub mod search;
pub mod types;

#[cfg(test)]
mod tests;

use log::trace;

use path::{reconstruct, simplify};
use raster::{BlockedCells, escape_pin, rasterize};
use search::find_path;
use types::{GridCell, Point, Rect, RouteError, RouteOptions};

/// Route a single wire between two pixel positions, avoiding the obstacles.
///
/// Both endpoints are snapped to the grid and the search runs between their cells, so the
/// returned polyline starts and ends at the centers of those cells. The cells holding the
/// endpoints are always free, even when they fall inside an inflated obstacle: they are the
/// component's own connection points.
///
/// Every call builds its own blocked set and node table. Calls share nothing and may run
/// in parallel.
///
/// # Arguments
/// * `start`, `end` — Connection points in pixel space.
/// * `obstacles` — Component footprints in the same pixel space.
/// * `options` — Grid resolution, bend penalty, clearance and pin escape.
///
/// # Returns
/// `Ok(Some(points))` with the corners of the route (at least two points),
/// `Ok(None)` when the goal cannot be reached, or an error for invalid options, an
/// endpoint or obstacle that is not finite, or coordinates too far out to address on the grid.
pub fn route(
    start: Point,
    end: Point,
    obstacles: &[Rect],
    options: &RouteOptions,
) -> Result<Option<Vec<Point>>, RouteError> {
    options.validate()?;
    check_point("start", start, options.grid_size)?;
    check_point("end", end, options.grid_size)?;
    check_obstacles(obstacles, options)?;
    Ok(route_validated(start, end, obstacles, options))
}

/// [`route`] for options and endpoints that have already been checked.
pub(crate) fn route_validated(
    start: Point,
    end: Point,
    obstacles: &[Rect],
    options: &RouteOptions,
) -> Option<Vec<Point>> {
    let grid = options.grid_size;
    let source = GridCell::from_point(start, grid);
    let target = GridCell::from_point(end, grid);

    let mut blocked = BlockedCells::new();
    rasterize(obstacles, grid, options.inflate, &mut blocked);
    blocked.unblock(source);
    blocked.unblock(target);

    if options.escape_pins {
        for terminal in [source, target] {
            let freed = escape_pin(terminal, &mut blocked);
            if !freed.is_empty() {
                trace!("[route] escaped pin {terminal} through {} cells", freed.len());
            }
        }
    }

    let result = find_path(source, target, &blocked, options.bend_penalty)?;
    Some(simplify(&reconstruct(&result, grid)))
}

/// Largest cell index, per axis, the router accepts. Keeps the search window and
/// heuristic arithmetic well inside `i32`.
const MAX_CELL: f64 = (1u32 << 30) as f64;

fn on_grid(value: f64, grid_size: f64) -> bool {
    (value / grid_size).abs() < MAX_CELL
}

pub(crate) fn check_point(
    which: &'static str,
    p: Point,
    grid_size: f64,
) -> Result<(), RouteError> {
    let reason = if !p.is_finite() {
        "is not finite"
    } else if !on_grid(p.x, grid_size) || !on_grid(p.y, grid_size) {
        "is outside the routable grid"
    } else {
        return Ok(());
    };
    Err(RouteError::InvalidPoint {
        which,
        x: p.x,
        y: p.y,
        reason,
    })
}

/// Reject obstacles with non-finite fields or inflated edges beyond the grid.
pub(crate) fn check_obstacles(
    obstacles: &[Rect],
    options: &RouteOptions,
) -> Result<(), RouteError> {
    for (index, rect) in obstacles.iter().enumerate() {
        let fields = [rect.x, rect.y, rect.width, rect.height];
        let reason = if !fields.iter().all(|v| v.is_finite()) {
            "is not finite"
        } else {
            let grown = rect.inflated(options.inflate);
            let edges = [
                grown.x,
                grown.y,
                grown.x + grown.width,
                grown.y + grown.height,
            ];
            if edges.iter().all(|&v| on_grid(v, options.grid_size)) {
                continue;
            }
            "is outside the routable grid"
        };
        return Err(RouteError::InvalidObstacle {
            index,
            rect: *rect,
            reason,
        });
    }
    Ok(())
}

mod bends;
mod invalid;

use super::path::{bend_count, path_length};
use super::raster::{BlockedCells, escape_pin, rasterize};
use super::route;
use super::types::{GridCell, Point, Rect, RouteOptions};

/// Helper to create a Point.
fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Helper to create a Rect.
fn rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::new(x, y, width, height)
}

/// Obstacle that rasterizes to exactly the grid cell `(col, row)` with a 10 px grid and
/// no inflation.
fn cell_block(col: i32, row: i32) -> Rect {
    Rect::new(col as f64 * 10.0 + 2.0, row as f64 * 10.0 + 2.0, 5.0, 5.0)
}

/// Helper to create RouteOptions.
fn options(grid_size: f64, bend_penalty: f64, inflate: f64) -> RouteOptions {
    RouteOptions {
        grid_size,
        bend_penalty,
        inflate,
        escape_pins: false,
    }
}

/// Route and assert that a path was found.
fn expect_route(start: Point, end: Point, obstacles: &[Rect], opts: &RouteOptions) -> Vec<Point> {
    match route(start, end, obstacles, opts) {
        Ok(Some(points)) => points,
        Ok(None) => panic!("no route from {start} to {end}"),
        Err(e) => panic!("route from {start} to {end} failed: {e}"),
    }
}

/// Route and assert that the goal was reported unreachable.
fn expect_no_route(start: Point, end: Point, obstacles: &[Rect], opts: &RouteOptions) {
    match route(start, end, obstacles, opts) {
        Ok(None) => {}
        Ok(Some(points)) => panic!("expected no route, got {points:?}"),
        Err(e) => panic!("expected no route, got error: {e}"),
    }
}

/// Assert every segment is horizontal or vertical.
fn assert_orthogonal(points: &[Point]) {
    for w in points.windows(2) {
        assert!(
            w[0].x == w[1].x || w[0].y == w[1].y,
            "diagonal segment {} -> {}",
            w[0],
            w[1]
        );
    }
}

/// Assert the path crosses no blocked cell, walking every segment cell by cell.
///
/// The blocked set is built the way the router builds it, including the freed terminal
/// cells and, with `escape_pins`, their carved exits.
fn assert_clear_of(points: &[Point], obstacles: &[Rect], opts: &RouteOptions) {
    let grid = opts.grid_size;
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return;
    };
    let source = GridCell::from_point(first, grid);
    let target = GridCell::from_point(last, grid);

    let mut blocked = BlockedCells::new();
    rasterize(obstacles, grid, opts.inflate, &mut blocked);
    blocked.unblock(source);
    blocked.unblock(target);
    if opts.escape_pins {
        escape_pin(source, &mut blocked);
        escape_pin(target, &mut blocked);
    }

    for w in points.windows(2) {
        let to = GridCell::from_point(w[1], grid);
        let mut cell = GridCell::from_point(w[0], grid);
        loop {
            assert!(
                !blocked.is_blocked(cell),
                "segment {} -> {} crosses blocked cell {cell}",
                w[0],
                w[1]
            );
            if cell == to {
                break;
            }
            cell = GridCell::new(
                cell.col + (to.col - cell.col).signum(),
                cell.row + (to.row - cell.row).signum(),
            );
        }
    }
}

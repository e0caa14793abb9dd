use super::search::SearchResult;
use super::types::Point;

/// Walk the parent links from the goal node back to the start and return the cell
/// centers in travel order, start first.
///
/// A path that never left its start cell still yields two points, so callers can
/// always draw it as a polyline.
pub fn reconstruct(result: &SearchResult, grid_size: f64) -> Vec<Point> {
    let mut points = Vec::new();
    let mut cursor = Some(result.goal);
    while let Some(idx) = cursor {
        let node = &result.nodes[idx];
        points.push(node.cell.center(grid_size));
        cursor = node.parent;
    }
    points.reverse();

    if points.len() == 1 {
        points.push(points[0]);
    }
    points
}

/// Drop interior points that are collinear with their neighbors, keeping the endpoints
/// and every true corner.
///
/// Points come from integer multiples of the grid size, so the cross-product test is
/// exact. Sequences of two points or fewer are returned unchanged.
pub fn simplify(points: &[Point]) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity(points.len());
    out.push(points[0]);
    for w in points.windows(3) {
        let (curr, next) = (w[1], w[2]);
        let prev = out[out.len() - 1];
        let dx1 = curr.x - prev.x;
        let dy1 = curr.y - prev.y;
        let dx2 = next.x - curr.x;
        let dy2 = next.y - curr.y;
        if dx1 * dy2 == dy1 * dx2 {
            continue;
        }
        out.push(curr);
    }
    out.push(points[points.len() - 1]);
    out
}

/// Total Manhattan length of a polyline, in pixels.
pub fn path_length(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|w| (w[1].x - w[0].x).abs() + (w[1].y - w[0].y).abs())
        .sum()
}

/// Number of direction changes along an axis-aligned polyline.
///
/// Zero-length segments are skipped, so repeated points do not count as bends.
pub fn bend_count(points: &[Point]) -> usize {
    let mut bends = 0;
    let mut last_horizontal: Option<bool> = None;
    for w in points.windows(2) {
        let dx = w[1].x - w[0].x;
        let dy = w[1].y - w[0].y;
        if dx == 0.0 && dy == 0.0 {
            continue;
        }
        let horizontal = dy == 0.0;
        if last_horizontal.is_some_and(|h| h != horizontal) {
            bends += 1;
        }
        last_horizontal = Some(horizontal);
    }
    bends
}

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A position on the canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Axis-aligned obstacle rectangle. `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The rectangle grown by `margin` on every side.
    pub fn inflated(&self, margin: f64) -> Rect {
        Rect {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + 2.0 * margin,
            height: self.height + 2.0 * margin,
        }
    }

    /// Whether `p` lies inside or on the border.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

/// Integer grid coordinate: `floor(pixel / grid_size)` on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    pub col: i32,
    pub row: i32,
}

impl GridCell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Quantize a pixel position to the cell containing it.
    pub fn from_point(p: Point, grid_size: f64) -> Self {
        Self {
            col: quantize(p.x, grid_size),
            row: quantize(p.y, grid_size),
        }
    }

    /// Pixel position of this cell's center.
    pub fn center(self, grid_size: f64) -> Point {
        Point {
            x: self.col as f64 * grid_size + grid_size / 2.0,
            y: self.row as f64 * grid_size + grid_size / 2.0,
        }
    }

    /// Step one cell in the given direction.
    pub fn step(self, dir: Direction) -> Self {
        let (dc, dr) = dir.delta();
        Self {
            col: self.col.saturating_add(dc),
            row: self.row.saturating_add(dr),
        }
    }

    /// Manhattan distance to another cell.
    pub fn manhattan_to(self, other: GridCell) -> u32 {
        self.col
            .abs_diff(other.col)
            .saturating_add(self.row.abs_diff(other.row))
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

/// Floor-division of a pixel coordinate by the grid size.
pub fn quantize(value: f64, grid_size: f64) -> i32 {
    (value / grid_size).floor() as i32
}

/// Cardinal direction of travel. Rows grow downward, as on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in neighbor expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Column and row offset of one step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Router configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteOptions {
    /// Edge length of one grid cell, in pixels.
    pub grid_size: f64,
    /// Extra cost charged whenever the path changes direction.
    pub bend_penalty: f64,
    /// Clearance added around every obstacle before rasterization, in pixels.
    pub inflate: f64,
    /// Carve a straight exit for terminals sealed inside an inflated obstacle.
    pub escape_pins: bool,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            grid_size: 10.0,
            bend_penalty: 5.0,
            inflate: 2.0,
            escape_pins: false,
        }
    }
}

impl RouteOptions {
    /// Reject option values the router cannot work with.
    pub fn validate(&self) -> Result<(), RouteError> {
        check_option("grid_size", self.grid_size, false)?;
        check_option("bend_penalty", self.bend_penalty, true)?;
        check_option("inflate", self.inflate, true)?;
        Ok(())
    }
}

fn check_option(field: &'static str, value: f64, allow_zero: bool) -> Result<(), RouteError> {
    let reason = if !value.is_finite() {
        "must be a finite number"
    } else if allow_zero && value < 0.0 {
        "must be zero or greater"
    } else if !allow_zero && value <= 0.0 {
        "must be greater than zero"
    } else {
        return Ok(());
    };
    Err(RouteError::InvalidOptions {
        field,
        value,
        reason,
    })
}

/// Errors a caller can get back from the router.
///
/// An unreachable goal is not an error: `route` returns `Ok(None)` for it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error("invalid route option `{field}` = {value}: {reason}")]
    InvalidOptions {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("{which} point ({x}, {y}) {reason}")]
    InvalidPoint {
        which: &'static str,
        x: f64,
        y: f64,
        reason: &'static str,
    },
    #[error("obstacle #{index} {rect:?} {reason}")]
    InvalidObstacle {
        index: usize,
        rect: Rect,
        reason: &'static str,
    },
}

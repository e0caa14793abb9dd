//! Orthogonal wire auto-router.
//!
//! [`route`] connects two pixel positions with a path of horizontal and vertical
//! segments that avoids a set of rectangular obstacles, trading path length against
//! the number of bends. [`scene`] routes whole circuits and [`svg`] draws the result.

pub mod config;
pub mod routing;
pub mod scene;
pub mod svg;

pub use routing::route;
pub use routing::types::{Point, Rect, RouteError, RouteOptions};

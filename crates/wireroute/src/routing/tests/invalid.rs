use super::*;
use crate::routing::types::RouteError;

fn field_of(result: Result<Option<Vec<Point>>, RouteError>) -> &'static str {
    match result {
        Err(RouteError::InvalidOptions { field, .. }) => field,
        other => panic!("expected an options error, got {other:?}"),
    }
}

#[test]
fn zero_grid_size_is_rejected() {
    let r = route(pt(0.0, 0.0), pt(10.0, 0.0), &[], &options(0.0, 5.0, 2.0));
    assert_eq!(field_of(r), "grid_size");
}

#[test]
fn negative_grid_size_is_rejected() {
    let r = route(pt(0.0, 0.0), pt(10.0, 0.0), &[], &options(-10.0, 5.0, 2.0));
    assert_eq!(field_of(r), "grid_size");
}

#[test]
fn negative_bend_penalty_is_rejected() {
    let r = route(pt(0.0, 0.0), pt(10.0, 0.0), &[], &options(10.0, -1.0, 2.0));
    assert_eq!(field_of(r), "bend_penalty");
}

#[test]
fn negative_inflate_is_rejected() {
    let r = route(pt(0.0, 0.0), pt(10.0, 0.0), &[], &options(10.0, 5.0, -0.5));
    assert_eq!(field_of(r), "inflate");
}

#[test]
fn non_finite_options_are_rejected() {
    let r = route(pt(0.0, 0.0), pt(10.0, 0.0), &[], &options(f64::NAN, 5.0, 2.0));
    assert_eq!(field_of(r), "grid_size");
    let r = route(pt(0.0, 0.0), pt(10.0, 0.0), &[], &options(10.0, f64::INFINITY, 2.0));
    assert_eq!(field_of(r), "bend_penalty");
}

#[test]
fn zero_penalty_and_inflate_are_allowed() {
    assert!(route(pt(0.0, 0.0), pt(10.0, 0.0), &[], &options(10.0, 0.0, 0.0)).is_ok());
}

#[test]
fn non_finite_endpoint_is_rejected() {
    let r = route(pt(f64::NAN, 0.0), pt(10.0, 0.0), &[], &RouteOptions::default());
    assert!(matches!(r, Err(RouteError::InvalidPoint { which: "start", .. })));
    let r = route(pt(0.0, 0.0), pt(10.0, f64::INFINITY), &[], &RouteOptions::default());
    assert!(matches!(r, Err(RouteError::InvalidPoint { which: "end", .. })));
}

#[test]
fn error_message_names_the_field() {
    let err = options(0.0, 5.0, 2.0).validate().unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("grid_size"), "{msg}");
    assert!(msg.contains("greater than zero"), "{msg}");
}

#[test]
fn far_apart_endpoints_are_rejected_not_panicking() {
    let r = route(pt(-3e10, 0.0), pt(3e10, 10.0), &[], &RouteOptions::default());
    assert!(matches!(
        r,
        Err(RouteError::InvalidPoint {
            which: "start",
            reason: "is outside the routable grid",
            ..
        })
    ));
}

#[test]
fn grid_limit_scales_with_grid_size() {
    // 2e10 px is past the limit at grid 10 but fine at grid 1000.
    let r = route(pt(0.0, 0.0), pt(2e10, 0.0), &[], &options(10.0, 5.0, 0.0));
    assert!(matches!(r, Err(RouteError::InvalidPoint { which: "end", .. })));
    let r = route(pt(0.0, 0.0), pt(2e6, 0.0), &[], &options(1000.0, 5.0, 0.0));
    assert!(matches!(r, Ok(Some(_))));
}

#[test]
fn nan_obstacle_is_rejected() {
    let obstacles = [rect(f64::NAN, f64::NAN, 10.0, 10.0)];
    let r = route(pt(-15.0, 5.0), pt(25.0, 5.0), &obstacles, &options(10.0, 5.0, 0.0));
    assert!(matches!(
        r,
        Err(RouteError::InvalidObstacle {
            index: 0,
            reason: "is not finite",
            ..
        })
    ));
}

#[test]
fn infinite_obstacle_is_rejected() {
    let obstacles = [
        rect(100.0, 100.0, 20.0, 20.0),
        rect(0.0, 30.0, f64::INFINITY, 10.0),
    ];
    let r = route(pt(0.0, 0.0), pt(50.0, 0.0), &obstacles, &RouteOptions::default());
    assert!(matches!(r, Err(RouteError::InvalidObstacle { index: 1, .. })));
}

#[test]
fn obstacle_beyond_grid_is_rejected() {
    let obstacles = [rect(5e10, 0.0, 10.0, 10.0)];
    let r = route(pt(0.0, 0.0), pt(50.0, 0.0), &obstacles, &RouteOptions::default());
    assert!(matches!(
        r,
        Err(RouteError::InvalidObstacle {
            index: 0,
            reason: "is outside the routable grid",
            ..
        })
    ));
}

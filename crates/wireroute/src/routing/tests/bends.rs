use super::*;

/// A 4x4 block of obstacles with a one-cell staircase carved from (0,0) to (3,3).
///
/// The only shortest route climbs the staircase (length 6, five bends). Going around
/// the block takes length 10 with three bends.
fn staircase() -> Vec<Rect> {
    let free = [(0, 0), (1, 0), (1, 1), (2, 1), (2, 2), (3, 2), (3, 3)];
    let mut obstacles = Vec::new();
    for col in 0..4 {
        for row in 0..4 {
            if !free.contains(&(col, row)) {
                obstacles.push(cell_block(col, row));
            }
        }
    }
    obstacles
}

#[test]
fn low_penalty_takes_the_staircase() {
    let points = expect_route(pt(5.0, 5.0), pt(35.0, 35.0), &staircase(), &options(10.0, 1.0, 0.0));
    assert_eq!(path_length(&points), 60.0);
    assert_eq!(bend_count(&points), 5);
    assert_eq!(
        points,
        vec![
            pt(5.0, 5.0),
            pt(15.0, 5.0),
            pt(15.0, 15.0),
            pt(25.0, 15.0),
            pt(25.0, 25.0),
            pt(35.0, 25.0),
            pt(35.0, 35.0),
        ]
    );
}

#[test]
fn high_penalty_prefers_longer_straighter_route() {
    let obstacles = staircase();
    let points = expect_route(pt(5.0, 5.0), pt(35.0, 35.0), &obstacles, &options(10.0, 5.0, 0.0));
    assert_eq!(path_length(&points), 100.0);
    assert_eq!(bend_count(&points), 3);
    assert_clear_of(&points, &obstacles, &options(10.0, 5.0, 0.0));
}

#[test]
fn raising_penalty_never_adds_bends() {
    let obstacles = staircase();
    let mut previous = usize::MAX;
    for penalty in [0.5, 1.0, 1.5, 2.5, 3.0, 5.0, 10.0, 50.0] {
        let points =
            expect_route(pt(5.0, 5.0), pt(35.0, 35.0), &obstacles, &options(10.0, penalty, 0.0));
        let bends = bend_count(&points);
        assert!(
            bends <= previous,
            "penalty {penalty} gave {bends} bends, more than {previous}"
        );
        previous = bends;
    }
}

#[test]
fn penalty_prefers_fewer_corners_in_open_space() {
    // With no penalty any monotone staircase is optimal; with one, the route is an L.
    let points = expect_route(pt(5.0, 5.0), pt(95.0, 95.0), &[], &options(10.0, 5.0, 0.0));
    assert_eq!(bend_count(&points), 1);
    assert_eq!(points.len(), 3);
}

#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn follower_closes_fraction_of_distance() {
    let mut follower = CursorFollower::new(0.5);
    follower.aim(Point::new(100.0, 40.0));
    assert_eq!(follower.step(), Point::new(50.0, 20.0));
    assert_eq!(follower.step(), Point::new(75.0, 30.0));
    assert!(!follower.settled());
}

#[test]
fn follower_eventually_settles() {
    let mut follower = CursorFollower::default();
    follower.aim(Point::new(300.0, 300.0));
    let frames = (0..200).take_while(|_| {
        follower.step();
        !follower.settled()
    });
    assert!(frames.count() < 200);
    assert!(follower.settled());
}

#[test]
fn parallax_scales_scroll() {
    assert_eq!(parallax_offset(200.0, 0.5), 100.0);
    assert_eq!(parallax_offset(200.0, -0.25), -50.0);
}

#[test]
fn parse_speed_defaults_on_garbage() {
    assert_eq!(parse_speed("0.3"), 0.3);
    assert_eq!(parse_speed(""), 0.5);
    assert_eq!(parse_speed("fast"), 0.5);
}

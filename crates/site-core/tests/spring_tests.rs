// Host-side tests for the cursor follow spring.

use glam::Vec2;
use site_core::{
    Spring2, CURSOR_PARKED, CURSOR_SPRING_DAMPING, CURSOR_SPRING_MASS, CURSOR_SPRING_STIFFNESS,
};

fn cursor_spring() -> Spring2 {
    Spring2::new(
        Vec2::from(CURSOR_PARKED),
        CURSOR_SPRING_STIFFNESS,
        CURSOR_SPRING_DAMPING,
        CURSOR_SPRING_MASS,
    )
}

#[test]
fn converges_to_target() {
    let mut spring = cursor_spring();
    let target = Vec2::new(400.0, 300.0);

    // Three seconds of 60 fps frames is far beyond the settle time.
    for _ in 0..180 {
        spring.step(target, 1.0 / 60.0);
    }

    assert!(
        spring.settled(target, 0.5),
        "spring still {} px away",
        (target - spring.position).length()
    );
}

#[test]
fn never_overshoots_target() {
    // The tuning is overdamped, so the approach must be monotone from the
    // starting side on both axes.
    let mut spring = cursor_spring();
    let target = Vec2::new(640.0, 480.0);

    for frame in 0..600 {
        spring.step(target, 1.0 / 60.0);
        assert!(
            spring.position.x <= target.x + 1e-2 && spring.position.y <= target.y + 1e-2,
            "overshot at frame {frame}: {:?}",
            spring.position
        );
    }
}

#[test]
fn stays_monotone_with_uneven_frame_times() {
    let mut spring = cursor_spring();
    let target = Vec2::new(200.0, 0.0);

    // Mix of short frames and dropped-frame gaps.
    let dts = [1.0 / 144.0, 1.0 / 30.0, 1.0 / 60.0, 0.1, 1.0 / 60.0];
    let mut last_x = spring.position.x;
    for _ in 0..60 {
        for dt in dts {
            spring.step(target, dt);
            assert!(spring.position.x + 1e-3 >= last_x, "retreated from target");
            assert!(spring.position.x <= target.x + 1e-2, "overshot target");
            last_x = spring.position.x;
        }
    }
}

#[test]
fn survives_background_tab_gap() {
    // rAF can hand us a multi-second dt after a tab switch; the update must
    // stay finite and keep the position between start and target.
    let mut spring = cursor_spring();
    let target = Vec2::new(500.0, 500.0);

    spring.step(target, 10.0);

    assert!(spring.position.is_finite());
    assert!(spring.velocity.is_finite());
    assert!(spring.position.x >= CURSOR_PARKED[0] && spring.position.x <= target.x + 1e-2);
}

#[test]
fn zero_dt_is_a_no_op() {
    let mut spring = cursor_spring();
    let before = spring.position;
    spring.step(Vec2::new(100.0, 100.0), 0.0);
    assert_eq!(spring.position, before);
    assert_eq!(spring.velocity, Vec2::ZERO);
}

#[test]
fn starts_parked_offscreen() {
    let spring = cursor_spring();
    assert_eq!(spring.position, Vec2::new(-100.0, -100.0));
}

#[test]
fn tracks_a_moving_target() {
    let mut spring = cursor_spring();
    let mut target = Vec2::new(100.0, 100.0);

    // Drag the target along a diagonal; the spring should end up settled at
    // the final position once the target stops.
    for i in 0..120 {
        target = Vec2::new(100.0 + i as f32 * 2.0, 100.0 + i as f32);
        spring.step(target, 1.0 / 60.0);
    }
    for _ in 0..180 {
        spring.step(target, 1.0 / 60.0);
    }

    assert!(spring.settled(target, 0.5));
}

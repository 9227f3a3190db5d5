// Host-side tests for the pointer-trail particle window.

use proptest::prelude::*;
use site_core::{ParticleTrail, PARTICLE_WINDOW};

#[test]
fn window_is_bounded() {
    let mut trail = ParticleTrail::new(1);
    for i in 0..50 {
        trail.spawn_at(i as f32, i as f32);
        assert!(trail.len() <= PARTICLE_WINDOW);
    }
    assert_eq!(trail.len(), PARTICLE_WINDOW);
}

#[test]
fn oldest_entries_are_dropped_first() {
    let mut trail = ParticleTrail::new(1);
    for i in 0..20 {
        trail.spawn_at(i as f32, 0.0);
    }

    // 20 spawns through a window of 9 leave ids 11..=19 behind, oldest first.
    let ids: Vec<u64> = trail.iter().map(|p| p.id).collect();
    assert_eq!(ids, (11..=19).collect::<Vec<u64>>());
}

#[test]
fn ids_are_sequential_and_never_reused() {
    let mut trail = ParticleTrail::new(7);
    for expected in 0..30u64 {
        assert_eq!(trail.spawn_at(0.0, 0.0), expected);
    }

    // Draining the window must not recycle ids.
    while trail.evict_oldest().is_some() {}
    assert_eq!(trail.spawn_at(0.0, 0.0), 30);
}

#[test]
fn eviction_removes_in_spawn_order() {
    let mut trail = ParticleTrail::new(3);
    let first = trail.spawn_at(1.0, 1.0);
    let second = trail.spawn_at(2.0, 2.0);

    assert_eq!(trail.evict_oldest().map(|p| p.id), Some(first));
    assert_eq!(trail.evict_oldest().map(|p| p.id), Some(second));
    assert_eq!(trail.evict_oldest(), None);
    assert!(trail.is_empty());
}

#[test]
fn spawn_records_the_sample_position() {
    let mut trail = ParticleTrail::new(9);
    trail.spawn_at(123.5, -42.0);
    let p = trail.iter().next().unwrap();
    assert_eq!((p.x, p.y), (123.5, -42.0));
}

#[test]
fn spawn_visuals_stay_in_range() {
    let mut trail = ParticleTrail::new(11);
    for _ in 0..200 {
        trail.spawn_at(0.0, 0.0);
        let p = *trail.iter().last().unwrap();
        assert!((0.5..1.0).contains(&p.scale), "scale {} out of range", p.scale);
        assert!(
            (0.3..0.8).contains(&p.opacity),
            "opacity {} out of range",
            p.opacity
        );
    }
}

#[test]
fn observe_spawns_roughly_fifteen_percent() {
    let mut trail = ParticleTrail::new(42);
    for i in 0..1000 {
        let _ = trail.observe(i as f32, i as f32);
    }

    // The gate admits draws above 0.85, so ~150 of 1000 samples spawn. Wide
    // bounds keep this robust to the rng stream.
    let spawned = trail.spawned_count();
    assert!(
        (100..=200).contains(&spawned),
        "expected ~150 spawns, got {spawned}"
    );
}

#[test]
fn observe_reports_the_spawned_id() {
    let mut trail = ParticleTrail::new(5);
    let mut reported = Vec::new();
    for i in 0..200 {
        if let Some(id) = trail.observe(i as f32, 0.0) {
            reported.push(id);
        }
    }

    assert_eq!(reported.len() as u64, trail.spawned_count());
    assert!(reported.windows(2).all(|w| w[0] < w[1]));
}

proptest! {
    #[test]
    fn window_bound_holds_for_any_stream(seed in 0u64..1_000, moves in 1usize..400) {
        let mut trail = ParticleTrail::new(seed);
        for i in 0..moves {
            let _ = trail.observe(i as f32, i as f32);
            prop_assert!(trail.len() <= PARTICLE_WINDOW);
        }
    }

    #[test]
    fn ids_increase_for_any_stream(seed in 0u64..1_000, spawns in 2usize..64) {
        let mut trail = ParticleTrail::new(seed);
        let mut prev = trail.spawn_at(0.0, 0.0);
        for _ in 1..spawns {
            let id = trail.spawn_at(0.0, 0.0);
            prop_assert!(id > prev);
            prev = id;
        }
    }

    #[test]
    fn interleaved_evictions_preserve_order(seed in 0u64..1_000, spawns in 1usize..40) {
        let mut trail = ParticleTrail::new(seed);
        let mut last_evicted: Option<u64> = None;
        for i in 0..spawns {
            trail.spawn_at(i as f32, 0.0);
            if i % 3 == 0 {
                if let Some(p) = trail.evict_oldest() {
                    if let Some(prev) = last_evicted {
                        prop_assert!(p.id > prev);
                    }
                    last_evicted = Some(p.id);
                }
            }
        }
    }
}

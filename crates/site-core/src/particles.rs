use rand::prelude::*;
use smallvec::SmallVec;

use crate::constants::{
    PARTICLE_OPACITY_MIN, PARTICLE_OPACITY_SPAN, PARTICLE_SCALE_MIN, PARTICLE_SCALE_SPAN,
    PARTICLE_SPAWN_GATE, PARTICLE_WINDOW,
};

/// Short-lived decorative marker spawned along the pointer path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub opacity: f32,
}

/// Bounded sliding window of trail particles, oldest evicted.
///
/// The id counter is owned by the trail instance so a remount starts a fresh
/// sequence. Data-level removal happens via `evict_oldest` (driven by the
/// frontend's fixed-delay timer) and via the window bound on spawn; the 0.6 s
/// visual fade never removes entries itself.
pub struct ParticleTrail {
    window: SmallVec<[Particle; PARTICLE_WINDOW]>,
    next_id: u64,
    rng: StdRng,
}

impl ParticleTrail {
    pub fn new(seed: u64) -> Self {
        Self {
            window: SmallVec::new(),
            next_id: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Feed one pointer-move sample; spawns a particle with probability
    /// ~0.15 (uniform draw must exceed the gate). Returns the new id if one
    /// was spawned.
    pub fn observe(&mut self, x: f32, y: f32) -> Option<u64> {
        if self.rng.gen::<f32>() > PARTICLE_SPAWN_GATE {
            Some(self.spawn_at(x, y))
        } else {
            None
        }
    }

    /// Unconditionally append a particle at (x, y), truncating to the most
    /// recent entries first so the window never holds more than
    /// `PARTICLE_WINDOW` particles.
    pub fn spawn_at(&mut self, x: f32, y: f32) -> u64 {
        while self.window.len() > PARTICLE_WINDOW - 1 {
            self.window.remove(0);
        }
        let id = self.next_id;
        self.next_id += 1;
        let scale = self.rng.gen::<f32>() * PARTICLE_SCALE_SPAN + PARTICLE_SCALE_MIN;
        let opacity = self.rng.gen::<f32>() * PARTICLE_OPACITY_SPAN + PARTICLE_OPACITY_MIN;
        self.window.push(Particle {
            id,
            x,
            y,
            scale,
            opacity,
        });
        id
    }

    /// Remove the single oldest surviving particle, if any.
    pub fn evict_oldest(&mut self) -> Option<Particle> {
        if self.window.is_empty() {
            None
        } else {
            Some(self.window.remove(0))
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.window.iter()
    }

    /// Total particles ever spawned by this trail instance.
    #[inline]
    pub fn spawned_count(&self) -> u64 {
        self.next_id
    }
}

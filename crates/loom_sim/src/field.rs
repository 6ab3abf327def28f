use bevy::prelude::Resource;
use loom_core::*;
use loom_physics::{forces, procgen};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::paint::{self, Canvas, PaintStats};

/// The decorative thread field, tracked as a Bevy Resource
#[derive(Resource)]
pub struct ThreadField {
    pub threads: Vec<Thread>,
    /// Surface size the threads live in
    pub bounds: Bounds,
    /// Written by the host input systems, read by tick and paint
    pub pointer: Pointer,
    pub profile: TierProfile,
    pub policy: PointerPolicy,
    /// Ticks run since the field was last seeded
    pub ticks: u64,
    rng: ChaCha8Rng,
}

impl ThreadField {
    /// Placeholder with no threads (used until the surface has a size)
    pub fn empty(profile: TierProfile, policy: PointerPolicy, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            threads: Vec::new(),
            bounds: Bounds::default(),
            pointer: Pointer::default(),
            profile,
            policy,
            ticks: 0,
            rng,
        }
    }

    pub fn from_config(config: &LoomConfig, tier: Option<PerformanceTier>) -> Self {
        Self::empty(config.profile(tier), config.pointer_policy, config.seed)
    }

    pub fn is_seeded(&self) -> bool {
        !self.threads.is_empty()
    }

    pub fn len(&self) -> usize {
        self.threads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }

    /// Scatter a fresh set of threads over `bounds`.
    /// Surfaces without area leave the field untouched.
    pub fn seed(&mut self, bounds: Bounds) -> usize {
        if !bounds.is_drawable() {
            return 0;
        }
        self.bounds = bounds;
        self.threads = procgen::seed_threads(self.profile.thread_count, bounds, &mut self.rng);
        self.ticks = 0;
        self.threads.len()
    }

    /// Follow a surface size change. Threads keep their identity and are
    /// rescaled into the new bounds. Returns false when nothing changed.
    pub fn resize(&mut self, bounds: Bounds) -> bool {
        if !bounds.is_drawable() || bounds == self.bounds {
            return false;
        }
        if !self.is_seeded() {
            return self.seed(bounds) > 0;
        }
        procgen::rescale_threads(&mut self.threads, self.bounds, bounds);
        self.bounds = bounds;
        true
    }

    /// Swap the tuning (e.g. a tier change) and re-seed at the current size
    pub fn reinitialize(&mut self, profile: TierProfile) -> usize {
        self.profile = profile;
        self.threads.clear();
        self.seed(self.bounds)
    }

    /// Advance every thread by one step
    pub fn tick(&mut self) {
        if !self.bounds.is_drawable() {
            return;
        }
        let profile = self.profile;
        let bounds = self.bounds;

        for thread in self.threads.iter_mut() {
            let force = match self.pointer.position {
                Some(pointer) => forces::pointer_influence(
                    thread,
                    pointer,
                    profile.pointer_strength,
                    self.policy,
                ),
                None => 0.0,
            };
            if force <= 0.0 {
                forces::fade(thread);
            }

            forces::integrate(thread, &profile);
            forces::wrap_thread(thread, bounds);
            procgen::maybe_retarget(thread, profile.retarget_chance, bounds, &mut self.rng);
        }

        self.ticks += 1;
    }

    pub fn paint(&self, canvas: &mut dyn Canvas) -> PaintStats {
        paint::paint(&self.threads, self.pointer, canvas)
    }
}

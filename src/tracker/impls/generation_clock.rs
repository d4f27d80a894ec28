use std::sync::atomic::{AtomicU64, Ordering};
use crate::common::common::current_time;
use crate::tracker::structs::generation_clock::GenerationClock;

impl GenerationClock {
    pub fn new(quantum_secs: u64) -> GenerationClock {
        let quantum_secs = quantum_secs.max(1);
        GenerationClock {
            generation: AtomicU64::new(current_time() / quantum_secs),
            quantum_secs,
            manual: false,
        }
    }

    /// A clock pinned to `generation` that only moves through `set`.
    pub fn manual(quantum_secs: u64, generation: u64) -> GenerationClock {
        GenerationClock {
            generation: AtomicU64::new(generation),
            quantum_secs: quantum_secs.max(1),
            manual: true,
        }
    }

    #[inline(always)]
    pub fn now(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Recomputes the generation from the wall clock. Never moves backwards.
    /// On a manual clock this returns the pinned generation unchanged.
    pub fn refresh(&self) -> u64 {
        if self.manual {
            return self.now();
        }
        let wall = current_time() / self.quantum_secs;
        self.generation.fetch_max(wall, Ordering::AcqRel).max(wall)
    }

    pub fn set(&self, generation: u64) {
        self.generation.store(generation, Ordering::Release);
    }

    pub fn is_manual(&self) -> bool {
        self.manual
    }

    pub fn quantum_secs(&self) -> u64 {
        self.quantum_secs
    }
}

//! Per-message sampling for high-volume loggers.
//!
//! Within each tick, the first `initial` entries with a given level and
//! message are kept, then every `thereafter`-th one.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::level::Level;

const BUCKETS_PER_LEVEL: u64 = 4096;

/// Sampling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingConfig {
    pub initial: u64,
    pub thereafter: u64,
    pub tick: Duration,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            initial: 100,
            thereafter: 100,
            tick: Duration::from_secs(1),
        }
    }
}

#[derive(Debug)]
struct Counter {
    window_start: Instant,
    count: u64,
}

/// Sampling state for one logger core.
#[derive(Debug)]
pub struct Sampler {
    config: SamplingConfig,
    counters: Mutex<HashMap<u64, Counter>>,
}

impl Sampler {
    pub fn new(config: SamplingConfig) -> Self {
        Self {
            config,
            counters: Mutex::new(HashMap::new()),
        }
    }

    /// Whether an entry should be written.
    pub fn check(&self, level: Level, message: &str) -> bool {
        self.check_at(level, message, Instant::now())
    }

    fn check_at(&self, level: Level, message: &str, now: Instant) -> bool {
        let bucket = bucket(level, message);
        let mut counters = self
            .counters
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let counter = counters.entry(bucket).or_insert(Counter {
            window_start: now,
            count: 0,
        });
        if now.duration_since(counter.window_start) >= self.config.tick {
            counter.window_start = now;
            counter.count = 0;
        }
        counter.count += 1;

        let n = counter.count;
        if n <= self.config.initial {
            return true;
        }
        self.config.thereafter > 0 && (n - self.config.initial) % self.config.thereafter == 0
    }
}

fn bucket(level: Level, message: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    message.hash(&mut hasher);
    (level.index() as u64) * BUCKETS_PER_LEVEL + hasher.finish() % BUCKETS_PER_LEVEL
}

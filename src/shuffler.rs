use crate::shuffle::{shuffle, shuffle_prefix};
use crate::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Seed of the random stream. When not set, the generator is seeded from
    /// OS entropy and every run produces different permutations.
    pub seed: Option<u64>,
}

impl Options {
    pub fn seeded(seed: u64) -> Self {
        Options { seed: Some(seed) }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Owns a single random stream and uses it to shuffle sequences.
#[derive(Debug, Clone)]
pub struct Shuffler {
    seed: Option<u64>,
    rng: ChaCha8Rng,
}

impl Shuffler {
    pub fn new(options: Options) -> Self {
        let rng = match options.seed {
            Some(seed) => {
                log::debug!("seeding shuffler with {seed}");
                ChaCha8Rng::seed_from_u64(seed)
            }
            None => {
                log::debug!("seeding shuffler from entropy");
                ChaCha8Rng::from_entropy()
            }
        };
        Shuffler {
            seed: options.seed,
            rng,
        }
    }

    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        shuffle(values, &mut self.rng)
    }

    pub fn shuffle_prefix<T>(&mut self, values: &mut [T], len: usize) -> Result<()> {
        shuffle_prefix(values, len, &mut self.rng)
    }
}

impl Default for Shuffler {
    fn default() -> Self {
        Shuffler::new(Options::default())
    }
}

/// A [Shuffler] that can be shared between threads. Draws from the underlying
/// stream are serialized, so a whole shuffle always sees a contiguous run of
/// random values.
#[derive(Debug, Clone)]
pub struct SharedShuffler {
    inner: Arc<Mutex<Shuffler>>,
}

impl SharedShuffler {
    pub fn new(options: Options) -> Self {
        SharedShuffler::from(Shuffler::new(options))
    }

    pub fn shuffle<T>(&self, values: &mut [T]) {
        self.lock().shuffle(values)
    }

    pub fn shuffle_prefix<T>(&self, values: &mut [T], len: usize) -> Result<()> {
        self.lock().shuffle_prefix(values, len)
    }

    fn lock(&self) -> MutexGuard<'_, Shuffler> {
        // a panic while holding the lock can't leave the generator half-updated
        self.inner.lock().unwrap_or_else(|poisoned| {
            log::warn!("shuffler lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl From<Shuffler> for SharedShuffler {
    fn from(shuffler: Shuffler) -> Self {
        SharedShuffler {
            inner: Arc::new(Mutex::new(shuffler)),
        }
    }
}

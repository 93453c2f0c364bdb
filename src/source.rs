use rand::{Rng, RngCore};
use std::collections::VecDeque;

/// Source of uniformly distributed indices.
///
/// Implementations must return a value from the *inclusive* range `0..=upper`.
/// Excluding `upper` itself would make it impossible for an element to stay in
/// place and bias every permutation built on top of the source.
pub trait UniformSource {
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<R> UniformSource for R
where
    R: RngCore,
{
    #[inline]
    fn next_index(&mut self, upper: usize) -> usize {
        self.gen_range(0..=upper)
    }
}

/// Replays a predefined list of draws. Useful to drive a shuffle through an
/// exact sequence of swaps.
///
/// Once the script is exhausted, or when a scripted draw doesn't fit into the
/// requested range, `upper` is returned, which turns the swap into a no-op.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    draws: VecDeque<usize>,
}

impl Scripted {
    pub fn new<I>(draws: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Scripted {
            draws: draws.into_iter().collect(),
        }
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl UniformSource for Scripted {
    fn next_index(&mut self, upper: usize) -> usize {
        match self.draws.pop_front() {
            Some(z) if z <= upper => z,
            Some(z) => {
                log::warn!("scripted draw {z} exceeds upper bound {upper}, using {upper}");
                upper
            }
            None => {
                log::warn!("script exhausted, using {upper}");
                upper
            }
        }
    }
}

/// Logs every draw made through the wrapped source at `trace` level.
#[derive(Debug)]
pub struct Traced<S> {
    inner: S,
}

impl<S> Traced<S> {
    pub fn new(inner: S) -> Self {
        Traced { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: UniformSource> UniformSource for Traced<S> {
    fn next_index(&mut self, upper: usize) -> usize {
        let z = self.inner.next_index(upper);
        log::trace!("swap [{upper}] <-> [{z}]");
        z
    }
}

#[cfg(test)]
mod test {
    use crate::source::{Scripted, Traced, UniformSource};
    use log::LevelFilter;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn rng_draws_stay_within_inclusive_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut hit_upper = false;
        for _ in 0..1000 {
            let z = rng.next_index(3);
            assert!(z <= 3);
            hit_upper |= z == 3;
        }
        assert!(hit_upper, "upper bound must be reachable");
        assert_eq!(rng.next_index(0), 0);
    }

    #[test]
    fn scripted_replays_and_clamps() {
        let mut source = Scripted::new([2, 9]);
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.next_index(4), 2);
        assert_eq!(source.next_index(4), 4);
        assert_eq!(source.next_index(1), 1);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn traced_passes_draws_through() {
        let _ = env_logger::builder()
            .filter_level(LevelFilter::Trace)
            .is_test(true)
            .try_init();
        let mut source = Traced::new(Scripted::new([0, 1]));
        assert_eq!(source.next_index(5), 0);
        assert_eq!(source.next_index(5), 1);
        assert_eq!(source.into_inner().remaining(), 0);
    }
}

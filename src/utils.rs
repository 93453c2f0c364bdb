use crate::shuffle::shuffle;
use rand::RngCore;

pub trait RngExt: RngCore + Sized {
    /// Shuffles `values` in place using this generator.
    fn shuffle<V>(&mut self, values: &mut [V]) {
        shuffle(values, self)
    }

    /// Collects `values` and returns them in random order.
    fn shuffled<I>(&mut self, values: I) -> Vec<I::Item>
    where
        I: IntoIterator,
    {
        let mut values: Vec<_> = values.into_iter().collect();
        shuffle(&mut values, self);
        values
    }
}

impl<T> RngExt for T where T: RngCore {}

#[cfg(test)]
mod test {
    use crate::utils::RngExt;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut a: Vec<u32> = (0..32).collect();
        let mut b = a.clone();
        ChaCha8Rng::seed_from_u64(42).shuffle(&mut a);
        ChaCha8Rng::seed_from_u64(42).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn shuffled_returns_all_items() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut items = rng.shuffled("shuffler".chars());
        assert_eq!(items.len(), 8);
        items.sort_unstable();
        let mut expected: Vec<char> = "shuffler".chars().collect();
        expected.sort_unstable();
        assert_eq!(items, expected);
    }
}

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable randomness source for a single session. Move selection takes one
/// of these by `&mut`, so a fixed seed replays the exact same game.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_chooses_identically() {
        let items = [1, 2, 3, 4, 5, 6, 7, 8];
        let mut first = SessionRng::new(42);
        let mut second = SessionRng::new(42);

        for _ in 0..20 {
            assert_eq!(first.choose(&items), second.choose(&items));
        }
    }

    #[test]
    fn test_choose_from_empty_slice_is_none() {
        let mut rng = SessionRng::new(1);
        let items: [u32; 0] = [];

        assert_eq!(rng.choose(&items), None);
    }

    #[test]
    fn test_singleton_slice_is_always_chosen() {
        let mut rng = SessionRng::from_random();

        assert_eq!(rng.choose(&[7]), Some(&7));
    }

    #[test]
    fn test_seed_is_reported() {
        let rng = SessionRng::new(1234);

        assert_eq!(rng.seed(), 1234);
    }
}

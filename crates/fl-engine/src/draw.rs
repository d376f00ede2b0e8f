//! The random draw primitive.
//!
//! Every random decision in the engine goes through [`Draw`], so a session
//! can run on a real RNG or on a fixed script.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers.
pub trait Draw {
    /// A value in `[1, max_inclusive]`. `max_inclusive` must be at least 1.
    fn draw(&mut self, max_inclusive: u32) -> u32;
}

/// Pick one item uniformly. `None` for an empty slice.
pub fn pick<'a, T>(draw: &mut dyn Draw, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = draw.draw(items.len() as u32) as usize - 1;
    items.get(index)
}

/// Draws backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct RngDraw {
    rng: StdRng,
}

impl RngDraw {
    /// Seeded for reproducible draws, or from the OS when `seed` is `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl Draw for RngDraw {
    fn draw(&mut self, max_inclusive: u32) -> u32 {
        self.rng.random_range(1..=max_inclusive.max(1))
    }
}

/// Draws from a fixed script, for driving every branch deterministically.
///
/// Each value is clamped into the requested range. Once the script runs out
/// every draw returns `max_inclusive`: a failed roll, no rare drop, the last
/// item of a pool.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraw {
    values: VecDeque<u32>,
}

impl ScriptedDraw {
    /// Script the given values, consumed in order.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl Draw for ScriptedDraw {
    fn draw(&mut self, max_inclusive: u32) -> u32 {
        let max = max_inclusive.max(1);
        self.values.pop_front().map_or(max, |v| v.clamp(1, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_draw_in_range() {
        let mut draw = RngDraw::new(Some(42));
        for _ in 0..1000 {
            let v = draw.draw(100);
            assert!((1..=100).contains(&v));
        }
    }

    #[test]
    fn seeded_draws_repeat() {
        let mut a = RngDraw::new(Some(7));
        let mut b = RngDraw::new(Some(7));
        let xs: Vec<u32> = (0..20).map(|_| a.draw(100)).collect();
        let ys: Vec<u32> = (0..20).map(|_| b.draw(100)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn rng_draw_covers_range() {
        let mut draw = RngDraw::new(Some(1));
        let mut seen = [false; 6];
        for _ in 0..600 {
            seen[draw.draw(6) as usize - 1] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn scripted_in_order_then_max() {
        let mut draw = ScriptedDraw::new([15, 200, 0]);
        assert_eq!(draw.draw(100), 15);
        assert_eq!(draw.draw(100), 100);
        assert_eq!(draw.draw(100), 1);
        assert_eq!(draw.remaining(), 0);
        assert_eq!(draw.draw(100), 100);
        assert_eq!(draw.draw(4), 4);
    }

    #[test]
    fn pick_uses_one_based_draw() {
        let items = ["a", "b", "c"];
        let mut draw = ScriptedDraw::new([1, 3]);
        assert_eq!(pick(&mut draw, &items), Some(&"a"));
        assert_eq!(pick(&mut draw, &items), Some(&"c"));
        let empty: [&str; 0] = [];
        assert_eq!(pick(&mut draw, &empty), None);
    }
}

// rng.rs - Random sources for cell generation
//
// Generation draws every random value through `RandomSource`, so tests can
// hand in a seeded or scripted source without touching the algorithm.
// The production source is a xorshift32 generator seeded from host entropy.

/// Uniform random values in [0, 1)
pub trait RandomSource {
    fn next_f32(&mut self) -> f32;

    /// Uniform value in [lo, hi)
    #[inline]
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }

    /// True with probability `p`
    #[inline]
    fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_f32(&mut self) -> f32 {
        (**self).next_f32()
    }
}

const FALLBACK_SEED: u32 = 0xDEADBEEF;

/// xorshift32 generator
#[derive(Debug, Clone)]
pub struct Xorshift {
    state: u32,
}

impl Xorshift {
    /// Zero is a fixed point of xorshift, so it is replaced by a constant seed.
    pub fn new(seed: u32) -> Self {
        Self { state: if seed == 0 { FALLBACK_SEED } else { seed } }
    }

    /// Seed from the host: `Math.random` in the browser, the OS elsewhere.
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for Xorshift {
    #[inline(always)]
    fn next_f32(&mut self) -> f32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        (self.state >> 8) as f32 * (1.0 / 16777216.0)
    }
}

#[cfg(target_arch = "wasm32")]
fn entropy_seed() -> u32 {
    (js_sys::Math::random() * u32::MAX as f64) as u32
}

#[cfg(not(target_arch = "wasm32"))]
fn entropy_seed() -> u32 {
    rand::random::<u32>()
}

/// Bell-ish jitter in [-1, 1]: mean of 4 uniforms, low spread
#[inline]
pub fn tight_jitter<R: RandomSource + ?Sized>(rng: &mut R) -> f32 {
    let sum = rng.next_f32() + rng.next_f32() + rng.next_f32() + rng.next_f32();
    sum * 0.5 - 1.0
}

/// Bell-ish jitter in [-1, 1]: mean of 3 uniforms, wider spread
#[inline]
pub fn wide_jitter<R: RandomSource + ?Sized>(rng: &mut R) -> f32 {
    let sum = rng.next_f32() + rng.next_f32() + rng.next_f32();
    sum * (2.0 / 3.0) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xorshift_stays_in_unit_interval() {
        let mut rng = Xorshift::new(42);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v), "draw out of range: {}", v);
        }
    }

    #[test]
    fn zero_seed_does_not_stick() {
        let mut rng = Xorshift::new(0);
        assert_eq!(rng.state(), FALLBACK_SEED);
        let a = rng.next_f32();
        let b = rng.next_f32();
        assert_ne!(a, b);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Xorshift::new(7);
        let mut b = Xorshift::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_f32(), b.next_f32());
        }
    }

    #[test]
    fn jitter_bounds_and_spread() {
        let mut rng = Xorshift::new(99);
        let n = 20_000;
        let (mut t_sq, mut w_sq) = (0.0f64, 0.0f64);
        for _ in 0..n {
            let t = tight_jitter(&mut rng);
            let w = wide_jitter(&mut rng);
            assert!((-1.0..=1.0).contains(&t));
            assert!((-1.0..=1.0).contains(&w));
            t_sq += (t * t) as f64;
            w_sq += (w * w) as f64;
        }
        // std of 2*mean(k uniforms)-1 is 1/sqrt(3k)
        let t_std = (t_sq / n as f64).sqrt();
        let w_std = (w_sq / n as f64).sqrt();
        assert!((t_std - 0.2887).abs() < 0.02, "tight std {}", t_std);
        assert!((w_std - 0.3333).abs() < 0.02, "wide std {}", w_std);
    }
}

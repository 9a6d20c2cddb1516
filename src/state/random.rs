// Random sources for placement sampling

/// Yields uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Browser `Math.random()`.
#[derive(Default, Debug, Clone, Copy)]
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

#[cfg(test)]
pub mod testing {
    use super::RandomSource;

    /// Small seeded xorshift generator.
    #[derive(Debug, Clone)]
    pub struct XorShift {
        state: u64,
    }

    impl XorShift {
        pub fn seeded(seed: u64) -> Self {
            // zero is a fixed point of xorshift
            Self { state: seed.max(1) }
        }
    }

    impl RandomSource for XorShift {
        fn next_unit(&mut self) -> f64 {
            let mut x = self.state;
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            self.state = x;
            (x >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    /// Replays a fixed list of samples, then repeats the last one.
    pub struct Scripted {
        samples: Vec<f64>,
        pos: usize,
        pub drawn: usize,
    }

    impl Scripted {
        pub fn new(samples: &[f64]) -> Self {
            Self { samples: samples.to_vec(), pos: 0, drawn: 0 }
        }
    }

    impl RandomSource for Scripted {
        fn next_unit(&mut self) -> f64 {
            self.drawn += 1;
            let v = self.samples.get(self.pos).or(self.samples.last()).copied().unwrap_or(0.0);
            self.pos += 1;
            v
        }
    }
}

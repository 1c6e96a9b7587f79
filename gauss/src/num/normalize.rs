/// Cleans up an entry after each arithmetic row operation.
pub trait Normalizer<R> { 
    fn normalize(&self, a: R) -> R;
}

/// Suppresses floating-point drift: values within `eps` of an integer 
/// snap to it, everything else is rounded half away from zero to 
/// `digits` decimal places.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance { 
    eps: f64,
    digits: u32
}

impl Tolerance { 
    pub const DEFAULT_EPS: f64 = 0.0001;
    pub const DEFAULT_DIGITS: u32 = 4;

    pub fn new(eps: f64, digits: u32) -> Self { 
        assert!(eps >= 0.0, "eps must be non-negative: {eps}");
        Self { eps, digits }
    }

    pub fn eps(&self) -> f64 { 
        self.eps
    }

    pub fn digits(&self) -> u32 { 
        self.digits
    }

    fn snap(&self, a: f64) -> Option<f64> { 
        let t = a.trunc();
        [t, t + 1.0, t - 1.0].into_iter()
            .find(|i| (a - i).abs() < self.eps)
            .map(|i| i + 0.0) // -0 -> 0
    }

    fn round(&self, a: f64) -> f64 { 
        let scale = 10f64.powi(self.digits as i32);
        let s = a * scale;

        // the first dropped digit decides.
        let next = (s * 10.0).trunc();
        let k = if next.abs() % 10.0 < 5.0 { 
            s.trunc()
        } else if next >= 0.0 { 
            s.trunc() + 1.0
        } else { 
            s.trunc() - 1.0
        };

        k / scale + 0.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EPS, Self::DEFAULT_DIGITS)
    }
}

impl Normalizer<f64> for Tolerance {
    fn normalize(&self, a: f64) -> f64 {
        self.snap(a).unwrap_or_else(|| { 
            let r = self.round(a);
            self.snap(r).unwrap_or(r)
        })
    }
}

/// Leaves values untouched, for exact arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Exact;

impl<R> Normalizer<R> for Exact {
    fn normalize(&self, a: R) -> R {
        a
    }
}

//! Trapezoidal fuzzy number value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::AlphaLevel;

use super::{AlphaCutInterval, TriangularFuzzyNumber};

/// A trapezoidal fuzzy number (a, b, c, d).
///
/// # Invariants
///
/// `a <= b <= c <= d` whenever the trapezoid was produced by enclosing at
/// least one canonical triangular number. The membership rises linearly
/// from `a` to `b`, plateaus from `b` to `c`, and falls from `c` to `d`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrapezoidalFuzzyNumber {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl TrapezoidalFuzzyNumber {
    /// The neutral zero trapezoid emitted for cells with no resolvable
    /// terms.
    pub const ZERO: Self = Self {
        a: 0.0,
        b: 0.0,
        c: 0.0,
        d: 0.0,
    };

    /// Creates a trapezoidal number from raw components.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Returns true if `a <= b <= c <= d`.
    pub fn is_ordered(&self) -> bool {
        self.a <= self.b && self.b <= self.c && self.c <= self.d
    }

    /// Builds the enclosing trapezoid of a set of triangular numbers.
    ///
    /// `a = min(lefts)`, `b = min(middles)`, `c = max(middles)`,
    /// `d = max(rights)` - the pessimistic-to-optimistic extent of all
    /// covered terms. Returns `None` for an empty set.
    pub fn enclosing<I>(triangulars: I) -> Option<Self>
    where
        I: IntoIterator<Item = TriangularFuzzyNumber>,
    {
        let mut iter = triangulars.into_iter();
        let first = iter.next()?;
        let mut result = Self::new(first.left, first.middle, first.middle, first.right);
        for tri in iter {
            result.a = result.a.min(tri.left);
            result.b = result.b.min(tri.middle);
            result.c = result.c.max(tri.middle);
            result.d = result.d.max(tri.right);
        }
        Some(result)
    }

    /// Builds the min/max envelope of a set of trapezoids.
    ///
    /// `a = min(a_j)`, `b = min(b_j)`, `c = max(c_j)`, `d = max(d_j)`.
    /// Returns `None` for an empty set.
    pub fn envelope<'a, I>(trapezoids: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a TrapezoidalFuzzyNumber>,
    {
        let mut iter = trapezoids.into_iter();
        let mut result = *iter.next()?;
        for t in iter {
            result.a = result.a.min(t.a);
            result.b = result.b.min(t.b);
            result.c = result.c.max(t.c);
            result.d = result.d.max(t.d);
        }
        Some(result)
    }

    /// Builds the elementwise average of a set of trapezoids.
    ///
    /// Returns `None` for an empty set.
    pub fn average<'a, I>(trapezoids: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a TrapezoidalFuzzyNumber>,
    {
        let mut sum = Self::new(0.0, 0.0, 0.0, 0.0);
        let mut count = 0usize;
        for t in trapezoids {
            sum.a += t.a;
            sum.b += t.b;
            sum.c += t.c;
            sum.d += t.d;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        let n = count as f64;
        Some(Self::new(sum.a / n, sum.b / n, sum.c / n, sum.d / n))
    }

    /// Cuts the trapezoid at the given confidence level.
    ///
    /// `l = alpha*b + (1-alpha)*a`, `r = alpha*c + (1-alpha)*d`. At alpha 0
    /// the interval is the full support `[a, d]`; at alpha 1 it is the core
    /// `[b, c]`. Both endpoints move linearly in alpha.
    pub fn alpha_cut(&self, alpha: AlphaLevel) -> AlphaCutInterval {
        let a = alpha.value();
        AlphaCutInterval {
            l: a * self.b + (1.0 - a) * self.a,
            r: a * self.c + (1.0 - a) * self.d,
        }
    }
}

impl fmt::Display for TrapezoidalFuzzyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.a, self.b, self.c, self.d)
    }
}

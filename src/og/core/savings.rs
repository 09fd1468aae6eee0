//! Savings input for the household budget constraint.
//!
//! A household in its last period carries a single asset holding and saves
//! nothing forward; earlier cohorts carry a path of holdings whose next entry
//! is subtracted as forward saving.
use ndarray::ArrayView1;

/// Asset holdings entering the remaining periods of an individual's life.
///
/// - `Terminal(b)`: last period of life; `b` is broadcast over every period
///   of the supplied price paths and no forward saving is subtracted.
/// - `Path(b)`: holdings `b_s` entering each remaining period; forward saving
///   is `b_{s+1}` with the final forward holding fixed at zero (no bequest).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Savings<'a> {
    Terminal(f64),
    Path(ArrayView1<'a, f64>),
}

impl Savings<'_> {
    /// Holdings entering period `s`.
    pub fn entering(&self, s: usize) -> f64 {
        match self {
            Savings::Terminal(b) => *b,
            Savings::Path(b) => b[s],
        }
    }

    /// Holdings carried out of period `s` into `s + 1`.
    pub fn forward(&self, s: usize) -> f64 {
        match self {
            Savings::Terminal(_) => 0.0,
            Savings::Path(b) => b.get(s + 1).copied().unwrap_or(0.0),
        }
    }
}

impl<'a> From<ArrayView1<'a, f64>> for Savings<'a> {
    fn from(b: ArrayView1<'a, f64>) -> Self {
        Savings::Path(b)
    }
}

impl From<f64> for Savings<'_> {
    fn from(b: f64) -> Self {
        Savings::Terminal(b)
    }
}

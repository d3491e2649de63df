//! Progress reporting contract
//!
//! Every converter reports completion as a percentage in `0..=100`. Values
//! are computed with [`percent`]; a converter issues a final `100` once its
//! work is done. Failures end the sequence early, so `100` is not a
//! substitute for checking the conversion result.

/// Receives percent-complete notifications from a converter
pub trait Progress {
    /// Report completion, `0..=100`
    fn report(&mut self, percent: u8);
}

impl<F: FnMut(u8)> Progress for F {
    fn report(&mut self, percent: u8) {
        self(percent)
    }
}

/// A sink that discards every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn report(&mut self, _percent: u8) {}
}

/// `round(done / total * 100)`, clamped to `0..=100`
///
/// A zero `total` yields `0`.
pub fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let value = (done as f64 / total as f64 * 100.0).round();
    value.clamp(0.0, 100.0) as u8
}

use crate::errors::{StatePrepError, StatePrepResult};
use crate::iter;
use crate::types::Precision;
use crate::utils::*;
use crate::Complex;

/// Default tolerance for the L2 normalization check.
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-7;

/// Probability mass below which a subtree is treated as empty. Splitting an
/// empty subtree is a 0/0; the rotation angle is defined as zero instead since
/// the subtree contributes no observable rotation.
pub const ZERO_MASS_TOLERANCE: f64 = 1e-8;

/// Check that `state` can be prepared on qubits: its length must be a nonzero
/// power of two and its L2 norm must be within `tolerance` of 1. Returns the
/// qubit count `n = log2(len)`. Pure predicate, re-validating a valid state
/// never fails.
pub fn validate_wave_function<P: Precision>(
    state: &[Complex<P>],
    tolerance: P,
) -> StatePrepResult<usize> {
    let len = state.len();
    if len == 0 || len & (len - 1) != 0 {
        return Err(StatePrepError::InvalidLength { len });
    }
    let norm = iter!(state).map(|c| c.norm_sqr()).sum::<P>().sqrt();
    if (norm - P::one()).abs() >= tolerance {
        return Err(StatePrepError::NotNormalized {
            norm: norm.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(len.trailing_zeros() as usize)
}

/// A validated wave-function array together with its derived amplitude and
/// phase arrays. The derived arrays are computed once at construction and the
/// rotation angles for every recursion node are pure functions of them.
///
/// Recursion nodes are addressed by `(s, j)` with `1 <= s <= n` and
/// `1 <= j <= 2^(n-s)`: `s` is the tree depth counted from the leaves (s = n
/// is the root) and `j` indexes the siblings at that depth.
#[derive(Debug, Clone)]
pub struct WaveFunction<P: Precision> {
    amplitudes: Vec<P>,
    phases: Vec<P>,
    n: usize,
}

impl<P: Precision> WaveFunction<P> {
    /// Validate `state` against [`DEFAULT_NORM_TOLERANCE`] and derive the
    /// amplitude and phase arrays.
    pub fn new(state: &[Complex<P>]) -> StatePrepResult<Self> {
        Self::with_tolerance(state, P::from(DEFAULT_NORM_TOLERANCE).unwrap())
    }

    /// Like [`WaveFunction::new`] with an explicit normalization tolerance.
    pub fn with_tolerance(state: &[Complex<P>], tolerance_norm: P) -> StatePrepResult<Self> {
        let n = validate_wave_function(state, tolerance_norm)?;
        let amplitudes = state.iter().map(|c| c.norm()).collect();
        let phases = state.iter().map(|c| c.arg()).collect();
        Ok(Self {
            amplitudes,
            phases,
            n,
        })
    }

    /// Number of qubits needed to prepare this state.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Length of the wave-function array, `2^n`.
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// Element-wise moduli of the wave-function array.
    pub fn amplitudes(&self) -> &[P] {
        &self.amplitudes
    }

    /// Element-wise arguments of the wave-function array.
    pub fn phases(&self) -> &[P] {
        &self.phases
    }

    /// The Ry angle redistributing probability mass at node `(s, j)`: the
    /// fraction of the node's mass that belongs in its upper half, expressed
    /// as `2 asin(sqrt(upper / total))`. Zero when the node holds no mass.
    pub fn ry_angle(&self, s: usize, j: usize) -> P {
        debug_assert!((1..=self.n).contains(&s));
        debug_assert!((1..=1 << (self.n - s)).contains(&j));
        let half = 1 << (s - 1);
        let top = (2 * j - 1) * half;
        let bottom = (j - 1) * (half << 1);
        let sum_top = iter!(self.amplitudes[top..top + half])
            .map(|a| *a * *a)
            .sum::<P>();
        let sum_bottom = iter!(self.amplitudes[bottom..bottom + 2 * half])
            .map(|a| *a * *a)
            .sum::<P>();
        if sum_bottom <= P::from(ZERO_MASS_TOLERANCE).unwrap() {
            return P::zero();
        }
        // Rounding can push the ratio just past 1; clamp before asin.
        let ratio = (sum_top / sum_bottom).min(P::one());
        P::from(2.0).unwrap() * ratio.sqrt().asin()
    }

    /// The Rz angle aligning relative phase at node `(s, j)`: the mean
    /// pairwise phase difference between the node's upper and lower halves.
    pub fn rz_angle(&self, s: usize, j: usize) -> P {
        debug_assert!((1..=self.n).contains(&s));
        debug_assert!((1..=1 << (self.n - s)).contains(&j));
        let half = 1 << (s - 1);
        let top = (2 * j - 1) * half;
        let lower = (2 * j - 2) * half;
        let sum = iter!(self.phases[top..top + half])
            .zip(iter!(self.phases[lower..lower + half]))
            .map(|(t, l)| *t - *l)
            .sum::<P>();
        sum / P::from(half).unwrap()
    }
}

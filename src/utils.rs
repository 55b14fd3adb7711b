#[cfg(feature = "parallel")]
pub(crate) use rayon::prelude::*;

use crate::types::Precision;
use crate::Complex;
use num_traits::Zero;
use rand::Rng;

/// Choose between iter and par_iter
#[cfg(not(feature = "parallel"))]
#[macro_export]
macro_rules! iter {
    ($e:expr) => {
        $e.iter()
    };
}

/// Choose between iter and par_iter
#[cfg(feature = "parallel")]
#[macro_export]
macro_rules! iter {
    ($e:expr) => {
        $e.par_iter()
    };
}

/// Get the `bit_index` bit value from `num`.
///
/// # Example
/// ```
/// use qsp::utils::get_bit;
/// assert!(get_bit(0b10, 1));
/// assert!(!get_bit(0b10, 0));
/// ```
#[inline]
pub fn get_bit(num: usize, bit_index: usize) -> bool {
    ((num >> bit_index) & 1) != 0
}

/// Generate a random normalized complex wave function on `n` qubits.
/// Each component is drawn uniformly from the square centered on the origin.
pub fn random_wave_function<P: Precision, R: Rng>(n: usize, rng: &mut R) -> Vec<Complex<P>> {
    let mut state = (0..1usize << n)
        .map(|_| {
            Complex::new(
                P::from(rng.gen::<f64>() - 0.5).unwrap(),
                P::from(rng.gen::<f64>() - 0.5).unwrap(),
            )
        })
        .collect::<Vec<_>>();
    normalize(&mut state);
    state
}

/// Generate a random normalized wave function on `n` qubits with real,
/// non-negative amplitudes. Such states are reproduced exactly by the
/// preparation sequence since no phase correction is involved.
pub fn random_real_wave_function<P: Precision, R: Rng>(n: usize, rng: &mut R) -> Vec<Complex<P>> {
    let mut state = (0..1usize << n)
        .map(|_| Complex::new(P::from(rng.gen::<f64>()).unwrap(), P::zero()))
        .collect::<Vec<_>>();
    normalize(&mut state);
    state
}

/// Generate a random normalized real wave function supported only on the
/// given basis-state indices. All other amplitudes are exactly zero.
pub fn random_sparse_wave_function<P: Precision, R: Rng>(
    n: usize,
    support: &[usize],
    rng: &mut R,
) -> Vec<Complex<P>> {
    let mut state = vec![Complex::zero(); 1 << n];
    for index in support {
        state[*index] = Complex::new(P::from(rng.gen::<f64>()).unwrap(), P::zero());
    }
    normalize(&mut state);
    state
}

fn normalize<P: Precision>(state: &mut [Complex<P>]) {
    let norm = state.iter().map(|c| c.norm_sqr()).sum::<P>().sqrt();
    for c in state.iter_mut() {
        *c = *c / norm;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn norm(state: &[Complex<f64>]) -> f64 {
        state.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt()
    }

    #[test]
    fn test_random_states_are_normalized() {
        let mut rng = StdRng::seed_from_u64(0);
        for n in 0..6 {
            let state = random_wave_function::<f64, _>(n, &mut rng);
            assert_eq!(state.len(), 1 << n);
            assert!((norm(&state) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_random_real_state_is_nonnegative() {
        let mut rng = StdRng::seed_from_u64(1);
        let state = random_real_wave_function::<f64, _>(4, &mut rng);
        assert!(state.iter().all(|c| c.im == 0.0 && c.re >= 0.0));
        assert!((norm(&state) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sparse_state_support() {
        let mut rng = StdRng::seed_from_u64(2);
        let support = [1, 6, 7];
        let state = random_sparse_wave_function::<f64, _>(3, &support, &mut rng);
        for (index, c) in state.iter().enumerate() {
            if support.contains(&index) {
                assert!(c.re > 0.0);
            } else {
                assert_eq!(c.re, 0.0);
            }
        }
        assert!((norm(&state) - 1.0).abs() < 1e-12);
    }
}

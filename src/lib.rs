#![forbid(unsafe_code)]
#![deny(
    unreachable_pub,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    missing_docs
)]

//! Qubit-efficient quantum state preparation.
//!
//! Given a normalized complex vector of length `2^n`, this crate computes the
//! sequence of X gates and multi-controlled Ry/Rz rotations which prepares the
//! corresponding quantum state from |0...0> on exactly `n` qubits. The
//! construction walks a binary tree over the amplitudes: at each node one Ry
//! rotation redistributes probability mass between the two subtrees and one Rz
//! rotation aligns their relative phase. Zero-probability subtrees and
//! zero-angle rotations emit no gates, so gate counts track the support of the
//! state rather than the full `2^n`.
//!
//! The output is an abstract, ordered [`gates::GateOp`] sequence. It can be
//! replayed against any backend implementing [`sim::CircuitBuilder`]; the
//! bundled [`sim::LocalSimulator`] does so by dense state-vector update, which
//! is how the round-trip tests verify the construction.
//!
//! # Example
//! ```
//! use qsp::prelude::*;
//!
//! # fn main() -> StatePrepResult<()> {
//! // A uniform superposition over two qubits.
//! let state = [Complex::<f64>::new(0.5, 0.0); 4];
//!
//! let ops = prepare_state(&state)?;
//!
//! let mut sim = LocalSimulator::new(2);
//! sim.run(&ops);
//! let fidelity = state_fidelity(&state, sim.state());
//! assert!((fidelity - 1.0).abs() < 1e-7);
//! # Ok(())
//! # }
//! ```
//!
//! States with relative phases are reproduced up to an unobservable global
//! phase, which is why comparisons go through [`sim::state_fidelity`] rather
//! than element-wise equality.

/// Assembly of the full preparation sequence and the public entry points.
pub mod builder;
/// Wave-function validation error types.
pub mod errors;
/// Abstract gate operations and per-node gate sequence construction.
pub mod gates;
/// The circuit-building collaborator interface and a state-vector simulator.
pub mod sim;
/// Reusable types.
pub mod types;
/// Bit manipulation and random state generation utilities.
pub mod utils;
/// Validated wave functions and rotation-angle computation.
pub mod wavefunction;

pub use num_complex::Complex;
pub use rand;
pub use types::*;

/// Commonly used types and functions.
/// ```
/// use qsp::prelude::*;
/// ```
pub mod prelude {
    pub use super::*;
    pub use crate::builder::{append_preparation_ops, prepare_state, prepare_state_with};
    pub use crate::errors::{StatePrepError, StatePrepResult};
    pub use crate::gates::{control_pattern, GateOp, GateSequenceBuilder};
    pub use crate::sim::{circuit_unitary, run_ops, state_fidelity, CircuitBuilder, LocalSimulator};
    pub use crate::wavefunction::{validate_wave_function, WaveFunction};
}

use crate::errors::StatePrepResult;
use crate::gates::{GateOp, GateSequenceBuilder, DEFAULT_ANGLE_TOLERANCE};
use crate::types::Precision;
use crate::wavefunction::{WaveFunction, DEFAULT_NORM_TOLERANCE};
use crate::Complex;

/// Compile `state` into the gate sequence preparing it from |0...0>, using
/// the default normalization tolerance (1e-7) and elision tolerance (1e-100).
///
/// The sequence reproduces `state` up to a global phase; the phase of the
/// first nonzero amplitude is not separately corrected.
pub fn prepare_state<P: Precision>(state: &[Complex<P>]) -> StatePrepResult<Vec<GateOp<P>>> {
    prepare_state_with(
        state,
        P::from(DEFAULT_NORM_TOLERANCE).unwrap(),
        P::from(DEFAULT_ANGLE_TOLERANCE).unwrap(),
    )
}

/// Like [`prepare_state`] with explicit tolerances: `tolerance_norm` bounds
/// the allowed L2-norm deviation, `tolerance_angle` is the magnitude below
/// which a rotation is elided.
pub fn prepare_state_with<P: Precision>(
    state: &[Complex<P>],
    tolerance_norm: P,
    tolerance_angle: P,
) -> StatePrepResult<Vec<GateOp<P>>> {
    let wf = WaveFunction::with_tolerance(state, tolerance_norm)?;
    let builder = GateSequenceBuilder::new(tolerance_angle);
    let mut ops = Vec::new();
    append_preparation_ops(&wf, &builder, &mut ops);
    Ok(ops)
}

/// Append the full preparation sequence for `wf` onto `ops`, leaving any
/// operations already present in front.
///
/// Nodes are visited with `s` descending from `n` to 1 and, within a level,
/// `j` descending from `2^(n-s)` to 1. The angle formulas assume exactly this
/// traversal order. For `n = 0` there are no nodes and nothing is appended.
pub fn append_preparation_ops<P: Precision>(
    wf: &WaveFunction<P>,
    builder: &GateSequenceBuilder<P>,
    ops: &mut Vec<GateOp<P>>,
) {
    let n = wf.n();
    for s in (1..=n).rev() {
        for j in (1..=1usize << (n - s)).rev() {
            builder.append_node(wf, s, j, ops);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StatePrepError;

    #[test]
    fn test_single_basis_state_is_empty() {
        let state = [Complex::new(1.0f64, 0.0)];
        let ops = prepare_state(&state).unwrap();
        assert!(ops.is_empty());
    }

    #[test]
    fn test_all_zero_basis_state_emits_nothing() {
        let mut state = [Complex::new(0.0f64, 0.0); 16];
        state[0] = Complex::new(1.0, 0.0);
        let ops = prepare_state(&state).unwrap();
        assert!(ops.is_empty());
    }

    #[test]
    fn test_single_excited_basis_state_gate_count() {
        // |0101> on four qubits: two levels move mass, each a pi rotation
        // wrapped in its anti-control flips. Everything else is elided.
        let mut state = [Complex::new(0.0f64, 0.0); 16];
        state[0b0101] = Complex::new(1.0, 0.0);
        let ops = prepare_state(&state).unwrap();
        assert_eq!(ops.len(), 8);
        let rotations = ops
            .iter()
            .filter(|op| matches!(op, GateOp::ControlledRy { .. }))
            .count();
        assert_eq!(rotations, 2);
    }

    #[test]
    fn test_validation_errors_propagate() {
        let state = [Complex::new(1.0f64, 0.0); 3];
        assert_eq!(
            prepare_state(&state),
            Err(StatePrepError::InvalidLength { len: 3 })
        );

        let state = [
            Complex::new(1.0f64, 0.0),
            Complex::new(1.0, 0.0),
            Complex::new(0.0, 0.0),
            Complex::new(0.0, 0.0),
        ];
        assert!(matches!(
            prepare_state(&state),
            Err(StatePrepError::NotNormalized { .. })
        ));
    }

    #[test]
    fn test_loose_tolerance_admits_slightly_denormalized_input() {
        let eps = 1e-6;
        let state = [
            Complex::new((0.5f64 + eps).sqrt(), 0.0),
            Complex::new(0.5f64.sqrt(), 0.0),
        ];
        assert!(matches!(
            prepare_state(&state),
            Err(StatePrepError::NotNormalized { .. })
        ));
        assert!(prepare_state_with(&state, 1e-5, 1e-100).is_ok());
    }

    #[test]
    fn test_ordering_levels_before_leaves() {
        // The first rotation of any nontrivial real state targets qubit 0.
        let state = [
            Complex::new(0.5f64, 0.0),
            Complex::new(0.5, 0.0),
            Complex::new(0.5, 0.0),
            Complex::new(0.5, 0.0),
        ];
        let ops = prepare_state(&state).unwrap();
        match &ops[0] {
            GateOp::ControlledRy {
                target, controls, ..
            } => {
                assert_eq!(*target, 0);
                assert!(controls.is_empty());
            }
            other => panic!("expected root rotation first, got {:?}", other),
        }
        // Within a level, descending j means the all-positive-controls node
        // comes before the all-anti-controls node.
        match &ops[1] {
            GateOp::ControlledRy {
                target, controls, ..
            } => {
                assert_eq!(*target, 1);
                assert_eq!(controls.as_slice(), &[0]);
            }
            other => panic!("expected j = 2 node second, got {:?}", other),
        }
    }
}

use smallvec::SmallVec;

use crate::types::Precision;
use crate::utils::get_bit;
use crate::wavefunction::WaveFunction;

/// Default elision tolerance: rotations whose angle magnitude is at or below
/// this are dropped, so effectively only exact zeros are skipped.
pub const DEFAULT_ANGLE_TOLERANCE: f64 = 1e-100;

/// Control-qubit index list, held inline for the common shallow case.
pub type Controls = SmallVec<[usize; 8]>;

/// Control-qubit assignment for one recursion node: `false` marks an
/// anti-control (the qubit must be |0>), `true` a positive control. Position 0
/// refers to control qubit 0, the most significant qubit of the control block.
pub type ControlPattern = SmallVec<[bool; 8]>;

/// An abstract operation on the preparation circuit. Sequences of these are
/// the crate's output; their order is the circuit execution order.
#[derive(Debug, Clone, PartialEq)]
pub enum GateOp<P: Precision> {
    /// A Pauli X flip of a single qubit.
    X {
        /// Qubit to flip.
        qubit: usize,
    },
    /// A y-axis rotation of `target`, applied when every control qubit is |1>.
    ControlledRy {
        /// Rotation angle.
        theta: P,
        /// Target qubit.
        target: usize,
        /// Positive-control qubits.
        controls: Controls,
    },
    /// A z-axis rotation of `target`, applied when every control qubit is |1>.
    ControlledRz {
        /// Rotation angle.
        theta: P,
        /// Target qubit.
        target: usize,
        /// Positive-control qubits.
        controls: Controls,
    },
}

/// Derive the control assignment for node `(s, j)` on `n` qubits: the binary
/// representation of `j - 1`, zero-padded to width `n - s`, most significant
/// bit first.
///
/// # Example
/// ```
/// use qsp::gates::control_pattern;
///
/// let pattern = control_pattern(1, 3, 3);
/// assert_eq!(pattern.as_slice(), &[true, false]);
/// ```
pub fn control_pattern(s: usize, j: usize, n: usize) -> ControlPattern {
    let width = n - s;
    (0..width).map(|i| get_bit(j - 1, width - 1 - i)).collect()
}

/// Emits the gate operations of single recursion nodes, skipping rotations
/// whose angle is within tolerance of zero. Anti-controls are emulated by
/// flipping the qubit with X before and after the rotations, since the
/// controlled rotations only support positive controls.
#[derive(Debug, Clone, Copy)]
pub struct GateSequenceBuilder<P: Precision> {
    tolerance: P,
}

impl<P: Precision> Default for GateSequenceBuilder<P> {
    fn default() -> Self {
        Self::new(P::from(DEFAULT_ANGLE_TOLERANCE).unwrap())
    }
}

impl<P: Precision> GateSequenceBuilder<P> {
    /// A builder with an explicit elision tolerance.
    pub fn new(tolerance: P) -> Self {
        Self { tolerance }
    }

    /// Append the operations for node `(s, j)` of `wf` onto `ops`. A node
    /// whose Ry and Rz angles are both within tolerance contributes nothing;
    /// otherwise the X wrap is emitted once around whichever rotations
    /// survive, so a pure-amplitude or pure-phase node costs one rotation,
    /// not two.
    pub fn append_node(&self, wf: &WaveFunction<P>, s: usize, j: usize, ops: &mut Vec<GateOp<P>>) {
        let ry = wf.ry_angle(s, j);
        let rz = wf.rz_angle(s, j);
        let emit_ry = ry.abs() > self.tolerance;
        let emit_rz = rz.abs() > self.tolerance;
        if !emit_ry && !emit_rz {
            return;
        }

        let n = wf.n();
        let target = n - s;
        let pattern = control_pattern(s, j, n);
        let controls = (0..target).collect::<Controls>();

        append_anticontrol_flips(&pattern, ops);
        if emit_ry {
            ops.push(GateOp::ControlledRy {
                theta: ry,
                target,
                controls: controls.clone(),
            });
        }
        if emit_rz {
            ops.push(GateOp::ControlledRz {
                theta: rz,
                target,
                controls,
            });
        }
        append_anticontrol_flips(&pattern, ops);
    }
}

fn append_anticontrol_flips<P: Precision>(pattern: &[bool], ops: &mut Vec<GateOp<P>>) {
    pattern
        .iter()
        .enumerate()
        .filter(|(_, positive)| !**positive)
        .for_each(|(qubit, _)| ops.push(GateOp::X { qubit }));
}

use num_traits::{One, Zero};

use crate::gates::GateOp;
use crate::types::Precision;
use crate::Complex;

/// The interface a preparation sequence is replayed against. Backends only
/// need the three primitives the sequence is built from: X flips and Ry/Rz
/// rotations with positive controls.
pub trait CircuitBuilder<P: Precision> {
    /// Apply a Pauli X to `qubit`.
    fn x(&mut self, qubit: usize);
    /// Apply Ry(`theta`) to `target` when every qubit in `controls` is |1>.
    fn cry(&mut self, theta: P, target: usize, controls: &[usize]);
    /// Apply Rz(`theta`) to `target` when every qubit in `controls` is |1>.
    fn crz(&mut self, theta: P, target: usize, controls: &[usize]);
}

/// Replay `ops` in sequence order onto `builder`. Order is the circuit
/// execution order and must not be permuted.
pub fn run_ops<P, B>(ops: &[GateOp<P>], builder: &mut B)
where
    P: Precision,
    B: CircuitBuilder<P>,
{
    for op in ops {
        match op {
            GateOp::X { qubit } => builder.x(*qubit),
            GateOp::ControlledRy {
                theta,
                target,
                controls,
            } => builder.cry(*theta, *target, controls),
            GateOp::ControlledRz {
                theta,
                target,
                controls,
            } => builder.crz(*theta, *target, controls),
        }
    }
}

/// A dense state-vector simulator over `n` qubits, starting in |0...0>.
///
/// Qubit 0 is the MOST significant bit of a basis-state index, matching the
/// index convention of the angle formulas: the root rotation on qubit 0
/// splits the wave-function array into its lower and upper halves.
///
/// Rotation conventions are the standard ones:
/// Ry(t) = [[cos t/2, -sin t/2], [sin t/2, cos t/2]],
/// Rz(t) = diag(e^{-it/2}, e^{it/2}).
#[derive(Debug, Clone)]
pub struct LocalSimulator<P: Precision> {
    state: Vec<Complex<P>>,
    n: usize,
}

impl<P: Precision> LocalSimulator<P> {
    /// A simulator for `n` qubits in the all-zero state.
    pub fn new(n: usize) -> Self {
        let mut state = vec![Complex::zero(); 1 << n];
        state[0] = Complex::one();
        Self { state, n }
    }

    /// A simulator for `n` qubits starting in the classical basis state
    /// `index`.
    pub fn new_with_basis_state(n: usize, index: usize) -> Self {
        let mut sim = Self::new(n);
        sim.state[0] = Complex::zero();
        sim.state[index] = Complex::one();
        sim
    }

    /// Number of qubits.
    pub fn n(&self) -> usize {
        self.n
    }

    /// The current state vector, in wave-function-array index order.
    pub fn state(&self) -> &[Complex<P>] {
        &self.state
    }

    /// Consume the simulator and return the state vector.
    pub fn into_state(self) -> Vec<Complex<P>> {
        self.state
    }

    /// Replay a gate sequence on the current state.
    pub fn run(&mut self, ops: &[GateOp<P>]) {
        run_ops(ops, self);
    }

    fn bit_mask(&self, qubit: usize) -> usize {
        debug_assert!(qubit < self.n);
        1 << (self.n - 1 - qubit)
    }

    /// Apply the 2x2 matrix `[m00, m01, m10, m11]` to `target`, restricted to
    /// basis states where every control bit is set.
    fn apply_controlled_single_qubit(
        &mut self,
        mat: [Complex<P>; 4],
        target: usize,
        controls: &[usize],
    ) {
        let target_bit = self.bit_mask(target);
        let control_mask = controls
            .iter()
            .fold(0usize, |mask, c| mask | self.bit_mask(*c));
        for index in 0..self.state.len() {
            if index & target_bit == 0 && index & control_mask == control_mask {
                let lower = self.state[index];
                let upper = self.state[index | target_bit];
                self.state[index] = mat[0] * lower + mat[1] * upper;
                self.state[index | target_bit] = mat[2] * lower + mat[3] * upper;
            }
        }
    }
}

impl<P: Precision> CircuitBuilder<P> for LocalSimulator<P> {
    fn x(&mut self, qubit: usize) {
        let o = Complex::zero();
        let l = Complex::one();
        self.apply_controlled_single_qubit([o, l, l, o], qubit, &[]);
    }

    fn cry(&mut self, theta: P, target: usize, controls: &[usize]) {
        let half = theta * P::from(0.5).unwrap();
        let c = Complex::from(half.cos());
        let s = Complex::from(half.sin());
        self.apply_controlled_single_qubit([c, -s, s, c], target, controls);
    }

    fn crz(&mut self, theta: P, target: usize, controls: &[usize]) {
        let half = theta * P::from(0.5).unwrap();
        let o = Complex::zero();
        let lo = Complex::from_polar(P::one(), -half);
        let hi = Complex::from_polar(P::one(), half);
        self.apply_controlled_single_qubit([lo, o, o, hi], target, controls);
    }
}

/// Compute the full unitary of a gate sequence on `n` qubits by running it on
/// every classical basis state. Entry `[input][output]` is the amplitude of
/// basis state `output` after preparing from `input`, i.e. the outer index is
/// the matrix column.
pub fn circuit_unitary<P: Precision>(n: usize, ops: &[GateOp<P>]) -> Vec<Vec<Complex<P>>> {
    (0..1usize << n)
        .map(|input| {
            let mut sim = LocalSimulator::new_with_basis_state(n, input);
            sim.run(ops);
            sim.into_state()
        })
        .collect()
}

/// The modulus of the inner product of two state vectors. Insensitive to
/// global phase, which is how equivalent quantum states must be compared.
pub fn state_fidelity<P: Precision>(a: &[Complex<P>], b: &[Complex<P>]) -> P {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| x.conj() * *y)
        .sum::<Complex<P>>()
        .norm()
}

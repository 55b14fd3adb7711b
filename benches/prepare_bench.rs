#[macro_use]
extern crate bencher;
extern crate qsp;

use bencher::Bencher;

use qsp::prelude::*;
use qsp::rand::rngs::StdRng;
use qsp::rand::SeedableRng;
use qsp::utils::random_wave_function;

fn bench_prepare_8_qubits(b: &mut Bencher) {
    let mut rng = StdRng::seed_from_u64(0);
    let state = random_wave_function::<f64, _>(8, &mut rng);

    b.iter(|| prepare_state(&state).unwrap());
}

fn bench_prepare_10_qubits(b: &mut Bencher) {
    let mut rng = StdRng::seed_from_u64(0);
    let state = random_wave_function::<f64, _>(10, &mut rng);

    b.iter(|| prepare_state(&state).unwrap());
}

fn bench_prepare_and_simulate_6_qubits(b: &mut Bencher) {
    let mut rng = StdRng::seed_from_u64(1);
    let state = random_wave_function::<f64, _>(6, &mut rng);

    b.iter(|| {
        let ops = prepare_state(&state).unwrap();
        let mut sim = LocalSimulator::new(6);
        sim.run(&ops);
        sim.into_state()
    });
}

benchmark_group!(
    benches,
    bench_prepare_8_qubits,
    bench_prepare_10_qubits,
    bench_prepare_and_simulate_6_qubits
);
benchmark_main!(benches);

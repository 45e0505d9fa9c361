//! Example demonstrating the Kronecker apply sweep on a generated problem
//!
//! Plays the role of a benchmark driver: generate a seeded random problem,
//! run repeated timed sweeps on a reused arena, and report elapsed time and
//! throughput.
//!
//! Run with: cargo run --example kron_apply --release

use anyhow::Result;
use kronvec_core::generate;
use kronvec_kernels::{
    kron_apply_inplace, sweep_element_ops, time_operation, PingPong, TimingResult,
};

fn main() -> Result<()> {
    println!("=== KronVec Apply Example ===\n");

    // Example 1: Generate a problem
    println!("1. Problem Generation");
    println!("---------------------");

    let modes = 8;
    let problem = generate::<f64>(0, modes)?;
    let sizes = problem.sizes();
    let len = problem.vector_len();
    println!("Modes: {}", modes);
    println!("Sizes: {:?}", sizes.as_slice());
    println!("Vector length L = {}", len);

    let ops = sweep_element_ops(sizes.as_slice()).expect("sizes fit in usize");
    println!("Multiply-adds per sweep: {}", ops);
    println!();

    // Example 2: Single timed sweep
    println!("2. Single Sweep");
    println!("---------------");

    let views = problem.factor_views();
    let mut buffers = PingPong::for_input(&problem.input_view())?;

    let (slot, timing) = time_operation("kron_apply", || {
        kron_apply_inplace(&views, &mut buffers).expect("validated problem")
    });
    TimingResult::new("kron_apply", timing.elapsed_ms, ops).print();

    let result = buffers.slot(slot);
    let checksum: f64 = result.iter().sum();
    println!("Result slot: {:?}, checksum = {:.6}", slot, checksum);
    println!();

    // Example 3: Repeated sweeps on the reused arena
    println!("3. Repeated Sweeps (reused arena)");
    println!("---------------------------------");

    let repetitions = 10;
    let mut total_ms = 0.0;
    for _ in 0..repetitions {
        buffers.load(&problem.input_view())?;
        let (rerun, timing) = time_operation("sweep", || {
            kron_apply_inplace(&views, &mut buffers).expect("validated problem")
        });
        assert_eq!(rerun, slot);
        total_ms += timing.elapsed_ms;
    }
    let mean_ms = total_ms / repetitions as f64;
    TimingResult::new(
        format!("mean of {} sweeps", repetitions),
        mean_ms,
        ops,
    )
    .print();

    let rerun_checksum: f64 = buffers.slot(slot).iter().sum();
    println!(
        "Checksum stable across reruns: {}",
        (rerun_checksum - checksum).abs() < 1e-12
    );

    Ok(())
}

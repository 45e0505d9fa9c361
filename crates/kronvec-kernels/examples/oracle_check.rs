//! Example verifying the sweep against the dense Kronecker oracle
//!
//! Builds small problems where the full L x L Kronecker product is
//! affordable, applies it explicitly, and compares against the matrix-free
//! sweep.
//!
//! Run with: cargo run --example oracle_check

use anyhow::Result;
use kronvec_core::{generate_with, ProblemConfig, SizePolicy};
use kronvec_kernels::{kron_apply, kron_apply_dense, kron_full, max_abs_diff};

fn main() -> Result<()> {
    println!("=== KronVec Oracle Check ===\n");

    // Example 1: Explicit Kronecker product of a small problem
    println!("1. Dense Kronecker Product");
    println!("--------------------------");

    let config = ProblemConfig::new(2)
        .with_base_size(2)
        .with_size_policy(SizePolicy::Uniform);
    let problem = generate_with::<f64>(42, &config)?;
    let views = problem.factor_views();

    let full = kron_full(&views)?;
    println!("Factor sizes: {:?}", problem.sizes().as_slice());
    println!("Full product shape: {:?}", full.shape());
    println!();

    // Example 2: Sweep vs oracle across seeds and mode counts
    println!("2. Sweep vs Oracle");
    println!("------------------");

    let mut worst: f64 = 0.0;
    for modes in 1..=3 {
        for seed in 0..5 {
            let config = ProblemConfig::new(modes)
                .with_base_size(2)
                .with_size_policy(SizePolicy::Uniform);
            let problem = generate_with::<f64>(seed, &config)?;
            let views = problem.factor_views();

            let sweep = kron_apply(&views, &problem.input_view())?;
            let dense = kron_apply_dense(&views, &problem.input_view())?;

            let diff = max_abs_diff(&sweep.view(), &dense.view());
            worst = worst.max(diff);
            println!(
                "modes={} seed={} L={:3}  max |sweep - dense| = {:.3e}",
                modes,
                seed,
                problem.vector_len(),
                diff
            );
        }
    }
    println!();
    println!("Worst deviation: {:.3e}", worst);
    println!("Within 1e-10 tolerance: {}", worst < 1e-10);

    Ok(())
}

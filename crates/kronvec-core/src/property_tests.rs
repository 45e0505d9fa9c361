//! Property-based tests for problem generation and validation
//!
//! These tests verify structural invariants that should hold for all seeds
//! and configurations.

use super::*;
use proptest::prelude::*;

proptest! {
    /// Every generated problem satisfies the structural invariants: square
    /// factors, sizes in {base, 2*base}, input length equal to the size
    /// product.
    #[test]
    fn test_generate_structure(seed in 0u64..1_000, modes in 1usize..6) {
        let problem = generate::<f64>(seed, modes).unwrap();

        prop_assert_eq!(problem.modes(), modes);

        let mut len = 1usize;
        for (factor, &n) in problem.factors().iter().zip(problem.sizes().iter()) {
            prop_assert!(n == 4 || n == 8);
            prop_assert_eq!(factor.shape(), &[n, n]);
            len *= n;
        }
        prop_assert_eq!(problem.vector_len(), len);
    }

    /// Every entry of every generated buffer lies in [ln 1.5, ln 2).
    #[test]
    fn test_generate_entry_bounds(seed in 0u64..1_000, modes in 1usize..5) {
        let problem = generate::<f64>(seed, modes).unwrap();

        let lo = 1.5f64.ln();
        let hi = 2.0f64.ln();
        for factor in problem.factors() {
            for &v in factor.iter() {
                prop_assert!(v >= lo && v < hi);
            }
        }
        for &v in problem.input().iter() {
            prop_assert!(v >= lo && v < hi);
        }
    }

    /// Identical (seed, config) pairs give bit-identical problems.
    #[test]
    fn test_generate_deterministic(seed in 0u64..10_000, modes in 1usize..6) {
        let a = generate::<f64>(seed, modes).unwrap();
        let b = generate::<f64>(seed, modes).unwrap();

        prop_assert_eq!(a, b);
    }

    /// Different seeds give different input fills.
    #[test]
    fn test_generate_seed_sensitivity(seed in 0u64..10_000, modes in 1usize..5) {
        let a = generate::<f64>(seed, modes).unwrap();
        let b = generate::<f64>(seed + 1, modes).unwrap();

        prop_assert_ne!(a.input(), b.input());
    }

    /// The uniform policy gives every mode exactly the base size, for any
    /// base size.
    #[test]
    fn test_uniform_policy_sizes(seed in 0u64..1_000, modes in 1usize..6, base in 1usize..7) {
        let config = ProblemConfig::new(modes)
            .with_base_size(base)
            .with_size_policy(SizePolicy::Uniform);
        let problem = generate_with::<f64>(seed, &config).unwrap();

        for &n in problem.sizes().iter() {
            prop_assert_eq!(n, base);
        }
    }

    /// Rebuilding a generated problem from its parts validates cleanly and
    /// preserves it exactly.
    #[test]
    fn test_problem_rebuild_round_trip(seed in 0u64..1_000, modes in 1usize..5) {
        let problem = generate::<f64>(seed, modes).unwrap();
        let clone = problem.clone();

        let (factors, input) = problem.into_parts();
        let rebuilt = KronProblem::new(factors, input).unwrap();

        prop_assert_eq!(rebuilt, clone);
    }

    /// checked_vector_len matches the plain product whenever the plain
    /// product does not overflow.
    #[test]
    fn test_checked_len_matches_product(sizes in prop::collection::vec(1usize..10, 1..8)) {
        let expected: usize = sizes.iter().product();
        prop_assert_eq!(checked_vector_len("test", &sizes).unwrap(), expected);
    }
}

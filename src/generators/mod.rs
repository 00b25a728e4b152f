use rand::{SeedableRng, rngs::StdRng};

pub mod difficulty;
pub mod edges;
pub mod kruskal;
pub mod union_find;

pub use difficulty::inject_loops;
pub use kruskal::{CarveStep, CarverPhase, KruskalCarver};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

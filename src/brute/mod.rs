//! Exhaustive Hamiltonian-cycle search (brute force).
//!
//! Generates every permutation of the vertex set, scores each as a closed
//! cycle, and keeps the minimum. Correct by enumeration and exponentially
//! expensive: `O(n! * n)` time, so it is only a reference solver for small
//! instances or a ground-truth oracle for heuristic solvers.
//!
//! Because every candidate is independent, the search partitions cleanly by
//! leading vertex; the optional `parallel` feature distributes partitions
//! over rayon workers with a final min-reduction.
//!
//! # References
//!
//! - Applegate, Bixby, Chvátal & Cook (2006), "The Traveling Salesman
//!   Problem: A Computational Study"
//! - Held & Karp (1962), "A Dynamic Programming Approach to Sequencing
//!   Problems" (the classical improvement this crate deliberately omits)

mod config;
mod permute;
mod runner;

pub use config::BruteConfig;
pub use runner::{minimum_cycle_weight, BruteResult, BruteRunner};

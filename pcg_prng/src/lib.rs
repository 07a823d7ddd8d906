// Deterministic PCG (permuted congruential generator) engines.
//
// Two independent generators with the same shape:
// - `pcg64.rs`:       `Pcg64`, 64-bit LCG state, 32-bit output (XSH-RS by
//                     default, XSH-RR available). Output permutes the state
//                     from *before* the step.
// - `pcg128.rs`:      `Pcg128`, 128-bit LCG state stored as two `u64` halves,
//                     64-bit (XSL-RR) or 128-bit (XSL-RR-RR) output. Output
//                     permutes the state from *after* the step.
// - `wide.rs`:        Exact modulo-2^128 multiply and add over (high, low)
//                     halves; the arithmetic behind every `Pcg128` step.
// - `default_rng.rs`: One shared instance of each engine behind free
//                     functions (`seed64`, `next_u32`, `seed128`, `next_u64`,
//                     `next_u128`) for callers that don't want to own state.
// - `config.rs`:      JSON-loadable engine descriptions (`Pcg64Config`,
//                     `Pcg128Config`) and the crate's only error type.
// - `rng_core.rs`:    `rand_core::{RngCore, SeedableRng}` impls, behind the
//                     `rand_core` feature.
//
// Every engine operation is total: construction does no validation, and
// stepping, seeding, and output are fixed-width wrapping arithmetic. Weak
// parameters (an even multiplier, say) give a weak generator, not an error.
//
// **Critical constraint: determinism.** Given the same parameters and seed,
// every engine must produce a bit-identical stream on every platform. This
// is not a cryptographic generator.
//
// Optional features:
// - `log`:       seeding and config events go to the `log` facade.
// - `rand_core`: ecosystem trait impls.

#[macro_use]
mod log_macros;

pub mod config;
pub mod default_rng;
pub mod pcg128;
pub mod pcg64;
#[cfg(feature = "rand_core")]
mod rng_core;
pub mod wide;

pub use config::{ConfigError, HighLow, Pcg128Config, Pcg64Config};
pub use default_rng::{next_u128, next_u32, next_u64, seed128, seed64};
pub use pcg128::Pcg128;
pub use pcg64::Pcg64;

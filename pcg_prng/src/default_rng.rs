// Process-wide default generators.
//
// One `Pcg64` and one `Pcg128`, each built with the reference constants and
// the raw initial state (1 and (1, 1)), living in `static` mutexes. The free
// functions below lock, delegate, and unlock. Nothing else happens here.
//
// The mutex only makes access memory-safe. Callers on different threads
// still share a single stream and will see their draws interleave in an
// unspecified order; code that needs a reproducible sequence per thread or
// per task should own its own engine instead.
//
// A panic while the lock is held cannot leave an engine half-updated (every
// operation is a few integer ops), so a poisoned lock is simply reclaimed.

use crate::pcg128::Pcg128;
use crate::pcg64::Pcg64;
use std::sync::{Mutex, MutexGuard, PoisonError};

static DEFAULT_PCG64: Mutex<Pcg64> = Mutex::new(Pcg64::new_default());
static DEFAULT_PCG128: Mutex<Pcg128> = Mutex::new(Pcg128::new_default());

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Reseed the default 64-bit-state generator.
pub fn seed64(seed: u64) {
    debug!("reseeding default pcg64");
    lock(&DEFAULT_PCG64).seed(seed);
}

/// Next XSH-RS output from the default 64-bit-state generator.
pub fn next_u32() -> u32 {
    lock(&DEFAULT_PCG64).next_u32()
}

/// Reseed the default 128-bit-state generator.
pub fn seed128(seed_high: u64, seed_low: u64) {
    debug!("reseeding default pcg128");
    lock(&DEFAULT_PCG128).seed(seed_high, seed_low);
}

/// Next XSL-RR output from the default 128-bit-state generator.
pub fn next_u64() -> u64 {
    lock(&DEFAULT_PCG128).next_u64()
}

/// Next XSL-RR-RR output, `(high, low)`, from the default 128-bit-state
/// generator.
pub fn next_u128() -> (u64, u64) {
    lock(&DEFAULT_PCG128).next_u128()
}

// `rand_core` trait impls, behind the `rand_core` feature.
//
// `RngCore` exposes each engine's default output function:
// - `Pcg64`:  `next_u32` is XSH-RS; `next_u64` is two `next_u32` calls,
//             low word first.
// - `Pcg128`: `next_u64` is XSL-RR; `next_u32` truncates one `next_u64`.
//
// `SeedableRng` always goes through the stream-selectable seeding procedure
// on top of the reference multiplier. Seeds are little-endian:
// - `Pcg64`:  16 bytes = seed (u64) ++ stream (u64).
// - `Pcg128`: 32 bytes = seed (low, high) ++ stream (low, high).

use crate::pcg128::Pcg128;
use crate::pcg64::Pcg64;
use rand_core::{Error, RngCore, SeedableRng, impls, le};

impl RngCore for Pcg64 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Pcg64::next_u32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Pcg64 {
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut words = [0u64; 2];
        le::read_u64_into(&seed, &mut words);
        let mut rng = Pcg64::new_default();
        rng.seed_with_stream(words[0], words[1]);
        rng
    }
}

impl RngCore for Pcg128 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Pcg128::next_u64(self) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        Pcg128::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Pcg128 {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut words = [0u64; 4];
        le::read_u64_into(&seed, &mut words);
        let mut rng = Pcg128::new_default();
        rng.seed_with_stream(words[1], words[0], words[3], words[2]);
        rng
    }
}

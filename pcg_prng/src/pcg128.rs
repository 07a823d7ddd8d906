// PCG generator with 128-bit state and 64-bit or 128-bit output.
//
// Multiplier, increment, and state are each stored as a high and a low `u64`
// and combined through `wide.rs`, so the transition is exact modulo 2^128.
//
// Output functions:
// - `next_u64`:  XSL-RR. XOR the two state halves, rotate right by the top
//                six bits of the high half.
// - `next_u128`: XSL-RR-RR. The XSL-RR word is the low output; the high
//                output is the high state half rotated by the low output's
//                bottom six bits.
//
// Unlike `Pcg64`, both output calls step first and permute the *post-step*
// state. Each call performs exactly one step, including `next_u128`.
//
// Seeding follows the same two-step bump as `Pcg64`, with the seed added as
// a 128-bit value.

use crate::wide::{self, Halves};
use serde::{Deserialize, Serialize};

/// Reference multiplier, high half.
pub const DEFAULT_MULTIPLIER_HIGH: u64 = 0x2360_ed05_1fc6_5da4;
/// Reference multiplier, low half.
pub const DEFAULT_MULTIPLIER_LOW: u64 = 0x4385_df64_9fcc_f645;
/// Reference increment, high half.
pub const DEFAULT_INCREMENT_HIGH: u64 = 0x5851_f42d_4c95_7f2d;
/// Reference increment, low half.
pub const DEFAULT_INCREMENT_LOW: u64 = 0x1405_7b7e_f767_814f;
/// Initial raw state of a default-constructed generator, high half.
pub const DEFAULT_STATE_HIGH: u64 = 1;
/// Initial raw state of a default-constructed generator, low half.
pub const DEFAULT_STATE_LOW: u64 = 1;

/// PCG engine with 128-bit state and 64/128-bit output.
///
/// Like `Pcg64`, construction is unchecked and every operation is total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pcg128 {
    multiplier_high: u64,
    multiplier_low: u64,
    increment_high: u64,
    increment_low: u64,
    state_high: u64,
    state_low: u64,
}

impl Pcg128 {
    /// Create an engine with exactly these field values.
    pub const fn new(
        multiplier_high: u64,
        multiplier_low: u64,
        increment_high: u64,
        increment_low: u64,
        state_high: u64,
        state_low: u64,
    ) -> Self {
        Self {
            multiplier_high,
            multiplier_low,
            increment_high,
            increment_low,
            state_high,
            state_low,
        }
    }

    /// Create an engine with the reference multiplier and increment and a
    /// raw state of (1, 1) (unseeded).
    pub const fn new_default() -> Self {
        Self::new(
            DEFAULT_MULTIPLIER_HIGH,
            DEFAULT_MULTIPLIER_LOW,
            DEFAULT_INCREMENT_HIGH,
            DEFAULT_INCREMENT_LOW,
            DEFAULT_STATE_HIGH,
            DEFAULT_STATE_LOW,
        )
    }

    /// High half of the LCG multiplier.
    pub fn multiplier_high(&self) -> u64 {
        self.multiplier_high
    }

    /// Low half of the LCG multiplier.
    pub fn multiplier_low(&self) -> u64 {
        self.multiplier_low
    }

    /// High half of the LCG increment.
    pub fn increment_high(&self) -> u64 {
        self.increment_high
    }

    /// Low half of the LCG increment.
    pub fn increment_low(&self) -> u64 {
        self.increment_low
    }

    /// High half of the current raw state.
    pub fn state_high(&self) -> u64 {
        self.state_high
    }

    /// Low half of the current raw state.
    pub fn state_low(&self) -> u64 {
        self.state_low
    }

    fn state(&self) -> Halves {
        (self.state_high, self.state_low)
    }

    fn set_state(&mut self, (high, low): Halves) {
        self.state_high = high;
        self.state_low = low;
    }

    fn multiplier(&self) -> Halves {
        (self.multiplier_high, self.multiplier_low)
    }

    fn increment(&self) -> Halves {
        (self.increment_high, self.increment_low)
    }

    /// One LCG step: `state = state * multiplier + increment (mod 2^128)`.
    #[inline]
    pub fn step_lcg(&mut self) {
        let product = wide::wrapping_mul(self.state(), self.multiplier());
        self.set_state(wide::wrapping_add(product, self.increment()));
    }

    /// One MCG step: `state = state * multiplier (mod 2^128)`.
    #[inline]
    pub fn step_mcg(&mut self) {
        self.set_state(wide::wrapping_mul(self.state(), self.multiplier()));
    }

    /// Seed for MCG use. The low bit of the low half is forced to 1.
    pub fn seed_mcg(&mut self, seed_high: u64, seed_low: u64) {
        self.state_high = seed_high;
        self.state_low = seed_low | 1;
    }

    /// Reseed with the two-step bump procedure, keeping the current
    /// multiplier and increment.
    pub fn seed(&mut self, seed_high: u64, seed_low: u64) {
        trace!("pcg128: seed {seed_high:#018x}_{seed_low:016x}");
        self.bump_seed((seed_high, seed_low));
    }

    /// Select a stream and reseed. The increment becomes
    /// `(stream_high, (stream_low << 1) | 1)`; the high half is taken as-is
    /// and the top bit of the low half is discarded.
    pub fn seed_with_stream(
        &mut self,
        seed_high: u64,
        seed_low: u64,
        stream_high: u64,
        stream_low: u64,
    ) {
        trace!(
            "pcg128: seed {seed_high:#018x}_{seed_low:016x} on stream \
             {stream_high:#018x}_{stream_low:016x}"
        );
        self.increment_high = stream_high;
        self.increment_low = (stream_low << 1) | 1;
        self.bump_seed((seed_high, seed_low));
    }

    fn bump_seed(&mut self, seed: Halves) {
        self.set_state((0, 0));
        self.step_lcg();
        self.set_state(wide::wrapping_add(self.state(), seed));
        self.step_lcg();
    }

    /// Step, then permute the new state via XSL-RR.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.step_lcg();
        output_xsl_rr_128_64(self.state_high, self.state_low)
    }

    /// Step once, then permute the new state via XSL-RR-RR.
    /// Returns `(high, low)`.
    #[inline]
    pub fn next_u128(&mut self) -> (u64, u64) {
        self.step_lcg();
        output_xsl_rr_rr_128_128(self.state_high, self.state_low)
    }

    /// Jump the LCG forward by `delta` steps in O(log delta).
    ///
    /// Equivalent to calling `step_lcg` `delta` times; all accumulation runs
    /// through the same wide arithmetic as the regular step.
    pub fn advance(&mut self, delta: u128) {
        let mut acc_mult: Halves = (0, 1);
        let mut acc_plus: Halves = (0, 0);
        let mut cur_mult = self.multiplier();
        let mut cur_plus = self.increment();
        let mut remaining = delta;

        while remaining > 0 {
            if remaining & 1 != 0 {
                acc_mult = wide::wrapping_mul(acc_mult, cur_mult);
                acc_plus = wide::wrapping_add(wide::wrapping_mul(acc_plus, cur_mult), cur_plus);
            }
            let cur_mult_plus_one = wide::wrapping_add(cur_mult, (0, 1));
            cur_plus = wide::wrapping_mul(cur_mult_plus_one, cur_plus);
            cur_mult = wide::wrapping_mul(cur_mult, cur_mult);
            remaining >>= 1;
        }
        let moved = wide::wrapping_mul(acc_mult, self.state());
        self.set_state(wide::wrapping_add(moved, acc_plus));
    }
}

impl Default for Pcg128 {
    fn default() -> Self {
        Self::new_default()
    }
}

/// XSL-RR: fold the halves by XOR and rotate right by the top six bits of
/// the high half.
#[inline]
pub fn output_xsl_rr_128_64(state_high: u64, state_low: u64) -> u64 {
    (state_high ^ state_low).rotate_right((state_high >> 58) as u32)
}

/// XSL-RR-RR: XSL-RR for the low word, then the high state half rotated by
/// the low word's bottom six bits. Returns `(high, low)`.
#[inline]
pub fn output_xsl_rr_rr_128_128(state_high: u64, state_low: u64) -> (u64, u64) {
    let low = output_xsl_rr_128_64(state_high, state_low);
    let high = state_high.rotate_right((low & 63) as u32);
    (high, low)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(high: u64, low: u64) -> Pcg128 {
        let mut rng = Pcg128::new_default();
        rng.seed(high, low);
        rng
    }

    #[test]
    fn new_keeps_fields_verbatim() {
        let rng = Pcg128::new(1, 2, 3, 4, 5, 6);
        assert_eq!(rng.multiplier_high(), 1);
        assert_eq!(rng.multiplier_low(), 2);
        assert_eq!(rng.increment_high(), 3);
        assert_eq!(rng.increment_low(), 4);
        assert_eq!(rng.state_high(), 5);
        assert_eq!(rng.state_low(), 6);
    }

    #[test]
    fn default_matches_reference_constants() {
        let rng = Pcg128::default();
        assert_eq!(rng.multiplier_high(), 0x2360ed051fc65da4);
        assert_eq!(rng.multiplier_low(), 0x4385df649fccf645);
        assert_eq!(rng.increment_high(), 0x5851f42d4c957f2d);
        assert_eq!(rng.increment_low(), 0x14057b7ef767814f);
        assert_eq!((rng.state_high(), rng.state_low()), (1, 1));
        assert_eq!(rng.multiplier_low() & 1, 1);
    }

    #[test]
    fn seed_one_one_golden_vectors() {
        let mut rng = seeded(1, 1);
        assert_eq!(rng.state_high(), 0xaf58_8b33_58d5_c7e1);
        assert_eq!(rng.state_low(), 0xefa5_6980_d850_3bdf);
        assert_eq!(rng.next_u64(), 0x9ac6_67e3_f04e_36e3);
        assert_eq!(rng.next_u64(), 0x2bed_2656_c488_4e4c);
        assert_eq!(rng.next_u64(), 0x2f77_700c_b43e_f951);

        let mut rng = seeded(1, 1);
        assert_eq!(rng.next_u128(), (0x519b_8c35_7570_e347, 0x9ac6_67e3_f04e_36e3));
        assert_eq!(rng.next_u128(), (0x268a_51de_dde9_6043, 0x2bed_2656_c488_4e4c));
    }

    #[test]
    fn step_matches_native_u128() {
        let mut rng = seeded(0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210);
        let mult: u128 = 0x2360_ed05_1fc6_5da4_4385_df64_9fcc_f645;
        let inc: u128 = 0x5851_f42d_4c95_7f2d_1405_7b7e_f767_814f;
        for _ in 0..1000 {
            let before = (u128::from(rng.state_high()) << 64) | u128::from(rng.state_low());
            rng.step_lcg();
            let after = (u128::from(rng.state_high()) << 64) | u128::from(rng.state_low());
            assert_eq!(after, before.wrapping_mul(mult).wrapping_add(inc));
        }
    }

    #[test]
    fn output_uses_post_step_state() {
        let mut rng = seeded(9, 9);
        let out = rng.next_u64();
        assert_eq!(out, output_xsl_rr_128_64(rng.state_high(), rng.state_low()));
        let (high, low) = rng.next_u128();
        assert_eq!(
            (high, low),
            output_xsl_rr_rr_128_128(rng.state_high(), rng.state_low())
        );
    }

    #[test]
    fn next_u128_steps_once() {
        let mut wide_calls = seeded(4, 2);
        let mut narrow_calls = wide_calls.clone();
        for _ in 0..10 {
            let (_, low) = wide_calls.next_u128();
            assert_eq!(low, narrow_calls.next_u64());
        }
        assert_eq!(wide_calls, narrow_calls);
    }

    #[test]
    fn determinism_same_seed_same_output() {
        let mut a = seeded(42, 42);
        let mut b = seeded(42, 42);
        for _ in 0..1000 {
            assert_eq!(a.next_u64(), b.next_u64());
            assert_eq!(a.next_u128(), b.next_u128());
        }
    }

    #[test]
    fn seed_high_half_matters() {
        let mut a = seeded(0, 1);
        let mut b = seeded(1, 1);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn stream_seed_sets_increment() {
        let mut rng = Pcg128::new_default();
        rng.seed_with_stream(0, 42, 7, 54);
        assert_eq!(rng.increment_high(), 7);
        assert_eq!(rng.increment_low(), 109);
        assert_eq!(rng.multiplier_high(), DEFAULT_MULTIPLIER_HIGH);
        assert_eq!(rng.multiplier_low(), DEFAULT_MULTIPLIER_LOW);
    }

    #[test]
    fn stream_seed_reproduces_reference_pcg64() {
        // pcg64_srandom_r(&rng, 42, 54) from the PCG C reference.
        let mut rng = Pcg128::new_default();
        rng.seed_with_stream(0, 42, 0, 54);
        let out: Vec<u64> = (0..6).map(|_| rng.next_u64()).collect();
        assert_eq!(
            out,
            [
                0x86b1da1d72062b68,
                0x1304aa46c9853d39,
                0xa3670e9e0dd50358,
                0xf9090e529a7dae00,
                0xc85b9fd837996f2c,
                0x606121f8e3919196,
            ]
        );
    }

    #[test]
    fn streams_diverge_from_first_output() {
        let mut a = Pcg128::new_default();
        let mut b = Pcg128::new_default();
        a.seed_with_stream(0, 7, 0, 1);
        b.seed_with_stream(0, 7, 0, 2);
        for _ in 0..5 {
            assert_ne!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn output_functions_on_fixed_states() {
        assert_eq!(output_xsl_rr_128_64(0, 0), 0);
        // Top six bits zero: no rotation.
        assert_eq!(output_xsl_rr_128_64(1, 2), 3);
        // Top six bits all ones: rotate by 63 (i.e. left by one).
        let high = u64::MAX;
        assert_eq!(output_xsl_rr_128_64(high, 0), u64::MAX);
        assert_eq!(output_xsl_rr_128_64(high, 1), (u64::MAX ^ 1).rotate_right(63));
        let (h, l) = output_xsl_rr_rr_128_128(0x8000_0000_0000_0000, 0);
        assert_eq!(l, 0x8000_0000_0000_0000u64.rotate_right(32));
        assert_eq!(h, 0x8000_0000_0000_0000u64.rotate_right((l & 63) as u32));
    }

    #[test]
    fn clone_is_isolated() {
        let mut original = seeded(5, 5);
        let mut copy = original.clone();
        let expected = copy.clone().next_u64();

        // Advancing the original leaves the copy where it was.
        original.next_u64();
        original.next_u128();
        assert_eq!(copy.next_u64(), expected);

        // Advancing the copy leaves the original where it was.
        let original_next = original.clone().next_u64();
        for _ in 0..5 {
            copy.next_u64();
        }
        assert_eq!(original.next_u64(), original_next);

        // The original is exactly three steps in, like a fresh engine.
        let mut fresh = seeded(5, 5);
        for _ in 0..3 {
            fresh.next_u64();
        }
        assert_eq!(original.next_u64(), fresh.next_u64());
    }

    #[test]
    fn no_adjacent_repeats() {
        let mut rng = seeded(1, 1);
        let mut prev = rng.next_u64();
        for _ in 0..10_000 {
            let v = rng.next_u64();
            assert_ne!(v, prev);
            prev = v;
        }

        let mut rng = seeded(1, 1);
        let mut prev = rng.next_u128();
        for _ in 0..10_000 {
            let v = rng.next_u128();
            assert_ne!(v, prev);
            prev = v;
        }
    }

    #[test]
    fn mcg_seed_and_step() {
        let mut rng = Pcg128::new_default();
        rng.seed_mcg(3, 8);
        assert_eq!((rng.state_high(), rng.state_low()), (3, 9));
        rng.step_mcg();
        rng.step_mcg();
        assert_eq!(rng.state_high(), 0xcd80_8bfc_3d57_21e9);
        assert_eq!(rng.state_low(), 0xe795_a944_27e6_2361);
    }

    #[test]
    fn degenerate_parameters_are_accepted() {
        let mut rng = Pcg128::new(0, 0, 0, 0, 0, 0);
        rng.seed(1, 1);
        assert_eq!((rng.state_high(), rng.state_low()), (0, 0));
        assert_eq!(rng.next_u64(), 0);
        assert_eq!(rng.next_u128(), (0, 0));
    }

    #[test]
    fn advance_matches_stepping() {
        for seed in 0..20 {
            let mut stepped = seeded(seed, seed ^ 0x55);
            let mut jumped = stepped.clone();
            for _ in 0..37 {
                stepped.next_u64();
            }
            jumped.advance(37);
            assert_eq!(stepped, jumped);
        }
    }

    #[test]
    fn advance_backwards_wraps_around() {
        let mut rng = seeded(6, 6);
        let start = rng.clone();
        rng.advance(12345);
        rng.advance(12345u128.wrapping_neg());
        assert_eq!(rng, start);
    }

    #[test]
    fn serialization_roundtrip() {
        let mut rng = seeded(42, 54);
        for _ in 0..100 {
            rng.next_u64();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: Pcg128 = serde_json::from_str(&json).unwrap();
        for _ in 0..100 {
            assert_eq!(rng.next_u128(), restored.next_u128());
        }
    }
}

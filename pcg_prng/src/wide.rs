// 128-bit modular arithmetic over (high, low) pairs of `u64`.
//
// `Pcg128` keeps its multiplier, increment, and state as separate 64-bit
// halves, so every state transition is built from the two primitives here:
// a 64x64 -> 128 widening multiply and a carry-propagating add. Both
// operations are exact modulo 2^128.
//
// The widening multiply goes through `u128` for the single 64x64 product;
// everything else stays in 64-bit words so the decomposition is explicit.

/// A 128-bit quantity split into its high and low 64-bit words.
pub type Halves = (u64, u64);

/// Full 64x64 -> 128 multiply. Returns `(high, low)`.
#[inline]
pub fn mul_64x64(a: u64, b: u64) -> Halves {
    let product = u128::from(a) * u128::from(b);
    ((product >> 64) as u64, product as u64)
}

/// Add with carry-in, returning `(sum, carry_out)`.
#[inline]
pub fn add_with_carry(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, c1) = a.overflowing_add(b);
    let (sum, c2) = sum.overflowing_add(u64::from(carry));
    (sum, c1 | c2)
}

/// `a * b mod 2^128`.
///
/// The `a_high * b_high` partial product only contributes to bits >= 128
/// and is dropped.
#[inline]
pub fn wrapping_mul(a: Halves, b: Halves) -> Halves {
    let (a_high, a_low) = a;
    let (b_high, b_low) = b;
    let (mut high, low) = mul_64x64(a_low, b_low);
    high = high
        .wrapping_add(a_high.wrapping_mul(b_low))
        .wrapping_add(a_low.wrapping_mul(b_high));
    (high, low)
}

/// `a + b mod 2^128`.
#[inline]
pub fn wrapping_add(a: Halves, b: Halves) -> Halves {
    let (low, carry) = add_with_carry(a.1, b.1, false);
    let (high, _) = add_with_carry(a.0, b.0, carry);
    (high, low)
}

use num_bigint::BigUint;
use num_traits::Zero;
use rand::TryCryptoRng;

/// Samples a uniformly random integer in `[0, bound)`.
///
/// Draws `ceil(bits(bound) / 8)` bytes, masks the excess high bits and
/// rejects candidates `>= bound`, so each draw succeeds with probability
/// above one half. Failures of the entropy source are returned unchanged.
/// A zero bound yields zero.
pub fn random_below<R: TryCryptoRng + ?Sized>(
    rng: &mut R,
    bound: &BigUint,
) -> Result<BigUint, R::Error> {
    if bound.is_zero() {
        return Ok(BigUint::zero());
    }

    let bits = bound.bits();
    let len = bits.div_ceil(8) as usize;
    let excess = (len as u64 * 8 - bits) as u32;
    let mut bytes = vec![0u8; len];

    loop {
        rng.try_fill_bytes(&mut bytes)?;
        bytes[0] &= 0xff >> excess;

        let candidate = BigUint::from_bytes_be(&bytes);
        if &candidate < bound {
            return Ok(candidate);
        }
    }
}

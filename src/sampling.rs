use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;
use rand::Rng;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleError {
    /// The requested range contains no values.
    EmptyRange,
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::EmptyRange => write!(f, "sampling range is empty"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Draw an arbitrary-precision integer uniformly from `[0, bound)`.
///
/// Candidates are drawn with as many bits as `bound` and rejected until one
/// falls below it. Reducing an oversized draw modulo `bound` instead would
/// bias the result whenever `bound` is not a power of two. Each candidate is
/// accepted with probability above one half, so the expected number of draws
/// is below two.
///
/// # Panics
/// Panics if `bound` is zero.
pub fn uniform_biguint_below<R: Rng + ?Sized>(rng: &mut R, bound: &BigUint) -> BigUint {
    assert!(!bound.is_zero(), "bound must be positive");
    loop {
        let candidate = rng.gen_biguint(bound.bits());
        if candidate < *bound {
            return candidate;
        }
    }
}

/// Draw a machine integer uniformly from `[low, high)`.
pub fn uniform_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    low: i64,
    high: i64,
) -> Result<i64, SampleError> {
    if low >= high {
        return Err(SampleError::EmptyRange);
    }
    Ok(rng.gen_range(low..high))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn bound_of_one_always_yields_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert!(uniform_biguint_below(&mut rng, &BigUint::from(1u32)).is_zero());
        }
    }

    #[test]
    #[should_panic(expected = "bound must be positive")]
    fn zero_bound_panics() {
        let mut rng = StdRng::seed_from_u64(1);
        uniform_biguint_below(&mut rng, &BigUint::zero());
    }

    #[test]
    fn empty_range_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            uniform_in_range(&mut rng, 5, 5),
            Err(SampleError::EmptyRange)
        ));
        assert!(matches!(
            uniform_in_range(&mut rng, 7, 2),
            Err(SampleError::EmptyRange)
        ));
    }
}

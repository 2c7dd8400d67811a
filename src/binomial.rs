use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Computes `C(n, k)` in fixed-width arithmetic.
///
/// This is a fast path for small arguments. The running product is kept
/// divisible by the current divisor, so every division is exact, but there is
/// no overflow detection: results for arguments whose intermediates exceed
/// `u64` are silently wrong. Callers that cannot bound their arguments must
/// use [`n_choose_k_big`] or [`n_choose_k_exact`] instead.
pub fn n_choose_k(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let mut result = 1u64;
    for i in 1..=k {
        // Multiply before dividing; reordering would break exact division.
        result = result * (n - i + 1) / i;
    }
    result
}

/// Computes `C(n, k)` exactly over arbitrary-precision integers.
pub fn n_choose_k_big(n: &BigUint, k: &BigUint) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    let mut result = BigUint::one();
    let mut n = n.clone();
    let mut i = BigUint::one();
    while i <= *k {
        result *= &n;
        n -= 1u32;
        result /= &i;
        i += 1u32;
    }
    result
}

/// Computes `C(n, k)` exactly for machine-integer arguments.
pub fn n_choose_k_exact(n: u64, k: u64) -> BigUint {
    n_choose_k_big(&BigUint::from(n), &BigUint::from(k))
}

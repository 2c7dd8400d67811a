use crate::binomial::n_choose_k_exact;
use crate::sampling::uniform_biguint_below;
use num_bigint::BigUint;
use num_traits::One;
use rand::Rng;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitStringError {
    /// More set bits were requested than there are positions to hold them.
    TooManyOnes,
    /// The rank does not fall within the space of bit strings of this shape.
    RankOutOfBounds,
}

impl fmt::Display for BitStringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitStringError::TooManyOnes => {
                write!(f, "more set bits requested than positions available")
            }
            BitStringError::RankOutOfBounds => {
                write!(f, "rank is out of bounds for this bit string shape")
            }
        }
    }
}

impl std::error::Error for BitStringError {}

/// Number of bit strings of `length` bits with exactly `num_ones` set bits.
pub fn total_bit_strings(length: usize, num_ones: usize) -> BigUint {
    n_choose_k_exact(length as u64, num_ones as u64)
}

/// Return the bit string at `rank` among all strings of `length` bits with
/// exactly `num_ones` set bits.
///
/// Every rank less than [`total_bit_strings`] corresponds to a unique bit
/// string under a fixed ordering of the space. The ordering fills the string
/// from its highest position down: of two strings, the one with a 1 in the
/// highest position where they differ comes first. For example, the strings
/// of length 3 with a single set bit are ranked `[0, 0, 1]`, `[0, 1, 0]`,
/// `[1, 0, 0]`.
///
/// # Errors
/// Returns [`BitStringError::TooManyOnes`] if `num_ones > length` and
/// [`BitStringError::RankOutOfBounds`] if `rank >= total_bit_strings(length,
/// num_ones)`.
pub fn unrank_bit_string(
    length: usize,
    num_ones: usize,
    rank: &BigUint,
) -> Result<Vec<u8>, BitStringError> {
    // The recursion works in one-based ranks; adjust here and nowhere else.
    let one_based = rank + BigUint::one();
    unrank_bit_string_one_based(length, num_ones, &one_based)
}

/// Like [`unrank_bit_string`], but `rank` runs over `[1, total_bit_strings]`
/// instead of `[0, total_bit_strings)`.
pub fn unrank_bit_string_one_based(
    length: usize,
    num_ones: usize,
    rank: &BigUint,
) -> Result<Vec<u8>, BitStringError> {
    if num_ones > length {
        return Err(BitStringError::TooManyOnes);
    }
    let mut bits = vec![0u8; length];
    fill_bit_string(&mut bits, length, num_ones, rank)?;
    Ok(bits)
}

/// Recursive core: choose the bit at position `i - 1` among the strings of
/// `i` bits with `j` set bits, then reduce to the sub-problem it selects.
/// `n` is the one-based rank within the current sub-problem.
fn fill_bit_string(
    bits: &mut [u8],
    i: usize,
    j: usize,
    n: &BigUint,
) -> Result<(), BitStringError> {
    if *n > n_choose_k_exact(i as u64, j as u64) {
        return Err(BitStringError::RankOutOfBounds);
    }
    if j == 0 {
        return Ok(());
    }
    if i == j {
        bits[..i].fill(1);
        return Ok(());
    }
    if i > j {
        // Strings with the highest position set come first; there are
        // C(i - 1, j - 1) of them.
        let with_high_bit = n_choose_k_exact((i - 1) as u64, (j - 1) as u64);
        if *n <= with_high_bit {
            bits[i - 1] = 1;
            fill_bit_string(bits, i - 1, j - 1, n)
        } else {
            bits[i - 1] = 0;
            let remaining = n - &with_high_bit;
            fill_bit_string(bits, i - 1, j, &remaining)
        }
    } else {
        Err(BitStringError::TooManyOnes)
    }
}

/// Return the zero-based rank of `bits` within the space of bit strings of
/// the same length and weight. Inverse of [`unrank_bit_string`].
///
/// Digits other than 0 and 1 are a caller bug.
pub fn rank_bit_string(bits: &[u8]) -> BigUint {
    let mut ones = bits.iter().filter(|&&bit| bit == 1).count();
    let mut rank = BigUint::one();
    for pos in (0..bits.len()).rev() {
        if ones == 0 {
            break;
        }
        debug_assert!(bits[pos] <= 1);
        if bits[pos] == 1 {
            ones -= 1;
        } else {
            // Skip every string that has its next set bit at this position.
            rank += n_choose_k_exact(pos as u64, (ones - 1) as u64);
        }
    }
    rank - BigUint::one()
}

/// Draw a bit string uniformly at random among all strings of `length` bits
/// with exactly `num_ones` set bits.
pub fn random_bit_string<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    num_ones: usize,
) -> Result<Vec<u8>, BitStringError> {
    if num_ones > length {
        return Err(BitStringError::TooManyOnes);
    }
    let total = total_bit_strings(length, num_ones);
    let rank = uniform_biguint_below(rng, &total);
    unrank_bit_string(length, num_ones, &rank)
}

//! Exact combinatorial indexing: binomial coefficients, a bijection between
//! ranks and fixed-weight bit strings, and unbiased bounded random sampling.

pub mod binomial;
pub mod bit_string;
pub mod sampling;

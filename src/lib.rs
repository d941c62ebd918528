//! `continued-fractions` computes the quotients and convergents of the regular
//! continued fraction of integers, rationals ([Ratio][num_rational::Ratio])
//! and floating point numbers.

mod cont_frac;
mod error;
pub mod symbols;
pub mod traits;

pub use cont_frac::{
    convergent_to_rational, expand, ContinuedFraction, Expansion, Operand, Reconstruction,
    Termination, DEFAULT_LIMIT,
};
pub use error::Error;
pub use traits::{Approximation, Expandable, ToContinuedFraction};

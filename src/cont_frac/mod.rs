//! Data structures and algorithms implementations related to
//! regular continued fractions of a number
//!
//! 1. [expand()][fn@expand] computes the quotients and convergents of a number up to a limit
//! 2. [ContinuedFraction][ContinuedFraction] keeps the expansion together with the number
//!    and supports arithmetic on the expanded numbers
//!
//! # References:
//! - <https://pi.math.cornell.edu/~gautam/ContinuedFractions.pdf>
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/>
//!

mod block;
mod expansion;
mod ops;
mod simple;

pub use expansion::*;
pub use ops::*;
pub use simple::*;

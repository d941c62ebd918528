//! Expansion of a number into quotients and convergents

use super::block::Block;
use crate::error::Error;
use crate::traits::Expandable;
use log::{debug, trace};
use num_rational::Ratio;

/// The reason why an expansion stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// All requested terms were computed
    Limit,
    /// The last convergent equals the number
    ExactConvergent,
    /// Nothing is left after removing the integer part
    ZeroRemainder,
    /// The reciprocal of the remainder is not finite
    NonFiniteReciprocal,
    /// The last convergent is the reduced form of the (rational) number
    ExactPair,
    /// The next quotient or convergent doesn't fit into the integer type
    Overflow,
}

impl Termination {
    /// Whether the last convergent is exactly the expanded number
    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(
            self,
            Termination::ExactConvergent | Termination::ZeroRemainder | Termination::ExactPair
        )
    }
}

/// Quotients and convergents computed by [expand]
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion<T> {
    pub quotients: Vec<T>,
    pub convergents: Vec<(T, T)>,
    pub termination: Termination,
}

impl<T> Expansion<T> {
    /// Number of terms actually produced
    #[inline]
    pub fn len(&self) -> usize {
        self.quotients.len()
    }
}

/// Expand `number` into at most `limit` terms of its regular continued fraction.
///
/// The expansion stops early once the number is reached exactly, or when the
/// next term can't be computed in the integer type of the number.
pub fn expand<N: Expandable>(number: &N, limit: usize) -> Result<Expansion<N::Int>, Error> {
    if limit == 0 {
        return Err(Error::InvalidLimit);
    }
    if !number.is_finite() {
        return Err(Error::NotFinite);
    }

    let exact = number.exact_ratio();
    let mut quotients = Vec::new();
    let mut convergents = Vec::new();
    let mut block = Block::identity();
    let mut x = number.clone();

    let termination = loop {
        if quotients.len() == limit {
            break Termination::Limit;
        }

        let (a, remainder) = match x.split_floor() {
            Some(ar) => ar,
            None if quotients.is_empty() => return Err(Error::Overflow),
            None => {
                debug!("quotient overflowed after {} terms", quotients.len());
                break Termination::Overflow;
            }
        };
        let (p, q) = match block.checked_rmove(&a) {
            Some(pq) => pq,
            None => {
                debug!("convergent overflowed after {} terms", quotients.len());
                break Termination::Overflow;
            }
        };

        quotients.push(a);
        convergents.push((p.clone(), q.clone()));

        // exact types skip this and stop on the zero remainder below
        if number.rounds_to(&Ratio::new_raw(p.clone(), q.clone())) {
            break Termination::ExactConvergent;
        }
        if remainder.is_zero() {
            break Termination::ZeroRemainder;
        }
        let next = match remainder.checked_recip() {
            Some(v) => v,
            None => break Termination::NonFiniteReciprocal,
        };
        if let Some(r) = &exact {
            // floats never have an exact pair, and for exact types a matching
            // pair already left a zero remainder
            if r.numer() == &p && r.denom() == &q {
                break Termination::ExactPair;
            }
        }

        block.update(p, q);
        x = next;
    };

    trace!("expanded {} terms, stopped by {:?}", quotients.len(), termination);
    Ok(Expansion {
        quotients,
        convergents,
        termination,
    })
}

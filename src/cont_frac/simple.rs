//! Implementation of the regular continued fraction of a number

use super::block::Block;
use super::expansion::{expand, Termination};
use crate::error::Error;
use crate::traits::{Approximation, Expandable};
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::Zero;
use std::fmt;

/// Number of terms computed when no limit is given
pub const DEFAULT_LIMIT: usize = 5;

/// This struct represents the regular continued fraction `a0 + 1/(a1 + 1/(a2 + ...))`
/// of a number, expanded up to a limited number of terms, together with
/// the convergents `p_k / q_k` of each term.
///
/// The struct is immutable, arithmetic operations always create a new expansion.
/// Equality and ordering only consider the expanded number.
#[derive(Clone, Debug)]
pub struct ContinuedFraction<N: Expandable> {
    number: N,

    /// Realized number of terms
    limit: usize,

    quotients: Vec<N::Int>,
    convergents: Vec<(N::Int, N::Int)>,
    termination: Termination,
}

impl<N: Expandable> ContinuedFraction<N> {
    /// Expand `number` into at most `limit` terms. The limit is lowered
    /// if the expansion terminates early.
    pub fn new(number: N, limit: usize) -> Result<Self, Error> {
        let expansion = expand(&number, limit)?;
        Ok(ContinuedFraction {
            number,
            limit: expansion.len(),
            quotients: expansion.quotients,
            convergents: expansion.convergents,
            termination: expansion.termination,
        })
    }

    /// Expand `number` into at most [DEFAULT_LIMIT] terms
    #[inline]
    pub fn with_default_limit(number: N) -> Result<Self, Error> {
        Self::new(number, DEFAULT_LIMIT)
    }

    #[inline]
    pub fn number(&self) -> &N {
        &self.number
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    pub fn quotients(&self) -> &[N::Int] {
        &self.quotients[..]
    }

    #[inline]
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Returns the first `nth` convergents as `(numerator, denominator)` pairs,
    /// or all of them if `nth` is `None`
    pub fn convergents(&self, nth: Option<usize>) -> &[(N::Int, N::Int)] {
        let n = nth.map_or(self.limit, |n| n.min(self.limit));
        &self.convergents[..n]
    }

    /// Returns the `nth` convergent, starting from 1
    pub fn convergent(&self, nth: usize) -> Result<&(N::Int, N::Int), Error> {
        nth.checked_sub(1)
            .and_then(|i| self.convergents.get(i))
            .ok_or(Error::IndexOutOfRange {
                index: nth,
                len: self.limit,
            })
    }

    /// Same as [convergents()][ContinuedFraction::convergents], but the pairs are converted to rationals
    pub fn convergents_as_rationals(&self, nth: Option<usize>) -> Vec<Ratio<N::Int>> {
        self.convergents(nth)
            .iter()
            .map(convergent_to_rational)
            .collect()
    }

    /// Returns the last convergent, which is exact if the expansion
    /// stopped on the number itself
    pub fn to_rational(&self) -> Approximation<Ratio<N::Int>> {
        // there is always at least one convergent
        let r = convergent_to_rational(&self.convergents[self.limit - 1]);
        if self.termination.is_exact() {
            Approximation::Exact(r)
        } else {
            Approximation::Approximated(r)
        }
    }

    /// Build a continued fraction from its quotients.
    ///
    /// The quotients are folded into `p/q`, which is converted to `N` and then expanded
    /// with the length of the sequence as limit. A single quotient is a special
    /// case: its value is returned directly as [Reconstruction::Number].
    pub fn from_quotients(quotients: &[N::Int]) -> Result<Reconstruction<N>, Error> {
        match quotients {
            [] => Err(Error::EmptyQuotients),
            [a] => Ok(Reconstruction::Number(N::from_int(a))),
            _ => {
                let mut block = Block::identity();
                for a in quotients {
                    let (p, q) = block.checked_rmove(a).ok_or(Error::Overflow)?;
                    block.update(p, q);
                }

                let (p, q) = block.last();
                if q.is_zero() {
                    return Err(Error::Unrepresentable);
                }
                let number = N::from_ratio(Ratio::new(p.clone(), q.clone()))
                    .ok_or(Error::Unrepresentable)?;
                Self::new(number, quotients.len()).map(Reconstruction::Fraction)
            }
        }
    }
}

/// Result of [ContinuedFraction::from_quotients]
#[derive(Clone, Debug, PartialEq)]
pub enum Reconstruction<N: Expandable> {
    /// The sequence had a single quotient, this is its value
    Number(N),
    Fraction(ContinuedFraction<N>),
}

impl<N: Expandable> Reconstruction<N> {
    /// The reconstructed number
    pub fn number(&self) -> &N {
        match self {
            Reconstruction::Number(n) => n,
            Reconstruction::Fraction(cf) => cf.number(),
        }
    }

    #[inline]
    pub fn into_fraction(self) -> Option<ContinuedFraction<N>> {
        match self {
            Reconstruction::Number(_) => None,
            Reconstruction::Fraction(cf) => Some(cf),
        }
    }
}

/// Convert a `(numerator, denominator)` convergent pair to a reduced rational
#[inline]
pub fn convergent_to_rational<T: Integer + Clone>(convergent: &(T, T)) -> Ratio<T> {
    Ratio::new(convergent.0.clone(), convergent.1.clone())
}

impl<N: Expandable> fmt::Display for ContinuedFraction<N>
where
    N::Int: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut qiter = self.quotients.iter();
        if let Some(a0) = qiter.next() {
            write!(f, "[{}", a0)?;
        }
        if let Some(a1) = qiter.next() {
            write!(f, "; {}", a1)?;
        }
        for a in qiter {
            write!(f, ", {}", a)?;
        }
        write!(f, "]")
    }
}

//! Arithmetic and comparison between continued fractions.
//!
//! Operations evaluate the expanded numbers directly and expand the
//! result again, they never work on the quotients.

use super::simple::ContinuedFraction;
use crate::error::Error;
use crate::traits::Expandable;
use core::cmp::Ordering;
use core::ops::{Add, Div, Mul, Sub};

/// Right hand side of an arithmetic operation on a [ContinuedFraction]
#[derive(Debug, Clone)]
pub enum Operand<'a, N: Expandable> {
    /// A plain number, the result keeps the limit of the left hand side
    Number(N),
    /// Another continued fraction, the result uses the larger limit of the two
    Fraction(&'a ContinuedFraction<N>),
}

impl<'a, N: Expandable> Operand<'a, N> {
    #[inline]
    fn number(&self) -> &N {
        match self {
            Operand::Number(n) => n,
            Operand::Fraction(cf) => cf.number(),
        }
    }
}

impl<'a, N: Expandable> From<N> for Operand<'a, N> {
    #[inline]
    fn from(n: N) -> Self {
        Operand::Number(n)
    }
}

impl<'a, N: Expandable> From<&'a ContinuedFraction<N>> for Operand<'a, N> {
    #[inline]
    fn from(cf: &'a ContinuedFraction<N>) -> Self {
        Operand::Fraction(cf)
    }
}

impl<N: Expandable> ContinuedFraction<N> {
    fn evaluate(&self, rhs: Operand<N>, op: fn(&N, &N) -> Option<N>) -> Result<Self, Error> {
        let limit = match &rhs {
            Operand::Number(_) => self.limit(),
            Operand::Fraction(cf) => self.limit().max(cf.limit()),
        };
        let number = op(self.number(), rhs.number()).ok_or(Error::Overflow)?;
        Self::new(number, limit)
    }

    /// Returns [Error::Overflow] if the sum doesn't fit into a fixed width number type
    pub fn checked_add<'a>(&self, rhs: impl Into<Operand<'a, N>>) -> Result<Self, Error>
    where
        N: 'a,
    {
        self.evaluate(rhs.into(), |a, b| a.try_add(b))
    }

    pub fn checked_sub<'a>(&self, rhs: impl Into<Operand<'a, N>>) -> Result<Self, Error>
    where
        N: 'a,
    {
        self.evaluate(rhs.into(), |a, b| a.try_sub(b))
    }

    pub fn checked_mul<'a>(&self, rhs: impl Into<Operand<'a, N>>) -> Result<Self, Error>
    where
        N: 'a,
    {
        self.evaluate(rhs.into(), |a, b| a.try_mul(b))
    }

    /// Returns [Error::DivisionByZero] if the number of `rhs` is zero,
    /// [Error::Overflow] if the quotient doesn't fit into the number type
    pub fn checked_div<'a>(&self, rhs: impl Into<Operand<'a, N>>) -> Result<Self, Error>
    where
        N: 'a,
    {
        let rhs = rhs.into();
        if rhs.number().is_zero() {
            return Err(Error::DivisionByZero);
        }
        self.evaluate(rhs, |a, b| a.try_div(b))
    }
}

#[inline]
fn unwrap_or_panic<T>(result: Result<T, Error>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

// Operators panic where the checked methods return an error, the same way
// as dividing a `Ratio` by zero does.
macro_rules! impl_binop_for_cont_frac {
    (impl $imp:ident, $method:ident, $checked:ident) => {
        impl<N: Expandable> $imp<ContinuedFraction<N>> for ContinuedFraction<N> {
            type Output = ContinuedFraction<N>;

            fn $method(self, rhs: ContinuedFraction<N>) -> Self::Output {
                unwrap_or_panic(self.$checked(&rhs))
            }
        }

        impl<'a, 'b, N: Expandable> $imp<&'b ContinuedFraction<N>> for &'a ContinuedFraction<N> {
            type Output = ContinuedFraction<N>;

            fn $method(self, rhs: &'b ContinuedFraction<N>) -> Self::Output {
                unwrap_or_panic(self.$checked(rhs))
            }
        }

        impl<N: Expandable> $imp<N> for ContinuedFraction<N> {
            type Output = ContinuedFraction<N>;

            fn $method(self, rhs: N) -> Self::Output {
                unwrap_or_panic(self.$checked(rhs))
            }
        }

        impl<'a, N: Expandable> $imp<N> for &'a ContinuedFraction<N> {
            type Output = ContinuedFraction<N>;

            fn $method(self, rhs: N) -> Self::Output {
                unwrap_or_panic(self.$checked(rhs))
            }
        }
    };
}

impl_binop_for_cont_frac!(impl Add, add, checked_add);
impl_binop_for_cont_frac!(impl Sub, sub, checked_sub);
impl_binop_for_cont_frac!(impl Mul, mul, checked_mul);
impl_binop_for_cont_frac!(impl Div, div, checked_div);

impl<N: Expandable> PartialEq for ContinuedFraction<N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.number() == other.number()
    }
}

impl<N: Expandable> PartialOrd for ContinuedFraction<N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.number().partial_cmp(other.number())
    }
}

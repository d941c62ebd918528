use crate::cont_frac::ContinuedFraction;
use crate::error::Error;
use core::fmt::Debug;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{
    CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Num, One, Signed, ToPrimitive, Zero,
};

#[cfg(feature = "num-bigint")]
use num_bigint::BigInt;

/// A number that can be expanded into a regular continued fraction.
///
/// The expansion only needs a handful of operations from the number type:
/// the floor as an integer with the remainder, reciprocal, finiteness and a
/// comparison against a rational value. Arithmetic on continued fractions
/// goes through the `try_*` methods, so fixed width types report overflow
/// instead of panicking.
pub trait Expandable: Num + Clone + PartialOrd {
    /// Integer type of the quotients and convergents
    type Int: Integer + Signed + Clone + CheckedAdd + CheckedMul + Debug;

    fn is_finite(&self) -> bool;

    /// Split the number into its floor and the remainder `self - floor`,
    /// `None` if the floor doesn't fit into `Int`
    fn split_floor(&self) -> Option<(Self::Int, Self)>;

    fn from_int(i: &Self::Int) -> Self;

    /// Returns `1 / self`, or `None` if the result is not finite or not representable
    fn checked_recip(&self) -> Option<Self>;

    /// Whether `r` rounded into this type equals the number. Exact types
    /// always return `false`, their expansion stops on a zero remainder.
    fn rounds_to(&self, r: &Ratio<Self::Int>) -> bool;

    /// The reduced rational form of the number, only available for exact types
    fn exact_ratio(&self) -> Option<Ratio<Self::Int>>;

    fn from_ratio(r: Ratio<Self::Int>) -> Option<Self>;

    /// `None` on overflow
    fn try_add(&self, rhs: &Self) -> Option<Self>;
    fn try_sub(&self, rhs: &Self) -> Option<Self>;
    fn try_mul(&self, rhs: &Self) -> Option<Self>;
    /// `None` on overflow or zero divisor for exact types. Floats follow IEEE
    /// semantics and may return a non-finite value.
    fn try_div(&self, rhs: &Self) -> Option<Self>;
}

macro_rules! impl_expandable_float {
    ($($t:ty),*) => {$(
        impl Expandable for $t {
            type Int = i64;

            #[inline]
            fn is_finite(&self) -> bool {
                <$t>::is_finite(*self)
            }

            fn split_floor(&self) -> Option<(i64, Self)> {
                let f = self.floor();
                Some((f.to_i64()?, *self - f))
            }

            #[inline]
            fn from_int(i: &i64) -> Self {
                *i as $t
            }

            fn checked_recip(&self) -> Option<Self> {
                let r = 1.0 / *self;
                if r.is_finite() { Some(r) } else { None }
            }

            fn rounds_to(&self, r: &Ratio<i64>) -> bool {
                *r.numer() as $t / *r.denom() as $t == *self
            }

            #[inline]
            fn exact_ratio(&self) -> Option<Ratio<i64>> {
                None
            }

            fn from_ratio(r: Ratio<i64>) -> Option<Self> {
                let v = *r.numer() as $t / *r.denom() as $t;
                if v.is_finite() { Some(v) } else { None }
            }

            #[inline]
            fn try_add(&self, rhs: &Self) -> Option<Self> {
                Some(*self + *rhs)
            }
            #[inline]
            fn try_sub(&self, rhs: &Self) -> Option<Self> {
                Some(*self - *rhs)
            }
            #[inline]
            fn try_mul(&self, rhs: &Self) -> Option<Self> {
                Some(*self * *rhs)
            }
            #[inline]
            fn try_div(&self, rhs: &Self) -> Option<Self> {
                Some(*self / *rhs)
            }
        }
    )*};
}
impl_expandable_float!(f32, f64);

// integers have no fractional part, so the expansion always stops at the first term
macro_rules! impl_expandable_integer {
    ($($t:ty),*) => {$(
        impl Expandable for $t {
            type Int = $t;

            #[inline]
            fn is_finite(&self) -> bool {
                true
            }

            #[inline]
            fn split_floor(&self) -> Option<($t, Self)> {
                Some((self.clone(), Self::zero()))
            }

            #[inline]
            fn from_int(i: &$t) -> Self {
                i.clone()
            }

            fn checked_recip(&self) -> Option<Self> {
                // only units are invertible, abs() would overflow on MIN
                if self.is_one() || *self == -Self::one() {
                    Some(self.clone())
                } else {
                    None
                }
            }

            #[inline]
            fn rounds_to(&self, _r: &Ratio<$t>) -> bool {
                false
            }

            #[inline]
            fn exact_ratio(&self) -> Option<Ratio<$t>> {
                Some(Ratio::from_integer(self.clone()))
            }

            fn from_ratio(r: Ratio<$t>) -> Option<Self> {
                if r.is_integer() { Some(r.to_integer()) } else { None }
            }

            #[inline]
            fn try_add(&self, rhs: &Self) -> Option<Self> {
                <$t as CheckedAdd>::checked_add(self, rhs)
            }
            #[inline]
            fn try_sub(&self, rhs: &Self) -> Option<Self> {
                <$t as CheckedSub>::checked_sub(self, rhs)
            }
            #[inline]
            fn try_mul(&self, rhs: &Self) -> Option<Self> {
                <$t as CheckedMul>::checked_mul(self, rhs)
            }
            #[inline]
            fn try_div(&self, rhs: &Self) -> Option<Self> {
                <$t as CheckedDiv>::checked_div(self, rhs)
            }
        }
    )*};
}
impl_expandable_integer!(i8, i16, i32, i64, i128, isize);

#[cfg(feature = "num-bigint")]
impl_expandable_integer!(BigInt);

impl<T> Expandable for Ratio<T>
where
    T: Integer + Signed + Clone + CheckedAdd + CheckedSub + CheckedMul + CheckedDiv + Debug,
{
    type Int = T;

    #[inline]
    fn is_finite(&self) -> bool {
        true
    }

    fn split_floor(&self) -> Option<(T, Self)> {
        // work on the parts directly, Ratio::floor goes through a subtraction
        // that overflows near the bounds of T
        let (a, r) = self.numer().div_mod_floor(self.denom());
        Some((a, Ratio::new(r, self.denom().clone())))
    }

    #[inline]
    fn from_int(i: &T) -> Self {
        Ratio::from_integer(i.clone())
    }

    fn checked_recip(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else if self.numer().is_negative() {
            let n = T::zero().checked_sub(self.numer())?;
            let d = T::zero().checked_sub(self.denom())?;
            Some(Ratio::new_raw(d, n))
        } else {
            Some(Ratio::new_raw(self.denom().clone(), self.numer().clone()))
        }
    }

    #[inline]
    fn rounds_to(&self, _r: &Ratio<T>) -> bool {
        false
    }

    #[inline]
    fn exact_ratio(&self) -> Option<Ratio<T>> {
        Some(self.clone())
    }

    #[inline]
    fn from_ratio(r: Ratio<T>) -> Option<Self> {
        Some(r)
    }

    #[inline]
    fn try_add(&self, rhs: &Self) -> Option<Self> {
        CheckedAdd::checked_add(self, rhs)
    }
    #[inline]
    fn try_sub(&self, rhs: &Self) -> Option<Self> {
        CheckedSub::checked_sub(self, rhs)
    }
    #[inline]
    fn try_mul(&self, rhs: &Self) -> Option<Self> {
        CheckedMul::checked_mul(self, rhs)
    }
    #[inline]
    fn try_div(&self, rhs: &Self) -> Option<Self> {
        CheckedDiv::checked_div(self, rhs)
    }
}

#[derive(PartialEq, Debug, Clone)]
pub enum Approximation<T> {
    Approximated(T),
    Exact(T),
}

impl<T> Approximation<T> {
    /// Get the computed value regardless of whether it's exact
    #[inline]
    pub fn value(self) -> T {
        match self {
            Approximation::Approximated(v) => v,
            Approximation::Exact(v) => v,
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Approximation::Exact(_))
    }
}

/// Conversion of a plain number into its continued fraction
pub trait ToContinuedFraction: Expandable {
    /// Expand the number with [DEFAULT_LIMIT][crate::DEFAULT_LIMIT] terms
    fn to_cf(self) -> Result<ContinuedFraction<Self>, Error> {
        ContinuedFraction::with_default_limit(self)
    }

    fn to_cf_with_limit(self, limit: usize) -> Result<ContinuedFraction<Self>, Error> {
        ContinuedFraction::new(self, limit)
    }
}

impl<T: Expandable> ToContinuedFraction for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_expandable_test() {
        assert_eq!(1.5f64.split_floor(), Some((1, 0.5)));
        assert_eq!((-1.5f64).split_floor(), Some((-2, 0.5)));
        assert_eq!(1e300f64.split_floor(), None);
        assert_eq!(0.5f64.checked_recip(), Some(2.));
        assert_eq!(0f64.checked_recip(), None);
        assert!(1.5f64.rounds_to(&Ratio::new(3, 2)));
        assert!(!std::f64::consts::PI.rounds_to(&Ratio::new(355, 113)));
        assert_eq!(1.5f64.exact_ratio(), None);
        assert_eq!(f64::from_ratio(Ratio::new(3, 4)), Some(0.75));
        assert_eq!(f32::from_ratio(Ratio::new(1, 2)), Some(0.5));
        assert_eq!(1.5f64.try_div(&0f64), Some(f64::INFINITY));
    }

    #[test]
    fn ratio_expandable_test() {
        let r = Ratio::new(-7i64, 4);
        assert_eq!(r.split_floor(), Some((-2, Ratio::new(1, 4))));
        assert_eq!(r.checked_recip(), Some(Ratio::new(-4, 7)));
        assert_eq!(Ratio::<i64>::zero().checked_recip(), None);
        assert!(!r.rounds_to(&Ratio::new_raw(-14, 8)));
        assert_eq!(r.exact_ratio(), Some(r));

        // floor and remainder at the bounds of the integer type
        assert_eq!(Ratio::new(-128i8, 127).split_floor(), Some((-2, Ratio::new(126, 127))));
        assert_eq!(Ratio::new(127i8, 1).split_floor(), Some((127, Ratio::zero())));
        assert_eq!(Ratio::new(-128i8, 1).split_floor(), Some((-128, Ratio::zero())));
        assert_eq!(Ratio::new(-128i8, 127).checked_recip(), None);
        assert_eq!(Ratio::new(-3i8, 7).checked_recip(), Some(Ratio::new(-7, 3)));
    }

    #[test]
    fn ratio_checked_arithmetic_test() {
        let a = Ratio::new(1i64, 3);
        let b = Ratio::new(1i64, 6);
        assert_eq!(a.try_add(&b), Some(Ratio::new(1, 2)));
        assert_eq!(a.try_sub(&b), Some(Ratio::new(1, 6)));
        assert_eq!(a.try_mul(&b), Some(Ratio::new(1, 18)));
        assert_eq!(a.try_div(&b), Some(Ratio::from_integer(2)));

        let big = Ratio::new(i64::MAX, 3);
        assert_eq!(big.try_mul(&Ratio::new(i64::MAX, 7)), None);
        assert_eq!(big.try_add(&Ratio::new(i64::MAX, 2)), None);
    }

    #[test]
    fn integer_expandable_test() {
        assert_eq!(7i32.split_floor(), Some((7, 0)));
        assert_eq!(7i32.checked_recip(), None);
        assert_eq!((-1i32).checked_recip(), Some(-1));
        assert_eq!(i8::MIN.checked_recip(), None);
        assert!(!7i32.rounds_to(&Ratio::from_integer(7)));
        assert_eq!(7i32.exact_ratio(), Some(Ratio::from_integer(7)));
        assert_eq!(i32::from_ratio(Ratio::new(6, 2)), Some(3));
        assert_eq!(i32::from_ratio(Ratio::new(3, 2)), None);

        assert_eq!(i64::MAX.try_add(&1), None);
        assert_eq!(i64::MIN.try_sub(&1), None);
        assert_eq!(i64::MAX.try_mul(&2), None);
        assert_eq!(i64::MIN.try_div(&-1), None);
        assert_eq!(7i64.try_div(&0), None);
        assert_eq!(7i64.try_div(&2), Some(3));
    }

    #[test]
    fn to_cf_test() {
        let cf = 1.5f64.to_cf().unwrap();
        assert_eq!(cf.quotients(), &[1, 2]);
        assert_eq!(cf.limit(), 2);

        let cf = std::f64::consts::PI.to_cf().unwrap();
        assert_eq!(cf.limit(), crate::DEFAULT_LIMIT);

        let cf = std::f64::consts::PI.to_cf_with_limit(8).unwrap();
        assert_eq!(cf.limit(), 8);
        assert_eq!(cf.number(), &std::f64::consts::PI);

        let cf = Ratio::new(3i32, 2).to_cf().unwrap();
        assert_eq!(cf.convergents(None), &[(1, 1), (3, 2)]);

        let cf = 7i64.to_cf_with_limit(3).unwrap();
        assert_eq!(cf.quotients(), &[7]);

        assert_eq!(1.5f64.to_cf_with_limit(0).unwrap_err(), Error::InvalidLimit);
    }

    #[test]
    fn approximation_test() {
        assert_eq!(Approximation::Exact(3).value(), 3);
        assert_eq!(Approximation::Approximated(3).value(), 3);
        assert!(Approximation::Exact(1).is_exact());
        assert!(!Approximation::Approximated(1).is_exact());
    }
}

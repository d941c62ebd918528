//! Quotients of well-known irrational constants, to be used with
//! [ContinuedFraction::from_quotients][crate::ContinuedFraction::from_quotients]

use num_traits::Num;

/// Euler's number, `[2; 1, 2, 1, 1, 4, 1, 1, 6, ...]`
pub struct E;

impl E {
    /// Returns an endless iterator of the quotients
    pub fn quotients<T: Num + Clone>(&self) -> EQuotients<T> {
        EQuotients {
            started: false,
            even: T::zero(),
            pos: 0,
        }
    }
}

/// Iterator returned by [E::quotients]
#[derive(Debug, Clone)]
pub struct EQuotients<T> {
    started: bool,
    even: T, // the last even quotient
    pos: u8, // position in the repeating group (1, 2k, 1)
}

impl<T: Num + Clone> Iterator for EQuotients<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let two = T::one() + T::one();
        if !self.started {
            self.started = true;
            return Some(two);
        }

        let result = if self.pos == 1 {
            self.even = self.even.clone() + two;
            self.even.clone()
        } else {
            T::one()
        };
        self.pos = (self.pos + 1) % 3;
        Some(result)
    }
}

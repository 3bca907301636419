use crate::{
    error::Error,
    math::{
        bignumber::U256,
        ceil_div::CheckedCeilDiv,
        floor_div::CheckedFloorDiv,
    },
};
use std::panic::Location;

pub trait SafeMath: Sized {
    /// Adds two numbers, failing with [`Error::Overflow`] on overflow.
    fn safe_add(self, rhs: Self) -> Result<Self, Error>;

    /// Subtracts two numbers, failing with [`Error::Overflow`] on underflow.
    fn safe_sub(self, rhs: Self) -> Result<Self, Error>;

    /// Multiplies two numbers, failing with [`Error::Overflow`] on overflow.
    fn safe_mul(self, rhs: Self) -> Result<Self, Error>;

    /// Divides two numbers, failing with [`Error::DivideByZero`] on a zero divisor.
    fn safe_div(self, rhs: Self) -> Result<Self, Error>;

    /// Ceiling-divides two numbers, failing with [`Error::DivideByZero`] on a zero divisor.
    fn safe_ceil_div(self, rhs: Self) -> Result<Self, Error>;
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            #[track_caller]
            #[inline(always)]
            fn safe_add(self, v: $t) -> Result<$t, Error> {
                match self.checked_add(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        log::warn!("addition overflow at {}:{}", caller.file(), caller.line());
                        Err(Error::Overflow)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_sub(self, v: $t) -> Result<$t, Error> {
                match self.checked_sub(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        log::warn!("subtraction underflow at {}:{}", caller.file(), caller.line());
                        Err(Error::Overflow)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_mul(self, v: $t) -> Result<$t, Error> {
                match self.checked_mul(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        log::warn!("multiplication overflow at {}:{}", caller.file(), caller.line());
                        Err(Error::Overflow)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_div(self, v: $t) -> Result<$t, Error> {
                match self.checked_div(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        log::warn!("division by zero at {}:{}", caller.file(), caller.line());
                        Err(Error::DivideByZero)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_ceil_div(self, v: $t) -> Result<$t, Error> {
                match self.checked_ceil_div(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        log::warn!("ceiling division failure at {}:{}", caller.file(), caller.line());
                        Err(Error::DivideByZero)
                    }
                }
            }
        }
    };
}

checked_impl!(U256);
checked_impl!(u128);
checked_impl!(u64);
checked_impl!(u32);
checked_impl!(u16);
checked_impl!(u8);

pub trait SafeFloorDiv: Sized {
    fn safe_floor_div(self, rhs: Self) -> Result<Self, Error>;
}

macro_rules! div_floor_impl {
    ($t:ty) => {
        impl SafeFloorDiv for $t {
            #[track_caller]
            #[inline(always)]
            fn safe_floor_div(self, v: $t) -> Result<$t, Error> {
                match self.checked_floor_div(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        log::warn!("floor division failure at {}:{}", caller.file(), caller.line());
                        Err(Error::DivideByZero)
                    }
                }
            }
        }
    };
}

div_floor_impl!(i128);
div_floor_impl!(i64);

#[cfg(test)]
mod test {
    use crate::{error::Error, math::safe_math::SafeMath};

    #[test]
    fn safe_add() {
        assert_eq!(1_u128.safe_add(1).unwrap(), 2);
        assert_eq!(1_u128.safe_add(u128::MAX), Err(Error::Overflow));
    }

    #[test]
    fn safe_sub() {
        assert_eq!(1_u128.safe_sub(1).unwrap(), 0);
        assert_eq!(0_u128.safe_sub(1), Err(Error::Overflow));
    }

    #[test]
    fn safe_mul() {
        assert_eq!(8_u128.safe_mul(8).unwrap(), 64);
        assert_eq!(2_u128.safe_mul(u128::MAX), Err(Error::Overflow));
    }

    #[test]
    fn safe_div() {
        assert_eq!(155_u64.safe_div(8).unwrap(), 19);
        assert_eq!(160_u64.safe_div(8).unwrap(), 20);
        assert_eq!(1_u64.safe_div(0), Err(Error::DivideByZero));
    }
}

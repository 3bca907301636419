//! Deterministic unsigned fixed-point arithmetic.
//!
//! `Fp` represents a non-negative rational `mantissa / 10^18`. It is the
//! type bin prices are stored in and the vehicle for converting between
//! the two pool assets. Every operation truncates toward zero; none of
//! them round to nearest, so repeated conversions never drift above the
//! true value, only below it — the direction the conservation invariants
//! in the pool depend on.

use crate::{
    error::Error,
    math::{bignumber::U256, constants::fp_scale, safe_math::SafeMath},
};
use borsh::{BorshDeserialize, BorshSerialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, BorshSerialize, BorshDeserialize)]
pub struct Fp {
    mantissa: U256,
}

impl Fp {
    /// Builds an `Fp` directly from its scaled mantissa.
    pub fn from_mantissa(mantissa: U256) -> Self {
        Self { mantissa }
    }

    /// The exact value `0`.
    pub fn zero() -> Self {
        Self::from_mantissa(U256::zero())
    }

    /// The exact value `1`.
    pub fn one() -> Self {
        Self::from_mantissa(fp_scale())
    }

    pub fn mantissa(self) -> U256 {
        self.mantissa
    }

    /// `floor((n * S) / d)`. Fails with [`Error::DivideByZero`] if `d == 0`.
    pub fn from_fraction(n: u64, d: u64) -> Result<Self, Error> {
        if d == 0 {
            return Err(Error::DivideByZero);
        }
        let numerator = U256::from(n).safe_mul(fp_scale())?;
        Ok(Self::from_mantissa(numerator.safe_div(U256::from(d))?))
    }

    /// Checked addition. Fails with [`Error::Overflow`] only if the
    /// mantissa itself would exceed 256 bits.
    pub fn add(self, rhs: Self) -> Result<Self, Error> {
        Ok(Self::from_mantissa(self.mantissa.safe_add(rhs.mantissa)?))
    }

    /// Unsigned difference: `|self - rhs|`. Never fails.
    pub fn abs_diff(self, rhs: Self) -> Self {
        if self.mantissa >= rhs.mantissa {
            Self::from_mantissa(self.mantissa - rhs.mantissa)
        } else {
            Self::from_mantissa(rhs.mantissa - self.mantissa)
        }
    }

    /// `floor((a.mantissa * b.mantissa) / S)`.
    pub fn mul(self, rhs: Self) -> Result<Self, Error> {
        let product = self.mantissa.safe_mul(rhs.mantissa)?;
        Ok(Self::from_mantissa(product.safe_div(fp_scale())?))
    }

    /// `floor((a.mantissa * S) / b.mantissa)`. Fails with
    /// [`Error::DivideByZero`] if `rhs` is zero.
    pub fn div(self, rhs: Self) -> Result<Self, Error> {
        if rhs.mantissa.is_zero() {
            return Err(Error::DivideByZero);
        }
        let numerator = self.mantissa.safe_mul(fp_scale())?;
        Ok(Self::from_mantissa(numerator.safe_div(rhs.mantissa)?))
    }

    /// Repeated multiplication; `pow(a, 0) == 1`.
    pub fn pow(self, exponent: u32) -> Result<Self, Error> {
        let mut result = Self::one();
        for _ in 0..exponent {
            result = result.mul(self)?;
        }
        Ok(result)
    }

    /// `floor((a.mantissa * u) / S)`, cast down to `u64`.
    pub fn mul_u64(self, u: u64) -> Result<u64, Error> {
        let product = self.mantissa.safe_mul(U256::from(u))?;
        product.safe_div(fp_scale())?.try_to_u64()
    }

    /// `floor(u / a)`, i.e. how many `L` a given `R` amount buys at this
    /// price: `floor((u * S) / a.mantissa)`. Fails with
    /// [`Error::DivideByZero`] if `self` is zero.
    pub fn div_u64(self, u: u64) -> Result<u64, Error> {
        if self.mantissa.is_zero() {
            return Err(Error::DivideByZero);
        }
        let numerator = U256::from(u).safe_mul(fp_scale())?;
        numerator.safe_div(self.mantissa)?.try_to_u64()
    }

    /// `floor(a / u)`. Fails with [`Error::DivideByZero`] if `u == 0`.
    pub fn div_by_u64(self, u: u64) -> Result<Self, Error> {
        if u == 0 {
            return Err(Error::DivideByZero);
        }
        Ok(Self::from_mantissa(self.mantissa.safe_div(U256::from(u))?))
    }

    /// `floor(a.mantissa / S)`.
    pub fn truncate_to_u64(self) -> Result<u64, Error> {
        self.mantissa.safe_div(fp_scale())?.try_to_u64()
    }
}

/// Floor-divides `a * b / c` over a widened `U256` intermediate, as a
/// single rounding op (as opposed to chaining two `Fp` operations, which
/// would round twice). Used for pro-rata fee splits.
pub fn mul_div_floor_u64(a: u64, b: u64, c: u64) -> Result<u64, Error> {
    if c == 0 {
        return Err(Error::DivideByZero);
    }
    let product = U256::from(a).safe_mul(U256::from(b))?;
    product.safe_div(U256::from(c))?.try_to_u64()
}

#[cfg(test)]
pub(crate) fn approx_eq(a: Fp, b: Fp) -> bool {
    let diff = a.abs_diff(b);
    diff.mantissa <= U256::from(1u64)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_fraction_truncates() {
        assert_eq!(Fp::from_fraction(7, 2).unwrap().truncate_to_u64().unwrap(), 3);
        assert_eq!(Fp::from_fraction(10, 3).unwrap().truncate_to_u64().unwrap(), 3);
    }

    #[test]
    fn from_fraction_matches_named_values() {
        assert_eq!(Fp::from_fraction(3, 2).unwrap(), Fp::from_fraction(15, 10).unwrap());
        assert_eq!(Fp::from_fraction(1, 10).unwrap().mantissa(), U256::from(100_000_000_000_000_000u64));
    }

    #[test]
    fn from_fraction_rejects_zero_denominator() {
        assert_eq!(Fp::from_fraction(1, 0), Err(Error::DivideByZero));
    }

    #[test]
    fn mul_is_commutative() {
        let a = Fp::from_fraction(7, 3).unwrap();
        let b = Fp::from_fraction(11, 5).unwrap();
        assert_eq!(a.mul(b).unwrap(), b.mul(a).unwrap());
    }

    #[test]
    fn div_then_mul_is_approximately_identity() {
        let a = Fp::from_fraction(10, 1).unwrap();
        let b = Fp::from_fraction(3, 1).unwrap();
        let roundtrip = a.div(b).unwrap().mul(b).unwrap();
        assert!(approx_eq(a, roundtrip));
    }

    #[test]
    fn pow_matches_repeated_mul() {
        let a = Fp::from_fraction(1002, 1000).unwrap();
        let p3 = a.pow(3).unwrap();
        let manual = a.mul(a).unwrap().mul(a).unwrap();
        assert_eq!(p3, manual);
        assert_eq!(a.pow(0).unwrap(), Fp::one());
    }

    #[test]
    fn pow_increment_law() {
        let a = Fp::from_fraction(1002, 1000).unwrap();
        for p in 0..5 {
            assert_eq!(a.pow(p + 1).unwrap(), a.pow(p).unwrap().mul(a).unwrap());
        }
    }

    #[test]
    fn one_third_times_three_is_approximately_one() {
        let third = Fp::from_fraction(1, 3).unwrap();
        let three = Fp::from_fraction(3, 1).unwrap();
        assert!(approx_eq(third.mul(three).unwrap(), Fp::one()));
    }

    #[test]
    fn mul_u64_and_div_u64_invert_a_price() {
        let price = Fp::from_fraction(1, 2).unwrap();
        assert_eq!(price.mul_u64(1_000_000_000).unwrap(), 500_000_000);
        assert_eq!(price.div_u64(500_000_000).unwrap(), 1_000_000_000);
    }

    #[test]
    fn div_u64_rejects_zero_price() {
        assert_eq!(Fp::zero().div_u64(10), Err(Error::DivideByZero));
    }

    #[test]
    fn mul_div_floor_matches_manual_computation() {
        assert_eq!(mul_div_floor_u64(7, 5, 3).unwrap(), 11);
        assert_eq!(mul_div_floor_u64(7, 5, 0), Err(Error::DivideByZero));
    }
}

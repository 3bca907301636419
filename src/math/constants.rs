//! Precision and protocol constants for the liquidity book core.

use crate::math::bignumber::U256;

/// Decimal scale of an [`crate::math::fixed_point::Fp`] mantissa: 18 places.
pub const FP_DECIMALS: u32 = 18;

/// `S` in the spec: `FP_SCALE = 10^18`.
pub fn fp_scale() -> U256 {
    U256::from(10u64).pow(U256::from(FP_DECIMALS))
}

/// Denominator for basis-point quantities (`bin_step_bps`, `fee_bps`).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Protocol ceiling on a pool's trading fee: 0.5%.
pub const MAX_FEE_BPS: u64 = 50;

/// Id of the bin created alongside a fresh pool. Centering new pools here
/// leaves room for bins on both sides before a 64-bit id over/underflows.
pub const FIRST_BIN_ID: u64 = 1u64 << 63;

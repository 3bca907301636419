//! The bin-walking swap engine: converts between `L` and `R` at each
//! bin's fixed price, applying trading fees, and crosses into adjacent
//! bins as each fills.

use crate::{
    asset::Asset,
    error::Error,
    math::{
        constants::BPS_DENOMINATOR,
        fixed_point::{mul_div_floor_u64, Fp},
        safe_math::SafeMath,
    },
    pool::Pool,
};

/// Swaps the entirety of `coin_left` into `R`, walking bins outward
/// (increasing id) from the active bin as each fills.
pub fn swap_ltr<L: Asset, R: Asset>(
    pool: &mut Pool<L, R>,
    mut coin_left: L,
    now_ms: u64,
) -> Result<R, Error> {
    let mut output = R::zero();

    loop {
        let remaining = coin_left.value();
        if remaining == 0 {
            break;
        }

        let bin_balance_right = pool.active_bin().balance_right();
        if bin_balance_right == 0 {
            advance_right(pool)?;
            continue;
        }

        let price = pool.active_bin().price;
        let fee_bps = pool.fee_bps();
        let fee = mul_div_floor_u64(remaining, fee_bps, BPS_DENOMINATOR)?;
        let principal = remaining.safe_sub(fee)?;
        let tentative_right = price.mul_u64(principal)?;

        let (used_left, out_right, fee_charged) = if tentative_right > bin_balance_right {
            let capped_right = bin_balance_right;
            let capped_left = price.div_u64(capped_right)?;
            let inv_factor = Fp::from_fraction(BPS_DENOMINATOR.safe_sub(fee_bps)?, BPS_DENOMINATOR)?;
            let gross_left = inv_factor.div_u64(capped_left)?;
            let capped_fee = gross_left.safe_sub(capped_left)?;
            let total_left = capped_left.safe_add(capped_fee)?;
            (total_left, capped_right, capped_fee)
        } else {
            (remaining, tentative_right, fee)
        };

        let input = coin_left.split(used_left);
        let leg_output = pool
            .active_bin_mut()
            .record_swap_leg_ltr(input, out_right, fee_charged, now_ms)?;
        output.join(leg_output);

        if pool.active_bin().balance_right() == 0 {
            let more_input_remains = coin_left.value() > 0;
            match advance_right(pool) {
                Ok(()) => {}
                Err(e) if !more_input_remains => {
                    let _ = e;
                }
                Err(e) => return Err(e),
            }
        }
    }

    Ok(output)
}

/// Swaps the entirety of `coin_right` into `L`, walking bins inward
/// (decreasing id) from the active bin as each fills.
pub fn swap_rtl<L: Asset, R: Asset>(
    pool: &mut Pool<L, R>,
    mut coin_right: R,
    now_ms: u64,
) -> Result<L, Error> {
    let mut output = L::zero();

    loop {
        let remaining = coin_right.value();
        if remaining == 0 {
            break;
        }

        let bin_balance_left = pool.active_bin().balance_left();
        if bin_balance_left == 0 {
            advance_left(pool)?;
            continue;
        }

        let price = pool.active_bin().price;
        let fee_bps = pool.fee_bps();
        let fee = mul_div_floor_u64(remaining, fee_bps, BPS_DENOMINATOR)?;
        let principal = remaining.safe_sub(fee)?;
        let tentative_left = price.div_u64(principal)?;

        let (used_right, out_left, fee_charged) = if tentative_left > bin_balance_left {
            let capped_left = bin_balance_left;
            let capped_right_principal = price.mul_u64(capped_left)?;
            let inv_factor = Fp::from_fraction(BPS_DENOMINATOR.safe_sub(fee_bps)?, BPS_DENOMINATOR)?;
            let gross_right = inv_factor.div_u64(capped_right_principal)?;
            let capped_fee = gross_right.safe_sub(capped_right_principal)?;
            let total_right = capped_right_principal.safe_add(capped_fee)?;
            (total_right, capped_left, capped_fee)
        } else {
            (remaining, tentative_left, fee)
        };

        let input = coin_right.split(used_right);
        let leg_output = pool
            .active_bin_mut()
            .record_swap_leg_rtl(input, out_left, fee_charged, now_ms)?;
        output.join(leg_output);

        if pool.active_bin().balance_left() == 0 {
            let more_input_remains = coin_right.value() > 0;
            match advance_left(pool) {
                Ok(()) => {}
                Err(e) if !more_input_remains => {
                    let _ = e;
                }
                Err(e) => return Err(e),
            }
        }
    }

    Ok(output)
}

fn advance_right<L: Asset, R: Asset>(pool: &mut Pool<L, R>) -> Result<(), Error> {
    let next_id = pool.active_bin_id().safe_add(1)?;
    if !pool.contains_bin(next_id) {
        return Err(Error::InsufficientLiquidity);
    }
    pool.set_active_bin_id(next_id)
}

fn advance_left<L: Asset, R: Asset>(pool: &mut Pool<L, R>) -> Result<(), Error> {
    let next_id = pool.active_bin_id().safe_sub(1)?;
    if !pool.contains_bin(next_id) {
        return Err(Error::InsufficientLiquidity);
    }
    pool.set_active_bin_id(next_id)
}

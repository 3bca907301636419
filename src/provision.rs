//! Liquidity provision: splits a caller's coins uniformly across a range
//! of bins centered on the active bin, minting bins on demand.

use crate::{
    asset::Asset,
    error::Error,
    math::safe_math::SafeMath,
    pool::Pool,
    receipt::{LiquidityEntry, Receipt},
    validate,
};

/// Deposits `coin_left`/`coin_right` across `bin_count` bins (must be odd)
/// straddling the active bin, returning the [`Receipt`] that grants
/// withdrawal rights over the deposit.
///
/// Per-bin allotments are `value / (half + 1)`; the remainder left over
/// from integer division — along with whatever wasn't allotted to either
/// side — lands in the active bin, so the sum of recorded deposits always
/// equals the caller's input exactly.
pub fn provide_liquidity_uniform<L: Asset, R: Asset>(
    pool: &mut Pool<L, R>,
    bin_count: u64,
    mut coin_left: L,
    mut coin_right: R,
    now_ms: u64,
) -> Result<Receipt, Error> {
    validate!(bin_count % 2 == 1, Error::EvenBinCount)?;

    let total_left = coin_left.value();
    let total_right = coin_right.value();
    validate!(total_left > 0 || total_right > 0, Error::NoLiquidity)?;

    let half = (bin_count - 1) / 2;
    let slots = half.safe_add(1)?;
    let left_per_bin = total_left.safe_div(slots)?;
    let right_per_bin = total_right.safe_div(slots)?;

    let active_id = pool.active_bin_id();
    let step = pool.step_factor()?;
    let mut entries = Vec::with_capacity((2 * half + 1) as usize);

    let mut left_price = pool.active_price();
    for n in 1..=half {
        left_price = left_price.div(step)?;
        let bin_id = active_id.safe_sub(n)?;
        pool.insert_bin_if_missing(bin_id, left_price);

        let deposit = coin_left.split(left_per_bin);
        pool.get_bin_mut(bin_id)
            .expect("just inserted")
            .provide(deposit, R::zero())?;
        entries.push(LiquidityEntry { bin_id, left: left_per_bin, right: 0 });
    }

    let mut right_price = pool.active_price();
    for n in 1..=half {
        right_price = right_price.mul(step)?;
        let bin_id = active_id.safe_add(n)?;
        pool.insert_bin_if_missing(bin_id, right_price);

        let deposit = coin_right.split(right_per_bin);
        pool.get_bin_mut(bin_id)
            .expect("just inserted")
            .provide(L::zero(), deposit)?;
        entries.push(LiquidityEntry { bin_id, left: 0, right: right_per_bin });
    }

    let remainder_left = coin_left.value();
    let remainder_right = coin_right.value();
    pool.active_bin_mut().provide(coin_left, coin_right)?;
    entries.push(LiquidityEntry {
        bin_id: active_id,
        left: remainder_left,
        right: remainder_right,
    });

    Ok(Receipt {
        pool_id: pool.id,
        deposit_time_ms: now_ms,
        liquidity: entries,
    })
}

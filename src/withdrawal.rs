//! Liquidity withdrawal: consumes a receipt, paying out principal plus
//! accrued fees per bin.

use crate::{asset::Asset, error::Error, pool::Pool, receipt::Receipt, validate};

/// Consumes `receipt`, returning the combined payout across every bin it
/// names. Fails [`Error::InvalidPoolId`] if the receipt wasn't issued by
/// `pool`.
pub fn withdraw<L: Asset, R: Asset>(pool: &mut Pool<L, R>, receipt: Receipt) -> Result<(L, R), Error> {
    validate!(receipt.pool_id == pool.id, Error::InvalidPoolId)?;

    let mut out_left = L::zero();
    let mut out_right = R::zero();

    for entry in receipt.liquidity {
        let bin = pool
            .get_bin_mut(entry.bin_id)
            .expect("receipt references a bin that no longer exists");
        let (left, right) = bin.withdraw(entry.left, entry.right, receipt.deposit_time_ms)?;
        out_left.join(left);
        out_right.join(right);
    }

    Ok((out_left, out_right))
}

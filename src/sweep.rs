//! Empty-bin sweep: keeps the bin container bounded for long-lived pools.

use crate::{asset::Asset, pool::Pool};

/// Removes every non-active bin with zero balances and zero outstanding
/// provided amounts. Never invoked implicitly by swap or withdraw.
pub fn clean_empty_bins<L: Asset, R: Asset>(pool: &mut Pool<L, R>) {
    let active_id = pool.active_bin_id();
    pool.bins_mut().retain(|&id, bin| {
        id == active_id
            || bin.balance_left() != 0
            || bin.balance_right() != 0
            || bin.provided_left != 0
            || bin.provided_right != 0
    });
}

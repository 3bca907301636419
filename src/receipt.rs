//! Provider receipts: the sole artifact that grants withdrawal rights.

use crate::pool::PoolId;
use borsh::{BorshDeserialize, BorshSerialize};

/// One bin's worth of a deposit recorded on a [`Receipt`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct LiquidityEntry {
    pub bin_id: u64,
    pub left: u64,
    pub right: u64,
}

/// Immutable record of a deposit. Non-transferable in spirit: holding it
/// is the sole precondition for withdrawal, and withdrawal consumes it.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Receipt {
    pub pool_id: PoolId,
    pub deposit_time_ms: u64,
    pub liquidity: Vec<LiquidityEntry>,
}

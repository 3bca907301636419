//! The pool: an ordered map of price bins plus the parameters that define
//! how they're spaced and priced.

use crate::{
    asset::Asset,
    bin::Bin,
    error::Error,
    math::{
        constants::{FIRST_BIN_ID, MAX_FEE_BPS},
        fixed_point::Fp,
        safe_math::SafeMath,
    },
};
use borsh::{BorshDeserialize, BorshSerialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_POOL_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque, process-local pool identifier. Only ever compared for
/// equality (receipt validation); never interpreted numerically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct PoolId(u64);

impl PoolId {
    fn next() -> Self {
        Self(NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Two-asset liquidity book: an ordered collection of bins, the bin
/// currently tracking the market price, and the bin-spacing/fee
/// parameters fixed at construction.
pub struct Pool<L: Asset, R: Asset> {
    pub id: PoolId,
    bins: BTreeMap<u64, Bin<L, R>>,
    active_bin_id: u64,
    bin_step_bps: u64,
    fee_bps: u64,
}

impl<L: Asset, R: Asset> Pool<L, R> {
    /// Creates a pool with a single bin at [`FIRST_BIN_ID`]. `fee_bps` is
    /// clamped to [`MAX_FEE_BPS`].
    pub fn new(bin_step_bps: u64, starting_price_mantissa: crate::math::bignumber::U256, fee_bps: u64) -> Self {
        let mut bins = BTreeMap::new();
        bins.insert(FIRST_BIN_ID, Bin::new(Fp::from_mantissa(starting_price_mantissa)));

        Self {
            id: PoolId::next(),
            bins,
            active_bin_id: FIRST_BIN_ID,
            bin_step_bps,
            fee_bps: fee_bps.min(MAX_FEE_BPS),
        }
    }

    pub fn bin_step_bps(&self) -> u64 {
        self.bin_step_bps
    }

    pub fn fee_bps(&self) -> u64 {
        self.fee_bps
    }

    pub fn active_bin_id(&self) -> u64 {
        self.active_bin_id
    }

    pub fn active_price(&self) -> Fp {
        self.active_bin().price
    }

    pub fn active_bin(&self) -> &Bin<L, R> {
        // Invariant: `bins[active_bin_id]` always exists.
        self.bins.get(&self.active_bin_id).expect("active bin must exist")
    }

    pub fn active_bin_mut(&mut self) -> &mut Bin<L, R> {
        self.bins
            .get_mut(&self.active_bin_id)
            .expect("active bin must exist")
    }

    pub fn get_bin(&self, id: u64) -> Option<&Bin<L, R>> {
        self.bins.get(&id)
    }

    pub fn get_bin_mut(&mut self, id: u64) -> Option<&mut Bin<L, R>> {
        self.bins.get_mut(&id)
    }

    pub fn contains_bin(&self, id: u64) -> bool {
        self.bins.contains_key(&id)
    }

    pub fn insert_bin_if_missing(&mut self, id: u64, price: Fp) {
        self.bins.entry(id).or_insert_with(|| Bin::new(price));
    }

    /// Moves the active-bin pointer, failing if the target bin doesn't
    /// exist yet.
    pub fn set_active_bin_id(&mut self, id: u64) -> Result<(), Error> {
        if !self.bins.contains_key(&id) {
            return Err(Error::InsufficientLiquidity);
        }
        self.active_bin_id = id;
        Ok(())
    }

    /// The multiplicative gap between adjacent bin prices: `1 + bin_step_bps/10000`.
    pub fn step_factor(&self) -> Result<Fp, Error> {
        Fp::from_fraction(10_000u64.safe_add(self.bin_step_bps)?, 10_000)
    }

    pub(crate) fn bins_mut(&mut self) -> &mut BTreeMap<u64, Bin<L, R>> {
        &mut self.bins
    }
}

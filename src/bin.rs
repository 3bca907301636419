//! A single price bin: fixed price, paired inventory, and the fee log
//! that drives time-aware payouts on withdrawal.

use crate::{
    asset::Asset,
    error::Error,
    math::{
        fixed_point::{mul_div_floor_u64, Fp},
        safe_math::SafeMath,
    },
};
use borsh::{BorshDeserialize, BorshSerialize};
use std::collections::VecDeque;

/// A single fee collection event. `amount` and `total_bin_size_as_l` are
/// mutated down as withdrawals consume their pro-rata share; the entry is
/// dropped once `amount` reaches zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct FeeEntry {
    pub amount: u64,
    pub timestamp_ms: u64,
    pub total_bin_size_as_l: u64,
}

/// A discrete price level holding paired inventory for both assets.
#[derive(Debug)]
pub struct Bin<L: Asset, R: Asset> {
    /// Fixed for the life of the bin: one `L` is worth `price` `R`.
    pub price: Fp,
    pub balance_left: L,
    pub balance_right: R,
    /// Running sum of net LP principal currently attributed to this bin.
    /// Updated on deposit/withdraw only — never on swap.
    pub provided_left: u64,
    pub provided_right: u64,
    /// Fees collected in `L`, paid by `L -> R` traders, oldest-first.
    pub fee_log_left: VecDeque<FeeEntry>,
    /// Fees collected in `R`, paid by `R -> L` traders, oldest-first.
    pub fee_log_right: VecDeque<FeeEntry>,
}

/// `left + floor(right / price)`. Correct as a scale-invariant "L-sized"
/// measure of a deposit only when `price <= 1`; for `price > 1` the
/// `right`-valued term is compressed toward zero by the division. Kept
/// exactly as specified for behavioral compatibility — see DESIGN.md.
pub fn as_l(price: Fp, left: u64, right: u64) -> Result<u64, Error> {
    let right_as_l = price.div_u64(right)?;
    left.safe_add(right_as_l)
}

impl<L: Asset, R: Asset> Bin<L, R> {
    pub fn new(price: Fp) -> Self {
        Self {
            price,
            balance_left: L::zero(),
            balance_right: R::zero(),
            provided_left: 0,
            provided_right: 0,
            fee_log_left: VecDeque::new(),
            fee_log_right: VecDeque::new(),
        }
    }

    pub fn balance_left(&self) -> u64 {
        self.balance_left.value()
    }

    pub fn balance_right(&self) -> u64 {
        self.balance_right.value()
    }

    /// (a) Adds inventory on provisioning, crediting both the live
    /// balance and the principal attributed to LPs.
    pub fn provide(&mut self, left: L, right: R) -> Result<(), Error> {
        let l = left.value();
        let r = right.value();
        self.balance_left.join(left);
        self.balance_right.join(right);
        self.provided_left = self.provided_left.safe_add(l)?;
        self.provided_right = self.provided_right.safe_add(r)?;
        Ok(())
    }

    /// (b) An `L -> R` swap leg: `input` (principal + fee) joins
    /// `balance_left`, `output_right` leaves `balance_right`, and a fee
    /// entry is appended to `fee_log_left`.
    pub fn record_swap_leg_ltr(
        &mut self,
        input: L,
        output_right: u64,
        fee: u64,
        now_ms: u64,
    ) -> Result<R, Error> {
        self.balance_left.join(input);
        let out = self.balance_right.split(output_right);
        if fee > 0 {
            let total_bin_size_as_l = as_l(self.price, self.provided_left, self.provided_right)?;
            self.fee_log_left.push_back(FeeEntry {
                amount: fee,
                timestamp_ms: now_ms,
                total_bin_size_as_l,
            });
        }
        Ok(out)
    }

    /// (b) mirror of [`Bin::record_swap_leg_ltr`] for `R -> L` legs.
    pub fn record_swap_leg_rtl(
        &mut self,
        input: R,
        output_left: u64,
        fee: u64,
        now_ms: u64,
    ) -> Result<L, Error> {
        self.balance_right.join(input);
        let out = self.balance_left.split(output_left);
        if fee > 0 {
            let total_bin_size_as_l = as_l(self.price, self.provided_left, self.provided_right)?;
            self.fee_log_right.push_back(FeeEntry {
                amount: fee,
                timestamp_ms: now_ms,
                total_bin_size_as_l,
            });
        }
        Ok(out)
    }

    /// (c) Consumes `left`/`right` principal plus the fees accrued on it
    /// since `deposit_time_ms`, subtracting from inventory and reducing
    /// the relevant fee-log entries. Drains any residual balance once the
    /// bin's attributed principal reaches zero on both sides.
    pub fn withdraw(&mut self, left: u64, right: u64, deposit_time_ms: u64) -> Result<(L, R), Error> {
        let share_as_l = as_l(self.price, left, right)?;

        let fees_earned_left = consume_fees(&mut self.fee_log_left, deposit_time_ms, share_as_l)?;
        let fees_earned_right = consume_fees(&mut self.fee_log_right, deposit_time_ms, share_as_l)?;

        let payout_left_due = left.safe_add(fees_earned_left)?;
        let payout_right_due = right.safe_add(fees_earned_right)?;

        let mut out_left = L::zero();
        let mut out_right = R::zero();

        // Principal payout (L side), crossing into R on shortfall.
        let avail_left = self.balance_left.value();
        if payout_left_due <= avail_left {
            out_left.join(self.balance_left.split(payout_left_due));
        } else {
            out_left.join(self.balance_left.withdraw_all());
            let shortfall = payout_left_due.safe_sub(avail_left)?;
            let shortfall_as_right = self.price.mul_u64(shortfall)?;
            out_right.join(self.cross_pay_right(shortfall_as_right)?);
        }

        // Principal payout (R side), crossing into L on shortfall.
        let avail_right = self.balance_right.value();
        if payout_right_due <= avail_right {
            out_right.join(self.balance_right.split(payout_right_due));
        } else {
            out_right.join(self.balance_right.withdraw_all());
            let shortfall = payout_right_due.safe_sub(avail_right)?;
            let shortfall_as_left = self.price.div_u64(shortfall)?;
            out_left.join(self.cross_pay_left(shortfall_as_left)?);
        }

        self.provided_left = self.provided_left.safe_sub(left)?;
        self.provided_right = self.provided_right.safe_sub(right)?;

        if self.provided_left == 0 && self.provided_right == 0 {
            out_left.join(self.balance_left.withdraw_all());
            out_right.join(self.balance_right.withdraw_all());
        }

        Ok((out_left, out_right))
    }

    /// Takes `amount` of `R` from `balance_right`, tolerating at most a
    /// one-unit shortfall (rounding); a larger shortfall is left
    /// untouched rather than draining the bin further.
    fn cross_pay_right(&mut self, amount: u64) -> Result<R, Error> {
        let avail = self.balance_right.value();
        if amount <= avail {
            Ok(self.balance_right.split(amount))
        } else if amount.safe_sub(avail)? <= 1 {
            Ok(self.balance_right.withdraw_all())
        } else {
            Ok(R::zero())
        }
    }

    /// Mirror of [`Bin::cross_pay_right`] for `L`.
    fn cross_pay_left(&mut self, amount: u64) -> Result<L, Error> {
        let avail = self.balance_left.value();
        if amount <= avail {
            Ok(self.balance_left.split(amount))
        } else if amount.safe_sub(avail)? <= 1 {
            Ok(self.balance_left.withdraw_all())
        } else {
            Ok(L::zero())
        }
    }
}

/// Scans `log` newest-to-oldest, stopping at the first entry older than
/// `deposit_time_ms`, and takes `share_as_l`'s pro-rata cut of each entry
/// along the way — mutating `amount`/`total_bin_size_as_l` down and
/// dropping entries that reach zero. Never reorders the log.
fn consume_fees(log: &mut VecDeque<FeeEntry>, deposit_time_ms: u64, share_as_l: u64) -> Result<u64, Error> {
    let mut earned_total: u64 = 0;
    let mut exhausted = Vec::new();

    for idx in (0..log.len()).rev() {
        let entry = &mut log[idx];
        if entry.timestamp_ms < deposit_time_ms {
            break;
        }

        let earned = mul_div_floor_u64(entry.amount, share_as_l, entry.total_bin_size_as_l)?;
        earned_total = earned_total.safe_add(earned)?;
        entry.amount = entry.amount.safe_sub(earned)?;
        entry.total_bin_size_as_l = entry.total_bin_size_as_l.safe_sub(share_as_l)?;

        if entry.amount == 0 {
            exhausted.push(idx);
        }
    }

    // Remove highest index first so earlier indices stay valid.
    for idx in exhausted {
        log.remove(idx);
    }

    Ok(earned_total)
}

//! Core of a concentrated-liquidity AMM exchanging two assets (`L`, `R`)
//! through discrete price bins. See `README`/`DESIGN.md` for the shape of
//! the three subsystems: fixed-point arithmetic, the bin-walking swap
//! engine, and time-gated liquidity accounting.

pub mod asset;
pub mod bin;
pub mod error;
pub mod macros;
pub mod math;
pub mod pool;
pub mod provision;
pub mod receipt;
pub mod sweep;
pub mod swap;
pub mod withdrawal;

#[cfg(test)]
mod test_support;

pub use asset::{Asset, Clock};
pub use bin::{Bin, FeeEntry};
pub use error::{Error, LbResult};
pub use math::fixed_point::Fp;
pub use pool::{Pool, PoolId};
pub use provision::provide_liquidity_uniform;
pub use receipt::{LiquidityEntry, Receipt};
pub use sweep::clean_empty_bins;
pub use swap::{swap_ltr, swap_rtl};
pub use withdrawal::withdraw;

#[cfg(test)]
mod integration_tests {
    use crate::{
        asset::Asset,
        error::Error,
        math::fixed_point::Fp,
        pool::Pool,
        provision::provide_liquidity_uniform,
        swap::{swap_ltr, swap_rtl},
        test_support::MockCoin,
        withdrawal::withdraw,
    };

    fn pool_at(step_bps: u64, price_n: u64, price_d: u64, fee_bps: u64) -> Pool<MockCoin, MockCoin> {
        let mantissa = Fp::from_fraction(price_n, price_d).unwrap().mantissa();
        Pool::new(step_bps, mantissa, fee_bps)
    }

    /// Scenario 1 (spec §8): single-bin round trip at price 0.5, fee 20bps.
    #[test]
    fn single_bin_round_trip() {
        let mut pool = pool_at(20, 1, 2, 20);
        provide_liquidity_uniform(
            &mut pool,
            1,
            MockCoin::new(10_000_000_000),
            MockCoin::new(10_000_000_000),
            1_000,
        )
        .unwrap();

        let r_out = swap_ltr(&mut pool, MockCoin::new(1_000_000_000), 2_000).unwrap();
        assert_eq!(r_out.value(), 499_000_000);

        let l_out = swap_rtl(&mut pool, MockCoin::new(1_000_000_000), 3_000).unwrap();
        assert_eq!(l_out.value(), 1_996_000_000);
    }

    /// Scenario 3 (spec §8): a single LP earns the fees generated by
    /// trades against its own deposit.
    #[test]
    fn single_lp_earns_its_own_fees() {
        let mut pool = pool_at(20, 1, 1, 20);
        let receipt = provide_liquidity_uniform(
            &mut pool,
            3,
            MockCoin::new(300_000_000_000),
            MockCoin::new(300_000_000_000),
            1_000,
        )
        .unwrap();

        swap_ltr(&mut pool, MockCoin::new(1_000_000_000), 2_000).unwrap();
        swap_rtl(&mut pool, MockCoin::new(1_000_000_000), 2_000).unwrap();

        let (left, right) = withdraw(&mut pool, receipt).unwrap();
        // A single LP providing the entire bin range earns back every fee
        // bps charged, on top of exactly its principal.
        assert!(left.value() > 300_000_000_000);
        assert!(right.value() > 300_000_000_000);
    }

    /// Scenario 5 (spec §8): fee hijacking prevention — a late LP that
    /// deposits and immediately withdraws earns no share of prior fees.
    #[test]
    fn late_lp_earns_no_prior_fees() {
        let mut pool = pool_at(20, 1, 1, 20);
        let receipt_a = provide_liquidity_uniform(
            &mut pool,
            1,
            MockCoin::new(100_000_000_000),
            MockCoin::new(100_000_000_000),
            1_000,
        )
        .unwrap();

        swap_ltr(&mut pool, MockCoin::new(1_000_000_000), 2_000).unwrap();

        let receipt_b = provide_liquidity_uniform(
            &mut pool,
            1,
            MockCoin::new(500_000_000_000),
            MockCoin::new(500_000_000_000),
            3_000,
        )
        .unwrap();
        let (left_b, right_b) = withdraw(&mut pool, receipt_b).unwrap();
        assert_eq!(left_b.value(), 500_000_000_000);
        assert_eq!(right_b.value(), 500_000_000_000);

        // LP A earns the L-side fee from the one swap predating its
        // deposit; the trader's L->R swap also drained the bin's R
        // inventory, so A's R payout is made up partly by a cross-asset
        // draw against its own L principal (§4.6 step 3/4).
        let (left_a, right_a) = withdraw(&mut pool, receipt_a).unwrap();
        assert!(left_a.value() > 100_000_000_000);
        assert!(right_a.value() < 100_000_000_000);
    }

    /// Scenario 6 (spec §8): withdrawing a receipt against the wrong pool
    /// is rejected.
    #[test]
    fn withdrawal_rejects_foreign_pool_id() {
        let mut pool_1 = pool_at(20, 1, 1, 20);
        let mut pool_2 = pool_at(20, 1, 1, 20);

        let _ = provide_liquidity_uniform(
            &mut pool_1,
            1,
            MockCoin::new(1_000_000_000),
            MockCoin::new(1_000_000_000),
            1_000,
        )
        .unwrap();
        let receipt_2 = provide_liquidity_uniform(
            &mut pool_2,
            1,
            MockCoin::new(1_000_000_000),
            MockCoin::new(1_000_000_000),
            1_000,
        )
        .unwrap();

        assert_eq!(withdraw(&mut pool_1, receipt_2).unwrap_err(), Error::InvalidPoolId);
    }

    #[test]
    fn even_bin_count_is_rejected() {
        let mut pool = pool_at(20, 1, 1, 20);
        let err = provide_liquidity_uniform(
            &mut pool,
            2,
            MockCoin::new(1_000_000_000),
            MockCoin::new(1_000_000_000),
            1_000,
        )
        .unwrap_err();
        assert_eq!(err, Error::EvenBinCount);
    }

    #[test]
    fn zero_liquidity_is_rejected() {
        let mut pool = pool_at(20, 1, 1, 20);
        let err =
            provide_liquidity_uniform(&mut pool, 1, MockCoin::new(0), MockCoin::new(0), 1_000).unwrap_err();
        assert_eq!(err, Error::NoLiquidity);
    }

    /// Scenario 2 (spec §8): a swap that fully drains the active bin's
    /// `R` side gets bin-capped at the inverse-fee rate, then the
    /// remainder crosses into the next bin and fills normally.
    #[test]
    fn multi_bin_crossing_caps_the_first_leg() {
        let mut pool = pool_at(20, 1, 2, 20);
        provide_liquidity_uniform(
            &mut pool,
            3,
            MockCoin::new(4_000_000_000),
            MockCoin::new(4_000_000_000),
            1_000,
        )
        .unwrap();

        let starting_bin = pool.active_bin_id();
        let r_out = swap_ltr(&mut pool, MockCoin::new(6_000_000_000), 2_000).unwrap();

        // First leg bin-caps at the active bin's full 2bn R, charging fee
        // in inverse mode; the remaining ~1.992bn L crosses into the
        // next bin (price 0.501) and fills there at the ordinary rate.
        assert_eq!(r_out.value(), 2_995_988_000);
        assert_eq!(pool.active_bin_id(), starting_bin + 1);
    }

    /// Scenario 4 (spec §8): 5 equal LPs split every swap's fees exactly
    /// one-fifth each.
    #[test]
    fn five_equal_lps_split_fees_evenly() {
        let mut pool = pool_at(20, 1, 1, 20);
        let receipts: Vec<_> = (0..5)
            .map(|_| {
                provide_liquidity_uniform(
                    &mut pool,
                    1,
                    MockCoin::new(100_000_000_000),
                    MockCoin::new(100_000_000_000),
                    1_000,
                )
                .unwrap()
            })
            .collect();

        swap_ltr(&mut pool, MockCoin::new(1_000_000_000), 2_000).unwrap();
        swap_rtl(&mut pool, MockCoin::new(1_000_000_000), 2_000).unwrap();

        for receipt in receipts {
            let (left, right) = withdraw(&mut pool, receipt).unwrap();
            assert_eq!(left.value(), 100_000_400_000);
            assert_eq!(right.value(), 100_000_400_000);
        }
    }

    #[test]
    fn over_trading_past_every_bin_is_rejected() {
        let mut pool = pool_at(20, 1, 1, 20);
        provide_liquidity_uniform(
            &mut pool,
            1,
            MockCoin::new(1_000_000_000),
            MockCoin::new(1_000_000_000),
            1_000,
        )
        .unwrap();

        let err = swap_ltr(&mut pool, MockCoin::new(10_000_000_000), 2_000).unwrap_err();
        assert_eq!(err, Error::InsufficientLiquidity);
    }
}

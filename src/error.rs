//! Error type for the liquidity book core.
//!
//! The teacher crate derived its error enum from `anchor_lang`'s
//! `#[error_code]`, which wires failures into Solana program logs. This
//! crate has no blockchain runtime to bind to, so the enum is a plain
//! `thiserror` type instead; the one-kind-per-failure-contract shape is
//! unchanged.

pub type LbResult<T = ()> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("no adjacent bin to cross into while input remains")]
    InsufficientLiquidity,

    #[error("bin_count must be odd")]
    EvenBinCount,

    #[error("both input coins are zero-value")]
    NoLiquidity,

    #[error("receipt pool id does not match this pool")]
    InvalidPoolId,

    #[error("division by zero")]
    DivideByZero,

    #[error("arithmetic overflow")]
    Overflow,
}

//! Assertion helper used throughout the pool/swap/withdrawal logic.

/// Returns `Err($err)` (logging the file:line and the condition) unless
/// `$cond` holds. Mirrors the `validate!` macro common to bin-walking AMM
/// forks in this space, minus the on-chain log sink.
#[macro_export]
macro_rules! validate {
    ($cond:expr, $err:expr) => {{
        if !$cond {
            log::warn!(
                "validation failed at {}:{}: {}",
                file!(),
                line!(),
                stringify!($cond)
            );
            Err($err)
        } else {
            Ok(())
        }
    }};
}

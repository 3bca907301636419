//! The asset-handle and clock capabilities the core consumes from its
//! host, per spec §6. The core never constructs or destroys real value —
//! only `split`/`join`/`value` it, and `zero`/`destroy_zero` the
//! placeholders it needs along the way — so custody stays entirely the
//! host's responsibility.

use crate::error::Error;

/// An opaque, amount-carrying asset handle. A host binds this to whatever
/// it uses for token custody (an on-chain `Balance<T>`, a ledger entry, a
/// wallet UTXO set, ...); the core only ever manipulates the `u64` value
/// it carries.
pub trait Asset: Sized {
    /// The amount this handle currently carries.
    fn value(&self) -> u64;

    /// Splits `amount` off of `self`, returning it as a new handle and
    /// reducing `self`'s value by `amount`. Hosts should treat a request
    /// for more than `self.value()` as a programming error (the core
    /// never issues one).
    fn split(&mut self, amount: u64) -> Self;

    /// Merges `other` into `self`, consuming it.
    fn join(&mut self, other: Self);

    /// A fresh handle carrying zero value.
    fn zero() -> Self;

    /// Consumes a zero-value handle. Fails with [`Error::Overflow`] if
    /// the handle is not actually zero — the core treats that as an
    /// accounting bug rather than a recoverable condition.
    fn destroy_zero(self) -> Result<(), Error>;

    /// Takes the entire current value, leaving `self` at zero.
    fn withdraw_all(&mut self) -> Self;
}

/// A monotonic millisecond wall clock. Operation signatures in this crate
/// take `now_ms: u64` directly (per spec §6) rather than a live `&dyn
/// Clock`, so implementing this trait is optional convenience for hosts
/// that want a typed seam for their time source.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

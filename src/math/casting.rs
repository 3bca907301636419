use crate::error::Error;
use std::convert::TryInto;
use std::panic::Location;

pub trait Cast: Sized {
    /// Casts between integer/big-number datatypes, failing with
    /// [`Error::Overflow`] when the target type cannot represent the value.
    #[track_caller]
    #[inline(always)]
    fn cast<T: std::convert::TryFrom<Self>>(self) -> Result<T, Error> {
        match self.try_into() {
            Ok(result) => Ok(result),
            Err(_) => {
                let caller = Location::caller();
                log::warn!("casting failure at {}:{}", caller.file(), caller.line());
                Err(Error::Overflow)
            }
        }
    }
}

impl<T> Cast for T {}

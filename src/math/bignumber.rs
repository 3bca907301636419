//! Big number data types.
//!
//! `U256` is the mantissa type backing [`crate::math::fixed_point::Fp`]:
//! 256 bits is the minimum width that keeps a single `mantissa * mantissa`
//! product from overflowing at the mantissa magnitudes the fixed-point
//! contract allows (~10^38), so there is no need to reach for a wider
//! type during multiplication.

#![allow(clippy::assign_op_pattern)]
#![allow(clippy::ptr_offset_with_cast)]
#![allow(clippy::manual_range_contains)]

use crate::error::Error;
use borsh::{BorshDeserialize, BorshSerialize};
use std::borrow::BorrowMut;
use std::io::{Error as IoError, ErrorKind, Read, Write};
use std::mem::size_of;
use uint::construct_uint;

macro_rules! impl_borsh_serialize_for_bn {
    ($type:ident) => {
        impl BorshSerialize for $type {
            #[inline]
            fn serialize<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
                let bytes = self.to_le_bytes();
                writer.write_all(&bytes)
            }
        }
    };
}

macro_rules! impl_borsh_deserialize_for_bn {
    ($type:ident) => {
        impl BorshDeserialize for $type {
            #[inline]
            fn deserialize(buf: &mut &[u8]) -> std::io::Result<Self> {
                if buf.len() < size_of::<$type>() {
                    return Err(IoError::new(
                        ErrorKind::InvalidInput,
                        "Unexpected length of input",
                    ));
                }

                let res = $type::from_le_bytes(buf[..size_of::<$type>()].try_into().unwrap());
                *buf = &buf[size_of::<$type>()..];
                Ok(res)
            }

            fn deserialize_reader<R: Read>(_: &mut R) -> std::io::Result<Self> {
                todo!()
            }
        }
    };
}

construct_uint! {
    /// 256-bit unsigned integer.
    pub struct U256(4);
}

impl U256 {
    /// Converts a `U256` to `u64`.
    pub fn to_u64(self) -> Option<u64> {
        self.try_into().map_or_else(|_| None, Some)
    }

    /// Converts a `U256` to `u64`, failing with [`Error::Overflow`].
    pub fn try_to_u64(self) -> Result<u64, Error> {
        self.try_into().map_err(|_| Error::Overflow)
    }

    /// Converts from little-endian bytes.
    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        U256::from_little_endian(&bytes)
    }

    /// Converts to little-endian bytes.
    pub fn to_le_bytes(self) -> [u8; 32] {
        let mut buf: Vec<u8> = Vec::with_capacity(size_of::<Self>());
        self.to_little_endian(buf.borrow_mut());

        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(buf.as_slice());
        bytes
    }
}

impl_borsh_deserialize_for_bn!(U256);
impl_borsh_serialize_for_bn!(U256);

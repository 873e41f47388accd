//! This crate is used as a utilities library for shared functionality across Cartouche modules.
//!
//! The data module contains [`ByteView`](data::ByteView), the bounds-checked, endian-explicit
//! window every probe reads its input through. The report module holds the uniform result
//! envelope: [`Report`](report::Report), [`FormatId`](report::FormatId), and one payload record
//! per format family. The crc module carries CRC-16/IBM, the checksum the command line exposes
//! for vintage disk images.
//!
//! Nothing in this crate performs I/O or keeps mutable state; identification stays a pure
//! function of the bytes handed in.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod crc;
pub mod data;
pub mod report;

//Pretty-printing pulls in String, so it stays behind std
#[cfg(feature = "std")]
pub mod util;

pub mod prelude;

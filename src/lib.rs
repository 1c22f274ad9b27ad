//
// Copyright (c) Dell Inc., or its subsidiaries. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//

//! A sequential binary encoder/decoder.
//!
//! [`BinaryStream`] pairs a growable byte buffer with a read cursor and exposes typed
//! accessors for bytes, booleans, 16-bit shorts, 24-bit triads and 32-bit ints in both
//! byte orders. The accessors are built on the width-generic integer codec in [`codec`].
//!
//! ```
//! use binary_stream::BinaryStream;
//!
//! let mut stream = BinaryStream::new();
//! stream.write_short(0x1234);
//! stream.write_triad(0xAB_CDEF);
//! stream.write_int(-1);
//!
//! assert_eq!(stream.read_short().expect("read short"), 0x1234);
//! assert_eq!(stream.read_triad().expect("read triad"), 0xAB_CDEF);
//! assert_eq!(stream.read_int().expect("read int"), -1);
//! assert!(stream.is_exhausted());
//! ```

#![deny(
    clippy::all,
    clippy::cargo,
    clippy::else_if_without_else,
    clippy::empty_line_after_outer_attr,
    clippy::multiple_inherent_impl,
    clippy::mut_mut,
    clippy::path_buf_push_overwrite
)]
#![warn(
    clippy::cargo_common_metadata,
    clippy::mutex_integer,
    clippy::needless_borrow,
    clippy::option_unwrap_used,
    clippy::result_unwrap_used,
    clippy::similar_names
)]
#![allow(clippy::multiple_crate_versions)]

pub mod codec;
pub mod config;
pub mod error;
pub mod stream;

pub use byteorder::{BigEndian, LittleEndian, NetworkEndian};
pub use codec::Endian;
pub use config::{StreamConfig, StreamConfigBuilder};
pub use error::StreamError;
pub use stream::BinaryStream;

#[cfg(test)]
mod trace;

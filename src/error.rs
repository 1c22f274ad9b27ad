//
// Copyright (c) Dell Inc., or its subsidiaries. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//

use snafu::{Backtrace, Snafu};

/// This kind of error that can be produced while reading from or positioning a binary stream.
///
/// A failed call never moves the cursor, so the stream stays usable afterwards.
#[derive(Debug, Snafu)]
#[snafu(visibility = "pub(crate)")]
pub enum StreamError {
    #[snafu(display(
        "Could not read {} bytes at offset {}: only {} bytes in the stream",
        requested,
        offset,
        length
    ))]
    OutOfBounds {
        offset: usize,
        requested: usize,
        length: usize,
        backtrace: Backtrace,
    },

    #[snafu(display("Offset {} is past the end of a stream of {} bytes", offset, length))]
    InvalidOffset {
        offset: usize,
        length: usize,
        backtrace: Backtrace,
    },
}

impl StreamError {
    /// Whether more input could make the failed read succeed, as opposed to a caller bug.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, StreamError::OutOfBounds { .. })
    }
}

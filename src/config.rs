//
// Copyright (c) Dell Inc., or its subsidiaries. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//

use derive_builder::*;
use getset::{CopyGetters, Getters};

/// Construction options for a [`BinaryStream`].
///
/// ```
/// use binary_stream::{BinaryStream, StreamConfigBuilder};
///
/// let config = StreamConfigBuilder::default()
///     .buffer(vec![0x00u8, 0x01])
///     .offset(1usize)
///     .build()
///     .expect("build stream config");
/// let mut stream = BinaryStream::from_config(config);
/// assert!(stream.read_bool().expect("read bool"));
/// ```
///
/// [`BinaryStream`]: crate::BinaryStream
#[derive(Builder, Debug, Getters, CopyGetters, Clone, PartialEq)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct StreamConfig {
    /// Bytes already received, e.g. a frame handed over by the transport.
    #[get = "pub"]
    #[builder(default)]
    pub(crate) buffer: Vec<u8>,

    /// Position of the first unread byte in `buffer`.
    #[get_copy = "pub"]
    #[builder(default = "0")]
    pub(crate) offset: usize,

    /// Additional capacity reserved up front for writes.
    #[get_copy = "pub"]
    #[builder(default = "0")]
    pub(crate) capacity: usize,
}

impl StreamConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        let offset = self.offset.unwrap_or_default();
        let length = self.buffer.as_ref().map_or(0, Vec::len);
        if offset > length {
            Err(format!(
                "offset {} is past the end of a buffer of {} bytes",
                offset, length
            ))
        } else {
            Ok(())
        }
    }
}

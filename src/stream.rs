//
// Copyright (c) Dell Inc., or its subsidiaries. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//

use crate::codec::{self, Endian, MAX_WIDTH};
use crate::config::StreamConfig;
use crate::error::{InvalidOffset, OutOfBounds, StreamError};
use byteorder::{BigEndian, LittleEndian};
use std::io::{self, Read, Write};
use tracing::debug;

pub const BYTE_SIZE: usize = 1;
pub const SHORT_SIZE: usize = 2;
pub const TRIAD_SIZE: usize = 3;
pub const INT_SIZE: usize = 4;

/// A BinaryStream is a growable byte buffer paired with a read cursor.
///
/// Writes append encoded bytes to the end of the buffer and never move the cursor.
/// Reads decode bytes starting at the cursor and advance it by the width of the value.
/// A read that asks for more bytes than remain fails with [`StreamError::OutOfBounds`]
/// and leaves the cursor where it was, so the caller can wait for more data and retry.
///
/// The buffer is an owned `Vec<u8>` and grows with amortized doubling.
///
/// Encoding never fails. A value wider than its field keeps only its low-order bytes,
/// e.g. [`write_triad`] drops the top byte of its `u32` argument.
///
/// BinaryStream also implements [`Read`] and [`Write`], so byteorder's
/// `ReadBytesExt` and `WriteBytesExt` extensions can be used on it directly.
///
/// [`write_triad`]: BinaryStream::write_triad
/// [`Read`]: std::io::Read
/// [`Write`]: std::io::Write
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryStream {
    buffer: Vec<u8>,
    offset: usize,
}

impl BinaryStream {
    /// Creates an empty stream positioned at offset 0.
    pub fn new() -> Self {
        BinaryStream::default()
    }

    /// Wraps bytes received elsewhere, with the cursor at `offset`.
    pub fn with_offset(buffer: Vec<u8>, offset: usize) -> Result<Self, StreamError> {
        if offset > buffer.len() {
            return InvalidOffset {
                offset,
                length: buffer.len(),
            }
            .fail();
        }
        Ok(BinaryStream { buffer, offset })
    }

    pub fn from_config(config: StreamConfig) -> Self {
        let StreamConfig {
            mut buffer,
            offset,
            capacity,
        } = config;
        if offset != 0 || capacity != 0 {
            debug!(
                offset,
                capacity,
                length = buffer.len(),
                "creating binary stream from config"
            );
        }
        buffer.reserve(capacity);
        BinaryStream { buffer, offset }
    }

    /// Position of the next unread byte.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Total number of bytes in the buffer, read or not.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of bytes between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.offset
    }

    pub fn is_exhausted(&self) -> bool {
        self.offset == self.buffer.len()
    }

    /// Returns the whole buffer, including bytes already read.
    pub fn get_buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    /// Returns the next `n` bytes and advances the cursor past them.
    pub fn read(&mut self, n: usize) -> Result<&[u8], StreamError> {
        self.check_remaining(n)?;
        let start = self.offset;
        self.offset += n;
        Ok(&self.buffer[start..self.offset])
    }

    /// Appends `bytes` to the end of the buffer.
    pub fn write(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Reads a `width`-byte unsigned integer in byte order `O`.
    ///
    /// # Panics
    ///
    /// Panics when `width` is larger than [`MAX_WIDTH`].
    pub fn read_unsigned<O: Endian>(&mut self, width: usize) -> Result<u64, StreamError> {
        let value = codec::decode_unsigned::<O>(self.peek(width)?);
        self.offset += width;
        Ok(value)
    }

    /// Reads a `width`-byte twos-complement integer in byte order `O`.
    ///
    /// # Panics
    ///
    /// Panics when `width` is larger than [`MAX_WIDTH`].
    pub fn read_signed<O: Endian>(&mut self, width: usize) -> Result<i64, StreamError> {
        let value = codec::decode_signed::<O>(self.peek(width)?);
        self.offset += width;
        Ok(value)
    }

    /// Appends `value` as a `width`-byte unsigned integer in byte order `O`.
    ///
    /// # Panics
    ///
    /// Panics when `width` is larger than [`MAX_WIDTH`].
    pub fn write_unsigned<O: Endian>(&mut self, value: u64, width: usize) {
        let mut bytes = [0u8; MAX_WIDTH];
        codec::encode_unsigned::<O>(value, &mut bytes[..width]);
        self.write(&bytes[..width]);
    }

    /// Appends `value` as a `width`-byte twos-complement integer in byte order `O`.
    ///
    /// # Panics
    ///
    /// Panics when `width` is larger than [`MAX_WIDTH`].
    pub fn write_signed<O: Endian>(&mut self, value: i64, width: usize) {
        let mut bytes = [0u8; MAX_WIDTH];
        codec::encode_signed::<O>(value, &mut bytes[..width]);
        self.write(&bytes[..width]);
    }

    pub fn read_byte(&mut self) -> Result<u8, StreamError> {
        Ok(self.read(BYTE_SIZE)?[0])
    }

    pub fn write_byte(&mut self, value: u8) {
        self.buffer.push(value);
    }

    /// Reads a boolean; any non-zero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool, StreamError> {
        Ok(self.read_byte()? != 0)
    }

    pub fn write_bool(&mut self, value: bool) {
        self.write_byte(u8::from(value));
    }

    pub fn read_short(&mut self) -> Result<u16, StreamError> {
        self.read_unsigned::<BigEndian>(SHORT_SIZE).map(|v| v as u16)
    }

    pub fn write_short(&mut self, value: u16) {
        self.write_unsigned::<BigEndian>(u64::from(value), SHORT_SIZE);
    }

    pub fn read_short_le(&mut self) -> Result<u16, StreamError> {
        self.read_unsigned::<LittleEndian>(SHORT_SIZE).map(|v| v as u16)
    }

    pub fn write_short_le(&mut self, value: u16) {
        self.write_unsigned::<LittleEndian>(u64::from(value), SHORT_SIZE);
    }

    /// Reads a 24-bit big-endian unsigned integer.
    pub fn read_triad(&mut self) -> Result<u32, StreamError> {
        self.read_unsigned::<BigEndian>(TRIAD_SIZE).map(|v| v as u32)
    }

    /// Writes the low 24 bits of `value` big-endian.
    pub fn write_triad(&mut self, value: u32) {
        self.write_unsigned::<BigEndian>(u64::from(value), TRIAD_SIZE);
    }

    pub fn read_triad_le(&mut self) -> Result<u32, StreamError> {
        self.read_unsigned::<LittleEndian>(TRIAD_SIZE).map(|v| v as u32)
    }

    pub fn write_triad_le(&mut self, value: u32) {
        self.write_unsigned::<LittleEndian>(u64::from(value), TRIAD_SIZE);
    }

    pub fn read_int(&mut self) -> Result<i32, StreamError> {
        self.read_signed::<BigEndian>(INT_SIZE).map(|v| v as i32)
    }

    pub fn write_int(&mut self, value: i32) {
        self.write_signed::<BigEndian>(i64::from(value), INT_SIZE);
    }

    pub fn read_int_le(&mut self) -> Result<i32, StreamError> {
        self.read_signed::<LittleEndian>(INT_SIZE).map(|v| v as i32)
    }

    pub fn write_int_le(&mut self, value: i32) {
        self.write_signed::<LittleEndian>(i64::from(value), INT_SIZE);
    }

    fn peek(&self, n: usize) -> Result<&[u8], StreamError> {
        self.check_remaining(n)?;
        Ok(&self.buffer[self.offset..self.offset + n])
    }

    fn check_remaining(&self, n: usize) -> Result<(), StreamError> {
        if n > self.remaining() {
            debug!(
                offset = self.offset,
                requested = n,
                length = self.buffer.len(),
                "read past the end of binary stream"
            );
            return OutOfBounds {
                offset: self.offset,
                requested: n,
                length: self.buffer.len(),
            }
            .fail();
        }
        Ok(())
    }
}

impl From<Vec<u8>> for BinaryStream {
    fn from(buffer: Vec<u8>) -> Self {
        BinaryStream { buffer, offset: 0 }
    }
}

impl Read for BinaryStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.remaining());
        buf[..n].copy_from_slice(&self.buffer[self.offset..self.offset + n]);
        self.offset += n;
        Ok(n)
    }
}

impl Write for BinaryStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

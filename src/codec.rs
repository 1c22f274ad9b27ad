//
// Copyright (c) Dell Inc., or its subsidiaries. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//

//! Width-generic integer codec.
//!
//! Every function here converts between an integer and a run of `width` bytes, where the
//! width is the length of the slice handed in. The byte order is a type parameter: any of
//! byteorder's [`BigEndian`], [`LittleEndian`] or [`NetworkEndian`] can be used.
//!
//! Values that do not fit in the target width are truncated to their low-order bytes.
//! Protocol code relies on this to pack wider counters into narrow fields, so it is never
//! reported as an error.
//!
//! [`NetworkEndian`]: byteorder::NetworkEndian

use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Widest run of bytes the 64-bit accumulator can hold.
pub const MAX_WIDTH: usize = 8;

const BYTE_MASK: u64 = 0xFF;

/**
 * trait for the byte orders understood by the codec.
 */
pub trait Endian: ByteOrder {
    /// Returns the position in a `width`-byte run of the byte with significance `index`,
    /// where index 0 is the least significant byte.
    fn position(index: usize, width: usize) -> usize;
}

impl Endian for BigEndian {
    fn position(index: usize, width: usize) -> usize {
        width - 1 - index
    }
}

impl Endian for LittleEndian {
    fn position(index: usize, _width: usize) -> usize {
        index
    }
}

/// Writes `value` into `out` as an unsigned integer of `out.len()` bytes.
///
/// # Panics
///
/// Panics when `out` is longer than [`MAX_WIDTH`].
pub fn encode_unsigned<O: Endian>(value: u64, out: &mut [u8]) {
    let width = checked_width(out.len());
    let mut mul: u64 = 1;
    for index in 0..width {
        out[O::position(index, width)] = ((value / mul) & BYTE_MASK) as u8;
        mul = mul.wrapping_mul(0x100);
    }
}

/// Reads an unsigned integer from all of `bytes`.
///
/// # Panics
///
/// Panics when `bytes` is longer than [`MAX_WIDTH`].
pub fn decode_unsigned<O: Endian>(bytes: &[u8]) -> u64 {
    let width = checked_width(bytes.len());
    let mut mul: u64 = 1;
    let mut value: u64 = 0;
    for index in 0..width {
        value += u64::from(bytes[O::position(index, width)]) * mul;
        mul = mul.wrapping_mul(0x100);
    }
    value
}

/// Writes `value` into `out` as a twos-complement integer of `out.len()` bytes.
///
/// Bytes are extracted by division, which truncates toward zero and so loses the borrow a
/// negative number carries into its higher bytes. Once a negative value has produced a
/// non-zero byte, every higher byte is decremented by one to restore it.
///
/// # Panics
///
/// Panics when `out` is longer than [`MAX_WIDTH`].
pub fn encode_signed<O: Endian>(value: i64, out: &mut [u8]) {
    let width = checked_width(out.len());
    if width == 0 {
        return;
    }

    out[O::position(0, width)] = (value & BYTE_MASK as i64) as u8;
    let mut mul: i64 = 1;
    let mut sub: i64 = 0;
    for index in 1..width {
        mul *= 0x100;
        if value < 0 && sub == 0 && out[O::position(index - 1, width)] != 0 {
            sub = 1;
        }
        out[O::position(index, width)] = ((value / mul - sub) & BYTE_MASK as i64) as u8;
    }
}

/// Reads a twos-complement integer from all of `bytes`.
///
/// # Panics
///
/// Panics when `bytes` is longer than [`MAX_WIDTH`].
pub fn decode_signed<O: Endian>(bytes: &[u8]) -> i64 {
    let width = bytes.len();
    let value = decode_unsigned::<O>(bytes);
    if width == 0 || width == MAX_WIDTH {
        return value as i64;
    }

    let bits = 8 * width as u32;
    if value >= 1u64 << (bits - 1) {
        value as i64 - (1i64 << bits)
    } else {
        value as i64
    }
}

/// Encodes `value` as an unsigned integer into a freshly allocated run of `width` bytes.
pub fn to_unsigned_bytes<O: Endian>(value: u64, width: usize) -> Vec<u8> {
    let mut out = vec![0u8; width];
    encode_unsigned::<O>(value, &mut out);
    out
}

/// Encodes `value` as a twos-complement integer into a freshly allocated run of `width` bytes.
pub fn to_signed_bytes<O: Endian>(value: i64, width: usize) -> Vec<u8> {
    let mut out = vec![0u8; width];
    encode_signed::<O>(value, &mut out);
    out
}

fn checked_width(width: usize) -> usize {
    assert!(
        width <= MAX_WIDTH,
        "integer width {} exceeds the maximum of {} bytes",
        width,
        MAX_WIDTH
    );
    width
}

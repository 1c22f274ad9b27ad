//
// Copyright (c) Dell Inc., or its subsidiaries. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//

use binary_stream::{BinaryStream, StreamError};

const PACKET_ID: u8 = 0x84;

/// A datagram header: id byte, 24-bit sequence number, flags and a length-prefixed payload.
#[derive(Debug, PartialEq)]
struct Datagram {
    sequence: u32,
    reliable: bool,
    payload: Vec<u8>,
}

fn encode(datagram: &Datagram) -> Vec<u8> {
    let mut stream = BinaryStream::new();
    stream.write_byte(PACKET_ID);
    stream.write_triad_le(datagram.sequence);
    stream.write_bool(datagram.reliable);
    stream.write_short(datagram.payload.len() as u16);
    stream.write(&datagram.payload);
    stream.into_inner()
}

fn read_datagram(stream: &mut BinaryStream) -> Result<Datagram, StreamError> {
    assert_eq!(stream.read_byte()?, PACKET_ID);
    let sequence = stream.read_triad_le()?;
    let reliable = stream.read_bool()?;
    let length = stream.read_short()? as usize;
    let payload = stream.read(length)?.to_vec();
    Ok(Datagram {
        sequence,
        reliable,
        payload,
    })
}

/// Decodes a whole datagram or nothing, so a partial frame is parsed again once complete.
fn decode(stream: &mut BinaryStream) -> Result<Datagram, StreamError> {
    let mut attempt = stream.clone();
    let datagram = read_datagram(&mut attempt)?;
    *stream = attempt;
    Ok(datagram)
}

#[test]
fn test_datagram_round_trip() {
    let datagram = Datagram {
        sequence: 0x01_0203,
        reliable: true,
        payload: b"hello".to_vec(),
    };
    let encoded = encode(&datagram);
    assert_eq!(&encoded[..7], &[PACKET_ID, 0x03, 0x02, 0x01, 0x01, 0x00, 0x05]);

    let mut stream = BinaryStream::from(encoded);
    assert_eq!(decode(&mut stream).expect("decode datagram"), datagram);
    assert!(stream.is_exhausted());
}

#[test]
fn test_datagram_arrives_in_pieces() {
    let datagram = Datagram {
        sequence: 7,
        reliable: false,
        payload: vec![0xAA; 32],
    };
    let encoded = encode(&datagram);
    let (head, tail) = encoded.split_at(10);

    let mut stream = BinaryStream::from(head.to_vec());
    let err = decode(&mut stream).expect_err("frame is incomplete");
    assert!(err.is_incomplete());
    assert_eq!(stream.offset(), 0);

    stream.write(tail);
    assert_eq!(decode(&mut stream).expect("decode datagram"), datagram);
    assert!(stream.is_exhausted());
}

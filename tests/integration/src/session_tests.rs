//! Session Tests - End-to-End Decoding
//!
//! Full buffers (common header, private header, object) decoded through
//! `Decoder`, including independent sessions on separate threads.

mod common;

use std::thread;

use common::*;
use ndr::{ByteOrder, Decoder, DecoderConfig, ErrorKind, FloatRepresentation, NdrError};

/// A small record: id, flag, name, weight
fn record(order: ByteOrder, id: u32, name: &str, weight: f64) -> Vec<u8> {
    let mut units = utf16(name);
    units.push(0);
    let n = units.len() as u32;
    PayloadBuilder::new(order)
        .u32(id)
        .u8(1)
        .bytes(&[0; 3])
        .cv_string(n, 0, n, &units)
        .pad8()
        .f64(weight)
        .into_stream()
}

fn read_record(buf: &[u8]) -> ndr::Result<(u32, bool, String, f64)> {
    let mut dec = Decoder::open(buf)?;
    let id = dec.read_u32()?;
    let flag = dec.read_bool()?;
    dec.align(4)?;
    let name = dec.read_conformant_varying_string()?;
    dec.align(8)?;
    let weight = dec.read_f64()?;
    let name = String::from_utf16_lossy(name.trim_terminator());
    Ok((id, flag, name, weight))
}

#[test]
fn test_record_both_orders() {
    for order in [ByteOrder::Little, ByteOrder::Big] {
        let buf = record(order, 7, "widget", 2.5);
        let (id, flag, name, weight) = read_record(&buf).unwrap();
        assert_eq!(id, 7);
        assert!(flag);
        assert_eq!(name, "widget");
        assert_eq!(weight, 2.5);
    }
}

#[test]
fn test_session_exposes_headers() {
    let buf = record(ByteOrder::Big, 1, "x", 0.0);
    let dec = Decoder::open(&buf).unwrap();

    assert_eq!(dec.common_header().version, 1);
    assert_eq!(dec.common_header().filler, [0xCC; 4]);
    assert_eq!(dec.byte_order(), ByteOrder::Big);
    assert_eq!(dec.context().float_representation, FloatRepresentation::Ieee);
    assert_eq!(dec.private_header().object_buffer_length as usize, buf.len() - 16);
    assert_eq!(dec.position(), 0);
    assert_eq!(dec.stream_position(), 16);
    assert_eq!(dec.remaining(), buf.len() - 16);
}

#[test]
fn test_header_errors_surface_from_open() {
    let mut buf = record(ByteOrder::Little, 1, "x", 0.0);
    buf[1] = 0x30;
    assert!(matches!(Decoder::open(&buf), Err(NdrError::InvalidByteOrder(3))));

    let buf = record(ByteOrder::Little, 1, "x", 0.0);
    assert_eq!(
        Decoder::open(&buf[..12]).unwrap_err().kind(),
        ErrorKind::Truncated
    );

    let mut buf = record(ByteOrder::Little, 1, "x", 0.0);
    buf[8] = 0x09;
    assert!(matches!(
        Decoder::open(&buf),
        Err(NdrError::MisalignedObjectLength(_))
    ));
}

#[test]
fn test_object_length_enforcement() {
    let mut buf = PayloadBuilder::new(ByteOrder::Little).u64(5).into_stream();
    // Trailing bytes beyond the declared object are not part of the payload
    buf.extend_from_slice(&[0xEE; 8]);

    let mut dec = Decoder::open(&buf).unwrap();
    assert_eq!(dec.read_u64().unwrap(), 5);
    assert_eq!(dec.read_u8().unwrap_err().kind(), ErrorKind::Truncated);

    let config = DecoderConfig::default().with_enforce_object_length(false);
    let mut dec = Decoder::with_config(&buf, config).unwrap();
    assert_eq!(dec.read_u64().unwrap(), 5);
    assert_eq!(dec.read_u8().unwrap(), 0xEE);

    // Declared length larger than the buffer
    let short = &buf[..20];
    assert!(matches!(
        Decoder::open(short),
        Err(NdrError::ObjectLengthExceedsBuffer { declared: 8, available: 4 })
    ));
}

#[test]
fn test_non_ieee_stream_rejects_floats_only() {
    let mut buf = PayloadBuilder::new(ByteOrder::Little)
        .u32(3)
        .f32(1.0)
        .into_stream();
    buf[2] = 3;

    let mut dec = Decoder::open(&buf).unwrap();
    assert_eq!(dec.context().float_representation, FloatRepresentation::Ibm);
    assert_eq!(dec.read_u32().unwrap(), 3);
    let err = dec.read_f32().unwrap_err();
    assert!(matches!(
        err,
        NdrError::UnsupportedFloatRepresentation(FloatRepresentation::Ibm)
    ));
    assert_eq!(err.kind(), ErrorKind::Structural);
}

#[test]
fn test_generic_read() {
    let buf = PayloadBuilder::new(ByteOrder::Big)
        .u16(0xFFFF)
        .u16(2)
        .u32(3)
        .into_stream();
    let mut dec = Decoder::open(&buf).unwrap();
    assert_eq!(dec.read::<i16>().unwrap(), -1);
    assert_eq!(dec.read::<u16>().unwrap(), 2);
    assert_eq!(dec.read::<u32>().unwrap(), 3);
}

#[test]
fn test_independent_sessions_across_threads() {
    let handles: Vec<_> = (0..8u32)
        .map(|i| {
            thread::spawn(move || {
                let order = if i % 2 == 0 { ByteOrder::Little } else { ByteOrder::Big };
                let name = format!("item-{i}");
                let buf = record(order, i, &name, i as f64 * 0.5);
                for _ in 0..100 {
                    let (id, _, decoded, weight) = read_record(&buf).unwrap();
                    assert_eq!(id, i);
                    assert_eq!(decoded, name);
                    assert_eq!(weight, i as f64 * 0.5);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

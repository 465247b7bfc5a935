// crates/mpf-core/tests/record_stream.rs

use mpf_core::error::RecordPart;
use mpf_core::header::fixed_field;
use mpf_core::{decode_all, DecodeOptions, Decoder, DimensionPolicy, HeaderInfo, MpfError, Record};

fn header_bytes(label_width: u8, declared_dim: u32, sample_count: u32) -> Vec<u8> {
    HeaderInfo {
        header_size: 0,
        format_code: fixed_field(b"MPF"),
        illustration: Vec::new(),
        code_type: fixed_field(b"ASCII"),
        label_byte_width: label_width,
        data_type: fixed_field(b"unsigned char"),
        sample_count,
        declared_dimensionality: declared_dim,
    }
    .encode()
    .unwrap()
}

/// Record `i` gets label bytes `i, i+1, ...` and vector bytes `(i*7 + k) % 256`.
fn records_bytes(n: usize, label_width: usize, dim: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(n * (label_width + dim));
    for i in 0..n {
        for j in 0..label_width {
            out.push((i + j) as u8);
        }
        for k in 0..dim {
            out.push(((i * 7 + k) % 256) as u8);
        }
    }
    out
}

#[test]
fn minimal_header_single_zero_record() {
    let mut bytes = header_bytes(1, 512, 1);
    bytes.extend(std::iter::repeat(0u8).take(1 + 512));

    let (h, recs) = decode_all(&bytes[..], DecodeOptions::default()).unwrap();
    assert_eq!(h.header_size, 62);
    assert!(h.illustration.is_empty());
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].label_hex(), "00");
    assert_eq!(recs[0].vector.len(), 512);
    assert!(recs[0].vector.iter().all(|&v| v == 0));
}

#[test]
fn vector_cut_one_byte_short_is_truncated() {
    let mut bytes = header_bytes(1, 512, 1);
    bytes.extend(std::iter::repeat(0u8).take(1 + 511));

    let err = decode_all(&bytes[..], DecodeOptions::default()).unwrap_err();
    match err {
        MpfError::TruncatedRecord { index, part, expected, got } => {
            assert_eq!(index, 0);
            assert_eq!(part, RecordPart::Vector);
            assert_eq!(expected, 512);
            assert_eq!(got, 511);
        }
        other => panic!("expected TruncatedRecord, got {other:?}"),
    }
}

#[test]
fn label_cut_short_is_truncated() {
    let mut bytes = header_bytes(4, 512, 2);
    bytes.extend(records_bytes(1, 4, 512));
    bytes.extend_from_slice(&[0xB0, 0xA1]);

    let d = Decoder::new(&bytes[..], DecodeOptions::default()).unwrap();
    let mut stream = d.records().unwrap();
    assert!(stream.next().unwrap().is_ok());
    match stream.next() {
        Some(Err(MpfError::TruncatedRecord { index: 1, part: RecordPart::Label, expected: 4, got: 2 })) => {}
        other => panic!("expected label truncation, got {other:?}"),
    }
    // non-restartable after a failure
    assert!(stream.next().is_none());
    assert!(stream.next().is_none());
}

#[test]
fn clean_end_on_record_boundary() {
    for n in [0usize, 1, 2, 17] {
        let mut bytes = header_bytes(2, 512, n as u32);
        bytes.extend(records_bytes(n, 2, 512));

        let d = Decoder::new(&bytes[..], DecodeOptions::default()).unwrap();
        let mut stream = d.records().unwrap();
        let mut count = 0;
        for rec in stream.by_ref() {
            rec.unwrap();
            count += 1;
        }
        assert_eq!(count, n);
        assert_eq!(stream.records_read(), n as u64);
        assert!(stream.next().is_none());
    }
}

#[test]
fn record_count_is_floor_of_remaining_and_remainder_truncates() {
    let label_width = 2usize;
    let dim = 512usize;
    let width = label_width + dim;
    let full = records_bytes(3, label_width, dim);

    for remainder in [0usize, 1, 2, 3, width / 2, width - 1] {
        let mut bytes = header_bytes(label_width as u8, dim as u32, 3);
        bytes.extend_from_slice(&full);
        bytes.extend(std::iter::repeat(0x55u8).take(remainder));

        let d = Decoder::new(&bytes[..], DecodeOptions::default()).unwrap();
        let results: Vec<_> = d.records().unwrap().collect();
        let ok = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(ok, (full.len() + remainder) / width, "remainder={remainder}");

        if remainder == 0 {
            assert_eq!(results.len(), 3);
        } else {
            assert_eq!(results.len(), 4);
            assert!(matches!(
                results.last(),
                Some(Err(MpfError::TruncatedRecord { index: 3, .. }))
            ));
        }
    }
}

#[test]
fn high_bytes_widen_without_sign_extension() {
    let mut bytes = header_bytes(1, 256, 1);
    bytes.push(0xFF);
    bytes.extend(0..=255u8);

    let opts = DecodeOptions { dimension: DimensionPolicy::Declared, ..DecodeOptions::default() };
    let (_, recs) = decode_all(&bytes[..], opts).unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].label_hex(), "ff");
    let expected: Vec<u16> = (0..=255u16).collect();
    assert_eq!(recs[0].vector, expected);
    assert!(recs[0].vector.iter().all(|&v| v <= 255));
}

#[test]
fn unsupported_data_type_fails_before_reading_records() {
    let mut h = HeaderInfo {
        header_size: 0,
        format_code: fixed_field(b"MPF"),
        illustration: Vec::new(),
        code_type: fixed_field(b"GB"),
        label_byte_width: 2,
        data_type: fixed_field(b"short"),
        sample_count: 1,
        declared_dimensionality: 512,
    };
    let mut bytes = h.encode().unwrap();
    // not even a whole record follows; the gate must fire first
    bytes.push(0x01);

    assert!(matches!(
        decode_all(&bytes[..], DecodeOptions::default()),
        Err(MpfError::UnsupportedDataType(_))
    ));

    h.data_type = fixed_field(b"unsigned char");
    let mut bytes = h.encode().unwrap();
    bytes.push(0x01);
    assert!(matches!(
        decode_all(&bytes[..], DecodeOptions::default()),
        Err(MpfError::TruncatedRecord { .. })
    ));
}

#[test]
fn fixed_policy_ignores_declared_dimensionality() {
    // header claims 4 features, the file really carries 512
    let mut bytes = header_bytes(1, 4, 2);
    bytes.extend(records_bytes(2, 1, 512));

    let (_, recs) = decode_all(&bytes[..], DecodeOptions::default()).unwrap();
    assert_eq!(recs.len(), 2);
    assert!(recs.iter().all(|r| r.vector.len() == 512));

    let opts = DecodeOptions { dimension: DimensionPolicy::Fixed(8), ..DecodeOptions::default() };
    let d = Decoder::new(&bytes[..], opts).unwrap();
    assert_eq!(d.layout().unwrap().dimensionality, 8);
}

#[test]
fn declared_policy_follows_the_header() {
    let mut bytes = header_bytes(2, 4, 3);
    bytes.extend(records_bytes(3, 2, 4));

    let opts = DecodeOptions { dimension: DimensionPolicy::Declared, ..DecodeOptions::default() };
    let (_, recs) = decode_all(&bytes[..], opts).unwrap();
    assert_eq!(recs.len(), 3);
    assert_eq!(recs[2].label, vec![2, 3]);
    assert_eq!(recs[2].vector, vec![14, 15, 16, 17]);
}

#[test]
fn declared_zero_dimensionality_is_malformed() {
    let bytes = header_bytes(1, 0, 0);
    let opts = DecodeOptions { dimension: DimensionPolicy::Declared, ..DecodeOptions::default() };
    let d = Decoder::new(&bytes[..], opts).unwrap();
    assert!(matches!(d.records(), Err(MpfError::MalformedHeader(_))));
}

#[test]
fn decoding_twice_gives_identical_records() {
    let mut bytes = header_bytes(2, 512, 5);
    bytes.extend(records_bytes(5, 2, 512));

    let a: Vec<Record> = decode_all(&bytes[..], DecodeOptions::default()).unwrap().1;
    let b: Vec<Record> = decode_all(&bytes[..], DecodeOptions::default()).unwrap().1;
    assert_eq!(a.len(), 5);
    assert_eq!(a, b);
}

#[test]
fn huge_declared_dimensionality_fails_on_the_bytes_present() {
    let mut bytes = header_bytes(1, u32::MAX, 1);
    bytes.extend_from_slice(&[0x30, 1, 2]);

    let opts = DecodeOptions { dimension: DimensionPolicy::Declared, ..DecodeOptions::default() };
    match decode_all(&bytes[..], opts) {
        Err(MpfError::TruncatedRecord { index: 0, part: RecordPart::Vector, expected, got: 2 }) => {
            assert_eq!(expected, u32::MAX as usize);
        }
        other => panic!("expected vector truncation, got {other:?}"),
    }
}

#[test]
fn vectors_wider_than_one_read_chunk_decode_whole() {
    let dim = 70_000usize;
    let mut bytes = header_bytes(1, dim as u32, 2);
    bytes.extend(records_bytes(2, 1, dim));

    let opts = DecodeOptions { dimension: DimensionPolicy::Declared, ..DecodeOptions::default() };
    let (_, recs) = decode_all(&bytes[..], opts).unwrap();
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[1].vector.len(), dim);
    let expected: Vec<u16> = (0..dim).map(|k| ((7 + k) % 256) as u16).collect();
    assert_eq!(recs[1].vector, expected);
}

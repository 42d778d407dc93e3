use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn bytes_map_to_i8() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("bytes.bin");
    fs::write(&path, [0u8, 1, 0x7f, 0x80, 0xff]).expect("write file");

    let payload = open_payload(&path).expect("payload");
    assert!(matches!(payload, Payload::Mapped(_)));
    assert_eq!(payload.as_i8(), &[0i8, 1, 127, -128, -1]);
}

#[test]
fn empty_file_is_empty_payload() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("empty.bin");
    fs::write(&path, b"").expect("write file");

    let payload = open_payload(&path).expect("payload");
    assert!(payload.bytes().is_empty());
    assert_eq!(decode_i32(&path, payload.bytes()).expect("decode"), Vec::<i32>::new());
}

#[test]
fn i32_round_trip_little_endian() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("dwords.bin");
    let values = [0i32, -1, i32::MIN, i32::MAX, 123_456];
    fs::write(&path, encode_i32(&values)).expect("write file");

    let payload = open_payload(&path).expect("payload");
    assert_eq!(&payload.bytes()[4..8], &[0xff, 0xff, 0xff, 0xff]);
    assert_eq!(decode_i32(&path, payload.bytes()).expect("decode"), values);
}

#[test]
fn trailing_bytes_rejected_for_i32() {
    let path = Path::new("odd.bin");
    let err = decode_i32(path, &[1, 2, 3, 4, 5]).expect_err("must fail");
    assert!(matches!(err, InputError::TrailingBytes { len: 5, .. }));
}

#[test]
fn crc64_identifies_payload() {
    let a = Payload::Owned(b"123456789".to_vec());
    let b = Payload::Owned(b"123456780".to_vec());
    assert_eq!(a.crc64(), 0x6c40_df5f_0b49_7347);
    assert_ne!(a.crc64(), b.crc64());
}

#[cfg(feature = "gz")]
#[test]
fn gzip_payload_is_decoded() {
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("bytes.bin.gz");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&[3u8, 0xfd, 9]).expect("compress");
    fs::write(&path, encoder.finish().expect("finish")).expect("write file");

    let payload = open_payload(&path).expect("payload");
    assert!(matches!(payload, Payload::Owned(_)));
    assert_eq!(payload.as_i8(), &[3i8, -3, 9]);
}

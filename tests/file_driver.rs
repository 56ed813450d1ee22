//! Encoding and decoding through files.

use std::fs;

use huffpack::file::{process_file, Mode};
use huffpack::{is_encoded, Error};

#[test]
fn encode_then_decode_files() {
    let dir = tempfile::tempdir().unwrap();
    let original = dir.path().join("poem.txt");
    let packed = dir.path().join("poem.hp");
    let restored = dir.path().join("poem.out");
    let text = b"Tyger Tyger, burning bright,\nIn the forests of the night;\n";
    fs::write(&original, text).unwrap();

    let outcome = process_file(&original, &packed, None).unwrap();
    assert_eq!(outcome.mode(), Mode::Encode);
    assert!(is_encoded(&fs::read(&packed).unwrap()));

    let outcome = process_file(&packed, &restored, None).unwrap();
    assert_eq!(outcome.mode(), Mode::Decode);
    assert_eq!(fs::read(&restored).unwrap(), text);
}

#[test]
fn empty_file_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty");
    let output = dir.path().join("out");
    fs::write(&input, b"").unwrap();

    let err = process_file(&input, &output, None).unwrap_err();
    assert!(matches!(err, Error::EmptyInput));
    assert!(!output.exists());
}

#[test]
fn missing_file_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("does-not-exist");
    let output = dir.path().join("out");

    let err = process_file(&input, &output, None).unwrap_err();
    assert!(matches!(err, Error::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    assert!(!output.exists());
}

#[test]
fn corrupt_container_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.hp");
    let output = dir.path().join("out");
    fs::write(&input, b".8\nz\xff\xff\x00\x00\x00").unwrap();

    assert!(process_file(&input, &output, None).is_err());
    assert!(!output.exists());
}

#[test]
fn forced_decode_of_raw_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("plain.txt");
    let output = dir.path().join("out");
    fs::write(&input, b"plain text").unwrap();

    let err = process_file(&input, &output, Some(Mode::Decode)).unwrap_err();
    assert!(matches!(err, Error::NotEncoded));
}

#[test]
fn header_only_container_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("header-only.hp");
    let output = dir.path().join("out");
    let mut packed = huffpack::encode(b"abracadabra").unwrap();
    packed[4..8].copy_from_slice(&49u32.to_le_bytes());
    fs::write(&input, &packed).unwrap();

    let err = process_file(&input, &output, None).unwrap_err();
    assert!(matches!(err, Error::TruncatedPayload { bit: 49 }));
    assert!(!output.exists());
}

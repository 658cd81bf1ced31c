use super::random_bytes;
use crate::{BackReader, Error, DEFAULT_BUF_SIZE};
use alloc::{sync::Arc, vec};
use std::{
    fs::File,
    io::{self, Write},
};

fn temp_file(data: &[u8]) -> File {
    let mut file = tempfile::tempfile().unwrap();
    file.write_all(data).unwrap();
    file
}

#[test]
fn read_file() {
    let data = random_bytes(20, 4096);
    let file = temp_file(&data);

    let mut reader = BackReader::from_file(&file).unwrap();
    assert_eq!(reader.capacity(), DEFAULT_BUF_SIZE);
    assert_eq!(reader.offset(), data.len() as u64);

    let mut buf = vec![0; data.len()];
    assert_eq!(reader.read(&mut buf).unwrap(), data.len());
    assert_eq!(buf, data);
}

#[test]
fn file_with_capacity() {
    let data = random_bytes(21, 1000);
    let file = temp_file(&data);

    let mut reader = BackReader::from_file_with_capacity(file, 64).unwrap();
    let mut buf = [0; 100];
    assert_eq!(reader.read_at(&mut buf, 500).unwrap(), 100);
    assert_eq!(buf[..], data[400..500]);

    assert!(matches!(
        BackReader::from_file_with_capacity(reader.into_inner(), 0),
        Err(Error::InvalidArgument)
    ));
}

#[test]
fn shared_file() {
    let data = random_bytes(22, 300);
    let file = Arc::new(temp_file(&data));

    let mut head = BackReader::new(file.clone(), 100, 32).unwrap();
    let mut tail = BackReader::new(file, 300, 32).unwrap();

    let mut buf = [0; 50];
    assert_eq!(tail.read(&mut buf).unwrap(), 50);
    assert_eq!(buf[..], data[250..]);
    assert_eq!(head.read(&mut buf).unwrap(), 50);
    assert_eq!(buf[..], data[50..100]);
}

#[test]
fn io_error() {
    let file = temp_file(&random_bytes(23, 10));
    let mut reader = BackReader::from_file(&file).unwrap();

    let mut buf = [0; 11];
    let err: io::Error = reader.read(&mut buf).unwrap_err().into();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

    let err: io::Error = reader.read(&mut []).unwrap_err().into();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
}

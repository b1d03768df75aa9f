use cryptal_argon2::encoding::LeStream;

#[test]
fn fields_are_little_endian_and_ordered() {
    let words = [0x0102_0304_0506_0708u64];
    let mut stream = LeStream::new();
    stream
        .push_u16(0x0a0b)
        .push_u32(0x0c0d_0e0f)
        .push_bytes(b"xy")
        .push_words(&words);

    assert_eq!(stream.len(), 2 + 4 + 2 + 8);
    assert_eq!(
        stream.to_vec(),
        vec![
            0x0b, 0x0a, 0x0f, 0x0e, 0x0d, 0x0c, b'x', b'y', 0x08, 0x07, 0x06, 0x05, 0x04, 0x03,
            0x02, 0x01
        ]
    );
}

#[test]
fn prefixed_field_carries_length() {
    let mut stream = LeStream::new();
    stream.push_prefixed(Some(&b"abc"[..]));
    assert_eq!(stream.to_vec(), vec![3, 0, 0, 0, b'a', b'b', b'c']);
}

#[test]
fn absent_and_empty_fields_encode_alike() {
    let mut absent = LeStream::new();
    absent.push_prefixed(None);

    let mut empty = LeStream::new();
    empty.push_prefixed(Some(&[][..]));

    assert_eq!(absent.to_vec(), vec![0, 0, 0, 0]);
    assert_eq!(absent.to_vec(), empty.to_vec());
}

#[test]
fn chunks_concatenate_to_stream() {
    let words = [1u64, 2];
    let mut stream = LeStream::new();
    stream.push_u32(7).push_bytes(b"hello").push_words(&words);

    let mut collected = Vec::new();
    stream.for_each_chunk(|chunk| collected.extend_from_slice(chunk));
    assert_eq!(collected, stream.to_vec());
}

#[test]
fn new_stream_is_empty() {
    let mut stream = LeStream::new();
    assert!(stream.is_empty());
    stream.push_bytes(b"");
    assert!(stream.is_empty());
    stream.push_u16(0);
    assert!(!stream.is_empty());
}

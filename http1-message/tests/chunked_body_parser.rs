use std::error::Error;
use std::str;

use http1_message::{
    body_parser::{BodyParseOutput, BodyParser},
    chunked_body_parser::{ChunkState, ChunkedBodyParser},
    stream_buffer::StreamBuffer,
    ParseError,
};

fn parse(
    p: &mut ChunkedBodyParser,
    buf: &mut StreamBuffer,
    bytes: &[u8],
    body_buf: &mut Vec<u8>,
) -> Result<BodyParseOutput, ParseError> {
    buf.feed_bytes(bytes);
    p.parse(buf, body_buf, &mut |_: &[u8]| {})
}

#[test]
fn simple() -> Result<(), Box<dyn Error>> {
    // https://en.wikipedia.org/wiki/Chunked_transfer_encoding

    let mut p = ChunkedBodyParser::new();
    let mut buf = StreamBuffer::new(1024);

    let mut body_buf = vec![];
    let o = parse(
        &mut p,
        &mut buf,
        b"4\r\nWiki\r\n5\r\npedia\r\nE\r\n in\r\n\r\nchunks.\r\n0\r\n\r\nfoo",
        &mut body_buf,
    )?;
    assert_eq!(o, BodyParseOutput::Completed(23));

    println!("{:?}", str::from_utf8(&body_buf));
    assert_eq!(body_buf, b"Wikipedia in\r\n\r\nchunks.".to_vec());
    assert_eq!(buf.pending(), b"foo");

    Ok(())
}

#[test]
fn partial() -> Result<(), Box<dyn Error>> {
    let mut p = ChunkedBodyParser::new();
    let mut buf = StreamBuffer::new(1024);

    let mut body_buf = vec![];
    let o = parse(&mut p, &mut buf, b"4\r\nWiki\r\n5\r\np", &mut body_buf)?;
    assert_eq!(o, BodyParseOutput::Partial(4));

    assert_eq!(body_buf, b"Wiki".to_vec());
    assert_eq!(p.state(), ChunkState::ReadingChunkData);
    assert_eq!(p.chunk_len(), 5);
    assert_eq!(buf.pending(), b"p");

    Ok(())
}

#[test]
fn chunks_are_reported_in_order() -> Result<(), Box<dyn Error>> {
    let mut p = ChunkedBodyParser::new();
    let mut buf = StreamBuffer::new(1024);
    buf.feed_bytes(b"3\r\nfoo\r\n3;ext=1\r\nbar\r\n0\r\nExpires: never\r\n\r\n");

    let mut chunks = vec![];
    let mut body_buf = vec![];
    let o = p.parse(&mut buf, &mut body_buf, &mut |chunk: &[u8]| {
        chunks.push(chunk.to_vec())
    })?;
    assert_eq!(o, BodyParseOutput::Completed(6));

    assert_eq!(chunks, vec![b"foo".to_vec(), b"bar".to_vec()]);
    assert_eq!(body_buf, b"foobar".to_vec());
    assert!(buf.is_empty());

    Ok(())
}

#[test]
fn invalid_crlf_with_data_end() -> Result<(), Box<dyn Error>> {
    let mut p = ChunkedBodyParser::new();
    let mut buf = StreamBuffer::new(1024);

    let mut body_buf = vec![];
    let err = parse(&mut p, &mut buf, b"4\r\nWikix\n", &mut body_buf)
        .err()
        .unwrap();
    match err {
        ParseError::InvalidCRLF => {}
        _ => assert!(false, "err not match"),
    }

    Ok(())
}

#[test]
fn invalid_chunk_size() -> Result<(), Box<dyn Error>> {
    let mut p = ChunkedBodyParser::new();
    let mut buf = StreamBuffer::new(1024);

    let mut body_buf = vec![];
    let err = parse(&mut p, &mut buf, b"4\r\nWiki\r\nzz\r\n", &mut body_buf)
        .err()
        .unwrap();
    match err {
        ParseError::InvalidChunkSize(Some(_)) => {}
        _ => assert!(false, "err not match"),
    }
    assert_eq!(body_buf, b"Wiki".to_vec());

    Ok(())
}

#[test]
fn too_long_body() -> Result<(), Box<dyn Error>> {
    let mut p = ChunkedBodyParser::with_body_max_len(8);
    let mut buf = StreamBuffer::new(1024);

    let mut body_buf = vec![];
    let err = parse(&mut p, &mut buf, b"4\r\nWiki\r\n5\r\n", &mut body_buf)
        .err()
        .unwrap();
    match err {
        ParseError::TooLongBody => {}
        _ => assert!(false, "err not match"),
    }

    Ok(())
}

#[test]
fn full() -> Result<(), Box<dyn Error>> {
    let mut p = ChunkedBodyParser::new();
    let mut buf = StreamBuffer::new(1024);

    let mut body_buf = vec![];

    let bytes = b"4\r\nWiki\r\n5\r\npedia\r\nE\r\n in\r\n\r\nchunks.\r\n0\r\n\r\nfoo";

    let o = parse(&mut p, &mut buf, &bytes[0..4], &mut body_buf)?;
    assert_eq!(o, BodyParseOutput::Partial(0));
    assert_eq!(body_buf, b"".to_vec());

    let o = parse(&mut p, &mut buf, &bytes[4..8], &mut body_buf)?;
    assert_eq!(o, BodyParseOutput::Partial(0));
    assert_eq!(body_buf, b"".to_vec());

    let o = parse(&mut p, &mut buf, &bytes[8..13], &mut body_buf)?;
    assert_eq!(o, BodyParseOutput::Partial(4));
    println!("{:?}", str::from_utf8(&body_buf));
    assert_eq!(body_buf, b"Wiki".to_vec());

    let o = parse(&mut p, &mut buf, &bytes[13..19], &mut body_buf)?;
    assert_eq!(o, BodyParseOutput::Partial(5));
    println!("{:?}", str::from_utf8(&body_buf));
    assert_eq!(body_buf, b"Wikipedia".to_vec());

    let o = parse(&mut p, &mut buf, &bytes[19..27], &mut body_buf)?;
    assert_eq!(o, BodyParseOutput::Partial(0));
    assert_eq!(body_buf, b"Wikipedia".to_vec());

    let o = parse(&mut p, &mut buf, &bytes[27..37], &mut body_buf)?;
    assert_eq!(o, BodyParseOutput::Partial(0));
    assert_eq!(body_buf, b"Wikipedia".to_vec());

    let o = parse(&mut p, &mut buf, &bytes[37..40], &mut body_buf)?;
    assert_eq!(o, BodyParseOutput::Partial(14));
    println!("{:?}", str::from_utf8(&body_buf));
    assert_eq!(body_buf, b"Wikipedia in\r\n\r\nchunks.".to_vec());

    let o = parse(&mut p, &mut buf, &bytes[40..42], &mut body_buf)?;
    assert_eq!(o, BodyParseOutput::Partial(0));
    assert_eq!(p.state(), ChunkState::ReadingTrailer);

    let o = parse(&mut p, &mut buf, &bytes[42..], &mut body_buf)?;
    assert_eq!(o, BodyParseOutput::Completed(0));
    assert_eq!(body_buf, b"Wikipedia in\r\n\r\nchunks.".to_vec());
    assert_eq!(buf.pending(), b"foo");

    Ok(())
}

#[test]
fn huge_chunk_size() -> Result<(), Box<dyn Error>> {
    for size_line in [&b"ffffffffffffffff\r\nab"[..], &b"fffffffffffffffe\r\nab"[..]] {
        let mut p = ChunkedBodyParser::new();
        let mut buf = StreamBuffer::new(1024);

        let mut body_buf = vec![];
        let err = parse(&mut p, &mut buf, size_line, &mut body_buf)
            .err()
            .unwrap();
        match err {
            // usize is narrower than 64 bits on some targets
            ParseError::TooLongBody | ParseError::InvalidChunkSize(_) => {}
            _ => assert!(false, "err not match"),
        }
    }

    Ok(())
}

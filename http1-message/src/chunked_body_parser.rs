use std::str;

use crate::{
    body_parser::{BodyParseOutput, BodyParser},
    log::trace,
    ordinal_state::{Ordinal, OrdinalState},
    parse_error::ParseError,
    stream_buffer::{PayloadEnd, StreamBuffer},
};

//
//
//
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChunkState {
    AwaitingChunkSize,
    ReadingChunkData,
    /// After the zero-size chunk, up to the blank line closing the body.
    ReadingTrailer,
}
impl Ordinal for ChunkState {
    const INITIAL: Self = Self::AwaitingChunkSize;

    fn successor(self) -> Self {
        match self {
            Self::AwaitingChunkSize => Self::ReadingChunkData,
            Self::ReadingChunkData => Self::AwaitingChunkSize,
            Self::ReadingTrailer => Self::ReadingTrailer,
        }
    }
}

//
//
//
#[derive(Debug)]
pub struct ChunkedBodyParser {
    state: OrdinalState<ChunkState>,
    length: usize,
    body_max_len: usize,
}

impl Default for ChunkedBodyParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkedBodyParser {
    pub fn new() -> Self {
        Self::with_body_max_len(usize::MAX)
    }

    pub fn with_body_max_len(body_max_len: usize) -> Self {
        Self {
            state: OrdinalState::new(),
            length: 0,
            body_max_len,
        }
    }

    pub fn state(&self) -> ChunkState {
        self.state.current()
    }

    /// Size of the chunk being read, zero while awaiting a size line.
    pub fn chunk_len(&self) -> usize {
        self.length
    }

    /// Chunk extensions after `;` are ignored.
    fn parse_chunk_size(line: &[u8]) -> Result<usize, ParseError> {
        let line = str::from_utf8(line).map_err(|_| ParseError::InvalidChunkSize(None))?;
        let size = match line.split_once(';') {
            Some((size, _extensions)) => size,
            None => line,
        };
        let size = size.trim();
        // from_str_radix alone would take a leading sign
        if !size.starts_with(|c: char| c.is_ascii_hexdigit()) && !size.is_empty() {
            return Err(ParseError::InvalidChunkSize(None));
        }
        usize::from_str_radix(size, 16).map_err(|err| ParseError::InvalidChunkSize(Some(err)))
    }
}

//
//
//
impl BodyParser for ChunkedBodyParser {
    fn parse(
        &mut self,
        buf: &mut StreamBuffer,
        body_buf: &mut Vec<u8>,
        on_chunk: &mut dyn FnMut(&[u8]),
    ) -> Result<BodyParseOutput, ParseError> {
        let mut parsed_num_bytes = 0_usize;

        loop {
            if self.state == ChunkState::AwaitingChunkSize {
                let line = match buf.next_line()? {
                    Some(line) => line,
                    None => return Ok(BodyParseOutput::Partial(parsed_num_bytes)),
                };
                let length = Self::parse_chunk_size(&line)?;
                trace!("chunk size {}", length);

                if length == 0 {
                    self.state.set(ChunkState::ReadingTrailer);
                } else {
                    match body_buf.len().checked_add(length) {
                        Some(n) if n <= self.body_max_len => {}
                        _ => return Err(ParseError::TooLongBody),
                    }

                    self.length = length;
                    self.state.advance();
                }
            }

            if self.state == ChunkState::ReadingChunkData {
                let data = match buf.next_fixed_payload(self.length, PayloadEnd::Crlf)? {
                    Some(data) => data,
                    None => return Ok(BodyParseOutput::Partial(parsed_num_bytes)),
                };

                body_buf.extend_from_slice(&data[..]);
                on_chunk(&data[..]);
                parsed_num_bytes += data.len();

                self.length = 0;
                self.state.advance();
            }

            if self.state == ChunkState::ReadingTrailer {
                // trailer fields are skipped
                match buf.next_line()? {
                    Some(line) if line.is_empty() => {
                        return Ok(BodyParseOutput::Completed(parsed_num_bytes))
                    }
                    Some(_) => continue,
                    None => return Ok(BodyParseOutput::Partial(parsed_num_bytes)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_size() -> Result<(), ParseError> {
        assert_eq!(ChunkedBodyParser::parse_chunk_size(b"1a")?, 26);
        assert_eq!(ChunkedBodyParser::parse_chunk_size(b"FF ")?, 255);
        assert_eq!(ChunkedBodyParser::parse_chunk_size(b"4;name=value")?, 4);
        assert_eq!(ChunkedBodyParser::parse_chunk_size(b"0")?, 0);

        assert!(matches!(
            ChunkedBodyParser::parse_chunk_size(b"xyz"),
            Err(ParseError::InvalidChunkSize(Some(_)))
        ));
        assert!(matches!(
            ChunkedBodyParser::parse_chunk_size(b""),
            Err(ParseError::InvalidChunkSize(Some(_)))
        ));
        assert!(matches!(
            ChunkedBodyParser::parse_chunk_size(b"+5"),
            Err(ParseError::InvalidChunkSize(None))
        ));
        assert!(matches!(
            ChunkedBodyParser::parse_chunk_size(b"-0"),
            Err(ParseError::InvalidChunkSize(None))
        ));
        assert!(matches!(
            ChunkedBodyParser::parse_chunk_size(b"\xff"),
            Err(ParseError::InvalidChunkSize(None))
        ));

        Ok(())
    }
}

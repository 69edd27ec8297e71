use std::str;

use crate::{header_fields::HeaderFields, parse_error::ParseError, COLON, CRLF};

//
//
//
pub type IsAllCompleted = bool;

//
//
//
#[derive(Debug, Clone)]
pub struct HeaderParser {
    headers_max_len: usize,
    parsed_len: usize,
}

impl HeaderParser {
    pub fn new(headers_max_len: usize) -> Self {
        Self {
            headers_max_len,
            parsed_len: 0,
        }
    }

    /// Parses one complete header line. An empty line ends the header block.
    pub fn parse(
        &mut self,
        line: &[u8],
        headers: &mut HeaderFields,
    ) -> Result<IsAllCompleted, ParseError> {
        if line.is_empty() {
            return Ok(true);
        }

        self.parsed_len += line.len() + CRLF.len();
        if self.parsed_len > self.headers_max_len {
            return Err(ParseError::TooLongHeaders);
        }

        let (name, value) = Self::split_header(line)?;
        headers.insert(name, value.trim());
        Ok(false)
    }

    fn split_header(line: &[u8]) -> Result<(&str, &str), ParseError> {
        let malformed = || ParseError::MalformedHeaderLine(String::from_utf8_lossy(line).into_owned());

        let header_colon_index = line
            .iter()
            .position(|x| x == &COLON)
            .ok_or_else(malformed)?;
        if header_colon_index == 0 {
            return Err(malformed());
        }
        let header_name = str::from_utf8(&line[..header_colon_index]).map_err(|_| malformed())?;
        let header_value =
            str::from_utf8(&line[header_colon_index + 1..]).map_err(|_| malformed())?;

        Ok((header_name, header_value))
    }
}

use http::header::{CONTENT_LENGTH, TRANSFER_ENCODING};

use crate::{header_fields::HeaderFields, parse_error::ParseError, CHUNKED};

//
//
//
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BodyFraming {
    ContentLength(usize),
    Chunked,
    Neither,
}

pub trait BodyFramingDetector {
    fn detect(&self) -> Result<BodyFraming, ParseError>;
}
impl BodyFramingDetector for HeaderFields {
    fn detect(&self) -> Result<BodyFraming, ParseError> {
        if let Some(value) = self.get(CONTENT_LENGTH.as_str()) {
            let value = value.trim();
            if !value.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::InvalidContentLength);
            }
            let value: usize = value
                .parse()
                .map_err(|_| ParseError::InvalidContentLength)?;
            return Ok(BodyFraming::ContentLength(value));
        }

        if let Some(value) = self.get(TRANSFER_ENCODING.as_str()) {
            if value.trim().eq_ignore_ascii_case(CHUNKED) {
                return Ok(BodyFraming::Chunked);
            }
        }

        Ok(BodyFraming::Neither)
    }
}

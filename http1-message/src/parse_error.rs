use std::{error, fmt, io, num};

use http::{status::InvalidStatusCode, uri::InvalidUri};

//
//
//
/// Every variant is terminal: the parser refuses further input once one was returned.
#[derive(Debug)]
pub enum ParseError {
    MalformedFirstLine(String),
    UnknownMethod(String),
    InvalidTarget(InvalidUri),
    InvalidHttpVersion,
    InvalidStatusCode(InvalidStatusCode),
    MalformedHeaderLine(String),
    InvalidContentLength,
    InvalidChunkSize(Option<num::ParseIntError>),
    InvalidCRLF,
    TooLongLine,
    TooLongHeaders,
    TooLongBody,
    AlreadyComplete,
    Poisoned,
}
impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl error::Error for ParseError {}
impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> io::Error {
        io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
    }
}

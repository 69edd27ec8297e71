use std::str;

use http::{Method, StatusCode};

use crate::{
    line_grammar::{self, FirstLineShape},
    message::HttpVersion,
    parse_error::ParseError,
    request_target::RequestTarget,
};

//
//
//
#[derive(Debug, PartialEq, Eq)]
pub enum FirstLine {
    Request {
        method: Method,
        target: RequestTarget,
        http_version: HttpVersion,
    },
    Status {
        http_version: HttpVersion,
        status_code: StatusCode,
        status_phrase: String,
    },
}

pub fn parse_first_line(line: &[u8]) -> Result<FirstLine, ParseError> {
    let line = str::from_utf8(line)
        .map_err(|_| ParseError::MalformedFirstLine(String::from_utf8_lossy(line).into_owned()))?;

    match line_grammar::recognize(line) {
        FirstLineShape::RequestLine {
            method,
            target,
            major,
            minor,
        } => {
            let method =
                Method::from_bytes(method.as_bytes()).map_err(|_| unknown_method(method))?;
            let target = RequestTarget::parse(target).map_err(ParseError::InvalidTarget)?;
            Ok(FirstLine::Request {
                method,
                target,
                http_version: parse_http_version(major, minor)?,
            })
        }
        FirstLineShape::StatusLine {
            major,
            minor,
            code,
            phrase,
        } => {
            let status_code =
                StatusCode::from_bytes(code.as_bytes()).map_err(ParseError::InvalidStatusCode)?;
            Ok(FirstLine::Status {
                http_version: parse_http_version(major, minor)?,
                status_code,
                status_phrase: phrase.to_owned(),
            })
        }
        FirstLineShape::UnknownMethod(method) => Err(unknown_method(method)),
        FirstLineShape::Invalid => Err(ParseError::MalformedFirstLine(line.to_owned())),
    }
}

fn unknown_method(method: &str) -> ParseError {
    ParseError::UnknownMethod(method.to_owned())
}

fn parse_http_version(major: &str, minor: &str) -> Result<HttpVersion, ParseError> {
    match (major.parse(), minor.parse()) {
        (Ok(major), Ok(minor)) => Ok(HttpVersion::new(major, minor)),
        _ => Err(ParseError::InvalidHttpVersion),
    }
}

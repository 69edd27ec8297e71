use std::sync::OnceLock;

use http::Method;
use regex::Regex;

//
//
//
pub const KNOWN_METHODS: [Method; 9] = [
    Method::GET,
    Method::HEAD,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::CONNECT,
    Method::OPTIONS,
    Method::TRACE,
    Method::PATCH,
];

const STATUS_LINE: &str = r"^HTTP/([0-9]+)\.([0-9]+) ([0-9]{3})(?: (.*))?$";
const UNKNOWN_REQUEST_LINE: &str = r"^(\S+) \S+ HTTP/[0-9]+\.[0-9]+$";

//
//
//
/// Shape of a first line, with its captures still as text.
#[derive(Debug, PartialEq, Eq)]
pub enum FirstLineShape<'a> {
    RequestLine {
        method: &'a str,
        target: &'a str,
        major: &'a str,
        minor: &'a str,
    },
    StatusLine {
        major: &'a str,
        minor: &'a str,
        code: &'a str,
        phrase: &'a str,
    },
    UnknownMethod(&'a str),
    Invalid,
}

pub fn recognize(line: &str) -> FirstLineShape<'_> {
    if let Some(caps) = request_line().captures(line) {
        return FirstLineShape::RequestLine {
            method: caps.get(1).map_or("", |m| m.as_str()),
            target: caps.get(2).map_or("", |m| m.as_str()),
            major: caps.get(3).map_or("", |m| m.as_str()),
            minor: caps.get(4).map_or("", |m| m.as_str()),
        };
    }

    if let Some(caps) = status_line().captures(line) {
        return FirstLineShape::StatusLine {
            major: caps.get(1).map_or("", |m| m.as_str()),
            minor: caps.get(2).map_or("", |m| m.as_str()),
            code: caps.get(3).map_or("", |m| m.as_str()),
            phrase: caps.get(4).map_or("", |m| m.as_str()),
        };
    }

    if let Some(caps) = unknown_request_line().captures(line) {
        return FirstLineShape::UnknownMethod(caps.get(1).map_or("", |m| m.as_str()));
    }

    FirstLineShape::Invalid
}

fn request_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let methods = KNOWN_METHODS
            .iter()
            .map(Method::as_str)
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"^({methods}) (\S+) HTTP/([0-9]+)\.([0-9]+)$");
        Regex::new(&pattern).expect("request line pattern")
    })
}

fn status_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(STATUS_LINE).expect("status line pattern"))
}

fn unknown_request_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(UNKNOWN_REQUEST_LINE).expect("unknown request line pattern"))
}

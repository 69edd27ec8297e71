//! Incremental HTTP/1.x message parsing and rendering, with no I/O of its own.
//!
//! ```
//! use http1_message::message_parser::MessageParser;
//!
//! let mut p = MessageParser::new();
//! p.feed(b"HTTP/1.1 200 OK\r\nContent-Le").unwrap();
//! p.feed(b"ngth: 2\r\n\r\nhi").unwrap();
//!
//! assert!(p.is_done());
//! assert_eq!(p.message().body(), b"hi");
//! ```

pub mod body_framing;
pub mod body_parser;
pub mod chunked_body_parser;
pub mod content_length_body_parser;
pub mod first_line_parser;
pub mod header_fields;
pub mod header_parser;
pub mod line_grammar;
pub mod message;
pub mod message_callbacks;
pub mod message_parser;
pub mod message_renderer;
pub mod ordinal_state;
pub mod parse_config;
pub mod parse_error;
pub mod request_target;
pub mod stream_buffer;

mod log;

pub use http;

pub use message::{HttpVersion, Message, MessageKind, MessageState};
pub use message_callbacks::MessageCallbacks;
pub use message_parser::MessageParser;
pub use parse_config::ParseConfig;
pub use parse_error::ParseError;

//
//
//
pub const SP: u8 = b' ';
pub const COLON: u8 = b':';
pub const CR: u8 = b'\r';
pub const LF: u8 = b'\n';
pub const CRLF: &[u8] = b"\r\n";

pub const CHUNKED: &str = "chunked";

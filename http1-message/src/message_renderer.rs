use std::io;

use http::header::{CONTENT_LENGTH, TRANSFER_ENCODING};

use crate::{
    header_fields::KNOWN_HEADERS,
    message::{Message, MessageKind},
    COLON, CRLF, SP,
};

//
//
//
/// Renders a [`Message`] in canonical wire form.
///
/// A non-empty body is always framed by content-length, never chunked, and is
/// followed by a blank line.
#[derive(Default)]
pub struct MessageRenderer {}

impl MessageRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, message: &Message, buf: &mut Vec<u8>) -> io::Result<()> {
        let first_line = match message.kind() {
            Some(MessageKind::Request) => message.request_line(),
            Some(MessageKind::Response) => message.status_line(),
            None => None,
        }
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "first line not parsed"))?;

        buf.extend_from_slice(first_line.as_bytes());
        buf.extend_from_slice(CRLF);

        let body = message.body();
        let content_length = body.len().to_string();
        for name in KNOWN_HEADERS.iter() {
            let value = if body.is_empty() {
                message.headers().get(name.as_str())
            } else if *name == CONTENT_LENGTH {
                Some(content_length.as_str())
            } else if *name == TRANSFER_ENCODING {
                None
            } else {
                message.headers().get(name.as_str())
            };

            if let Some(value) = value {
                buf.extend_from_slice(name.as_str().as_bytes());
                buf.extend_from_slice(&[COLON, SP]);
                buf.extend_from_slice(value.as_bytes());
                buf.extend_from_slice(CRLF);
            }
        }

        buf.extend_from_slice(CRLF);

        if !body.is_empty() {
            buf.extend_from_slice(body);
            buf.extend_from_slice(CRLF);
            buf.extend_from_slice(CRLF);
        }

        Ok(())
    }
}

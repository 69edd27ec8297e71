use crate::{
    body_parser::{BodyParseOutput, BodyParser},
    parse_error::ParseError,
    stream_buffer::{PayloadEnd, StreamBuffer},
};

//
//
//
#[derive(Debug, Default)]
pub struct ContentLengthBodyParser {
    length: usize,
}
impl ContentLengthBodyParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_length(&mut self, length: usize) {
        self.length = length
    }
    pub fn get_length(&self) -> usize {
        self.length
    }
}

//
//
//
impl BodyParser for ContentLengthBodyParser {
    fn parse(
        &mut self,
        buf: &mut StreamBuffer,
        body_buf: &mut Vec<u8>,
        on_chunk: &mut dyn FnMut(&[u8]),
    ) -> Result<BodyParseOutput, ParseError> {
        match buf.next_fixed_payload(self.length, PayloadEnd::Bare)? {
            Some(payload) => {
                *body_buf = payload;
                if !body_buf.is_empty() {
                    on_chunk(&body_buf[..]);
                }
                Ok(BodyParseOutput::Completed(body_buf.len()))
            }
            None => Ok(BodyParseOutput::Partial(0)),
        }
    }
}

use crate::{parse_error::ParseError, stream_buffer::StreamBuffer};

//
//
//
/// Number of bytes appended to the body by one `parse` call.
#[derive(Debug, PartialEq, Eq)]
pub enum BodyParseOutput {
    Completed(usize),
    Partial(usize),
}

//
//
//
pub trait BodyParser {
    /// Takes whatever complete body units `buf` holds, writing them to `body_buf`.
    ///
    /// `on_chunk` sees each unit as it is added. Incomplete units stay in `buf`.
    fn parse(
        &mut self,
        buf: &mut StreamBuffer,
        body_buf: &mut Vec<u8>,
        on_chunk: &mut dyn FnMut(&[u8]),
    ) -> Result<BodyParseOutput, ParseError>;
}

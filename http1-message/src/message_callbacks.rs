use crate::message::Message;

/// Observer of parse milestones. Every hook is optional.
///
/// Errors are never reported here; they are returned from
/// [`MessageParser::feed`](crate::message_parser::MessageParser::feed).
pub trait MessageCallbacks {
    /// Called before the first line is classified.
    fn on_message_begin(&mut self, _message: &Message) {}

    fn on_first_line_parsed(&mut self, _message: &Message) {}

    fn on_headers_complete(&mut self, _message: &Message) {}

    /// Called with the whole body for content-length framing, with each chunk for chunked.
    fn on_body_chunk(&mut self, _chunk: &[u8]) {}

    fn on_message_complete(&mut self, _message: &Message) {}
}

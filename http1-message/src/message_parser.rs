use crate::{
    body_framing::{BodyFraming, BodyFramingDetector as _},
    body_parser::{BodyParseOutput, BodyParser as _},
    chunked_body_parser::ChunkedBodyParser,
    content_length_body_parser::ContentLengthBodyParser,
    first_line_parser::{parse_first_line, FirstLine},
    header_parser::HeaderParser,
    log::{debug, trace, warning},
    message::{Message, MessageState},
    message_callbacks::MessageCallbacks,
    parse_config::ParseConfig,
    parse_error::ParseError,
    stream_buffer::StreamBuffer,
};

//
//
//
/// Incremental parser for exactly one HTTP/1.x message.
///
/// Bytes go in through [`feed`](Self::feed) in whatever pieces the transport delivers;
/// the [`Message`] is filled in as far as the bytes seen so far allow.
pub struct MessageParser {
    message: Message,
    config: ParseConfig,
    //
    buf: StreamBuffer,
    header_parser: HeaderParser,
    body_framing: BodyFraming,
    content_length_body_parser: ContentLengthBodyParser,
    chunked_body_parser: ChunkedBodyParser,
    //
    callbacks: Option<Box<dyn MessageCallbacks>>,
    poisoned: bool,
}

impl Default for MessageParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageParser {
    pub fn new() -> Self {
        Self::with_config(ParseConfig::default())
    }

    pub fn with_config(config: ParseConfig) -> Self {
        Self {
            message: Message::new(),
            buf: StreamBuffer::with_capacity(config.get_line_max_len(), config.buf_capacity()),
            header_parser: HeaderParser::new(config.get_headers_max_len()),
            body_framing: BodyFraming::Neither,
            content_length_body_parser: ContentLengthBodyParser::new(),
            chunked_body_parser: ChunkedBodyParser::with_body_max_len(config.get_body_max_len()),
            config,
            callbacks: None,
            poisoned: false,
        }
    }

    pub fn with_callbacks(mut self, callbacks: impl MessageCallbacks + 'static) -> Self {
        self.set_callbacks(callbacks);
        self
    }

    pub fn set_callbacks(&mut self, callbacks: impl MessageCallbacks + 'static) {
        self.callbacks = Some(Box::new(callbacks));
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn into_message(self) -> Message {
        self.message
    }

    pub fn state(&self) -> MessageState {
        self.message.state()
    }

    pub fn is_headers_complete(&self) -> bool {
        self.message.is_headers_complete()
    }

    pub fn is_done(&self) -> bool {
        self.message.is_done()
    }

    /// Appends `bytes` and parses as far as they allow.
    ///
    /// Running out of input is not an error. Any error leaves the parser unusable.
    /// Bytes following the end of the message are left unparsed.
    pub fn feed(&mut self, bytes: &[u8]) -> Result<(), ParseError> {
        if self.poisoned {
            return Err(ParseError::Poisoned);
        }
        if self.message.is_done() {
            return Err(ParseError::AlreadyComplete);
        }

        self.buf.feed_bytes(bytes);
        self.drive().map_err(|err| {
            warning!("parse failed in {:?}: {}", self.message.state(), err);
            self.poisoned = true;
            err
        })
    }

    fn drive(&mut self) -> Result<(), ParseError> {
        loop {
            match self.message.state() {
                MessageState::AwaitingFirstLine => match self.buf.next_line()? {
                    Some(line) => self.parse_first_line(&line)?,
                    None => return Ok(()),
                },
                MessageState::Headers => match self.buf.next_line()? {
                    Some(line) => self.parse_header(&line)?,
                    None => return Ok(()),
                },
                MessageState::Body => match self.parse_body()? {
                    BodyParseOutput::Completed(_) => self.complete(),
                    BodyParseOutput::Partial(_) => return Ok(()),
                },
                MessageState::Done => return Ok(()),
            }
        }
    }

    fn parse_first_line(&mut self, line: &[u8]) -> Result<(), ParseError> {
        if let Some(callbacks) = self.callbacks.as_mut() {
            callbacks.on_message_begin(&self.message);
        }

        match parse_first_line(line)? {
            FirstLine::Request {
                method,
                target,
                http_version,
            } => {
                debug!("request line: {} {} {}", method, target, http_version);
                self.message.set_request_line(method, target, http_version);
            }
            FirstLine::Status {
                http_version,
                status_code,
                status_phrase,
            } => {
                debug!("status line: {} {} {}", http_version, status_code, status_phrase);
                self.message
                    .set_status_line(http_version, status_code, status_phrase);
            }
        }
        self.message.state_mut().advance();

        if let Some(callbacks) = self.callbacks.as_mut() {
            callbacks.on_first_line_parsed(&self.message);
        }
        Ok(())
    }

    fn parse_header(&mut self, line: &[u8]) -> Result<(), ParseError> {
        if !self.header_parser.parse(line, self.message.headers_mut())? {
            return Ok(());
        }

        let body_framing = self.message.headers().detect()?;
        if let BodyFraming::ContentLength(length) = body_framing {
            if length > self.config.get_body_max_len() {
                return Err(ParseError::TooLongBody);
            }
            self.content_length_body_parser.set_length(length);
        }
        self.body_framing = body_framing;
        debug!(
            "headers complete: {} fields, {:?}",
            self.message.headers().len(),
            body_framing
        );

        self.message.state_mut().advance();
        if let Some(callbacks) = self.callbacks.as_mut() {
            callbacks.on_headers_complete(&self.message);
        }

        if body_framing == BodyFraming::Neither {
            self.complete();
        }
        Ok(())
    }

    fn parse_body(&mut self) -> Result<BodyParseOutput, ParseError> {
        let callbacks = &mut self.callbacks;
        let mut on_chunk = |chunk: &[u8]| {
            trace!("body chunk of {} bytes", chunk.len());
            if let Some(callbacks) = callbacks.as_mut() {
                callbacks.on_body_chunk(chunk);
            }
        };

        match self.body_framing {
            BodyFraming::ContentLength(_) => self.content_length_body_parser.parse(
                &mut self.buf,
                self.message.body_mut(),
                &mut on_chunk,
            ),
            BodyFraming::Chunked => self.chunked_body_parser.parse(
                &mut self.buf,
                self.message.body_mut(),
                &mut on_chunk,
            ),
            BodyFraming::Neither => Ok(BodyParseOutput::Completed(0)),
        }
    }

    fn complete(&mut self) {
        self.message.state_mut().set(MessageState::Done);
        debug!("message complete, {} body bytes", self.message.body().len());

        if let Some(callbacks) = self.callbacks.as_mut() {
            callbacks.on_message_complete(&self.message);
        }
    }
}

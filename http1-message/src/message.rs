use std::{fmt, io};

use http::{header, Method, StatusCode, Version};

use crate::{
    header_fields::HeaderFields,
    message_renderer::MessageRenderer,
    ordinal_state::{Ordinal, OrdinalState},
    request_target::RequestTarget,
};

//
//
//
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MessageState {
    AwaitingFirstLine,
    Headers,
    Body,
    Done,
}
impl Ordinal for MessageState {
    const INITIAL: Self = Self::AwaitingFirstLine;

    fn successor(self) -> Self {
        match self {
            Self::AwaitingFirstLine => Self::Headers,
            Self::Headers => Self::Body,
            Self::Body | Self::Done => Self::Done,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Request,
    Response,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpVersion {
    pub major: u16,
    pub minor: u16,
}
impl HttpVersion {
    pub const HTTP_10: Self = Self::new(1, 0);
    pub const HTTP_11: Self = Self::new(1, 1);

    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    pub fn to_version(&self) -> Option<Version> {
        match (self.major, self.minor) {
            (0, 9) => Some(Version::HTTP_09),
            (1, 0) => Some(Version::HTTP_10),
            (1, 1) => Some(Version::HTTP_11),
            _ => None,
        }
    }
}
impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP/{}.{}", self.major, self.minor)
    }
}

//
//
//
/// One HTTP/1.x request or response.
///
/// Filled in by [`MessageParser`](crate::message_parser::MessageParser) as input arrives,
/// or built directly with [`Message::new_request`] / [`Message::new_response`] for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    kind: Option<MessageKind>,
    state: OrdinalState<MessageState>,
    http_version: Option<HttpVersion>,
    // req
    method: Option<Method>,
    target: Option<RequestTarget>,
    // res
    status_code: Option<StatusCode>,
    status_phrase: Option<String>,
    //
    headers: HeaderFields,
    body: Vec<u8>,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_request(method: Method, target: RequestTarget, http_version: HttpVersion) -> Self {
        let mut message = Self::new();
        message.set_request_line(method, target, http_version);
        message.state.set(MessageState::Done);
        message
    }

    pub fn new_response(
        http_version: HttpVersion,
        status_code: StatusCode,
        status_phrase: impl Into<String>,
    ) -> Self {
        let mut message = Self::new();
        message.set_status_line(http_version, status_code, status_phrase.into());
        message.state.set(MessageState::Done);
        message
    }

    pub fn kind(&self) -> Option<MessageKind> {
        self.kind
    }
    pub fn is_request(&self) -> bool {
        self.kind == Some(MessageKind::Request)
    }
    pub fn is_response(&self) -> bool {
        self.kind == Some(MessageKind::Response)
    }

    pub fn state(&self) -> MessageState {
        self.state.current()
    }
    pub fn is_headers_complete(&self) -> bool {
        self.state > MessageState::Headers
    }
    pub fn is_done(&self) -> bool {
        self.state >= MessageState::Done
    }

    pub fn http_version(&self) -> Option<HttpVersion> {
        self.http_version
    }
    pub fn major_http_version(&self) -> Option<u16> {
        self.http_version.map(|v| v.major)
    }
    pub fn minor_http_version(&self) -> Option<u16> {
        self.http_version.map(|v| v.minor)
    }

    pub fn method(&self) -> Option<&Method> {
        self.method.as_ref()
    }
    pub fn target(&self) -> Option<&RequestTarget> {
        self.target.as_ref()
    }
    pub fn request_url(&self) -> Option<String> {
        self.target.as_ref().map(ToString::to_string)
    }

    pub fn status_code(&self) -> Option<StatusCode> {
        self.status_code
    }
    pub fn status_phrase(&self) -> Option<&str> {
        self.status_phrase.as_deref()
    }

    pub fn headers(&self) -> &HeaderFields {
        &self.headers
    }
    pub fn headers_mut(&mut self) -> &mut HeaderFields {
        &mut self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body[..]
    }
    pub fn set_body(&mut self, body: impl Into<Vec<u8>>) {
        self.body = body.into();
    }

    pub fn request_line(&self) -> Option<String> {
        match (&self.kind, &self.method, &self.target, &self.http_version) {
            (Some(MessageKind::Request), Some(method), Some(target), Some(version)) => {
                Some(format!("{} {} {}", method, target, version))
            }
            _ => None,
        }
    }

    pub fn status_line(&self) -> Option<String> {
        match (&self.kind, &self.status_code, &self.http_version) {
            (Some(MessageKind::Response), Some(status_code), Some(version)) => Some(format!(
                "{} {} {}",
                version,
                status_code.as_str(),
                self.status_phrase().unwrap_or_default()
            )),
            _ => None,
        }
    }

    /// Sets content-length from the body and drops transfer-encoding, unless the body is empty.
    pub fn update_content_length(&mut self) {
        if !self.body.is_empty() {
            self.headers
                .insert(header::CONTENT_LENGTH.as_str(), self.body.len().to_string());
            self.headers.remove(header::TRANSFER_ENCODING.as_str());
        }
    }

    pub fn to_wire_bytes(&self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.body.len() + 256);
        MessageRenderer::new().render(self, &mut buf)?;
        Ok(buf)
    }

    //
    // parser side
    //
    pub(crate) fn set_request_line(
        &mut self,
        method: Method,
        target: RequestTarget,
        http_version: HttpVersion,
    ) {
        self.kind = Some(MessageKind::Request);
        self.method = Some(method);
        self.target = Some(target);
        self.http_version = Some(http_version);
    }

    pub(crate) fn set_status_line(
        &mut self,
        http_version: HttpVersion,
        status_code: StatusCode,
        status_phrase: String,
    ) {
        self.kind = Some(MessageKind::Response);
        self.http_version = Some(http_version);
        self.status_code = Some(status_code);
        self.status_phrase = Some(status_phrase);
    }

    pub(crate) fn state_mut(&mut self) -> &mut OrdinalState<MessageState> {
        &mut self.state
    }

    pub(crate) fn body_mut(&mut self) -> &mut Vec<u8> {
        &mut self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_message() {
        let message = Message::new();
        assert_eq!(message.kind(), None);
        assert!(!message.is_request());
        assert!(!message.is_response());
        assert_eq!(message.state(), MessageState::AwaitingFirstLine);
        assert_eq!(message.http_version(), None);
        assert_eq!(message.major_http_version(), None);
        assert_eq!(message.minor_http_version(), None);
        assert_eq!(message.request_line(), None);
        assert_eq!(message.status_line(), None);
        assert_eq!(message.request_url(), None);
        assert!(message.headers().is_empty());
        assert!(message.body().is_empty());
        assert!(!message.is_headers_complete());
        assert!(!message.is_done());
    }

    #[test]
    fn update_content_length() {
        let mut message = Message::new_response(HttpVersion::HTTP_11, StatusCode::OK, "OK");
        message.headers_mut().insert("Transfer-Encoding", "chunked");

        message.update_content_length();
        assert_eq!(message.headers().get("transfer-encoding"), Some("chunked"));

        message.set_body("abc");
        message.update_content_length();
        assert_eq!(message.headers().get("content-length"), Some("3"));
        assert!(!message.headers().contains("transfer-encoding"));
    }

    #[test]
    fn first_lines() {
        let message = Message::new_request(
            Method::GET,
            RequestTarget::parse("/a?b=c").unwrap(),
            HttpVersion::HTTP_10,
        );
        assert_eq!(message.request_line().as_deref(), Some("GET /a?b=c HTTP/1.0"));
        assert_eq!(message.status_line(), None);

        let message =
            Message::new_response(HttpVersion::HTTP_11, StatusCode::NOT_FOUND, "Not Found");
        assert_eq!(message.status_line().as_deref(), Some("HTTP/1.1 404 Not Found"));
        assert_eq!(message.request_line(), None);
        assert_eq!(HttpVersion::HTTP_11.to_version(), Some(Version::HTTP_11));
    }
}

use std::{fmt, str::FromStr};

use http::{uri::InvalidUri, Uri};

//
//
//
/// The request-target of a request line, decomposed into the parts callers look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    uri: Uri,
}

impl RequestTarget {
    pub fn parse(s: &str) -> Result<Self, InvalidUri> {
        s.parse()
    }

    pub fn scheme(&self) -> Option<&str> {
        self.uri.scheme_str()
    }

    pub fn host(&self) -> Option<&str> {
        self.uri.host()
    }

    pub fn port(&self) -> Option<u16> {
        self.uri.port_u16()
    }

    pub fn path(&self) -> &str {
        self.uri.path()
    }

    pub fn query(&self) -> Option<&str> {
        self.uri.query()
    }

    pub fn as_uri(&self) -> &Uri {
        &self.uri
    }
}

impl FromStr for RequestTarget {
    type Err = InvalidUri;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self { uri: s.parse()? })
    }
}

impl From<Uri> for RequestTarget {
    fn from(uri: Uri) -> Self {
        Self { uri }
    }
}

impl fmt::Display for RequestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.uri, f)
    }
}

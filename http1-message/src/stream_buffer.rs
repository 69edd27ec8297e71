use crate::{log::trace, parse_error::ParseError, CR, CRLF};

//
//
//
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadEnd {
    /// Payload is delimited by its length alone.
    Bare,
    /// Payload must be followed by CRLF, consumed together with it.
    Crlf,
}
impl PayloadEnd {
    fn len(&self) -> usize {
        match self {
            Self::Bare => 0,
            Self::Crlf => CRLF.len(),
        }
    }
}

/// Bytes fed so far that do not yet form a complete line or payload.
#[derive(Debug, Clone)]
pub struct StreamBuffer {
    pending: Vec<u8>,
    // bytes of `pending` already known to hold no CRLF
    searched: usize,
    line_max_len: usize,
}

impl StreamBuffer {
    pub fn new(line_max_len: usize) -> Self {
        Self::with_capacity(line_max_len, 0)
    }

    pub fn with_capacity(line_max_len: usize, capacity: usize) -> Self {
        Self {
            pending: Vec::with_capacity(capacity),
            searched: 0,
            line_max_len,
        }
    }

    pub fn feed_bytes(&mut self, bytes: &[u8]) {
        trace!("buffer +{} bytes, {} pending", bytes.len(), self.pending.len());
        self.pending.extend_from_slice(bytes);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending(&self) -> &[u8] {
        &self.pending[..]
    }

    /// Takes the next CRLF-terminated line, without its terminator.
    ///
    /// Returns `Ok(None)` and keeps everything buffered while no CRLF has arrived.
    pub fn next_line(&mut self) -> Result<Option<Vec<u8>>, ParseError> {
        let start = self.searched;
        match self.pending[start..]
            .windows(CRLF.len())
            .position(|w| w == CRLF)
        {
            Some(i) => {
                let line_len = start + i;
                if line_len > self.line_max_len {
                    return Err(ParseError::TooLongLine);
                }
                let line = self.pending[..line_len].to_vec();
                self.consume(line_len + CRLF.len());
                Ok(Some(line))
            }
            None => {
                // a trailing CR may still be completed by the next feed
                self.searched = match self.pending.last() {
                    Some(&CR) => self.pending.len() - 1,
                    _ => self.pending.len(),
                };
                if self.searched > self.line_max_len {
                    return Err(ParseError::TooLongLine);
                }
                Ok(None)
            }
        }
    }

    /// Takes exactly `n` bytes once they (and the `end` delimiter) have all arrived.
    pub fn next_fixed_payload(
        &mut self,
        n: usize,
        end: PayloadEnd,
    ) -> Result<Option<Vec<u8>>, ParseError> {
        let needed = n.checked_add(end.len()).ok_or(ParseError::TooLongBody)?;
        if self.pending.len() < needed {
            if end == PayloadEnd::Crlf && self.pending.len() > n && self.pending[n] != CR {
                return Err(ParseError::InvalidCRLF);
            }
            return Ok(None);
        }
        if end == PayloadEnd::Crlf && &self.pending[n..needed] != CRLF {
            return Err(ParseError::InvalidCRLF);
        }

        let payload = self.pending[..n].to_vec();
        self.consume(needed);
        Ok(Some(payload))
    }

    fn consume(&mut self, n: usize) {
        self.pending.drain(..n);
        self.searched = 0;
    }
}

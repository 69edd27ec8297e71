//
//
//
const LINE_MAX_LEN: usize = 8192;
const HEADERS_MAX_LEN: usize = 64 * 1024;

//
//
//
#[derive(Debug, Clone)]
pub struct ParseConfig {
    line_max_len: usize,
    headers_max_len: usize,
    body_max_len: usize,
}
impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig {
            line_max_len: LINE_MAX_LEN,
            headers_max_len: HEADERS_MAX_LEN,
            body_max_len: usize::MAX,
        }
    }
}
impl ParseConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn buf_capacity(&self) -> usize {
        self.get_line_max_len()
    }

    /// Applies to the first line, each header line and each chunk-size line.
    pub fn set_line_max_len(&mut self, value: usize) -> &mut Self {
        self.line_max_len = value;
        self
    }
    pub fn get_line_max_len(&self) -> usize {
        self.line_max_len
    }
    pub fn set_headers_max_len(&mut self, value: usize) -> &mut Self {
        self.headers_max_len = value;
        self
    }
    pub fn get_headers_max_len(&self) -> usize {
        self.headers_max_len
    }
    pub fn set_body_max_len(&mut self, value: usize) -> &mut Self {
        self.body_max_len = value;
        self
    }
    pub fn get_body_max_len(&self) -> usize {
        self.body_max_len
    }
}

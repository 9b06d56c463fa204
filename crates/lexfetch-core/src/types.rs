/// Uniform failure text. The 510 classification compares against this
/// exact string, misspelling included, so it must never change.
pub const GENERIC_ERROR: &str = "An error has occured.";

/// Synthetic status meaning "no usable definition". Not a real HTTP code;
/// downstream only distinguishes 200 from everything else.
pub const STATUS_NO_DEFINITION: u16 = 510;

/// Outcome of resolving one word: 200 plus the definition text, or 510
/// plus [`GENERIC_ERROR`]. No other shape is ever produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub status: u16,
    pub text: String,
}

impl Lookup {
    pub fn is_resolved(&self) -> bool {
        self.status == 200
    }
}

/// Raw reply from one API call.
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub status: u16,
    pub body: String,
}

impl ApiReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Stand-in for a call that never produced an HTTP response (DNS,
    /// connect, body read). Status 0 takes the same path as any non-200.
    pub fn unreachable() -> Self {
        Self {
            status: 0,
            body: String::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

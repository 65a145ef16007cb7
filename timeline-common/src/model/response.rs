use serde::{Deserialize, Serialize};

pub const OK_CODE: u16 = 200;

/// Envelope wrapped around every HTTP reply body.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    #[serde(rename = "contenu")]
    pub content: T,
    /// HTTP status code of the reply.
    pub code: u16,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    #[must_use]
    pub fn ok(content: T) -> Self {
        Self {
            content,
            code: OK_CODE,
            message: None,
        }
    }
}

impl ApiResponse<()> {
    #[must_use]
    pub fn error(code: u16, message: Option<String>) -> Self {
        Self {
            content: (),
            code,
            message,
        }
    }
}

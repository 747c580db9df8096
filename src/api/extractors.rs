use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::api::errors::ApiError;

/// Student id taken from the `:id` path segment
///
/// The segment is read leniently: surrounding whitespace and a sign are
/// allowed and only the leading digits count, so `12abc` means 12. A segment
/// without leading digits is kept as `None`; it matches no student.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(student_id: StudentId) -> Result<String, ApiError> {
///     let id = student_id.value.ok_or_else(|| ApiError::student_not_found(&student_id.raw))?;
///     Ok(format!("student {}", id))
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentId {
    /// Segment as received, echoed back in messages
    pub raw: String,
    pub value: Option<u64>,
}

impl StudentId {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = leading_integer(&raw);
        Self { raw, value }
    }
}

fn leading_integer(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = unsigned.bytes().take_while(|b| b.is_ascii_digit()).count();
    let value: u64 = unsigned[..digits].parse().ok()?;

    // -0 is still zero
    if negative && value != 0 {
        None
    } else {
        Some(value)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for StudentId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        Ok(Self::parse(raw))
    }
}

//! Client error types.
//!
//! [`GenericLraError`] is the signal raised when an LRA client call fails.
//! [`ClientError`] is the wider web-application category it belongs to:
//! handlers that only care about status and message match on the category,
//! handlers that need the LRA locator match on [`ClientError::Lra`].

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::lra_id::LraId;

/// Underlying failure attached to a client error.
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

fn http_status(status_code: i32) -> Option<u16> {
    u16::try_from(status_code)
        .ok()
        .filter(|code| (100..=999).contains(code))
}

fn is_client_error(status_code: i32) -> bool {
    (400..=499).contains(&status_code)
}

fn is_server_error(status_code: i32) -> bool {
    (500..=599).contains(&status_code)
}

fn as_source(cause: Option<&Cause>) -> Option<&(dyn Error + 'static)> {
    cause.map(|cause| &**cause as &(dyn Error + 'static))
}

/// A failed LRA client operation.
///
/// The message is rendered once, at construction, as `"<lra_id>: <message>"`
/// where a missing locator renders as `null`. No field is validated.
#[derive(Debug, Clone)]
pub struct GenericLraError {
    lra_id: Option<LraId>,
    status_code: i32,
    message: String,
    cause: Option<Cause>,
}

impl GenericLraError {
    /// Creates a new LRA error signal.
    #[must_use]
    pub fn new(
        lra_id: Option<LraId>,
        status_code: i32,
        message: impl Into<String>,
        cause: Option<Cause>,
    ) -> Self {
        let message = message.into();
        let message = match &lra_id {
            Some(id) => format!("{id}: {message}"),
            None => format!("null: {message}"),
        };

        Self {
            lra_id,
            status_code,
            message,
            cause,
        }
    }

    /// The LRA this failure relates to, if one had been established.
    #[must_use]
    pub fn lra_id(&self) -> Option<&LraId> {
        self.lra_id.as_ref()
    }

    /// The HTTP-style status code, exactly as supplied.
    #[must_use]
    pub fn status_code(&self) -> i32 {
        self.status_code
    }

    /// The rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying failure, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// The status code as an HTTP status, when it lies in `100..=999`.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        http_status(self.status_code)
    }

    /// Whether the status code is in the 4xx range.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        is_client_error(self.status_code)
    }

    /// Whether the status code is in the 5xx range.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        is_server_error(self.status_code)
    }
}

impl fmt::Display for GenericLraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for GenericLraError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        as_source(self.cause.as_ref())
    }
}

/// A web-application failure that carries no LRA context.
#[derive(Debug, Clone)]
pub struct WebApplicationError {
    status_code: i32,
    message: String,
    cause: Option<Cause>,
}

impl WebApplicationError {
    /// Creates a new web-application error. The message is used verbatim.
    #[must_use]
    pub fn new(status_code: i32, message: impl Into<String>, cause: Option<Cause>) -> Self {
        Self {
            status_code,
            message: message.into(),
            cause,
        }
    }

    /// The HTTP-style status code, exactly as supplied.
    #[must_use]
    pub fn status_code(&self) -> i32 {
        self.status_code
    }

    /// The message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying failure, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// The status code as an HTTP status, when it lies in `100..=999`.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        http_status(self.status_code)
    }

    /// Whether the status code is in the 4xx range.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        is_client_error(self.status_code)
    }

    /// Whether the status code is in the 5xx range.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        is_server_error(self.status_code)
    }
}

impl fmt::Display for WebApplicationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for WebApplicationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        as_source(self.cause.as_ref())
    }
}

/// Any error an LRA client surfaces to its caller.
#[derive(Debug, Clone)]
pub enum ClientError {
    /// A failure tied to an LRA, possibly before one was established.
    Lra(GenericLraError),
    /// A generic web-application failure.
    WebApplication(WebApplicationError),
}

impl ClientError {
    /// The HTTP-style status code.
    #[must_use]
    pub fn status_code(&self) -> i32 {
        match self {
            Self::Lra(err) => err.status_code(),
            Self::WebApplication(err) => err.status_code(),
        }
    }

    /// The rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Lra(err) => err.message(),
            Self::WebApplication(err) => err.message(),
        }
    }

    /// The underlying failure, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&Cause> {
        match self {
            Self::Lra(err) => err.cause(),
            Self::WebApplication(err) => err.cause(),
        }
    }

    /// The LRA locator. Always `None` for generic web-application failures.
    #[must_use]
    pub fn lra_id(&self) -> Option<&LraId> {
        self.as_lra().and_then(GenericLraError::lra_id)
    }

    /// Returns the LRA error signal if this is one.
    #[must_use]
    pub fn as_lra(&self) -> Option<&GenericLraError> {
        match self {
            Self::Lra(err) => Some(err),
            Self::WebApplication(_) => None,
        }
    }

    /// The status code as an HTTP status, when it lies in `100..=999`.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        http_status(self.status_code())
    }

    /// Whether the status code is in the 4xx range.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        is_client_error(self.status_code())
    }

    /// Whether the status code is in the 5xx range.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        is_server_error(self.status_code())
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        as_source(self.cause())
    }
}

impl From<GenericLraError> for ClientError {
    fn from(err: GenericLraError) -> Self {
        Self::Lra(err)
    }
}

impl From<WebApplicationError> for ClientError {
    fn from(err: WebApplicationError) -> Self {
        Self::WebApplication(err)
    }
}

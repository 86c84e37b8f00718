//! Application Error
//!
//! [`AppError`] is what value objects return and what every domain error
//! collapses into at the HTTP boundary.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

type Message = Cow<'static, str>;
type BoxedSource = Box<dyn Error + Send + Sync + 'static>;

/// アプリケーション共通エラー
///
/// `message` と `action` は利用者に見せてよい文言、`source` はログ専用。
///
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::bad_request("Name cannot be empty").with_action("Please enter a name");
/// assert_eq!(err.kind(), ErrorKind::BadRequest);
/// assert_eq!(err.action(), Some("Please enter a name"));
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Message,
    action: Option<Message>,
    source: Option<BoxedSource>,
}

pub type AppResult<T> = Result<T, AppError>;

macro_rules! kind_constructors {
    ($($name:ident => $kind:ident),+ $(,)?) => {
        $(
            #[doc = concat!("Shorthand for `AppError::new(ErrorKind::", stringify!($kind), ", ..)`")]
            pub fn $name(message: impl Into<Message>) -> Self {
                Self::new(ErrorKind::$kind, message)
            }
        )+
    };
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Message>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            source: None,
        }
    }

    kind_constructors! {
        bad_request => BadRequest,
        internal => InternalServerError,
    }

    /// 利用者が次に取るべき行動
    pub fn with_action(self, action: impl Into<Message>) -> Self {
        Self {
            action: Some(action.into()),
            ..self
        }
    }

    /// 原因エラーを添付（レスポンスには出ない）
    pub fn with_source(self, source: impl Error + Send + Sync + 'static) -> Self {
        Self {
            source: Some(Box::new(source)),
            ..self
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }

    pub fn is_client_error(&self) -> bool {
        self.kind.is_client_error()
    }

    /// Detail safe to put in a response body
    ///
    /// Server-side kinds only ever expose their reason phrase.
    pub fn public_detail(&self) -> &str {
        match self.kind.is_server_error() {
            true => self.kind.as_str(),
            false => &self.message,
        }
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("action", &self.action)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.action {
            Some(action) => write!(f, "[{}] {} (Action: {action})", self.kind, self.message),
            None => write!(f, "[{}] {}", self.kind, self.message),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}

/// Wrap any error into an [`AppError`] of the given kind, keeping it as source
pub trait ResultExt<T> {
    fn map_app_err(self, kind: ErrorKind, message: impl Into<Message>) -> AppResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    fn map_app_err(self, kind: ErrorKind, message: impl Into<Message>) -> AppResult<T> {
        self.map_err(|e| AppError::new(kind, message).with_source(e))
    }
}

//! Error Kind - Classification of errors
//!
//! [`ErrorKind`] は HTTP 境界での分類です。各列挙子はステータスコードと
//! 理由フレーズを一対一で持ちます。

use serde::Serialize;

macro_rules! error_kinds {
    ($($(#[$doc:meta])* $variant:ident => ($code:literal, $phrase:literal),)+) => {
        /// エラー種別
        ///
        /// ```rust
        /// use kernel::error::kind::ErrorKind;
        ///
        /// assert_eq!(ErrorKind::Forbidden.status_code(), 403);
        /// assert_eq!(ErrorKind::Forbidden.to_string(), "Forbidden");
        /// ```
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        #[non_exhaustive]
        pub enum ErrorKind {
            $($(#[$doc])* $variant,)+
        }

        impl ErrorKind {
            /// 対応する HTTP ステータスコード
            pub const fn status_code(self) -> u16 {
                match self {
                    $(ErrorKind::$variant => $code,)+
                }
            }

            /// 標準の理由フレーズ
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(ErrorKind::$variant => $phrase,)+
                }
            }
        }
    };
}

error_kinds! {
    /// 入力値が不正
    BadRequest => (400, "Bad Request"),
    /// 認証情報またはセッションが無効
    Unauthorized => (401, "Unauthorized"),
    /// 認証済みだが権限がない
    Forbidden => (403, "Forbidden"),
    NotFound => (404, "Not Found"),
    /// クエリがキャンセルされた
    RequestTimeout => (408, "Request Timeout"),
    /// 一意制約・外部キー制約との衝突
    Conflict => (409, "Conflict"),
    InternalServerError => (500, "Internal Server Error"),
    /// DB 接続枯渇・停止中
    ServiceUnavailable => (503, "Service Unavailable"),
}

impl ErrorKind {
    /// 5xx: 詳細はログにのみ残し、呼び出し元には返さない
    pub const fn is_server_error(self) -> bool {
        self.status_code() >= 500
    }

    /// 4xx
    pub const fn is_client_error(self) -> bool {
        matches!(self.status_code(), 400..=499)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// エラー型定義
//
// アプリケーション全体で使用されるカスタムエラー型を提供します。
// thiserrorを使用して、RenderError, SchemaSourceError, IoError を定義します。

use thiserror::Error;

/// レンダリングエラー
///
/// ヘッダースキーマからサーバー固有の命令を生成する際に発生するエラーを表現します。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Unsupported server target
    #[error("Unsupported server: {name}. Please specify one of: APACHE_HTTP_SERVER, NGINX, IIS.")]
    UnsupportedTarget {
        /// 指定されたサーバー名
        name: String,
    },

    /// Unsupported header action
    #[error("Unsupported action: {name}. Please specify one of: ADD, REMOVE.")]
    UnsupportedAction {
        /// 指定されたアクション名
        name: String,
    },

    /// Malformed schema
    #[error("Malformed schema: {message}")]
    MalformedSchema {
        /// エラーメッセージ
        message: String,
    },
}

impl RenderError {
    /// 未対応サーバーエラーかどうか
    pub fn is_unsupported_target(&self) -> bool {
        matches!(self, RenderError::UnsupportedTarget { .. })
    }

    /// 未対応アクションエラーかどうか
    pub fn is_unsupported_action(&self) -> bool {
        matches!(self, RenderError::UnsupportedAction { .. })
    }

    /// スキーマ不正エラーかどうか
    pub fn is_malformed_schema(&self) -> bool {
        matches!(self, RenderError::MalformedSchema { .. })
    }

    /// スキーマ不正エラーを作成
    pub fn malformed(message: impl Into<String>) -> Self {
        RenderError::MalformedSchema {
            message: message.into(),
        }
    }
}

/// スキーマ取得エラー
///
/// ローカルまたはリモートからのスキーマ読み込み時に発生するエラーを表現します。
#[derive(Debug, Error)]
pub enum SchemaSourceError {
    /// Schema file not found
    #[error("Schema file not found: {location}")]
    FileNotFound {
        /// ファイルの場所
        location: String,
    },

    /// Schema file read error
    #[error("Failed to read schema file: {location} (cause: {cause})")]
    FileRead {
        /// ファイルの場所
        location: String,
        /// エラー原因
        cause: String,
    },

    /// Remote fetch error
    #[error("Failed to fetch schema: {location} (cause: {cause})")]
    Fetch {
        /// URL
        location: String,
        /// エラー原因
        cause: String,
    },

    /// Decode error
    #[error("Failed to decode schema: {location} (cause: {cause})")]
    Decode {
        /// ファイルの場所
        location: String,
        /// エラー原因
        cause: String,
    },
}

impl SchemaSourceError {
    /// ファイルが見つからないエラーかどうか
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, SchemaSourceError::FileNotFound { .. })
    }

    /// ファイル読み込みエラーかどうか
    pub fn is_file_read(&self) -> bool {
        matches!(self, SchemaSourceError::FileRead { .. })
    }

    /// リモート取得エラーかどうか
    pub fn is_fetch(&self) -> bool {
        matches!(self, SchemaSourceError::Fetch { .. })
    }

    /// デコードエラーかどうか
    pub fn is_decode(&self) -> bool {
        matches!(self, SchemaSourceError::Decode { .. })
    }
}

/// I/Oエラー
///
/// ファイル操作時に発生するエラーを表現します。
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found
    #[error("File not found: {path}")]
    FileNotFound {
        /// ファイルパス
        path: String,
    },

    /// File read error
    #[error("Failed to read file: {path} (cause: {cause})")]
    FileRead {
        /// ファイルパス
        path: String,
        /// エラー原因
        cause: String,
    },

    /// File write error
    #[error("Failed to write file: {path} (cause: {cause})")]
    FileWrite {
        /// ファイルパス
        path: String,
        /// エラー原因
        cause: String,
    },
}

impl IoError {
    /// ファイルが見つからないエラーかどうか
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, IoError::FileNotFound { .. })
    }

    /// ファイル読み込みエラーかどうか
    pub fn is_file_read(&self) -> bool {
        matches!(self, IoError::FileRead { .. })
    }

    /// ファイル書き込みエラーかどうか
    pub fn is_file_write(&self) -> bool {
        matches!(self, IoError::FileWrite { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_variants() {
        let target = RenderError::UnsupportedTarget {
            name: "LIGHTTPD".to_string(),
        };
        assert!(target.is_unsupported_target());
        assert!(!target.is_unsupported_action());
        assert!(target.to_string().contains("LIGHTTPD"));

        let action = RenderError::UnsupportedAction {
            name: "REPLACE".to_string(),
        };
        assert!(action.is_unsupported_action());
        assert!(action.to_string().contains("REPLACE"));

        let malformed = RenderError::malformed("entry #0 has an empty name");
        assert!(malformed.is_malformed_schema());
        assert_eq!(
            malformed.to_string(),
            "Malformed schema: entry #0 has an empty name"
        );
    }

    #[test]
    fn test_schema_source_error_variants() {
        let not_found = SchemaSourceError::FileNotFound {
            location: "/tmp/ci/headers_add.json".to_string(),
        };
        assert!(not_found.is_file_not_found());

        let fetch = SchemaSourceError::Fetch {
            location: "https://example.com/headers_add.json".to_string(),
            cause: "404 Not Found".to_string(),
        };
        assert!(fetch.is_fetch());
        assert!(fetch.to_string().contains("404 Not Found"));

        let decode = SchemaSourceError::Decode {
            location: "headers_add.json".to_string(),
            cause: "missing field `headers`".to_string(),
        };
        assert!(decode.is_decode());
        assert!(!decode.is_file_read());
    }

    #[test]
    fn test_io_error_variants() {
        let write_error = IoError::FileWrite {
            path: "/path/to/snippet.conf".to_string(),
            cause: "Disk full".to_string(),
        };
        assert!(write_error.is_file_write());
        assert!(!write_error.is_file_not_found());
    }
}

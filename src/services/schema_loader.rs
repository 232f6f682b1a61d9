// スキーマローダーサービス
//
// OSHPの参照JSONファイル（headers_add.json / headers_remove.json）を
// ローカルディレクトリまたはリモートURLから読み込み、HeaderSchemaへ変換します。

use crate::core::config::HeaderAction;
use crate::core::error::SchemaSourceError;
use crate::core::schema::{HeaderEntry, HeaderSchema};
use async_trait::async_trait;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// スキーマの取得元
#[async_trait]
pub trait SchemaSource: Send + Sync {
    /// 取得元の表示用文字列
    fn location(&self) -> String;

    /// 指定ファイルの内容を取得
    async fn fetch(&self, file_name: &str) -> Result<String, SchemaSourceError>;
}

/// ローカルディレクトリの取得元
#[derive(Debug, Clone)]
pub struct LocalSchemaSource {
    dir: PathBuf,
}

impl LocalSchemaSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl SchemaSource for LocalSchemaSource {
    fn location(&self) -> String {
        self.dir.display().to_string()
    }

    async fn fetch(&self, file_name: &str) -> Result<String, SchemaSourceError> {
        let path = self.dir.join(file_name);
        if !path.exists() {
            return Err(SchemaSourceError::FileNotFound {
                location: path.display().to_string(),
            });
        }

        fs::read_to_string(&path).map_err(|e| SchemaSourceError::FileRead {
            location: path.display().to_string(),
            cause: e.to_string(),
        })
    }
}

/// リモートURLの取得元
#[derive(Debug, Clone)]
pub struct RemoteSchemaSource {
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl RemoteSchemaSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
            timeout,
        }
    }

    /// ファイルのURLを組み立てる
    pub fn file_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), file_name)
    }
}

#[async_trait]
impl SchemaSource for RemoteSchemaSource {
    fn location(&self) -> String {
        self.base_url.clone()
    }

    async fn fetch(&self, file_name: &str) -> Result<String, SchemaSourceError> {
        let url = self.file_url(file_name);
        let fetch_error = |e: reqwest::Error| SchemaSourceError::Fetch {
            location: url.clone(),
            cause: e.to_string(),
        };

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(fetch_error)?
            .error_for_status()
            .map_err(fetch_error)?;

        response.text().await.map_err(fetch_error)
    }
}

/// ADDスキーマのJSON表現
#[derive(Debug, Deserialize)]
struct AddSchemaDocument {
    headers: Vec<HeaderEntry>,
}

/// REMOVEスキーマのJSON表現
#[derive(Debug, Deserialize)]
struct RemoveSchemaDocument {
    headers: Vec<String>,
}

/// スキーマローダーサービス
pub struct SchemaLoaderService {
    source: Box<dyn SchemaSource>,
}

impl SchemaLoaderService {
    /// 取得元の文字列から適切なローダーを作成
    ///
    /// `https:` で始まる場合はリモート、それ以外はローカルディレクトリとして扱います。
    pub fn from_location(location: &str, timeout: Duration) -> Self {
        let source: Box<dyn SchemaSource> = if is_remote(location) {
            Box::new(RemoteSchemaSource::new(location, timeout))
        } else {
            Box::new(LocalSchemaSource::new(location))
        };
        Self { source }
    }

    /// 任意の取得元からローダーを作成
    pub fn with_source(source: Box<dyn SchemaSource>) -> Self {
        Self { source }
    }

    /// 取得元の表示用文字列
    pub fn location(&self) -> String {
        self.source.location()
    }

    /// アクションに対応するスキーマを読み込む
    ///
    /// # Errors
    ///
    /// - ファイルが存在しない、または取得に失敗した場合
    /// - JSONの形がアクションに合わない場合
    pub async fn load(&self, action: HeaderAction) -> Result<HeaderSchema, SchemaSourceError> {
        let file_name = action.schema_file_name();
        debug!(location = %self.source.location(), file = %file_name, "Fetching schema");

        let content = self.source.fetch(&file_name).await?;
        let schema = parse_schema(action, &content, &file_name)?;

        debug!(headers = schema.len(), "Schema decoded");
        Ok(schema)
    }
}

/// 取得元がリモートかどうか
pub fn is_remote(location: &str) -> bool {
    location.starts_with("https:")
}

/// JSON文字列をアクションに応じたスキーマへ変換
pub fn parse_schema(
    action: HeaderAction,
    content: &str,
    location: &str,
) -> Result<HeaderSchema, SchemaSourceError> {
    let decode_error = |e: serde_json::Error| SchemaSourceError::Decode {
        location: location.to_string(),
        cause: e.to_string(),
    };

    match action {
        HeaderAction::Add => {
            let document: AddSchemaDocument =
                serde_json::from_str(content).map_err(decode_error)?;
            Ok(HeaderSchema::Add(document.headers))
        }
        HeaderAction::Remove => {
            let document: RemoveSchemaDocument =
                serde_json::from_str(content).map_err(decode_error)?;
            Ok(HeaderSchema::Remove(document.headers))
        }
    }
}

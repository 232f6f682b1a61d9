// 設定と選択パラメータ
//
// 対象サーバー・ヘッダーアクションの列挙と、
// プロジェクト設定ファイル（YAML形式）の読み込み・検証を行います。

use crate::core::error::{IoError, RenderError};
use crate::core::naming;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// 対象サーバー
///
/// 命令を生成するサーバーファミリー。固定の閉じた集合です。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServerTarget {
    #[serde(rename = "APACHE_HTTP_SERVER")]
    ApacheHttpServer,
    #[serde(rename = "NGINX")]
    Nginx,
    #[serde(rename = "IIS")]
    Iis,
}

impl ServerTarget {
    /// サポートされているすべてのサーバー
    pub const ALL: [ServerTarget; 3] = [
        ServerTarget::ApacheHttpServer,
        ServerTarget::Nginx,
        ServerTarget::Iis,
    ];

    /// 正規名（CLIやエラーメッセージで使用）
    pub fn canonical_name(&self) -> &'static str {
        match self {
            ServerTarget::ApacheHttpServer => "APACHE_HTTP_SERVER",
            ServerTarget::Nginx => "NGINX",
            ServerTarget::Iis => "IIS",
        }
    }
}

impl std::fmt::Display for ServerTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

impl FromStr for ServerTarget {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 正規名のみを受け付ける
        match s {
            "APACHE_HTTP_SERVER" => Ok(ServerTarget::ApacheHttpServer),
            "NGINX" => Ok(ServerTarget::Nginx),
            "IIS" => Ok(ServerTarget::Iis),
            _ => Err(RenderError::UnsupportedTarget {
                name: s.to_string(),
            }),
        }
    }
}

/// ヘッダーアクション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderAction {
    #[serde(rename = "ADD")]
    Add,
    #[serde(rename = "REMOVE")]
    Remove,
}

impl HeaderAction {
    /// 正規名
    pub fn canonical_name(&self) -> &'static str {
        match self {
            HeaderAction::Add => "ADD",
            HeaderAction::Remove => "REMOVE",
        }
    }

    /// 対応するスキーマファイル名（headers_add.json / headers_remove.json）
    pub fn schema_file_name(&self) -> String {
        naming::schema_file_name(self.canonical_name())
    }
}

impl std::fmt::Display for HeaderAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

impl FromStr for HeaderAction {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADD" => Ok(HeaderAction::Add),
            "REMOVE" => Ok(HeaderAction::Remove),
            _ => Err(RenderError::UnsupportedAction {
                name: s.to_string(),
            }),
        }
    }
}

/// プロジェクト設定
///
/// CLIフラグが省略された場合の既定値を提供します。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// スキーマ取得元（ディレクトリまたは https: URL）
    #[serde(default = "default_source")]
    pub source: String,

    /// 出力ファイル
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// リモート取得のタイムアウト（秒）
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_source() -> String {
    naming::DEFAULT_SOURCE.to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from(naming::DEFAULT_OUTPUT_FILE)
}

fn default_timeout() -> u64 {
    naming::DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            output: default_output(),
            timeout: default_timeout(),
        }
    }
}

impl Config {
    /// デフォルトの設定ファイルパス
    pub const DEFAULT_CONFIG_PATH: &'static str = naming::CONFIG_FILE;

    /// 設定ファイルを読み込む
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(IoError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = fs::read_to_string(path).map_err(|e| IoError::FileRead {
            path: path.display().to_string(),
            cause: e.to_string(),
        })?;

        let config: Config = content.parse()?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path))?;

        Ok(config)
    }

    /// 設定の妥当性を検証
    pub fn validate(&self) -> Result<()> {
        if self.source.trim().is_empty() {
            return Err(anyhow!("Schema source is not specified"));
        }

        if self.output.as_os_str().is_empty() {
            return Err(anyhow!("Output file is not specified"));
        }

        if self.timeout == 0 {
            return Err(anyhow!("Timeout must be greater than 0 seconds"));
        }

        Ok(())
    }
}

/// std::str::FromStrトレイトの実装
impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(yaml: &str) -> Result<Self, Self::Err> {
        serde_saphyr::from_str(yaml).with_context(|| "Failed to parse config file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_target_display() {
        assert_eq!(ServerTarget::ApacheHttpServer.to_string(), "APACHE_HTTP_SERVER");
        assert_eq!(ServerTarget::Nginx.to_string(), "NGINX");
        assert_eq!(ServerTarget::Iis.to_string(), "IIS");
    }

    #[test]
    fn test_server_target_from_canonical_name() {
        for target in ServerTarget::ALL {
            assert_eq!(target.canonical_name().parse::<ServerTarget>(), Ok(target));
        }
    }

    #[test]
    fn test_server_target_rejects_non_canonical_spelling() {
        for name in ["apache", "HTTPD", "nginx", "Iis", "apache-http-server"] {
            let err = name.parse::<ServerTarget>().unwrap_err();
            assert_eq!(
                err,
                RenderError::UnsupportedTarget {
                    name: name.to_string()
                }
            );
        }
    }

    #[test]
    fn test_server_target_unsupported() {
        let err = "LIGHTTPD".parse::<ServerTarget>().unwrap_err();
        assert!(err.is_unsupported_target());
    }

    #[test]
    fn test_header_action_from_str() {
        assert_eq!("ADD".parse::<HeaderAction>(), Ok(HeaderAction::Add));
        assert_eq!("REMOVE".parse::<HeaderAction>(), Ok(HeaderAction::Remove));

        let err = "REPLACE".parse::<HeaderAction>().unwrap_err();
        assert!(err.is_unsupported_action());
        assert!("remove".parse::<HeaderAction>().unwrap_err().is_unsupported_action());
    }

    #[test]
    fn test_header_action_schema_file_name() {
        assert_eq!(HeaderAction::Add.schema_file_name(), "headers_add.json");
        assert_eq!(HeaderAction::Remove.schema_file_name(), "headers_remove.json");
    }

    #[test]
    fn test_config_defaults_from_partial_yaml() {
        let config: Config = "output: nginx.conf\n".parse().unwrap();

        assert_eq!(config.output, PathBuf::from("nginx.conf"));
        assert_eq!(config.source, naming::DEFAULT_SOURCE);
        assert_eq!(config.timeout, naming::DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_config_validate_rejects_zero_timeout() {
        let config = Config {
            timeout: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_rejects_empty_source() {
        let config = Config {
            source: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
        assert!(Config::default().validate().is_ok());
    }
}

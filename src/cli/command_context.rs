// コマンド共通コンテキスト
//
// 設定ファイル読み込みやパス解決の重複をCLI層で集約する。

use crate::core::config::Config;
use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLIコマンド共通の実行コンテキスト
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub project_path: PathBuf,
    pub config: Config,
}

impl CommandContext {
    /// 設定を読み込んでコンテキストを作成
    ///
    /// `config_path` が明示されていてファイルが存在しない場合はエラー。
    /// 既定の設定ファイルが存在しない場合は既定値を使用します。
    pub fn load(project_path: PathBuf, config_path: Option<PathBuf>) -> Result<Self> {
        let (config_path, explicit) = match config_path {
            Some(path) => (path, true),
            None => (project_path.join(Config::DEFAULT_CONFIG_PATH), false),
        };

        let config = if config_path.exists() {
            debug!(config_path = %config_path.display(), "Loading config file");
            Config::from_file(&config_path).with_context(|| "Failed to read config file")?
        } else if explicit {
            return Err(anyhow!("Config file not found: {:?}", config_path));
        } else {
            Config::default()
        };

        Ok(Self {
            project_path,
            config,
        })
    }

    /// プロジェクトルート基準でパスを解決
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_path.join(path)
        }
    }

    /// スキーマ取得元を解決（フラグ優先、なければ設定値）
    ///
    /// ローカルの相対パスはプロジェクトルート基準に変換します。
    pub fn schema_source(&self, flag: Option<&str>) -> String {
        let source = flag.unwrap_or(self.config.source.as_str());
        if crate::services::schema_loader::is_remote(source) {
            source.to_string()
        } else {
            self.resolve_path(Path::new(source)).display().to_string()
        }
    }

    /// 出力ファイルを解決（フラグ優先、なければ設定値）
    pub fn output_file(&self, flag: Option<&Path>) -> PathBuf {
        self.resolve_path(flag.unwrap_or(self.config.output.as_path()))
    }
}

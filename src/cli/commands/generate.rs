// generateコマンドハンドラー
//
// 設定命令スニペットの生成を実装します。
// - 参照JSONファイルの読み込み（ローカル/リモート）
// - 対象サーバー用の命令生成
// - 命令の整列とファイルへの保存

use crate::adapters::directive_renderer;
use crate::adapters::snippet_writer::{join_instructions, SnippetWriter};
use crate::cli::command_context::CommandContext;
use crate::core::config::{HeaderAction, ServerTarget};
use crate::services::instruction_sorter;
use crate::services::schema_loader::SchemaLoaderService;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// generateコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct GenerateCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// 設定ファイルのパス（指定されない場合は既定のパス）
    pub config_path: Option<PathBuf>,
    /// 対象サーバー
    pub server: ServerTarget,
    /// ヘッダーアクション
    pub action: HeaderAction,
    /// スキーマ取得元（指定されない場合は設定ファイルから取得）
    pub source: Option<String>,
    /// 出力ファイル（指定されない場合は設定ファイルから取得）
    pub output: Option<PathBuf>,
    /// ドライラン（スニペットを表示するがファイルは作成しない）
    pub dry_run: bool,
}

/// generateコマンドハンドラー
#[derive(Debug, Clone)]
pub struct GenerateCommandHandler {}

impl GenerateCommandHandler {
    /// 新しいGenerateCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// generateコマンドを実行
    ///
    /// 各ステップの進捗は実行時に標準エラー出力へ表示します。
    ///
    /// # Arguments
    ///
    /// * `command` - generateコマンドのパラメータ
    ///
    /// # Returns
    ///
    /// 成功時は完了メッセージ（ドライラン時はスニペット本文）、失敗時はエラーメッセージ
    pub async fn execute(&self, command: &GenerateCommand) -> Result<String> {
        let context =
            CommandContext::load(command.project_path.clone(), command.config_path.clone())?;
        let source = context.schema_source(command.source.as_deref());
        let output_file = context.output_file(command.output.as_deref());

        // スキーマを読み込む
        let loader = SchemaLoaderService::from_location(
            &source,
            Duration::from_secs(context.config.timeout),
        );
        self.report(&format!("Load JSON source from '{}'.", loader.location()));
        let schema = loader
            .load(command.action)
            .await
            .with_context(|| format!("Failed to load schema from '{}'", loader.location()))?;

        // 命令を生成
        self.report(&format!(
            "Generate headers '{}' instructions for server software name '{}'.",
            command.action, command.server
        ));
        let instructions = directive_renderer::render(command.server, command.action, &schema)
            .with_context(|| format!("Failed to render instructions for {}", command.server))?;
        let instructions = instruction_sorter::finalize(instructions);
        debug!(
            server = %command.server,
            action = %command.action,
            headers = schema.len(),
            instructions = instructions.len(),
            "Rendered instructions"
        );

        // dry-runモードの場合はスニペットのみを返す
        if command.dry_run {
            return Ok(join_instructions(&instructions));
        }

        // ファイルへ保存
        self.report(&format!(
            "Save generated instructions to file '{}'.",
            output_file.display()
        ));
        let written = SnippetWriter::new()
            .write(&instructions, &output_file)
            .with_context(|| format!("Failed to save instructions: {:?}", output_file))?;
        info!(output = %output_file.display(), bytes = written, "Snippet saved");

        Ok(format!(
            "{}",
            "[V] Instructions successfully generated and saved.".green()
        ))
    }

    /// 進捗を即時に表示（標準出力はスニペット用に空けておく）
    fn report(&self, message: &str) {
        eprintln!("{} {}", "[+]".cyan(), message);
        info!("{}", message);
    }
}

impl Default for GenerateCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

use anyhow::{Context, Result};
use clap::Parser;
use colored::control as color_control;
use header_snippet::cli::commands::generate::{GenerateCommand, GenerateCommandHandler};
use header_snippet::cli::commands::targets::TargetsCommandHandler;
use header_snippet::cli::{Cli, Commands};
use std::env;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // CLIをパースして実行
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // 非同期ランタイムを作成して実行
    let runtime = tokio::runtime::Runtime::new()
        .context("Failed to create Tokio runtime")
        .unwrap_or_else(|e| {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        });

    let result = runtime.block_on(run_command(cli));

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// トレーシングを初期化する
///
/// --verbose 指定時はdebugレベル、それ以外はRUST_LOGまたはwarn。
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("header_snippet=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// コマンドを実行する
async fn run_command(cli: Cli) -> Result<String> {
    // --no-color フラグの処理
    if cli.no_color {
        color_control::set_override(false);
    }

    // プロジェクトのルートパスを取得
    let project_path = env::current_dir()?;

    // --config フラグの処理（絶対パスに変換）
    let config_path: Option<PathBuf> = cli.config.map(|p| {
        if p.is_absolute() {
            p
        } else {
            project_path.join(p)
        }
    });

    match cli.command {
        Commands::Generate {
            server,
            action,
            source,
            output,
            dry_run,
        } => {
            let handler = GenerateCommandHandler::new();
            let command = GenerateCommand {
                project_path,
                config_path,
                server,
                action,
                source,
                output,
                dry_run,
            };
            handler.execute(&command).await
        }

        Commands::Targets => Ok(TargetsCommandHandler::new().execute()),
    }
}

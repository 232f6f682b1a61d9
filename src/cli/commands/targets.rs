// targetsコマンドハンドラー
//
// サポートされている対象サーバーと、その出力形式を一覧表示します。

use crate::adapters::directive_renderer::renderer_for;
use crate::core::config::ServerTarget;
use colored::Colorize;

/// targetsコマンドハンドラー
#[derive(Debug, Clone)]
pub struct TargetsCommandHandler {}

impl TargetsCommandHandler {
    /// 新しいTargetsCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// targetsコマンドを実行
    pub fn execute(&self) -> String {
        let mut lines = vec![format!("{}", "=== Supported Servers ===".bold())];

        for target in ServerTarget::ALL {
            let mode = if renderer_for(target).aggregates() {
                "all headers in a single directive"
            } else {
                "one directive per header"
            };
            lines.push(format!("  {:<20} {}", target.canonical_name().cyan(), mode));
        }

        lines.join("\n")
    }
}

impl Default for TargetsCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_target() {
        colored::control::set_override(false);
        let output = TargetsCommandHandler::new().execute();

        assert!(output.contains("APACHE_HTTP_SERVER"));
        assert!(output.contains("NGINX"));
        assert!(output.contains("IIS"));
        assert!(output.contains("single directive"));
    }
}

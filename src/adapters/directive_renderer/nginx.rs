// Nginx用ディレクティブレンダラー
//
// headers-more-nginx-module の more_set_headers / more_clear_headers を生成します。
// このモジュールは可変長引数の1ディレクティブで複数ヘッダーを扱うため、
// すべてのヘッダーを1行に集約します。

use crate::adapters::directive_renderer::DirectiveRenderer;
use crate::core::escape::escape;
use crate::core::schema::{HeaderEntry, Instruction};

/// Nginx用ディレクティブレンダラー
#[derive(Debug, Clone)]
pub struct NginxDirectiveRenderer {}

impl NginxDirectiveRenderer {
    /// 新しいNginxDirectiveRendererを作成
    pub fn new() -> Self {
        Self {}
    }

    /// `"name: value"` 形式の引数を生成
    fn header_argument(&self, entry: &HeaderEntry) -> String {
        format!("\"{}: {}\"", entry.name, escape(&entry.value))
    }
}

impl Default for NginxDirectiveRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectiveRenderer for NginxDirectiveRenderer {
    fn render_add(&self, entries: &[HeaderEntry]) -> Vec<Instruction> {
        if entries.is_empty() {
            return Vec::new();
        }

        // 行内の順序はスキーマの定義順を保つ
        let arguments: Vec<String> = entries.iter().map(|e| self.header_argument(e)).collect();
        vec![Instruction::new(format!(
            "more_set_headers {};",
            arguments.join(" ")
        ))]
    }

    fn render_remove(&self, names: &[String]) -> Vec<Instruction> {
        if names.is_empty() {
            return Vec::new();
        }

        // ヘッダー名はエスケープせずにそのまま連結する
        vec![Instruction::new(format!(
            "more_clear_headers {};",
            names.join(" ")
        ))]
    }

    fn aggregates(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_add_aggregates_in_schema_order() {
        let renderer = NginxDirectiveRenderer::new();
        let entries = vec![
            HeaderEntry::new("X-Frame-Options", "DENY"),
            HeaderEntry::new("X-Content-Type-Options", "nosniff"),
        ];

        let result = renderer.render_add(&entries);

        assert_eq!(
            result,
            vec![Instruction::new(
                "more_set_headers \"X-Frame-Options: DENY\" \"X-Content-Type-Options: nosniff\";"
            )]
        );
    }

    #[test]
    fn test_render_add_escapes_value() {
        let renderer = NginxDirectiveRenderer::new();
        let entries = vec![HeaderEntry::new("Clear-Site-Data", r#""cache""#)];

        let result = renderer.render_add(&entries);

        assert_eq!(
            result[0].as_str(),
            r#"more_set_headers "Clear-Site-Data: \"cache\"";"#
        );
    }

    #[test]
    fn test_render_remove_aggregates() {
        let renderer = NginxDirectiveRenderer::new();
        let names = vec![
            "X-Powered-By".to_string(),
            "Server".to_string(),
            "X-AspNet-Version".to_string(),
        ];

        let result = renderer.render_remove(&names);

        assert_eq!(
            result,
            vec![Instruction::new(
                "more_clear_headers X-Powered-By Server X-AspNet-Version;"
            )]
        );
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        let renderer = NginxDirectiveRenderer::new();
        assert!(renderer.render_add(&[]).is_empty());
        assert!(renderer.render_remove(&[]).is_empty());
    }
}

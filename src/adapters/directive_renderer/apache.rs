// Apache HTTP Server用ディレクティブレンダラー
//
// mod_headers の Header ディレクティブを1ヘッダーにつき1行生成します。

use crate::adapters::directive_renderer::DirectiveRenderer;
use crate::core::escape::escape;
use crate::core::schema::{HeaderEntry, Instruction};

/// Apache HTTP Server用ディレクティブレンダラー
#[derive(Debug, Clone)]
pub struct ApacheDirectiveRenderer {}

impl ApacheDirectiveRenderer {
    /// 新しいApacheDirectiveRendererを作成
    pub fn new() -> Self {
        Self {}
    }

    fn set_directive(&self, entry: &HeaderEntry) -> Instruction {
        Instruction::new(format!(
            "Header always set {} \"{}\"",
            entry.name,
            escape(&entry.value)
        ))
    }

    fn unset_directive(&self, name: &str) -> Instruction {
        Instruction::new(format!("Header unset {}", name))
    }
}

impl Default for ApacheDirectiveRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectiveRenderer for ApacheDirectiveRenderer {
    fn render_add(&self, entries: &[HeaderEntry]) -> Vec<Instruction> {
        entries.iter().map(|e| self.set_directive(e)).collect()
    }

    fn render_remove(&self, names: &[String]) -> Vec<Instruction> {
        names.iter().map(|n| self.unset_directive(n)).collect()
    }
}

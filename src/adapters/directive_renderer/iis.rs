// IIS用ディレクティブレンダラー
//
// web.config の customHeaders 要素を1ヘッダーにつき1行生成します。

use crate::adapters::directive_renderer::DirectiveRenderer;
use crate::core::escape::escape;
use crate::core::schema::{HeaderEntry, Instruction};

/// IIS用ディレクティブレンダラー
#[derive(Debug, Clone)]
pub struct IisDirectiveRenderer {}

impl IisDirectiveRenderer {
    /// 新しいIisDirectiveRendererを作成
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for IisDirectiveRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectiveRenderer for IisDirectiveRenderer {
    fn render_add(&self, entries: &[HeaderEntry]) -> Vec<Instruction> {
        entries
            .iter()
            .map(|entry| {
                Instruction::new(format!(
                    "<add name=\"{}\" value=\"{}\" />",
                    entry.name,
                    escape(&entry.value)
                ))
            })
            .collect()
    }

    fn render_remove(&self, names: &[String]) -> Vec<Instruction> {
        names
            .iter()
            .map(|name| Instruction::new(format!("<remove name=\"{}\" />", name)))
            .collect()
    }
}

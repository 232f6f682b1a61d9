// スニペット書き込みアダプター
//
// 整列済みの命令をテキストとして連結し、ファイルへ書き込みます。

use crate::core::error::IoError;
use crate::core::schema::Instruction;
use anyhow::Result;
use std::fs;
use std::path::Path;

/// 命令を改行で連結したテキストを生成
///
/// 末尾の改行は付けません。
pub fn join_instructions(instructions: &[Instruction]) -> String {
    instructions
        .iter()
        .map(Instruction::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

/// スニペットライター
#[derive(Debug, Clone)]
pub struct SnippetWriter {}

impl SnippetWriter {
    /// 新しいSnippetWriterを作成
    pub fn new() -> Self {
        Self {}
    }

    /// 命令を指定ファイルへ書き込む
    ///
    /// 与えられた順序をそのまま保ちます。既存のファイルは上書きされます。
    ///
    /// # Returns
    ///
    /// 書き込んだバイト数
    pub fn write(&self, instructions: &[Instruction], output_file: &Path) -> Result<usize> {
        let content = join_instructions(instructions);

        fs::write(output_file, &content).map_err(|e| IoError::FileWrite {
            path: output_file.display().to_string(),
            cause: e.to_string(),
        })?;

        Ok(content.len())
    }
}

impl Default for SnippetWriter {
    fn default() -> Self {
        Self::new()
    }
}

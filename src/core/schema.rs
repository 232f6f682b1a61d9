// ヘッダースキーマのドメインモデル
//
// ベンダー中立なヘッダー定義（追加・削除）と、
// 生成されるサーバー固有の命令行を表現します。

use crate::core::config::HeaderAction;
use crate::core::error::RenderError;
use serde::{Deserialize, Serialize};

/// 追加するヘッダーの定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    /// ヘッダー名
    pub name: String,
    /// ヘッダー値（エスケープ前）
    pub value: String,
}

impl HeaderEntry {
    /// 新しいヘッダー定義を作成
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// ヘッダースキーマ
///
/// アクションごとに要素の形が異なります。
/// ADDでは名前と値の組、REMOVEでは名前のみを保持します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderSchema {
    /// 追加するヘッダーの一覧
    Add(Vec<HeaderEntry>),
    /// 削除するヘッダー名の一覧
    Remove(Vec<String>),
}

impl HeaderSchema {
    /// 空のスキーマを作成
    pub fn empty(action: HeaderAction) -> Self {
        match action {
            HeaderAction::Add => HeaderSchema::Add(Vec::new()),
            HeaderAction::Remove => HeaderSchema::Remove(Vec::new()),
        }
    }

    /// このスキーマが対象とするアクション
    pub fn action(&self) -> HeaderAction {
        match self {
            HeaderSchema::Add(_) => HeaderAction::Add,
            HeaderSchema::Remove(_) => HeaderAction::Remove,
        }
    }

    /// 要素数
    pub fn len(&self) -> usize {
        match self {
            HeaderSchema::Add(entries) => entries.len(),
            HeaderSchema::Remove(names) => names.len(),
        }
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// ヘッダー名を定義順に列挙
    pub fn header_names(&self) -> Vec<&str> {
        match self {
            HeaderSchema::Add(entries) => entries.iter().map(|e| e.name.as_str()).collect(),
            HeaderSchema::Remove(names) => names.iter().map(String::as_str).collect(),
        }
    }

    /// 最低限の検証
    ///
    /// ヘッダー名が空の要素があれば、壊れた命令を出力する前に失敗させます。
    pub fn validate(&self) -> Result<(), RenderError> {
        for (index, name) in self.header_names().into_iter().enumerate() {
            if name.trim().is_empty() {
                return Err(RenderError::malformed(format!(
                    "header #{} has an empty name",
                    index
                )));
            }
        }
        Ok(())
    }
}

/// 命令
///
/// サーバー固有の設定テキスト1行。単独で完結しており、
/// 出力前にバイト順でソートされます。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instruction(String);

impl Instruction {
    /// 新しい命令を作成
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// 命令テキスト
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_action_and_len() {
        let schema = HeaderSchema::Add(vec![HeaderEntry::new("X-Frame-Options", "DENY")]);
        assert_eq!(schema.action(), HeaderAction::Add);
        assert_eq!(schema.len(), 1);
        assert!(!schema.is_empty());

        let schema = HeaderSchema::empty(HeaderAction::Remove);
        assert_eq!(schema.action(), HeaderAction::Remove);
        assert!(schema.is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let schema = HeaderSchema::Add(vec![
            HeaderEntry::new("X-Frame-Options", "DENY"),
            HeaderEntry::new("", "value"),
        ]);

        let err = schema.validate().unwrap_err();
        assert!(err.is_malformed_schema());
        assert!(err.to_string().contains("#1"));
    }

    #[test]
    fn test_validate_accepts_remove_names() {
        let schema = HeaderSchema::Remove(vec!["X-Powered-By".to_string()]);
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_instruction_ordering_is_bytewise() {
        // 大文字は小文字より前に並ぶ
        let upper = Instruction::new("Header unset Z");
        let lower = Instruction::new("Header unset a");
        assert!(upper < lower);
        assert_eq!(upper.to_string(), "Header unset Z");
    }
}

// 命名ポリシー
//
// 設定ファイル名や既定値の単一ソースを提供します。

/// 既定の設定ファイル名
pub const CONFIG_FILE: &str = ".header-snippet.yaml";

/// 既定の出力ファイル名
pub const DEFAULT_OUTPUT_FILE: &str = "snippet.conf";

/// 既定のスキーマ取得元（OWASP Secure Headers Project の参照ファイル）
pub const DEFAULT_SOURCE: &str =
    "https://raw.githubusercontent.com/OWASP/www-project-secure-headers/master/ci";

/// 既定のリモート取得タイムアウト（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// アクションに対応するスキーマファイル名を返す
///
/// `headers_add.json` / `headers_remove.json` の形式です。
pub fn schema_file_name(action_name: &str) -> String {
    format!("headers_{}.json", action_name.to_lowercase())
}

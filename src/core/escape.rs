// 値のエスケープ
//
// 命令の文字列リテラル内で安全でない文字をエスケープします。

/// ダブルクォートをバックスラッシュ付きでエスケープ
///
/// バックスラッシュ自体はエスケープしないため、冪等ではありません。
pub fn escape(value: &str) -> String {
    value.replace('"', "\\\"")
}

// 命令ソートサービス
//
// 生成された命令を出力前に決定的な順序へ並べ替えます。

use crate::core::schema::Instruction;

/// 命令をバイト順に整列して返す
///
/// 安定ソートのため、同一テキストの命令は元の相対順序を保ちます。
/// Nginxのように1行に集約された命令の行内順序は変更しません。
pub fn finalize(mut instructions: Vec<Instruction>) -> Vec<Instruction> {
    instructions.sort();
    instructions
}

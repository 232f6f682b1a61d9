// Header Snippetライブラリのエントリーポイント
//
// モジュール構造:
// - cli: CLIレイヤー（ユーザー入力の受付とコマンドルーティング）
// - core: コアドメインロジック（ヘッダースキーマ、対象サーバー、エスケープ）
// - adapters: サーバー別の命令生成とファイル出力
// - services: スキーマの読み込みと命令の整列

pub mod adapters;
pub mod cli;
pub mod core;
pub mod services;

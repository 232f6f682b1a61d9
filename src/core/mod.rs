// Core Domain
// ヘッダースキーマ、対象サーバー、エスケープ処理の純粋なビジネスロジック

pub mod config;
pub mod error;
pub mod escape;
pub mod naming;
pub mod schema;

// Adapters
// サーバー固有の命令生成と、ファイルシステムへの出力を抽象化

pub mod directive_renderer;
pub mod snippet_writer;

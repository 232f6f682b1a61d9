// Services Layer
// スキーマの読み込みと命令の整列を行うサービス層

pub mod instruction_sorter;
pub mod schema_loader;

// ディレクティブ生成アダプター
//
// ヘッダースキーマから各サーバーファミリー用の設定命令を生成するアダプター層。

pub mod apache;
pub mod iis;
pub mod nginx;

use crate::core::config::{HeaderAction, ServerTarget};
use crate::core::error::RenderError;
use crate::core::schema::{HeaderEntry, HeaderSchema, Instruction};
use apache::ApacheDirectiveRenderer;
use iis::IisDirectiveRenderer;
use nginx::NginxDirectiveRenderer;

/// ディレクティブレンダラートレイト
///
/// 各サーバーファミリー用のレンダラーが実装すべきインターフェース。
pub trait DirectiveRenderer {
    /// ヘッダー追加の命令を生成
    ///
    /// # Arguments
    ///
    /// * `entries` - 追加するヘッダー定義（スキーマの定義順）
    ///
    /// # Returns
    ///
    /// 命令のベクター（空のスキーマでは空）
    fn render_add(&self, entries: &[HeaderEntry]) -> Vec<Instruction>;

    /// ヘッダー削除の命令を生成
    ///
    /// # Arguments
    ///
    /// * `names` - 削除するヘッダー名（スキーマの定義順）
    ///
    /// # Returns
    ///
    /// 命令のベクター（空のスキーマでは空）
    fn render_remove(&self, names: &[String]) -> Vec<Instruction>;

    /// すべてのヘッダーを1つの命令に集約するかどうか
    fn aggregates(&self) -> bool {
        false
    }
}

/// 対象サーバー用のレンダラーを取得
pub fn renderer_for(target: ServerTarget) -> Box<dyn DirectiveRenderer> {
    match target {
        ServerTarget::ApacheHttpServer => Box::new(ApacheDirectiveRenderer::new()),
        ServerTarget::Nginx => Box::new(NginxDirectiveRenderer::new()),
        ServerTarget::Iis => Box::new(IisDirectiveRenderer::new()),
    }
}

/// スキーマを対象サーバーの命令に変換
///
/// 検証はすべての命令を生成する前に行うため、エラー時に部分的な出力はありません。
///
/// # Errors
///
/// - スキーマの形がアクションと一致しない場合（MalformedSchema）
/// - ヘッダー名が空の要素がある場合（MalformedSchema）
pub fn render(
    target: ServerTarget,
    action: HeaderAction,
    schema: &HeaderSchema,
) -> Result<Vec<Instruction>, RenderError> {
    if schema.action() != action {
        return Err(RenderError::malformed(format!(
            "schema holds {} entries but {} was requested",
            schema.action(),
            action
        )));
    }
    schema.validate()?;

    let renderer = renderer_for(target);
    let instructions = match schema {
        HeaderSchema::Add(entries) => renderer.render_add(entries),
        HeaderSchema::Remove(names) => renderer.render_remove(names),
    };

    Ok(instructions)
}

/// サーバー名・アクション名の文字列から命令を生成
///
/// # Errors
///
/// - サーバー名が未対応の場合（UnsupportedTarget）
/// - アクション名が未対応の場合（UnsupportedAction）
/// - `render` と同じスキーマエラー
pub fn render_by_name(
    server: &str,
    action: &str,
    schema: &HeaderSchema,
) -> Result<Vec<Instruction>, RenderError> {
    let target: ServerTarget = server.parse()?;
    let action: HeaderAction = action.parse()?;
    render(target, action, schema)
}

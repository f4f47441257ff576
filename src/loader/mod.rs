//! 翻訳ファイルのローダー
mod encoding;
mod error;
mod xliff;

use std::path::Path;

pub use error::{
    ParseError,
    ParseErrorKind,
};
pub use xliff::{
    XLIFF_1_2_NAMESPACE,
    XliffLoader,
    translation_entries,
};

use crate::catalogue::MessageCatalogue;

/// 呼び出し側がドメインを指定しない場合のドメイン
pub const DEFAULT_DOMAIN: &str = "messages";

/// 翻訳リソースから [`MessageCatalogue`] を作成する
///
/// ホスト側の統合層はこのトレイトに合わせてシグネチャを変換する。
pub trait Loader {
    type Error: std::error::Error;

    /// `resource` を `locale` の新しいカタログに読み込み、全メッセージを
    /// `domain` に格納する
    ///
    /// # Errors
    /// リソースを読み込めない、またはパースできない場合は `Self::Error`。
    /// 途中までのカタログは返さない。
    fn load(
        &self,
        resource: &Path,
        locale: &str,
        domain: &str,
    ) -> Result<MessageCatalogue, Self::Error>;
}

//! `resname` をキーとする XLIFF 1.2 ローダー
//!
//! ソーステキストをキーにすると、文言の変更でキーが変わってしまう。
//! このローダーは各 `trans-unit` の `resname` 属性をキーとし、
//! `resname` が無いか空の場合だけソーステキストを使う。

use std::path::Path;

use roxmltree::{
    Document,
    Node,
    ParsingOptions,
};

use super::encoding::decode_document;
use super::{
    Loader,
    ParseError,
};
use crate::catalogue::{
    FileResource,
    MessageCatalogue,
    TranslationEntry,
};
use crate::config::{
    ConfigError,
    LoaderSettings,
};

/// 対象とする XLIFF 要素の名前空間
pub const XLIFF_1_2_NAMESPACE: &str = "urn:oasis:names:tc:xliff:document:1.2";

/// XLIFF 1.2 ファイルを [`MessageCatalogue`] に読み込む
#[derive(Debug, Clone, Default)]
pub struct XliffLoader {
    /// バリデーション済みの設定
    settings: LoaderSettings,
}

impl XliffLoader {
    /// デフォルト設定でローダーを作成
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 設定からローダーを作成
    ///
    /// # Errors
    /// 設定が不正な場合は `ConfigError::ValidationErrors`
    pub fn with_settings(settings: LoaderSettings) -> Result<Self, ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        Ok(Self { settings })
    }

    #[must_use]
    pub const fn settings(&self) -> &LoaderSettings {
        &self.settings
    }

    /// 設定のデフォルトドメインに読み込む
    ///
    /// # Errors
    /// [`Loader::load`] と同じ
    pub fn load_default(
        &self,
        resource: &Path,
        locale: &str,
    ) -> Result<MessageCatalogue, ParseError> {
        self.load(resource, locale, &self.settings.default_domain)
    }

    /// 読み込み済みのバイト列からカタログを作成
    ///
    /// 文字コードは BOM または XML 宣言の `encoding` から判定し、
    /// どちらも無ければ UTF-8 とみなす。
    ///
    /// # Errors
    /// - 未対応の文字コード、または不正なバイト列
    /// - XML として整形式でない
    pub fn load_bytes(
        &self,
        bytes: &[u8],
        resource: &Path,
        locale: &str,
        domain: &str,
    ) -> Result<MessageCatalogue, ParseError> {
        let content = decode_document(bytes).map_err(|kind| ParseError::new(resource, kind))?;

        self.load_str(&content, resource, locale, domain)
    }

    /// 読み込み済みの XLIFF 文字列からカタログを作成
    ///
    /// `resource` はカタログに記録され、エラーにも含まれる。
    ///
    /// # Errors
    /// `content` が XML として整形式でない場合
    pub fn load_str(
        &self,
        content: &str,
        resource: &Path,
        locale: &str,
        domain: &str,
    ) -> Result<MessageCatalogue, ParseError> {
        let options =
            ParsingOptions { allow_dtd: self.settings.allow_dtd, ..ParsingOptions::default() };
        let document = Document::parse_with_options(content, options)
            .map_err(|e| ParseError::new(resource, e))?;

        let mut catalogue = MessageCatalogue::new(locale);
        for TranslationEntry { id, text } in translation_entries(&document) {
            if catalogue.set(domain, id.clone(), text).is_some() {
                tracing::trace!(id = %id, domain, "Overwriting message with duplicate id");
            }
        }
        catalogue.add_resource(FileResource::new(resource));

        tracing::debug!(
            resource = %resource.display(),
            locale,
            domain,
            messages = catalogue.len(),
            "Loaded XLIFF catalogue"
        );

        Ok(catalogue)
    }
}

impl Loader for XliffLoader {
    type Error = ParseError;

    fn load(
        &self,
        resource: &Path,
        locale: &str,
        domain: &str,
    ) -> Result<MessageCatalogue, ParseError> {
        tracing::debug!(resource = %resource.display(), locale, domain, "Loading XLIFF catalogue");

        let bytes = std::fs::read(resource).map_err(|e| ParseError::new(resource, e))?;

        self.load_bytes(&bytes, resource, locale, domain)
    }
}

/// `trans-unit` ごとに 1 エントリをドキュメント順に取り出す
///
/// `trans-unit` は XLIFF 1.2 名前空間に属していれば深さを問わず対象になる。
/// キーは空でない `resname`、無ければソーステキスト（空文字列もありうる）。
#[must_use]
pub fn translation_entries(document: &Document<'_>) -> Vec<TranslationEntry> {
    document
        .descendants()
        .filter(|node| node.has_tag_name((XLIFF_1_2_NAMESPACE, "trans-unit")))
        .map(|unit| {
            let source = child_text(unit, "source");
            let target = child_text(unit, "target");
            let id = match unit.attribute("resname") {
                Some(resname) if !resname.is_empty() => resname.to_string(),
                _ => source,
            };
            TranslationEntry::new(id, target)
        })
        .collect()
}

/// `name` という最初の XLIFF 子要素のテキスト。無ければ `""`
fn child_text(unit: Node<'_, '_>, name: &str) -> String {
    unit.children()
        .find(|child| child.has_tag_name((XLIFF_1_2_NAMESPACE, name)))
        .map(direct_text)
        .unwrap_or_default()
}

/// 直下のテキストと CDATA を連結する（入れ子の要素は含めない）
fn direct_text(element: Node<'_, '_>) -> String {
    element.children().filter(Node::is_text).filter_map(|child| child.text()).collect()
}

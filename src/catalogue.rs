//! ローダーが作成するメッセージカタログ

use std::fmt;
use std::path::{
    Path,
    PathBuf,
};

use indexmap::IndexMap;
use serde::Serialize;

/// カタログの読み込み元ファイルを示すマーカー
///
/// 振る舞いは持たない。カタログをキャッシュするホストが、
/// 再読み込みの判断に使う。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileResource {
    /// ローダーに渡されたままのパス
    path: PathBuf,
}

impl FileResource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for FileResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// 翻訳ファイルから読み込んだ 1 メッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    /// カタログのキー（例: trans-unit の `resname`）
    pub id: String,

    /// 翻訳テキスト
    pub text: String,
}

impl TranslationEntry {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into() }
    }
}

/// 1 ロケール分の翻訳メッセージ（ドメインごと）
///
/// `(domain, id)` ごとにテキストは高々 1 つ。ドメインとキーは
/// 最初に挿入された順序を保つ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageCatalogue {
    /// ロケール（例: "fr", "en_US"）
    locale: String,

    /// ドメイン → キー → 翻訳テキスト
    messages: IndexMap<String, IndexMap<String, String>>,

    /// 読み込み元のファイル
    resources: Vec<FileResource>,
}

impl MessageCatalogue {
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self { locale: locale.into(), messages: IndexMap::new(), resources: Vec::new() }
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// `domain` の `id` にテキストを設定する
    ///
    /// 既に存在したキーなら以前のテキストを返す。
    pub fn set(
        &mut self,
        domain: &str,
        id: impl Into<String>,
        text: impl Into<String>,
    ) -> Option<String> {
        self.messages.entry(domain.to_string()).or_default().insert(id.into(), text.into())
    }

    #[must_use]
    pub fn get(&self, domain: &str, id: &str) -> Option<&str> {
        self.messages.get(domain)?.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn has(&self, domain: &str, id: &str) -> bool {
        self.messages.get(domain).is_some_and(|ids| ids.contains_key(id))
    }

    /// メッセージを検索する
    ///
    /// `locale` がこのカタログのロケールと異なる場合は `None`
    #[must_use]
    pub fn lookup(&self, locale: &str, domain: &str, id: &str) -> Option<&str> {
        if locale != self.locale {
            return None;
        }
        self.get(domain, id)
    }

    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// 1 ドメインの `(id, text)`。未知のドメインなら空
    pub fn messages(&self, domain: &str) -> impl Iterator<Item = (&str, &str)> {
        self.messages
            .get(domain)
            .into_iter()
            .flatten()
            .map(|(id, text)| (id.as_str(), text.as_str()))
    }

    /// 全ドメインの `(domain, id, text)`
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.messages.iter().flat_map(|(domain, ids)| {
            ids.iter().map(move |(id, text)| (domain.as_str(), id.as_str(), text.as_str()))
        })
    }

    /// 全ドメインのメッセージ数
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.values().map(IndexMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn add_resource(&mut self, resource: FileResource) {
        self.resources.push(resource);
    }

    #[must_use]
    pub fn resources(&self) -> &[FileResource] {
        &self.resources
    }
}

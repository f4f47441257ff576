//! xliff-resname
//!
//! XLIFF 1.2 の翻訳ファイルを [`MessageCatalogue`] に読み込む。
//! 各メッセージは `trans-unit` の `resname` 属性をキーとし、
//! `resname` が無い場合だけソーステキストを使う。

pub mod catalogue;
pub mod config;
pub mod loader;
mod test_utils;

pub use catalogue::{
    FileResource,
    MessageCatalogue,
    TranslationEntry,
};
pub use loader::{
    DEFAULT_DOMAIN,
    Loader,
    ParseError,
    ParseErrorKind,
    XliffLoader,
};

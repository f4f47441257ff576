use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

/// 翻訳ファイルからカタログを作成できなかったことを表すエラー
#[derive(Error, Debug)]
#[error("An error occurred while reading \"{}\": {kind}", .path.display())]
pub struct ParseError {
    /// 読み込みに失敗したファイル
    path: PathBuf,
    /// 失敗の原因
    #[source]
    kind: ParseErrorKind,
}

/// [`ParseError`] の原因
#[derive(Error, Debug)]
pub enum ParseErrorKind {
    /// ファイルを読み込めない
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// XML 宣言で指定された文字コードに対応していない
    #[error("unsupported encoding \"{0}\"")]
    UnsupportedEncoding(String),
    /// 判定した文字コードとして不正なバイト列を含む
    #[error("invalid {0} byte sequence")]
    Decode(&'static str),
    /// XML として整形式でない
    #[error("{0}")]
    Xml(#[from] roxmltree::Error),
}

impl ParseError {
    pub(crate) fn new(path: &Path, kind: impl Into<ParseErrorKind>) -> Self {
        Self { path: path.to_path_buf(), kind: kind.into() }
    }

    /// 読み込みに失敗したファイルのパス
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 失敗の原因
    #[must_use]
    pub const fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// ファイルシステム、デコーダ、XML パーサのいずれかが報告したメッセージ
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

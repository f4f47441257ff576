//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use std::path::PathBuf;

use tempfile::TempDir;

use crate::loader::XLIFF_1_2_NAMESPACE;

/// trans-unit のマークアップを最小限の XLIFF 1.2 文書で包む
///
/// # Arguments
/// * `units` - `<file><body>` の中に置くマークアップ
///
/// # Returns
/// XLIFF 文書の文字列
pub(crate) fn xliff_document(units: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<xliff xmlns="{XLIFF_1_2_NAMESPACE}" version="1.2">
  <file source-language="en" target-language="fr" datatype="plaintext" original="file.ext">
    <body>
{units}
    </body>
  </file>
</xliff>
"#
    )
}

/// `dir` 内の `name` に `content` を書き込む
///
/// # Returns
/// 書き込んだファイルのパス
#[allow(clippy::unwrap_used)]
pub(crate) fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

//! XML 文書の文字コード判定とデコード
//!
//! 判定の優先順位は BOM、BOM なし UTF-16 の `<?`、XML 宣言の `encoding`、
//! UTF-8 の順。

use std::borrow::Cow;

use encoding_rs::{
    Encoding,
    UTF_8,
    UTF_16BE,
    UTF_16LE,
};

use super::ParseErrorKind;

/// XML 宣言を探す先頭からのバイト数
const DECLARATION_SCAN_LIMIT: usize = 1024;

/// バイト列を XML 文書の文字列にデコードする
///
/// BOM は取り除かれる。
///
/// # Errors
/// - 未知の文字コード名が宣言されている
/// - 判定した文字コードとして不正なバイト列を含む
pub(super) fn decode_document(bytes: &[u8]) -> Result<Cow<'_, str>, ParseErrorKind> {
    let (encoding, body) = detect_encoding(bytes)?;
    tracing::trace!(encoding = encoding.name(), "Decoding XML document");

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or(ParseErrorKind::Decode(encoding.name()))
}

/// 文字コードと BOM を除いた本体を返す
fn detect_encoding(bytes: &[u8]) -> Result<(&'static Encoding, &[u8]), ParseErrorKind> {
    if let Some((encoding, bom_length)) = Encoding::for_bom(bytes) {
        return Ok((encoding, bytes.get(bom_length..).unwrap_or_default()));
    }
    if bytes.starts_with(&[0x3C, 0x00, 0x3F, 0x00]) {
        return Ok((UTF_16LE, bytes));
    }
    if bytes.starts_with(&[0x00, 0x3C, 0x00, 0x3F]) {
        return Ok((UTF_16BE, bytes));
    }

    let Some(label) = declared_encoding(bytes) else {
        return Ok((UTF_8, bytes));
    };
    let encoding = Encoding::for_label(label).ok_or_else(|| {
        ParseErrorKind::UnsupportedEncoding(String::from_utf8_lossy(label).into_owned())
    })?;

    // ASCII 互換のバイト列で宣言された UTF-16 は UTF-8 として扱う
    Ok((encoding.output_encoding(), bytes))
}

/// XML 宣言の `encoding` 属性値
fn declared_encoding(bytes: &[u8]) -> Option<&[u8]> {
    let head = bytes.get(..DECLARATION_SCAN_LIMIT.min(bytes.len()))?;
    let declaration = head.strip_prefix(b"<?xml")?;
    let declaration = declaration.get(..find(declaration, b"?>")?)?;

    let name_end = find(declaration, b"encoding")? + b"encoding".len();
    let value = declaration.get(name_end..)?.trim_ascii_start().strip_prefix(b"=")?;
    let (&quote, rest) = value.trim_ascii_start().split_first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    rest.get(..rest.iter().position(|&b| b == quote)?)
}

/// `needle` が最初に現れる位置
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}

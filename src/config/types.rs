use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::loader::DEFAULT_DOMAIN;

/// 設定値 1 件のバリデーションエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// フィールドの JSON パス（例: "defaultDomain"）
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// 設定の読み込みエラー
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// バリデーションエラーを番号付きで 1 行ずつ整形する
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoaderSettings {
    /// `XliffLoader::load_default` が使うドメイン
    pub default_domain: String,

    /// `<!DOCTYPE>` 宣言を含むファイルを受け付ける
    pub allow_dtd: bool,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self { default_domain: DEFAULT_DOMAIN.to_string(), allow_dtd: true }
    }
}

impl LoaderSettings {
    /// 設定を検証する
    ///
    /// # Errors
    /// - デフォルトドメインが空、または前後に空白を含む
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.default_domain.trim().is_empty() {
            errors.push(ValidationError::new(
                "defaultDomain",
                "The domain cannot be empty. Please specify a domain, for example: \"messages\"",
            ));
        } else if self.default_domain.trim() != self.default_domain {
            errors.push(ValidationError::new(
                "defaultDomain",
                format!(
                    "The domain '{}' has leading or trailing whitespace. Please remove it",
                    self.default_domain
                ),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

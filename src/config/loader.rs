//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    LoaderSettings,
};

/// JSON ファイルからローダー設定を読み込む
///
/// # Arguments
/// * `config_path` - 設定ファイルのパス
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みとバリデーションに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: 読み込み、パース、バリデーションのエラー
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
/// - バリデーションエラー
pub fn load_from_file(config_path: &Path) -> Result<Option<LoaderSettings>, ConfigError> {
    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(config_path)?;
    let settings: LoaderSettings = serde_json::from_str(&content)?;
    settings.validate().map_err(ConfigError::ValidationErrors)?;

    Ok(Some(settings))
}

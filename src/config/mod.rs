//! ローダーの設定
/// 設定ファイルの読み込み
mod loader;
/// 設定の型とバリデーション
mod types;

pub use loader::load_from_file;
pub use types::{
    ConfigError,
    LoaderSettings,
    ValidationError,
};

//! 設定ファイル (TOML) の読み書き
//!
//! ```toml
//! [chart]
//! background = "white"
//! show_labels = true
//!
//! [[lines]]
//! element = "Li"
//! wavelength = 670.78
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::common::constants::DEFAULT_CONFIG_FILE;
use crate::common::lines::{SpectralLine, SpectralLines};
use crate::common::spectrum::ChartSettings;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 描画設定
    pub chart: ChartSettings,

    /// 組み込み表に追加する輝線
    pub lines: Vec<SpectralLine>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// 指定があればそれを、無ければカレントの spectrum.toml を、それも無ければデフォルトを使う
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            log::info!("設定ファイル: {}", path.display());
            return Self::load(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            log::info!("設定ファイル: {}", fallback.display());
            Self::load(fallback)
        } else {
            log::debug!("設定ファイルなし、デフォルト設定を使用");
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 組み込みの輝線表に設定ファイルの輝線を足したもの
    pub fn spectral_lines(&self) -> SpectralLines {
        SpectralLines::builtin().with_lines(self.lines.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::spectrum::Background;

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.chart.background, Background::Black);
    }

    #[test]
    fn partial_chart_section() {
        let config: Config = toml::from_str(
            r#"
            [chart]
            background = "white"
            show_labels = true
            "#,
        )
        .unwrap();
        assert_eq!(config.chart.background, Background::White);
        assert!(config.chart.show_labels);
        assert_eq!(config.chart.width, ChartSettings::default().width);
    }

    #[test]
    fn unrecognized_background_falls_back_to_white() {
        let config: Config = toml::from_str("[chart]\nbackground = \"navy\"\n").unwrap();
        assert_eq!(config.chart.background, Background::White);
    }

    #[test]
    fn extra_lines_join_builtin_table() {
        let config: Config = toml::from_str(
            r#"
            [[lines]]
            element = "Li"
            wavelength = 670.78
            "#,
        )
        .unwrap();
        let lines = config.spectral_lines();
        assert_eq!(lines.wavelengths_of("li"), vec![670.78]);
        assert!(!lines.wavelengths_of("H").is_empty());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("spectrum.toml");

        let mut config = Config::default();
        config.chart.background = Background::White;
        config.chart.line_width = 4;
        config.lines.push(SpectralLine::new("Li", 670.78));
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            Config::load_or_default(Some(&missing)),
            Err(ConfigError::ReadError(_))
        ));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[chart\nwidth = ").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::ParseError(_))));
    }
}

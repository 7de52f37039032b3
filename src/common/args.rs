//! コマンドライン引数の解釈
//!
//! 数値はそのまま波長 (nm)、それ以外は元素記号として輝線表から引く。

use clap::Parser;
use std::path::PathBuf;

use crate::common::constants::DEMO_WAVELENGTHS;
use crate::common::error::SpectrumError;
use crate::common::lines::SpectralLines;
use crate::common::spectrum::{Background, ChartSettings};

#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(
    about = "波長から色を求めてスペクトル図を描画する",
    after_help = "例: spectrum 656.3 486.1 Na Hg"
)]
pub struct ChartArgs {
    /// 設定ファイル (既定: ./spectrum.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// PNG の出力先 (spectrum-png のみ)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 白背景
    #[arg(long, conflicts_with = "black")]
    pub white: bool,

    /// 黒背景
    #[arg(long)]
    pub black: bool,

    /// 波長ラベルを表示
    #[arg(long)]
    pub labels: bool,

    /// 波長 (nm) または元素記号
    #[arg(value_name = "WAVELENGTH_OR_ELEMENT", allow_negative_numbers = true)]
    pub tokens: Vec<String>,
}

impl ChartArgs {
    /// コマンドラインで指定された背景
    pub fn background(&self) -> Option<Background> {
        if self.white {
            Some(Background::White)
        } else if self.black {
            Some(Background::Black)
        } else {
            None
        }
    }

    /// 設定ファイルの値をコマンドラインの指定で上書き
    pub fn apply(&self, settings: &mut ChartSettings) {
        if let Some(background) = self.background() {
            settings.background = background;
        }
        if self.labels {
            settings.show_labels = true;
        }
    }

    /// 引数から波長リストを作る。指定が無ければデモ用の波長
    pub fn wavelengths(&self, lines: &SpectralLines) -> Result<Vec<f64>, SpectrumError> {
        if self.tokens.is_empty() {
            return Ok(DEMO_WAVELENGTHS.to_vec());
        }
        resolve_tokens(&self.tokens, lines)
    }
}

/// 波長と元素記号の混在した指定を波長リストに展開
pub fn resolve_tokens<S: AsRef<str>>(
    tokens: &[S],
    lines: &SpectralLines,
) -> Result<Vec<f64>, SpectrumError> {
    let mut wavelengths = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        if let Ok(value) = token.parse::<f64>() {
            if !value.is_finite() {
                return Err(SpectrumError::InvalidArgument(format!(
                    "wavelength must be finite: {token}"
                )));
            }
            wavelengths.push(value);
            continue;
        }

        let found = lines.wavelengths_of(token);
        if found.is_empty() {
            return Err(SpectrumError::UnknownElement {
                name: token.to_string(),
                known: lines.elements().join(", "),
            });
        }
        log::debug!("{}: {} 本の輝線", token, found.len());
        wavelengths.extend(found);
    }

    Ok(wavelengths)
}

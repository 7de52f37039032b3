//! スペクトル図の描画
//!
//! 波長ごとに縦線を1本描く。可視域内は `wavelength_to_rgb` の色、
//! 可視域外は変換を呼ばずに灰色で描く。

use image::{ImageBuffer, Rgb, RgbImage};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::common::colors::{is_visible, u32_to_rgb, wavelength_to_color_u32};
use crate::common::constants::*;
use crate::common::error::SpectrumError;
use crate::common::font::{draw_text, text_width, GLYPH_HEIGHT};

/// 背景モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Background {
    /// 黒背景 + 明るいラベル
    #[default]
    Black,
    /// 白背景 + 暗いラベル
    White,
}

impl Background {
    /// "black" 以外はすべて白背景
    pub fn from_name(name: &str) -> Self {
        if name == "black" {
            Background::Black
        } else {
            Background::White
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Background::Black => "black",
            Background::White => "white",
        }
    }

    pub fn fill_color(&self) -> u32 {
        match self {
            Background::Black => BLACK_BACKGROUND,
            Background::White => WHITE_BACKGROUND,
        }
    }

    pub fn label_color(&self) -> u32 {
        match self {
            Background::Black => LIGHT_LABEL,
            Background::White => DARK_LABEL,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Background::Black => Background::White,
            Background::White => Background::Black,
        }
    }
}

impl From<String> for Background {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Background> for String {
    fn from(background: Background) -> Self {
        background.name().to_string()
    }
}

impl std::fmt::Display for Background {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 描画設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub background: Background,
    /// キャンバスの大きさ（ピクセル）
    pub width: usize,
    pub height: usize,
    /// 横軸の表示範囲 (nm)
    pub x_min: f64,
    pub x_max: f64,
    /// 縦線の太さ（ピクセル）
    pub line_width: usize,
    /// 各線の下に波長を表示する
    pub show_labels: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            background: Background::default(),
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            x_min: X_MIN,
            x_max: X_MAX,
            line_width: LINE_WIDTH,
            show_labels: false,
        }
    }
}

impl ChartSettings {
    pub fn validate(&self) -> Result<(), SpectrumError> {
        if self.width == 0 {
            return Err(SpectrumError::InvalidSettings("width must be positive".into()));
        }
        if self.width > MAX_CANVAS_SIDE || self.height > MAX_CANVAS_SIDE {
            return Err(SpectrumError::InvalidSettings(format!(
                "canvas {}x{} exceeds {MAX_CANVAS_SIDE} pixels per side",
                self.width, self.height
            )));
        }
        if self.height <= LABEL_STRIP_HEIGHT {
            return Err(SpectrumError::InvalidSettings(format!(
                "height must be greater than {LABEL_STRIP_HEIGHT}"
            )));
        }
        if self.line_width == 0 || self.line_width > MAX_CANVAS_SIDE {
            return Err(SpectrumError::InvalidSettings(format!(
                "line_width must be in 1..={MAX_CANVAS_SIDE}"
            )));
        }
        if !(self.x_min.is_finite() && self.x_max.is_finite() && self.x_min < self.x_max) {
            return Err(SpectrumError::InvalidSettings(format!(
                "x range {}..{} is not a valid interval",
                self.x_min, self.x_max
            )));
        }
        Ok(())
    }
}

/// 波長ラベルの文字列（整数ならそのまま、それ以外は小数1桁）
pub fn format_wavelength(wavelength: f64) -> String {
    if wavelength.fract() == 0.0 {
        format!("{:.0}", wavelength)
    } else {
        format!("{:.1}", wavelength)
    }
}

/// スペクトル図
#[derive(Debug, Clone)]
pub struct SpectrumChart {
    settings: ChartSettings,
}

impl SpectrumChart {
    pub fn new(settings: ChartSettings) -> Result<Self, SpectrumError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    pub fn toggle_background(&mut self) {
        self.settings.background = self.settings.background.toggled();
    }

    pub fn toggle_labels(&mut self) {
        self.settings.show_labels = !self.settings.show_labels;
    }

    /// 縦線の色。可視域外は変換を通さず灰色
    pub fn marker_color(&self, wavelength: f64) -> u32 {
        if is_visible(wavelength) {
            wavelength_to_color_u32(wavelength)
        } else {
            OUT_OF_RANGE_GRAY
        }
    }

    /// 波長を横方向のピクセル位置に変換（表示範囲外は None）
    pub fn x_to_pixel(&self, wavelength: f64) -> Option<usize> {
        let s = &self.settings;
        if !(s.x_min <= wavelength && wavelength <= s.x_max) {
            return None;
        }
        let t = (wavelength - s.x_min) / (s.x_max - s.x_min);
        Some((t * (s.width - 1) as f64).round() as usize)
    }

    /// 縦線が占める列の範囲
    fn marker_columns(&self, px: usize) -> std::ops::Range<usize> {
        let start = px.saturating_sub(self.settings.line_width / 2);
        let end = (start + self.settings.line_width).min(self.settings.width);
        start..end
    }

    /// 縦線の下端（ラベル表示時は下に帯を空ける）
    fn plot_height(&self) -> usize {
        if self.settings.show_labels {
            self.settings.height - LABEL_STRIP_HEIGHT
        } else {
            self.settings.height
        }
    }

    /// 波長リストを描画して 0xRRGGBB のバッファを返す
    pub fn render(&self, wavelengths: &[f64]) -> Vec<u32> {
        let width = self.settings.width;
        let height = self.settings.height;
        let plot_height = self.plot_height();
        let background = self.settings.background.fill_color();

        // 列ごとの色。後に描いた線が上に重なる
        let mut columns: Vec<Option<u32>> = vec![None; width];
        let mut drawn = 0;
        for &wavelength in wavelengths {
            let Some(px) = self.x_to_pixel(wavelength) else {
                log::warn!("{} nm は表示範囲外のため描画しません", wavelength);
                continue;
            };
            if !is_visible(wavelength) {
                log::info!("{} nm は可視域外のため灰色で描画します", wavelength);
            }
            let color = self.marker_color(wavelength);
            for x in self.marker_columns(px) {
                columns[x] = Some(color);
            }
            drawn += 1;
        }

        let mut buffer = vec![background; width * height];
        buffer
            .par_chunks_mut(width)
            .take(plot_height)
            .for_each(|row| {
                for (pixel, column) in row.iter_mut().zip(&columns) {
                    if let Some(color) = column {
                        *pixel = *color;
                    }
                }
            });

        if self.settings.show_labels {
            self.draw_labels(&mut buffer, wavelengths);
        }

        log::debug!("スペクトル描画: {}/{} 本", drawn, wavelengths.len());
        buffer
    }

    fn draw_labels(&self, buffer: &mut [u32], wavelengths: &[f64]) {
        let width = self.settings.width;
        let height = self.settings.height;
        let color = self.settings.background.label_color();
        let label_y = height - LABEL_STRIP_HEIGHT + (LABEL_STRIP_HEIGHT - GLYPH_HEIGHT) / 2;

        for &wavelength in wavelengths {
            let Some(px) = self.x_to_pixel(wavelength) else {
                continue;
            };
            let label = format_wavelength(wavelength);
            let label_width = text_width(&label);
            // 線の中央に揃え、はみ出す場合は端に寄せる
            let label_x = px
                .saturating_sub(label_width / 2)
                .min(width.saturating_sub(label_width));
            draw_text(buffer, width, height, label_x, label_y, &label, color);
        }
    }

    /// バッファを画像に変換
    pub fn to_image(&self, buffer: &[u32]) -> Result<RgbImage, SpectrumError> {
        let width = self.settings.width;
        let height = self.settings.height;
        if buffer.len() != width * height {
            return Err(SpectrumError::InvalidArgument(format!(
                "buffer has {} pixels, expected {}x{}",
                buffer.len(),
                width,
                height
            )));
        }

        Ok(ImageBuffer::from_fn(width as u32, height as u32, |x, y| {
            let (r, g, b) = u32_to_rgb(buffer[(y as usize) * width + (x as usize)]);
            Rgb([r, g, b])
        }))
    }

    /// バッファを PNG として保存
    pub fn save_png(&self, buffer: &[u32], path: &Path) -> Result<(), SpectrumError> {
        let img = self.to_image(buffer)?;
        img.save(path)?;
        log::info!("画像を保存しました: {}", path.display());
        Ok(())
    }
}

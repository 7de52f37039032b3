//! 波長と色の変換関数
//!
//! 可視光の波長 (nm) から近似的な RGB を求める。
//! 区間ごとの線形補間 → 両端の減光係数 → ガンマ補正 (0.8) の順に計算する。

/// 可視域 (nm)
pub const VISIBLE_RANGE: (f64, f64) = (380.0, 750.0);

/// ガンマ補正の指数
pub const GAMMA: f64 = 0.8;

/// 最大輝度
pub const INTENSITY_MAX: f64 = 255.0;

/// 色相ランプの1区間（両端を含む閉区間）
#[derive(Clone, Copy)]
pub struct Band {
    pub start: f64,
    pub end: f64,
    channels: fn(f64) -> (f64, f64, f64),
}

impl Band {
    pub fn contains(&self, wavelength: f64) -> bool {
        self.start <= wavelength && wavelength <= self.end
    }

    /// この区間の式で生の (r, g, b) を計算（区間外でも式はそのまま評価する）
    pub fn raw(&self, wavelength: f64) -> (f64, f64, f64) {
        (self.channels)(wavelength)
    }
}

impl std::fmt::Debug for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Band[{}, {}]", self.start, self.end)
    }
}

fn violet_to_blue(w: f64) -> (f64, f64, f64) {
    (-(w - 440.0) / (440.0 - 380.0), 0.0, 1.0)
}

fn blue_to_cyan(w: f64) -> (f64, f64, f64) {
    (0.0, (w - 440.0) / (490.0 - 440.0), 1.0)
}

fn cyan_to_green(w: f64) -> (f64, f64, f64) {
    (0.0, 1.0, -(w - 510.0) / (510.0 - 490.0))
}

fn green_to_yellow(w: f64) -> (f64, f64, f64) {
    ((w - 510.0) / (580.0 - 510.0), 1.0, 0.0)
}

fn yellow_to_red(w: f64) -> (f64, f64, f64) {
    (1.0, -(w - 645.0) / (645.0 - 580.0), 0.0)
}

fn red(_w: f64) -> (f64, f64, f64) {
    (1.0, 0.0, 0.0)
}

/// 色相ランプ。境界の波長は先に並んでいる区間が優先される
pub const BANDS: [Band; 6] = [
    Band { start: 380.0, end: 440.0, channels: violet_to_blue },
    Band { start: 440.0, end: 490.0, channels: blue_to_cyan },
    Band { start: 490.0, end: 510.0, channels: cyan_to_green },
    Band { start: 510.0, end: 580.0, channels: green_to_yellow },
    Band { start: 580.0, end: 645.0, channels: yellow_to_red },
    Band { start: 645.0, end: 750.0, channels: red },
];

/// 可視域に入っているか（NaN は false）
pub fn is_visible(wavelength: f64) -> bool {
    VISIBLE_RANGE.0 <= wavelength && wavelength <= VISIBLE_RANGE.1
}

/// 生の (r, g, b) を計算。どの区間にも入らなければ (0, 0, 0)
pub fn raw_rgb(wavelength: f64) -> (f64, f64, f64) {
    BANDS
        .iter()
        .find(|band| band.contains(wavelength))
        .map(|band| band.raw(wavelength))
        .unwrap_or((0.0, 0.0, 0.0))
}

/// 可視域の両端で暗くするための係数
pub fn intensity_factor(wavelength: f64) -> f64 {
    if (380.0..=420.0).contains(&wavelength) {
        0.3 + 0.7 * (wavelength - 380.0) / (420.0 - 380.0)
    } else if (420.0..=645.0).contains(&wavelength) {
        1.0
    } else if (645.0..=750.0).contains(&wavelength) {
        0.3 + 0.7 * (750.0 - wavelength) / (750.0 - 645.0)
    } else {
        0.0
    }
}

/// ガンマ補正して 0-255 に丸める（偶数丸め）
#[inline]
fn to_channel(value: f64, factor: f64) -> u8 {
    // 0^0.8 = 0 なので可視域外でも NaN にはならない
    (INTENSITY_MAX * (value * factor).powf(GAMMA)).round_ties_even() as u8
}

/// 波長 (nm) から RGB を計算
///
/// 可視域外ではどの入力でも (0, 0, 0) を返す。パニックはしない。
pub fn wavelength_to_rgb(wavelength: f64) -> (u8, u8, u8) {
    let (r, g, b) = raw_rgb(wavelength);
    let factor = intensity_factor(wavelength);

    (
        to_channel(r, factor),
        to_channel(g, factor),
        to_channel(b, factor),
    )
}

/// 複数の波長をまとめて変換
pub fn wavelengths_to_rgb(wavelengths: &[f64]) -> Vec<(u8, u8, u8)> {
    wavelengths.iter().map(|&w| wavelength_to_rgb(w)).collect()
}

/// 波長から色を計算（u32形式: 0xRRGGBB）
pub fn wavelength_to_color_u32(wavelength: f64) -> u32 {
    rgb_to_u32(wavelength_to_rgb(wavelength))
}

#[inline]
pub fn rgb_to_u32((r, g, b): (u8, u8, u8)) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

#[inline]
pub fn u32_to_rgb(pixel: u32) -> (u8, u8, u8) {
    (
        ((pixel >> 16) & 0xFF) as u8,
        ((pixel >> 8) & 0xFF) as u8,
        (pixel & 0xFF) as u8,
    )
}

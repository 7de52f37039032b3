//! 可視光の波長を近似的な RGB に変換し、スペクトル図を描画するライブラリ

pub mod common;

pub use common::colors::{wavelength_to_rgb, wavelengths_to_rgb};
pub use common::error::SpectrumError;
pub use common::lines::{SpectralLine, SpectralLines};
pub use common::spectrum::{Background, ChartSettings, SpectrumChart};

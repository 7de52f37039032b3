//! 共通定数

/// スペクトル図の幅（10インチ × 100dpi 相当）
pub const CHART_WIDTH: usize = 1000;
/// スペクトル図の高さ（2インチ × 100dpi 相当）
pub const CHART_HEIGHT: usize = 200;

/// キャンバス1辺の上限（ピクセル）
pub const MAX_CANVAS_SIDE: usize = 16_384;

/// 横軸の表示範囲 (nm)
pub const X_MIN: f64 = 300.0;
pub const X_MAX: f64 = 800.0;

/// 縦線の太さ（ピクセル）
pub const LINE_WIDTH: usize = 2;

/// 可視域外の波長を描く色
pub const OUT_OF_RANGE_GRAY: u32 = 0x808080;

/// 背景色とラベル色
pub const BLACK_BACKGROUND: u32 = 0x000000;
pub const WHITE_BACKGROUND: u32 = 0xFFFFFF;
pub const LIGHT_LABEL: u32 = 0xCCCCCC;
pub const DARK_LABEL: u32 = 0x202020;

/// ラベル表示時に下端に確保する帯の高さ
pub const LABEL_STRIP_HEIGHT: usize = 12;

/// 波長を指定しなかったときに描画する例
pub const DEMO_WAVELENGTHS: [f64; 9] = [370.0, 400.0, 450.0, 500.0, 550.0, 600.0, 650.0, 700.0, 750.0];

/// カレントディレクトリで探す設定ファイル
pub const DEFAULT_CONFIG_FILE: &str = "spectrum.toml";

/// PNG出力のデフォルトファイル名
pub const DEFAULT_OUTPUT_FILE: &str = "spectrum.png";

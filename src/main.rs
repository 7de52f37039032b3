//! スペクトル図ビューア
//!
//! 引数で指定した波長（または元素記号の輝線）を縦線で表示する。
//!
//! 操作方法:
//!   - B キー: 背景の黒/白を切り替え
//!   - L キー: 波長ラベルの表示を切り替え
//!   - S キー: 現在の表示を画像として保存
//!   - Q / Escape キー: 終了

use anyhow::{Context, Result};
use clap::Parser;
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use spectrum::common::{
    args::ChartArgs,
    config::Config,
    spectrum::SpectrumChart,
};
use std::path::PathBuf;
use std::time::Instant;

/// ビューアの状態
struct ViewerState {
    chart: SpectrumChart,
    wavelengths: Vec<f64>,
    buffer: Vec<u32>,
    needs_redraw: bool,
    save_counter: u32,
}

impl ViewerState {
    fn new(chart: SpectrumChart, wavelengths: Vec<f64>) -> Self {
        let settings = chart.settings();
        let buffer = vec![settings.background.fill_color(); settings.width * settings.height];
        Self {
            chart,
            wavelengths,
            buffer,
            needs_redraw: true,
            save_counter: 0,
        }
    }

    fn width(&self) -> usize {
        self.chart.settings().width
    }

    fn height(&self) -> usize {
        self.chart.settings().height
    }

    fn redraw(&mut self) {
        let start = Instant::now();
        self.buffer = self.chart.render(&self.wavelengths);
        self.needs_redraw = false;
        println!(
            "再描画: {:.2?} | 背景: {} | ラベル: {}",
            start.elapsed(),
            self.chart.settings().background,
            if self.chart.settings().show_labels { "あり" } else { "なし" }
        );
    }

    fn save_image(&mut self) -> Result<()> {
        self.save_counter += 1;
        let filename = PathBuf::from(format!("spectrum_{:03}.png", self.save_counter));
        self.chart
            .save_png(&self.buffer, &filename)
            .with_context(|| format!("画像の保存に失敗しました: {}", filename.display()))?;
        println!("画像を保存しました: {}", filename.display());
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = ChartArgs::parse();

    let config = Config::load_or_default(args.config.as_deref())
        .context("設定ファイルの読み込みに失敗しました")?;
    let lines = config.spectral_lines();
    let wavelengths = args.wavelengths(&lines)?;

    let mut settings = config.chart.clone();
    args.apply(&mut settings);
    let chart = SpectrumChart::new(settings)?;

    println!("╔══════════════════════════════════════════╗");
    println!("║  スペクトル図ビューア                    ║");
    println!("╚══════════════════════════════════════════╝");
    println!();
    println!("操作方法:");
    println!("  - B キー: 背景の黒/白を切り替え");
    println!("  - L キー: 波長ラベルの表示を切り替え");
    println!("  - S キー: 現在の表示を画像として保存");
    println!("  - Q / Escape キー: 終了");
    println!();
    println!("波長 (nm): {:?}", wavelengths);

    let mut state = ViewerState::new(chart, wavelengths);

    let mut window = Window::new(
        "スペクトル図",
        state.width(),
        state.height(),
        WindowOptions {
            resize: false,
            ..WindowOptions::default()
        },
    )
    .context("ウィンドウの作成に失敗しました")?;

    window.set_target_fps(60);

    while window.is_open() && !window.is_key_down(Key::Escape) && !window.is_key_down(Key::Q) {
        if window.is_key_pressed(Key::B, KeyRepeat::No) {
            state.chart.toggle_background();
            state.needs_redraw = true;
        }

        if window.is_key_pressed(Key::L, KeyRepeat::No) {
            state.chart.toggle_labels();
            state.needs_redraw = true;
        }

        if window.is_key_pressed(Key::S, KeyRepeat::No) {
            if let Err(e) = state.save_image() {
                log::error!("{:#}", e);
            }
        }

        if state.needs_redraw {
            state.redraw();
        }

        window
            .update_with_buffer(&state.buffer, state.width(), state.height())
            .context("バッファの更新に失敗しました")?;
    }

    println!("終了しました");
    Ok(())
}

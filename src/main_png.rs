//! スペクトル図を PNG に書き出す（ウィンドウなし）

use anyhow::{Context, Result};
use clap::Parser;
use spectrum::common::{
    args::ChartArgs,
    config::Config,
    constants::DEFAULT_OUTPUT_FILE,
    spectrum::SpectrumChart,
};
use std::path::PathBuf;
use std::time::Instant;

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

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));

    let start = Instant::now();
    let buffer = chart.render(&wavelengths);
    chart
        .save_png(&buffer, &output)
        .with_context(|| format!("画像の保存に失敗しました: {}", output.display()))?;

    println!(
        "{} 本のスペクトル線を描画しました: {} ({:.2?})",
        wavelengths.len(),
        output.display(),
        start.elapsed()
    );
    Ok(())
}

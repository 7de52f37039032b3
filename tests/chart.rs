use clap::Parser;
use spectrum::common::{
    args::ChartArgs,
    colors::{is_visible, wavelength_to_rgb},
    config::Config,
    constants::{DEMO_WAVELENGTHS, OUT_OF_RANGE_GRAY},
};
use spectrum::{Background, ChartSettings, SpectrumChart};

fn args(list: &[&str]) -> ChartArgs {
    ChartArgs::try_parse_from(std::iter::once("spectrum").chain(list.iter().copied())).unwrap()
}

#[test]
fn demo_chart_uses_mapper_colors_and_gray_fallback() {
    let chart = SpectrumChart::new(ChartSettings::default()).unwrap();
    let buffer = chart.render(&DEMO_WAVELENGTHS);

    for w in DEMO_WAVELENGTHS {
        let px = chart.x_to_pixel(w).unwrap();
        let (r, g, b) = wavelength_to_rgb(w);
        let expected = if is_visible(w) {
            ((r as u32) << 16) | ((g as u32) << 8) | b as u32
        } else {
            OUT_OF_RANGE_GRAY
        };
        assert_eq!(buffer[px], expected, "wavelength {w}");
    }
}

#[test]
fn element_lines_render_to_png() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("hydrogen.png");

    let parsed = args(&["--white", "--labels", "H"]);
    let config = Config::default();
    let wavelengths = parsed.wavelengths(&config.spectral_lines()).unwrap();
    assert_eq!(wavelengths.len(), 5);

    let mut settings = config.chart.clone();
    parsed.apply(&mut settings);
    assert_eq!(settings.background, Background::White);

    let chart = SpectrumChart::new(settings).unwrap();
    let buffer = chart.render(&wavelengths);
    chart.save_png(&buffer, &output).unwrap();

    let img = image::open(&output).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (1000, 200));
    let px = chart.x_to_pixel(656.28).unwrap() as u32;
    let (r, g, b) = wavelength_to_rgb(656.28);
    assert_eq!(img.get_pixel(px, 0).0, [r, g, b]);
}

#[test]
fn config_file_drives_the_chart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spectrum.toml");
    std::fs::write(
        &path,
        r#"
[chart]
background = "white"
width = 250
height = 50
line_width = 1

[[lines]]
element = "Li"
wavelength = 670.78
"#,
    )
    .unwrap();

    let config = Config::load_or_default(Some(&path)).unwrap();
    let wavelengths = args(&["Li"])
        .wavelengths(&config.spectral_lines())
        .unwrap();
    let chart = SpectrumChart::new(config.chart).unwrap();
    let buffer = chart.render(&wavelengths);

    assert_eq!(buffer.len(), 250 * 50);
    let lit = buffer.iter().filter(|&&p| p != 0xFFFFFF).count();
    assert_eq!(lit, 50);
}

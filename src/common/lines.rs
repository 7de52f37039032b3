//! 元素の輝線表
//!
//! グローバルな表は持たず、`SpectralLines` を値として必要な所へ渡す。

use serde::{Deserialize, Serialize};

/// 1本の輝線
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectralLine {
    /// 元素記号 (例: "H", "Na")
    pub element: String,
    /// 波長 (nm)
    pub wavelength: f64,
}

impl SpectralLine {
    pub fn new(element: impl Into<String>, wavelength: f64) -> Self {
        Self {
            element: element.into(),
            wavelength,
        }
    }
}

/// 空気中の代表的な輝線 (nm)
const BUILTIN: &[(&str, f64)] = &[
    // 水素 (バルマー系列)
    ("H", 656.28),
    ("H", 486.13),
    ("H", 434.05),
    ("H", 410.17),
    ("H", 397.01),
    // ヘリウム
    ("He", 706.52),
    ("He", 667.82),
    ("He", 587.56),
    ("He", 501.57),
    ("He", 492.19),
    ("He", 471.31),
    ("He", 447.15),
    // ナトリウム D線
    ("Na", 589.59),
    ("Na", 588.99),
    // 水銀
    ("Hg", 579.07),
    ("Hg", 576.96),
    ("Hg", 546.07),
    ("Hg", 435.83),
    ("Hg", 404.66),
    // ネオン
    ("Ne", 703.24),
    ("Ne", 640.22),
    ("Ne", 633.44),
    ("Ne", 614.31),
    ("Ne", 585.25),
];

/// 輝線の検索表（不変）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpectralLines {
    lines: Vec<SpectralLine>,
}

impl SpectralLines {
    pub fn new(lines: Vec<SpectralLine>) -> Self {
        Self { lines }
    }

    /// 組み込みの輝線表
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN
                .iter()
                .map(|&(element, wavelength)| SpectralLine::new(element, wavelength))
                .collect(),
        )
    }

    /// 輝線を追加した新しい表を返す
    pub fn with_lines(mut self, extra: impl IntoIterator<Item = SpectralLine>) -> Self {
        self.lines.extend(extra);
        self
    }

    /// 元素記号から波長一覧を取得（大文字小文字は区別しない）
    pub fn wavelengths_of(&self, element: &str) -> Vec<f64> {
        self.lines
            .iter()
            .filter(|line| line.element.eq_ignore_ascii_case(element))
            .map(|line| line.wavelength)
            .collect()
    }

    /// 登録されている元素記号（登録順、重複なし）
    pub fn elements(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for line in &self.lines {
            if !names.iter().any(|n| n.eq_ignore_ascii_case(&line.element)) {
                names.push(&line.element);
            }
        }
        names
    }
}

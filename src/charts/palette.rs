//! Chart Palette Module
//! Fixed colors and the continuous color scales offered for the state map.

use crate::data::Metric;
use egui::Color32;

/// Categorical palette for per-state markers.
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(26, 188, 156),  // Teal
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(0, 188, 212),   // Cyan
    Color32::from_rgb(121, 85, 72),   // Brown
    Color32::from_rgb(96, 125, 139),  // Blue Grey
];

pub const GREEN: Color32 = Color32::from_rgb(0, 128, 0);
pub const BLUE: Color32 = Color32::from_rgb(0, 0, 255);
pub const RED: Color32 = Color32::from_rgb(255, 0, 0);

/// Bar color for a "Top 10" metric.
pub fn metric_color(metric: Metric) -> Color32 {
    match metric {
        Metric::Profit => GREEN,
        Metric::Revenue => BLUE,
        Metric::Expenses => RED,
        Metric::Employees => PALETTE[9],
    }
}

/// Color for the n-th category, cycling through the palette.
pub fn category_color(index: usize) -> Color32 {
    PALETTE[index % PALETTE.len()]
}

/// Continuous color scales for the choropleth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorTheme {
    #[default]
    Plasma,
    Rainbow,
    Mint,
    Thermal,
    Icefire,
}

impl ColorTheme {
    pub const ALL: [ColorTheme; 5] = [
        ColorTheme::Plasma,
        ColorTheme::Rainbow,
        ColorTheme::Mint,
        ColorTheme::Thermal,
        ColorTheme::Icefire,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColorTheme::Plasma => "plasma",
            ColorTheme::Rainbow => "rainbow",
            ColorTheme::Mint => "mint",
            ColorTheme::Thermal => "thermal",
            ColorTheme::Icefire => "icefire",
        }
    }

    fn stops(&self) -> &'static [[u8; 3]] {
        match self {
            ColorTheme::Plasma => &[
                [13, 8, 135],
                [126, 3, 168],
                [204, 71, 120],
                [248, 149, 64],
                [240, 249, 33],
            ],
            ColorTheme::Rainbow => &[
                [150, 0, 90],
                [0, 0, 200],
                [0, 25, 255],
                [0, 152, 255],
                [44, 255, 150],
                [151, 255, 0],
                [255, 234, 0],
                [255, 111, 0],
                [255, 0, 0],
            ],
            ColorTheme::Mint => &[
                [228, 241, 225],
                [180, 217, 204],
                [137, 192, 182],
                [99, 166, 160],
                [68, 140, 138],
                [40, 114, 116],
                [13, 88, 95],
            ],
            ColorTheme::Thermal => &[
                [3, 35, 51],
                [53, 50, 155],
                [126, 77, 143],
                [193, 100, 121],
                [246, 139, 69],
                [246, 211, 70],
                [231, 250, 90],
            ],
            ColorTheme::Icefire => &[
                [180, 255, 255],
                [108, 205, 255],
                [44, 121, 218],
                [27, 44, 98],
                [30, 30, 30],
                [98, 30, 39],
                [178, 38, 32],
                [242, 112, 44],
                [255, 207, 112],
            ],
        }
    }

    /// Color at `t` in `[0, 1]` (clamped), linearly interpolated between stops.
    pub fn sample(&self, t: f64) -> Color32 {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let pos = t * (stops.len() - 1) as f64;
        let lower = pos.floor() as usize;
        let upper = (lower + 1).min(stops.len() - 1);
        let frac = pos - lower as f64;

        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
        let (a, b) = (stops[lower], stops[upper]);
        Color32::from_rgb(lerp(a[0], b[0]), lerp(a[1], b[1]), lerp(a[2], b[2]))
    }
}

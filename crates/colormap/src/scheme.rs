//! Color schemes and multi-stop interpolation engine.

/// RGB color as (r, g, b) with values in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Self = Self { r: 255, g: 255, b: 255 };
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
}

/// A color stop: position in [0, 1] mapped to an RGB color.
#[derive(Debug, Clone, Copy)]
pub struct ColorStop {
    pub t: f64,
    pub color: Rgb,
}

impl ColorStop {
    pub const fn new(t: f64, r: u8, g: u8, b: u8) -> Self {
        Self {
            t,
            color: Rgb::new(r, g, b),
        }
    }
}

/// Available color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    /// White background, black foreground; threshold at t = 0.5
    #[default]
    Binary,
    /// Black -> White linear ramp
    Grayscale,
    /// Dark blue -> Yellow -> Red (occupancy emphasis)
    Heat,
}

impl ColorScheme {
    /// All available schemes, useful for CLI choices.
    pub const ALL: &[ColorScheme] = &[Self::Binary, Self::Grayscale, Self::Heat];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Binary => "Binary",
            Self::Grayscale => "Grayscale",
            Self::Heat => "Heat",
        }
    }
}

// ─── Color stop definitions ────────────────────────────────────────────

const HEAT_STOPS: &[ColorStop] = &[
    ColorStop::new(0.00, 20, 24, 82),
    ColorStop::new(0.35, 120, 40, 110),
    ColorStop::new(0.65, 230, 120, 40),
    ColorStop::new(1.00, 250, 235, 80),
];

// ─── Interpolation engine ──────────────────────────────────────────────

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_color(c1: Rgb, c2: Rgb, t: f64) -> Rgb {
    Rgb::new(
        lerp(c1.r as f64, c2.r as f64, t).round() as u8,
        lerp(c1.g as f64, c2.g as f64, t).round() as u8,
        lerp(c1.b as f64, c2.b as f64, t).round() as u8,
    )
}

fn multi_stop(stops: &[ColorStop], t: f64) -> Rgb {
    if t <= 0.0 {
        return stops[0].color;
    }
    if t >= 1.0 {
        return stops[stops.len() - 1].color;
    }
    for i in 1..stops.len() {
        if t <= stops[i].t {
            let ratio = (t - stops[i - 1].t) / (stops[i].t - stops[i - 1].t);
            return lerp_color(stops[i - 1].color, stops[i].color, ratio);
        }
    }
    stops[stops.len() - 1].color
}

/// Evaluate a color scheme at normalized position `t` ∈ [0, 1].
///
/// `Binary` thresholds at 0.5: empty cells render white, filled cells black,
/// matching the usual presentation of a rasterized boundary. The other
/// schemes interpolate.
pub fn evaluate(scheme: ColorScheme, t: f64) -> Rgb {
    match scheme {
        ColorScheme::Binary => {
            if t < 0.5 {
                Rgb::WHITE
            } else {
                Rgb::BLACK
            }
        }
        ColorScheme::Grayscale => {
            let v = (t.clamp(0.0, 1.0) * 255.0).round() as u8;
            Rgb::new(v, v, v)
        }
        ColorScheme::Heat => multi_stop(HEAT_STOPS, t),
    }
}

//! Color schemes and the multi-stop interpolation engine.

use std::fmt;
use std::str::FromStr;

use heatstamp_core::{Error, Result};

/// RGBA color with channels in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from `0xRRGGBB`.
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
            a: 255,
        }
    }

    /// Transparent black, the background low heat fades into.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A color stop: position in [0, 1] mapped to an RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(t: f32, color: Rgba) -> Self {
        Self { t, color }
    }

    /// Opaque stop from `0xRRGGBB`.
    pub const fn hex(t: f32, rgb: u32) -> Self {
        Self {
            t,
            color: Rgba::from_hex(rgb),
        }
    }
}

/// How a scheme turns a normalized heat value into a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpolationMode {
    /// Color of the nearest stop at or below `t`; hard bands
    Discrete,
    /// Linear interpolation between the bracketing stops
    Soft,
    /// Soft, fading into the transparent background near zero heat
    Mixed,
    /// Mixed, after an exponential curve that spends more of the ramp on low heat
    MixedExp,
}

impl InterpolationMode {
    pub const ALL: &'static [InterpolationMode] = &[
        Self::Discrete,
        Self::Soft,
        Self::Mixed,
        Self::MixedExp,
    ];

    /// Identifier suffix used in the scheme catalog.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Discrete => "discrete",
            Self::Soft => "soft",
            Self::Mixed => "mixed",
            Self::MixedExp => "mixed_exp",
        }
    }
}

impl fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterpolationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "discrete" => Ok(Self::Discrete),
            "soft" => Ok(Self::Soft),
            "mixed" => Ok(Self::Mixed),
            "mixed_exp" | "mixed-exp" => Ok(Self::MixedExp),
            _ => Err(Error::NotFound(format!("interpolation mode '{s}'"))),
        }
    }
}

/// Heat below this fraction of the maximum fades toward the background in
/// the mixed modes.
pub const MIXED_FADE: f32 = 0.05;

/// Gain of the exponential curve used by [`InterpolationMode::MixedExp`].
pub const EXP_GAIN: f32 = 4.0;

/// A named multi-stop gradient.
///
/// Stops must be sorted by position, starting at 0 and ending at 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    name: &'static str,
    mode: InterpolationMode,
    stops: &'static [ColorStop],
}

impl ColorScheme {
    /// Build a scheme. Use [`ColorScheme::validate`] for stops that do not
    /// come from the built-in catalog.
    pub const fn new(name: &'static str, mode: InterpolationMode, stops: &'static [ColorStop]) -> Self {
        Self { name, mode, stops }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn mode(&self) -> InterpolationMode {
        self.mode
    }

    pub fn stops(&self) -> &'static [ColorStop] {
        self.stops
    }

    /// Check the stop invariants: at least one stop, ascending positions,
    /// first at 0 and last at 1.
    pub fn validate(&self) -> Result<()> {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Err(Error::invalid_argument(
                "stops",
                self.name,
                "color scheme needs at least one stop",
            ));
        };
        if first.t != 0.0 || last.t != 1.0 {
            return Err(Error::invalid_argument(
                "stops",
                self.name,
                format!("stops must span [0, 1], got [{}, {}]", first.t, last.t),
            ));
        }
        if self.stops.windows(2).any(|w| w[1].t < w[0].t) {
            return Err(Error::invalid_argument(
                "stops",
                self.name,
                "stop positions must be ascending",
            ));
        }
        Ok(())
    }

    /// Color at normalized position `t`, clamped to [0, 1] (NaN counts as 0).
    pub fn evaluate(&self, t: f32) -> Rgba {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self.mode {
            InterpolationMode::Discrete => discrete(self.stops, t),
            InterpolationMode::Soft => multi_stop(self.stops, t),
            InterpolationMode::Mixed => fade(multi_stop(self.stops, t), t),
            InterpolationMode::MixedExp => {
                let t = exp_curve(t);
                fade(multi_stop(self.stops, t), t)
            }
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// ─── Interpolation engine ──────────────────────────────────────────────

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Channels are truncated, not rounded.
fn lerp_color(c1: Rgba, c2: Rgba, t: f32) -> Rgba {
    Rgba::new(
        lerp(c1.r as f32, c2.r as f32, t) as u8,
        lerp(c1.g as f32, c2.g as f32, t) as u8,
        lerp(c1.b as f32, c2.b as f32, t) as u8,
        lerp(c1.a as f32, c2.a as f32, t) as u8,
    )
}

fn multi_stop(stops: &[ColorStop], t: f32) -> Rgba {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Rgba::TRANSPARENT;
    };
    if t <= first.t {
        return first.color;
    }
    if t >= last.t {
        return last.color;
    }
    for i in 1..stops.len() {
        if t <= stops[i].t {
            let span = stops[i].t - stops[i - 1].t;
            if span <= 0.0 {
                return stops[i].color;
            }
            let ratio = (t - stops[i - 1].t) / span;
            return lerp_color(stops[i - 1].color, stops[i].color, ratio);
        }
    }
    last.color
}

fn discrete(stops: &[ColorStop], t: f32) -> Rgba {
    stops
        .iter()
        .take_while(|stop| stop.t <= t)
        .last()
        .or(stops.first())
        .map_or(Rgba::TRANSPARENT, |stop| stop.color)
}

/// Blend toward the transparent background over the lowest [`MIXED_FADE`] of heat.
fn fade(color: Rgba, t: f32) -> Rgba {
    let k = (t / MIXED_FADE).min(1.0);
    if k >= 1.0 {
        return color;
    }
    lerp_color(Rgba::TRANSPARENT, color, k)
}

/// Concave remap of [0, 1] onto itself.
fn exp_curve(t: f32) -> f32 {
    let norm = 1.0 - (-EXP_GAIN).exp();
    ((1.0 - (-EXP_GAIN * t).exp()) / norm).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAY: &[ColorStop] = &[
        ColorStop::new(0.0, Rgba::new(0, 0, 0, 255)),
        ColorStop::new(1.0, Rgba::new(255, 255, 255, 255)),
    ];

    const THREE: &[ColorStop] = &[
        ColorStop::hex(0.0, 0x000000),
        ColorStop::hex(0.5, 0x808080),
        ColorStop::hex(1.0, 0xffffff),
    ];

    #[test]
    fn soft_endpoints_and_midpoint() {
        let s = ColorScheme::new("gray", InterpolationMode::Soft, GRAY);
        assert_eq!(s.evaluate(0.0), Rgba::new(0, 0, 0, 255));
        assert_eq!(s.evaluate(1.0), Rgba::new(255, 255, 255, 255));
        assert_eq!(s.evaluate(0.5), Rgba::new(127, 127, 127, 255));
        assert_eq!(s.evaluate(0.75), Rgba::new(191, 191, 191, 255));
    }

    #[test]
    fn clamping_outside_unit_range() {
        let s = ColorScheme::new("gray", InterpolationMode::Soft, GRAY);
        assert_eq!(s.evaluate(-0.5), s.evaluate(0.0));
        assert_eq!(s.evaluate(1.5), s.evaluate(1.0));
        assert_eq!(s.evaluate(f32::NAN), s.evaluate(0.0));
    }

    #[test]
    fn discrete_picks_lower_stop() {
        let s = ColorScheme::new("bands", InterpolationMode::Discrete, THREE);
        assert_eq!(s.evaluate(0.0), Rgba::from_hex(0x000000));
        assert_eq!(s.evaluate(0.49), Rgba::from_hex(0x000000));
        assert_eq!(s.evaluate(0.5), Rgba::from_hex(0x808080));
        assert_eq!(s.evaluate(0.99), Rgba::from_hex(0x808080));
        assert_eq!(s.evaluate(1.0), Rgba::from_hex(0xffffff));
    }

    #[test]
    fn soft_uses_bracketing_stops() {
        let s = ColorScheme::new("three", InterpolationMode::Soft, THREE);
        // halfway between 0x80 and 0xff
        assert_eq!(s.evaluate(0.75), Rgba::new(191, 191, 191, 255));
        assert_eq!(s.evaluate(0.25), Rgba::new(64, 64, 64, 255));
    }

    #[test]
    fn mixed_fades_low_heat() {
        let s = ColorScheme::new("gray", InterpolationMode::Mixed, GRAY);
        assert_eq!(s.evaluate(0.0), Rgba::TRANSPARENT);
        let low = s.evaluate(MIXED_FADE / 2.0);
        assert!(low.a > 0 && low.a < 255);
        assert_eq!(s.evaluate(0.5), Rgba::new(127, 127, 127, 255));
        assert_eq!(s.evaluate(1.0), Rgba::new(255, 255, 255, 255));
    }

    #[test]
    fn mixed_exp_biases_toward_high_colors() {
        let mixed = ColorScheme::new("gray", InterpolationMode::Mixed, GRAY);
        let exp = ColorScheme::new("gray", InterpolationMode::MixedExp, GRAY);
        assert_eq!(exp.evaluate(0.0), Rgba::TRANSPARENT);
        assert_eq!(exp.evaluate(1.0), mixed.evaluate(1.0));
        for t in [0.1f32, 0.25, 0.5, 0.75] {
            assert!(exp.evaluate(t).r > mixed.evaluate(t).r, "t = {t}");
        }
    }

    #[test]
    fn exp_curve_is_monotonic() {
        let mut prev = exp_curve(0.0);
        assert_eq!(prev, 0.0);
        for i in 1..=100 {
            let v = exp_curve(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
        assert!((prev - 1.0).abs() < 1e-6);
    }

    #[test]
    fn validate_checks_stops() {
        assert!(ColorScheme::new("ok", InterpolationMode::Soft, THREE).validate().is_ok());
        const SHORT: &[ColorStop] = &[ColorStop::hex(0.0, 0), ColorStop::hex(0.9, 0)];
        assert!(ColorScheme::new("short", InterpolationMode::Soft, SHORT).validate().is_err());
        const UNSORTED: &[ColorStop] = &[
            ColorStop::hex(0.0, 0),
            ColorStop::hex(0.7, 0),
            ColorStop::hex(0.3, 0),
            ColorStop::hex(1.0, 0),
        ];
        assert!(ColorScheme::new("unsorted", InterpolationMode::Soft, UNSORTED).validate().is_err());
        assert!(ColorScheme::new("empty", InterpolationMode::Soft, &[]).validate().is_err());
    }

    #[test]
    fn mode_parsing() {
        for &mode in InterpolationMode::ALL {
            assert_eq!(mode.as_str().parse::<InterpolationMode>().unwrap(), mode);
        }
        assert!("smooth".parse::<InterpolationMode>().is_err());
    }
}

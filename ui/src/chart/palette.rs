//! Continuous color scale used by the heatmap visual map.

/// Pale yellow through deep red.
pub const HEAT_PALETTE: [&str; 6] = [
    "#ffffcc", "#fee090", "#fdae61", "#f46d43", "#d73027", "#a50026",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|part| u8::from_str_radix(part, 16).ok())
        };
        Some(Self(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| {
            let value = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            value.round().clamp(0.0, 255.0) as u8
        };
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

/// Linear map from `[min, max]` onto the palette stops.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    min: f64,
    max: f64,
    stops: Vec<Rgb>,
}

impl ColorScale {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            stops: HEAT_PALETTE.iter().filter_map(|hex| Rgb::from_hex(hex)).collect(),
        }
    }

    pub fn stops(&self) -> &[Rgb] {
        &self.stops
    }

    /// Position of `value` in `[0, 1]`. A zero-width range sits in the middle.
    pub fn position(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span.is_nan() || span <= 0.0 {
            return 0.5;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    pub fn color_at(&self, value: f64) -> Rgb {
        let Some(last) = self.stops.len().checked_sub(1) else {
            return Rgb(0, 0, 0);
        };
        let scaled = self.position(value) * last as f64;
        let lower = (scaled.floor() as usize).min(last);
        let upper = (lower + 1).min(last);
        let t = scaled - lower as f64;
        match (self.stops.get(lower), self.stops.get(upper)) {
            (Some(a), Some(b)) => a.lerp(*b, t),
            _ => Rgb(0, 0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip_of_palette() {
        for hex in HEAT_PALETTE {
            assert_eq!(Rgb::from_hex(hex).unwrap().to_hex(), hex);
        }
        assert!(Rgb::from_hex("ffffff").is_none());
        assert!(Rgb::from_hex("#fff").is_none());
    }

    #[test]
    fn endpoints_hit_first_and_last_stop() {
        let scale = ColorScale::new(10.0, 20.0);
        assert_eq!(scale.color_at(10.0).to_hex(), "#ffffcc");
        assert_eq!(scale.color_at(20.0).to_hex(), "#a50026");
        // Out-of-range values clamp.
        assert_eq!(scale.color_at(-5.0).to_hex(), "#ffffcc");
        assert_eq!(scale.color_at(99.0).to_hex(), "#a50026");
    }

    #[test]
    fn interior_stops_are_exact() {
        let scale = ColorScale::new(0.0, 5.0);
        assert_eq!(scale.color_at(2.0).to_hex(), "#fdae61");
        assert_eq!(scale.color_at(4.0).to_hex(), "#d73027");
    }

    #[test]
    fn flat_range_maps_to_middle() {
        let scale = ColorScale::new(3.0, 3.0);
        assert!((scale.position(3.0) - 0.5).abs() < f64::EPSILON);
        // Halfway between #fdae61 and #f46d43.
        assert_eq!(scale.color_at(3.0), Rgb(249, 142, 82));
    }

    #[test]
    fn tiny_ranges_still_spread_across_palette() {
        let scale = ColorScale::new(1e-17, 3e-17);
        assert_eq!(scale.color_at(1e-17).to_hex(), "#ffffcc");
        assert_eq!(scale.color_at(3e-17).to_hex(), "#a50026");
    }
}

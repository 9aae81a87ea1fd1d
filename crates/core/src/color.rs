//! Color helpers: hex parsing, interpolation, vignette attenuation.
//!
//! These are pure numeric functions so the fade math can be tested without a
//! live terminal.

use tui_glitch_types::{Rgb, VIGNETTE_KNEE};

/// Parse a `#rgb` or `#rrggbb` hex string (leading `#` optional).
pub fn parse_hex(hex: &str) -> Option<Rgb> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    match hex.len() {
        // Shorthand: each nibble doubled, #1af => #11aaff.
        3 => {
            let mut it = hex.chars();
            let r = it.next()?.to_digit(16)? as u8;
            let g = it.next()?.to_digit(16)? as u8;
            let b = it.next()?.to_digit(16)? as u8;
            Some(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

/// Linear interpolation between two colors at `factor` in [0,1].
///
/// Each channel is interpolated independently and rounded to the nearest
/// integer, so `factor = 1.0` lands exactly on `end`.
pub fn interpolate(start: Rgb, end: Rgb, factor: f32) -> Rgb {
    let lerp = |a: u8, b: u8| -> u8 {
        let v = a as f32 + (b as f32 - a as f32) * factor;
        v.round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(
        lerp(start.r, end.r),
        lerp(start.g, end.g),
        lerp(start.b, end.b),
    )
}

/// Scale a color's brightness by `factor` in [0,1].
pub fn scale(color: Rgb, factor: f32) -> Rgb {
    interpolate(Rgb::BLACK, color, factor.clamp(0.0, 1.0))
}

/// Outer vignette attenuation at normalized distance `nd` from the center
/// (0 = center, 1 = farthest corner). Full brightness until the knee, then a
/// linear fade to black at the edge.
pub fn outer_vignette(nd: f32) -> f32 {
    if nd <= VIGNETTE_KNEE {
        1.0
    } else {
        (1.0 - (nd - VIGNETTE_KNEE) / (1.0 - VIGNETTE_KNEE)).max(0.0)
    }
}

/// Center vignette attenuation: darkest at the center, full brightness from
/// the knee outward.
pub fn center_vignette(nd: f32) -> f32 {
    if nd >= VIGNETTE_KNEE {
        1.0
    } else {
        0.2 + 0.8 * (nd / VIGNETTE_KNEE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_hex() {
        assert_eq!(parse_hex("#61b3dc"), Some(Rgb::new(0x61, 0xb3, 0xdc)));
        assert_eq!(parse_hex("ffffff"), Some(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn parses_shorthand_hex() {
        assert_eq!(parse_hex("#111"), Some(Rgb::new(0x11, 0x11, 0x11)));
        assert_eq!(parse_hex("#fff"), Some(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("#gggggg"), None);
        assert_eq!(parse_hex(""), None);
    }

    #[test]
    fn midpoint_rounds_half_up() {
        // 127.5 rounds to 128 per channel.
        let mid = interpolate(Rgb::BLACK, Rgb::new(255, 255, 255), 0.5);
        assert_eq!(mid, Rgb::new(128, 128, 128));
    }

    #[test]
    fn interpolation_endpoints_are_exact() {
        let a = Rgb::new(17, 99, 201);
        let b = Rgb::new(240, 3, 64);
        assert_eq!(interpolate(a, b, 0.0), a);
        assert_eq!(interpolate(a, b, 1.0), b);
    }

    #[test]
    fn outer_vignette_dark_at_edge() {
        assert_eq!(outer_vignette(0.0), 1.0);
        assert_eq!(outer_vignette(0.6), 1.0);
        assert!(outer_vignette(0.8) < 1.0);
        assert!(outer_vignette(1.0).abs() < 1e-6);
    }

    #[test]
    fn center_vignette_dark_at_center() {
        assert!(center_vignette(0.0) < 0.3);
        assert_eq!(center_vignette(0.6), 1.0);
        assert_eq!(center_vignette(1.0), 1.0);
    }
}

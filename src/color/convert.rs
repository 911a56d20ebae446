// RGB <-> HSL on unrounded f64 triples.
//
// These are NOT the textbook formulas. HSL -> RGB splits its chroma bounds
// at lightness 49 rather than 50, RGB -> HSL splits saturation at a channel
// midpoint of 127 and picks the hue formula from the *minimum* channel.
// Existing colors and stored slots were produced by exactly this math, so
// keep it bit-for-bit, operation order included.

use crate::traits::float::Float;

/// Convert HSL (hue in degrees, saturation and lightness in percent) into an
/// RGB triple on the 0-255 scale. The result keeps its fraction and is not
/// clamped; for lightness in [49, 50) the minimum can dip slightly below 0.
#[must_use]
pub fn rgb_from_hsl(h: f64, s: f64, l: f64) -> [f64; 3] {
    // `%` keeps the sign like fmod, so -30 clamps to 0 instead of wrapping
    let h = (h % 360.0).clamp_domain(0.0, 360.0);
    let s = s.clamp_domain(0.0, 100.0);
    let l = l.clamp_domain(0.0, 100.0);

    let (max, min) = if l < 49.0 {
        (2.55 * (l + l * (s / 100.0)), 2.55 * (l - l * (s / 100.0)))
    } else {
        (
            2.55 * (l + (100.0 - l) * (s / 100.0)),
            2.55 * (l - (100.0 - l) * (s / 100.0)),
        )
    };

    match h {
        _ if h < 60.0 => [max, min + (max - min) * h / 60.0, min],
        _ if h < 120.0 => [min + (max - min) * (120.0 - h) / 60.0, max, min],
        _ if h < 180.0 => [min, max, min + (max - min) * (h - 120.0) / 60.0],
        _ if h < 240.0 => [min, min + (max - min) * (240.0 - h) / 60.0, max],
        _ if h < 300.0 => [min + (max - min) * (h - 240.0) / 60.0, min, max],
        _ => [max, min, min + (max - min) * (360.0 - h) / 60.0], // 300.0..=360.0
    }
}

/// Convert an RGB triple (0-255) into `[hue, saturation, lightness]` with
/// hue in [0, 360) and the other two in percent. Nothing is rounded.
#[must_use]
pub fn hsl_from_rgb(r: f64, g: f64, b: f64) -> [f64; 3] {
    let r = r.clamp_domain(0.0, 255.0);
    let g = g.clamp_domain(0.0, 255.0);
    let b = b.clamp_domain(0.0, 255.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    // branch order matters when two channels tie for the minimum
    let mut h = if max == min {
        0.0
    } else if min == b {
        60.0 * (g - r) / (max - min) + 60.0
    } else if min == r {
        60.0 * (b - g) / (max - min) + 180.0
    } else {
        60.0 * (r - b) / (max - min) + 300.0 // min == g
    };
    if h < 0.0 {
        h += 360.0;
    }

    let l = ((max + min) / 2.0) / 255.0 * 100.0;

    let mid = (max + min) / 2.0;
    let s = if mid <= 127.0 {
        if max == 0.0 && min == 0.0 {
            0.0
        } else {
            (max - min) / (max + min) * 100.0
        }
    } else if max == 255.0 && min == 255.0 {
        100.0
    } else {
        (max - min) / (510.0 - max - min) * 100.0
    };

    [h, s, l]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(actual: [f64; 3], expected: [f64; 3]) {
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-6, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn primaries_land_on_sector_boundaries() {
        assert_close(hsl_from_rgb(255.0, 0.0, 0.0), [0.0, 100.0, 50.0]);
        assert_close(hsl_from_rgb(0.0, 255.0, 0.0), [120.0, 100.0, 50.0]);
        assert_close(hsl_from_rgb(0.0, 0.0, 255.0), [240.0, 100.0, 50.0]);
    }

    #[test]
    fn secondaries() {
        assert_close(hsl_from_rgb(255.0, 255.0, 0.0), [60.0, 100.0, 50.0]);
        assert_close(hsl_from_rgb(0.0, 255.0, 255.0), [180.0, 100.0, 50.0]);
        assert_close(hsl_from_rgb(255.0, 0.0, 255.0), [300.0, 100.0, 50.0]);
    }

    #[test]
    fn grays_have_no_hue() {
        assert_close(hsl_from_rgb(0.0, 0.0, 0.0), [0.0, 0.0, 0.0]);
        assert_close(hsl_from_rgb(100.0, 100.0, 100.0), [0.0, 0.0, 100.0 / 255.0 * 100.0]);
        assert_close(hsl_from_rgb(200.0, 200.0, 200.0), [0.0, 0.0, 200.0 / 255.0 * 100.0]);
    }

    #[test]
    fn white_reports_full_saturation() {
        // max == min == 255 short-circuits to 100 on the bright side
        assert_close(hsl_from_rgb(255.0, 255.0, 255.0), [0.0, 100.0, 100.0]);
        assert_close(rgb_from_hsl(0.0, 100.0, 100.0), [255.0, 255.0, 255.0]);
    }

    #[test]
    fn default_slot_colors() {
        let [h, s, l] = hsl_from_rgb(180.0, 230.0, 230.0);
        assert_eq!([h.round(), s.round(), l.round()], [180.0, 50.0, 80.0]);
        let [h, s, l] = hsl_from_rgb(60.0, 160.0, 160.0);
        assert_eq!([h.round(), s.round(), l.round()], [180.0, 45.0, 43.0]);
    }

    #[test]
    fn saturation_splits_at_midpoint_127() {
        // midpoint 127 stays on the dark formula, 127.5 switches
        assert_close(hsl_from_rgb(254.0, 0.0, 0.0), [0.0, 100.0, 127.0 / 255.0 * 100.0]);
        let [_, s, _] = hsl_from_rgb(200.0, 55.0, 55.0);
        assert!((s - 145.0 / 255.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn lightness_splits_at_49() {
        // 48.9 uses l * s, 49 uses (100 - l) * s
        let dark = rgb_from_hsl(0.0, 100.0, 48.9);
        assert_close(dark, [2.55 * 97.8, 0.0, 0.0]);
        let bright = rgb_from_hsl(0.0, 100.0, 49.0);
        assert_close(bright, [255.0, -2.55 * 2.0, -2.55 * 2.0]);
    }

    #[test]
    fn hue_sectors() {
        assert_close(rgb_from_hsl(30.0, 100.0, 50.0), [255.0, 127.5, 0.0]);
        assert_close(rgb_from_hsl(90.0, 100.0, 50.0), [127.5, 255.0, 0.0]);
        assert_close(rgb_from_hsl(150.0, 100.0, 50.0), [0.0, 255.0, 127.5]);
        assert_close(rgb_from_hsl(210.0, 100.0, 50.0), [0.0, 127.5, 255.0]);
        assert_close(rgb_from_hsl(270.0, 100.0, 50.0), [127.5, 0.0, 255.0]);
        assert_close(rgb_from_hsl(330.0, 100.0, 50.0), [255.0, 0.0, 127.5]);
    }

    #[test]
    fn hue_reduces_modulo_then_clamps() {
        assert_close(rgb_from_hsl(480.0, 100.0, 50.0), rgb_from_hsl(120.0, 100.0, 50.0));
        assert_close(rgb_from_hsl(-30.0, 100.0, 50.0), rgb_from_hsl(0.0, 100.0, 50.0));
        assert_close(rgb_from_hsl(360.0, 100.0, 50.0), rgb_from_hsl(0.0, 100.0, 50.0));
    }

    #[test]
    fn out_of_range_and_nan_inputs_are_clamped() {
        assert_close(rgb_from_hsl(0.0, 250.0, 50.0), rgb_from_hsl(0.0, 100.0, 50.0));
        assert_close(rgb_from_hsl(f64::NAN, f64::NAN, f64::NAN), [0.0, 0.0, 0.0]);
        assert_close(hsl_from_rgb(f64::NAN, 300.0, -4.0), hsl_from_rgb(0.0, 255.0, 0.0));
    }

    proptest! {
        #[test]
        fn hsl_stays_in_range(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let [h, s, l] = hsl_from_rgb(r as f64, g as f64, b as f64);
            prop_assert!((0.0..360.0).contains(&h), "hue out of range: {}", h);
            prop_assert!((0.0..=100.0).contains(&s), "saturation out of range: {}", s);
            prop_assert!((0.0..=100.0).contains(&l), "lightness out of range: {}", l);
        }

        #[test]
        fn round_trip_within_one(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let [h, s, l] = hsl_from_rgb(r as f64, g as f64, b as f64);
            let back = rgb_from_hsl(h, s, l);

            let sum = r.max(g).max(b) as u16 + r.min(g).min(b) as u16;
            // the two breakpoints disagree for midpoints in [124.95, 127]
            let tolerance = if (250..=254).contains(&sum) { 6.0 } else { 1.0 };
            for (orig, got) in [r, g, b].iter().zip(back) {
                let got = got.clamp(0.0, 255.0).round();
                prop_assert!(
                    (got - *orig as f64).abs() <= tolerance,
                    "{:?} -> {:?} -> {:?}", (r, g, b), (h, s, l), back
                );
            }
        }
    }
}

//! Property-based tests for decoding, scoring and ordering
//!
//! Tests invariants that must hold for any color and any mask:
//! decoding reproduces the hex digits, the white/black masks reduce to
//! plain brightness, ratios stay balanced and the palette stays ordered.

use hexsort::{channel_ratio, dominance, read_palette, Color, Mask, Palette, Rgb};
use proptest::prelude::*;

fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    any::<[u8; 3]>().prop_map(Rgb)
}

fn mask_strategy() -> impl Strategy<Value = Mask> {
    prop_oneof![0..=7u8, any::<u8>()].prop_map(Mask::new)
}

proptest! {
    #[test]
    fn test_hex_decoding_reproduces_digits(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), upper in any::<bool>()) {
        let text = if upper {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        };

        let rgb = Rgb::from_hex(&text).unwrap();
        prop_assert_eq!(rgb, Rgb::new(r, g, b));
        prop_assert_eq!(rgb.to_hex(), text.to_lowercase());
    }

    #[test]
    fn test_decoding_never_panics(text in "#.{6,12}") {
        let _ = Rgb::from_hex(&text);
    }

    #[test]
    fn test_white_mask_scores_brightness(rgb in rgb_strategy()) {
        prop_assert_eq!(dominance(rgb, Mask::WHITE), f64::from(rgb.sum()));
    }

    #[test]
    fn test_black_mask_scores_negated_brightness(rgb in rgb_strategy()) {
        prop_assert_eq!(dominance(rgb, Mask::BLACK), -f64::from(rgb.sum()));
    }

    #[test]
    fn test_channel_ratio_is_symmetric(a in 0..=255u32, b in 0..=255u32) {
        let ratio = channel_ratio(a, b);
        prop_assert!((0.0..=1.0).contains(&ratio));
        if a > 0 && b > 0 {
            prop_assert_eq!(ratio, channel_ratio(b, a));
        }
        if a == b && a > 0 {
            prop_assert_eq!(ratio, 1.0);
        }
    }

    #[test]
    fn test_dominance_is_finite(rgb in rgb_strategy(), mask in mask_strategy()) {
        prop_assert!(dominance(rgb, mask).is_finite());
    }

    #[test]
    fn test_palette_is_sorted_and_stable(colors in prop::collection::vec(rgb_strategy(), 0..40), mask in mask_strategy()) {
        let palette: Palette = colors
            .iter()
            .enumerate()
            .map(|(i, rgb)| Color::new(format!("{} {}", rgb.to_hex(), i), *rgb, mask))
            .collect();

        prop_assert_eq!(palette.len(), colors.len());

        let entries: Vec<&Color> = palette.iter().collect();
        for pair in entries.windows(2) {
            prop_assert!(pair[0].score() >= pair[1].score());
            if pair[0].score() == pair[1].score() {
                let index = |c: &Color| -> usize {
                    c.hex().split(' ').nth(1).and_then(|i| i.parse().ok()).unwrap()
                };
                prop_assert!(index(pair[0]) < index(pair[1]));
            }
        }
    }

    #[test]
    fn test_reader_matches_direct_insertion(colors in prop::collection::vec(rgb_strategy(), 0..20), mask in mask_strategy()) {
        let input: String = colors.iter().map(|rgb| format!("{}\n", rgb.to_hex())).collect();
        let palette = read_palette(input.as_bytes(), mask).unwrap();

        let expected: Palette = colors.iter().map(|rgb| Color::new(rgb.to_hex(), *rgb, mask)).collect();
        let got: Vec<&str> = palette.iter().map(Color::hex).collect();
        let want: Vec<&str> = expected.iter().map(Color::hex).collect();
        prop_assert_eq!(got, want);
    }
}

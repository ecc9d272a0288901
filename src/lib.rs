//! Find the colours of a palette that are closest to a given RGB colour.
//!
//! ```
//! use closest_colors::{Color, Palette};
//!
//! let ranked = Palette::xterm256()
//!     .find_closest(&Color::rgb(173, 43, 82), 1)
//!     .unwrap();
//! assert_eq!(ranked[0].color.id, 125);
//! ```

pub mod closest;
pub use closest::{ColorLike, FindError, RankedColor, distance, find_closest, squared_distance};

pub mod colour;
pub use colour::Color;

pub mod palette;
pub use palette::{Palette, PaletteEntry, PaletteError};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rand::Rng;

    const TERM_COLORS: &str = include_str!("../testdata/term_colors.json");

    fn term_colors() -> Palette {
        Palette::from_json_reader(TERM_COLORS.as_bytes()).unwrap()
    }

    fn random_color<R: Rng>(rng: &mut R) -> Color {
        Color::rgb(
            rng.random_range(0..=255),
            rng.random_range(0..=255),
            rng.random_range(0..=255),
        )
    }

    #[test]
    fn test_single_result() {
        let palette = term_colors();
        let results = find_closest(&Color::rgb(173, 43, 82), 1, palette.entries()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].color.id, 125);
        assert_abs_diff_eq!(results[0].distance, 44.97, epsilon = 0.01);
    }

    #[test]
    fn test_multiple_results() {
        let palette = term_colors();
        let results = find_closest(&Color::rgb(99, 97, 25), 5, palette.entries()).unwrap();

        let ids: Vec<u32> = results.iter().map(|r| r.color.id).collect();
        assert_eq!(ids, [58, 94, 64, 3, 100]);

        let expected = [25.40, 43.87, 45.66, 49.26, 58.01];
        for (result, expected) in results.iter().zip(expected) {
            assert_abs_diff_eq!(result.distance, expected, epsilon = 0.01);
        }
    }

    #[test]
    fn test_count_out_of_range() {
        let palette = term_colors();
        let query = Color::rgb(173, 43, 82);
        assert_eq!(
            find_closest(&query, 0, palette.entries()),
            Err(FindError::InvalidCount { count: 0, len: 256 })
        );
        assert_eq!(
            find_closest(&query, 257, palette.entries()),
            Err(FindError::InvalidCount {
                count: 257,
                len: 256
            })
        );
        assert!(find_closest(&query, 1000, palette.entries()).is_err());
        assert_eq!(find_closest(&query, 256, palette.entries()).unwrap().len(), 256);
    }

    #[test]
    fn test_exact_duplicates_resolve_in_palette_order() {
        let palette = term_colors();
        let ids = |query: Color| -> Vec<u32> {
            find_closest(&query, 3, palette.entries())
                .unwrap()
                .iter()
                .map(|r| r.color.id)
                .collect()
        };
        assert_eq!(ids(Color::BLACK), [0, 16, 232]);
        assert_eq!(ids(Color::WHITE), [15, 231, 255]);
        assert_eq!(ids(Color::RED), [9, 196, 160]);
    }

    #[test]
    fn test_caller_types() {
        struct Swatch {
            label: &'static str,
            channels: (u8, u8, u8),
        }

        impl ColorLike for Swatch {
            fn channels(&self) -> (u8, u8, u8) {
                self.channels
            }
        }

        let swatches = [
            Swatch {
                label: "paper",
                channels: (250, 250, 240),
            },
            Swatch {
                label: "ink",
                channels: (20, 20, 30),
            },
        ];
        let results = find_closest(&Palette::xterm256().entries()[1], 1, &swatches).unwrap();
        assert_eq!(results[0].color.label, "ink");
    }

    #[test]
    fn fuzz_find_closest_properties() {
        let mut rng = rand::rng();

        for _ in 0..500 {
            let len = rng.random_range(1usize..40);
            let mut palette: Vec<Color> = (0..len).map(|_| random_color(&mut rng)).collect();
            if rng.random_bool(0.3) {
                // force duplicates
                let dup = palette[0];
                palette.push(dup);
            }
            let query = random_color(&mut rng);
            let count = rng.random_range(1..=palette.len());

            let results = find_closest(&query, count, &palette).unwrap();
            assert_eq!(results.len(), count);
            assert_eq!(results, find_closest(&query, count, &palette).unwrap());

            for pair in results.windows(2) {
                assert!(pair[0].distance <= pair[1].distance);
            }

            for result in &results {
                let (qr, qg, qb) = query.rgb;
                let (er, eg, eb) = result.color.rgb;
                let expected = ((f64::from(qr) - f64::from(er)).powi(2)
                    + (f64::from(qg) - f64::from(eg)).powi(2)
                    + (f64::from(qb) - f64::from(eb)).powi(2))
                .sqrt();
                assert_abs_diff_eq!(result.distance, expected, epsilon = 0.01);
            }

            // every result is a distinct palette slot
            let mut slots: Vec<usize> = results
                .iter()
                .map(|r| {
                    palette
                        .iter()
                        .position(|c| std::ptr::eq(c, r.color))
                        .unwrap()
                })
                .collect();
            slots.sort_unstable();
            slots.dedup();
            assert_eq!(slots.len(), count);

            // nothing left out is closer than the last result
            let worst = results[count - 1].distance;
            let closer = palette.iter().filter(|c| distance(&query, *c) < worst).count();
            assert!(closer < count);
        }
    }

    #[test]
    fn fuzz_single_entry_palette() {
        let mut rng = rand::rng();

        for _ in 0..200 {
            let entry = random_color(&mut rng);
            let query = if rng.random_bool(0.5) {
                entry
            } else {
                random_color(&mut rng)
            };
            let results = find_closest(&query, 1, std::slice::from_ref(&entry)).unwrap();
            assert_eq!(results.len(), 1);
            assert_eq!(*results[0].color, entry);
            assert_eq!(results[0].distance == 0.0, query == entry);
        }
    }
}

//! Target dimension computation
//!
//! Pure functions with no failure modes: missing inputs degrade to identity
//! behavior, never to an error. Rounding is half-away-from-zero on every
//! axis, floored at 1 pixel.

use image::imageops::FilterType;

use crate::config::ResizeMode;

/// Compute target dimensions for a source image under the given mode
pub fn compute_target_size(source_width: u32, source_height: u32, mode: &ResizeMode) -> (u32, u32) {
    match mode {
        ResizeMode::Percent { percent } => {
            let factor = percent.max(1.0) / 100.0;
            (
                scale_axis(source_width, factor),
                scale_axis(source_height, factor),
            )
        }
        ResizeMode::Dimensions {
            width,
            height,
            keep_aspect,
        } => {
            if !keep_aspect {
                // Independent per-axis override; unset axes are untouched
                return (
                    width.unwrap_or(source_width),
                    height.unwrap_or(source_height),
                );
            }
            match (width, height) {
                (Some(w), None) => {
                    let scale = f64::from(*w) / f64::from(source_width);
                    (*w, scale_axis(source_height, scale))
                }
                (None, Some(h)) => {
                    let scale = f64::from(*h) / f64::from(source_height);
                    (scale_axis(source_width, scale), *h)
                }
                (Some(w), Some(h)) => {
                    // Fit-within: the smaller ratio keeps both axes inside
                    // the requested bounds
                    let scale = (f64::from(*w) / f64::from(source_width))
                        .min(f64::from(*h) / f64::from(source_height));
                    (
                        scale_axis(source_width, scale),
                        scale_axis(source_height, scale),
                    )
                }
                (None, None) => (source_width, source_height),
            }
        }
    }
}

/// Pick the resample filter for a source -> target transition
///
/// Lanczos when any axis shrinks, bicubic otherwise. The trigger is a
/// single shrinking axis, not both.
pub fn resample_filter(
    source_width: u32,
    source_height: u32,
    target_width: u32,
    target_height: u32,
) -> FilterType {
    if target_width < source_width || target_height < source_height {
        FilterType::Lanczos3
    } else {
        FilterType::CatmullRom
    }
}

fn scale_axis(value: u32, factor: f64) -> u32 {
    let scaled = (f64::from(value) * factor).round() as u32;
    scaled.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percent(percent: f64) -> ResizeMode {
        ResizeMode::Percent { percent }
    }

    fn dimensions(width: Option<u32>, height: Option<u32>, keep_aspect: bool) -> ResizeMode {
        ResizeMode::Dimensions {
            width,
            height,
            keep_aspect,
        }
    }

    #[test]
    fn test_percent_halves() {
        assert_eq!(compute_target_size(800, 600, &percent(50.0)), (400, 300));
    }

    #[test]
    fn test_percent_rounds_half_away_from_zero() {
        // 5 * 0.5 = 2.5 rounds up, not to even
        assert_eq!(compute_target_size(5, 5, &percent(50.0)), (3, 3));
        assert_eq!(compute_target_size(3, 3, &percent(50.0)), (2, 2));
    }

    #[test]
    fn test_percent_clamps_below_one() {
        let clamped = compute_target_size(800, 600, &percent(0.5));
        let floor = compute_target_size(800, 600, &percent(1.0));
        assert_eq!(clamped, floor);
        assert_eq!(floor, (8, 6));
    }

    #[test]
    fn test_percent_floors_at_one_pixel() {
        assert_eq!(compute_target_size(10, 10, &percent(1.0)), (1, 1));
    }

    #[test]
    fn test_percent_upscale() {
        assert_eq!(compute_target_size(800, 600, &percent(200.0)), (1600, 1200));
    }

    #[test]
    fn test_width_only_follows_aspect() {
        assert_eq!(
            compute_target_size(1000, 800, &dimensions(Some(500), None, true)),
            (500, 400)
        );
    }

    #[test]
    fn test_height_only_follows_aspect() {
        assert_eq!(
            compute_target_size(1000, 800, &dimensions(None, Some(400), true)),
            (500, 400)
        );
    }

    #[test]
    fn test_fit_within_both_bounds() {
        // scale = min(500/1000, 500/400) = 0.5
        assert_eq!(
            compute_target_size(1000, 400, &dimensions(Some(500), Some(500), true)),
            (500, 200)
        );
        // Portrait source, same bounds
        assert_eq!(
            compute_target_size(400, 1000, &dimensions(Some(500), Some(500), true)),
            (200, 500)
        );
    }

    #[test]
    fn test_fit_never_exceeds_bounds() {
        let (w, h) = compute_target_size(1920, 1080, &dimensions(Some(300), Some(300), true));
        assert!(w <= 300 && h <= 300);
    }

    #[test]
    fn test_keep_aspect_without_bounds_is_identity() {
        assert_eq!(
            compute_target_size(1000, 800, &dimensions(None, None, true)),
            (1000, 800)
        );
    }

    #[test]
    fn test_stretch_overrides_each_axis() {
        assert_eq!(
            compute_target_size(1000, 800, &dimensions(Some(300), Some(300), false)),
            (300, 300)
        );
    }

    #[test]
    fn test_stretch_falls_back_to_source_on_unset_axis() {
        assert_eq!(
            compute_target_size(1000, 800, &dimensions(Some(300), None, false)),
            (300, 800)
        );
        assert_eq!(
            compute_target_size(1000, 800, &dimensions(None, Some(300), false)),
            (1000, 300)
        );
        assert_eq!(
            compute_target_size(1000, 800, &dimensions(None, None, false)),
            (1000, 800)
        );
    }

    #[test]
    fn test_filter_shrink_uses_lanczos() {
        assert!(matches!(
            resample_filter(1000, 800, 500, 400),
            FilterType::Lanczos3
        ));
    }

    #[test]
    fn test_filter_upscale_uses_catmullrom() {
        assert!(matches!(
            resample_filter(500, 400, 1000, 800),
            FilterType::CatmullRom
        ));
        assert!(matches!(
            resample_filter(500, 400, 500, 400),
            FilterType::CatmullRom
        ));
    }

    #[test]
    fn test_filter_mixed_axes_uses_lanczos() {
        // A single shrinking axis is enough
        assert!(matches!(
            resample_filter(1000, 400, 500, 800),
            FilterType::Lanczos3
        ));
        assert!(matches!(
            resample_filter(400, 1000, 800, 500),
            FilterType::Lanczos3
        ));
    }
}

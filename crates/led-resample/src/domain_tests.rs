//! Domain-critical regression tests for led-resample.
//!
//! These tests guard the engine-wide contracts that no single module owns:
//! determinism, output range, constant-field preservation, and the two
//! separate alpha steps. Each test documents the regression it catches.

#[cfg(test)]
mod domain_tests {
    use crate::api::{resample_crop, ResampleError};
    use crate::buffer::{CropRegion, PixelBuffer, TargetGrid};
    use crate::color::Rgb;
    use crate::composite::BackgroundPolicy;
    use crate::kernel::ScalingAlgorithm;
    use crate::output::ResampleOutput;

    fn run(
        source: &PixelBuffer,
        target: (usize, usize),
        algorithm: ScalingAlgorithm,
        background: BackgroundPolicy,
    ) -> ResampleOutput {
        resample_crop(
            source,
            CropRegion::centered(source.width(), source.height()),
            TargetGrid::new(target.0, target.1).unwrap(),
            algorithm,
            background,
        )
        .unwrap()
    }

    fn noisy(size: usize) -> PixelBuffer {
        // cheap deterministic pseudo-random content, alpha included
        PixelBuffer::from_fn(size, size, |x, y| {
            let h = (x as u32)
                .wrapping_mul(2_654_435_761)
                .wrapping_add((y as u32).wrapping_mul(40_503))
                .rotate_left(13);
            [
                (h & 0xFF) as u8,
                (h >> 8) as u8,
                (h >> 16) as u8,
                (h >> 24) as u8,
            ]
        })
        .unwrap()
    }

    fn backgrounds() -> [BackgroundPolicy; 3] {
        [
            BackgroundPolicy::Transparent,
            BackgroundPolicy::SolidColor(Rgb::new(10, 20, 30)),
            BackgroundPolicy::true_black(24),
        ]
    }

    // ========================================================================
    // Determinism
    // ========================================================================

    /// If this breaks, it means: some stage depends on hidden state (a cache,
    /// iteration order of a hash map, uninitialized memory) and identical
    /// inputs no longer give byte-identical outputs.
    #[test]
    fn test_repeated_calls_are_byte_identical() {
        let source = noisy(23);
        for algorithm in ScalingAlgorithm::ALL {
            for background in backgrounds() {
                let a = run(&source, (7, 5), algorithm, background);
                let b = run(&source, (7, 5), algorithm, background);
                assert_eq!(a, b, "{algorithm} / {background}");
            }
        }
    }

    // ========================================================================
    // Range: ringing must be clamped, never wrapped
    // ========================================================================

    /// If this breaks, it means: Lanczos overshoot past 255 (or undershoot
    /// below 0) is being wrapped or leaked instead of clamped. A hard
    /// black/white edge rings on both sides; the bright side must saturate at
    /// exactly 255 and the dark side at exactly 0.
    #[test]
    fn test_lanczos_ringing_is_clamped() {
        let source = PixelBuffer::from_fn(12, 12, |x, _| {
            let v = if x < 6 { 0 } else { 255 };
            [v, v, v, 255]
        })
        .unwrap();
        let out = run(
            &source,
            (24, 24),
            ScalingAlgorithm::Lanczos,
            BackgroundPolicy::Transparent,
        );

        let row: Vec<Rgb> = (0..24).map(|x| out.grid.get(x, 12).unwrap()).collect();
        assert_eq!(row[13], Rgb::WHITE, "overshoot must clamp to 255");
        assert_eq!(row[10], Rgb::BLACK, "undershoot must clamp to 0");

        assert_eq!(row[0], Rgb::BLACK);
        assert_eq!(row[23], Rgb::WHITE);
        // grey in, grey out: clamping acts per channel identically
        assert!(row.iter().all(|c| c.r == c.g && c.g == c.b), "{row:?}");
        assert!(out.preview.pixels().all(|px| px[3] == 255));
    }

    // ========================================================================
    // Constant fields
    // ========================================================================

    /// If this breaks, it means: box weights no longer sum to the tap count,
    /// so a flat image darkens or brightens when downscaled.
    #[test]
    fn test_box_downscale_conserves_uniform_color() {
        let color = [37, 201, 96, 255];
        let cases = [
            (4, (2, 2)),
            (9, (4, 4)),
            (17, (5, 3)),
            (100, (16, 16)),
            (7, (1, 1)),
        ];
        for (size, target) in cases {
            let source = PixelBuffer::filled(size, size, color).unwrap();
            let out = run(
                &source,
                target,
                ScalingAlgorithm::Box,
                BackgroundPolicy::Transparent,
            );
            assert!(
                out.grid.iter().all(|&c| c == Rgb::new(37, 201, 96)),
                "{size} -> {target:?}: {:?}",
                out.grid.as_slice()
            );
        }
    }

    /// If this breaks, it means: a kernel is not normalized (or the boundary
    /// sampler returns something other than the edge pixel), so even a flat
    /// field changes value under resampling.
    #[test]
    fn test_every_algorithm_preserves_uniform_color() {
        let source = PixelBuffer::filled(13, 13, [90, 180, 45, 255]).unwrap();
        for algorithm in ScalingAlgorithm::ALL {
            for target in [(3, 3), (8, 2), (13, 13), (30, 20)] {
                let out = run(&source, target, algorithm, BackgroundPolicy::Transparent);
                assert!(
                    out.grid.iter().all(|&c| c == Rgb::new(90, 180, 45)),
                    "{algorithm} {target:?}"
                );
            }
        }
    }

    /// If this breaks, it means: upscaling from a single pixel produces empty
    /// box footprints or out-of-range taps that are not clamped to the edge.
    #[test]
    fn test_single_white_pixel_upscales_to_white() {
        let source = PixelBuffer::filled(1, 1, [255, 255, 255, 255]).unwrap();
        for algorithm in ScalingAlgorithm::ALL {
            for target in [(1, 1), (2, 2), (5, 3), (24, 1), (16, 16)] {
                let out = run(&source, target, algorithm, BackgroundPolicy::Transparent);
                assert_eq!(out.grid.len(), target.0 * target.1);
                assert!(
                    out.grid.iter().all(|&c| c == Rgb::WHITE),
                    "{algorithm} {target:?}"
                );
            }
        }
    }

    // ========================================================================
    // Alpha handling
    // ========================================================================

    /// If this breaks, it means: the final alpha fold is missing, so fully
    /// transparent pixels leak their hidden RGB onto the LEDs.
    #[test]
    fn test_transparent_region_folds_to_black() {
        let source = PixelBuffer::filled(8, 8, [250, 120, 33, 0]).unwrap();
        for algorithm in ScalingAlgorithm::ALL {
            let out = run(&source, (3, 3), algorithm, BackgroundPolicy::Transparent);
            assert!(
                out.grid.iter().all(|&c| c == Rgb::BLACK),
                "{algorithm}: {:?}",
                out.grid.as_slice()
            );
        }
    }

    /// If this breaks, it means: kernels interpolate straight alpha, so a
    /// transparent hole in opaque red tints its neighborhood with the hole's
    /// hidden color, or the result escapes 0..=255.
    #[test]
    fn test_lanczos_transparent_hole_dims_without_tint() {
        let source = PixelBuffer::from_fn(8, 8, |x, y| {
            if (x, y) == (3, 3) {
                [0, 255, 255, 0]
            } else {
                [255, 0, 0, 255]
            }
        })
        .unwrap();
        let out = resample_crop(
            &source,
            CropRegion::new(0, 0, 8),
            TargetGrid::new(4, 4).unwrap(),
            ScalingAlgorithm::Lanczos,
            BackgroundPolicy::Transparent,
        )
        .unwrap();

        let hole = out.grid.get(1, 1).unwrap();
        assert!(hole.r > 0 && hole.r < 255, "hole cell should be dimmed: {hole:?}");
        for c in out.grid.iter() {
            assert_eq!((c.g, c.b), (0, 0), "hidden cyan leaked: {c:?}");
            assert!(c.r >= hole.r, "hole cell should be the dimmest");
        }
        assert_eq!(out.grid.get(3, 3), Some(Rgb::new(255, 0, 0)));
    }

    // ========================================================================
    // True-black lift
    // ========================================================================

    /// If this breaks, it means: the lift formula no longer maps 0..=255 onto
    /// lift..=255 monotonically, so raising the floor darkens some colors.
    #[test]
    fn test_lift_is_monotonic() {
        let source = PixelBuffer::filled(2, 2, [0, 90, 255, 255]).unwrap();
        let mut previous = Rgb::BLACK;
        for lift in 0..=127u8 {
            let out = run(
                &source,
                (1, 1),
                ScalingAlgorithm::Box,
                BackgroundPolicy::true_black(lift),
            );
            let c = out.grid[0];
            assert!(
                c.r >= previous.r && c.g >= previous.g && c.b >= previous.b,
                "lift {lift}: {c:?} < {previous:?}"
            );
            assert_eq!(c.r, lift);
            assert_eq!(c.b, 255);
            previous = c;
        }
    }

    /// If this breaks, it means: the lift brightens pixels with no coverage,
    /// turning the transparent background into a grey glow.
    #[test]
    fn test_lift_leaves_uncovered_cells_dark() {
        let source = PixelBuffer::from_fn(4, 4, |x, _| {
            if x < 2 {
                [0, 0, 0, 255]
            } else {
                [0, 0, 0, 0]
            }
        })
        .unwrap();
        let out = run(
            &source,
            (2, 1),
            ScalingAlgorithm::Box,
            BackgroundPolicy::true_black(40),
        );
        assert_eq!(out.grid[0], Rgb::new(40, 40, 40));
        assert_eq!(out.grid[1], Rgb::BLACK);
        assert_eq!(out.preview.pixel(1, 0), [0, 0, 0, 0]);
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// If this breaks, it means: degenerate requests silently produce empty
    /// buffers instead of typed errors.
    #[test]
    fn test_degenerate_requests_fail() {
        let source = PixelBuffer::filled(4, 4, [1, 1, 1, 255]).unwrap();
        let err = resample_crop(
            &source,
            CropRegion::new(0, 0, 4),
            TargetGrid {
                width: 0,
                height: 4,
            },
            ScalingAlgorithm::Box,
            BackgroundPolicy::Transparent,
        )
        .unwrap_err();
        assert!(matches!(err, ResampleError::InvalidDimensions { .. }));

        let err = resample_crop(
            &source,
            CropRegion::new(0, 0, 0),
            TargetGrid::new(2, 2).unwrap(),
            ScalingAlgorithm::Box,
            BackgroundPolicy::Transparent,
        )
        .unwrap_err();
        assert_eq!(err, ResampleError::DegenerateCrop);
    }

    // ========================================================================
    // Reference scenarios
    // ========================================================================

    #[test]
    fn test_solid_red_box_downscale() {
        let source = PixelBuffer::filled(4, 4, [255, 0, 0, 255]).unwrap();
        let out = resample_crop(
            &source,
            CropRegion::new(0, 0, 4),
            TargetGrid::new(2, 2).unwrap(),
            ScalingAlgorithm::Box,
            BackgroundPolicy::Transparent,
        )
        .unwrap();
        assert_eq!(out.grid.to_rgb_bytes(), [255, 0, 0].repeat(4));
    }

    #[test]
    fn test_checkerboard_bilinear_identity() {
        let source = PixelBuffer::from_fn(2, 2, |x, y| {
            if x == y {
                [255, 255, 255, 255]
            } else {
                [0, 0, 0, 255]
            }
        })
        .unwrap();
        let out = resample_crop(
            &source,
            CropRegion::new(0, 0, 2),
            TargetGrid::new(2, 2).unwrap(),
            ScalingAlgorithm::Bilinear,
            BackgroundPolicy::Transparent,
        )
        .unwrap();
        assert_eq!(out.preview, source);
        assert_eq!(
            out.grid.as_slice(),
            &[Rgb::WHITE, Rgb::BLACK, Rgb::BLACK, Rgb::WHITE]
        );
    }

    /// If this breaks, it means: solid-color flattening moved after
    /// resampling, so antialiased edges blend with black (from the fold)
    /// rather than with the chosen background.
    #[test]
    fn test_flatten_happens_before_resampling() {
        // half-covered white edge over a white background must stay white
        let source = PixelBuffer::from_fn(4, 4, |x, _| {
            if x < 2 {
                [255, 255, 255, 255]
            } else {
                [255, 255, 255, 0]
            }
        })
        .unwrap();
        let out = run(
            &source,
            (1, 1),
            ScalingAlgorithm::Box,
            BackgroundPolicy::SolidColor(Rgb::WHITE),
        );
        assert_eq!(out.grid[0], Rgb::WHITE);

        let transparent = run(
            &source,
            (1, 1),
            ScalingAlgorithm::Box,
            BackgroundPolicy::Transparent,
        );
        assert_eq!(transparent.grid[0], Rgb::new(128, 128, 128));
    }
}

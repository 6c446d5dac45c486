#[cfg(test)]
mod tests {
    use crate::animation::*;
    use crate::*;

    #[test]
    fn test_interpolate_linear_is_exact() {
        let cases = [(0.0f32, 10.0f32), (32.0, 14.0), (-5.0, 5.0), (100.0, 100.0)];
        for (a, b) in cases {
            for i in 0..=20 {
                let f = i as f32 / 20.0;
                assert_eq!(interpolate(a, b, f, None), a + (b - a) * f);
            }
        }
    }

    #[test]
    fn test_interpolate_with_easing_remaps_fraction() {
        // Decelerate(0.5) == 0.75
        assert_eq!(interpolate(0.0, 100.0, 0.5, Some(Easing::Decelerate)), 75.0);
        assert_eq!(interpolate(0.0, 100.0, 0.5, Some(Easing::EaseIn)), 25.0);
        assert_eq!(interpolate(32.0, 14.0, 0.0, Some(Easing::Decelerate)), 32.0);
        assert_eq!(interpolate(32.0, 14.0, 1.0, Some(Easing::Decelerate)), 14.0);
    }

    #[test]
    fn test_custom_easing_may_be_non_monotonic() {
        fn there_and_back(t: f32) -> f32 {
            1.0 - (2.0 * t - 1.0).abs()
        }
        let e = Some(Easing::Custom(there_and_back));
        assert_eq!(interpolate(0.0, 10.0, 0.5, e), 10.0);
        assert_eq!(interpolate(0.0, 10.0, 1.0, e), 0.0);
    }

    #[test]
    fn test_fast_out_slow_in_endpoints() {
        let e = Easing::FastOutSlowIn;
        assert_eq!(e.interpolate(0.0), 0.0);
        assert_eq!(e.interpolate(1.0), 1.0);
        let mid = e.interpolate(0.5);
        assert!(mid > 0.5 && mid < 1.0, "mid = {mid}");
    }

    #[test]
    fn test_color_blend_endpoints_exact() {
        let expanded = Color::from_argb(0xFF12_3456);
        let collapsed = Color::from_argb(0x80FE_DCBA);
        assert_eq!(expanded.blend(collapsed, 0.0), expanded);
        assert_eq!(expanded.blend(collapsed, 1.0), collapsed);
    }

    #[test]
    fn test_color_blend_midpoint_is_channel_mean() {
        let a = Color(0, 100, 200, 255);
        let b = Color(255, 0, 100, 55);
        let m = a.blend(b, 0.5);
        let close = |got: u8, want: f32| (got as f32 - want).abs() <= 1.0;
        assert!(close(m.0, 127.5));
        assert!(close(m.1, 50.0));
        assert!(close(m.2, 150.0));
        assert!(close(m.3, 155.0));
    }

    #[test]
    fn test_color_argb_round_trip() {
        let c = Color::from_argb(0xAA11_2233);
        assert_eq!(c, Color(0x11, 0x22, 0x33, 0xAA));
        assert_eq!(c.to_argb(), 0xAA11_2233);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));
    }

    #[test]
    fn test_bounds_contains_is_half_open() {
        let b = Bounds::new(10.0, 10.0, 110.0, 60.0);

        assert!(b.contains(Vec2::new(50.0, 30.0)));
        assert!(b.contains(Vec2::new(10.0, 10.0)));
        assert!(!b.contains(Vec2::new(110.0, 30.0)));
        assert!(!b.contains(Vec2::new(50.0, 60.0)));
        assert!(!b.contains(Vec2::new(5.0, 30.0)));
        assert!(!Bounds::ZERO.contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_bounds_center_and_size() {
        let b = Bounds::new(0.0, 20.0, 200.0, 76.0);
        assert_eq!(b.width(), 200.0);
        assert_eq!(b.height(), 56.0);
        assert_eq!(b.center_y(), 48.0);
        assert!(Bounds::new(5.0, 0.0, 5.0, 10.0).is_empty());
    }

    #[test]
    fn test_scale_about_pivot_keeps_pivot_fixed() {
        let pivot = Vec2::new(40.0, 100.0);
        let t = Transform::identity().then_scale_about(0.5, 0.5, pivot);
        assert_eq!(t.apply_to_point(pivot), pivot);
        assert_eq!(t.apply_to_point(Vec2::new(60.0, 100.0)), Vec2::new(50.0, 100.0));

        let nested = Transform::translate(10.0, 0.0).then_scale_about(2.0, 2.0, Vec2::new(5.0, 5.0));
        assert_eq!(nested.apply_to_point(Vec2::new(5.0, 5.0)), Vec2::new(15.0, 5.0));
    }

    #[test]
    fn test_path_points_skip_close() {
        let mut p = Path::new();
        p.set_fill_type(FillType::EvenOdd);
        p.move_to(0.0, 0.0);
        p.line_to(5.0, 10.0);
        p.line_to(10.0, 0.0);
        p.close();
        assert_eq!(p.segments().len(), 4);
        assert_eq!(p.points().count(), 3);
        p.rewind();
        assert!(p.is_empty());
        assert_eq!(p.fill_type(), FillType::EvenOdd);
    }

    #[test]
    fn test_raster_ids_are_unique_and_sized() {
        let a = Raster::new(4, 2);
        let b = Raster::new(4, 2);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.byte_len(), 4 * 2 * 4);
    }

    #[test]
    fn test_raster_blend_pixel() {
        let mut r = Raster::new(2, 2);
        r.blend_pixel(1, 1, Color::WHITE, 255);
        r.blend_pixel(5, 5, Color::WHITE, 255);
        assert_eq!(&r.pixels[12..16], &[255, 255, 255, 255]);
        assert_eq!(&r.pixels[0..4], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_font_metrics_line_height() {
        let m = FontMetrics {
            ascent: -24.0,
            descent: 8.0,
        };
        assert_eq!(m.line_height(), 32.0);
        assert_eq!(m.scaled(0.5).ascent, -12.0);
    }
}

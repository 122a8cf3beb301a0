//! Tests for wave-driven scale, color and translation transforms

#[cfg(test)]
mod tests {
    use funcimage::algebra::ImageTransform;
    use funcimage::modulation::{
        Displacement, Wave, wave_color, wave_color_about_origin, wave_intensity, wave_scale,
        wave_scale_about_origin, wave_translate, wave_translate_about,
    };
    use funcimage::{AlgebraError, Color, Coord, Image};

    fn coords() -> Image<Coord> {
        Image::new(|c: Coord| c)
    }

    fn close(a: Coord, b: Coord) -> bool {
        (a.col - b.col).abs() < 1e-9 && (a.row - b.row).abs() < 1e-9
    }

    fn wave(vert_shift: f64, amplitude: f64, period: f64) -> Wave {
        Wave::new(0.0, vert_shift, amplitude, period).expect("Failed to create wave")
    }

    // Tests a flat wave behaves like a uniform zoom
    // Verified by multiplying by the wave value
    #[test]
    fn test_wave_scale_flat_wave_is_zoom() {
        let zoom = wave_scale_about_origin::<Coord>(wave(2.0, 0.0, 10.0))
            .expect("Failed to build wave scale")
            .apply(coords());

        assert!(close(zoom.at(4.0, 6.0), Coord::new(2.0, 3.0)));
    }

    // Tests waves that can reach zero are rejected up front
    // Verified by only checking the vertical shift
    #[test]
    fn test_wave_scale_rejects_zero_crossing() {
        assert!(matches!(
            wave_scale_about_origin::<Coord>(wave(0.5, 1.0, 10.0)),
            Err(AlgebraError::InvalidScaleFactor { .. })
        ));
        assert!(wave_scale::<Coord>(wave(0.0, 0.0, 10.0), Coord::ORIGIN).is_err());
    }

    // Tests the factor varies with distance and the center stays fixed
    // Verified by measuring distance from the origin instead of the center
    #[test]
    fn test_wave_scale_about_center() {
        let center = Coord::new(50.0, 50.0);
        let ripple = wave_scale::<Coord>(wave(1.0, 0.5, 20.0), center)
            .expect("Failed to build wave scale")
            .apply(coords());

        assert!(close(ripple.sample(center), center));
        // At distance 10 the wave is at its trough, 0.5, so content doubles
        assert!(close(ripple.at(60.0, 50.0), Coord::new(70.0, 50.0)));
    }

    // Tests brightness is multiplied by the wave and clamped
    // Verified by adding the wave value to each channel
    #[test]
    fn test_wave_color() {
        let dim =
            wave_color_about_origin(wave(0.5, 0.0, 10.0)).apply(Image::constant(Color::WHITE));
        assert_eq!(dim.at(3.0, 3.0), Color::rgb(127, 127, 127));

        let center = Coord::new(10.0, 10.0);
        let bright = wave_color(wave(1.5, 1.0, 40.0), center)
            .apply(Image::constant(Color::rgb(100, 50, 0)));
        assert_eq!(bright.sample(center), Color::rgb(250, 125, 0));
        assert_eq!(bright.at(30.0, 10.0), Color::rgb(50, 25, 0));
    }

    // Tests vertical displacement shifts rows by the wave of the column
    // Verified by feeding the row into the wave
    #[test]
    fn test_wave_translate_vertical() {
        let wavy = wave_translate::<Coord>(wave(0.0, 2.0, 4.0), Displacement::Vertical)
            .apply(coords());

        assert!(close(wavy.at(0.0, 5.0), Coord::new(0.0, 3.0)));
        assert!(close(wavy.at(1.0, 5.0), Coord::new(1.0, 5.0)));
        assert!(close(wavy.at(2.0, 5.0), Coord::new(2.0, 7.0)));
    }

    // Tests the offset matches the wave intensity on both sides of the origin
    // Verified by feeding the signed column into a phase-shifted wave
    #[test]
    fn test_wave_translate_mirror_symmetric_with_phase() {
        let shifted = Wave::new(1.0, 0.0, 2.0, 8.0).expect("Failed to create wave");
        let wavy = wave_translate::<Coord>(shifted, Displacement::Vertical).apply(coords());
        let intensity = wave_intensity(shifted);

        for col in [-3.0, -1.0, 1.0, 3.0] {
            let expected = Coord::new(col, 5.0 - intensity.at(col, 0.0));
            assert!(close(wavy.at(col, 5.0), expected));
            assert!(close(wavy.at(col, 5.0), wavy.at(-col, 5.0)));
        }
        assert!(close(wavy.at(-3.0, 5.0), Coord::new(-3.0, 5.0)));
        assert!(close(wavy.at(-1.0, 5.0), Coord::new(-1.0, 3.0)));
    }

    // Tests horizontal displacement shifts columns by the wave of the row
    // Verified by displacing the row instead
    #[test]
    fn test_wave_translate_horizontal() {
        let wavy = wave_translate::<Coord>(wave(3.0, 0.0, 4.0), Displacement::Horizontal)
            .apply(coords());

        assert!(close(wavy.at(10.0, -7.0), Coord::new(7.0, -7.0)));
    }

    // Tests the wave argument is measured from the center
    // Verified by ignoring the center
    #[test]
    fn test_wave_translate_about() {
        let center = Coord::new(1.0, 0.0);
        let wavy =
            wave_translate_about::<Coord>(wave(0.0, 2.0, 4.0), Displacement::Vertical, center)
                .apply(coords());

        assert!(close(wavy.at(1.0, 5.0), Coord::new(1.0, 3.0)));
    }
}

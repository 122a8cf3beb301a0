//! Tests for bitmap loading and tiling

#[cfg(test)]
mod tests {
    use funcimage::io::bitmap::Bitmap;
    use funcimage::{AlgebraError, Color};
    use image::{Rgba, RgbaImage};
    use ndarray::Array2;

    // Pixel (x, y) has color (10x, 10y, 0)
    fn gradient() -> Bitmap {
        let pixels = Array2::from_shape_fn((2, 3), |(y, x)| {
            Color::rgb((x * 10) as u8, (y * 10) as u8, 0)
        });
        Bitmap::from_pixels(pixels).expect("Failed to create bitmap")
    }

    // Tests an in-memory grid keeps its shape
    // Verified by transposing the array
    #[test]
    fn test_from_pixels() {
        let bitmap = gradient();

        assert_eq!(bitmap.width(), 3);
        assert_eq!(bitmap.height(), 2);
        assert_eq!(bitmap.get(2, 1), Some(Color::rgb(20, 10, 0)));
        assert_eq!(bitmap.get(3, 0), None);
    }

    // Tests empty grids are rejected
    // Verified by allowing zero-width bitmaps
    #[test]
    fn test_from_pixels_empty() {
        let result = Bitmap::from_pixels(Array2::from_elem((0, 4), Color::BLACK));
        assert!(matches!(result, Err(AlgebraError::EmptyBitmap { .. })));
    }

    // Tests tiling repeats the bitmap in every direction
    // Verified by using the raw `%` remainder
    #[test]
    fn test_into_image_tiles() {
        let image = gradient().into_image();

        assert_eq!(image.at(1.0, 1.0), Color::rgb(10, 10, 0));
        assert_eq!(image.at(4.0, 3.0), Color::rgb(10, 10, 0));
        assert_eq!(image.at(-1.0, 0.0), Color::rgb(20, 0, 0));
        assert_eq!(image.at(-3.0, -2.0), Color::rgb(0, 0, 0));
        assert_eq!(image.at(-4.0, -1.0), Color::rgb(20, 10, 0));
    }

    // Tests coordinates truncate toward zero before wrapping
    // Verified by flooring instead of truncating
    #[test]
    fn test_into_image_truncates() {
        let image = gradient().into_image();

        assert_eq!(image.at(-0.5, 0.0), Color::rgb(0, 0, 0));
        assert_eq!(image.at(2.9, 1.9), Color::rgb(20, 10, 0));
    }

    // Tests decoding a file discards alpha
    // Verified by keeping premultiplied channels
    #[test]
    fn test_open_png() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("sprite.png");
        RgbaImage::from_pixel(3, 2, Rgba([40, 80, 120, 7]))
            .save(&path)
            .expect("Failed to write PNG");

        let bitmap = Bitmap::open(&path).expect("Failed to open bitmap");

        assert_eq!((bitmap.width(), bitmap.height()), (3, 2));
        assert_eq!(bitmap.get(2, 1), Some(Color::rgb(40, 80, 120)));
    }

    // Tests missing and undecodable files report the path
    // Verified by panicking on decode errors
    #[test]
    fn test_open_failures() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = temp_dir.path().join("missing.png");
        assert!(matches!(
            Bitmap::open(&missing),
            Err(AlgebraError::BitmapLoad { ref path, .. }) if *path == missing
        ));

        let garbage = temp_dir.path().join("garbage.png");
        std::fs::write(&garbage, b"not an image").expect("Failed to write file");
        assert!(Bitmap::open(&garbage).is_err());
    }
}

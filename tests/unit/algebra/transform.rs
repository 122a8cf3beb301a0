//! Tests for transform primitives and composition order

#[cfg(test)]
mod tests {
    use funcimage::algebra::{
        BoxedTransform, ImageTransform, coord_transform, identity, value_transform,
    };
    use funcimage::{Coord, Image};

    fn column_image() -> Image<f64> {
        Image::new(|c: Coord| c.col)
    }

    // Tests the pullback maps destination to source
    // Verified by pushing forward instead of pulling back
    #[test]
    fn test_coord_transform_pullback() {
        let shift = coord_transform::<f64, _>(|c: Coord| Coord::new(c.col + 1.0, c.row));
        let shifted = shift.apply(column_image());

        assert!((shifted.at(0.0, 0.0) - 1.0).abs() < 1e-12);
        assert_eq!(shift.pullback(Coord::new(2.0, 5.0)), Coord::new(3.0, 5.0));
    }

    // Tests and_then applies the receiver first
    // Verified by swapping the order inside AndThen::apply
    #[test]
    fn test_and_then_order() {
        let add_one = coord_transform::<f64, _>(|c: Coord| Coord::new(c.col + 1.0, c.row));
        let double = coord_transform::<f64, _>(|c: Coord| Coord::new(c.col * 2.0, c.row));

        let composed = add_one.clone().and_then(double.clone()).apply(column_image());
        let nested = double.apply(add_one.apply(column_image()));

        // Samples pa(pb(3)) = 2 * 3 + 1
        assert!((composed.at(3.0, 0.0) - 7.0).abs() < 1e-12);
        assert!((nested.at(3.0, 0.0) - 7.0).abs() < 1e-12);
    }

    // Tests value transforms see the sampling coordinate
    // Verified by passing the origin to the rewrite
    #[test]
    fn test_value_transform() {
        let add_row = value_transform(|c: Coord, value: f64| value + c.row);
        let rewritten = add_row.apply(column_image());

        assert!((rewritten.at(2.0, 10.0) - 12.0).abs() < 1e-12);
    }

    // Tests identity leaves the image unchanged
    // Verified by returning a constant image
    #[test]
    fn test_identity() {
        let image = identity::<f64>().apply(column_image());
        assert!((image.at(-4.0, 9.0) + 4.0).abs() < 1e-12);
    }

    // Tests boxed transforms chain heterogeneously
    // Verified by applying the chain in reverse
    #[test]
    fn test_boxed_chain() {
        let chain: Vec<BoxedTransform<f64>> = vec![
            coord_transform::<f64, _>(|c: Coord| Coord::new(c.col - 1.0, c.row)).boxed(),
            value_transform(|_, value: f64| value * 10.0).boxed(),
            identity::<f64>().boxed(),
        ];

        let image = chain
            .iter()
            .fold(column_image(), |image, transform| transform.apply(image));

        assert!((image.at(5.0, 0.0) - 40.0).abs() < 1e-12);
    }
}

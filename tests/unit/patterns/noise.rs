//! Tests for seeded lattice noise

#[cfg(test)]
mod tests {
    use funcimage::AlgebraError;
    use funcimage::patterns::lattice_noise;

    // Tests the same seed always produces the same image
    // Verified by seeding from the clock
    #[test]
    fn test_lattice_noise_deterministic() {
        let first = lattice_noise(42, 16, 4.0).expect("Failed to create noise");
        let second = lattice_noise(42, 16, 4.0).expect("Failed to create noise");

        for (col, row) in [(0.0, 0.0), (13.0, 7.5), (-20.0, 33.0)] {
            assert!((first.at(col, row) - second.at(col, row)).abs() < f64::EPSILON);
        }
    }

    // Tests different seeds produce different lattices
    // Verified by ignoring the seed
    #[test]
    fn test_lattice_noise_seed_changes_output() {
        let first = lattice_noise(1, 16, 1.0).expect("Failed to create noise");
        let second = lattice_noise(2, 16, 1.0).expect("Failed to create noise");

        let differs = (0..16).any(|i| {
            let at = f64::from(i);
            (first.at(at, 0.0) - second.at(at, 0.0)).abs() > f64::EPSILON
        });
        assert!(differs);
    }

    // Tests values lie in the unit interval and are constant within a cell
    // Verified by sampling the lattice at the raw coordinate
    #[test]
    fn test_lattice_noise_cells() {
        let noise = lattice_noise(7, 8, 10.0).expect("Failed to create noise");

        for i in 0..40 {
            let at = f64::from(i) * 3.0 - 60.0;
            let value = noise.at(at, at);
            assert!((0.0..1.0).contains(&value));
        }
        assert!((noise.at(0.0, 0.0) - noise.at(9.9, 9.9)).abs() < f64::EPSILON);
    }

    // Tests the lattice tiles the plane in both directions
    // Verified by clamping lattice indices instead of wrapping
    #[test]
    fn test_lattice_noise_tiles() {
        let noise = lattice_noise(3, 8, 2.0).expect("Failed to create noise");
        let period = 16.0;

        for (col, row) in [(1.0, 1.0), (5.0, 13.0)] {
            let base = noise.at(col, row);
            assert!((noise.at(col + period, row) - base).abs() < f64::EPSILON);
            assert!((noise.at(col - period, row - period) - base).abs() < f64::EPSILON);
        }
    }

    // Tests invalid lattice parameters are rejected
    // Verified by accepting an empty lattice
    #[test]
    fn test_lattice_noise_validation() {
        assert!(matches!(
            lattice_noise(0, 0, 1.0),
            Err(AlgebraError::InvalidParameter { parameter: "lattice_size", .. })
        ));
        assert!(matches!(
            lattice_noise(0, 4, 0.0),
            Err(AlgebraError::InvalidParameter { parameter: "cell_size", .. })
        ));
    }
}

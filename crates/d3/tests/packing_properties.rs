//! Property and scenario tests for sphere packing.
//!
//! Every packing must keep spheres inside the box and apart from each other,
//! whatever the random source produced.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sphere_pack_d3::{
    is_contained, overlaps, pack, pack_with_rng, validate_packing, Config, Error, Solver, Sphere,
    SpherePacker, Volume,
};

/// Asserts containment, non-overlap and positive radii for every sphere.
fn assert_invariants(volume: &Volume, spheres: &[Sphere]) {
    for s in spheres {
        assert!(s.radius() > 0.0, "non-positive radius {}", s.radius());
        assert!(is_contained(s, volume), "{:?} escapes {:?}", s, volume);
        assert!(s.radius() <= s.x() && s.x() <= volume.width() - s.radius());
        assert!(s.radius() <= s.y() && s.y() <= volume.height() - s.radius());
        assert!(s.radius() <= s.z() && s.z() <= volume.depth() - s.radius());
    }

    for (i, a) in spheres.iter().enumerate() {
        for b in &spheres[i + 1..] {
            assert!(!overlaps(a, b), "{:?} overlaps {:?}", a, b);
            let distance = nalgebra::distance(a.center(), b.center());
            assert!(distance >= a.radius() + b.radius());
        }
    }

    assert!(validate_packing(volume, spheres).is_ok());
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_default_box_scenario() {
        let volume = Volume::new(100.0, 50.0, 30.0);

        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let spheres = pack_with_rng(100.0, 50.0, 30.0, 100, 200, &mut rng).unwrap();

            assert!(spheres.len() <= 100);
            for s in &spheres {
                assert!(s.radius() >= 1.5 && s.radius() <= 3.0, "radius {}", s.radius());
            }
            assert_invariants(&volume, &spheres);
        }
    }

    #[test]
    fn test_unit_cube_scenario() {
        let volume = Volume::new(1.0, 1.0, 1.0);

        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let spheres = pack_with_rng(1.0, 1.0, 1.0, 10, 200, &mut rng).unwrap();

            assert!(spheres.len() <= 10);
            for s in &spheres {
                assert!(s.radius() >= 0.05 && s.radius() <= 0.1, "radius {}", s.radius());
                for (coord, extent) in [(s.x(), 1.0), (s.y(), 1.0), (s.z(), 1.0)] {
                    assert!(coord >= s.radius());
                    assert!(extent - coord >= s.radius());
                }
            }
            assert_invariants(&volume, &spheres);
        }
    }

    #[test]
    fn test_thread_rng_entry_point() {
        let spheres = pack(100.0, 50.0, 30.0, 100, 200).unwrap();
        assert!(spheres.len() <= 100);
        assert_invariants(&Volume::new(100.0, 50.0, 30.0), &spheres);
    }

    #[test]
    fn test_thin_slab() {
        // grid_size is a tenth of the thinnest axis, so spheres still fit.
        let volume = Volume::new(200.0, 200.0, 2.0);
        let mut rng = StdRng::seed_from_u64(8);
        let spheres = pack_with_rng(200.0, 200.0, 2.0, 300, 200, &mut rng).unwrap();

        assert!(!spheres.is_empty());
        assert_invariants(&volume, &spheres);
    }
}

mod property_tests {
    use super::*;

    #[test]
    fn test_invariants_hold_for_many_seeds() {
        let volumes = [
            Volume::new(100.0, 50.0, 30.0),
            Volume::new(10.0, 10.0, 10.0),
            Volume::new(3.0, 40.0, 7.5),
            Volume::new(0.5, 0.25, 1.0),
        ];

        for volume in &volumes {
            for seed in 0..20 {
                let packer = SpherePacker::new(
                    Config::default()
                        .with_max_spheres(60)
                        .with_attempts_per_sphere(50)
                        .with_seed(seed),
                );
                let result = packer.solve(volume).unwrap();

                assert!(result.placements.len() <= 60);
                assert_eq!(result.slots_processed(), 60);
                assert_invariants(volume, &result.placements);
            }
        }
    }

    #[test]
    fn test_cardinality_bound() {
        let volume = Volume::new(1000.0, 1000.0, 1000.0);
        for max in [1, 2, 5, 10] {
            let packer = SpherePacker::new(Config::default().with_max_spheres(max).with_seed(3));
            let result = packer.solve(&volume).unwrap();
            // Plenty of room: every slot is filled on its first attempts.
            assert_eq!(result.placements.len(), max);
            assert!(result.all_placed());
        }
    }

    #[test]
    fn test_zero_request_is_empty() {
        for (w, h, d) in [(1.0, 1.0, 1.0), (100.0, 50.0, 30.0), (0.1, 9.0, 3.0)] {
            for attempts in [1, 200, 5000] {
                assert!(pack(w, h, d, 0, attempts).unwrap().is_empty());
            }
        }
    }

    #[test]
    fn test_acceptance_order_is_preserved() {
        // Prefix property: a run with fewer slots is a prefix of a longer one
        // when both consume the same random stream.
        let volume = Volume::new(20.0, 20.0, 20.0);
        let short =
            pack_with_rng(20.0, 20.0, 20.0, 10, 200, &mut StdRng::seed_from_u64(77)).unwrap();
        let long =
            pack_with_rng(20.0, 20.0, 20.0, 30, 200, &mut StdRng::seed_from_u64(77)).unwrap();

        assert!(short.len() <= long.len());
        assert_eq!(&long[..short.len()], &short[..]);
        assert_invariants(&volume, &long);
    }

    #[test]
    fn test_saturation_yields_partial_result() {
        // 1000 slots cannot all fit a 10-unit cube with radii in [0.5, 1.0].
        let volume = Volume::new(10.0, 10.0, 10.0);
        let packer = SpherePacker::new(
            Config::default()
                .with_max_spheres(1000)
                .with_attempts_per_sphere(100)
                .with_seed(21),
        );

        let result = packer.solve(&volume).unwrap();

        assert!(result.placements.len() < 1000);
        assert!(result.exhausted_slots > 0);
        assert!(result.rejected_overlap > 0);
        assert!(result.completed_normally());
        assert_invariants(&volume, &result.placements);
    }

    #[test]
    fn test_parallel_restarts_keep_invariants() {
        let volume = Volume::new(25.0, 25.0, 25.0);
        for seed in 0..3 {
            let packer = SpherePacker::new(
                Config::default()
                    .with_max_spheres(150)
                    .with_restarts(3)
                    .with_seed(seed),
            );
            let result = packer.solve(&volume).unwrap();
            assert_eq!(result.restarts, 3);
            assert_invariants(&volume, &result.placements);
        }
    }
}

mod validation_tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_rejected() {
        assert!(matches!(
            pack(0.0, 50.0, 30.0, 5, 200),
            Err(Error::InvalidDimension(_))
        ));
        assert!(matches!(
            pack(100.0, 50.0, -1.0, 5, 200),
            Err(Error::InvalidDimension(_))
        ));
        assert!(matches!(
            pack(f64::NAN, 50.0, 30.0, 5, 200),
            Err(Error::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_invalid_counts_rejected() {
        assert!(matches!(
            pack(100.0, 50.0, 30.0, -1, 200),
            Err(Error::InvalidCount(_))
        ));
        assert!(matches!(
            pack(100.0, 50.0, 30.0, 5, 0),
            Err(Error::InvalidCount(_))
        ));
        assert!(matches!(
            pack(100.0, 50.0, 30.0, 5, -3),
            Err(Error::InvalidCount(_))
        ));
    }

    #[test]
    fn test_dimension_checked_before_counts() {
        assert!(matches!(
            pack(-1.0, 50.0, 30.0, -1, 0),
            Err(Error::InvalidDimension(_))
        ));
    }
}

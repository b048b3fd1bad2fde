use lanyard::{RopeConfig, RopeError, Vec3};

#[test]
fn defaults_match_documented_values() {
    let config: RopeConfig<Vec3<f32>> = RopeConfig::default();
    assert_eq!(config.gravity, Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(config.damping, 0.99);
    assert_eq!(config.stiffness, 0.5);
    assert_eq!(config.constraint_iterations, 5);
    assert_eq!(config.collision_iterations, 3);
    assert_eq!(config.self_collision.min_distance, 0.05);
    assert_eq!(config.self_collision.min_index_gap, 2);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn constraint_iterations_never_zero() {
    let config: RopeConfig<Vec3<f32>> = RopeConfig::new().with_constraint_iterations(0);
    assert_eq!(config.constraint_iterations, 1);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let base: RopeConfig<Vec3<f64>> = RopeConfig::new();

    assert_eq!(base.clone().with_damping(0.0).validate(), Err(RopeError::InvalidDamping));
    assert_eq!(base.clone().with_damping(1.5).validate(), Err(RopeError::InvalidDamping));
    assert_eq!(base.clone().with_stiffness(-0.1).validate(), Err(RopeError::InvalidStiffness));
    assert_eq!(base.clone().with_stiffness(f64::NAN).validate(), Err(RopeError::InvalidStiffness));
    assert_eq!(
        base.clone().with_self_collision(-1.0, 2).validate(),
        Err(RopeError::InvalidCollisionDistance)
    );
    assert_eq!(
        base.clone().with_gravity(Vec3::new(0.0, f64::INFINITY, 0.0)).validate(),
        Err(RopeError::InvalidGravity)
    );

    let mut zero_passes = base.clone();
    zero_passes.constraint_iterations = 0;
    assert_eq!(zero_passes.validate(), Err(RopeError::InvalidIterations));

    assert_eq!(base.with_damping(1.0).with_stiffness(1.0).validate(), Ok(()));
}

#[test]
fn error_messages_name_the_problem() {
    let err = RopeError::ParticleOutOfBounds { index: 12, count: 10 };
    assert_eq!(err.to_string(), "particle index 12 out of bounds (count: 10)");
    assert_eq!(RopeError::InvalidStiffness.to_string(), "stiffness must be in (0, 1]");
}

#[cfg(feature = "serde")]
#[test]
fn config_loads_from_json() {
    let json = r#"{
        "gravity": { "x": 0.0, "y": -0.02, "z": 0.0 },
        "damping": 0.98,
        "stiffness": 0.75,
        "constraint_iterations": 8,
        "collision_iterations": 2,
        "self_collision": { "min_distance": 0.2, "min_index_gap": 4 }
    }"#;
    let config: RopeConfig<Vec3<f32>> = serde_json::from_str(json).unwrap();
    assert_eq!(config.gravity, Vec3::new(0.0, -0.02, 0.0));
    assert_eq!(config.constraint_iterations, 8);
    assert_eq!(config.self_collision.min_index_gap, 4);

    let back = serde_json::to_string(&config).unwrap();
    let again: RopeConfig<Vec3<f32>> = serde_json::from_str(&back).unwrap();
    assert_eq!(again, config);
}

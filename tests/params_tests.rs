use flocking::{Param, SimulationParams};
use std::fs;

#[test]
fn save_and_load_preserves_parameters() {
    let mut params = SimulationParams::default();
    params.set(Param::MaxSpeed, 12.0);
    params.set(Param::CohesionWeight, 0.4);
    params.set(Param::PillarSeparationWeight, 17.5);

    let path = std::env::temp_dir().join("flocking_test_save_and_load.json");
    params.save(&path).expect("Failed to save parameters");

    let loaded = SimulationParams::load(&path).expect("Failed to load parameters");
    assert_eq!(loaded, params);

    fs::remove_file(&path).ok();
}

#[test]
fn save_creates_valid_json() {
    let path = std::env::temp_dir().join("flocking_test_valid_json.json");
    SimulationParams::default().save(&path).expect("Failed to save");

    let content = fs::read_to_string(&path).expect("Failed to read saved file");
    let value: serde_json::Value = serde_json::from_str(&content).expect("Invalid JSON");
    assert_eq!(value["max_speed"].as_f64(), Some(3.0));
    assert_eq!(value["pillar_separation_weight"].as_f64(), Some(10.0));

    fs::remove_file(&path).ok();
}

#[test]
fn load_clamps_out_of_range_values() {
    let path = std::env::temp_dir().join("flocking_test_clamp.json");
    fs::write(&path, r#"{ "max_speed": 500.0, "max_force": -1.0, "alignment_weight": 1.2 }"#)
        .expect("Failed to write config");

    let params = SimulationParams::load(&path).expect("Failed to load parameters");
    assert_eq!(params.max_speed, 50.0);
    assert_eq!(params.max_force, 0.01);
    assert_eq!(params.alignment_weight, 1.2);
    assert_eq!(params.visual_scale, 2.0);

    fs::remove_file(&path).ok();
}

#[test]
fn load_nonexistent_file() {
    let result = SimulationParams::load("does_not_exist_flocking.json");
    assert!(result.is_err());
}

#[test]
fn load_invalid_json() {
    let path = std::env::temp_dir().join("flocking_test_invalid.json");
    fs::write(&path, "{ not json").expect("Failed to write config");

    assert!(SimulationParams::load(&path).is_err());

    fs::remove_file(&path).ok();
}

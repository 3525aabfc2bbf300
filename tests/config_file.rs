//! Loading tuning from JSON files.
use std::fs;
use std::path::PathBuf;

use approx::assert_relative_eq;
use locomotion::{ConfigError, LocomotionConfig, LocomotionController};

/// A config file removed again when dropped.
struct TempConfig(PathBuf);

impl TempConfig {
    fn new(name: &str, contents: &str) -> Self {
        let path =
            std::env::temp_dir().join(format!("locomotion-{}-{name}.json", std::process::id()));
        fs::write(&path, contents)
            .unwrap_or_else(|e| panic!("writing {}: {e}", path.display()));
        Self(path)
    }
}

impl Drop for TempConfig {
    fn drop(&mut self) {
        fs::remove_file(&self.0).unwrap_or_default();
    }
}

#[test]
fn file_overrides_feed_the_derived_arc() {
    let file = TempConfig::new(
        "floaty",
        r#"{ "jump_height": 2.0, "jump_duration": 1.0, "max_jump_charges": 3 }"#,
    );
    let config = LocomotionConfig::from_path(&file.0).expect("config should load");
    let controller = LocomotionController::new(config).expect("config should be valid");

    assert_relative_eq!(controller.kinematics().gravity(), -16.0, epsilon = 1e-4);
    assert_relative_eq!(
        controller.kinematics().initial_jump_velocity(),
        8.0,
        epsilon = 1e-4
    );
    assert_eq!(controller.config().max_jump_charges, 3);
    assert_relative_eq!(controller.config().horizontal_speed, 9.0);
}

#[test]
fn invalid_file_values_are_rejected_at_load() {
    let file = TempConfig::new("negative", r#"{ "jump_height": -3.0 }"#);
    let err = LocomotionConfig::from_path(&file.0).expect_err("negative height must fail");
    assert!(matches!(
        err,
        ConfigError::NonPositive {
            field: "jump_height",
            ..
        }
    ));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let file = TempConfig::new("broken", "{ jump_height: 3 ");
    let err = LocomotionConfig::from_path(&file.0).expect_err("malformed JSON must fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

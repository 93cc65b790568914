//! Profiles read from and written to YAML/JSON.

use prism_primaries::{ADOBE_RGB, ColorProfile, ProfileError};

#[test]
fn yaml_profile_parses() {
    let text = "\
gamma: 2.2
white: [0.31273, 0.32902]
red: [0.64, 0.33]
green: [0.21, 0.71]
blue: [0.15, 0.06]
";
    let profile: ColorProfile = serde_yaml::from_str(text).unwrap();
    assert_eq!(profile, ADOBE_RGB);
}

#[test]
fn json_roundtrip() {
    let json = serde_json::to_string(&ADOBE_RGB).unwrap();
    assert!(json.contains("\"gamma\":2.2"));
    let back: ColorProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ADOBE_RGB);
}

#[test]
fn missing_field_rejected() {
    let text = "gamma: 2.2\nwhite: [0.3127, 0.329]\n";
    assert!(serde_yaml::from_str::<ColorProfile>(text).is_err());
}

#[test]
fn parsed_profile_still_validated() {
    let text = "\
gamma: 0
white: [0.3127, 0.329]
red: [0.64, 0.33]
green: [0.30, 0.60]
blue: [0.15, 0.06]
";
    let profile: ColorProfile = serde_yaml::from_str(text).unwrap();
    assert_eq!(profile.validate(), Err(ProfileError::InvalidGamma(0.0)));
}

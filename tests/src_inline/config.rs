use super::*;
use tempfile::tempdir;

#[test]
fn empty_document_uses_defaults() {
    let config = Config::from_toml("").expect("config");
    assert_eq!(config.sum.sanitize, SanitizeValue(-128));
    assert_eq!(config.sum.reducer, Reducer::Vector);
    assert_eq!(config.sum.width, ElementWidth::Bits8);
    assert_eq!(config.demo.power, 20);
    assert_eq!(config.demo.offset, 0);
    assert_eq!(SweepConfig::from(config.check).rounds, SweepConfig::default().rounds);
}

#[test]
fn sections_override_defaults() {
    let config = Config::from_toml(
        "[sum]\nsanitize = 0\nreducer = \"scalar\"\nwidth = 32\n\n[demo]\npower = 12\noffset = 3\n",
    )
    .expect("config");
    assert_eq!(config.sum.sanitize, SanitizeValue(0));
    assert_eq!(config.sum.reducer, Reducer::Scalar);
    assert_eq!(config.sum.width, ElementWidth::Bits32);
    assert_eq!(config.demo, DemoSettings { power: 12, offset: 3 });
}

#[test]
fn unknown_reducer_rejected() {
    let err = Config::from_toml("[sum]\nreducer = \"gpu\"\n").expect_err("must fail");
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn unsupported_width_rejected() {
    assert!(Config::from_toml("[sum]\nwidth = 16\n").is_err());
}

#[test]
fn out_of_range_sanitize_rejected() {
    assert!(Config::from_toml("[sum]\nsanitize = 200\n").is_err());
}

#[test]
fn demo_power_bounds_checked() {
    let err = Config::from_toml("[demo]\npower = 4\n").expect_err("must fail");
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn load_from_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("sumint.toml");
    std::fs::write(&path, "[check]\nrounds = 3\nseed = 11\n").expect("write file");

    let config = load_or_default(Some(&path)).expect("config");
    assert_eq!(config.check.rounds, 3);
    assert_eq!(config.check.seed, 11);
    assert_eq!(load_or_default(None).expect("default"), Config::default());
}

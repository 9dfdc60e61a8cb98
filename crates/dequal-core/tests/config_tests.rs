use dequal_core::config::{ENV_LOG_PROFILE, ENV_REUSE_DIAGNOSTICS};
use dequal_core::logging_facility::Profile;
use dequal_core::{concat, EngineConfig, Value};

fn vars(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |name| {
        pairs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.to_string())
    }
}

#[test]
fn test_configured_observer_attaches_to_concat() {
    let config = EngineConfig::default()
        .apply_overrides(vars(&[(ENV_REUSE_DIAGNOSTICS, "true")]))
        .unwrap();

    let seq = concat([Value::array([1, 2])])
        .unwrap()
        .with_optional_observer(config.reuse_observer());

    assert!(format!("{:?}", seq).contains("observed: true"));
    assert_eq!(seq.iter().count(), 2);
    assert_eq!(seq.iter().count(), 2);
    assert_eq!(seq.usages(), 2);
}

#[test]
fn test_default_config_leaves_concat_unobserved() {
    let config = EngineConfig::default();
    let seq = concat([Value::array([1])])
        .unwrap()
        .with_optional_observer(config.reuse_observer());
    assert!(format!("{:?}", seq).contains("observed: false"));
}

#[test]
fn test_profile_override() {
    let config = EngineConfig::from_toml_str("log_profile = \"development\"")
        .unwrap()
        .apply_overrides(vars(&[(ENV_LOG_PROFILE, "prod")]))
        .unwrap();
    assert_eq!(config.log_profile, Profile::Production);
}

#[test]
fn test_unknown_profile_rejected() {
    let err = EngineConfig::default()
        .apply_overrides(vars(&[(ENV_LOG_PROFILE, "chatty")]))
        .unwrap_err();
    assert!(err.to_string().contains("chatty"));
}

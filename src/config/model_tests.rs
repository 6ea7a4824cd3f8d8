use super::*;

#[test]
fn default_uses_builtin_organization() {
    let config = Config::default();
    assert_eq!(config.organization, DEFAULT_ORGANIZATION);
    assert!(config.year.is_none());
    assert!(config.version.is_none());
}

#[test]
fn empty_toml_is_default() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn parses_all_keys() {
    let config: Config = toml::from_str(
        r#"
version = "1"
organization = "Acme"
year = 2024
"#,
    )
    .unwrap();
    assert_eq!(config.version.as_deref(), Some("1"));
    assert_eq!(config.organization, "Acme");
    assert_eq!(config.year, Some(2024));
}

#[test]
fn rejects_unknown_keys() {
    let result: Result<Config, _> = toml::from_str("organisation = \"Acme\"");
    assert!(result.is_err());
}

#[test]
fn rejects_out_of_range_year_type() {
    let result: Result<Config, _> = toml::from_str("year = 70000");
    assert!(result.is_err());
}

#[test]
fn serializes_without_unset_optionals() {
    let text = toml::to_string(&Config::default()).unwrap();
    assert!(text.contains("organization"));
    assert!(!text.contains("year"));
    assert!(!text.contains("version"));
}

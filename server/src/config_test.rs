use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

const BASE: [(&str, &str); 2] = [("SUPABASE_URL", "https://proj.supabase.co/"), ("SUPABASE_ANON_KEY", "anon")];

#[test]
fn defaults_apply_when_optional_vars_unset() {
    let config = AppConfig::from_lookup(lookup_from(&BASE)).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.supabase.url, "https://proj.supabase.co");
    assert_eq!(config.supabase.anon_key, "anon");
    assert_eq!(config.supabase.timeouts.request, Duration::from_secs(30));
    assert_eq!(config.supabase.timeouts.connect, Duration::from_secs(10));
    assert_eq!(config.session_ttl, Duration::from_secs(DEFAULT_SESSION_TTL_SECS));
    assert_eq!(config.session_write, SessionWritePolicy::BestEffort);
}

#[test]
fn missing_url_is_an_error() {
    let err = AppConfig::from_lookup(lookup_from(&[("SUPABASE_ANON_KEY", "anon")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("SUPABASE_URL"));
}

#[test]
fn missing_anon_key_is_an_error() {
    let err = AppConfig::from_lookup(lookup_from(&[("SUPABASE_URL", "http://localhost:54321")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("SUPABASE_ANON_KEY"));
}

#[test]
fn vite_prefixed_vars_are_accepted() {
    let config = AppConfig::from_lookup(lookup_from(&[
        ("VITE_SUPABASE_URL", "http://localhost:54321"),
        ("VITE_SUPABASE_ANON_KEY", "vite-anon"),
    ]))
    .unwrap();
    assert_eq!(config.supabase.url, "http://localhost:54321");
    assert_eq!(config.supabase.anon_key, "vite-anon");
}

#[test]
fn blank_primary_var_falls_back_to_vite_var() {
    let config = AppConfig::from_lookup(lookup_from(&[
        ("SUPABASE_URL", "  "),
        ("VITE_SUPABASE_URL", "http://localhost:54321"),
        ("SUPABASE_ANON_KEY", "anon"),
    ]))
    .unwrap();
    assert_eq!(config.supabase.url, "http://localhost:54321");
}

#[test]
fn invalid_port_is_reported() {
    let mut pairs = BASE.to_vec();
    pairs.push(("PORT", "eighty"));
    let err = AppConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "eighty".into() });
}

#[test]
fn require_session_record_switches_policy() {
    let mut pairs = BASE.to_vec();
    pairs.push(("REQUIRE_SESSION_RECORD", "yes"));
    let config = AppConfig::from_lookup(lookup_from(&pairs)).unwrap();
    assert_eq!(config.session_write, SessionWritePolicy::Required);
}

#[test]
fn cookie_secure_ignores_https_supabase_url() {
    let config = AppConfig::from_lookup(lookup_from(&[
        ("SUPABASE_URL", "https://abc.supabase.co"),
        ("SUPABASE_ANON_KEY", "anon"),
    ]))
    .unwrap();
    assert!(!config.cookie_secure);
}

#[test]
fn cookie_secure_follows_app_url_scheme() {
    let mut pairs = BASE.to_vec();
    pairs.push(("APP_URL", "https://desk.example.com"));
    assert!(AppConfig::from_lookup(lookup_from(&pairs)).unwrap().cookie_secure);

    let mut pairs = BASE.to_vec();
    pairs.push(("APP_URL", "http://192.168.1.20:3000"));
    assert!(!AppConfig::from_lookup(lookup_from(&pairs)).unwrap().cookie_secure);
}

#[test]
fn cookie_secure_explicit_override() {
    let mut pairs = BASE.to_vec();
    pairs.push(("APP_URL", "https://desk.example.com"));
    pairs.push(("COOKIE_SECURE", "off"));
    let config = AppConfig::from_lookup(lookup_from(&pairs)).unwrap();
    assert!(!config.cookie_secure);
}

// =============================================================================
// parse_bool_value
// =============================================================================

#[test]
fn bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "  On  "] {
        assert_eq!(parse_bool_value(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn bool_false_variants() {
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(parse_bool_value(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn bool_invalid_returns_none() {
    assert_eq!(parse_bool_value("maybe"), None);
    assert_eq!(parse_bool_value(""), None);
}

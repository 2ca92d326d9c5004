use super::*;

fn with_port(raw: Option<&str>) -> impl Fn(&str) -> Option<String> {
    let raw = raw.map(str::to_owned);
    move |key| if key == "PORT" { raw.clone() } else { None }
}

#[test]
fn port_defaults_to_3000() {
    let config = ServerConfig::from_lookup(with_port(None)).expect("config");
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn blank_port_uses_default() {
    let config = ServerConfig::from_lookup(with_port(Some("  "))).expect("config");
    assert_eq!(config.port, 3000);
}

#[test]
fn port_is_read_from_env() {
    let config = ServerConfig::from_lookup(with_port(Some("8080"))).expect("config");
    assert_eq!(config.port, 8080);
    assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
}

#[test]
fn invalid_port_is_rejected() {
    for raw in ["abc", "0", "70000", "-1"] {
        let err = ServerConfig::from_lookup(with_port(Some(raw))).expect_err("invalid port");
        assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == raw), "{raw}: {err}");
    }
}

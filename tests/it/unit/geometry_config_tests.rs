//! Unit tests for host-supplied geometry configuration.

use cardwheel::{CardMetrics, GeometryConfig};

#[test]
fn test_config_loads_from_json() {
    let json = r#"{
        "breakpoints": [
            { "max_width": 576.0, "metrics": { "card_width": 280.0, "gap": 16.0 } },
            { "max_width": 768.0, "metrics": { "card_width": 300.0, "gap": 32.0 } }
        ],
        "fallback": { "card_width": 400.0, "gap": 32.0 }
    }"#;

    let config: GeometryConfig = serde_json::from_str(json).expect("valid geometry config");
    assert_eq!(config, GeometryConfig::default());
    assert_eq!(
        config.resolve(500.0),
        CardMetrics {
            card_width: 280.0,
            gap: 16.0
        }
    );
}

#[test]
fn test_unordered_json_table_still_resolves_narrowest_first() {
    // Hand-edited configs won't always keep the rows sorted.
    let json = r#"{
        "breakpoints": [
            { "max_width": 900.0, "metrics": { "card_width": 350.0, "gap": 24.0 } },
            { "max_width": 480.0, "metrics": { "card_width": 240.0, "gap": 12.0 } }
        ],
        "fallback": { "card_width": 420.0, "gap": 36.0 }
    }"#;

    let config: GeometryConfig = serde_json::from_str(json).expect("valid geometry config");
    assert_eq!(config.resolve(400.0).card_width, 240.0);
    assert_eq!(config.resolve(700.0).card_width, 350.0);
    assert_eq!(config.resolve(1400.0).card_width, 420.0);
}

#[test]
fn test_config_round_trips_through_json() {
    let config = GeometryConfig::default();
    let json = serde_json::to_string(&config).expect("serializable");
    let reloaded: GeometryConfig = serde_json::from_str(&json).expect("reloadable");
    assert_eq!(reloaded, config);
}

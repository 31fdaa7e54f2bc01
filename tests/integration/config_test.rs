//! Configuration loading and its effect on the selectors

use dex_view::config::Config;
use dex_view::model::U256;
use dex_view::store::{AppState, Selectors};
use std::io::Write;

#[test]
fn test_config_example_loads() {
    let config = Config::load(concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example")).unwrap();
    assert_eq!(config.display.token_decimals, 18);
    assert_eq!(config.display.price_precision, 6);
    assert_eq!(config.telemetry.log_level, "info");
    assert!(Selectors::from_config(&config.display).is_ok());
}

#[test]
fn test_missing_config_file_errors() {
    assert!(Config::load("/nonexistent/dex-view.toml").is_err());
}

#[test]
fn test_balance_precision_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [display]
        balance_precision = 4
        "#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    let mut selectors = Selectors::from_config(&config.display).unwrap();

    let mut state = AppState::default();
    state.web3.balance = U256::from(1_234_567_000_000_000_000u128);
    let balance = selectors.ether_balance(&state).unwrap();
    assert_eq!(*balance, "1.2346");
}

#[test]
fn test_invalid_display_config_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [display]
        timestamp_format = "%Q"
        "#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert!(Selectors::from_config(&config.display).is_err());
}

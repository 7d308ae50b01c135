//! Tests for CalculatorConfig loading and its effect on calculation.

use fastcalc::utils::generate_test_data;
use fastcalc::{CalcStrategy, CalculatorConfig, FastCalcError, HammingDistanceCalculator};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("fastcalc_{}_{}.json", name, std::process::id()))
}

#[test]
fn test_partial_json_uses_defaults() {
    let config = CalculatorConfig::from_json(r#"{ "parallel_chunk_size": 128 }"#).unwrap();
    assert_eq!(config.strategy, CalcStrategy::Batched);
    assert_eq!(config.parallel_chunk_size, 128);

    let config = CalculatorConfig::from_json("{}").unwrap();
    assert_eq!(config, CalculatorConfig::default());
}

#[test]
fn test_with_strategy() {
    let config = CalculatorConfig::with_strategy(CalcStrategy::Sequential);
    assert_eq!(config.strategy, CalcStrategy::Sequential);
    assert_eq!(
        config.parallel_chunk_size,
        CalculatorConfig::DEFAULT_CHUNK_SIZE
    );
}

#[test]
fn test_malformed_json() {
    let err = CalculatorConfig::from_json("{ strategy: ").unwrap_err();
    assert!(matches!(err, FastCalcError::Config(_)));
}

#[test]
fn test_save_and_load() {
    let path = temp_path("save_load");
    let config = CalculatorConfig {
        strategy: CalcStrategy::Parallel,
        parallel_chunk_size: 256,
    };

    config.save(&path).unwrap();
    let loaded = CalculatorConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_load_missing_file() {
    let err = CalculatorConfig::load(temp_path("does_not_exist")).unwrap_err();
    assert!(matches!(err, FastCalcError::Io(_)));
}

#[test]
fn test_config_drives_calculation() {
    let (a, b) = generate_test_data(10_000, 42);
    let calc = HammingDistanceCalculator::new(a, b).unwrap();
    let expected = calc.calculate();

    for json in [
        r#"{ "strategy": "sequential" }"#,
        r#"{ "strategy": "batched" }"#,
        r#"{ "strategy": "parallel", "parallel_chunk_size": 1 }"#,
        r#"{ "strategy": "parallel", "parallel_chunk_size": 333 }"#,
        r#"{ "strategy": "parallel", "parallel_chunk_size": 1000000 }"#,
    ] {
        let config = CalculatorConfig::from_json(json).unwrap();
        assert_eq!(calc.calculate_with_config(&config), expected, "{}", json);
    }
}

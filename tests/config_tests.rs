use budget_console::{
    ansi,
    banner::Banner,
    clock::FixedClock,
    config::ConsoleConfig,
    report::ErrorBlock,
    Console, Severity,
};
use chrono::NaiveDate;

#[test]
fn defaults_match_the_classic_layout() {
    let config = ConsoleConfig::default();
    assert_eq!(config.min_severity, Severity::Info);
    assert_eq!(config.section_width, 132);
    assert_eq!(config.error_width, 100);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config: ConsoleConfig = serde_json::from_str(r#"{ "min_severity": "DEBUG" }"#).unwrap();
    assert_eq!(config.min_severity, Severity::Debug);
    assert_eq!(config.section_width, 132);
    assert_eq!(config.error_width, 100);
}

#[test]
fn unknown_severity_is_rejected_on_load() {
    let result = serde_json::from_str::<ConsoleConfig>(r#"{ "min_severity": "LOUD" }"#);
    assert!(result.is_err());
}

#[test]
fn serializes_severity_in_upper_case() {
    let config = ConsoleConfig {
        min_severity: Severity::Warn,
        section_width: 80,
        error_width: 60,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(r#""min_severity":"WARN""#));
    let back: ConsoleConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn widths_flow_into_banner_and_error_block() {
    let config = ConsoleConfig {
        section_width: 50,
        error_width: 64,
        ..ConsoleConfig::default()
    };
    assert_eq!(Banner::from_config(&config).width(), 50);
    assert_eq!(ErrorBlock::from_config(&config).width(), 64);
    assert_eq!(ErrorBlock::default().width(), 100);
}

#[test]
fn error_width_sets_the_rule_length() {
    let config = ConsoleConfig {
        error_width: 64,
        ..ConsoleConfig::default()
    };
    let at = NaiveDate::from_ymd_opt(2021, 7, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    let console = Console::new(Vec::new(), FixedClock(at));
    ErrorBlock::from_config(&config)
        .report(&console, "over budget")
        .unwrap();

    let text = ansi::strip(&String::from_utf8(console.into_inner()).unwrap());
    let rules: Vec<&str> = text.lines().filter(|line| line.starts_with('#')).collect();
    assert_eq!(rules.len(), 2);
    assert!(rules.iter().all(|rule| rule.chars().count() == 64));
}

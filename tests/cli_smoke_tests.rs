use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

const BIN_NAME: &str = "budget_console";

fn command() -> Command {
    Command::cargo_bin(BIN_NAME).expect("binary exists")
}

#[test]
fn amount_command_groups_values() {
    command()
        .args(["amount", "1234.5", "-1234.5", "999.999"])
        .assert()
        .success()
        .stdout(contains("1,234.50\n-1,234.50\n1,000.00\n"));
}

#[test]
fn amount_command_reports_nan() {
    command()
        .args(["amount", "NaN"])
        .assert()
        .failure()
        .stdout(contains(" ERROR ").and(contains("Invalid amount")));
}

#[test]
fn banner_command_prints_version_and_notice() {
    command()
        .args(["banner", "--holder", "Test Holder"])
        .assert()
        .success()
        .stdout(
            contains(format!("budget_console v{}", env!("CARGO_PKG_VERSION")))
                .and(contains("Test Holder"))
                .and(contains("ABSOLUTELY NO WARRANTY")),
        );
}

#[test]
fn log_command_respects_threshold() {
    command()
        .args(["log", "--level", "warn", "disk almost full"])
        .assert()
        .success()
        .stdout(contains("WARN").and(contains("disk almost full")));

    command()
        .args(["--min-level", "error", "log", "--level", "warn", "hidden"])
        .assert()
        .success()
        .stdout(contains("hidden").not());
}

#[test]
fn unknown_level_is_a_usage_error() {
    command()
        .args(["log", "--level", "loud", "x"])
        .assert()
        .failure()
        .stderr(contains("Unknown severity"));
}

mod common;

use predicates::{prelude::PredicateBooleanExt, str::contains};
use regex::Regex;

use common::{run_script, test_home};

#[test]
fn wallet_home_masks_balance_until_toggled() {
    let home = test_home();
    run_script(&home, &["home", "balance", "exit"])
        .success()
        .stdout(
            contains("Mama Mohamed Amar Jewda")
                .and(contains("Solde actuel: ** **"))
                .and(contains("Solde actuel: 15,847 MRU"))
                .and(contains("Services rapides")),
        );
}

#[test]
fn inert_services_report_unavailable() {
    let home = test_home();
    run_script(&home, &["service retrait", "exit"])
        .success()
        .stdout(contains("`Retrait` is not available yet."));
}

#[test]
fn unknown_command_suggests_closest() {
    let home = test_home();
    run_script(&home, &["balanse", "exit"])
        .success()
        .stdout(contains("Unknown command `balanse`").and(contains("Suggestion: `balance`?")));
}

#[test]
fn idikhar_opens_on_categories_tab() {
    let home = test_home();
    run_script(&home, &["idikhar", "exit"])
        .success()
        .stdout(
            contains("Solde disponible: 15,847 MRU")
                .and(contains("Ce mois: +2,340 MRU"))
                .and(contains("[Catégories]"))
                .and(contains("Catégorisation automatique"))
                .and(contains("2,850 sur 4,000 MRU"))
                .and(contains("87%")),
        );
}

#[test]
fn language_switch_relabels_idikhar() {
    let home = test_home();
    run_script(&home, &["idikhar", "lang", "plans", "exit"])
        .success()
        .stdout(
            contains("Language: ar")
                .and(contains("إدخار"))
                .and(contains("عطلة الصيف"))
                .and(contains("lang → Français")),
        );
}

#[test]
fn tab_requires_idikhar_screen() {
    let home = test_home();
    run_script(&home, &["tab savings", "exit"])
        .success()
        .stdout(contains("open Idikhar from the wallet home first"));
}

#[test]
fn back_from_home_is_rejected() {
    let home = test_home();
    run_script(&home, &["back", "exit"])
        .success()
        .stdout(contains("already on the wallet home screen"));
}

#[test]
fn config_changes_persist_between_runs() {
    let home = test_home();
    run_script(&home, &["config set language ar", "config set theme plain", "exit"])
        .success()
        .stdout(contains("language set to `ar`."));

    let saved = std::fs::read_to_string(home.join("config").join("config.json")).expect("config");
    assert!(saved.contains("\"language\": \"ar\""));
    assert!(saved.contains("\"theme\": \"plain\""));

    run_script(&home, &["config show", "exit"])
        .success()
        .stdout(contains("Configuration").and(contains("plain")));
}

#[test]
fn invalid_config_value_is_reported() {
    let home = test_home();
    run_script(&home, &["config set color sometimes", "exit"])
        .success()
        .stdout(contains("Invalid value `sometimes` for `color`"));
}

#[test]
fn version_reports_package_version() {
    let home = test_home();
    let output = run_script(&home, &["version", "exit"]).success().get_output().stdout.clone();
    let text = String::from_utf8(output).expect("utf8 output");
    let pattern = Regex::new(r"Idikhar Wallet \d+\.\d+\.\d+").expect("regex");
    assert!(pattern.is_match(&text), "unexpected version output: {text}");
}

#[test]
fn help_lists_commands() {
    let home = test_home();
    run_script(&home, &["help", "help plan", "exit"])
        .success()
        .stdout(
            contains("Available commands")
                .and(contains("Help: plan"))
                .and(contains("plan <new|set <field> <value...>|show|next|back|create>")),
        );
}

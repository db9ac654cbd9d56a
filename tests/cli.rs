use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "duo";

const LEDGER: &str = "\
Dono,Descricao,Valor,Tipo,Data,Categoria
Lorenzo,Salario,\"R$6.000,00\",Renda,1/3/25,
Maria,Salario,\"R$4.000,00\",Renda,1/3/25,
Lorenzo,Aluguel,1000,Despesa Familiar,5/3/25,Casa
Maria,Mercado semanal,120,Despesa 50/50,8/3/25,Mercado
Maria,Cinema,40,Despesa Pessoal,9/3/25,
Lorenzo,Mercado extra,80,Despesa 50/50,2/2/25,Mercado
Ninguem,Erro,10,Renda,2/2/25,
";

/// Command with an isolated config directory
fn duo(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("DUO_LEDGER_DIR", config_dir).env_remove("RUST_LOG");
    cmd
}

fn setup() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let ledger = dir.path().join("casa.csv");
    fs::write(&ledger, LEDGER).expect("write ledger");
    (dir, ledger)
}

#[test]
fn report_lists_months_newest_first_and_reports_bad_rows() {
    let (dir, ledger) = setup();

    let assert = duo(dir.path())
        .arg("report")
        .arg(&ledger)
        .assert()
        .success()
        .stdout(contains("2025-03").and(contains("2025-02")))
        .stderr(
            contains("Row 8: Invalid owner \"Ninguem\"")
                .and(contains("Skipped 1 row(s)"))
                .and(contains("skipping CSV row").not())
                .and(contains("\u{1b}[").not()),
        );

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert_eq!(stderr.matches("Invalid owner").count(), 1);

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let march = stdout.find("2025-03").expect("march row");
    let february = stdout.find("2025-02").expect("february row");
    assert!(march < february);
}

#[test]
fn verbose_report_logs_rejected_rows_without_colour() {
    let (dir, ledger) = setup();

    duo(dir.path())
        .args(["-vv", "report"])
        .arg(&ledger)
        .assert()
        .success()
        .stderr(contains("skipping CSV row").and(contains("\u{1b}[").not()));
}

#[test]
fn month_breakdown_shows_income_shares_and_debts() {
    let (dir, ledger) = setup();

    // Household 1000 split 60/40, groceries 120 split 50/50:
    // Lorenzo should pay 600 + 60, paid 1000, so he is owed 340.
    duo(dir.path())
        .args(["month", "--month", "2025-03"])
        .arg(&ledger)
        .assert()
        .success()
        .stdout(
            contains("March 2025")
                .and(contains("60.0%"))
                .and(contains("40.0%"))
                .and(contains("Lorenzo is owed R$340.00"))
                .and(contains("Maria owes Lorenzo R$340.00")),
        );
}

#[test]
fn unknown_month_fails() {
    let (dir, ledger) = setup();

    duo(dir.path())
        .args(["month", "--month", "2024-01"])
        .arg(&ledger)
        .assert()
        .failure()
        .stderr(contains("Month not found: 2024-01"));
}

#[test]
fn invalid_month_argument_fails() {
    let (dir, ledger) = setup();

    duo(dir.path())
        .args(["flow", "--month", "2025-13"])
        .arg(&ledger)
        .assert()
        .failure()
        .stderr(contains("Month out of range: 13"));
}

#[test]
fn flow_lists_categories_and_other() {
    let (dir, ledger) = setup();

    duo(dir.path())
        .args(["flow", "--month", "2025-03"])
        .arg(&ledger)
        .assert()
        .success()
        .stdout(
            contains("Spending Flow: March 2025")
                .and(contains("Home"))
                .and(contains("Groceries"))
                .and(contains("Other"))
                .and(contains("R$1160.00")),
        );
}

#[test]
fn search_is_case_insensitive() {
    let (dir, ledger) = setup();

    duo(dir.path())
        .args(["search", "MERCADO"])
        .arg(&ledger)
        .assert()
        .success()
        .stdout(
            contains("Mercado semanal")
                .and(contains("Mercado extra"))
                .and(contains("2 transaction(s)"))
                .and(contains("Cinema").not()),
        );
}

#[test]
fn report_json_to_file() {
    let (dir, ledger) = setup();
    let out = dir.path().join("report.json");

    duo(dir.path())
        .args(["report", "--format", "json", "--output"])
        .arg(&out)
        .arg(&ledger)
        .assert()
        .success()
        .stdout(contains("Report written to"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("report")).expect("valid json");
    assert_eq!(json["transaction_count"], 6);
    assert_eq!(json["months"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["months"][0]["month"]["year"], 2025);
    assert_eq!(json["months"][0]["month"]["month"], 2);
}

#[test]
fn export_is_reimportable() {
    let (dir, ledger) = setup();
    let normalized = dir.path().join("normalized.csv");

    duo(dir.path())
        .arg("export")
        .arg(&ledger)
        .arg("--output")
        .arg(&normalized)
        .assert()
        .success()
        .stdout(contains("Exported 6 transactions"));

    let text = fs::read_to_string(&normalized).expect("export");
    assert!(text.starts_with("Owner,Description,Amount,Type,Date,Category\n"));
    assert!(text.contains("Lorenzo,Aluguel,1000,Household,05/03/2025,Home"));

    duo(dir.path())
        .arg("report")
        .arg(&normalized)
        .assert()
        .success()
        .stderr(contains("Skipped").not());
}

#[test]
fn default_ledger_comes_from_settings() {
    let (dir, ledger) = setup();

    duo(dir.path())
        .arg("report")
        .assert()
        .failure()
        .stderr(contains("No ledger file given"));

    duo(dir.path())
        .args(["config", "--default-ledger"])
        .arg(&ledger)
        .args(["--currency", "$"])
        .assert()
        .success()
        .stdout(contains("Settings saved").and(contains("Currency symbol:    $")));

    duo(dir.path())
        .args(["month", "--month", "2025-02"])
        .assert()
        .success()
        .stdout(contains("February 2025").and(contains("$40.00")));
}

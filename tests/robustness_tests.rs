use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn write_csv(rows: &[[&str; 3]]) -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut wtr = csv::Writer::from_path(file.path()).unwrap();
    wtr.write_record(["debtor", "amount", "scheme"]).unwrap();
    for row in rows {
        wtr.write_record(row).unwrap();
    }
    wtr.flush().unwrap();
    file
}

fn accounts_csv() -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut wtr = csv::Writer::from_path(file.path()).unwrap();
    wtr.write_record(["account", "balance", "status", "schemes"])
        .unwrap();
    wtr.write_record(["acc-1", "10", "live", "bacs"]).unwrap();
    // Unknown status, skipped
    wtr.write_record(["acc-2", "10", "frozen", "bacs"]).unwrap();
    wtr.flush().unwrap();
    file
}

#[test]
fn test_malformed_requests_are_skipped() {
    let accounts = accounts_csv();
    let payments = write_csv(&[
        ["acc-1", "1.0", "bacs"],
        // Text in amount field
        ["acc-1", "not_a_number", "bacs"],
        ["acc-1", "2.0", "bacs"],
    ]);

    let mut cmd = Command::new(cargo_bin!("payauth"));
    cmd.arg(payments.path()).arg("--accounts").arg(accounts.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading payment request"))
        .stderr(predicate::str::contains("Error reading account"))
        .stdout(predicate::str::contains("acc-1,bacs,1,true,"))
        .stdout(predicate::str::contains("acc-1,bacs,2,true,"))
        .stdout(predicate::str::contains("acc-2").not());
}

#[test]
fn test_blank_debtor_is_rejected_not_declined() {
    let accounts = accounts_csv();
    let payments = write_csv(&[["", "1.0", "bacs"], ["acc-1", "1.0", "bacs"]]);

    let mut cmd = Command::new(cargo_bin!("payauth"));
    cmd.arg(payments.path()).arg("--accounts").arg(accounts.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Rejected payment request"))
        .stdout(predicate::str::contains(",bacs,1,false").not())
        .stdout(predicate::str::contains("acc-1,bacs,1,true,"));
}

#[test]
fn test_balance_overflow_rejects_row_and_continues() {
    let accounts = tempfile::NamedTempFile::new().unwrap();
    let mut wtr = csv::Writer::from_path(accounts.path()).unwrap();
    wtr.write_record(["account", "balance", "status", "schemes"])
        .unwrap();
    wtr.write_record(["acc-max", "79228162514264337593543950335", "live", "bacs"])
        .unwrap();
    wtr.write_record(["acc-1", "10", "live", "bacs"]).unwrap();
    wtr.flush().unwrap();

    let payments = write_csv(&[["acc-max", "-1", "bacs"], ["acc-1", "1", "bacs"]]);

    let mut cmd = Command::new(cargo_bin!("payauth"));
    cmd.arg(payments.path()).arg("--accounts").arg(accounts.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Balance overflow"))
        .stdout(predicate::str::contains("acc-max").not())
        .stdout(predicate::str::contains("acc-1,bacs,1,true,"));
}

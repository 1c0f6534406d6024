mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_twenty_tickets_is_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("purchases.csv");
    common::write_purchases_csv(&input, &[(1, 10, 10, 0)])?;

    let mut cmd = Command::new(cargo_bin!("cinema-tickets"));
    cmd.arg(&input);

    // 10 adults + 10 children = 20 seats, 300 total
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,10,10,0,20,300"));

    Ok(())
}

#[test]
fn test_twenty_one_tickets_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("purchases.csv");
    common::write_purchases_csv(&input, &[(1, 10, 11, 0)])?;

    let mut cmd = Command::new(cargo_bin!("cinema-tickets"));
    cmd.arg(&input);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("maximum of 20 tickets"))
        .stdout(predicate::str::contains("1,10,11").not());

    Ok(())
}

#[test]
fn test_large_account_identifier() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("purchases.csv");
    common::write_purchases_csv(&input, &[(u64::MAX, 1, 0, 0)])?;

    let mut cmd = Command::new(cargo_bin!("cinema-tickets"));
    cmd.arg(&input);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(format!("{},1,0,0,1,20", u64::MAX)));

    Ok(())
}

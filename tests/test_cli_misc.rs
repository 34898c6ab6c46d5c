use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use predicates::prelude::{predicate, PredicateBooleanExt};

#[test]
fn test_authors() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rebuttal")?;
    cmd.arg("authors").arg("--logging-level").arg("off");
    cmd.assert().success().stdout(predicate::eq(format!(
        "{} {}\n{}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS").replace(':', ", ")
    )));
    Ok(())
}

#[test]
fn test_problems() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rebuttal")?;
    cmd.arg("problems").arg("--logging-level").arg("off");
    cmd.assert().success().stdout(
        predicate::str::starts_with("[")
            .and(predicate::str::ends_with("]\n"))
            .and(predicate::str::contains("SE-GR"))
            .and(predicate::str::contains("EE-CO"))
            .and(predicate::str::contains("DC-PR"))
            .and(predicate::str::contains("DS-ST"))
            .and(predicate::function(|s: &str| s.split(',').count() == 16)),
    );
    Ok(())
}

fn check(instance: &str, reader: &str) -> Result<assert_cmd::assert::Assert, Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.af")?;
    file.write_str(instance)?;
    let mut cmd = Command::cargo_bin("rebuttal")?;
    cmd.arg("check")
        .arg("-f")
        .arg(file.path())
        .arg("--reader")
        .arg(reader)
        .arg("--logging-level")
        .arg("off");
    let assert = cmd.assert();
    file.close()?;
    Ok(assert)
}

#[test]
fn test_check_ok() -> Result<(), Box<dyn std::error::Error>> {
    check("p af 3\n1 2\n2 3\n", "iccma23")?
        .success()
        .stdout(predicate::str::is_empty());
    check("arg(a).\narg(b).\natt(a,b).\natt(a,b).\n", "apx")?.success();
    Ok(())
}

#[test]
fn test_check_errors() -> Result<(), Box<dyn std::error::Error>> {
    check("p af 2\n1 3\n", "iccma23")?.failure();
    check("arg(a).\narg(a).\n", "apx")?.failure();
    check("arg(a).\natt(a,b).\n", "apx")?.failure();
    Ok(())
}

#[test]
fn test_missing_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rebuttal")?;
    cmd.arg("check")
        .arg("-f")
        .arg("/this/file/does/not/exist.af")
        .arg("--logging-level")
        .arg("off");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn test_no_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("rebuttal")?.assert().failure();
    Ok(())
}

use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use predicates::prelude::predicate;

fn validate(
    instance: &str,
    reader: &str,
    counter: &str,
    target: &str,
    additional_args: &[&str],
) -> Result<assert_cmd::assert::Assert, Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.af")?;
    file.write_str(instance)?;
    let mut cmd = Command::cargo_bin("rebuttal")?;
    cmd.arg("validate")
        .arg("-f")
        .arg(file.path())
        .arg("--counter")
        .arg(counter)
        .arg("--target")
        .arg(target)
        .arg("--reader")
        .arg(reader)
        .arg("--logging-level")
        .arg("off")
        .args(additional_args);
    let assert = cmd.assert();
    file.close()?;
    Ok(assert)
}

const TWO_ARGS: &str = r#"arg(a).
arg(b).
"#;

const DEFENDED: &str = r#"arg(a).
arg(b).
arg(c).
att(b,a).
att(c,b).
"#;

const ODD_CYCLE: &str = r#"arg(a).
arg(b).
arg(c).
att(a,b).
att(b,c).
att(c,a).
"#;

#[test]
fn test_effective_attack() -> Result<(), Box<dyn std::error::Error>> {
    validate(TWO_ARGS, "apx", "b", "a", &[])?
        .success()
        .stdout(predicate::eq(
            "verdict: EFFECTIVE\ntarget label before: IN\ntarget label after: OUT\ngrounded extension: [b]\nresidual strength: 0 (preferred-fraction)\n",
        ));
    Ok(())
}

#[test]
fn test_redundant_attack_on_defended_argument() -> Result<(), Box<dyn std::error::Error>> {
    validate(DEFENDED, "apx", "b", "a", &["--policy", "grounded"])?
        .success()
        .stdout(predicate::eq(
            "verdict: REDUNDANT\ntarget label before: IN\ntarget label after: IN\ngrounded extension: [a,c]\nresidual strength: 1 (grounded)\n",
        ));
    Ok(())
}

#[test]
fn test_odd_cycle_strength() -> Result<(), Box<dyn std::error::Error>> {
    validate(ODD_CYCLE, "apx", "a", "b", &["--policy", "grounded"])?
        .success()
        .stdout(predicate::eq(
            "verdict: REDUNDANT\ntarget label before: UNDEC\ntarget label after: UNDEC\ngrounded extension: []\nresidual strength: 0.5 (grounded)\n",
        ));
    Ok(())
}

#[test]
fn test_unknown_counter() -> Result<(), Box<dyn std::error::Error>> {
    validate(TWO_ARGS, "apx", "z", "a", &[])?
        .success()
        .stdout(predicate::eq(
            "verdict: INVALID\ntarget label before: IN\ntarget label after: IN\ngrounded extension: [a,b]\ncause: no such argument: z\n",
        ));
    Ok(())
}

#[test]
fn test_unknown_target() -> Result<(), Box<dyn std::error::Error>> {
    validate(TWO_ARGS, "apx", "a", "z", &[])?
        .success()
        .stdout(predicate::eq(
            "verdict: INVALID\ntarget label before: none\ntarget label after: none\ngrounded extension: [a,b]\ncause: no such argument: z\n",
        ));
    Ok(())
}

#[test]
fn test_iccma23_labels() -> Result<(), Box<dyn std::error::Error>> {
    validate("p af 2\n", "iccma23", "2", "1", &[])?
        .success()
        .stdout(predicate::str::starts_with(
            "verdict: EFFECTIVE\ntarget label before: IN\ntarget label after: OUT\ngrounded extension: [2]\n",
        ));
    Ok(())
}

#[test]
fn test_iccma23_label_is_not_a_number() -> Result<(), Box<dyn std::error::Error>> {
    validate("p af 2\n", "iccma23", "x", "1", &[])?.failure();
    Ok(())
}

#[test]
fn test_unknown_policy() -> Result<(), Box<dyn std::error::Error>> {
    validate(TWO_ARGS, "apx", "b", "a", &["--policy", "fuzzy"])?.failure();
    Ok(())
}

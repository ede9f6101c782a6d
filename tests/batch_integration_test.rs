use anyhow::Result;
use numbers_validator::core::batch::Verdict;
use numbers_validator::utils::validation::Validate;
use numbers_validator::{BatchConfig, BatchRunner, NumbersValidator};
use tempfile::TempDir;

/// Table-driven checks for every operation, as a batch file.
const SUITE: &str = r#"
[batch]
name = "numbers-validator"
description = "Table-driven checks"

[[checks]]
name = "should return true if number is even"
operation = "isNumberEven"
input = 4
expected = true

[[checks]]
name = "should return false if number is odd"
operation = "isNumberEven"
input = 5
expected = false

[[checks]]
name = "should throw an error if provided with a string"
operation = "isNumberEven"
input = "4"
expected_error = '[4] is not of type "Number" it is of type "string"'

[[checks]]
name = "should throw an error if provided not an array"
operation = "getEvenNumbersFromArray"
input = { a = 1, b = 2, c = 3 }
expected_error = '[[object Object]] is not an array of "Numbers"'

[[checks]]
name = "should throw an error if provided an array consisting not only of numbers"
operation = "getEvenNumbersFromArray"
input = [1, 2, "3", 4]
expected_error = '[1,2,3,4] is not an array of "Numbers"'

[[checks]]
name = "should return [2] if provided [1, 2, 3, 5]"
operation = "getEvenNumbersFromArray"
input = [1, 2, 3, 5]
expected = [2]

[[checks]]
name = "should return true if every element in the array is of type number"
operation = "isAllNumbers"
input = [1, 2, 3]
expected = true

[[checks]]
name = "should return false if not every element in the array is of type number"
operation = "isAllNumbers"
input = [1, "2", 3]
expected = false

[[checks]]
name = "should throw an error if not provided with an array"
operation = "isAllNumbers"
input = { a = 1, b = 2, c = 3 }
expected_error = "[[object Object]] is not an array"

[[checks]]
name = "should throw an error if not provided with a number"
operation = "isInteger"
input = "two"
expected_error = "[two] is not a number"

[[checks]]
name = "should return true if provided with an integer"
operation = "isInteger"
input = 2
expected = true

[[checks]]
name = "should return false if provided with a number that is not integer"
operation = "isInteger"
input = 2.5
expected = false
"#;

#[test]
fn test_suite_file_passes() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("suite.toml");
    std::fs::write(&path, SUITE)?;

    let config = BatchConfig::from_file(&path)?;
    config.validate()?;

    let summary = BatchRunner::new(NumbersValidator::new()).run(&config);
    for report in &summary.reports {
        assert!(report.passed(), "{}", report);
    }
    assert_eq!(summary.reports.len(), 12);
    assert!(summary.all_passed());
    Ok(())
}

#[test]
fn test_failing_check_is_reported() -> Result<()> {
    let content = r#"
[batch]
name = "wrong expectations"
fail_fast = true

[[checks]]
name = "odd is not even"
operation = "isNumberEven"
input = 3
expected = true

[[checks]]
name = "never runs"
operation = "isInteger"
input = 1
"#;
    let config = BatchConfig::from_toml_str(content)?;
    config.validate()?;

    let summary = BatchRunner::new(NumbersValidator::new()).run(&config);
    assert_eq!(summary.reports.len(), 1);
    assert_eq!(summary.skipped, 1);
    assert!(matches!(summary.reports[0].verdict, Verdict::WrongOutcome { .. }));
    assert_eq!(
        summary.reports[0].to_string(),
        "FAIL odd is not even (isNumberEven): expected true, got false"
    );
    Ok(())
}

#[test]
fn test_float_expectations_match_integers() -> Result<()> {
    let content = r#"
[batch]
name = "floats"

[[checks]]
name = "float evens"
operation = "getEvenNumbersFromArray"
input = [2.0, 3.0, 4.5, 6.0]
expected = [2, 6]
"#;
    let config = BatchConfig::from_toml_str(content)?;

    let summary = BatchRunner::new(NumbersValidator::new()).run(&config);
    assert!(summary.all_passed());
    Ok(())
}

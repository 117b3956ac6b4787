use advent_harness::utils::validation::Validate;
use advent_harness::{HarnessConfig, Scaffold};
use anyhow::Result;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_generates_exactly_25_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let report = Scaffold::new(temp_dir.path()).generate()?;

    assert_eq!(report.created().len(), 25);
    assert!(report.skipped().is_empty());

    let mut names: Vec<String> = fs::read_dir(temp_dir.path())?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<std::io::Result<_>>()?;
    names.sort();

    let expected: Vec<String> = (1..=25).map(|day| format!("day{:02}.rs", day)).collect();
    assert_eq!(names, expected);

    // 沒有模板時檔案為空
    assert_eq!(fs::read_to_string(temp_dir.path().join("day13.rs"))?, "");
    Ok(())
}

#[test]
fn test_existing_files_are_not_overwritten() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let existing = temp_dir.path().join("day05.rs");
    fs::write(&existing, "fn main() { /* solved */ }\n")?;

    let report = Scaffold::new(temp_dir.path())
        .with_template("// day {{day}}\n")
        .generate()?;

    assert_eq!(report.created().len(), 24);
    assert_eq!(report.skipped(), vec![&existing]);
    assert_eq!(report.total(), 25);
    assert_eq!(fs::read_to_string(&existing)?, "fn main() { /* solved */ }\n");
    assert_eq!(fs::read_to_string(temp_dir.path().join("day06.rs"))?, "// day 06\n");

    // 再跑一次全部略過
    let again = Scaffold::new(temp_dir.path()).generate()?;
    assert!(again.created().is_empty());
    assert_eq!(again.skipped().len(), 25);
    Ok(())
}

#[test]
fn test_report_lists_days_in_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("day03.rs"), "")?;

    let report = Scaffold::new(temp_dir.path()).generate()?;

    let days: Vec<u8> = report.entries.iter().map(|e| e.day).collect();
    assert_eq!(days, (1..=25).collect::<Vec<u8>>());
    assert!(!report.entries[2].created);
    assert!(report.entries[2].to_string().ends_with("day03.rs (exists, skipped)"));
    assert!(report.entries[3].to_string().ends_with("day04.rs"));
    Ok(())
}

#[test]
fn test_scaffold_from_config_with_template_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().to_str().unwrap().replace('\\', "/");
    let template_path = temp_dir.path().join("template.rs");
    fs::write(
        &template_path,
        "pub const PUZZLE: &str = include_str!(\"../../puzzles/day{{day}}.txt\");\n",
    )?;

    let config = HarnessConfig::from_toml_str(&format!(
        r#"
[scaffold]
dir = "{root}/src/bin"
pattern = "Day{{day}}.java"
first_day = 1
count = 3
template = "{root}/template.rs"
"#
    ))?;
    config.validate()?;

    let report = config.scaffold()?.generate()?;
    assert_eq!(report.created().len(), 3);

    let content = fs::read_to_string(temp_dir.path().join("src/bin/Day03.java"))?;
    assert_eq!(
        content,
        "pub const PUZZLE: &str = include_str!(\"../../puzzles/day03.txt\");\n"
    );
    Ok(())
}

#[test]
fn test_missing_template_file_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let result = Scaffold::new(temp_dir.path()).with_template_file(&temp_dir.path().join("nope.rs"));
    assert!(result.is_err());
    Ok(())
}

use crate::domain::model::{ScaffoldEntry, ScaffoldReport};
use crate::utils::error::{HarnessError, Result};
use crate::utils::validation::{self, Validate, DAY_PLACEHOLDER, LAST_DAY};
use regex::{Captures, Regex};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub const DEFAULT_PATTERN: &str = "day{day}.rs";
pub const DEFAULT_COUNT: u8 = 25;

static TEMPLATE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*(day|day_number)\s*\}\}").expect("static regex"));

/// Pre-creates one solution file per day.
#[derive(Debug, Clone)]
pub struct Scaffold {
    pub dir: PathBuf,
    pub pattern: String,
    pub first_day: u8,
    pub count: u8,
    pub template: Option<String>,
}

impl Default for Scaffold {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            pattern: DEFAULT_PATTERN.to_string(),
            first_day: 1,
            count: DEFAULT_COUNT,
            template: None,
        }
    }
}

impl Scaffold {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn with_days(mut self, first_day: u8, count: u8) -> Self {
        self.first_day = first_day;
        self.count = count;
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// 從檔案讀取模板內容
    pub fn with_template_file(self, path: &Path) -> Result<Self> {
        let template = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => HarnessError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => HarnessError::InputRead {
                path: path.to_path_buf(),
                source,
            },
        })?;
        Ok(self.with_template(template))
    }

    pub fn days(&self) -> impl Iterator<Item = u8> {
        let first = self.first_day;
        let last = first.saturating_add(self.count).saturating_sub(1);
        (first..=last).take(self.count as usize)
    }

    /// `day{day}.rs` with day 3 becomes `day03.rs`.
    pub fn file_name(&self, day: u8) -> String {
        self.pattern.replacen(DAY_PLACEHOLDER, &format!("{:02}", day), 1)
    }

    pub fn render(&self, day: u8) -> String {
        match &self.template {
            Some(template) => render_template(template, day),
            None => String::new(),
        }
    }

    /// Creates every missing file. Existing files are left untouched and
    /// reported as skipped.
    pub fn generate(&self) -> Result<ScaffoldReport> {
        self.validate()?;
        fs::create_dir_all(&self.dir)?;

        let mut report = ScaffoldReport::default();
        for day in self.days() {
            let path = self.dir.join(self.file_name(day));

            let created = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(self.render(day).as_bytes())?;
                    tracing::debug!("Created {}", path.display());
                    true
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    tracing::debug!("Skipping existing {}", path.display());
                    false
                }
                Err(e) => return Err(e.into()),
            };
            report.entries.push(ScaffoldEntry { day, path, created });
        }

        tracing::info!(
            "📁 Scaffolded {} files in {} ({} skipped)",
            report.created().len(),
            self.dir.display(),
            report.skipped().len()
        );
        Ok(report)
    }
}

impl Validate for Scaffold {
    fn validate(&self) -> Result<()> {
        validation::validate_path("scaffold.dir", &self.dir.to_string_lossy())?;
        validation::validate_pattern("scaffold.pattern", &self.pattern)?;
        validation::validate_day("scaffold.first_day", self.first_day)?;
        validation::validate_positive_number("scaffold.count", self.count as usize, 1)?;
        validation::validate_range(
            "scaffold.count",
            self.count,
            1,
            LAST_DAY - self.first_day + 1,
        )
    }
}

/// `{{day}}` becomes the padded index, `{{day_number}}` the plain number.
pub fn render_template(template: &str, day: u8) -> String {
    TEMPLATE_PLACEHOLDER.replace_all(template, |caps: &Captures| match &caps[1] {
        "day" => format!("{:02}", day),
        _ => day.to_string(),
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_names_are_zero_padded() {
        let scaffold = Scaffold::default();
        assert_eq!(scaffold.file_name(1), "day01.rs");
        assert_eq!(scaffold.file_name(25), "day25.rs");

        let java = Scaffold::default().with_pattern("Day{day}.java");
        assert_eq!(java.file_name(9), "Day09.java");
    }

    #[test]
    fn test_days_range() {
        let days: Vec<u8> = Scaffold::default().days().collect();
        assert_eq!(days.len(), 25);
        assert_eq!(days.first(), Some(&1));
        assert_eq!(days.last(), Some(&25));

        let days: Vec<u8> = Scaffold::default().with_days(20, 3).days().collect();
        assert_eq!(days, vec![20, 21, 22]);
    }

    #[test]
    fn test_render_template() {
        let template = "const PUZZLE: &str = include_str!(\"../../puzzles/day{{day}}.txt\");\n// Day {{ day_number }}\n";
        assert_eq!(
            render_template(template, 4),
            "const PUZZLE: &str = include_str!(\"../../puzzles/day04.txt\");\n// Day 4\n"
        );
    }

    #[test]
    fn test_count_past_last_day_is_invalid() {
        let dir = TempDir::new().unwrap();
        let scaffold = Scaffold::new(dir.path()).with_days(24, 5);
        assert!(scaffold.validate().is_err());
        assert!(scaffold.generate().is_err());
    }

    #[test]
    fn test_generate_writes_template() {
        let dir = TempDir::new().unwrap();
        let report = Scaffold::new(dir.path())
            .with_days(1, 2)
            .with_template("// day {{day}}\n")
            .generate()
            .unwrap();

        assert_eq!(report.created().len(), 2);
        let content = std::fs::read_to_string(dir.path().join("day02.rs")).unwrap();
        assert_eq!(content, "// day 02\n");
    }
}

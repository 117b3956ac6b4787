use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub const ALL: [Part; 2] = [Part::One, Part::Two];

    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Part::One),
            2 => Some(Part::Two),
            _ => None,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "part {}", self.number())
    }
}

/// Which of the two loaded texts a part ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Puzzle,
    Example,
}

impl InputKind {
    pub fn label(self) -> &'static str {
        match self {
            InputKind::Puzzle => "Part",
            InputKind::Example => "Test",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartResult {
    pub day: u8,
    pub part: Part,
    pub kind: InputKind,
    pub answer: String,
    #[serde(rename = "elapsed_us", with = "micros")]
    pub elapsed: Duration,
}

impl PartResult {
    /// `Part 1`, `Test 2`, ...
    pub fn label(&self) -> String {
        format!("{} {}", self.kind.label(), self.part.number())
    }
}

impl fmt::Display for PartResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label(), self.answer)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub day: u8,
    pub started_at: DateTime<Local>,
    pub results: Vec<PartResult>,
}

impl RunReport {
    pub fn total_elapsed(&self) -> Duration {
        self.results.iter().map(|r| r.elapsed).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldEntry {
    pub day: u8,
    pub path: PathBuf,
    pub created: bool,
}

impl fmt::Display for ScaffoldEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.created {
            write!(f, "{}", self.path.display())
        } else {
            write!(f, "{} (exists, skipped)", self.path.display())
        }
    }
}

/// One entry per day, in day order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub entries: Vec<ScaffoldEntry>,
}

impl ScaffoldReport {
    pub fn created(&self) -> Vec<&PathBuf> {
        self.entries.iter().filter(|e| e.created).map(|e| &e.path).collect()
    }

    pub fn skipped(&self) -> Vec<&PathBuf> {
        self.entries.iter().filter(|e| !e.created).map(|e| &e.path).collect()
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }
}

mod micros {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_micros() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_micros)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_result_display() {
        let result = PartResult {
            day: 1,
            part: Part::Two,
            kind: InputKind::Example,
            answer: "281".to_string(),
            elapsed: Duration::from_millis(3),
        };
        assert_eq!(result.to_string(), "Test 2: 281");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["elapsed_us"], 3000);
        assert_eq!(json["kind"], "example");
    }

    #[test]
    fn test_run_report_total_elapsed() {
        let result = |part, ms| PartResult {
            day: 1,
            part,
            kind: InputKind::Puzzle,
            answer: "0".to_string(),
            elapsed: Duration::from_millis(ms),
        };
        let report = RunReport {
            day: 1,
            started_at: Local::now(),
            results: vec![result(Part::One, 4), result(Part::Two, 6)],
        };
        assert_eq!(report.total_elapsed(), Duration::from_millis(10));
    }

    #[test]
    fn test_scaffold_report_keeps_day_order() {
        let entry = |day: u8, created| ScaffoldEntry {
            day,
            path: PathBuf::from(format!("day{:02}.rs", day)),
            created,
        };
        let report = ScaffoldReport {
            entries: vec![entry(1, true), entry(2, false), entry(3, true)],
        };

        let lines: Vec<String> = report.entries.iter().map(|e| e.to_string()).collect();
        assert_eq!(lines, vec!["day01.rs", "day02.rs (exists, skipped)", "day03.rs"]);
        assert_eq!(report.created().len(), 2);
        assert_eq!(report.skipped(), vec![&PathBuf::from("day02.rs")]);
    }

    #[test]
    fn test_part_from_number() {
        assert_eq!(Part::from_number(1), Some(Part::One));
        assert_eq!(Part::from_number(2), Some(Part::Two));
        assert_eq!(Part::from_number(3), None);
    }
}

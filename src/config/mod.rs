pub mod toml_config;

pub use toml_config::HarnessConfig;

use crate::utils::validation::LAST_DAY;
use chrono::Datelike;

/// 十二月 1-25 日回傳當天日期，其他時候沒有預設值
pub fn default_day<D: Datelike>(today: &D) -> Option<u8> {
    match (today.month(), today.day()) {
        (12, day) if day <= LAST_DAY as u32 => Some(day as u8),
        _ => None,
    }
}

#[cfg(feature = "cli")]
pub use cli_args::{CliConfig, Command, RunArgs, ScaffoldArgs};

#[cfg(feature = "cli")]
mod cli_args {
    use super::*;
    use crate::domain::model::Part;
    use crate::utils::error::{HarnessError, Result};
    use crate::utils::validation::validate_required_field;
    use clap::{Args, Parser, Subcommand};
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "aoc")]
    #[command(about = "Run daily puzzle solutions against puzzle and example input")]
    pub struct CliConfig {
        /// Path to TOML configuration file
        #[arg(long, global = true, default_value = toml_config::DEFAULT_CONFIG_FILE)]
        pub config: PathBuf,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Log CPU and memory usage")]
        pub monitor: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Solve a day against its puzzle input
        Run(RunArgs),
        /// Run a day against its example input
        Test(RunArgs),
        /// Solve every registered day
        All,
        /// List registered days
        List,
        /// Pre-create solution files
        Scaffold(ScaffoldArgs),
    }

    #[derive(Debug, Clone, Args)]
    pub struct RunArgs {
        /// Day to run; defaults to today during December
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
        pub day: Option<u8>,

        /// Run only one part
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
        pub part: Option<u8>,

        /// Override the puzzle input path
        #[arg(long)]
        pub puzzle: Option<PathBuf>,

        /// Override the example input path
        #[arg(long)]
        pub example: Option<PathBuf>,

        /// Print the run report as JSON
        #[arg(long)]
        pub json: bool,
    }

    impl RunArgs {
        pub fn resolve_day<D: Datelike>(&self, today: &D) -> Result<u8> {
            let day = self.day.or_else(|| default_day(today));
            validate_required_field("day", &day).copied()
        }

        pub fn part(&self) -> Result<Option<Part>> {
            self.part
                .map(|n| {
                    Part::from_number(n).ok_or_else(|| HarnessError::InvalidConfigValueError {
                        field: "part".to_string(),
                        value: n.to_string(),
                        reason: "Part must be 1 or 2".to_string(),
                    })
                })
                .transpose()
        }

        pub fn puzzle_path(&self, config: &HarnessConfig, day: u8) -> PathBuf {
            self.puzzle.clone().unwrap_or_else(|| config.puzzle_path(day))
        }

        pub fn example_path(&self, config: &HarnessConfig, day: u8) -> PathBuf {
            self.example.clone().unwrap_or_else(|| config.example_path(day))
        }
    }

    #[derive(Debug, Clone, Args)]
    pub struct ScaffoldArgs {
        /// Directory to create files in
        #[arg(long)]
        pub dir: Option<String>,

        /// File name pattern, `{day}` is replaced by the two-digit day
        #[arg(long)]
        pub pattern: Option<String>,

        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=25))]
        pub first_day: Option<u8>,

        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=25))]
        pub count: Option<u8>,

        /// Template file used as the content of each new file
        #[arg(long)]
        pub template: Option<String>,
    }

    impl ScaffoldArgs {
        /// 命令列參數覆蓋配置檔設定
        pub fn apply(&self, config: &mut HarnessConfig) {
            if let Some(dir) = &self.dir {
                config.scaffold.dir = dir.clone();
            }
            if let Some(pattern) = &self.pattern {
                config.scaffold.pattern = pattern.clone();
            }
            if let Some(first_day) = self.first_day {
                config.scaffold.first_day = first_day;
            }
            if let Some(count) = self.count {
                config.scaffold.count = count;
            }
            if let Some(template) = &self.template {
                config.scaffold.template = Some(template.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_default_day_in_december() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 7).unwrap();
        assert_eq!(default_day(&date), Some(7));

        let date = NaiveDate::from_ymd_opt(2023, 12, 26).unwrap();
        assert_eq!(default_day(&date), None);

        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(default_day(&date), None);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_parse_run_command() {
        use crate::domain::model::Part;
        use clap::Parser;

        let cli = CliConfig::parse_from(["aoc", "run", "--day", "3", "--part", "2", "-v"]);
        assert!(cli.verbose);
        match cli.command {
            Command::Run(args) => {
                let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
                assert_eq!(args.resolve_day(&date).unwrap(), 3);
                assert_eq!(args.part().unwrap(), Some(Part::Two));
            }
            other => panic!("expected run, got {:?}", other),
        }
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_day_required_outside_december() {
        use clap::Parser;

        let cli = CliConfig::parse_from(["aoc", "test"]);
        let Command::Test(args) = cli.command else {
            panic!("expected test command");
        };
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(args.resolve_day(&date).is_err());

        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(args.resolve_day(&date).unwrap(), 1);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_scaffold_flags_override_config_file() {
        use clap::Parser;

        let mut config = HarnessConfig::from_toml_str(
            r#"
[scaffold]
dir = "src/bin"
pattern = "day{day}.rs"
count = 25
"#,
        )
        .unwrap();

        let cli = CliConfig::parse_from(["aoc", "scaffold", "--count", "3", "--pattern", "Day{day}.java"]);
        let Command::Scaffold(args) = cli.command else {
            panic!("expected scaffold command");
        };
        args.apply(&mut config);

        assert_eq!(config.scaffold.count, 3);
        assert_eq!(config.scaffold.pattern, "Day{day}.java");
        // 未指定的參數維持配置檔的值
        assert_eq!(config.scaffold.dir, "src/bin");
        assert_eq!(config.scaffold.first_day, 1);
        assert!(config.scaffold.template.is_none());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_input_path_flags_override_config_file() {
        use clap::Parser;
        use std::path::PathBuf;

        let config = HarnessConfig::from_toml_str("[inputs]\npuzzles_dir = \"data\"\n").unwrap();

        let cli = CliConfig::parse_from(["aoc", "run", "--day", "4", "--puzzle", "x.txt"]);
        let Command::Run(args) = cli.command else {
            panic!("expected run command");
        };

        assert_eq!(args.puzzle_path(&config, 4), PathBuf::from("x.txt"));
        assert_ne!(args.puzzle_path(&config, 4), config.puzzle_path(4));
        assert_eq!(args.example_path(&config, 4), config.example_path(4));

        let cli = CliConfig::parse_from(["aoc", "test", "--day", "4", "--example", "small.txt"]);
        let Command::Test(args) = cli.command else {
            panic!("expected test command");
        };
        assert_eq!(args.example_path(&config, 4), PathBuf::from("small.txt"));
        assert_eq!(args.puzzle_path(&config, 4), PathBuf::from("data/day04.txt"));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_invalid_day_rejected_by_parser() {
        use clap::Parser;

        assert!(CliConfig::try_parse_from(["aoc", "run", "--day", "26"]).is_err());
        assert!(CliConfig::try_parse_from(["aoc", "run", "--part", "3"]).is_err());
    }
}

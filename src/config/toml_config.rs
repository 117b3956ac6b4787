use crate::core::scaffold::{Scaffold, DEFAULT_COUNT, DEFAULT_PATTERN};
use crate::utils::error::{HarnessError, Result};
use crate::utils::validation::{self, Validate, LAST_DAY};
use serde::{Deserialize, Serialize};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub const DEFAULT_CONFIG_FILE: &str = "aoc.toml";

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub inputs: InputsConfig,
    pub scaffold: ScaffoldConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputsConfig {
    pub puzzles_dir: String,
    pub samples_dir: String,
    pub puzzle_pattern: String,
    pub example_pattern: String,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            puzzles_dir: "puzzles".to_string(),
            samples_dir: "samples".to_string(),
            puzzle_pattern: "day{day}.txt".to_string(),
            example_pattern: "day{day}.txt".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    pub dir: String,
    pub pattern: String,
    pub first_day: u8,
    pub count: u8,
    pub template: Option<String>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            dir: ".".to_string(),
            pattern: DEFAULT_PATTERN.to_string(),
            first_day: 1,
            count: DEFAULT_COUNT,
            template: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl HarnessConfig {
    /// 載入配置檔；檔案不存在時使用預設值
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| HarnessError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${AOC_INPUTS})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// 取得某天的謎題輸入路徑
    pub fn puzzle_path(&self, day: u8) -> PathBuf {
        day_path(&self.inputs.puzzles_dir, &self.inputs.puzzle_pattern, day)
    }

    /// 取得某天的範例輸入路徑
    pub fn example_path(&self, day: u8) -> PathBuf {
        day_path(&self.inputs.samples_dir, &self.inputs.example_pattern, day)
    }

    pub fn scaffold(&self) -> Result<Scaffold> {
        let scaffold = Scaffold::new(&self.scaffold.dir)
            .with_pattern(self.scaffold.pattern.clone())
            .with_days(self.scaffold.first_day, self.scaffold.count);

        match &self.scaffold.template {
            Some(template) => scaffold.with_template_file(Path::new(template)),
            None => Ok(scaffold),
        }
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }
}

fn day_path(dir: &str, pattern: &str, day: u8) -> PathBuf {
    Path::new(dir).join(pattern.replacen(validation::DAY_PLACEHOLDER, &format!("{:02}", day), 1))
}

impl Validate for HarnessConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("inputs.puzzles_dir", &self.inputs.puzzles_dir)?;
        validation::validate_path("inputs.samples_dir", &self.inputs.samples_dir)?;
        validation::validate_pattern("inputs.puzzle_pattern", &self.inputs.puzzle_pattern)?;
        validation::validate_pattern("inputs.example_pattern", &self.inputs.example_pattern)?;

        validation::validate_path("scaffold.dir", &self.scaffold.dir)?;
        validation::validate_pattern("scaffold.pattern", &self.scaffold.pattern)?;
        validation::validate_day("scaffold.first_day", self.scaffold.first_day)?;
        validation::validate_range(
            "scaffold.count",
            self.scaffold.count,
            1,
            LAST_DAY - self.scaffold.first_day + 1,
        )?;
        if let Some(template) = &self.scaffold.template {
            validation::validate_path("scaffold.template", template)?;
        }

        if let Some(level) = &self.logging.level {
            validation::validate_non_empty_string("logging.level", level)?;
        }

        Ok(())
    }
}

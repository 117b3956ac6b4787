use crate::domain::model::{InputKind, Part, PartResult, RunReport};
use crate::domain::ports::{InputSource, Solution};
use crate::utils::error::{HarnessError, Result};
use crate::utils::monitor::SystemMonitor;
use chrono::Local;
use std::cell::RefCell;
use std::path::Path;
use std::time::Instant;

/// Holds one day's solution together with its puzzle and example texts.
///
/// Both texts are read once when the runner is built and are never mutated,
/// so running the same part twice against the same text gives the same answer.
pub struct PuzzleRunner<S: Solution> {
    solution: S,
    puzzle: String,
    example: String,
    monitor: RefCell<SystemMonitor>,
}

impl<S: Solution> PuzzleRunner<S> {
    /// 讀取謎題與範例輸入；任一檔案缺失即失敗
    pub fn load<I: InputSource>(
        solution: S,
        source: &I,
        puzzle_path: &Path,
        example_path: &Path,
    ) -> Result<Self> {
        let puzzle = source.read_input(puzzle_path)?;
        let example = source.read_input(example_path)?;
        tracing::debug!(
            "Loaded {} ({} bytes puzzle, {} bytes example)",
            solution.title(),
            puzzle.len(),
            example.len()
        );
        Ok(Self::from_texts(solution, puzzle, example))
    }

    pub fn from_texts(solution: S, puzzle: impl Into<String>, example: impl Into<String>) -> Self {
        Self {
            solution,
            puzzle: puzzle.into(),
            example: example.into(),
            monitor: RefCell::new(SystemMonitor::default()),
        }
    }

    pub fn with_monitoring(self, enabled: bool) -> Self {
        Self {
            monitor: RefCell::new(SystemMonitor::new(enabled)),
            ..self
        }
    }

    pub fn solution(&self) -> &S {
        &self.solution
    }

    pub fn puzzle(&self) -> &str {
        &self.puzzle
    }

    pub fn example(&self) -> &str {
        &self.example
    }

    pub fn solve(&self) -> Result<Vec<PartResult>> {
        Ok(vec![self.solve1()?, self.solve2()?])
    }

    pub fn solve1(&self) -> Result<PartResult> {
        self.run_part(Part::One, InputKind::Puzzle)
    }

    pub fn solve2(&self) -> Result<PartResult> {
        self.run_part(Part::Two, InputKind::Puzzle)
    }

    pub fn test(&self) -> Result<Vec<PartResult>> {
        Ok(vec![self.test1()?, self.test2()?])
    }

    pub fn test1(&self) -> Result<PartResult> {
        self.run_part(Part::One, InputKind::Example)
    }

    pub fn test2(&self) -> Result<PartResult> {
        self.run_part(Part::Two, InputKind::Example)
    }

    /// `part` of `None` runs both parts in order.
    pub fn execute(&self, part: Option<Part>, kind: InputKind) -> Result<RunReport> {
        let started_at = Local::now();
        let results = match part {
            Some(part) => vec![self.run_part(part, kind)?],
            None => Part::ALL
                .iter()
                .map(|&part| self.run_part(part, kind))
                .collect::<Result<Vec<_>>>()?,
        };

        self.monitor.borrow_mut().log_final_stats();

        Ok(RunReport {
            day: self.solution.day(),
            started_at,
            results,
        })
    }

    fn run_part(&self, part: Part, kind: InputKind) -> Result<PartResult> {
        let input = match kind {
            InputKind::Puzzle => &self.puzzle,
            InputKind::Example => &self.example,
        };
        let day = self.solution.day();

        tracing::debug!("Running {} {} on {:?} input", self.solution.title(), part, kind);
        let start = Instant::now();
        let answer = self.solution.run(part, input).map_err(|e| match e {
            err @ HarnessError::SolutionError { .. } => err,
            other => HarnessError::SolutionError {
                day,
                part,
                message: other.to_string(),
            },
        })?;
        let elapsed = start.elapsed();

        let result = PartResult {
            day,
            part,
            kind,
            answer,
            elapsed,
        };
        tracing::info!("✅ {} {} in {:?}", self.solution.title(), result.label(), elapsed);
        self.monitor.borrow_mut().log_stats(&result.label());

        Ok(result)
    }
}

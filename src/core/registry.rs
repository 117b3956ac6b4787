use crate::domain::ports::Solution;
use crate::utils::error::{HarnessError, Result};
use std::collections::BTreeMap;

#[derive(Default)]
pub struct Registry {
    solutions: BTreeMap<u8, Box<dyn Solution>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A later registration for the same day replaces the earlier one.
    pub fn register(&mut self, solution: Box<dyn Solution>) -> &mut Self {
        let day = solution.day();
        if self.solutions.insert(day, solution).is_some() {
            tracing::warn!("Replacing previously registered solution for day {}", day);
        }
        self
    }

    pub fn get(&self, day: u8) -> Result<&dyn Solution> {
        self.solutions
            .get(&day)
            .map(|s| s.as_ref())
            .ok_or(HarnessError::UnknownDay { day })
    }

    pub fn days(&self) -> Vec<u8> {
        self.solutions.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Solution> + '_ {
        self.solutions.values().map(|s| s.as_ref())
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}

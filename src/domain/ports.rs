use crate::domain::model::Part;
use crate::utils::error::Result;
use std::path::Path;

/// One day's puzzle. Both parts are pure functions of their input text.
pub trait Solution {
    fn day(&self) -> u8;

    fn title(&self) -> String {
        format!("Day {:02}", self.day())
    }

    fn part1(&self, input: &str) -> Result<String>;
    fn part2(&self, input: &str) -> Result<String>;

    fn run(&self, part: Part, input: &str) -> Result<String> {
        match part {
            Part::One => self.part1(input),
            Part::Two => self.part2(input),
        }
    }
}

impl<S: Solution + ?Sized> Solution for Box<S> {
    fn day(&self) -> u8 {
        (**self).day()
    }

    fn title(&self) -> String {
        (**self).title()
    }

    fn part1(&self, input: &str) -> Result<String> {
        (**self).part1(input)
    }

    fn part2(&self, input: &str) -> Result<String> {
        (**self).part2(input)
    }
}

impl<S: Solution + ?Sized> Solution for &S {
    fn day(&self) -> u8 {
        (**self).day()
    }

    fn title(&self) -> String {
        (**self).title()
    }

    fn part1(&self, input: &str) -> Result<String> {
        (**self).part1(input)
    }

    fn part2(&self, input: &str) -> Result<String> {
        (**self).part2(input)
    }
}

pub trait InputSource {
    fn read_input(&self, path: &Path) -> Result<String>;
}

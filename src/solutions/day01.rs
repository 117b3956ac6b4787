use crate::domain::ports::Solution;
use crate::utils::error::{HarnessError, Result};

const DIGITS: [(&str, usize); 10] = [
    ("0", 0), ("1", 1), ("2", 2), ("3", 3), ("4", 4),
    ("5", 5), ("6", 6), ("7", 7), ("8", 8), ("9", 9),
];

// 只有 one 到 nine 算數字，zero 不算
const WORDS: [(&str, usize); 9] = [
    ("one", 1), ("two", 2), ("three", 3), ("four", 4), ("five", 5),
    ("six", 6), ("seven", 7), ("eight", 8), ("nine", 9),
];

/// Trebuchet calibration: each line's value is its first and last digit.
pub struct Trebuchet;

impl Trebuchet {
    fn calibrate(input: &str, words: &[(&str, usize)]) -> Result<usize> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| Self::line_value(line, words))
            .sum()
    }

    fn line_value(line: &str, words: &[(&str, usize)]) -> Result<usize> {
        // 同一位置只會有一個詞開頭，故 (位置, 數字) 可直接比較
        let first = words
            .iter()
            .filter_map(|&(w, digit)| line.find(w).map(|p| (p, digit)))
            .min();
        let last = words
            .iter()
            .filter_map(|&(w, digit)| line.rfind(w).map(|p| (p, digit)))
            .max();

        match (first, last) {
            (Some((_, x)), Some((_, y))) => Ok(10 * x + y),
            _ => Err(HarnessError::parse(format!("no digit in line '{}'", line))),
        }
    }
}

impl Solution for Trebuchet {
    fn day(&self) -> u8 {
        1
    }

    fn title(&self) -> String {
        "Day 01: Trebuchet?!".to_string()
    }

    fn part1(&self, input: &str) -> Result<String> {
        Self::calibrate(input, &DIGITS).map(|n| n.to_string())
    }

    fn part2(&self, input: &str) -> Result<String> {
        let words: Vec<(&str, usize)> = DIGITS.iter().chain(WORDS.iter()).copied().collect();
        Self::calibrate(input, &words).map(|n| n.to_string())
    }
}

//! Mapping exercises: square random values, zip letters with digits, skip a prefix.

use std::io::Write;

use futures::{Stream, StreamExt};

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::operators::{zip_with, PipelineExt};
use crate::source::range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingRoutine {
    SquaresOfRandom,
    LetterDigitPairs,
    SkipThree,
}

impl MappingRoutine {
    pub const ALL: [MappingRoutine; 3] = [
        MappingRoutine::SquaresOfRandom,
        MappingRoutine::LetterDigitPairs,
        MappingRoutine::SkipThree,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MappingRoutine::SquaresOfRandom => "squares_of_random",
            MappingRoutine::LetterDigitPairs => "letter_digit_pairs",
            MappingRoutine::SkipThree => "skip_three",
        }
    }

    pub fn run<W: Write>(&self, config: &PipelineConfig, out: W) -> Result<usize> {
        let name = self.name();
        let result = match self {
            MappingRoutine::SquaresOfRandom => {
                squares_of_random(config).and_then(|stream| super::print_all(name, stream, out))
            }
            MappingRoutine::LetterDigitPairs => {
                letter_digit_pairs(config).and_then(|stream| super::print_all(name, stream, out))
            }
            MappingRoutine::SkipThree => {
                skip_three(config).and_then(|stream| super::print_all(name, stream, out))
            }
        };
        super::warn_on_error(name, result)
    }
}

/// range(0, N) -> random in [0, bound) -> square
pub fn squares_of_random(config: &PipelineConfig) -> Result<impl Stream<Item = i64>> {
    Ok(range(0, config.range_len, config)?
        .randomize(config.random_bound)?
        .squared())
}

/// Random letter zipped with a random digit, e.g. `"Q7"`.
pub fn letter_digit_pairs(config: &PipelineConfig) -> Result<impl Stream<Item = String>> {
    let letters = range(0, config.range_len, config)?.letter_codes(config.letter_count)?;
    let digits = range(0, config.range_len, config)?.randomize(config.digit_bound)?;
    Ok(zip_with(letters, digits, |letter, digit| format!("{}{}", letter, digit)))
}

/// range(0, 10) -> random in [0, bound) -> skip the first few
pub fn skip_three(config: &PipelineConfig) -> Result<impl Stream<Item = i32>> {
    Ok(range(0, config.short_range_len, config)?
        .randomize(config.random_bound)?
        .skip(config.skip_count))
}

//! Unseeded random draws used by the randomizing stages.
//!
//! Every draw goes through `thread_rng`; nothing here is reproducible.

use rand::distributions::{Distribution, Uniform};

use crate::error::{PipelineError, Result};

/// Uniform integers in `[0, bound)`.
#[derive(Debug, Clone, Copy)]
pub struct RandomInt {
    bound: i32,
    dist: Uniform<i32>,
}

impl RandomInt {
    pub fn new(bound: i32) -> Result<Self> {
        if bound <= 0 {
            return Err(PipelineError::invalid_argument(
                "bound",
                bound.into(),
                "bound must be positive",
            ));
        }
        Ok(Self {
            bound,
            dist: Uniform::new(0, bound),
        })
    }

    pub fn bound(&self) -> i32 {
        self.bound
    }

    pub fn draw(&self) -> i32 {
        self.dist.sample(&mut rand::thread_rng())
    }
}

/// `0 -> 'A'`, `1 -> 'B'`, ..
pub fn letter_for(index: u8) -> Option<char> {
    if index < 26 {
        Some(char::from(b'A' + index))
    } else {
        None
    }
}

/// Random uppercase letters drawn from the first `letter_count` of the alphabet.
#[derive(Debug, Clone, Copy)]
pub struct RandomLetter {
    index: RandomInt,
}

impl RandomLetter {
    pub fn new(letter_count: i32) -> Result<Self> {
        if letter_count > 26 {
            return Err(PipelineError::invalid_argument(
                "letter_count",
                letter_count.into(),
                "only 26 uppercase letters exist",
            ));
        }
        Ok(Self {
            index: RandomInt::new(letter_count)?,
        })
    }

    pub fn draw(&self) -> char {
        // index < letter_count <= 26
        letter_for(self.index.draw() as u8).unwrap_or('A')
    }
}

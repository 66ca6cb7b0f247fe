//! Transform stages and combinators over `futures::Stream`.
//!
//! `skip` and `take` are the stock `StreamExt` adapters; this module adds the
//! stages `StreamExt` has no equivalent for.

use std::time::Duration;

use futures::future;
use futures::stream::{self, Stream, StreamExt};

use crate::error::Result;
use crate::random::{RandomInt, RandomLetter};

pub trait PipelineExt: Stream + Sized {
    /// Replace every element with a fresh draw from `[0, bound)`.
    fn randomize(self, bound: i32) -> Result<impl Stream<Item = i32>> {
        let random = RandomInt::new(bound)?;
        Ok(self.map(move |_| random.draw()))
    }

    fn squared(self) -> impl Stream<Item = i64>
    where
        Self: Stream<Item = i32>,
    {
        self.map(|v| i64::from(v) * i64::from(v))
    }

    /// Replace every element with a random one-letter string.
    fn letter_codes(self, letter_count: i32) -> Result<impl Stream<Item = String>> {
        let letters = RandomLetter::new(letter_count)?;
        Ok(self.map(move |_| letters.draw().to_string()))
    }

    /// Keep elements strictly greater than `threshold`.
    fn above(self, threshold: i32) -> impl Stream<Item = i32>
    where
        Self: Stream<Item = i32>,
    {
        self.filter(move |v| future::ready(*v > threshold))
    }

    /// Hold back the whole sequence for `duration` before its first element.
    ///
    /// The timer is tokio's, so the stream must be polled inside a runtime.
    fn delayed(self, duration: Duration) -> impl Stream<Item = Self::Item> {
        stream::once(async move {
            tokio::time::sleep(duration).await;
            tracing::debug!(?duration, "delay elapsed");
            self
        })
        .flatten()
    }
}

impl<S: Stream> PipelineExt for S {}

/// Pair up same-position elements and combine them; ends with the shorter side.
pub fn zip_with<A, B, F, T>(a: A, b: B, mut combine: F) -> impl Stream<Item = T>
where
    A: Stream,
    B: Stream,
    F: FnMut(A::Item, B::Item) -> T,
{
    a.zip(b).map(move |(x, y)| combine(x, y))
}

/// All of `first`, then all of `second`. `second` isn't polled until `first` completes.
pub fn concat<A, B>(first: A, second: B) -> impl Stream<Item = A::Item>
where
    A: Stream,
    B: Stream<Item = A::Item>,
{
    first.chain(second)
}

//! Ordered fallback attempts.
//!
//! A [`FallbackChain`] holds the candidate arguments for a lookup in priority order. `run`
//! tries them one by one and stops at the first attempt that yields a value. Errors and
//! empty answers both move on to the next candidate; when the list runs out, the last
//! error is returned, or [`FallbackError::Exhausted`] if every attempt was merely empty.

use std::future::Future;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackError<E> {
    /// Every attempt answered, none had a value
    Exhausted,
    /// The last attempt failed with this error
    Failed(E),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackChain<A> {
    attempts: Vec<A>,
}

impl<A> FallbackChain<A> {
    pub fn new(attempts: impl IntoIterator<Item = A>) -> Self {
        Self {
            attempts: attempts.into_iter().collect(),
        }
    }

    pub fn attempts(&self) -> &[A] {
        &self.attempts
    }

    /// Runs `attempt` for each candidate until one returns `Ok(Some(_))`.
    ///
    /// Returns the winning candidate together with its value.
    pub async fn run<T, E, F, Fut>(self, mut attempt: F) -> Result<(A, T), FallbackError<E>>
    where
        F: FnMut(&A) -> Fut,
        Fut: Future<Output = Result<Option<T>, E>>,
    {
        let mut last_error = None;
        for candidate in self.attempts {
            match attempt(&candidate).await {
                Ok(Some(value)) => return Ok((candidate, value)),
                Ok(None) => {}
                Err(e) => last_error = Some(e),
            }
        }
        Err(match last_error {
            Some(e) => FallbackError::Failed(e),
            None => FallbackError::Exhausted,
        })
    }
}

/// Program years to try for a lot entered in `year`: the year itself, then the previous one
pub fn program_years(year: i32) -> FallbackChain<i32> {
    FallbackChain::new([year, year - 1])
}

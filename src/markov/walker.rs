//! Randomized walk over a [`Distribution`].

use rand::Rng;

use super::distribution::Distribution;
use super::GenerationError;

/// Source of uniform random indices for the walk.
///
/// Every [`rand::Rng`] is a `Chooser`; tests substitute scripted sources.
pub trait Chooser {
    /// Pick an index in `0..len`. Callers never pass `len == 0`.
    fn choose_index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> Chooser for R {
    fn choose_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Output of a single walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk<'a> {
    /// Generated tokens, borrowed from the distribution.
    pub tokens: Vec<&'a str>,
    /// Dead-end pairs hit along the way. Each adds one token beyond the requested count.
    pub dead_ends: usize,
}

/// Whether the walk holds a pair to continue from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    NeedStart,
    Walking,
}

/// Transient state of one walk.
///
/// `second` outlives a dead end: only the phase is reset, so the final flush
/// may repeat the token emitted at the dead end.
struct WalkState<'a> {
    phase: Phase,
    first: &'a str,
    second: Option<&'a str>,
    output: Vec<&'a str>,
    dead_ends: usize,
}

/// Generates token sequences by walking a [`Distribution`].
pub struct ChainWalker<'a> {
    distribution: &'a Distribution,
}

impl<'a> ChainWalker<'a> {
    /// Create a walker over `distribution`.
    pub const fn new(distribution: &'a Distribution) -> Self {
        Self { distribution }
    }

    /// Walk the chain for `token_count` tokens.
    ///
    /// The result holds `token_count` tokens plus one extra for every dead end
    /// taken. Restart pairs are chosen uniformly over distinct keys.
    pub fn walk<C: Chooser + ?Sized>(
        &self,
        token_count: usize,
        chooser: &mut C,
    ) -> Result<Walk<'a>, GenerationError> {
        if self.distribution.is_empty() {
            return Err(GenerationError::EmptyDistribution);
        }
        if token_count == 0 {
            return Err(GenerationError::ZeroTokenCount);
        }

        let mut state = WalkState {
            phase: Phase::NeedStart,
            first: "",
            second: None,
            output: Vec::with_capacity(token_count + 1),
            dead_ends: 0,
        };

        for _ in 1..token_count {
            let (first, second) = match (state.phase, state.second) {
                (Phase::Walking, Some(second)) => (state.first, second),
                _ => self.restart(&mut state, chooser)?,
            };

            state.output.push(first);

            match self.distribution.successors(first, second) {
                Some(successors) => {
                    let len = successors.len();
                    let index = chooser.choose_index(len);
                    let next = successors
                        .get(index)
                        .ok_or(GenerationError::ChoiceOutOfRange { index, len })?;
                    state.first = second;
                    state.second = Some(next.as_str());
                }
                None => {
                    state.output.push(second);
                    state.phase = Phase::NeedStart;
                    state.dead_ends += 1;
                }
            }
        }

        // A single-token walk never picks a start inside the loop.
        if state.second.is_none() {
            self.restart(&mut state, chooser)?;
        }
        if let Some(second) = state.second {
            state.output.push(second);
        }

        tracing::debug!(
            "Walked {} tokens with {} dead ends",
            state.output.len(),
            state.dead_ends
        );

        Ok(Walk { tokens: state.output, dead_ends: state.dead_ends })
    }

    fn restart<C: Chooser + ?Sized>(
        &self,
        state: &mut WalkState<'a>,
        chooser: &mut C,
    ) -> Result<(&'a str, &'a str), GenerationError> {
        let distribution: &'a Distribution = self.distribution;
        let len = distribution.len();
        let index = chooser.choose_index(len);
        let key = distribution
            .key_at(index)
            .ok_or(GenerationError::ChoiceOutOfRange { index, len })?;

        state.first = key.first.as_str();
        state.second = Some(key.second.as_str());
        state.phase = Phase::Walking;
        Ok((state.first, key.second.as_str()))
    }
}

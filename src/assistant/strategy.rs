use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// Chooses which canned reply the assistant sends next.
pub trait ReplyStrategy: Send {
    /// Returns an index into `candidates`. Callers never pass an empty slice.
    fn pick(&mut self, candidates: &[String], rng: &mut dyn RngCore) -> usize;
}

/// Every candidate is equally likely on each pick.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformRandom;

impl ReplyStrategy for UniformRandom {
    fn pick(&mut self, candidates: &[String], rng: &mut dyn RngCore) -> usize {
        rng.gen_range(0..candidates.len())
    }
}

/// Cycles through the candidates in order, ignoring the rng.
#[derive(Debug, Default, Clone, Copy)]
pub struct RoundRobin {
    next: usize,
}

impl ReplyStrategy for RoundRobin {
    fn pick(&mut self, candidates: &[String], _rng: &mut dyn RngCore) -> usize {
        let index = self.next % candidates.len();
        self.next = index + 1;
        index
    }
}

/// Serializable selector for the built-in strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReplyPolicy {
    #[default]
    UniformRandom,
    RoundRobin,
}

impl ReplyPolicy {
    pub fn strategy(self) -> Box<dyn ReplyStrategy> {
        match self {
            ReplyPolicy::UniformRandom => Box::new(UniformRandom),
            ReplyPolicy::RoundRobin => Box::new(RoundRobin::default()),
        }
    }
}

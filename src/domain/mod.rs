mod candidate;
mod expand;
mod rng;

pub use candidate::{CandidateList, dedupe};
pub use expand::{ExpandError, can_expand, expand};
pub use rng::Mulberry32;

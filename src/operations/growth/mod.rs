mod branch;
mod candidates;
mod picker;

pub use branch::{branch_request, BranchSpec};
pub use candidates::{find_candidates, Candidate};
pub use picker::{CandidatePicker, FirstCandidate, LastCandidate};

mod finding;
mod verdict;

pub use finding::{CheckId, Finding};
pub use verdict::{ValidationOptions, Verdict};

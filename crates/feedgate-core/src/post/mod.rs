mod candidate;
mod confidence;
mod length;
mod mode;

pub use candidate::CandidatePost;
pub use confidence::Confidence;
pub use length::PostLength;
pub use mode::FeedMode;

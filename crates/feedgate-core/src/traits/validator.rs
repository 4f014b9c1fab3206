use crate::models::{ValidationOptions, Verdict};
use crate::post::{CandidatePost, FeedMode, PostLength};

/// Quality gate for schema-valid candidate posts.
///
/// Implementations never fail for content reasons: every problem is a
/// diagnostic in the returned [`Verdict`].
pub trait IContentValidator: Send + Sync {
    fn validate(
        &self,
        post: &CandidatePost,
        mode: FeedMode,
        length: PostLength,
        options: ValidationOptions,
    ) -> Verdict;
}

// Portfolio statistics module.
// Aggregates GitHub profile and repository data into display totals.

pub mod aggregate;
pub mod languages;

pub use aggregate::{
    AggregateResult, REPOS_FETCH_FAILED, USER_FETCH_FAILED, aggregate, commits_in_year,
};
pub use languages::{LanguageShare, language_shares, round2};

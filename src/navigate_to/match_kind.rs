use serde::{Deserialize, Serialize};

/// Relevance bucket assigned by the matcher.
///
/// Variants are declared best-first; the derived `Ord` is the primary sort
/// order of the result list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NavigateToMatchKind {
    Exact,
    Prefix,
    Substring,
    Regular,
    None,
    CamelCaseExact,
    CamelCasePrefix,
    CamelCaseNonContiguousPrefix,
    CamelCaseSubstring,
    CamelCaseNonContiguousSubstring,
    Fuzzy,
}

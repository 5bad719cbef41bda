// Symbol Jump - navigate-to result model
//!
//! Turns a symbol match from the code search index into the record a
//! "jump to symbol" list sorts and renders: identity and ordering fields up
//! front, documentation summary and container description computed on demand.

pub mod navigate_to;


// Re-export common types
pub use navigate_to::{
    DeclaredSymbolInfo, DeclaredSymbolItem, DeclaredSymbolKind, DocumentationComment,
    NavigableItem, NavigateToConfig, NavigateToError, NavigateToMatchKind, ResourceStrings,
    SearchResult,
};

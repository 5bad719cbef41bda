// Navigate-to result model
//
// Shapes a symbol match from the search index into the sortable,
// lazily-enriched record consumed by the "jump to symbol" list. Matching,
// indexing and rendering all happen elsewhere.

pub mod config;
pub mod doc_comment;
pub mod error;
pub mod match_kind;
pub mod navigable;
pub mod resources;
pub mod search_result;
pub mod symbol_info;

pub use config::NavigateToConfig;
pub use doc_comment::DocumentationComment;
pub use error::{NavigateToError, Result};
pub use match_kind::NavigateToMatchKind;
pub use navigable::{DeclaredSymbolItem, NavigableItem};
pub use resources::ResourceStrings;
pub use search_result::{secondary_sort_key, sort_results, SearchResult};
pub use symbol_info::{DeclaredSymbolInfo, DeclaredSymbolKind, MAX_SORTABLE_COUNT};

// Navigable targets
//
// A search result holds an opaque handle to the location the UI jumps to.
// The result only ever needs two things from it, both resolved lazily by the
// collaborator that owns symbol resolution.

use std::fmt::Debug;

use super::doc_comment::DocumentationComment;

/// Opaque handle to a navigation destination.
pub trait NavigableItem: Send + Sync + Debug {
    /// Text the navigation layer uses to describe the destination.
    fn display_name(&self) -> &str;

    /// Declared-symbol view of this item, if it is one.
    ///
    /// Search results are only ever built over declared symbols; any other
    /// variant is a matcher bug.
    fn as_declared_symbol(&self) -> Option<&dyn DeclaredSymbolItem> {
        None
    }
}

/// Resolution operations available on a declared-symbol navigation target.
pub trait DeclaredSymbolItem: Send + Sync {
    /// Name of the project (compilation unit) that owns the symbol's document.
    fn project_name(&self) -> Option<String>;

    /// Documentation comment of the resolved symbol.
    ///
    /// `None` when the symbol cannot be resolved or is undocumented.
    fn documentation_comment(&self) -> Option<DocumentationComment>;
}

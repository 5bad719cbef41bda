// Navigate-to search results
//
// One `SearchResult` is built per (symbol, match) pair. Identity and sort
// fields are filled in at construction; the two detail-row fields are derived
// on first read and cached for the lifetime of the result.

use std::cmp::Ordering;
use std::sync::{Arc, OnceLock};
use tracing::{debug, error, warn};

use super::error::{NavigateToError, Result};
use super::match_kind::NavigateToMatchKind;
use super::navigable::{DeclaredSymbolItem, NavigableItem};
use super::resources::ResourceStrings;
use super::symbol_info::{DeclaredSymbolInfo, MAX_SORTABLE_COUNT};

/// A matched symbol shaped for the result list
#[derive(Debug)]
pub struct SearchResult {
    symbol_info: DeclaredSymbolInfo,
    kind: String,
    match_kind: NavigateToMatchKind,
    is_case_sensitive: bool,
    navigable_item: Arc<dyn NavigableItem>,
    secondary_sort: String,
    resources: Arc<ResourceStrings>,
    // OnceLock runs the initializer once; racing readers block on it
    lazy_additional_info: OnceLock<String>,
    lazy_summary: OnceLock<Option<String>>,
}

impl SearchResult {
    /// Build a result for a matched symbol.
    ///
    /// Fails if the symbol info is malformed, the kind label is empty, or the
    /// navigable item is not a declared symbol. All three are matcher bugs.
    pub fn new(
        symbol_info: DeclaredSymbolInfo,
        kind: impl Into<String>,
        match_kind: NavigateToMatchKind,
        is_case_sensitive: bool,
        navigable_item: Arc<dyn NavigableItem>,
        resources: Arc<ResourceStrings>,
    ) -> Result<Self> {
        let kind = kind.into();

        if let Err(e) = symbol_info.validate() {
            error!("Rejected navigate-to result: {}", e);
            return Err(e);
        }
        if kind.is_empty() {
            error!("Rejected navigate-to result for {}: empty kind label", symbol_info.name);
            return Err(NavigateToError::InvalidKind);
        }
        if navigable_item.as_declared_symbol().is_none() {
            error!(
                "Rejected navigate-to result for {}: navigable item {:?} is not a declared symbol",
                symbol_info.name, navigable_item
            );
            return Err(NavigateToError::UnexpectedNavigableItem(
                navigable_item.display_name().to_string(),
            ));
        }

        let secondary_sort = secondary_sort_key(&symbol_info);

        Ok(Self {
            symbol_info,
            kind,
            match_kind,
            is_case_sensitive,
            navigable_item,
            secondary_sort,
            resources,
            lazy_additional_info: OnceLock::new(),
            lazy_summary: OnceLock::new(),
        })
    }

    /// Build a result labelled with the symbol kind's default display label.
    pub fn with_default_kind(
        symbol_info: DeclaredSymbolInfo,
        match_kind: NavigateToMatchKind,
        is_case_sensitive: bool,
        navigable_item: Arc<dyn NavigableItem>,
        resources: Arc<ResourceStrings>,
    ) -> Result<Self> {
        let kind = symbol_info.kind.display_kind();
        Self::new(symbol_info, kind, match_kind, is_case_sensitive, navigable_item, resources)
    }

    pub fn name(&self) -> &str {
        &self.symbol_info.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn match_kind(&self) -> NavigateToMatchKind {
        self.match_kind
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.is_case_sensitive
    }

    pub fn navigable_item(&self) -> &Arc<dyn NavigableItem> {
        &self.navigable_item
    }

    pub fn symbol_info(&self) -> &DeclaredSymbolInfo {
        &self.symbol_info
    }

    /// Tie-breaker among results with the same match kind.
    pub fn secondary_sort(&self) -> &str {
        &self.secondary_sort
    }

    /// "project: X" for type-like symbols, "type: X" for members.
    ///
    /// Members fall back to the fully qualified container name when no
    /// display name was recorded.
    ///
    /// Computed on first call and cached.
    pub fn additional_information(&self) -> &str {
        self.lazy_additional_info
            .get_or_init(|| self.compute_additional_information())
    }

    /// Summary section of the symbol's documentation, if any.
    ///
    /// Computed on first call and cached, including the `None` outcome.
    pub fn summary(&self) -> Option<&str> {
        self.lazy_summary
            .get_or_init(|| self.compute_summary())
            .as_deref()
    }

    /// Display order: match kind, then case-sensitive matches first, then
    /// the secondary sort key compared byte-wise.
    pub fn compare_for_display(&self, other: &Self) -> Ordering {
        self.match_kind
            .cmp(&other.match_kind)
            .then_with(|| other.is_case_sensitive.cmp(&self.is_case_sensitive))
            .then_with(|| self.secondary_sort.cmp(&other.secondary_sort))
    }

    fn declared_item(&self) -> Option<&dyn DeclaredSymbolItem> {
        self.navigable_item.as_declared_symbol()
    }

    fn compute_additional_information(&self) -> String {
        if self.symbol_info.kind.is_type_like() {
            let project_name = self.declared_item().and_then(|item| item.project_name());
            if project_name.is_none() {
                warn!("No owning project resolved for {}", self.symbol_info.name);
            }
            debug!("Computed additional information for {}", self.symbol_info.name);
            self.resources.format_project(project_name.as_deref())
        } else {
            let container = self
                .symbol_info
                .container_display_name
                .as_deref()
                .or(self.symbol_info.fully_qualified_container_name.as_deref());
            if container.is_none() {
                warn!("No container name recorded for {}", self.symbol_info.name);
            }
            debug!("Computed additional information for {}", self.symbol_info.name);
            self.resources.format_type(container)
        }
    }

    fn compute_summary(&self) -> Option<String> {
        let summary = self
            .declared_item()
            .and_then(|item| item.documentation_comment())
            .and_then(|comment| comment.summary_text());
        debug!(
            "Resolved summary for {}: {}",
            self.symbol_info.name,
            if summary.is_some() { "present" } else { "none" }
        );
        summary
    }
}

/// Fixed-width hex counts followed by the raw name.
///
/// Four uppercase hex digits per count keep lexicographic order equal to
/// numeric order. Counts above 0xFFFF are clamped.
pub fn secondary_sort_key(symbol_info: &DeclaredSymbolInfo) -> String {
    format!(
        "{:04X}{:04X}{}",
        symbol_info.parameter_count.min(MAX_SORTABLE_COUNT),
        symbol_info.type_parameter_count.min(MAX_SORTABLE_COUNT),
        symbol_info.name
    )
}

/// Sort results into display order. The sort is stable.
pub fn sort_results(results: &mut [SearchResult]) {
    results.sort_by(|a, b| a.compare_for_display(b));
}

// SearchResult construction, lazy fields and display ordering

use std::sync::Arc;

use super::helpers::{
    init_test_logging, result_for, strings, with_captured_logs, DocumentLocation, StubSymbolItem,
};
use crate::navigate_to::{
    sort_results, DeclaredSymbolInfo, DeclaredSymbolKind, NavigableItem, NavigateToError,
    NavigateToMatchKind, SearchResult,
};

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn test_immediate_fields_are_populated() {
        let item = Arc::new(StubSymbolItem::new("UserService").in_project("Core"));
        let target: Arc<dyn NavigableItem> = item.clone();
        let info = DeclaredSymbolInfo::new("UserService", DeclaredSymbolKind::Class);

        let result = SearchResult::new(
            info,
            "class",
            NavigateToMatchKind::Prefix,
            false,
            target,
            strings(),
        )
        .unwrap();

        assert_eq!(result.name(), "UserService");
        assert_eq!(result.kind(), "class");
        assert_eq!(result.match_kind(), NavigateToMatchKind::Prefix);
        assert!(!result.is_case_sensitive());
        assert_eq!(result.navigable_item().display_name(), "UserService");
        assert_eq!(result.secondary_sort(), "00000000UserService");
    }

    #[test]
    fn test_construction_does_not_resolve_anything() {
        let item = Arc::new(StubSymbolItem::new("Save").in_project("Core").documented("/// Saves."));
        let info = DeclaredSymbolInfo::new("Save", DeclaredSymbolKind::Method).with_container("Repo");

        let _result = result_for(info, &item);

        assert_eq!(item.project_calls(), 0);
        assert_eq!(item.doc_calls(), 0);
    }

    #[test]
    fn test_default_kind_label_comes_from_symbol_kind() {
        let item = Arc::new(StubSymbolItem::new("Count"));
        let result = result_for(DeclaredSymbolInfo::new("Count", DeclaredSymbolKind::Property), &item);

        assert_eq!(result.kind(), "property");
    }

    #[test]
    fn test_rejects_navigable_item_that_is_not_a_declared_symbol() {
        init_test_logging();
        let target: Arc<dyn NavigableItem> = Arc::new(DocumentLocation {
            path: "src/lib.rs".to_string(),
        });

        let err = SearchResult::new(
            DeclaredSymbolInfo::new("Widget", DeclaredSymbolKind::Struct),
            "struct",
            NavigateToMatchKind::Exact,
            true,
            target,
            strings(),
        )
        .unwrap_err();

        match err {
            NavigateToError::UnexpectedNavigableItem(name) => assert_eq!(name, "src/lib.rs"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_empty_name() {
        let item: Arc<dyn NavigableItem> = Arc::new(StubSymbolItem::new(""));
        let err = SearchResult::new(
            DeclaredSymbolInfo::new("", DeclaredSymbolKind::Method),
            "method",
            NavigateToMatchKind::Exact,
            true,
            item,
            strings(),
        )
        .unwrap_err();

        assert!(matches!(err, NavigateToError::InvalidSymbolInfo(_)));
    }

    #[test]
    fn test_rejects_counts_that_do_not_fit_sort_key() {
        let item: Arc<dyn NavigableItem> = Arc::new(StubSymbolItem::new("Huge"));
        let info = DeclaredSymbolInfo::new("Huge", DeclaredSymbolKind::Method).with_parameters(0x1_0000, 0);

        let err = SearchResult::new(info, "method", NavigateToMatchKind::Exact, true, item, strings())
            .unwrap_err();

        assert!(matches!(err, NavigateToError::InvalidSymbolInfo(_)));
    }

    #[test]
    fn test_rejects_empty_kind_label() {
        let item: Arc<dyn NavigableItem> = Arc::new(StubSymbolItem::new("Run"));
        let err = SearchResult::new(
            DeclaredSymbolInfo::new("Run", DeclaredSymbolKind::Method),
            "",
            NavigateToMatchKind::Exact,
            true,
            item,
            strings(),
        )
        .unwrap_err();

        assert!(matches!(err, NavigateToError::InvalidKind));
    }
}

#[cfg(test)]
mod additional_information {
    use super::*;

    #[test]
    fn test_type_like_symbol_shows_project() {
        let item = Arc::new(StubSymbolItem::new("Widget").in_project("Foo"));
        let result = result_for(DeclaredSymbolInfo::new("Widget", DeclaredSymbolKind::Class), &item);

        assert_eq!(result.additional_information(), "project: Foo");
    }

    #[test]
    fn test_every_type_like_kind_shows_project() {
        for kind in [
            DeclaredSymbolKind::Class,
            DeclaredSymbolKind::Enum,
            DeclaredSymbolKind::Interface,
            DeclaredSymbolKind::Module,
            DeclaredSymbolKind::Struct,
        ] {
            let item = Arc::new(StubSymbolItem::new("T").in_project("Foo"));
            let result = result_for(DeclaredSymbolInfo::new("T", kind).with_container("Outer"), &item);
            assert_eq!(result.additional_information(), "project: Foo", "kind {:?}", kind);
        }
    }

    #[test]
    fn test_member_shows_containing_type() {
        let item = Arc::new(StubSymbolItem::new("Render").in_project("Foo"));
        let info = DeclaredSymbolInfo::new("Render", DeclaredSymbolKind::Method).with_container("Bar");
        let result = result_for(info, &item);

        assert_eq!(result.additional_information(), "type: Bar");
        // Members never consult the owning project
        assert_eq!(item.project_calls(), 0);
    }

    #[test]
    fn test_unresolved_project_degrades_to_empty_value() {
        let item = Arc::new(StubSymbolItem::new("Orphan"));
        let result = result_for(DeclaredSymbolInfo::new("Orphan", DeclaredSymbolKind::Struct), &item);

        assert_eq!(result.additional_information(), "project: ");
    }

    #[test]
    fn test_missing_container_degrades_to_empty_value() {
        let item = Arc::new(StubSymbolItem::new("main"));
        let result = result_for(DeclaredSymbolInfo::new("main", DeclaredSymbolKind::Method), &item);

        assert_eq!(result.additional_information(), "type: ");
    }

    #[test]
    fn test_member_falls_back_to_qualified_container() {
        let item = Arc::new(StubSymbolItem::new("Push"));
        let info = DeclaredSymbolInfo::new("Push", DeclaredSymbolKind::Method)
            .with_qualified_container("Collections.Stack");
        let result = result_for(info, &item);

        assert_eq!(result.additional_information(), "type: Collections.Stack");
    }

    #[test]
    fn test_display_name_wins_over_qualified_container() {
        let item = Arc::new(StubSymbolItem::new("Push"));
        let info = DeclaredSymbolInfo::new("Push", DeclaredSymbolKind::Method)
            .with_container("Stack")
            .with_qualified_container("Collections.Stack");
        let result = result_for(info, &item);

        assert_eq!(result.additional_information(), "type: Stack");
    }

    #[test]
    fn test_unresolved_project_logs_warning() {
        let item = Arc::new(StubSymbolItem::new("Orphan"));
        let result = result_for(DeclaredSymbolInfo::new("Orphan", DeclaredSymbolKind::Struct), &item);

        let (info, logs) = with_captured_logs(|| result.additional_information().to_string());

        assert_eq!(info, "project: ");
        let output = logs.contents();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("No owning project resolved for Orphan"), "{output}");
        assert!(output.contains("Computed additional information for Orphan"), "{output}");
    }

    #[test]
    fn test_missing_container_logs_warning() {
        let item = Arc::new(StubSymbolItem::new("main"));
        let result = result_for(DeclaredSymbolInfo::new("main", DeclaredSymbolKind::Method), &item);

        let (_, logs) = with_captured_logs(|| result.additional_information().to_string());

        let output = logs.contents();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("No container name recorded for main"), "{output}");
    }

    #[test]
    fn test_computed_once_across_reads() {
        let item = Arc::new(StubSymbolItem::new("Widget").in_project("Foo"));
        let result = result_for(DeclaredSymbolInfo::new("Widget", DeclaredSymbolKind::Class), &item);

        let first = result.additional_information();
        let second = result.additional_information();

        assert_eq!(first, second);
        assert!(std::ptr::eq(first, second));
        assert_eq!(item.project_calls(), 1);
    }
}

#[cfg(test)]
mod summary {
    use super::*;

    #[test]
    fn test_summary_extracted_from_doc_comment() {
        let item = Arc::new(StubSymbolItem::new("Parse").documented(
            "/// <summary>\n/// Parses the input.\n/// </summary>\n/// <returns>The tree.</returns>",
        ));
        let result = result_for(DeclaredSymbolInfo::new("Parse", DeclaredSymbolKind::Method), &item);

        assert_eq!(result.summary(), Some("Parses the input."));
    }

    #[test]
    fn test_summary_computed_once_across_reads() {
        let item = Arc::new(StubSymbolItem::new("Parse").documented("/// Parses the input."));
        let result = result_for(DeclaredSymbolInfo::new("Parse", DeclaredSymbolKind::Method), &item);

        let first = result.summary().unwrap();
        let second = result.summary().unwrap();

        assert!(std::ptr::eq(first, second));
        assert_eq!(item.doc_calls(), 1);
    }

    #[test]
    fn test_missing_documentation_is_memoized_as_none() {
        init_test_logging();
        let item = Arc::new(StubSymbolItem::new("Undocumented"));
        let result = result_for(DeclaredSymbolInfo::new("Undocumented", DeclaredSymbolKind::Field), &item);

        assert_eq!(result.summary(), None);
        assert_eq!(result.summary(), None);
        assert_eq!(item.doc_calls(), 1);
    }

    #[test]
    fn test_documentation_without_summary_is_none() {
        let item = Arc::new(StubSymbolItem::new("Tagged").documented("/// <remarks></remarks>\n///"));
        let result = result_for(DeclaredSymbolInfo::new("Tagged", DeclaredSymbolKind::Field), &item);

        assert_eq!(result.summary(), None);
        assert_eq!(result.summary(), None);
        assert_eq!(item.doc_calls(), 1);
    }

    #[test]
    fn test_lazy_fields_are_independent() {
        let item = Arc::new(StubSymbolItem::new("Widget").in_project("Foo").documented("/// A widget."));
        let result = result_for(DeclaredSymbolInfo::new("Widget", DeclaredSymbolKind::Class), &item);

        assert_eq!(result.summary(), Some("A widget."));
        assert_eq!(item.project_calls(), 0);

        assert_eq!(result.additional_information(), "project: Foo");
        assert_eq!(item.doc_calls(), 1);
        assert_eq!(item.project_calls(), 1);
    }
}

#[cfg(test)]
mod ordering {
    use super::*;

    fn result(name: &str, params: u32, match_kind: NavigateToMatchKind, case_sensitive: bool) -> SearchResult {
        let target: Arc<dyn NavigableItem> = Arc::new(StubSymbolItem::new(name));
        let info = DeclaredSymbolInfo::new(name, DeclaredSymbolKind::Method).with_parameters(params, 0);
        SearchResult::with_default_kind(info, match_kind, case_sensitive, target, strings()).unwrap()
    }

    #[test]
    fn test_sort_results_orders_by_match_kind_then_case_then_secondary_key() {
        let mut results = vec![
            result("load", 0, NavigateToMatchKind::Substring, true),
            result("Load", 10, NavigateToMatchKind::Exact, true),
            result("Load", 9, NavigateToMatchKind::Exact, true),
            result("load", 0, NavigateToMatchKind::Exact, false),
            result("Loader", 0, NavigateToMatchKind::Prefix, true),
        ];

        sort_results(&mut results);

        let order: Vec<(&str, NavigateToMatchKind, bool)> = results
            .iter()
            .map(|r| (r.secondary_sort(), r.match_kind(), r.is_case_sensitive()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("00090000Load", NavigateToMatchKind::Exact, true),
                ("000A0000Load", NavigateToMatchKind::Exact, true),
                ("00000000load", NavigateToMatchKind::Exact, false),
                ("00000000Loader", NavigateToMatchKind::Prefix, true),
                ("00000000load", NavigateToMatchKind::Substring, true),
            ]
        );
    }
}

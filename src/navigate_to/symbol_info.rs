// Declared symbol descriptors
//
// The symbol index hands us one `DeclaredSymbolInfo` per declaration. It is
// read-only input: a search result copies what it needs and never mutates it.

use serde::{Deserialize, Serialize};

use super::error::{NavigateToError, Result};

/// Largest parameter / type-parameter count that fits the 4-digit hex field
/// of the secondary sort key.
pub const MAX_SORTABLE_COUNT: u32 = 0xFFFF;

/// Declaration categories produced by the symbol index
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DeclaredSymbolKind {
    Class,
    Constant,
    Constructor,
    Delegate,
    Enum,
    EnumMember,
    Event,
    ExtensionMethod,
    Field,
    Indexer,
    Interface,
    Method,
    Module,
    Property,
    Struct,
}

impl DeclaredSymbolKind {
    /// True for symbols that are themselves containers (types and modules).
    ///
    /// Type-like results describe the project they live in; everything else
    /// describes its containing type.
    pub fn is_type_like(self) -> bool {
        match self {
            DeclaredSymbolKind::Class
            | DeclaredSymbolKind::Enum
            | DeclaredSymbolKind::Interface
            | DeclaredSymbolKind::Module
            | DeclaredSymbolKind::Struct => true,
            DeclaredSymbolKind::Constant
            | DeclaredSymbolKind::Constructor
            | DeclaredSymbolKind::Delegate
            | DeclaredSymbolKind::EnumMember
            | DeclaredSymbolKind::Event
            | DeclaredSymbolKind::ExtensionMethod
            | DeclaredSymbolKind::Field
            | DeclaredSymbolKind::Indexer
            | DeclaredSymbolKind::Method
            | DeclaredSymbolKind::Property => false,
        }
    }

    /// Default kind label shown in the result list
    pub fn display_kind(self) -> &'static str {
        match self {
            DeclaredSymbolKind::Class => "class",
            DeclaredSymbolKind::Constant => "constant",
            DeclaredSymbolKind::Constructor
            | DeclaredSymbolKind::ExtensionMethod
            | DeclaredSymbolKind::Method => "method",
            DeclaredSymbolKind::Delegate => "delegate",
            DeclaredSymbolKind::Enum => "enum",
            DeclaredSymbolKind::EnumMember => "enum_member",
            DeclaredSymbolKind::Event => "event",
            DeclaredSymbolKind::Field => "field",
            DeclaredSymbolKind::Indexer | DeclaredSymbolKind::Property => "property",
            DeclaredSymbolKind::Interface => "interface",
            DeclaredSymbolKind::Module => "module",
            DeclaredSymbolKind::Struct => "struct",
        }
    }
}

/// A declared symbol as recorded by the symbol index
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeclaredSymbolInfo {
    /// Symbol name as declared
    pub name: String,
    /// Declaration category
    pub kind: DeclaredSymbolKind,
    #[serde(default)]
    pub parameter_count: u32,
    #[serde(default)]
    pub type_parameter_count: u32,
    /// Display name of the containing type or namespace
    #[serde(default)]
    pub container_display_name: Option<String>,
    /// Used for the member label when no display name was recorded
    #[serde(default)]
    pub fully_qualified_container_name: Option<String>,
}

impl DeclaredSymbolInfo {
    pub fn new(name: impl Into<String>, kind: DeclaredSymbolKind) -> Self {
        Self {
            name: name.into(),
            kind,
            parameter_count: 0,
            type_parameter_count: 0,
            container_display_name: None,
            fully_qualified_container_name: None,
        }
    }

    pub fn with_parameters(mut self, parameter_count: u32, type_parameter_count: u32) -> Self {
        self.parameter_count = parameter_count;
        self.type_parameter_count = type_parameter_count;
        self
    }

    pub fn with_container(mut self, display_name: impl Into<String>) -> Self {
        self.container_display_name = Some(display_name.into());
        self
    }

    pub fn with_qualified_container(mut self, qualified_name: impl Into<String>) -> Self {
        self.fully_qualified_container_name = Some(qualified_name.into());
        self
    }

    /// Check the structural contract the matcher must uphold.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(NavigateToError::InvalidSymbolInfo(
                "symbol name is empty".to_string(),
            ));
        }
        if self.parameter_count > MAX_SORTABLE_COUNT {
            return Err(NavigateToError::InvalidSymbolInfo(format!(
                "{}: parameter count {} exceeds {:#X}",
                self.name, self.parameter_count, MAX_SORTABLE_COUNT
            )));
        }
        if self.type_parameter_count > MAX_SORTABLE_COUNT {
            return Err(NavigateToError::InvalidSymbolInfo(format!(
                "{}: type parameter count {} exceeds {:#X}",
                self.name, self.type_parameter_count, MAX_SORTABLE_COUNT
            )));
        }
        Ok(())
    }
}

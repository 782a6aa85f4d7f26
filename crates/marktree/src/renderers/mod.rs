//! Renderer registry.
//!
//! Maps each token kind to a renderer capability. The key space is a closed
//! enum so an unregistered-kind mistake in the default table fails at
//! compile time, while caller overrides merged on top still allow runtime
//! customization per kind.

mod defaults;

pub use defaults::default_renderers;

use indexmap::IndexMap;

use marktree_core::{Element, RenderOptions, Token, TokenKind};

/// Everything a renderer receives for one dispatched node: the token's own
/// fields, its already-rendered children, and the context threaded down
/// from the engine.
pub struct RenderInput<'a> {
    /// The token being rendered
    pub token: &'a Token,
    /// Already-rendered children, in document order
    pub children: Vec<Element>,
    /// Render options for this pass
    pub options: &'a RenderOptions,
    /// Unique anchor id assigned to a heading, when id generation is on
    pub heading_id: Option<String>,
    /// Whether the enclosing list is ordered (list items only)
    pub ordered: bool,
    /// Starting index of the enclosing ordered list (list items only)
    pub start: Option<u64>,
}

/// Type alias for renderer functions
pub type RendererFn = Box<dyn for<'a> Fn(RenderInput<'a>) -> Element + Send + Sync>;

/// A registry entry for one key
pub enum RendererEntry {
    /// Render this node with the given function
    Renderer(RendererFn),
    /// Render no wrapper for this node, but still recurse into children
    Suppressed,
}

impl RendererEntry {
    fn as_resolution(&self) -> Resolution<'_> {
        match self {
            RendererEntry::Renderer(f) => Resolution::Renderer(f),
            RendererEntry::Suppressed => Resolution::Suppressed,
        }
    }
}

/// The outcome of resolving a key against the merged registry
pub enum Resolution<'a> {
    /// A renderer is registered for the key
    Renderer(&'a RendererFn),
    /// The key is explicitly suppressed; children still render
    Suppressed,
    /// The key is absent from the merged mapping; silent no-op, children
    /// still render
    NotFound,
}

/// Registry lookup key: every token kind, plus the synthetic list-item
/// subtypes that let callers customize ordered vs unordered item rendering
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderKey {
    /// One of the regular token kinds
    Kind(TokenKind),
    /// A list item inside an ordered list
    OrderedListItem,
    /// A list item inside an unordered list
    UnorderedListItem,
}

impl From<TokenKind> for RenderKey {
    fn from(kind: TokenKind) -> Self {
        RenderKey::Kind(kind)
    }
}

/// Collection of renderers: a default table covering every token kind, and
/// caller overrides merged on top (override wins per key).
pub struct Renderers {
    defaults: IndexMap<RenderKey, RendererEntry>,
    overrides: IndexMap<RenderKey, RendererEntry>,
}

impl Renderers {
    /// Create a registry with the default renderer table
    pub fn new() -> Self {
        Self {
            defaults: default_renderers(),
            overrides: IndexMap::new(),
        }
    }

    /// Create a registry with no defaults at all. Every key resolves to
    /// `NotFound` until the caller adds entries.
    pub fn empty() -> Self {
        Self {
            defaults: IndexMap::new(),
            overrides: IndexMap::new(),
        }
    }

    /// Override the renderer for a key
    pub fn add<K, F>(&mut self, key: K, renderer: F)
    where
        K: Into<RenderKey>,
        F: Fn(RenderInput) -> Element + Send + Sync + 'static,
    {
        self.overrides
            .insert(key.into(), RendererEntry::Renderer(Box::new(renderer)));
    }

    /// Suppress a key: its nodes render no wrapper, children still render
    pub fn suppress<K: Into<RenderKey>>(&mut self, key: K) {
        self.overrides.insert(key.into(), RendererEntry::Suppressed);
    }

    /// Resolve a key against overrides first, then defaults
    pub fn resolve(&self, key: RenderKey) -> Resolution<'_> {
        match self.overrides.get(&key).or_else(|| self.defaults.get(&key)) {
            Some(entry) => entry.as_resolution(),
            None => Resolution::NotFound,
        }
    }

    /// Resolve the effective renderer for a list item.
    ///
    /// The synthetic key for the item's ordering wins when the caller
    /// overrode it; otherwise resolution falls through to the shared
    /// `ListItem` entry.
    pub fn resolve_list_item(&self, ordered: bool) -> Resolution<'_> {
        let synthetic = if ordered {
            RenderKey::OrderedListItem
        } else {
            RenderKey::UnorderedListItem
        };
        if let Some(entry) = self.overrides.get(&synthetic) {
            return entry.as_resolution();
        }
        self.resolve(RenderKey::Kind(TokenKind::ListItem))
    }
}

impl Default for Renderers {
    fn default() -> Self {
        Self::new()
    }
}

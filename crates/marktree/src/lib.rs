//! # marktree
//!
//! Render markdown token trees through per-kind renderers.
//!
//! This library consumes a flat stream of lexical tokens (produced by an
//! external markdown tokenizer, or built directly by the caller) and renders
//! it as a tree of output elements. On the way it repairs inline HTML: a
//! flat, possibly-malformed sequence of open/close markers is collapsed into
//! a properly nested tree, and unmatched markers pass through verbatim.
//!
//! ## Design
//!
//! The markdown grammar lives outside this crate. That design allows:
//!
//! - **Tokenizer agnostic**: any tokenizer can produce the `Token` structure
//! - **Pre-built input**: callers can hand over token trees directly
//! - **Custom output**: renderers are overridable per token kind
//!
//! ## Example
//!
//! ```rust
//! use marktree::{MarktreeService, Token};
//!
//! let service = MarktreeService::new();
//!
//! let tokens = vec![Token::paragraph(vec![
//!     Token::text("this is an "),
//!     Token::strong(vec![Token::text("example")]),
//! ])];
//!
//! let output = service.render_tokens(&tokens).unwrap();
//! assert_eq!(output.to_html(), "<p>this is an <strong>example</strong></p>");
//! ```
//!
//! ## Example (inline HTML)
//!
//! ```rust
//! use marktree::{MarktreeService, Token};
//!
//! let service = MarktreeService::new();
//!
//! let tokens = vec![
//!     Token::html("<div>"),
//!     Token::text("content"),
//!     Token::html("</div>"),
//! ];
//!
//! let output = service.render_tokens(&tokens).unwrap();
//! assert_eq!(output.to_html(), "<div>content</div>");
//! ```

pub mod normalize;
mod renderers;
mod service;
mod slug;

pub use marktree_core::{Element, RenderOptions, Token, TokenKind};
pub use normalize::{match_tag, parse_attributes, shrink_html_tokens, TagMatch};
pub use renderers::{
    default_renderers, RenderInput, RenderKey, RendererEntry, RendererFn, Renderers, Resolution,
};
pub use service::{MarktreeService, Tokenizer};
pub use slug::slugify;

/// Error type for marktree operations
#[derive(Debug, thiserror::Error)]
pub enum MarktreeError {
    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, MarktreeError>;

//! marktree-core - token model and output element tree
//!
//! This crate provides the core data structures for marktree: the lexical
//! `Token` produced by an external markdown tokenizer, the `Element` output
//! tree produced by rendering, and the `RenderOptions` shared between both
//! sides.
//!
//! # Architecture
//!
//! ```text
//! Token stream ──normalize──▶ ┌──────────────┐
//!                             │              │
//!                             │ Element tree │ ──▶ HTML String
//! Caller-built tokens ───────▶│              │
//!                             └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use marktree_core::{Element, Token};
//!
//! let token = Token::paragraph(vec![
//!     Token::text("this is an "),
//!     Token::strong(vec![Token::text("example")]),
//! ]);
//! assert_eq!(token.text_content(), "this is an example");
//!
//! let element = Element::node(
//!     "p",
//!     vec![],
//!     vec![Element::text("this is an example")],
//! );
//! assert_eq!(element.to_html(), "<p>this is an example</p>");
//! ```

mod element;
mod options;
mod token;

pub use element::{is_void, Element};
pub use options::RenderOptions;
pub use token::{Token, TokenKind};

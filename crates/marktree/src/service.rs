//! MarktreeService - the main entry point for token-tree rendering.

use std::collections::HashSet;

use marktree_core::{Element, RenderOptions, Token, TokenKind};

use crate::normalize::shrink_html_tokens;
use crate::renderers::{RenderInput, RenderKey, Renderers, Resolution};
use crate::slug::slugify;
use crate::Result;

/// An external markdown tokenizer.
///
/// The engine performs no tokenizer-specific validation; tokens built
/// directly by the caller are accepted equally through `render_tokens`.
pub trait Tokenizer {
    /// Tokenize raw markdown source into a flat token stream.
    ///
    /// `options` carries the tokenizer hints (`breaks`, `gfm`) alongside
    /// the engine's own settings.
    fn tokenize(&self, source: &str, options: &RenderOptions) -> Vec<Token>;
}

/// The main service for rendering markdown token trees
pub struct MarktreeService {
    options: RenderOptions,
    renderers: Renderers,
}

/// Per-render-pass mutable state. Lives for exactly one top-level render
/// call and is never shared across renders of different documents.
struct RenderContext {
    /// Heading anchor ids already assigned in this document
    used_ids: HashSet<String>,
}

/// List ordering context threaded from a list token down to its items
#[derive(Debug, Clone, Copy, Default)]
struct ListContext {
    ordered: bool,
    start: Option<u64>,
}

impl MarktreeService {
    /// Create a new MarktreeService with default options and renderers
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
            renderers: Renderers::new(),
        }
    }

    /// Create a MarktreeService with custom options
    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            renderers: Renderers::new(),
        }
    }

    /// Create a MarktreeService with custom options and renderers
    pub fn with_renderers(options: RenderOptions, renderers: Renderers) -> Self {
        Self { options, renderers }
    }

    /// Get the current options
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }

    /// Get mutable access to the renderer registry
    pub fn renderers_mut(&mut self) -> &mut Renderers {
        &mut self.renderers
    }

    /// Tokenize markdown source with an external tokenizer and render it
    pub fn render(&self, tokenizer: &dyn Tokenizer, source: &str) -> Result<Element> {
        let tokens = tokenizer.tokenize(source, &self.options);
        self.render_tokens(&tokens)
    }

    /// Render a pre-built token stream.
    ///
    /// Normalizes inline HTML markers first, then dispatches every node
    /// depth-first through the renderer registry. The heading-id set is
    /// created fresh for this call.
    pub fn render_tokens(&self, tokens: &[Token]) -> Result<Element> {
        let normalized = shrink_html_tokens(tokens.to_vec());
        let mut ctx = RenderContext {
            used_ids: HashSet::new(),
        };
        let children = self.render_children(&normalized, ListContext::default(), &mut ctx);
        Ok(Element::fragment(children))
    }

    fn render_children(
        &self,
        tokens: &[Token],
        list: ListContext,
        ctx: &mut RenderContext,
    ) -> Vec<Element> {
        tokens
            .iter()
            .map(|token| self.render_token(token, list, ctx))
            .collect()
    }

    /// Render a single node, recursing into its children
    fn render_token(&self, token: &Token, list: ListContext, ctx: &mut RenderContext) -> Element {
        let resolution = match token.kind {
            // List items consult their synthetic ordered/unordered key
            TokenKind::ListItem => self.renderers.resolve_list_item(list.ordered),
            kind => self.renderers.resolve(RenderKey::Kind(kind)),
        };

        // Ids are assigned at dispatch time, in document order.
        let heading_id = if token.kind == TokenKind::Heading {
            self.assign_heading_id(token, ctx)
        } else {
            None
        };

        // A list node's children see its ordering; everything else resets
        // the context so item content is not misread as list items.
        let child_list = match token.kind {
            TokenKind::List => ListContext {
                ordered: token.ordered.unwrap_or(false),
                start: token.start,
            },
            _ => ListContext::default(),
        };
        let children = match token.tokens.as_deref() {
            Some(tokens) => self.render_children(tokens, child_list, ctx),
            None => Vec::new(),
        };

        match resolution {
            Resolution::Renderer(f) => f(RenderInput {
                token,
                children,
                options: &self.options,
                heading_id,
                ordered: list.ordered,
                start: list.start,
            }),
            Resolution::Suppressed => Element::fragment(children),
            Resolution::NotFound => {
                if self.options.silent {
                    log::debug!(
                        "no renderer for token kind {}, rendering children only",
                        token.kind.as_str()
                    );
                } else {
                    log::warn!(
                        "no renderer for token kind {}, rendering children only",
                        token.kind.as_str()
                    );
                }
                Element::fragment(children)
            }
        }
    }

    /// Derive a unique anchor id for a heading, or `None` when id
    /// generation is disabled
    fn assign_heading_id(&self, token: &Token, ctx: &mut RenderContext) -> Option<String> {
        if !self.options.header_ids {
            return None;
        }

        let base = format!(
            "{}{}",
            self.options.header_prefix,
            slugify(&token.text_content())
        );

        // First available suffix against the document-wide id set.
        let mut id = base.clone();
        let mut suffix = 1u32;
        while ctx.used_ids.contains(&id) {
            id = format!("{base}-{suffix}");
            suffix += 1;
        }
        ctx.used_ids.insert(id.clone());
        Some(id)
    }
}

impl Default for MarktreeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prebuilt_tokens() {
        let service = MarktreeService::new();
        let tokens = vec![Token::paragraph(vec![
            Token::text("this is an "),
            Token::strong(vec![Token::text("example")]),
        ])];

        let output = service.render_tokens(&tokens).unwrap();
        assert_eq!(
            output.to_html(),
            "<p>this is an <strong>example</strong></p>"
        );
    }

    #[test]
    fn test_empty_input() {
        let service = MarktreeService::new();
        let output = service.render_tokens(&[]).unwrap();
        assert_eq!(output.to_html(), "");
    }

    #[test]
    fn test_heading_with_id() {
        let service = MarktreeService::new();
        let tokens = vec![Token::heading(1, "This is a title")];

        let output = service.render_tokens(&tokens).unwrap();
        assert_eq!(
            output.to_html(),
            "<h1 id=\"this-is-a-title\">This is a title</h1>"
        );
    }

    #[test]
    fn test_heading_id_prefix() {
        let options = RenderOptions {
            header_prefix: "test-".to_string(),
            ..Default::default()
        };
        let service = MarktreeService::with_options(options);
        let tokens = vec![Token::heading(1, "This is a title")];

        let output = service.render_tokens(&tokens).unwrap();
        assert_eq!(
            output.to_html(),
            "<h1 id=\"test-this-is-a-title\">This is a title</h1>"
        );
    }

    #[test]
    fn test_duplicate_heading_ids() {
        let service = MarktreeService::new();
        let tokens = vec![
            Token::heading(1, "This is a title"),
            Token::heading(2, "This is a title"),
        ];

        let output = service.render_tokens(&tokens).unwrap();
        assert_eq!(
            output.to_html(),
            "<h1 id=\"this-is-a-title\">This is a title</h1>\
             <h2 id=\"this-is-a-title-1\">This is a title</h2>"
        );
    }

    #[test]
    fn test_heading_ids_disabled() {
        let options = RenderOptions {
            header_ids: false,
            ..Default::default()
        };
        let service = MarktreeService::with_options(options);
        let tokens = vec![Token::heading(1, "This is a title")];

        let output = service.render_tokens(&tokens).unwrap();
        assert_eq!(output.to_html(), "<h1>This is a title</h1>");
    }

    #[test]
    fn test_id_set_is_per_render_call() {
        let service = MarktreeService::new();
        let tokens = vec![Token::heading(1, "Title")];

        let first = service.render_tokens(&tokens).unwrap();
        let second = service.render_tokens(&tokens).unwrap();
        // a fresh document starts from the unsuffixed slug again
        assert_eq!(first.to_html(), second.to_html());
    }

    #[test]
    fn test_nested_html_elements() {
        let service = MarktreeService::new();
        let tokens = vec![
            Token::html("<div>"),
            Token::text("Hello "),
            Token::html("<span>"),
            Token::text("nested "),
            Token::em(vec![Token::text("world")]),
            Token::html("</span>"),
            Token::html("</div>"),
        ];

        let output = service.render_tokens(&tokens).unwrap();
        assert_eq!(
            output.to_html(),
            "<div>Hello <span>nested <em>world</em></span></div>"
        );
    }

    #[test]
    fn test_html_with_attributes() {
        let service = MarktreeService::new();
        let tokens = vec![
            Token::html("<a href=\"https://example.com\" class=\"link\">"),
            Token::text("Click me"),
            Token::html("</a>"),
        ];

        let output = service.render_tokens(&tokens).unwrap();
        assert_eq!(
            output.to_html(),
            "<a href=\"https://example.com\" class=\"link\">Click me</a>"
        );
    }

    #[test]
    fn test_mixed_markdown_and_html() {
        let service = MarktreeService::new();
        let tokens = vec![Token::paragraph(vec![
            Token::strong(vec![Token::text("Bold")]),
            Token::text(" text with "),
            Token::html("<code>"),
            Token::text("inline code"),
            Token::html("</code>"),
            Token::text(" and "),
            Token::em(vec![Token::text("italic")]),
        ])];

        let output = service.render_tokens(&tokens).unwrap();
        assert_eq!(
            output.to_html(),
            "<p><strong>Bold</strong> text with <code>inline code</code> \
             and <em>italic</em></p>"
        );
    }

    #[test]
    fn test_unclosed_html_stays_flat() {
        let service = MarktreeService::new();
        let tokens = vec![Token::html("<div>"), Token::text("unclosed content")];

        let output = service.render_tokens(&tokens).unwrap();
        assert_eq!(output.to_html(), "<div>unclosed content");
    }

    #[test]
    fn test_list_rendering() {
        let service = MarktreeService::new();
        let tokens = vec![Token::list(
            false,
            None,
            vec![
                Token::list_item(vec![Token::text("one")]),
                Token::list_item(vec![Token::text("two")]),
            ],
        )];

        let output = service.render_tokens(&tokens).unwrap();
        assert_eq!(output.to_html(), "<ul><li>one</li><li>two</li></ul>");
    }

    #[test]
    fn test_ordered_list_start() {
        let service = MarktreeService::new();
        let tokens = vec![Token::list(
            true,
            Some(3),
            vec![Token::list_item(vec![Token::text("three")])],
        )];

        let output = service.render_tokens(&tokens).unwrap();
        assert_eq!(output.to_html(), "<ol start=\"3\"><li>three</li></ol>");
    }

    #[test]
    fn test_suppressed_list_items_still_render_content() {
        let mut service = MarktreeService::new();
        service.renderers_mut().suppress(TokenKind::ListItem);

        let tokens = vec![Token::list(
            false,
            None,
            vec![
                Token::list_item(vec![Token::text("one")]),
                Token::list_item(vec![Token::text("two")]),
            ],
        )];

        let output = service.render_tokens(&tokens).unwrap();
        assert_eq!(output.to_html(), "<ul>onetwo</ul>");
    }

    #[test]
    fn test_ordered_item_override_applies_only_in_ordered_lists() {
        let mut service = MarktreeService::new();
        service
            .renderers_mut()
            .add(crate::RenderKey::OrderedListItem, |input| {
                Element::node(
                    "li",
                    vec![("class".to_string(), "ordered".to_string())],
                    input.children,
                )
            });

        let tokens = vec![
            Token::list(
                true,
                Some(1),
                vec![Token::list_item(vec![Token::text("numbered")])],
            ),
            Token::list(
                false,
                None,
                vec![Token::list_item(vec![Token::text("bulleted")])],
            ),
        ];

        let output = service.render_tokens(&tokens).unwrap();
        assert_eq!(
            output.to_html(),
            "<ol><li class=\"ordered\">numbered</li></ol>\
             <ul><li>bulleted</li></ul>"
        );
    }

    #[test]
    fn test_unregistered_kind_skips_but_recurses() {
        let mut renderers = Renderers::empty();
        renderers.add(TokenKind::Text, |input| {
            Element::text(input.token.text.as_deref().unwrap_or_default())
        });
        let options = RenderOptions {
            silent: true,
            ..Default::default()
        };
        let service = MarktreeService::with_renderers(options, renderers);

        let tokens = vec![Token::paragraph(vec![Token::text("still here")])];
        let output = service.render_tokens(&tokens).unwrap();
        // no <p> wrapper, but the children rendered
        assert_eq!(output.to_html(), "still here");
    }

    #[test]
    fn test_external_tokenizer() {
        struct FixedTokenizer;

        impl Tokenizer for FixedTokenizer {
            fn tokenize(&self, source: &str, _options: &RenderOptions) -> Vec<Token> {
                vec![Token::paragraph(vec![Token::text(source)])]
            }
        }

        let service = MarktreeService::new();
        let output = service.render(&FixedTokenizer, "Plain text").unwrap();
        assert_eq!(output.to_html(), "<p>Plain text</p>");
    }

    #[test]
    fn test_deeply_nested_lists() {
        let mut inner = Token::list_item(vec![Token::text("bottom")]);
        for _ in 0..200 {
            inner = Token::list_item(vec![Token::list(false, None, vec![inner])]);
        }
        let tokens = vec![Token::list(false, None, vec![inner])];

        let service = MarktreeService::new();
        let output = service.render_tokens(&tokens).unwrap();
        assert!(output.to_html().contains("bottom"));
    }
}

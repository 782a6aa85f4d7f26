//! Lexical token model for markdown documents.
//!
//! Tokens arrive from an external tokenizer as a flat, ordered sequence and
//! may carry nested child tokens. The shape follows the marked-style token:
//! a kind discriminant plus optional fields, so that tokens the engine does
//! not understand still flow through normalization untouched.

/// The closed set of token kinds the engine dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Blank space between blocks
    Space,
    /// Plain text run
    Text,
    /// Paragraph block
    Paragraph,
    /// Heading block (level in `depth`)
    Heading,
    /// Fenced or indented code block
    Code,
    /// Inline code span
    Codespan,
    /// Block quote
    Blockquote,
    /// List block (`ordered`, `start`)
    List,
    /// One list item
    ListItem,
    /// Table block
    Table,
    /// Table header section
    TableHead,
    /// Table body section
    TableBody,
    /// One table row
    TableRow,
    /// One table cell (`header` marks a th cell)
    TableCell,
    /// Strong emphasis
    Strong,
    /// Emphasis
    Em,
    /// Strikethrough
    Del,
    /// Hyperlink (`href`, `title`)
    Link,
    /// Image (`href`, `title`, alt in `text`)
    Image,
    /// Raw HTML fragment
    Html,
    /// Thematic break
    Hr,
    /// Hard line break
    Br,
}

impl TokenKind {
    /// Lower-case name of this kind, matching the external tokenizer's
    /// `type` discriminant
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Space => "space",
            TokenKind::Text => "text",
            TokenKind::Paragraph => "paragraph",
            TokenKind::Heading => "heading",
            TokenKind::Code => "code",
            TokenKind::Codespan => "codespan",
            TokenKind::Blockquote => "blockquote",
            TokenKind::List => "list",
            TokenKind::ListItem => "listitem",
            TokenKind::Table => "table",
            TokenKind::TableHead => "tablehead",
            TokenKind::TableBody => "tablebody",
            TokenKind::TableRow => "tablerow",
            TokenKind::TableCell => "tablecell",
            TokenKind::Strong => "strong",
            TokenKind::Em => "em",
            TokenKind::Del => "del",
            TokenKind::Link => "link",
            TokenKind::Image => "image",
            TokenKind::Html => "html",
            TokenKind::Hr => "hr",
            TokenKind::Br => "br",
        }
    }
}

/// One lexical unit of a document, possibly containing nested child tokens.
///
/// Only `kind` and `raw` are always meaningful; the remaining fields are
/// populated per kind. The normalizer sets `tag` on HTML tokens it was able
/// to pair with a matching close marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Kind discriminant
    pub kind: TokenKind,

    /// Original source slice this token was lexed from
    pub raw: String,

    /// Plain text content, where the kind carries one
    pub text: Option<String>,

    /// Ordered child tokens (insertion order = document order)
    pub tokens: Option<Vec<Token>>,

    /// Element name of a matched HTML token, set by normalization only
    pub tag: Option<String>,

    /// Heading level (1-6)
    pub depth: Option<u8>,

    /// Whether a list is ordered
    pub ordered: Option<bool>,

    /// Starting index of an ordered list
    pub start: Option<u64>,

    /// Link or image destination
    pub href: Option<String>,

    /// Link or image title
    pub title: Option<String>,

    /// Code block language tag
    pub lang: Option<String>,

    /// Whether a table cell belongs to the header row
    pub header: bool,

    /// Table cell alignment ("left", "center", "right")
    pub align: Option<String>,
}

impl Token {
    /// Create a bare token of the given kind
    pub fn new(kind: TokenKind, raw: &str) -> Self {
        Self {
            kind,
            raw: raw.to_string(),
            text: None,
            tokens: None,
            tag: None,
            depth: None,
            ordered: None,
            start: None,
            href: None,
            title: None,
            lang: None,
            header: false,
            align: None,
        }
    }

    /// Create a plain text token
    pub fn text(content: &str) -> Self {
        let mut token = Self::new(TokenKind::Text, content);
        token.text = Some(content.to_string());
        token
    }

    /// Create a raw HTML fragment token
    pub fn html(raw: &str) -> Self {
        Self::new(TokenKind::Html, raw)
    }

    /// Create a paragraph over the given children
    pub fn paragraph(children: Vec<Token>) -> Self {
        let mut token = Self::new(TokenKind::Paragraph, &joined_raw(&children));
        token.tokens = Some(children);
        token
    }

    /// Create a heading of the given level over plain text
    pub fn heading(depth: u8, text: &str) -> Self {
        let mut token = Self::new(TokenKind::Heading, text);
        token.depth = Some(depth);
        token.text = Some(text.to_string());
        token.tokens = Some(vec![Token::text(text)]);
        token
    }

    /// Create a list block containing the given items
    pub fn list(ordered: bool, start: Option<u64>, items: Vec<Token>) -> Self {
        let mut token = Self::new(TokenKind::List, &joined_raw(&items));
        token.ordered = Some(ordered);
        token.start = start;
        token.tokens = Some(items);
        token
    }

    /// Create one list item over the given children
    pub fn list_item(children: Vec<Token>) -> Self {
        let mut token = Self::new(TokenKind::ListItem, &joined_raw(&children));
        token.tokens = Some(children);
        token
    }

    /// Create a strong emphasis span
    pub fn strong(children: Vec<Token>) -> Self {
        let mut token = Self::new(TokenKind::Strong, &joined_raw(&children));
        token.tokens = Some(children);
        token
    }

    /// Create an emphasis span
    pub fn em(children: Vec<Token>) -> Self {
        let mut token = Self::new(TokenKind::Em, &joined_raw(&children));
        token.tokens = Some(children);
        token
    }

    /// Create a hyperlink over the given children
    pub fn link(href: &str, title: Option<&str>, children: Vec<Token>) -> Self {
        let mut token = Self::new(TokenKind::Link, &joined_raw(&children));
        token.href = Some(href.to_string());
        token.title = title.map(str::to_string);
        token.tokens = Some(children);
        token
    }

    /// Create an image with alt text
    pub fn image(href: &str, title: Option<&str>, alt: &str) -> Self {
        let mut token = Self::new(TokenKind::Image, alt);
        token.href = Some(href.to_string());
        token.title = title.map(str::to_string);
        token.text = Some(alt.to_string());
        token
    }

    /// Create a code block
    pub fn code(lang: Option<&str>, code: &str) -> Self {
        let mut token = Self::new(TokenKind::Code, code);
        token.lang = lang.map(str::to_string);
        token.text = Some(code.to_string());
        token
    }

    /// Create an inline code span
    pub fn codespan(code: &str) -> Self {
        let mut token = Self::new(TokenKind::Codespan, code);
        token.text = Some(code.to_string());
        token
    }

    /// Check if this is an HTML-kind token
    pub fn is_html(&self) -> bool {
        self.kind == TokenKind::Html
    }

    /// Iterate over child tokens, empty when none exist
    pub fn children(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().flat_map(|t| t.iter())
    }

    /// Append a child token
    pub fn push_child(&mut self, child: Token) {
        self.tokens.get_or_insert_with(Vec::new).push(child);
    }

    /// Plain text content of this token and its descendants.
    ///
    /// Prefers the token's own `text` field; falls back to concatenating
    /// the children's content in document order.
    pub fn text_content(&self) -> String {
        if let Some(ref text) = self.text {
            return text.clone();
        }
        self.children()
            .map(|child| child.text_content())
            .collect::<Vec<_>>()
            .join("")
    }
}

/// Raw text of a token sequence, in document order
fn joined_raw(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.raw.as_str())
        .collect::<Vec<_>>()
        .join("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_text() {
        let token = Token::text("Hello World");
        assert_eq!(token.kind, TokenKind::Text);
        assert_eq!(token.raw, "Hello World");
        assert_eq!(token.text_content(), "Hello World");
    }

    #[test]
    fn test_create_html() {
        let token = Token::html("<div>");
        assert!(token.is_html());
        assert_eq!(token.raw, "<div>");
        assert!(token.tag.is_none());
    }

    #[test]
    fn test_paragraph_children() {
        let token = Token::paragraph(vec![
            Token::text("this is an "),
            Token::strong(vec![Token::text("example")]),
        ]);
        assert_eq!(token.children().count(), 2);
        assert_eq!(token.raw, "this is an example");
    }

    #[test]
    fn test_text_content_recurses() {
        let token = Token::paragraph(vec![
            Token::text("plain "),
            Token::em(vec![Token::text("nested")]),
        ]);
        assert_eq!(token.text_content(), "plain nested");
    }

    #[test]
    fn test_text_content_prefers_own_text() {
        let token = Token::heading(1, "Title");
        assert_eq!(token.text_content(), "Title");
        assert_eq!(token.depth, Some(1));
    }

    #[test]
    fn test_list_carries_ordering() {
        let token = Token::list(
            true,
            Some(3),
            vec![Token::list_item(vec![Token::text("one")])],
        );
        assert_eq!(token.ordered, Some(true));
        assert_eq!(token.start, Some(3));
        assert_eq!(token.children().count(), 1);
    }

    #[test]
    fn test_push_child() {
        let mut token = Token::html("<div>");
        assert_eq!(token.children().count(), 0);
        token.push_child(Token::text("content"));
        assert_eq!(token.children().count(), 1);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::ListItem.as_str(), "listitem");
        assert_eq!(TokenKind::TableCell.as_str(), "tablecell");
        assert_eq!(TokenKind::Html.as_str(), "html");
    }
}

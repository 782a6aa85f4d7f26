//! Configuration options for token-tree rendering

/// Options for rendering a token tree.
///
/// `breaks` and `gfm` exist for the benefit of external tokenizers reached
/// through the `Tokenizer` trait; the engine itself consumes `header_ids`,
/// `header_prefix`, `lang_prefix`, and `silent`.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Assign anchor ids to headings
    pub header_ids: bool,

    /// Prefix prepended to generated heading ids
    pub header_prefix: String,

    /// Class prefix for code block language tags
    pub lang_prefix: String,

    /// Treat single newlines as hard breaks (tokenizer hint)
    pub breaks: bool,

    /// Enable GitHub Flavored Markdown extensions (tokenizer hint)
    pub gfm: bool,

    /// Suppress warnings for token kinds with no registered renderer
    pub silent: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            header_ids: true,
            header_prefix: String::new(),
            lang_prefix: "language-".to_string(),
            breaks: false,
            gfm: true,
            silent: false,
        }
    }
}

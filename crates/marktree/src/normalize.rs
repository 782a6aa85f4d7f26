//! HTML token-tree normalization.
//!
//! The external tokenizer emits inline HTML as flat marker tokens: one token
//! for `<div>`, separate tokens for its content, one token for `</div>`.
//! This module collapses each matched open/close pair into a single token
//! carrying its children, so that markdown and inline HTML can nest
//! arbitrarily. Unmatched or malformed markers are not repaired; they pass
//! through verbatim.

use once_cell::sync::Lazy;
use regex::Regex;

use marktree_core::{Token, TokenKind};

static OPEN_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<([a-zA-Z][a-zA-Z0-9-]*)(\s+[^<>]*)?>\s*$").unwrap());

static CLOSE_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^</([a-zA-Z][a-zA-Z0-9-]*)\s*>\s*$").unwrap());

static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([a-zA-Z_:][a-zA-Z0-9_:.-]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>`]+)))?"#)
        .unwrap()
});

/// A raw fragment recognized as a single HTML tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    /// Element name, as written
    pub tag: String,
    /// Whether this is an opening tag
    pub is_opening: bool,
}

/// Parse a raw fragment as a single opening or closing HTML tag.
///
/// Recognizes `<div>`, `<p id="para">`, `<custom-element>`, `</div>`.
/// Returns `None` for anything else, including `<>` and non-tag strings.
pub fn match_tag(raw: &str) -> Option<TagMatch> {
    if let Some(caps) = CLOSE_TAG_RE.captures(raw) {
        return Some(TagMatch {
            tag: caps[1].to_string(),
            is_opening: false,
        });
    }
    if let Some(caps) = OPEN_TAG_RE.captures(raw) {
        return Some(TagMatch {
            tag: caps[1].to_string(),
            is_opening: true,
        });
    }
    None
}

/// Parse the attribute text of an opening tag into name/value pairs.
///
/// Bare and boolean attributes yield an empty value. Returns an empty list
/// when the fragment is not an opening tag.
pub fn parse_attributes(raw: &str) -> Vec<(String, String)> {
    let Some(caps) = OPEN_TAG_RE.captures(raw) else {
        return Vec::new();
    };
    let attr_text = caps.get(2).map(|m| m.as_str()).unwrap_or("");

    ATTR_RE
        .captures_iter(attr_text)
        .map(|c| {
            let name = c[1].to_string();
            let value = c
                .get(2)
                .or_else(|| c.get(3))
                .or_else(|| c.get(4))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            (name, value)
        })
        .collect()
}

/// One currently-open HTML tag and the children accumulated since it opened
struct Frame {
    tag: String,
    open: Token,
    children: Vec<Token>,
}

/// Collapse matched open/close HTML marker pairs into nested tokens.
///
/// Single pass over the input with an explicit frame stack, recursing into
/// the children of tokens that already carry some (a paragraph holding
/// inline HTML markers, for instance), so the whole tree comes out
/// normalized. A matched pair becomes one HTML token whose `tag` is set and
/// whose `tokens` are the children seen between the markers. A close with no
/// matching open frame on top of the stack passes through unchanged. Frames
/// still open at end of input flush as flat tokens (the open marker, then
/// its children), never as a collapsed wrapper.
///
/// Already-collapsed HTML tokens (with `tag` set) are inert, which makes the
/// pass idempotent. Each token is appended exactly once to exactly one
/// level, so total work stays linear in token count.
pub fn shrink_html_tokens(tokens: Vec<Token>) -> Vec<Token> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Frame> = Vec::new();

    for mut token in tokens {
        if let Some(children) = token.tokens.take() {
            token.tokens = Some(shrink_html_tokens(children));
        }

        let matched = if token.kind == TokenKind::Html && token.tag.is_none() {
            match_tag(&token.raw)
        } else {
            None
        };

        match matched {
            Some(TagMatch {
                tag,
                is_opening: true,
            }) => {
                stack.push(Frame {
                    tag,
                    open: token,
                    children: Vec::new(),
                });
            }
            Some(TagMatch {
                tag,
                is_opening: false,
            }) if stack.last().is_some_and(|f| f.tag == tag) => {
                let frame = stack.pop().unwrap();
                let mut collapsed = frame.open;
                collapsed.tag = Some(frame.tag);
                collapsed.tokens = Some(frame.children);
                append_current(&mut stack, &mut output, collapsed);
            }
            // Mismatched closes are left as-is and the open frame stays
            // open; it will flush as unclosed if never matched.
            _ => append_current(&mut stack, &mut output, token),
        }
    }

    // Unclosed frames flush flat, in document order: the open marker first,
    // then whatever accumulated behind it.
    for frame in stack {
        output.push(frame.open);
        output.extend(frame.children);
    }

    output
}

/// Append a token to the innermost open frame, or to the output when no
/// frame is open
fn append_current(stack: &mut Vec<Frame>, output: &mut Vec<Token>, token: Token) {
    match stack.last_mut() {
        Some(frame) => frame.children.push(token),
        None => output.push(token),
    }
}

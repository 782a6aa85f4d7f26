//! Heading anchor slugs.

/// Build a URL-safe slug from heading text.
///
/// GitHub-style: lowercase, alphanumerics kept, runs of whitespace and
/// dashes collapse to a single dash, punctuation dropped, no leading or
/// trailing dash. Uniqueness against other headings in the document is the
/// dispatch engine's concern, not the slugger's.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_dash = false;

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
            last_dash = false;
        } else if ch.is_whitespace() || ch == '-' {
            if !last_dash && !out.is_empty() {
                out.push('-');
                last_dash = true;
            }
        }
        // punctuation and symbols are dropped
    }

    if out.ends_with('-') {
        out.pop();
    }
    out
}

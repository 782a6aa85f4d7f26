//! Default renderer table, one entry per token kind.
//!
//! Each renderer turns one token's fields and its already-rendered children
//! into an output element. Callers replace individual entries through
//! `Renderers::add` / `Renderers::suppress`.

use indexmap::IndexMap;

use marktree_core::{Element, TokenKind};

use super::{RenderInput, RenderKey, RendererEntry};
use crate::normalize::parse_attributes;

/// Build the default renderer table
pub fn default_renderers() -> IndexMap<RenderKey, RendererEntry> {
    let mut map: IndexMap<RenderKey, RendererEntry> = IndexMap::new();

    map.insert(TokenKind::Space.into(), renderer(space));
    map.insert(TokenKind::Text.into(), renderer(text));
    map.insert(TokenKind::Paragraph.into(), wrapper("p"));
    map.insert(TokenKind::Heading.into(), renderer(heading));
    map.insert(TokenKind::Code.into(), renderer(code));
    map.insert(TokenKind::Codespan.into(), renderer(codespan));
    map.insert(TokenKind::Blockquote.into(), wrapper("blockquote"));
    map.insert(TokenKind::List.into(), renderer(list));
    map.insert(TokenKind::ListItem.into(), wrapper("li"));
    map.insert(TokenKind::Table.into(), wrapper("table"));
    map.insert(TokenKind::TableHead.into(), wrapper("thead"));
    map.insert(TokenKind::TableBody.into(), wrapper("tbody"));
    map.insert(TokenKind::TableRow.into(), wrapper("tr"));
    map.insert(TokenKind::TableCell.into(), renderer(table_cell));
    map.insert(TokenKind::Strong.into(), wrapper("strong"));
    map.insert(TokenKind::Em.into(), wrapper("em"));
    map.insert(TokenKind::Del.into(), wrapper("del"));
    map.insert(TokenKind::Link.into(), renderer(link));
    map.insert(TokenKind::Image.into(), renderer(image));
    map.insert(TokenKind::Html.into(), renderer(html));
    map.insert(TokenKind::Hr.into(), renderer(|_| Element::node("hr", vec![], vec![])));
    map.insert(TokenKind::Br.into(), renderer(|_| Element::node("br", vec![], vec![])));

    // List-item subtypes render no wrapper of their own; the shared
    // `ListItem` entry applies unless a caller overrides a subtype.
    map.insert(RenderKey::OrderedListItem, RendererEntry::Suppressed);
    map.insert(RenderKey::UnorderedListItem, RendererEntry::Suppressed);

    map
}

fn renderer<F>(f: F) -> RendererEntry
where
    F: Fn(RenderInput) -> Element + Send + Sync + 'static,
{
    RendererEntry::Renderer(Box::new(f))
}

/// A renderer that wraps its children in a fixed tag
fn wrapper(tag: &'static str) -> RendererEntry {
    renderer(move |input| Element::node(tag, vec![], input.children))
}

fn space(_input: RenderInput) -> Element {
    Element::empty()
}

fn text(input: RenderInput) -> Element {
    if !input.children.is_empty() {
        return Element::fragment(input.children);
    }
    Element::text(input.token.text.as_deref().unwrap_or(&input.token.raw))
}

fn heading(input: RenderInput) -> Element {
    let level = input.token.depth.unwrap_or(1).clamp(1, 6);
    let attrs = match input.heading_id {
        Some(id) => vec![("id".to_string(), id)],
        None => vec![],
    };
    Element::node(&format!("h{level}"), attrs, input.children)
}

fn code(input: RenderInput) -> Element {
    let content = input.token.text.as_deref().unwrap_or(&input.token.raw);
    let attrs = match input.token.lang.as_deref() {
        Some(lang) if !lang.is_empty() => vec![(
            "class".to_string(),
            format!("{}{}", input.options.lang_prefix, lang),
        )],
        _ => vec![],
    };
    Element::node(
        "pre",
        vec![],
        vec![Element::node("code", attrs, vec![Element::text(content)])],
    )
}

fn codespan(input: RenderInput) -> Element {
    let content = input.token.text.as_deref().unwrap_or(&input.token.raw);
    Element::node("code", vec![], vec![Element::text(content)])
}

fn list(input: RenderInput) -> Element {
    let ordered = input.token.ordered.unwrap_or(false);
    if !ordered {
        return Element::node("ul", vec![], input.children);
    }
    let attrs = match input.token.start {
        Some(start) if start != 1 => vec![("start".to_string(), start.to_string())],
        _ => vec![],
    };
    Element::node("ol", attrs, input.children)
}

fn table_cell(input: RenderInput) -> Element {
    let tag = if input.token.header { "th" } else { "td" };
    let attrs = match input.token.align.as_deref() {
        Some(align) if !align.is_empty() => vec![("align".to_string(), align.to_string())],
        _ => vec![],
    };
    Element::node(tag, attrs, input.children)
}

fn link(input: RenderInput) -> Element {
    let mut attrs = vec![(
        "href".to_string(),
        input.token.href.clone().unwrap_or_default(),
    )];
    if let Some(ref title) = input.token.title {
        attrs.push(("title".to_string(), title.clone()));
    }
    Element::node("a", attrs, input.children)
}

fn image(input: RenderInput) -> Element {
    let mut attrs = vec![
        (
            "src".to_string(),
            input.token.href.clone().unwrap_or_default(),
        ),
        (
            "alt".to_string(),
            input.token.text.clone().unwrap_or_default(),
        ),
    ];
    if let Some(ref title) = input.token.title {
        attrs.push(("title".to_string(), title.clone()));
    }
    Element::node("img", attrs, vec![])
}

/// Matched HTML tokens become an element from their tag and the attribute
/// text of the opening fragment; unmatched fragments pass through verbatim.
fn html(input: RenderInput) -> Element {
    match input.token.tag.as_deref() {
        Some(tag) => Element::node(tag, parse_attributes(&input.token.raw), input.children),
        None => Element::raw(&input.token.raw),
    }
}

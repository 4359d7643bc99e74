// ABOUTME: Minimal tree-query capability over page markup: find by id, find by class, children, text.
// ABOUTME: HtmlDocument implements it on top of scraper's html5ever-backed DOM.

//! Markup queries.
//!
//! Extraction code only needs four operations on a page, so it is written
//! against [`MarkupQuery`] and [`MarkupNode`] instead of a concrete DOM. Every
//! lookup returns an `Option` or a (possibly empty) `Vec`; nothing panics on a
//! missing element.

use scraper::{ElementRef, Html};

/// Document-level queries.
pub trait MarkupQuery {
    type Node<'a>: MarkupNode
    where
        Self: 'a;

    /// First element in document order whose `id` attribute equals `id`.
    fn find_by_id(&self, id: &str) -> Option<Self::Node<'_>>;

    /// All elements carrying `class`, in document order.
    fn find_by_class(&self, class: &str) -> Vec<Self::Node<'_>>;
}

/// Element-level queries.
pub trait MarkupNode: Sized {
    /// Direct child elements with the given tag name, in document order.
    fn children(&self, tag: &str) -> Vec<Self>;

    /// The element's `id` attribute.
    fn id(&self) -> Option<&str>;

    /// Concatenated text of all descendant text nodes, verbatim.
    fn text(&self) -> String;

    /// First direct child element with the given tag name.
    fn first_child(&self, tag: &str) -> Option<Self> {
        self.children(tag).into_iter().next()
    }

    /// [`text`](MarkupNode::text) with whitespace runs collapsed to one space and the ends trimmed.
    fn stripped_text(&self) -> String {
        self.text()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A parsed HTML page.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
    }
}

impl MarkupQuery for HtmlDocument {
    type Node<'a> = HtmlNode<'a>;

    fn find_by_id(&self, id: &str) -> Option<HtmlNode<'_>> {
        self.elements()
            .find(|el| el.value().id() == Some(id))
            .map(HtmlNode)
    }

    fn find_by_class(&self, class: &str) -> Vec<HtmlNode<'_>> {
        self.elements()
            .filter(|el| el.value().classes().any(|c| c == class))
            .map(HtmlNode)
            .collect()
    }
}

/// An element inside an [`HtmlDocument`].
#[derive(Clone, Copy)]
pub struct HtmlNode<'a>(ElementRef<'a>);

impl MarkupNode for HtmlNode<'_> {
    fn children(&self, tag: &str) -> Vec<Self> {
        self.0
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name().eq_ignore_ascii_case(tag))
            .map(HtmlNode)
            .collect()
    }

    fn id(&self) -> Option<&str> {
        self.0.value().id()
    }

    fn text(&self) -> String {
        self.0.text().collect()
    }
}

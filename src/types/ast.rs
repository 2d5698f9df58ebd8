//! The parsed form of a template.
//!
//! Templates are scanned fresh on every render, the types here only live for
//! the duration of a single render call.

use crate::types::span::Span;

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Template<'source> {
    pub items: Vec<Item<'source>>,
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub enum Item<'source> {
    /// Literal text, passed through verbatim.
    Raw(Span),
    /// A placeholder, e.g. `{{ user.name|capital }}`.
    Expr(Expr<'source>),
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Expr<'source> {
    /// The span of the entire placeholder including the delimiters.
    pub span: Span,
    /// The dotted path split into its segments.
    pub path: Vec<&'source str>,
    /// The filters to apply, in order.
    pub filters: Vec<FilterCall<'source>>,
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct FilterCall<'source> {
    /// The span of the filter invocation, e.g. `or:buddy`.
    pub span: Span,
    pub name: &'source str,
    pub args: Vec<&'source str>,
}

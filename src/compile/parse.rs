use crate::types::ast::{Expr, FilterCall};
use crate::types::span::Span;

/// Parse the inner text of a placeholder.
///
/// The text is split on `|`, the first part is the dotted path and the rest
/// are filter invocations. Each invocation is split on `:` into the filter
/// name and its arguments. Nothing is trimmed, every piece is taken verbatim.
pub fn expr(source: &str, span: Span, inner: Span) -> Expr<'_> {
    let mut parts = split(&source[inner], '|').map(|(m, s)| (m + inner.m, s));

    // `split` always yields at least one part
    let path = match parts.next() {
        Some((_, path)) => path.split('.').collect(),
        None => Vec::new(),
    };

    let filters = parts
        .map(|(m, part)| {
            let mut pieces = part.split(':');
            let name = pieces.next().unwrap_or_default();
            FilterCall {
                span: Span::from(m..m + part.len()),
                name,
                args: pieces.collect(),
            }
        })
        .collect();

    Expr {
        span,
        path,
        filters,
    }
}

/// Like [`str::split`] but also yields the byte offset of each part.
fn split(s: &str, sep: char) -> impl Iterator<Item = (usize, &str)> {
    s.split(sep).scan(0, move |offset, part| {
        let m = *offset;
        *offset += part.len() + sep.len_utf8();
        Some((m, part))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn parse(inner: &str) -> Expr<'_> {
        expr(inner, Span::from(0..inner.len()), Span::from(0..inner.len()))
    }

    #[test]
    fn parse_path_only() {
        let e = parse("a.b.c");
        assert_eq!(e.path, ["a", "b", "c"]);
        assert!(e.filters.is_empty());
    }

    #[test]
    fn parse_filter_args() {
        let e = parse("n|plural:no author:one author:{} authors");
        assert_eq!(e.path, ["n"]);
        assert_eq!(e.filters.len(), 1);
        assert_eq!(e.filters[0].name, "plural");
        assert_eq!(e.filters[0].args, ["no author", "one author", "{} authors"]);
        assert_eq!(e.filters[0].span, Span::from(2..40));
    }

    #[test]
    fn parse_empty_filter() {
        let e = parse("a||b");
        let names: Vec<_> = e.filters.iter().map(|f| f.name).collect();
        assert_eq!(names, ["", "b"]);
        assert_eq!(e.filters[1].span, Span::from(3..4));
    }

    #[test]
    fn parse_empty_args() {
        let e = parse("a|or:");
        assert_eq!(e.filters[0].args, [""]);
    }
}

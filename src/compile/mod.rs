//! Scans template source into raw text and placeholder expressions.

mod lex;
mod parse;

use crate::compile::lex::{Lexer, Token};
use crate::types::ast::{Item, Template};
use crate::types::syntax::Syntax;

/// Scan a template source.
///
/// Scanning never fails, anything that doesn't look like a placeholder is
/// passed through verbatim.
pub fn template<'source>(syntax: &Syntax<'_>, source: &'source str) -> Template<'source> {
    let items = Lexer::new(syntax, source)
        .map(|(token, span)| match token {
            Token::Raw => Item::Raw(span),
            Token::Expr { inner } => Item::Expr(parse::expr(source, span, inner)),
        })
        .collect();
    Template { items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ast::{Expr, FilterCall};
    use crate::types::span::Span;

    #[track_caller]
    fn scan(source: &str) -> Template<'_> {
        template(&Syntax::default(), source)
    }

    #[test]
    fn template_raw() {
        let t = scan("lorem ipsum");
        assert_eq!(t.items, vec![Item::Raw(Span::from(0..11))]);
    }

    #[test]
    fn template_empty() {
        assert!(scan("").items.is_empty());
    }

    #[test]
    fn template_expr_with_filters() {
        let t = scan("hi {{user.name|or:buddy|capital}}!");
        assert_eq!(
            t.items,
            vec![
                Item::Raw(Span::from(0..3)),
                Item::Expr(Expr {
                    span: Span::from(3..33),
                    path: vec!["user", "name"],
                    filters: vec![
                        FilterCall {
                            span: Span::from(15..23),
                            name: "or",
                            args: vec!["buddy"],
                        },
                        FilterCall {
                            span: Span::from(24..31),
                            name: "capital",
                            args: vec![],
                        },
                    ],
                }),
                Item::Raw(Span::from(33..34)),
            ]
        );
    }

    #[test]
    fn template_expr_keeps_whitespace() {
        let t = scan("{{ name }}");
        match &t.items[..] {
            [Item::Expr(expr)] => assert_eq!(expr.path, vec![" name "]),
            items => panic!("unexpected items {:?}", items),
        }
    }

    #[test]
    fn template_empty_expr_is_raw() {
        let t = scan("{{}}");
        assert_eq!(t.items, vec![Item::Raw(Span::from(0..4))]);
    }
}

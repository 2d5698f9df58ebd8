use crate::types::span::Span;
use crate::types::syntax::Syntax;

/// A lexer that splits the template source into raw text and placeholders.
///
/// Placeholders are matched left-to-right and never overlap. The inner text
/// of a placeholder must be at least one character long and may span multiple
/// lines, the first end delimiter after that character closes it.
#[cfg_attr(test, derive(Debug))]
pub struct Lexer<'syntax, 'source> {
    begin: &'syntax str,
    end: &'syntax str,

    /// The template source.
    source: &'source str,

    /// A cursor over the template source.
    cursor: usize,

    /// A buffer to store the next token.
    next: Option<(Token, Span)>,
}

/// The unit yielded by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Raw template
    Raw,
    /// A placeholder, the span of the token covers the delimiters and `inner`
    /// covers only the text between them.
    Expr { inner: Span },
}

impl<'syntax, 'source> Lexer<'syntax, 'source> {
    pub fn new(syntax: &'syntax Syntax<'_>, source: &'source str) -> Self {
        Self {
            begin: &syntax.begin_expr,
            end: &syntax.end_expr,
            source,
            cursor: 0,
            next: None,
        }
    }

    /// Finds the next placeholder at or after `from`.
    fn find_expr(&self, from: usize) -> Option<(usize, Span, usize)> {
        let i = from + self.source[from..].find(self.begin)?;
        let inner_m = i + self.begin.len();
        // The inner text is never empty.
        let first = self.source[inner_m..].chars().next()?;
        let search = inner_m + first.len_utf8();
        let inner_n = search + self.source[search..].find(self.end)?;
        Some((i, Span::from(inner_m..inner_n), inner_n + self.end.len()))
    }
}

impl Iterator for Lexer<'_, '_> {
    type Item = (Token, Span);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(next) = self.next.take() {
            return Some(next);
        }

        let i = self.cursor;
        if i == self.source.len() {
            return None;
        }

        match self.find_expr(i) {
            Some((m, inner, n)) => {
                self.cursor = n;
                let expr = (Token::Expr { inner }, Span::from(m..n));
                if m == i {
                    Some(expr)
                } else {
                    self.next = Some(expr);
                    Some((Token::Raw, Span::from(i..m)))
                }
            }
            // An end delimiter can only come later than the current begin
            // delimiter so there are no more placeholders.
            None => {
                self.cursor = self.source.len();
                Some((Token::Raw, Span::from(i..self.source.len())))
            }
        }
    }
}

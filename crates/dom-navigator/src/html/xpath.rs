//! Rewrites a subset of XPath location paths into CSS selectors.
//!
//! Accepted grammar:
//!
//! ```text
//! path      := "."? "//" step (("/" | "//") step)*
//! step      := (name | "*") predicate*
//! predicate := "[" "@" name "]"
//!            | "[" "@" name "=" literal "]"
//!            | "[" "contains(" "@" name "," literal ")" "]"
//! ```
//!
//! `//` becomes the descendant combinator and `/` the child combinator.
//! Anything that is well formed XPath but outside this grammar is reported as
//! [`QueryError::Unsupported`] rather than [`QueryError::InvalidSyntax`].

use crate::result::QueryError;

/// Translate an XPath expression into an equivalent CSS selector.
///
/// # Errors
///
/// [`QueryError::InvalidSyntax`] for malformed expressions and
/// [`QueryError::Unsupported`] for XPath features with no CSS counterpart.
///
/// # Example
///
/// ```
/// use dom_navigator::xpath_to_css;
///
/// let css = xpath_to_css("//form[@action='/a']/input").unwrap();
/// assert_eq!(css, r#"form[action="/a"] > input"#);
/// ```
pub fn xpath_to_css(expression: &str) -> Result<String, QueryError> {
    let trimmed = expression.trim();
    if trimmed.is_empty() {
        return Err(QueryError::invalid_syntax("empty XPath expression"));
    }
    check_balanced(trimmed)?;

    let mut cursor = Cursor::new(trimmed);
    if cursor.rest.starts_with('(') {
        return Err(QueryError::unsupported(format!(
            "parenthesised XPath expression {trimmed}"
        )));
    }
    if cursor.rest.starts_with("..") {
        return Err(QueryError::unsupported(format!(
            "parent steps in XPath expression {trimmed}"
        )));
    }
    let relative = cursor.eat(".");
    if !cursor.eat("//") {
        return Err(if cursor.rest.starts_with('/') || (relative && cursor.rest.is_empty()) {
            QueryError::unsupported(format!(
                "only descendant paths (//step) are supported, got {trimmed}"
            ))
        } else {
            cursor.unexpected()
        });
    }

    let mut css = String::new();
    loop {
        css.push_str(&step(&mut cursor, trimmed)?);
        if cursor.rest.is_empty() {
            return Ok(css);
        }
        if cursor.eat("//") {
            css.push(' ');
        } else if cursor.eat("/") {
            css.push_str(" > ");
        } else {
            return Err(cursor.unexpected());
        }
    }
}

struct Cursor<'a> {
    source: &'a str,
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    const fn new(source: &'a str) -> Self {
        Self {
            source,
            rest: source,
        }
    }

    fn offset(&self) -> usize {
        self.source.len() - self.rest.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn eat(&mut self, token: &str) -> bool {
        match self.rest.strip_prefix(token) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn expect(&mut self, token: &str) -> Result<(), QueryError> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(QueryError::invalid_syntax(format!(
                "expected '{token}' at offset {} in {}",
                self.offset(),
                self.source
            )))
        }
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn name(&mut self) -> &'a str {
        let end = self
            .rest
            .find(|c: char| !(c.is_alphanumeric() || matches!(c, '-' | '_' | '.')))
            .unwrap_or(self.rest.len());
        let (name, rest) = self.rest.split_at(end);
        self.rest = rest;
        name
    }

    fn unexpected(&self) -> QueryError {
        match self.peek() {
            Some(c) => QueryError::invalid_syntax(format!(
                "unexpected '{c}' at offset {} in {}",
                self.offset(),
                self.source
            )),
            None => QueryError::invalid_syntax(format!("unexpected end of {}", self.source)),
        }
    }
}

fn step(cursor: &mut Cursor<'_>, expression: &str) -> Result<String, QueryError> {
    let mut css = if cursor.eat("*") {
        String::from("*")
    } else {
        let name = cursor.name();
        if name.is_empty() {
            return Err(match cursor.peek() {
                Some('@') => unsupported("attribute steps", expression),
                Some('.') => unsupported("abbreviated steps", expression),
                _ => cursor.unexpected(),
            });
        }
        name.to_string()
    };

    if cursor.rest.starts_with("::") {
        return Err(unsupported("axes", expression));
    }
    match cursor.peek() {
        Some(':') => return Err(unsupported("namespaced names", expression)),
        Some('(') => return Err(unsupported("node tests", expression)),
        _ => {}
    }

    while cursor.eat("[") {
        css.push_str(&predicate(cursor, expression)?);
    }
    Ok(css)
}

fn predicate(cursor: &mut Cursor<'_>, expression: &str) -> Result<String, QueryError> {
    cursor.skip_whitespace();
    let css = if cursor.eat("@") {
        let attribute = attribute_name(cursor)?;
        cursor.skip_whitespace();
        if cursor.eat("=") {
            cursor.skip_whitespace();
            let value = literal(cursor)?;
            format!("[{attribute}=\"{}\"]", escape(value))
        } else if cursor.rest.starts_with(']') {
            format!("[{attribute}]")
        } else {
            return Err(unsupported("compound predicates", expression));
        }
    } else {
        let function = cursor.name();
        if function == "contains" {
            cursor.skip_whitespace();
            cursor.expect("(")?;
            cursor.skip_whitespace();
            if !cursor.eat("@") {
                return Err(unsupported("contains() on non-attributes", expression));
            }
            let attribute = attribute_name(cursor)?;
            cursor.skip_whitespace();
            cursor.expect(",")?;
            cursor.skip_whitespace();
            let value = literal(cursor)?;
            cursor.skip_whitespace();
            cursor.expect(")")?;
            format!("[{attribute}*=\"{}\"]", escape(value))
        } else if function.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(unsupported("positional predicates", expression));
        } else if function.is_empty() {
            return Err(cursor.unexpected());
        } else {
            return Err(unsupported("this predicate", expression));
        }
    };
    cursor.skip_whitespace();
    if !cursor.eat("]") {
        return Err(unsupported("compound predicates", expression));
    }
    Ok(css)
}

fn attribute_name<'a>(cursor: &mut Cursor<'a>) -> Result<&'a str, QueryError> {
    let name = cursor.name();
    if name.is_empty() {
        Err(cursor.unexpected())
    } else {
        Ok(name)
    }
}

fn literal<'a>(cursor: &mut Cursor<'a>) -> Result<&'a str, QueryError> {
    let Some(quote) = cursor.peek().filter(|c| matches!(*c, '\'' | '"')) else {
        return Err(cursor.unexpected());
    };
    let body = &cursor.rest[1..];
    let Some(end) = body.find(quote) else {
        return Err(QueryError::invalid_syntax(format!(
            "unterminated string literal in {}",
            cursor.source
        )));
    };
    let value = &body[..end];
    cursor.rest = &body[end + 1..];
    Ok(value)
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn unsupported(feature: &str, expression: &str) -> QueryError {
    QueryError::unsupported(format!("{feature} in XPath expression {expression}"))
}

/// Reject unbalanced brackets, parentheses and quotes up front so a truncated
/// expression is reported as malformed rather than unsupported.
fn check_balanced(expression: &str) -> Result<(), QueryError> {
    let mut open = Vec::new();
    let mut quote = None;
    for c in expression.chars() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, '[' | '(') => open.push(c),
            (None, ']') if open.pop() != Some('[') => return Err(unbalanced(expression)),
            (None, ')') if open.pop() != Some('(') => return Err(unbalanced(expression)),
            _ => {}
        }
    }
    if quote.is_some() || !open.is_empty() {
        return Err(unbalanced(expression));
    }
    Ok(())
}

fn unbalanced(expression: &str) -> QueryError {
    QueryError::invalid_syntax(format!("unbalanced brackets or quotes in {expression}"))
}

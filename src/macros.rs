//! Utility macros for the tokenizer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default pattern handler for fixed tokens

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's source text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default handler for patterns that always produce the same text.
///
/// The generated handler builds a token of the given kind spanning
/// `$value.len()` bytes from the match start.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: anchored("\\+"),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |tokenizer: &Tokenizer, _matched: &str, start: u32| {
            MK_TOKEN!(
                $kind,
                String::from($value),
                Span {
                    start: Position(start, Rc::clone(&tokenizer.file)),
                    end: Position(start + $value.len() as u32, Rc::clone(&tokenizer.file)),
                }
            )
        }
    };
}

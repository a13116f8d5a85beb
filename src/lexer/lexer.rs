use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&Tokenizer, &str, u32) -> Token;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{})", pattern))
}

lazy_static! {
    // Longest match wins, so order only matters between equal-length matches.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: anchored("[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: anchored("[a-zA-Z_][a-zA-Z_0-9]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: anchored("'[^']*'|\"[^\"]*\"").unwrap(), handler: string_handler },
        RegexPattern { regex: anchored("\\*\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::StarStar, "**") },
        RegexPattern { regex: anchored("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: anchored("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: anchored("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: anchored("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: anchored("\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
        RegexPattern { regex: anchored("\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
        RegexPattern { regex: anchored("\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
        RegexPattern { regex: anchored("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: anchored("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: anchored("\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: anchored("\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: anchored(":").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: anchored(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: anchored(">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: anchored("<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: anchored("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: anchored(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: anchored("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: anchored("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: anchored("!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: anchored("&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&") },
        RegexPattern { regex: anchored("\\|\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "||") },
    ];
}

/// Anything that can hand the parser one token at a time.
///
/// `next` returns the first token at or after `offset`, or an `EOF` token
/// once only ignorable text remains.
pub trait TokenSource {
    fn next(&self, source: &str, offset: u32) -> Result<Token, Error>;
}

/// Tokenizer settings.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Text matching this pattern between tokens is skipped.
    pub ignore: String,
    /// Source name recorded in token positions.
    pub file: Option<String>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            ignore: String::from("\\s+"),
            file: None,
        }
    }
}

#[derive(Clone)]
pub struct Tokenizer {
    ignore: Regex,
    file: Rc<String>,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Result<Tokenizer, Error> {
        let file = Rc::new(config.file.unwrap_or_else(|| String::from("shell")));

        let ignore = anchored(&config.ignore).map_err(|err| {
            Error::new(
                ErrorImpl::InvalidPattern {
                    pattern: config.ignore.clone(),
                    message: err.to_string(),
                },
                Position(0, Rc::clone(&file)),
            )
        })?;

        Ok(Tokenizer { ignore, file })
    }

    pub fn get_file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    fn skip_ignored(&self, source: &str, mut pos: usize) -> usize {
        while let Some(remaining) = source.get(pos..) {
            match self.ignore.find(remaining) {
                Some(matched) if matched.end() > 0 => pos += matched.end(),
                _ => break,
            }
        }

        pos
    }

    fn position(&self, pos: usize) -> Position {
        Position(pos as u32, Rc::clone(&self.file))
    }
}

impl TokenSource for Tokenizer {
    fn next(&self, source: &str, offset: u32) -> Result<Token, Error> {
        let pos = self.skip_ignored(source, offset as usize);

        if pos >= source.len() {
            let end = source.len().max(offset as usize);
            return Ok(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), Span { start: self.position(end), end: self.position(end) }));
        }

        let Some(remaining) = source.get(pos..) else {
            return Err(Error::new(ErrorImpl::UnrecognisedToken { token: String::new() }, self.position(pos)));
        };

        let mut best: Option<(&RegexPattern, &str)> = None;
        for pattern in PATTERNS.iter() {
            if let Some(matched) = pattern.regex.find(remaining) {
                let longer = best.map_or(true, |(_, current)| matched.end() > current.len());
                if longer && matched.end() > 0 {
                    best = Some((pattern, matched.as_str()));
                }
            }
        }

        match best {
            Some((pattern, matched)) => Ok((pattern.handler)(self, matched, pos as u32)),
            None => {
                let token = remaining.chars().next().map(String::from).unwrap_or_default();
                Err(Error::new(ErrorImpl::UnrecognisedToken { token }, self.position(pos)))
            }
        }
    }
}

fn span_of(tokenizer: &Tokenizer, matched: &str, start: u32) -> Span {
    Span {
        start: Position(start, Rc::clone(&tokenizer.file)),
        end: Position(start + matched.len() as u32, Rc::clone(&tokenizer.file)),
    }
}

fn number_handler(tokenizer: &Tokenizer, matched: &str, start: u32) -> Token {
    MK_TOKEN!(TokenKind::Number, String::from(matched), span_of(tokenizer, matched, start))
}

fn string_handler(tokenizer: &Tokenizer, matched: &str, start: u32) -> Token {
    MK_TOKEN!(TokenKind::String, String::from(matched), span_of(tokenizer, matched, start))
}

fn symbol_handler(tokenizer: &Tokenizer, matched: &str, start: u32) -> Token {
    let kind = RESERVED_LOOKUP.get(matched).copied().unwrap_or(TokenKind::Identifier);
    MK_TOKEN!(kind, String::from(matched), span_of(tokenizer, matched, start))
}

/// Builds a tokenizer with the default configuration (whitespace ignored).
pub fn create_tokenizer() -> Tokenizer {
    Tokenizer {
        ignore: anchored("\\s+").unwrap(),
        file: Rc::new(String::from("shell")),
    }
}

/// Runs the tokenizer over the whole source, ending with an `EOF` token.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let tokenizer = Tokenizer::new(TokenizerConfig { file, ..TokenizerConfig::default() })?;
    let mut tokens = vec![];
    let mut offset = 0;

    loop {
        let token = tokenizer.next(source, offset)?;
        offset = token.span.end.0;

        let done = token.kind == TokenKind::EOF;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

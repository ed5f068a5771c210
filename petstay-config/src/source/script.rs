//! Browser script source: `window.NAME = { KEY: "value", ... };`.
//!
//! Only the first object literal is read. Keys are bare identifiers or quoted
//! strings, values must be string literals. Anything after the closing brace,
//! such as a runtime safety check, is ignored.

use crate::error::{ConfigError, ConfigResult};
use crate::map::{ConfigMap, ConfigMapBuilder};

/// Parses the first object literal of a configuration script.
///
/// # Errors
///
/// Returns [`ConfigError::Script`] on a syntax error,
/// [`ConfigError::DuplicateKey`] when a key is assigned twice, and
/// [`ConfigError::InvalidKey`] for a malformed key.
pub fn from_script_str(text: &str) -> ConfigResult<ConfigMap> {
    let mut scanner = Scanner::new(text);
    scanner.seek_object_start()?;
    scanner.parse_object()
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Scanner {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_second(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    fn error(&self, reason: impl Into<String>) -> ConfigError {
        ConfigError::Script {
            line: self.line,
            reason: reason.into(),
        }
    }

    /// Skips whitespace and comments.
    fn skip_trivia(&mut self) -> ConfigResult<()> {
        loop {
            match (self.peek(), self.peek_second()) {
                (Some(ch), _) if ch.is_whitespace() => {
                    self.bump();
                }
                (Some('/'), Some('/')) => {
                    while let Some(ch) = self.bump() {
                        if ch == '\n' {
                            break;
                        }
                    }
                }
                (Some('/'), Some('*')) => {
                    let start = self.line;
                    self.pos += 2;
                    loop {
                        match self.bump() {
                            Some('*') if self.peek() == Some('/') => {
                                self.bump();
                                break;
                            }
                            Some(_) => {}
                            None => {
                                return Err(ConfigError::Script {
                                    line: start,
                                    reason: "unterminated block comment".into(),
                                });
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Advances past the opening brace of the first object literal.
    fn seek_object_start(&mut self) -> ConfigResult<()> {
        loop {
            self.skip_trivia()?;
            match self.bump() {
                Some('{') => return Ok(()),
                Some(quote @ ('"' | '\'' | '`')) => {
                    self.parse_string(quote)?;
                }
                Some(_) => {}
                None => return Err(self.error("no object literal found")),
            }
        }
    }

    fn parse_object(&mut self) -> ConfigResult<ConfigMap> {
        let mut builder = ConfigMapBuilder::default();
        loop {
            self.skip_trivia()?;
            if self.peek() == Some('}') {
                self.bump();
                return Ok(builder.build());
            }

            let key = self.parse_key()?;
            self.skip_trivia()?;
            if self.bump() != Some(':') {
                return Err(self.error(format!("expected `:` after key `{key}`")));
            }
            self.skip_trivia()?;
            let value = match self.peek() {
                Some(quote @ ('"' | '\'' | '`')) => {
                    self.bump();
                    self.parse_string(quote)?
                }
                _ => {
                    return Err(self.error(format!("value for `{key}` must be a string literal")));
                }
            };
            builder = builder.insert(key, value)?;

            self.skip_trivia()?;
            match self.bump() {
                Some(',') => {}
                Some('}') => return Ok(builder.build()),
                Some(ch) => return Err(self.error(format!("expected `,` or `}}`, found `{ch}`"))),
                None => return Err(self.error("unterminated object literal")),
            }
        }
    }

    fn parse_key(&mut self) -> ConfigResult<String> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.bump();
                self.parse_string(quote)
            }
            Some(ch) if is_ident_char(ch) => {
                let mut key = String::new();
                while let Some(ch) = self.peek().filter(|c| is_ident_char(*c)) {
                    key.push(ch);
                    self.bump();
                }
                Ok(key)
            }
            Some(ch) => Err(self.error(format!("expected key, found `{ch}`"))),
            None => Err(self.error("unterminated object literal")),
        }
    }

    /// Reads a string literal body; the opening quote is already consumed.
    fn parse_string(&mut self, quote: char) -> ConfigResult<String> {
        let start = self.line;
        let mut out = String::new();
        loop {
            let Some(ch) = self.bump() else {
                return Err(ConfigError::Script {
                    line: start,
                    reason: "unterminated string literal".into(),
                });
            };
            match ch {
                c if c == quote => return Ok(out),
                '\n' if quote != '`' => {
                    return Err(ConfigError::Script {
                        line: start,
                        reason: "unterminated string literal".into(),
                    });
                }
                '$' if quote == '`' && self.peek() == Some('{') => {
                    return Err(self.error("template literal interpolation is not supported"));
                }
                '\\' => self.parse_escape(&mut out)?,
                c => out.push(c),
            }
        }
    }

    fn parse_escape(&mut self, out: &mut String) -> ConfigResult<()> {
        let Some(ch) = self.bump() else {
            return Err(self.error("unterminated escape sequence"));
        };
        match ch {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' => out.push('\0'),
            // line continuation
            '\n' => {}
            '\r' => {
                if self.peek() == Some('\n') {
                    self.bump();
                }
            }
            'x' => {
                let code = self.read_hex(2, "invalid hex escape")?;
                let decoded =
                    char::from_u32(code).ok_or_else(|| self.error("invalid hex escape"))?;
                out.push(decoded);
            }
            'u' => {
                if self.peek() == Some('{') {
                    return Err(self.error("braced unicode escapes are not supported"));
                }
                let code = self.read_hex(4, "invalid unicode escape")?;
                if (0xD800..=0xDFFF).contains(&code) {
                    return Err(self.error("surrogate unicode escapes are not supported"));
                }
                let decoded =
                    char::from_u32(code).ok_or_else(|| self.error("invalid unicode escape"))?;
                out.push(decoded);
            }
            other => out.push(other),
        }
        Ok(())
    }

    fn read_hex(&mut self, digits: usize, reason: &str) -> ConfigResult<u32> {
        let mut code = 0u32;
        for _ in 0..digits {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.error(reason))?;
            code = code * 16 + digit;
        }
        Ok(code)
    }
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

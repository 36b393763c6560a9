//! Lexer for tokenizing user.js preference files
//!
//! Converts a character stream into tokens for the `user_pref` parser. String
//! literals may use either quote style and JavaScript escape sequences. Every
//! token carries the line and column where it starts.

use crate::error::{Error, Result};
use std::iter::Peekable;
use std::str::Chars;

/// Token types produced by the lexer
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Identifier (e.g., user_pref)
    Identifier(String),
    /// String value with escape sequences already processed
    String(String),
    /// Decimal integer value
    Integer(i64),
    /// Boolean value
    Boolean(bool),
    LeftParen,
    RightParen,
    Comma,
    Semicolon,
    /// End of input
    Eof,
}

/// A token with its 1-indexed start position
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub line: usize,
    pub column: usize,
}

/// Lexer for tokenizing user.js files
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input
    pub fn new(input: &'a str) -> Self {
        // A leading byte order mark is not part of the content
        let input = input.strip_prefix('\u{feff}').unwrap_or(input);
        Lexer {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Get the next token from the input
    pub fn next_token(&mut self) -> Result<Spanned> {
        self.skip_whitespace_and_comments()?;

        let line = self.line;
        let column = self.column;

        let token = match self.chars.peek().copied() {
            None => Token::Eof,
            Some('(') => {
                self.advance();
                Token::LeftParen
            }
            Some(')') => {
                self.advance();
                Token::RightParen
            }
            Some(',') => {
                self.advance();
                Token::Comma
            }
            Some(';') => {
                self.advance();
                Token::Semicolon
            }
            Some(quote @ ('"' | '\'')) => self.lex_string(quote)?,
            Some('-' | '0'..='9') => self.lex_integer()?,
            Some('a'..='z' | 'A'..='Z' | '_') => self.lex_identifier(),
            Some(c) => {
                return Err(self.error_at(line, column, format!("Unexpected character: '{}'", c)))
            }
        };

        Ok(Spanned {
            token,
            line,
            column,
        })
    }

    /// Advance to the next character, keeping line and column in sync
    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn error_at(&self, line: usize, column: usize, message: String) -> Error {
        Error::Lexer {
            line,
            column,
            message,
        }
    }

    /// Skip whitespace, `//` line comments and `/* */` block comments
    fn skip_whitespace_and_comments(&mut self) -> Result<()> {
        loop {
            while let Some(&c) = self.chars.peek() {
                if c.is_whitespace() {
                    self.advance();
                } else {
                    break;
                }
            }

            if self.chars.peek() != Some(&'/') {
                return Ok(());
            }

            let (start_line, start_col) = (self.line, self.column);
            self.advance();
            match self.chars.peek() {
                Some(&'/') => {
                    while let Some(&c) = self.chars.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                Some(&'*') => {
                    self.advance();
                    let mut closed = false;
                    while let Some(c) = self.advance() {
                        if c == '*' && self.chars.peek() == Some(&'/') {
                            self.advance();
                            closed = true;
                            break;
                        }
                    }
                    if !closed {
                        return Err(self.error_at(
                            start_line,
                            start_col,
                            "Unterminated block comment".to_string(),
                        ));
                    }
                }
                _ => {
                    return Err(self.error_at(
                        start_line,
                        start_col,
                        "Unexpected character: '/'".to_string(),
                    ))
                }
            }
        }
    }

    /// Lex an identifier or the `true`/`false` keywords
    fn lex_identifier(&mut self) -> Token {
        let mut ident = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                ident.push(c);
                self.advance();
            } else {
                break;
            }
        }

        match ident.as_str() {
            "true" => Token::Boolean(true),
            "false" => Token::Boolean(false),
            _ => Token::Identifier(ident),
        }
    }

    /// Lex a string literal delimited by `quote`
    fn lex_string(&mut self, quote: char) -> Result<Token> {
        let (start_line, start_col) = (self.line, self.column);

        // Opening quote
        self.advance();

        let mut result = String::new();

        loop {
            match self.advance() {
                Some(c) if c == quote => return Ok(Token::String(result)),
                Some('\\') => {
                    let escape_col = self.column - 1;
                    match self.advance() {
                        Some('"') => result.push('"'),
                        Some('\'') => result.push('\''),
                        Some('\\') => result.push('\\'),
                        Some('n') => result.push('\n'),
                        Some('r') => result.push('\r'),
                        Some('t') => result.push('\t'),
                        Some('b') => result.push('\x08'),
                        Some('f') => result.push('\x0c'),
                        Some('0') => {
                            if self.chars.peek() == Some(&'0') {
                                return Err(self.error_at(
                                    self.line,
                                    escape_col,
                                    "Octal escape sequences are not supported. Use \\x00 instead."
                                        .to_string(),
                                ));
                            }
                            result.push('\x00');
                        }
                        Some('x') => result.push(self.lex_hex_escape(2, escape_col)?),
                        Some('u') => result.push(self.lex_hex_escape(4, escape_col)?),
                        Some(c) => {
                            return Err(self.error_at(
                                self.line,
                                escape_col,
                                format!("Invalid escape sequence: \\{}", c),
                            ))
                        }
                        None => {
                            return Err(self.error_at(
                                self.line,
                                escape_col,
                                "Unexpected end of input in escape sequence".to_string(),
                            ))
                        }
                    }
                }
                Some('\n') => {
                    return Err(self.error_at(
                        start_line,
                        start_col,
                        "Newline in string literal".to_string(),
                    ))
                }
                Some(c) => result.push(c),
                None => {
                    return Err(self.error_at(
                        start_line,
                        start_col,
                        "Unterminated string literal".to_string(),
                    ))
                }
            }
        }
    }

    /// Read exactly `digits` hex digits of a `\x` or `\u` escape
    fn lex_hex_escape(&mut self, digits: usize, escape_col: usize) -> Result<char> {
        let mut hex = String::with_capacity(digits);
        for _ in 0..digits {
            match self.chars.peek() {
                Some(&c) if c.is_ascii_hexdigit() => {
                    hex.push(c);
                    self.advance();
                }
                _ => break,
            }
        }

        let kind = if digits == 2 { 'x' } else { 'u' };
        if hex.len() != digits {
            return Err(self.error_at(
                self.line,
                escape_col,
                format!("Incomplete escape: \\{}{}", kind, hex),
            ));
        }

        u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| {
                self.error_at(
                    self.line,
                    escape_col,
                    format!("Invalid escape: \\{}{}", kind, hex),
                )
            })
    }

    /// Lex a decimal integer with optional leading minus
    fn lex_integer(&mut self) -> Result<Token> {
        let (line, start_col) = (self.line, self.column);

        let mut num_str = String::new();
        if self.chars.peek() == Some(&'-') {
            num_str.push('-');
            self.advance();
        }

        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_digit() {
                num_str.push(c);
                self.advance();
            } else {
                break;
            }
        }

        if let Some(&c) = self.chars.peek().filter(|c| matches!(**c, '.' | 'e' | 'E')) {
            return Err(self.error_at(
                line,
                start_col,
                format!("Only decimal integers are supported, found '{}{}'", num_str, c),
            ));
        }

        num_str.parse::<i64>().map(Token::Integer).map_err(|_| {
            self.error_at(
                line,
                start_col,
                format!("Failed to parse integer: {}", num_str),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let t = lexer.next_token().unwrap().token;
            let done = t == Token::Eof;
            out.push(t);
            if done {
                return out;
            }
        }
    }

    #[test]
    fn test_lexer_basic_tokens() {
        assert_eq!(
            tokens("( ) , ;"),
            vec![
                Token::LeftParen,
                Token::RightParen,
                Token::Comma,
                Token::Semicolon,
                Token::Eof
            ]
        );
    }

    #[test]
    fn test_lexer_comments() {
        let input = "( // line comment\n /* block\ncomment */ )";
        assert_eq!(
            tokens(input),
            vec![Token::LeftParen, Token::RightParen, Token::Eof]
        );
    }

    #[test]
    fn test_lexer_unterminated_block_comment() {
        let mut lexer = Lexer::new("/* never closed");
        assert!(matches!(
            lexer.next_token(),
            Err(Error::Lexer { line: 1, column: 1, .. })
        ));
    }

    #[test]
    fn test_lexer_skips_leading_bom() {
        let mut lexer = Lexer::new("\u{feff}user_pref");
        let ident = lexer.next_token().unwrap();
        assert_eq!(ident.token, Token::Identifier("user_pref".to_string()));
        assert_eq!((ident.line, ident.column), (1, 1));
    }

    #[test]
    fn test_lexer_bom_after_start_is_error() {
        let mut lexer = Lexer::new("( \u{feff}");
        lexer.next_token().unwrap();
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn test_lexer_lone_slash_is_error() {
        let mut lexer = Lexer::new("/ x");
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn test_lexer_identifier_and_booleans() {
        assert_eq!(
            tokens("user_pref true false"),
            vec![
                Token::Identifier("user_pref".to_string()),
                Token::Boolean(true),
                Token::Boolean(false),
                Token::Eof
            ]
        );
    }

    #[test]
    fn test_lexer_quote_styles_decode_the_same() {
        assert_eq!(
            tokens(r#""about:blank" 'about:blank'"#),
            vec![
                Token::String("about:blank".to_string()),
                Token::String("about:blank".to_string()),
                Token::Eof
            ]
        );
    }

    #[test]
    fn test_lexer_other_quote_inside_string() {
        assert_eq!(
            tokens(r#"'say "hi"' "it's""#),
            vec![
                Token::String("say \"hi\"".to_string()),
                Token::String("it's".to_string()),
                Token::Eof
            ]
        );
    }

    #[test]
    fn test_lexer_string_escapes() {
        assert_eq!(
            tokens(r#""a\"b\\c\nd\te\x41B\0""#),
            vec![Token::String("a\"b\\c\nd\teAB\x00".to_string()), Token::Eof]
        );
    }

    #[test]
    fn test_lexer_octal_escape_rejected() {
        let mut lexer = Lexer::new(r#""test\00""#);
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn test_lexer_incomplete_hex_escape() {
        let mut lexer = Lexer::new(r#""\x4""#);
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn test_lexer_unterminated_string() {
        let mut lexer = Lexer::new("\"open");
        assert!(matches!(
            lexer.next_token(),
            Err(Error::Lexer { line: 1, column: 1, .. })
        ));
    }

    #[test]
    fn test_lexer_newline_in_string() {
        let mut lexer = Lexer::new("'a\nb'");
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn test_lexer_integers() {
        assert_eq!(
            tokens("5 -42 60000"),
            vec![
                Token::Integer(5),
                Token::Integer(-42),
                Token::Integer(60000),
                Token::Eof
            ]
        );
    }

    #[test]
    fn test_lexer_float_rejected() {
        let mut lexer = Lexer::new("3.14");
        assert!(lexer.next_token().is_err());
        let mut lexer = Lexer::new("1e5");
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn test_lexer_integer_overflow() {
        let mut lexer = Lexer::new("99999999999999999999");
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn test_lexer_positions() {
        let mut lexer = Lexer::new("\n  user_pref(");
        let ident = lexer.next_token().unwrap();
        assert_eq!((ident.line, ident.column), (2, 3));
        let paren = lexer.next_token().unwrap();
        assert_eq!((paren.line, paren.column), (2, 12));
    }

    #[test]
    fn test_lexer_unexpected_character() {
        let mut lexer = Lexer::new("user_pref(#");
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        match lexer.next_token() {
            Err(Error::Lexer {
                line,
                column,
                message,
            }) => {
                assert_eq!((line, column), (1, 11));
                assert!(message.contains('#'));
            }
            other => panic!("expected lexer error, got {:?}", other),
        }
    }
}

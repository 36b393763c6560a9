//! Parser for user.js preference files
//!
//! A recursive descent parser over the [`Lexer`](crate::lexer::Lexer) token
//! stream. The accepted grammar is deliberately small:
//!
//! ```text
//! file      := statement* EOF
//! statement := "user_pref" "(" STRING "," value ")" ";"
//! value     := "true" | "false" | INTEGER | STRING
//! ```
//!
//! # Example
//!
//! ```rust
//! use perf_prefs::{parse_user_js, PrefValue};
//!
//! let content = r#"
//!     // Browser Preferences/Config/Setup
//!     user_pref("browser.startup.homepage", 'about:blank');
//!     user_pref("toolkit.telemetry.minSubsessionLength", 5);
//! "#;
//!
//! let prefs = parse_user_js(content)?;
//! assert_eq!(prefs.len(), 2);
//! assert_eq!(prefs[0].value, PrefValue::String("about:blank".to_string()));
//! assert_eq!(prefs[1].value, PrefValue::Integer(5));
//! # Ok::<(), perf_prefs::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::lexer::{Lexer, Spanned, Token};
use crate::types::{PrefEntry, PrefValue};
use std::path::Path;

/// Name of the only declaration form accepted
const USER_PREF: &str = "user_pref";

/// Parse user.js content into its declarations, in file order
///
/// Repeated keys are all returned; use [`load_prefs`](crate::load_prefs) to
/// resolve them into a [`PrefSet`](crate::PrefSet).
pub fn parse_user_js(content: &str) -> Result<Vec<PrefEntry>> {
    Parser::new(content)?.parse()
}

/// Parse a user.js file directly from a file path
pub fn parse_user_js_file(path: &Path) -> Result<Vec<PrefEntry>> {
    let content = std::fs::read_to_string(path)?;
    parse_user_js(&content)
}

/// Parser for user.js files
struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Current lookahead token
    current: Spanned,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Result<Self> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Parser { lexer, current })
    }

    fn parse(&mut self) -> Result<Vec<PrefEntry>> {
        let mut preferences = Vec::new();
        while self.current.token != Token::Eof {
            preferences.push(self.parse_statement()?);
        }
        Ok(preferences)
    }

    /// statement := "user_pref" "(" key "," value ")" ";"
    fn parse_statement(&mut self) -> Result<PrefEntry> {
        let line = self.current.line;

        self.expect_user_pref()?;
        self.expect_token(Token::LeftParen)?;
        let key = self.expect_string()?;
        self.expect_token(Token::Comma)?;
        let value = self.parse_value()?;
        self.expect_token(Token::RightParen)?;
        self.expect_token(Token::Semicolon)?;

        Ok(PrefEntry {
            explanation: crate::explanations::get_preference_explanation_static(&key),
            key,
            value,
            line,
        })
    }

    fn expect_user_pref(&mut self) -> Result<()> {
        match &self.current.token {
            Token::Identifier(ident) if ident == USER_PREF => self.advance().map(drop),
            Token::Identifier(ident) => Err(self.error(format!(
                "Unknown pref function '{}'. Expected {}",
                ident, USER_PREF
            ))),
            token => Err(self.error(format!("Expected {}, got {}", USER_PREF, describe(token)))),
        }
    }

    /// value := "true" | "false" | INTEGER | STRING
    fn parse_value(&mut self) -> Result<PrefValue> {
        match self.current.token {
            Token::Boolean(_) | Token::Integer(_) | Token::String(_) => {
                match self.advance()?.token {
                    Token::Boolean(b) => Ok(PrefValue::Bool(b)),
                    Token::Integer(n) => Ok(PrefValue::Integer(n)),
                    Token::String(s) => Ok(PrefValue::String(s)),
                    _ => unreachable!("token kind checked above"),
                }
            }
            ref token => Err(self.error(format!("Expected value, got {}", describe(token)))),
        }
    }

    fn expect_token(&mut self, expected: Token) -> Result<()> {
        if self.current.token == expected {
            self.advance()?;
            Ok(())
        } else {
            Err(self.error(format!(
                "Expected {}, got {}",
                describe(&expected),
                describe(&self.current.token)
            )))
        }
    }

    fn expect_string(&mut self) -> Result<String> {
        match self.current.token {
            Token::String(_) => match self.advance()?.token {
                Token::String(s) => Ok(s),
                _ => unreachable!("token kind checked above"),
            },
            ref token => Err(self.error(format!(
                "Expected preference name string, got {}",
                describe(token)
            ))),
        }
    }

    /// Move to the next token, returning the one just consumed
    fn advance(&mut self) -> Result<Spanned> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn error(&self, message: String) -> Error {
        Error::Parser {
            line: self.current.line,
            column: self.current.column,
            message,
        }
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Identifier(s) => format!("identifier '{}'", s),
        Token::String(s) => format!("string {:?}", s),
        Token::Integer(n) => format!("integer {}", n),
        Token::Boolean(b) => format!("boolean {}", b),
        Token::LeftParen => "'('".to_string(),
        Token::RightParen => "')'".to_string(),
        Token::Comma => "','".to_string(),
        Token::Semicolon => "';'".to_string(),
        Token::Eof => "end of input".to_string(),
    }
}

/**
 * Apex scanner
 *
 * Tokenizes apex source into identifier, keyword, string, number and
 * character tokens with byte spans. Whitespace and comments are skipped.
 * Scanning is total: unexpected characters become plain character tokens
 * and are left for the parser to reject.
 */
use once_cell::sync::Lazy;
use std::collections::HashSet;

const EOF_CHAR: char = '\u{0}';

/// Token types in apex source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Character,
    Identifier,
    Keyword,
    String,
    Number,
}

/// Token representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub index: usize,
    pub end: usize,
    pub token_type: TokenType,
    pub str_value: String,
}

impl Token {
    pub fn new(index: usize, end: usize, token_type: TokenType, str_value: String) -> Self {
        Token {
            index,
            end,
            token_type,
            str_value,
        }
    }

    pub fn is_character(&self, code: char) -> bool {
        self.token_type == TokenType::Character && self.str_value.chars().next() == Some(code)
    }

    pub fn is_identifier(&self) -> bool {
        self.token_type == TokenType::Identifier
    }

    /// Keyword check; apex keywords are case-insensitive.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.token_type == TokenType::Keyword && self.str_value.eq_ignore_ascii_case(keyword)
    }

    pub fn is_any_keyword(&self) -> bool {
        self.token_type == TokenType::Keyword
    }

    pub fn is_string(&self) -> bool {
        self.token_type == TokenType::String
    }

    pub fn is_number(&self) -> bool {
        self.token_type == TokenType::Number
    }
}

pub fn new_character_token(index: usize, end: usize, code: char) -> Token {
    Token::new(index, end, TokenType::Character, code.to_string())
}

pub fn new_identifier_token(index: usize, end: usize, text: String) -> Token {
    Token::new(index, end, TokenType::Identifier, text)
}

pub fn new_keyword_token(index: usize, end: usize, text: String) -> Token {
    Token::new(index, end, TokenType::Keyword, text)
}

pub fn new_string_token(index: usize, end: usize, text: String) -> Token {
    Token::new(index, end, TokenType::String, text)
}

pub fn new_number_token(index: usize, end: usize, text: String) -> Token {
    Token::new(index, end, TokenType::Number, text)
}

/// Words with declaration-level meaning. Type names such as `Integer` are
/// ordinary identifiers, and so is `void`, which flows through as a return
/// type. Stored lowercase; lookups lowercase the candidate first.
pub(crate) static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "abstract",
        "class",
        "enum",
        "extends",
        "final",
        "global",
        "implements",
        "inherited",
        "interface",
        "override",
        "private",
        "protected",
        "public",
        "sharing",
        "static",
        "testmethod",
        "transient",
        "trigger",
        "virtual",
        "webservice",
        "with",
        "without",
    ])
});

/// Apex lexer.
pub struct Lexer;

impl Lexer {
    pub fn new() -> Self {
        Lexer
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        Scanner::new(text).scan()
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

/// Scanner for tokenizing input.
struct Scanner {
    input: String,
    length: usize,
    index: usize,
    peek: char,
    tokens: Vec<Token>,
}

impl Scanner {
    fn new(input: &str) -> Self {
        let peek = input.chars().next().unwrap_or(EOF_CHAR);
        Scanner {
            input: input.to_string(),
            length: input.len(),
            index: 0,
            peek,
            tokens: Vec::new(),
        }
    }

    fn scan(mut self) -> Vec<Token> {
        while let Some(token) = self.scan_token() {
            self.tokens.push(token);
        }
        self.tokens
    }

    fn advance(&mut self) {
        self.index += self.peek.len_utf8();
        self.peek = if self.index < self.length {
            self.input[self.index..].chars().next().unwrap_or(EOF_CHAR)
        } else {
            EOF_CHAR
        };
    }

    fn peek_next(&self) -> char {
        let next = self.index + self.peek.len_utf8();
        if next < self.length {
            self.input[next..].chars().next().unwrap_or(EOF_CHAR)
        } else {
            EOF_CHAR
        }
    }

    fn scan_token(&mut self) -> Option<Token> {
        loop {
            while self.index < self.length && self.peek.is_whitespace() {
                self.advance();
            }
            if self.peek == '/' && self.peek_next() == '/' {
                while self.index < self.length && self.peek != '\n' {
                    self.advance();
                }
                continue;
            }
            if self.peek == '/' && self.peek_next() == '*' {
                self.advance();
                self.advance();
                while self.index < self.length && !(self.peek == '*' && self.peek_next() == '/') {
                    self.advance();
                }
                if self.index < self.length {
                    self.advance();
                    self.advance();
                }
                continue;
            }
            break;
        }

        if self.index >= self.length {
            return None;
        }

        let start = self.index;
        let ch = self.peek;

        if is_identifier_start(ch) {
            return Some(self.scan_identifier(start));
        }
        if ch.is_ascii_digit() {
            return Some(self.scan_number(start));
        }
        if ch == '\'' {
            return Some(self.scan_string(start));
        }

        self.advance();
        Some(new_character_token(start, self.index, ch))
    }

    fn scan_identifier(&mut self, start: usize) -> Token {
        while self.index < self.length && is_identifier_part(self.peek) {
            self.advance();
        }
        let text = self.input[start..self.index].to_string();
        if KEYWORDS.contains(text.to_lowercase().as_str()) {
            new_keyword_token(start, self.index, text)
        } else {
            new_identifier_token(start, self.index, text)
        }
    }

    fn scan_number(&mut self, start: usize) -> Token {
        while self.index < self.length && self.peek.is_ascii_digit() {
            self.advance();
        }
        if self.peek == '.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while self.index < self.length && self.peek.is_ascii_digit() {
                self.advance();
            }
        }
        if self.peek == 'e' || self.peek == 'E' {
            let after = self.peek_next();
            if after.is_ascii_digit() || after == '+' || after == '-' {
                self.advance();
                self.advance();
                while self.index < self.length && self.peek.is_ascii_digit() {
                    self.advance();
                }
            }
        }
        // Long/Decimal literal suffixes
        if matches!(self.peek, 'l' | 'L' | 'd' | 'D') {
            self.advance();
        }
        new_number_token(start, self.index, self.input[start..self.index].to_string())
    }

    fn scan_string(&mut self, start: usize) -> Token {
        self.advance();
        let value_start = self.index;
        while self.index < self.length && self.peek != '\'' {
            if self.peek == '\\' {
                self.advance();
            }
            if self.index < self.length {
                self.advance();
            }
        }
        let value = self.input[value_start..self.index].to_string();
        if self.index < self.length {
            self.advance();
        }
        new_string_token(start, self.index, value)
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_identifier_part(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

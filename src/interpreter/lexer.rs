use logos::Logos;

/// Represents a lexical token in an expression.
///
/// Whitespace of any kind is skipped. Characters outside the recognized set
/// produce lexer errors, which [`tokenize`] keeps as `None` entries.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// A run of numeral symbols, such as `XIV` or the zero sentinel `Z`.
    #[regex(r"[IVXLCDMZ]+", |lex| lex.slice().to_string())]
    Numeral(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, line breaks and feeds.
    #[regex(r"[ \t\r\n\f\x0B]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Whether the token is one of the four binary operator symbols.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Star | Self::Slash)
    }
}

/// A token (or `None` for an unrecognized character) with its 1-based
/// position in the expression once whitespace is removed.
pub type Lexeme = (Option<Token>, usize);

/// Characters the lexer skips.
const fn is_skipped(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0C' | '\x0B')
}

/// Splits an expression into positioned tokens.
///
/// Positions count characters, not bytes, and skip whitespace: they index
/// the expression as if every space, tab and line break had been removed.
///
/// # Example
/// ```
/// use romana::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("II + ?");
/// assert_eq!(tokens,
///            vec![(Some(Token::Numeral("II".to_string())), 1),
///                 (Some(Token::Plus), 3),
///                 (None, 4)]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Lexeme> {
    let mut lexemes = Vec::new();
    let mut lexer = Token::lexer(source);
    let mut chars = source.char_indices().peekable();
    let mut position = 1;

    while let Some(token) = lexer.next() {
        let start = lexer.span().start;
        while let Some((_, c)) = chars.next_if(|&(i, _)| i < start) {
            if !is_skipped(c) {
                position += 1;
            }
        }
        lexemes.push((token.ok(), position));
    }

    lexemes
}

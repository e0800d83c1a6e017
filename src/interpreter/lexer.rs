use logos::Logos;

use crate::{
    ast::Builtin,
    error::LexError,
    units::{self, UnitVector},
};

/// A [`Result`] with a [`LexError`] as the error variant.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Backslash commands such as `\sin`, `\frac` or `\km` never appear as
/// tokens of their own: [`extract_all_tokens`] resolves them into builtin,
/// unit, or identifier tokens while the stream is built.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5` or `100`.
    #[regex(r"[0-9.]+", lex_number)]
    Number(NumberLiteral),
    /// Identifier tokens: a single letter with an optional subscript,
    /// such as `x`, `v_0` or `x_{max}`.
    #[regex(r"[a-zA-Z]", lex_name)]
    Identifier(String),
    /// `\`, the start of a command. Consumed during stream building.
    #[token("\\")]
    Backslash,
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
    /// `^`
    #[token("^")]
    Caret,
    /// `!`
    #[token("!")]
    Bang,
    /// `=`
    #[token("=")]
    Equals,
    /// `,`
    #[token(",")]
    Comma,
    /// `_`
    #[token("_")]
    Underscore,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `|`
    #[token("|")]
    Pipe,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,

    /// A builtin function command such as `\sin` or `\floor`.
    Builtin(Builtin),
    /// A unit command such as `\km`, resolved to scale and dimensions.
    Unit(UnitLiteral),
    /// `\frac`
    Frac,
    /// `\left|`
    LeftPipe,
    /// `\right|`
    RightPipe,
    /// End of input. Always the final token of the stream.
    Eof,
}

/// The payload of a [`Token::Number`].
///
/// The source text is kept because two later stages need it: significant
/// figures are counted from the spelling, and the parser splits unbraced
/// multi-digit exponents one character at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteral {
    /// The parsed value.
    pub value: f64,
    /// The literal as it was spelled.
    pub text:  String,
}

impl NumberLiteral {
    /// Counts the significant figures of the literal text.
    ///
    /// Leading zeros never count; trailing zeros count only when the text
    /// spells out a decimal point. Text without any digit, such as the
    /// internal `pi` literal, counts as exact.
    ///
    /// ## Example
    /// ```
    /// use unima::interpreter::lexer::NumberLiteral;
    ///
    /// let literal = NumberLiteral { value: 0.0012, text: "0.00120".to_string() };
    /// assert_eq!(literal.sig_figs(), 3);
    /// ```
    #[must_use]
    pub fn sig_figs(&self) -> u8 {
        if !self.text.chars().any(|c| c.is_ascii_digit()) {
            return 0;
        }
        let mut significant = 0_usize;
        let mut trailing_zeros = 0_usize;
        let mut leading = true;

        for c in self.text.chars() {
            if c == '.' {
                continue;
            }
            if leading && c == '0' {
                continue;
            }
            leading = false;

            if c == '0' {
                trailing_zeros += 1;
            } else {
                significant += trailing_zeros + 1;
                trailing_zeros = 0;
            }
        }

        if self.text.contains('.') {
            significant += trailing_zeros;
        }
        if significant == 0 {
            significant = 1;
        }
        crate::util::num::usize_to_u8_saturating(significant)
    }
}

/// The payload of a [`Token::Unit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitLiteral {
    /// The factor towards the coherent SI unit, e.g. `1000` for `\km`.
    pub scale: f64,
    /// The dimension vector of the unit.
    pub unit:  UnitVector,
}

/// What a backslash keyword resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Builtin(Builtin),
    Times,
    Frac,
    OpenParen,
    CloseParen,
    OpenPipe,
    ClosePipe,
    Pi,
}

/// The keyword table for backslash commands, ordered longest first so a
/// short command never shadows a longer one: `\sin^{-1}` resolves before
/// `\sin`, and `\cdot` before the `cd` unit.
const KEYWORDS: [(&str, Keyword); 36] = [
    ("sin^{-1}", Keyword::Builtin(Builtin::Arcsin)),
    ("cos^{-1}", Keyword::Builtin(Builtin::Arccos)),
    ("tan^{-1}", Keyword::Builtin(Builtin::Arctan)),
    ("sec^{-1}", Keyword::Builtin(Builtin::Arcsec)),
    ("csc^{-1}", Keyword::Builtin(Builtin::Arccsc)),
    ("cot^{-1}", Keyword::Builtin(Builtin::Arccot)),
    ("arcsin", Keyword::Builtin(Builtin::Arcsin)),
    ("arccos", Keyword::Builtin(Builtin::Arccos)),
    ("arctan", Keyword::Builtin(Builtin::Arctan)),
    ("arcsec", Keyword::Builtin(Builtin::Arcsec)),
    ("arccsc", Keyword::Builtin(Builtin::Arccsc)),
    ("arccot", Keyword::Builtin(Builtin::Arccot)),
    ("right)", Keyword::CloseParen),
    ("right|", Keyword::ClosePipe),
    ("floor", Keyword::Builtin(Builtin::Floor)),
    ("round", Keyword::Builtin(Builtin::Round)),
    ("times", Keyword::Times),
    ("left(", Keyword::OpenParen),
    ("left|", Keyword::OpenPipe),
    ("sqrt", Keyword::Builtin(Builtin::Sqrt)),
    ("ceil", Keyword::Builtin(Builtin::Ceil)),
    ("fact", Keyword::Builtin(Builtin::Fact)),
    ("frac", Keyword::Frac),
    ("cdot", Keyword::Times),
    ("sin", Keyword::Builtin(Builtin::Sin)),
    ("cos", Keyword::Builtin(Builtin::Cos)),
    ("tan", Keyword::Builtin(Builtin::Tan)),
    ("sec", Keyword::Builtin(Builtin::Sec)),
    ("csc", Keyword::Builtin(Builtin::Csc)),
    ("cot", Keyword::Builtin(Builtin::Cot)),
    ("abs", Keyword::Builtin(Builtin::Abs)),
    ("nCr", Keyword::Builtin(Builtin::Ncr)),
    ("nPr", Keyword::Builtin(Builtin::Npr)),
    ("log", Keyword::Builtin(Builtin::Log)),
    ("pi", Keyword::Pi),
    ("ln", Keyword::Builtin(Builtin::Ln)),
];

/// Names accepted inside `\operatorname{..}`.
const OPERATOR_NAMES: [(&str, Builtin); 7] = [
    ("floor", Builtin::Floor),
    ("round", Builtin::Round),
    ("ceil", Builtin::Ceil),
    ("fact", Builtin::Fact),
    ("abs", Builtin::Abs),
    ("nCr", Builtin::Ncr),
    ("nPr", Builtin::Npr),
];

/// Tokenizes `text` completely, resolving every backslash command.
///
/// The returned stream always ends with [`Token::Eof`], so the parser can
/// peek without bounds checks.
///
/// # Parameters
/// - `text` - The raw expression source.
///
/// # Errors
/// Returns the first [`LexError`] encountered; nothing past the offending
/// input is tokenized.
///
/// ## Example
/// ```
/// use unima::interpreter::lexer::{extract_all_tokens, Token};
///
/// let tokens = extract_all_tokens("2\\pi").unwrap();
///
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[2], Token::Eof);
/// ```
pub fn extract_all_tokens(text: &str) -> LexResult<Vec<Token>> {
    let mut lexer = Token::lexer(text);
    let mut tokens = Vec::new();

    while let Some(item) = lexer.next() {
        match item {
            Ok(Token::Backslash) => tokens.push(resolve_command(&mut lexer)?),
            Ok(token) => tokens.push(token),
            Err(LexError::UnexpectedCharacter { .. }) => {
                return Err(LexError::UnexpectedCharacter { text: lexer.slice().to_string() });
            },
            Err(error) => return Err(error),
        }
    }

    tokens.push(Token::Eof);
    Ok(tokens)
}

/// Resolves the command that follows a `\`.
///
/// Tried in order: the keyword table, `\operatorname{..}`, the unit
/// symbol tables, and finally a multi-letter identifier like `\theta`.
fn resolve_command(lexer: &mut logos::Lexer<Token>) -> LexResult<Token> {
    let rest = lexer.remainder();

    for &(keyword, resolved) in &KEYWORDS {
        if rest.starts_with(keyword) {
            lexer.bump(keyword.len());
            return Ok(keyword_token(resolved));
        }
    }

    if rest.starts_with("operatorname") {
        return resolve_operator_name(lexer);
    }

    if let Some(token) = resolve_unit(lexer) {
        return Ok(token);
    }

    resolve_identifier(lexer)
}

/// Turns a matched [`Keyword`] into the token the parser sees.
fn keyword_token(keyword: Keyword) -> Token {
    match keyword {
        Keyword::Builtin(builtin) => Token::Builtin(builtin),
        Keyword::Times => Token::Star,
        Keyword::Frac => Token::Frac,
        Keyword::OpenParen => Token::LParen,
        Keyword::CloseParen => Token::RParen,
        Keyword::OpenPipe => Token::LeftPipe,
        Keyword::ClosePipe => Token::RightPipe,
        Keyword::Pi => Token::Number(NumberLiteral { value: std::f64::consts::PI,
                                                     text:  String::from("pi") }),
    }
}

/// Resolves `\operatorname{NAME}` into a builtin token.
fn resolve_operator_name(lexer: &mut logos::Lexer<Token>) -> LexResult<Token> {
    lexer.bump("operatorname".len());
    let rest = lexer.remainder();

    let name = rest.strip_prefix('{')
                   .and_then(|body| body.find('}').map(|end| &body[..end]))
                   .ok_or_else(|| LexError::UnknownCommand { text: String::from("\\operatorname") })?;
    lexer.bump(name.len() + 2);

    for &(operator, builtin) in &OPERATOR_NAMES {
        if operator == name {
            return Ok(Token::Builtin(builtin));
        }
    }
    Err(LexError::UnknownOperator { text: name.to_string() })
}

/// Resolves a unit symbol such as `km`, `Pa` or the spaced `mu s`.
///
/// The whole alphabetic run must form a known symbol; `\mols` is an
/// identifier, not `\mol` with a stray letter.
fn resolve_unit(lexer: &mut logos::Lexer<Token>) -> Option<Token> {
    let rest = lexer.remainder();
    let symbol = alphabetic_prefix(rest);

    // The micro prefix may be written with a space: `\mu s`.
    if symbol == "mu"
        && let Some(tail) = rest[2..].strip_prefix(' ')
    {
        let base = alphabetic_prefix(tail);
        if !base.is_empty()
            && let Some((scale, unit)) = units::lookup(&format!("mu{base}"))
        {
            lexer.bump(3 + base.len());
            return Some(Token::Unit(UnitLiteral { scale, unit }));
        }
    }

    if symbol.is_empty() {
        return None;
    }
    let (scale, unit) = units::lookup(symbol)?;
    lexer.bump(symbol.len());
    Some(Token::Unit(UnitLiteral { scale, unit }))
}

/// Resolves a multi-letter command identifier such as `\theta_0`.
fn resolve_identifier(lexer: &mut logos::Lexer<Token>) -> LexResult<Token> {
    let rest = lexer.remainder();
    let run = alphabetic_prefix(rest);

    if run.is_empty() {
        let text = match rest.chars().next() {
            Some(c) => format!("\\{c}"),
            None => String::from("\\"),
        };
        return Err(LexError::UnknownCommand { text });
    }

    let mut name = run.to_string();
    lexer.bump(run.len());
    collect_subscript(lexer, &mut name)?;
    Ok(Token::Identifier(name))
}

/// Attaches a `_x` or `_{..}` subscript to `name` when one follows.
///
/// A lone `_` that opens no subscript is left in the stream for the
/// parser, which needs it for `\log_` bases.
fn collect_subscript(lexer: &mut logos::Lexer<Token>, name: &mut String) -> LexResult<()> {
    let rest = lexer.remainder();

    if let Some(body) = rest.strip_prefix("_{") {
        let Some(end) = body.find('}') else {
            let mut text = name.clone();
            text.push_str("_{");
            text.push_str(body);
            return Err(LexError::UnterminatedSubscript { text });
        };
        name.push_str(&rest[..end + 3]);
        lexer.bump(end + 3);
        return Ok(());
    }

    let mut chars = rest.chars();
    if chars.next() == Some('_')
        && let Some(c) = chars.next()
        && c.is_ascii_alphanumeric()
    {
        name.push('_');
        name.push(c);
        lexer.bump(2);
    }
    Ok(())
}

/// The leading run of ASCII letters of `text`, possibly empty.
fn alphabetic_prefix(text: &str) -> &str {
    let end = text.find(|c: char| !c.is_ascii_alphabetic()).unwrap_or(text.len());
    &text[..end]
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(NumberLiteral)`: Value and spelling of the literal. A lone `.`
///   reads as zero.
/// - `Err(MalformedNumber)`: If the slice contains a second decimal point.
fn lex_number(lex: &logos::Lexer<Token>) -> LexResult<NumberLiteral> {
    let text = lex.slice();
    if text.matches('.').count() > 1 {
        return Err(LexError::MalformedNumber { text: text.to_string() });
    }
    Ok(NumberLiteral { value: text.parse().unwrap_or(0.0),
                       text:  text.to_string() })
}

/// Scans an identifier starting at the current single-letter slice,
/// pulling any subscript into the name.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(String)`: The full identifier, e.g. `x` or `x_{max}`.
/// - `Err(UnterminatedSubscript)`: If a `_{` group never closes.
fn lex_name(lex: &mut logos::Lexer<Token>) -> LexResult<String> {
    let mut name = lex.slice().to_string();
    collect_subscript(lex, &mut name)?;
    Ok(name)
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(literal) => write!(f, "{}", literal.text),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Builtin(builtin) => write!(f, "\\{builtin}"),
            Self::Unit(_) => write!(f, "unit literal"),
            Self::Backslash => write!(f, "\\"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::Bang => write!(f, "!"),
            Self::Equals => write!(f, "="),
            Self::Comma => write!(f, ","),
            Self::Underscore => write!(f, "_"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Pipe => write!(f, "|"),
            Self::Frac => write!(f, "\\frac"),
            Self::LeftPipe => write!(f, "\\left|"),
            Self::RightPipe => write!(f, "\\right|"),
            Self::Ignored => Ok(()),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

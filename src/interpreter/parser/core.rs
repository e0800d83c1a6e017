use std::collections::HashSet;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::lexer::{NumberLiteral, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Binding power of the prefix `+` and `-`: tighter than addition, looser
/// than multiplication and exponentiation, so `-2+3` negates only the `2`
/// while `-2^2` negates the whole power.
pub(crate) const UNARY_POWER: u8 = 20;

/// Binding power used for the single unparenthesised argument of a builtin
/// call: tighter than `+` and `-`, looser than `*`, `/` and `^`, so
/// `\sin\pi/2` reads as `\sin(\pi/2)` while `\sin\pi+1` does not swallow
/// the sum.
pub(crate) const FUNCTION_ARGUMENT_POWER: u8 = 19;

static EOF: Token = Token::Eof;

/// A successfully parsed expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExpression {
    /// Root of the expression tree.
    pub root:         Expr,
    /// Every identifier name the source referenced, assignment targets
    /// included. Drives display-leaf detection during batch evaluation.
    pub dependencies: HashSet<String>,
}

/// A precedence-climbing parser over a buffered token stream.
///
/// The buffer is owned and mutable because exponent splitting rewrites the
/// literal under the cursor in place: `2^34` leaves a shortened `4` behind
/// for the main loop to pick up as an implicit factor.
pub struct Parser {
    tokens:       Vec<Token>,
    position:     usize,
    dependencies: HashSet<String>,
}

impl Parser {
    /// Creates a parser over `tokens`.
    ///
    /// The buffer is normalised to end with [`Token::Eof`] so the cursor
    /// can always dereference its current position.
    #[must_use]
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last() != Some(&Token::Eof) {
            tokens.push(Token::Eof);
        }

        Self { tokens,
               position: 0,
               dependencies: HashSet::new() }
    }

    /// Parses the whole buffer as a single expression.
    ///
    /// # Returns
    /// The expression tree together with the set of identifier names it
    /// references.
    ///
    /// # Errors
    /// - Any error produced while parsing the expression itself.
    /// - `UnexpectedTrailingTokens` if input remains after a complete
    ///   expression, as in `(2+3))`.
    ///
    /// ## Example
    /// ```
    /// use unima::interpreter::{lexer::extract_all_tokens, parser::Parser};
    ///
    /// let tokens = extract_all_tokens(r"2\pi r").unwrap();
    /// let parsed = Parser::new(tokens).parse().unwrap();
    ///
    /// assert!(parsed.dependencies.contains("r"));
    /// ```
    pub fn parse(mut self) -> ParseResult<ParsedExpression> {
        let root = self.parse_expression(0)?;

        if *self.peek() != Token::Eof {
            return Err(ParseError::UnexpectedTrailingTokens { token:    self.peek().to_string(),
                                                              position: self.position, });
        }

        Ok(ParsedExpression { root,
                              dependencies: self.dependencies })
    }

    /// Parses a binary-operator chain whose operators all bind at least as
    /// tightly as `min_power`.
    ///
    /// Two adjacent factors with no operator between them multiply, so
    /// `2\pi` and `2(3+4)` need no explicit `\cdot`. The right side of `^`
    /// goes through [`Self::parse_exponent_operand`] to honour the
    /// single-glyph superscript rule.
    pub(crate) fn parse_expression(&mut self, min_power: u8) -> ParseResult<Expr> {
        let mut lhs = self.parse_lhs()?;

        loop {
            let token = self.peek();
            if is_terminator(token) {
                break;
            }

            let (operator, explicit) = match binary_operator(token) {
                Some(operator) => (operator, true),
                None => (BinaryOperator::Mul, false),
            };

            let (left_power, right_power) = binding_power(operator);
            if left_power < min_power {
                break;
            }
            if explicit {
                self.advance();
            }

            let right = if operator == BinaryOperator::Pow {
                self.parse_exponent_operand()?
            } else {
                self.parse_expression(right_power)?
            };

            lhs = Expr::BinaryOp { left:  Box::new(lhs),
                                   op:    operator,
                                   right: Box::new(right), };
        }

        Ok(lhs)
    }

    /// Parses the operand of `^`.
    ///
    /// LaTeX superscripts cover a single glyph unless braces group more,
    /// so an unbraced multi-character literal is split: `2^34` is
    /// `2^3\cdot4`. Splitting applies only to literals spelled with digits
    /// and dots; a single token such as `\pi` binds whole.
    ///
    /// # Errors
    /// - `ExponentSplitOnDot` when the literal starts with `.`, as in
    ///   `2^.5`, where no leading glyph exists to take as the exponent.
    pub(crate) fn parse_exponent_operand(&mut self) -> ParseResult<Expr> {
        if *self.peek() == Token::LBrace {
            self.advance();
            let exponent = self.parse_expression(0)?;
            self.expect_closing_brace()?;
            return Ok(exponent);
        }

        if let Token::Number(literal) = self.peek()
            && literal.text.len() > 1
            && is_plain_digits(&literal.text)
        {
            return self.split_leading_digit();
        }

        self.parse_lhs()
    }

    /// Splits the literal under the cursor into its first digit, returned
    /// as an expression, and the remaining text, written back into the
    /// buffer for the caller's loop to consume.
    pub(crate) fn split_leading_digit(&mut self) -> ParseResult<Expr> {
        let position = self.position;
        let Token::Number(literal) = self.peek().clone() else {
            return Err(ParseError::UnexpectedToken { token: self.peek().to_string(),
                                                     position });
        };

        let mut characters = literal.text.chars();
        let first = characters.next().unwrap_or('0');
        if first == '.' {
            return Err(ParseError::ExponentSplitOnDot { position });
        }

        let rest: String = characters.collect();
        self.tokens[position] = Token::Number(NumberLiteral { value: rest.parse().unwrap_or(0.0),
                                                              text:  rest, });

        Ok(Expr::Number { value:    f64::from(first.to_digit(10).unwrap_or(0)),
                          sig_figs: 1, })
    }

    /// Records `name` as referenced by the expression being parsed.
    pub(crate) fn note_dependency(&mut self, name: &str) {
        self.dependencies.insert(name.to_string());
    }

    pub(crate) fn peek(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&EOF)
    }

    /// Returns the current token and moves the cursor forward. The cursor
    /// parks on the trailing `Eof` rather than running past it.
    pub(crate) fn next(&mut self) -> Token {
        let token = self.peek().clone();
        self.advance();
        token
    }

    pub(crate) fn advance(&mut self) {
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
    }

    pub(crate) const fn position(&self) -> usize {
        self.position
    }

    fn expect(&mut self, expected: &Token, error: fn(String, usize) -> ParseError) -> ParseResult<()> {
        if self.peek() == expected {
            self.advance();
            return Ok(());
        }

        Err(error(self.peek().to_string(), self.position))
    }

    pub(crate) fn expect_closing_paren(&mut self) -> ParseResult<()> {
        self.expect(&Token::RParen, |found, position| {
            ParseError::ExpectedClosingParen { found, position }
        })
    }

    pub(crate) fn expect_opening_brace(&mut self) -> ParseResult<()> {
        self.expect(&Token::LBrace, |found, position| {
            ParseError::ExpectedOpeningBrace { found, position }
        })
    }

    pub(crate) fn expect_closing_brace(&mut self) -> ParseResult<()> {
        self.expect(&Token::RBrace, |found, position| {
            ParseError::ExpectedClosingBrace { found, position }
        })
    }

    pub(crate) fn expect_closing_bracket(&mut self) -> ParseResult<()> {
        self.expect(&Token::RBracket, |found, position| {
            ParseError::ExpectedClosingBracket { found, position }
        })
    }

    pub(crate) fn expect_closing_pipe(&mut self, closing: &Token) -> ParseResult<()> {
        self.expect(closing, |found, position| {
            ParseError::ExpectedClosingPipe { found, position }
        })
    }

    pub(crate) fn expect_comma(&mut self) -> ParseResult<()> {
        self.expect(&Token::Comma, |found, position| {
            ParseError::ExpectedComma { found, position }
        })
    }
}

/// Reports whether `token` ends the current expression level. Closing
/// delimiters stay in the stream for the opener's parse call to consume.
pub(crate) const fn is_terminator(token: &Token) -> bool {
    matches!(token,
             Token::Eof
             | Token::RParen
             | Token::RBracket
             | Token::RBrace
             | Token::RightPipe
             | Token::Comma
             | Token::Pipe)
}

/// Reports whether `text` is spelled purely with digits and dots, which is
/// what makes a literal eligible for exponent splitting. The spelling of
/// `\pi` is not, so `2^\pi` exponentiates by the whole constant.
pub(crate) fn is_plain_digits(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit() || c == '.')
}

const fn binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::Equals => Some(BinaryOperator::Assign),
        _ => None,
    }
}

/// Left and right binding powers of each binary operator.
///
/// `=` is right-associative through its equal powers, letting `a = b = 1`
/// assign both names. The right power of `^` goes unused: its operand is
/// parsed by the single-glyph superscript rule rather than a recursive
/// climb, so `2^3^2` reads as `(2^3)^2`.
const fn binding_power(operator: BinaryOperator) -> (u8, u8) {
    match operator {
        BinaryOperator::Assign => (1, 1),
        BinaryOperator::Add | BinaryOperator::Sub => (10, 11),
        BinaryOperator::Mul | BinaryOperator::Div => (25, 26),
        BinaryOperator::Pow => (31, 30),
    }
}

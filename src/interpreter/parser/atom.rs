use crate::{
    ast::{Builtin, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            Parser,
            core::{ParseResult, UNARY_POWER, is_terminator},
        },
    },
};

impl Parser {
    /// Parses one operand of a binary chain: a prefixed or plain atom, or
    /// a parenthesised group.
    ///
    /// Grammar: `lhs := ('+' | '-') expression | '(' expression ')' | atom '!'?`
    ///
    /// The postfix `!` attaches to atoms only. A parenthesised group is
    /// not an atom, so `(2+3)!` leaves the `!` behind for the main loop
    /// to reject as an unexpected token.
    ///
    /// # Errors
    /// - `UnaryWithoutOperand` for a dangling prefix sign, as in `(2+)`.
    /// - `UnexpectedEndOfInput` when the expression ends where an operand
    ///   was required.
    /// - `UnexpectedToken` for anything no operand can start with.
    pub(crate) fn parse_lhs(&mut self) -> ParseResult<Expr> {
        let position = self.position();
        let token = self.next();

        match token {
            Token::Plus | Token::Minus => self.parse_prefix(&token, position),
            Token::LParen => {
                let inner = self.parse_expression(0)?;
                self.expect_closing_paren()?;
                Ok(inner)
            },
            Token::Eof => Err(ParseError::UnexpectedEndOfInput { position }),
            token => {
                let atom = self.parse_atom(token, position)?;
                Ok(self.attach_factorial(atom))
            },
        }
    }

    fn parse_prefix(&mut self, token: &Token, position: usize) -> ParseResult<Expr> {
        if is_terminator(self.peek()) {
            return Err(ParseError::UnaryWithoutOperand { token: token.to_string(),
                                                         position });
        }

        let operand = self.parse_expression(UNARY_POWER)?;
        let op = if *token == Token::Minus {
            UnaryOperator::Negate
        } else {
            UnaryOperator::Plus
        };

        Ok(Expr::UnaryOp { op,
                           expr: Box::new(operand) })
    }

    fn parse_atom(&mut self, token: Token, position: usize) -> ParseResult<Expr> {
        match token {
            Token::Number(literal) => Ok(Expr::Number { value:    literal.value,
                                                        sig_figs: literal.sig_figs(), }),
            Token::Unit(literal) => Ok(Expr::UnitLiteral { scale: literal.scale,
                                                           unit:  literal.unit, }),
            Token::Identifier(name) => self.parse_identifier(name),
            Token::Builtin(function) => self.parse_builtin_call(function),
            Token::Frac => self.parse_fraction(),
            Token::Pipe => self.parse_absolute_value(&Token::Pipe),
            Token::LeftPipe => self.parse_absolute_value(&Token::RightPipe),
            Token::LBracket => self.parse_list(),
            token => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                       position }),
        }
    }

    /// Parses a variable reference or, when parentheses follow, a call to
    /// a user-defined function. Either way the name lands in the
    /// dependency set; for an assignment target that is harmless, since a
    /// slot never counts as its own display dependency.
    fn parse_identifier(&mut self, name: String) -> ParseResult<Expr> {
        self.note_dependency(&name);

        if *self.peek() != Token::LParen {
            return Ok(Expr::Variable { name });
        }
        self.advance();

        let arguments = self.parse_comma_separated(&Token::RParen)?;
        self.expect_closing_paren()?;

        Ok(Expr::UserCall { name, arguments })
    }

    /// Parses `|x|` or `\left|x\right|` into an absolute-value call.
    fn parse_absolute_value(&mut self, closing: &Token) -> ParseResult<Expr> {
        let inner = self.parse_expression(0)?;
        self.expect_closing_pipe(closing)?;

        Ok(Expr::Call { function:  Builtin::Abs,
                        arguments: vec![inner],
                        parameter: None, })
    }

    /// Parses the remainder of a `[a, b, ...]` list literal.
    fn parse_list(&mut self) -> ParseResult<Expr> {
        let elements = self.parse_comma_separated(&Token::RBracket)?;
        self.expect_closing_bracket()?;

        Ok(Expr::ListLiteral { elements })
    }

    /// Parses zero or more comma-separated expressions, stopping in front
    /// of `closing` without consuming it.
    fn parse_comma_separated(&mut self, closing: &Token) -> ParseResult<Vec<Expr>> {
        let mut items = Vec::new();
        if self.peek() == closing {
            return Ok(items);
        }

        items.push(self.parse_expression(0)?);
        while *self.peek() == Token::Comma {
            self.advance();
            items.push(self.parse_expression(0)?);
        }

        Ok(items)
    }

    fn attach_factorial(&mut self, atom: Expr) -> Expr {
        if *self.peek() == Token::Bang {
            self.advance();
            return Expr::UnaryOp { op:   UnaryOperator::Factorial,
                                   expr: Box::new(atom), };
        }

        atom
    }
}

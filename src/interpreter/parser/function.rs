use crate::{
    ast::{BinaryOperator, Builtin, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            Parser,
            core::{FUNCTION_ARGUMENT_POWER, ParseResult, is_plain_digits},
        },
    },
};

impl Parser {
    /// Parses the arguments of a builtin whose name token has already been
    /// consumed. `\sqrt`, `\log` and `round` carry extra syntax and get
    /// their own paths; everything else takes the generic form.
    pub(crate) fn parse_builtin_call(&mut self, function: Builtin) -> ParseResult<Expr> {
        match function {
            Builtin::Sqrt => self.parse_sqrt(),
            Builtin::Log => self.parse_log(),
            Builtin::Round => self.parse_round(),
            _ => self.parse_plain_builtin(function),
        }
    }

    /// Parses `\sqrt{x}` or `\sqrt[n]{x}`, with the optional root index
    /// stored as the call's parameter.
    ///
    /// Grammar: `sqrt := '\sqrt' ('[' expression ']')? '{' expression '}'`
    fn parse_sqrt(&mut self) -> ParseResult<Expr> {
        let parameter = if *self.peek() == Token::LBracket {
            self.advance();
            let index = self.parse_expression(0)?;
            self.expect_closing_bracket()?;
            Some(Box::new(index))
        } else {
            None
        };

        self.expect_opening_brace()?;
        let argument = self.parse_expression(0)?;
        self.expect_closing_brace()?;

        Ok(Expr::Call { function: Builtin::Sqrt,
                        arguments: vec![argument],
                        parameter })
    }

    /// Parses `\log` with its optional subscript base, stored as the
    /// call's parameter, and optional exponent.
    ///
    /// Grammar: `log := '\log' ('_' base)? ('^' exponent)? argument`
    fn parse_log(&mut self) -> ParseResult<Expr> {
        let parameter = if *self.peek() == Token::Underscore {
            self.advance();
            Some(Box::new(self.parse_log_base()?))
        } else {
            None
        };

        let exponent = self.parse_optional_exponent()?;
        let arguments = self.parse_builtin_arguments(Builtin::Log)?;

        let call = Expr::Call { function: Builtin::Log,
                                arguments,
                                parameter };
        Ok(apply_exponent(call, exponent))
    }

    /// Parses the base of `\log_`. A braced base takes a full expression;
    /// a bare literal follows the superscript convention and contributes
    /// one glyph, so `\log_28` is log base 2 of 8.
    fn parse_log_base(&mut self) -> ParseResult<Expr> {
        match self.peek().clone() {
            Token::LBrace => {
                self.advance();
                let base = self.parse_expression(0)?;
                self.expect_closing_brace()?;
                Ok(base)
            },
            Token::Number(literal) if literal.text.len() > 1 && is_plain_digits(&literal.text) => {
                self.split_leading_digit()
            },
            Token::Number(literal) => {
                self.advance();
                Ok(Expr::Number { value:    literal.value,
                                  sig_figs: literal.sig_figs(), })
            },
            token => Err(ParseError::InvalidLogBase { found:    token.to_string(),
                                                      position: self.position(), }),
        }
    }

    /// Parses `round(x)` or `round(x, places)`, with the optional place
    /// count stored as the call's parameter.
    ///
    /// Grammar: `round := 'round' ('^' exponent)? '(' expression (',' expression)? ')'`
    fn parse_round(&mut self) -> ParseResult<Expr> {
        let exponent = self.parse_optional_exponent()?;

        if *self.peek() != Token::LParen {
            return Err(ParseError::MissingFunctionParentheses { name:     Builtin::Round.to_string(),
                                                                position: self.position(), });
        }
        self.advance();

        let argument = self.parse_expression(0)?;
        let parameter = if *self.peek() == Token::Comma {
            self.advance();
            Some(Box::new(self.parse_expression(0)?))
        } else {
            None
        };
        self.expect_closing_paren()?;

        let call = Expr::Call { function: Builtin::Round,
                                arguments: vec![argument],
                                parameter };
        Ok(apply_exponent(call, exponent))
    }

    /// Parses the generic builtin form: an optional exponent applied to
    /// the whole call, then the argument list.
    ///
    /// Grammar: `call := builtin ('^' exponent)? arguments`
    fn parse_plain_builtin(&mut self, function: Builtin) -> ParseResult<Expr> {
        let exponent = self.parse_optional_exponent()?;
        let arguments = self.parse_builtin_arguments(function)?;

        let call = Expr::Call { function,
                                arguments,
                                parameter: None };
        Ok(apply_exponent(call, exponent))
    }

    /// Parses a builtin argument list: parenthesised with commas between
    /// the arguments the arity asks for, or, for single-argument builtins
    /// only, a bare operand such as `\sin\pi`.
    ///
    /// # Errors
    /// - `MissingFunctionParentheses` when a multi-argument builtin is not
    ///   followed by `(`, since `\nCr 6, 2` has no readable boundary.
    fn parse_builtin_arguments(&mut self, function: Builtin) -> ParseResult<Vec<Expr>> {
        if *self.peek() == Token::LParen {
            self.advance();

            let mut arguments = vec![self.parse_expression(0)?];
            for _ in 1..function.arity() {
                self.expect_comma()?;
                arguments.push(self.parse_expression(0)?);
            }
            self.expect_closing_paren()?;

            return Ok(arguments);
        }

        if function.arity() != 1 {
            return Err(ParseError::MissingFunctionParentheses { name:     function.to_string(),
                                                                position: self.position(), });
        }

        Ok(vec![self.parse_expression(FUNCTION_ARGUMENT_POWER)?])
    }

    fn parse_optional_exponent(&mut self) -> ParseResult<Option<Expr>> {
        if *self.peek() != Token::Caret {
            return Ok(None);
        }
        self.advance();

        Ok(Some(self.parse_exponent_operand()?))
    }

    /// Parses the two braced groups of `\frac{a}{b}` into a division.
    pub(crate) fn parse_fraction(&mut self) -> ParseResult<Expr> {
        self.expect_opening_brace()?;
        let numerator = self.parse_expression(0)?;
        self.expect_closing_brace()?;

        self.expect_opening_brace()?;
        let denominator = self.parse_expression(0)?;
        self.expect_closing_brace()?;

        Ok(Expr::BinaryOp { left:  Box::new(numerator),
                            op:    BinaryOperator::Div,
                            right: Box::new(denominator), })
    }
}

fn apply_exponent(call: Expr, exponent: Option<Expr>) -> Expr {
    match exponent {
        Some(exponent) => Expr::BinaryOp { left:  Box::new(call),
                                           op:    BinaryOperator::Pow,
                                           right: Box::new(exponent), },
        None => call,
    }
}

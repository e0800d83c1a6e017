use std::collections::HashMap;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{Error, RuntimeError},
    interpreter::{
        lexer::extract_all_tokens,
        parser::{ParsedExpression, Parser},
        value::{Quantity, QuantityList, UserFunction, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The physical constants seeded into every fresh context, each as a value
/// source and a unit source parsed through the ordinary pipeline.
///
/// The gas constant stays out: circuit inputs routinely assign a
/// resistance named `R`, and constants win lookups.
const CONSTANTS: [(&str, &str, &str); 11] = [
    ("e_c", r"1.602*10^{-19}", r"\C"),
    ("e_0", r"8.854187817*10^{-12}", r"\frac{\F}{\m}"),
    ("k_e", r"8.99*10^9", r"\frac{\N\m^2}{\C^2}"),
    ("c", r"2.99792458*10^8", r"\frac{\m}{\s}"),
    ("m_e", r"9.1938*10^{-31}", r"\kg"),
    ("m_p", r"1.67262*10^{-27}", r"\kg"),
    ("m_n", r"1.674927*10^{-27}", r"\kg"),
    ("C_K", "273.15", r"\K"),
    ("h", r"6.620607015*10^{-34}", r"\J\s"),
    ("a_0", r"5.291772*10^{-11}", r"\m"),
    ("N_A", r"6.022*10^{23}", r"\mol^{-1}"),
];

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the fixed physical constants,
/// every variable assigned so far, and all user-defined functions.
///
/// ## Usage
///
/// A `Context` is created once and reused. Single expressions go through
/// [`Context::evaluate_source`]; whole input sets go through
/// [`Context::evaluate_expression_list`], which resets the variable and
/// function tables first.
pub struct Context {
    /// Physical constants, seeded at construction. They win lookups over
    /// variables of the same name and survive batch resets.
    pub fixed_constants: HashMap<String, Value>,
    /// Variables assigned during evaluation, including `ans`.
    pub variables:       HashMap<String, Value>,
    /// User-defined functions captured from assignments like `f(x) = x^2`.
    pub functions:       HashMap<String, UserFunction>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a context with the physical constants in place and no
    /// variables or functions defined.
    #[must_use]
    pub fn new() -> Self {
        let mut context = Self { fixed_constants: HashMap::new(),
                                 variables:       HashMap::new(),
                                 functions:       HashMap::new(), };
        for (name, value, unit) in CONSTANTS {
            context.insert_constant(name, value, unit);
        }
        context
    }

    /// Evaluates an expression tree and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches on the expression variant: literals resolve
    /// directly, names go through the constant and variable tables, and
    /// operators delegate to the value arithmetic.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The evaluated value.
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised while walking the tree.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, sig_figs } => {
                Ok(Value::Scalar(Quantity::dimensionless(*value).with_sig_figs(*sig_figs)))
            },
            Expr::UnitLiteral { scale, unit } => Ok(Value::Scalar(Quantity::new(*scale, *unit))),
            Expr::Variable { name } => self.lookup(name),
            Expr::UnaryOp { op, expr } => self.eval_unary(*op, expr),
            Expr::BinaryOp { left, op, right } => self.eval_binary(left, *op, right),
            Expr::Call { function,
                         arguments,
                         parameter, } => self.eval_builtin(*function, arguments, parameter.as_deref()),
            Expr::UserCall { name, arguments } => self.eval_user_call(name, arguments),
            Expr::ListLiteral { elements } => self.eval_list(elements),
        }
    }

    /// Parses and evaluates a bare source string.
    ///
    /// # Errors
    /// Returns the first error from any stage of the pipeline.
    ///
    /// ## Example
    /// ```
    /// use unima::interpreter::evaluator::Context;
    ///
    /// let mut context = Context::new();
    /// let value = context.evaluate_source(r"2+3\cdot4").unwrap();
    ///
    /// assert_eq!(value.as_scalar().unwrap().value, 14.0);
    /// ```
    pub fn evaluate_source(&mut self, source: &str) -> Result<Value, Error> {
        let parsed = parse_source(source)?;
        Ok(self.evaluate(&parsed.root)?)
    }

    fn eval_unary(&mut self, op: UnaryOperator, expr: &Expr) -> EvalResult<Value> {
        let value = self.evaluate(expr)?;
        Ok(match op {
            UnaryOperator::Negate => value.neg(),
            UnaryOperator::Plus => value,
            UnaryOperator::Factorial => value.factorial(),
        })
    }

    fn eval_binary(&mut self, left: &Expr, op: BinaryOperator, right: &Expr) -> EvalResult<Value> {
        if op == BinaryOperator::Assign {
            return self.eval_assignment(left, right);
        }

        let lhs = self.evaluate(left)?;
        let rhs = self.evaluate(right)?;
        Ok(match op {
            BinaryOperator::Add => lhs.add(&rhs),
            BinaryOperator::Sub => lhs.sub(&rhs),
            BinaryOperator::Mul => lhs.mul(&rhs),
            BinaryOperator::Div => lhs.div(&rhs),
            BinaryOperator::Pow => lhs.pow(&rhs),
            BinaryOperator::Assign => Value::Scalar(Quantity::ZERO),
        })
    }

    /// Handles `lhs = rhs`.
    ///
    /// A variable target stores the evaluated right side and yields it. A
    /// call pattern whose arguments are all plain variables defines a
    /// function; the body is captured unevaluated and re-run on each call.
    fn eval_assignment(&mut self, target: &Expr, body: &Expr) -> EvalResult<Value> {
        match target {
            Expr::Variable { name } => {
                let value = self.evaluate(body)?;
                self.variables.insert(name.clone(), value.clone());
                Ok(value)
            },
            Expr::UserCall { name, arguments } => {
                let mut params = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    let Expr::Variable { name: param } = argument else {
                        return Err(RuntimeError::InvalidAssignment);
                    };
                    params.push(param.clone());
                }

                let function = UserFunction { name:   name.clone(),
                                              params,
                                              body:   body.clone(), };
                self.functions.insert(name.clone(), function.clone());
                Ok(Value::Function(function))
            },
            _ => Err(RuntimeError::InvalidAssignment),
        }
    }

    fn eval_list(&mut self, elements: &[Expr]) -> EvalResult<Value> {
        let mut quantities = Vec::with_capacity(elements.len());
        for (position, element) in elements.iter().enumerate() {
            let value = self.evaluate(element)?;
            let Some(quantity) = value.as_scalar() else {
                return Err(RuntimeError::ListElementNotScalar { position });
            };
            quantities.push(*quantity);
        }
        Ok(Value::List(QuantityList { elements: quantities }))
    }

    /// Resolves a name, constants first so that assignments cannot shadow
    /// them.
    fn lookup(&self, name: &str) -> EvalResult<Value> {
        if let Some(value) = self.fixed_constants.get(name) {
            return Ok(value.clone());
        }
        if let Some(value) = self.variables.get(name) {
            return Ok(value.clone());
        }
        Err(RuntimeError::UnknownVariable { name: name.to_string() })
    }

    /// Evaluates a value source and a unit source separately and stores
    /// the real part of the first with the dimension vector of the second
    /// as an exact constant. Sources that fail any stage are skipped.
    pub fn insert_constant(&mut self, name: &str, value_source: &str, unit_source: &str) {
        let Ok(value) = self.evaluate_source(value_source) else {
            return;
        };
        let Ok(unit) = self.evaluate_source(unit_source) else {
            return;
        };
        let (Some(value), Some(unit)) = (value.as_scalar(), unit.as_scalar()) else {
            return;
        };

        let constant = Quantity::new(value.value, unit.unit);
        self.fixed_constants.insert(name.to_string(), Value::Scalar(constant));
    }
}

/// Runs a source string through the lexer and parser.
///
/// # Errors
/// Returns the first lexing or parsing failure.
pub fn parse_source(source: &str) -> Result<ParsedExpression, Error> {
    let tokens = extract_all_tokens(source)?;
    Ok(Parser::new(tokens).parse()?)
}

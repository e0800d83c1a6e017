use crate::{
    ast::{Builtin, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            builtin,
            core::{Context, EvalResult},
        },
        value::{Quantity, Value},
    },
    util::num,
};

impl Context {
    /// Evaluates a builtin call.
    ///
    /// Scalar-only builtins read the real part of their operand; a
    /// non-scalar operand reads as zero. `\sqrt`, rounding and the
    /// factorial and absolute-value forms map over lists instead.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` when the argument list does not match the
    ///   builtin's arity. The parser never builds such calls; the guard
    ///   covers trees assembled directly.
    pub(crate) fn eval_builtin(&mut self,
                               function: Builtin,
                               arguments: &[Expr],
                               parameter: Option<&Expr>)
                               -> EvalResult<Value> {
        if arguments.len() != function.arity() {
            return Err(RuntimeError::ArgumentCountMismatch { name:     function.to_string(),
                                                             expected: function.arity(),
                                                             found:    arguments.len(), });
        }

        let first = self.evaluate(&arguments[0])?;
        match function {
            Builtin::Ln => Ok(builtin::ln(scalar_of(&first)).into()),
            Builtin::Sin => Ok(builtin::sin(scalar_of(&first)).into()),
            Builtin::Cos => Ok(builtin::cos(scalar_of(&first)).into()),
            Builtin::Tan => Ok(builtin::tan(scalar_of(&first)).into()),
            Builtin::Sec => Ok(builtin::sec(scalar_of(&first).value).into()),
            Builtin::Csc => Ok(builtin::csc(scalar_of(&first).value).into()),
            Builtin::Cot => Ok(builtin::cot(scalar_of(&first).value).into()),
            Builtin::Arcsin => Ok(builtin::arcsin(scalar_of(&first).value).into()),
            Builtin::Arccos => Ok(builtin::arccos(scalar_of(&first).value).into()),
            Builtin::Arctan => Ok(builtin::arctan(scalar_of(&first).value).into()),
            Builtin::Arcsec => Ok(builtin::arcsec(scalar_of(&first).value).into()),
            Builtin::Arccsc => Ok(builtin::arccsc(scalar_of(&first).value).into()),
            Builtin::Arccot => Ok(builtin::arccot(scalar_of(&first).value).into()),
            Builtin::Log => {
                let base = match parameter {
                    Some(parameter) => {
                        let base = self.evaluate(parameter)?;
                        num::f64_to_i32_trunc(scalar_of(&base).value)
                    },
                    None => 10,
                };
                Ok(builtin::log(scalar_of(&first).value, base).into())
            },
            Builtin::Sqrt => {
                let index = match parameter {
                    Some(parameter) => {
                        let index = self.evaluate(parameter)?;
                        scalar_of(&index).value
                    },
                    None => 2.0,
                };
                Ok(builtin::nth_root(&first, index))
            },
            Builtin::Abs => Ok(first.abs()),
            Builtin::Fact => Ok(first.factorial()),
            Builtin::Floor => Ok(builtin::floor(&first)),
            Builtin::Ceil => Ok(builtin::ceil(&first)),
            Builtin::Round => {
                let place = match parameter {
                    Some(parameter) => {
                        let place = self.evaluate(parameter)?;
                        scalar_of(&place).value
                    },
                    None => 0.0,
                };
                Ok(builtin::round(&first, place))
            },
            Builtin::Ncr => {
                let second = self.evaluate(&arguments[1])?;
                Ok(builtin::ncr(scalar_of(&first).value, scalar_of(&second).value).into())
            },
            Builtin::Npr => {
                let second = self.evaluate(&arguments[1])?;
                Ok(builtin::npr(scalar_of(&first).value, scalar_of(&second).value).into())
            },
        }
    }

    /// Evaluates a call to a user-defined function.
    ///
    /// Arguments are evaluated in the caller's environment, then bound as
    /// ordinary variables around the body evaluation. Shadowed outer
    /// variables are restored afterwards and the bindings removed.
    ///
    /// # Errors
    /// - `UnknownFunction` if no function of this name has been defined.
    /// - `ArgumentCountMismatch` if the call does not match the declared
    ///   parameter list.
    pub(crate) fn eval_user_call(&mut self, name: &str, arguments: &[Expr]) -> EvalResult<Value> {
        let Some(function) = self.functions.get(name).cloned() else {
            return Err(RuntimeError::UnknownFunction { name: name.to_string() });
        };
        if arguments.len() != function.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                             expected: function.params.len(),
                                                             found:    arguments.len(), });
        }

        let mut bound = Vec::with_capacity(arguments.len());
        for (param, argument) in function.params.iter().zip(arguments) {
            bound.push((param.clone(), self.evaluate(argument)?));
        }

        let mut shadowed = Vec::with_capacity(bound.len());
        for (param, value) in bound {
            let previous = self.variables.insert(param.clone(), value);
            shadowed.push((param, previous));
        }

        let result = self.evaluate(&function.body);

        for (param, previous) in shadowed.into_iter().rev() {
            match previous {
                Some(value) => self.variables.insert(param, value),
                None => self.variables.remove(&param),
            };
        }

        result
    }
}

/// Reads a value as a single quantity; operands with no scalar reading
/// fall back to zero.
fn scalar_of(value: &Value) -> Quantity {
    value.as_scalar().copied().unwrap_or(Quantity::ZERO)
}

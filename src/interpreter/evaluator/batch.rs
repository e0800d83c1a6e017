use crate::{
    ast::{BinaryOperator, Expr},
    error::Error,
    formula::{Formula, FormulaSearcher},
    interpreter::{
        evaluator::core::{Context, parse_source},
        parser::ParsedExpression,
        value::Value,
    },
    units::UnitVector,
};

/// One input slot of a batch: an expression source, an optional unit
/// source the value is denominated in, and an optional unit source the
/// result is converted to for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression {
    /// The expression itself, e.g. `E = mc^2`.
    pub value_expr:      String,
    /// Unit source multiplied into the value, e.g. `\km`.
    pub unit_expr:       Option<String>,
    /// Unit source the evaluated result is divided by.
    pub conversion_unit: Option<String>,
}

impl Expression {
    /// Creates a slot holding just an expression source.
    pub fn new(value_expr: impl Into<String>) -> Self {
        Self { value_expr:      value_expr.into(),
               unit_expr:       None,
               conversion_unit: None, }
    }

    /// Attaches the unit source the value is denominated in.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit_expr = Some(unit.into());
        self
    }

    /// Attaches the unit source the result is converted to.
    #[must_use]
    pub fn with_conversion(mut self, unit: impl Into<String>) -> Self {
        self.conversion_unit = Some(unit.into());
        self
    }

    /// Splits an input line at ` @ ` into an expression source and a
    /// conversion unit, so `5\m+55\cm @ \cm` displays in centimetres.
    #[must_use]
    pub fn from_line(line: &str) -> Self {
        match line.split_once(" @ ") {
            Some((value, conversion)) => Self::new(value.trim()).with_conversion(conversion.trim()),
            None => Self::new(line.trim()),
        }
    }

    /// Builds the single source string the slot parses to.
    ///
    /// A unit source multiplies into the value. For an assignment the
    /// right side alone is wrapped, so the unit lands on the value rather
    /// than the target: `x = 5` with `\km` becomes
    /// `x = \left(5\right)\cdot\km`.
    #[must_use]
    pub fn combined_source(&self) -> String {
        let Some(unit) = &self.unit_expr else {
            return self.value_expr.clone();
        };

        if let Some(position) = self.value_expr.find('=')
            && position != 0
            && position != self.value_expr.len() - 1
        {
            let target = &self.value_expr[..position];
            let body = &self.value_expr[position + 1..];
            return format!(r"{target} = \left({body}\right)\cdot{unit}");
        }

        format!(r"\left({}\right)\cdot{}", self.value_expr, unit)
    }
}

impl Context {
    /// Evaluates a single slot against the current context state.
    ///
    /// # Errors
    /// Returns the first error from any stage of the pipeline.
    pub fn evaluate_expression(&mut self, expression: &Expression) -> Result<Value, Error> {
        self.evaluate_source(&expression.combined_source())
    }

    /// Evaluates a whole batch in order, one result per slot.
    ///
    /// Variables and functions reset first; constants stay. Every
    /// successful slot lands in `ans` for the slots after it. Conversion
    /// units divide matching results afterwards, and slots that are not
    /// display leaves have their significant figures cleared so only
    /// final readings format with limited precision.
    ///
    /// ## Example
    /// ```
    /// use unima::interpreter::evaluator::{Context, Expression};
    ///
    /// let batch = [Expression::new("x = 5"), Expression::new("x^2")];
    /// let mut context = Context::new();
    /// let results = context.evaluate_expression_list(&batch);
    ///
    /// let value = results[1].as_ref().unwrap().as_scalar().unwrap();
    /// assert_eq!(value.value, 25.0);
    /// ```
    pub fn evaluate_expression_list(&mut self, expressions: &[Expression]) -> Vec<Result<Value, Error>> {
        self.variables.clear();
        self.functions.clear();

        let parsed: Vec<Result<ParsedExpression, Error>> =
            expressions.iter()
                       .map(|expression| parse_source(&expression.combined_source()))
                       .collect();
        let assigned = assignment_targets(&parsed);

        let mut results = Vec::with_capacity(parsed.len());
        for slot in &parsed {
            let result = match slot {
                Ok(parsed) => {
                    let result = self.evaluate(&parsed.root).map_err(Error::from);
                    if let Ok(value) = &result {
                        self.variables.insert("ans".to_string(), value.clone());
                    }
                    result
                },
                Err(error) => Err(error.clone()),
            };
            results.push(result);
        }

        self.apply_conversions(expressions, &mut results);

        for (index, result) in results.iter_mut().enumerate() {
            if let Ok(value) = result
                && !is_display_leaf(&parsed, &assigned, index)
            {
                clear_sig_figs(value);
            }
        }

        results
    }

    /// Lists formulas able to produce `target` from the units of the
    /// variables assigned so far. Constants do not count as inputs.
    #[must_use]
    pub fn available_formulas(&self, target: UnitVector) -> Vec<Formula> {
        let available: Vec<UnitVector> = self.variables
                                             .values()
                                             .filter_map(Value::as_scalar)
                                             .map(|quantity| quantity.unit)
                                             .collect();
        FormulaSearcher::new().find_by_units(&available, target)
    }

    /// Divides each converted slot's scalar by its conversion factor.
    ///
    /// The factor is the slot `1` denominated in the conversion unit,
    /// evaluated in the post-batch context. Slots whose factor fails to
    /// evaluate, is zero, or whose dimension vector differs from the
    /// result are left untouched. The dimension vector and significant
    /// figures of the result survive the division.
    fn apply_conversions(&mut self, expressions: &[Expression], results: &mut [Result<Value, Error>]) {
        for (expression, result) in expressions.iter().zip(results.iter_mut()) {
            let Some(conversion) = &expression.conversion_unit else {
                continue;
            };
            let Ok(Value::Scalar(quantity)) = result else {
                continue;
            };

            let factor = Expression::new("1").with_unit(conversion.clone());
            let Ok(converted) = self.evaluate_expression(&factor) else {
                continue;
            };
            let Some(factor) = converted.as_scalar() else {
                continue;
            };
            if factor.value == 0.0 || factor.unit != quantity.unit {
                continue;
            }

            quantity.value /= factor.value;
            quantity.imag /= factor.value;
        }
    }
}

/// The assignment target of each slot, for slots that parsed into an
/// assignment to a variable or function pattern.
fn assignment_targets(parsed: &[Result<ParsedExpression, Error>]) -> Vec<Option<String>> {
    parsed.iter()
          .map(|slot| {
              slot.as_ref()
                  .ok()
                  .and_then(|parsed| assignment_target(&parsed.root))
          })
          .collect()
}

fn assignment_target(root: &Expr) -> Option<String> {
    let Expr::BinaryOp { left,
                         op: BinaryOperator::Assign,
                         .. } = root
    else {
        return None;
    };

    match left.as_ref() {
        Expr::Variable { name } | Expr::UserCall { name, .. } => Some(name.clone()),
        _ => None,
    }
}

/// A slot is a display leaf when it reads at least one name assigned in
/// the batch, other than its own target, and no other slot reads its
/// target back. Only display leaves keep significant figures for
/// formatting.
fn is_display_leaf(parsed: &[Result<ParsedExpression, Error>],
                   assigned: &[Option<String>],
                   index: usize)
                   -> bool {
    let Ok(slot) = &parsed[index] else {
        return false;
    };

    let own = assigned[index].as_deref();
    let reads_assigned_name = slot.dependencies.iter().any(|dependency| {
        Some(dependency.as_str()) != own
        && assigned.iter().flatten().any(|name| name == dependency)
    });
    if !reads_assigned_name {
        return false;
    }

    !is_depended_upon(parsed, assigned, index)
}

fn is_depended_upon(parsed: &[Result<ParsedExpression, Error>],
                    assigned: &[Option<String>],
                    index: usize)
                    -> bool {
    let Some(own) = assigned[index].as_deref() else {
        return false;
    };

    parsed.iter().enumerate().any(|(other, slot)| {
        other != index && slot.as_ref().is_ok_and(|parsed| parsed.dependencies.contains(own))
    })
}

fn clear_sig_figs(value: &mut Value) {
    match value {
        Value::Scalar(quantity) => quantity.sig_figs = 0,
        Value::List(list) => {
            for element in &mut list.elements {
                element.sig_figs = 0;
            }
        },
        _ => {},
    }
}

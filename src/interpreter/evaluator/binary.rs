use crate::{
    ast::BinaryOperator,
    error::Error,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
    util::span::Span,
};

impl Evaluator<'_> {
    /// Applies a binary operator to two evaluated operands.
    ///
    /// Two numbers are combined arithmetically; all numbers are doubles and
    /// division follows IEEE-754, so dividing by zero yields an infinity. For
    /// any other pair only `+` is defined: both operands are cast to text and
    /// concatenated.
    ///
    /// # Errors
    /// Returns a runtime error for `-`, `*` or `/` on non-number operands and
    /// for operands without a textual form (functions, unknown values).
    ///
    /// # Example
    /// ```
    /// use sprig::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::Evaluator, value::Value},
    ///     util::span::Span,
    /// };
    ///
    /// let sum = Evaluator::eval_binary(BinaryOperator::Add,
    ///                                  &Value::from(true),
    ///                                  &Value::from("35"),
    ///                                  Span::default()).unwrap();
    /// assert_eq!(sum, Value::from("true35"));
    ///
    /// assert!(Evaluator::eval_binary(BinaryOperator::Sub,
    ///                                &Value::from("3"),
    ///                                &Value::from(1.0),
    ///                                Span::default()).is_err());
    /// ```
    pub fn eval_binary<'a>(operator: BinaryOperator,
                           left: &Value<'a>,
                           right: &Value<'a>,
                           span: Span)
                           -> EvalResult<Value<'a>> {
        if let (Value::Number(l), Value::Number(r)) = (left, right) {
            let result = match operator {
                BinaryOperator::Add => l + r,
                BinaryOperator::Sub => l - r,
                BinaryOperator::Mul => l * r,
                BinaryOperator::Div => l / r,
            };
            return Ok(Value::Number(result));
        }

        if operator != BinaryOperator::Add {
            return Err(Error::runtime(format!("operator `{operator}` requires two numbers, found {} and {}",
                                              left.type_name(),
                                              right.type_name()),
                                      span));
        }

        let left = cast_to_text(left, span)?;
        let right = cast_to_text(right, span)?;
        Ok(Value::String(left + &right))
    }
}

fn cast_to_text(value: &Value<'_>, span: Span) -> EvalResult<String> {
    value.to_text().ok_or_else(|| {
                       Error::runtime(format!("cannot convert a {} to text", value.type_name()),
                                      span)
                   })
}

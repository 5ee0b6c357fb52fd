//! Arithmetic evaluation for one side of an equation
//!
//! A side is a chain of integers joined by `+ - * /`, with an optional leading
//! sign on the first number. There are no parentheses and no whitespace.
//! Multiplication and division bind tighter than addition and subtraction,
//! and operators of equal precedence associate left-to-right.

use std::fmt;

/// Binary operator between two numbers of a side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Map an operator character to its `Operator`
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    const fn binds_tighter(self) -> bool {
        matches!(self, Self::Multiply | Self::Divide)
    }

    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

/// Error raised when a side cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    /// Nothing to evaluate
    Empty,
    /// A character that is neither a digit nor an operator
    UnexpectedCharacter { ch: char, position: usize },
    /// An operator with no number after it (or two operators in a row)
    DanglingOperator { position: usize },
    /// A digit run that does not fit a number
    InvalidNumber(String),
}

impl fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Expression is empty"),
            Self::UnexpectedCharacter { ch, position } => {
                write!(f, "Unexpected character '{ch}' at position {position}")
            }
            Self::DanglingOperator { position } => {
                write!(f, "Operator at position {position} is not followed by a number")
            }
            Self::InvalidNumber(text) => write!(f, "Invalid number: {text}"),
        }
    }
}

impl std::error::Error for ExpressionError {}

/// Tokenized side: `numbers.len() == operators.len() + 1`
#[derive(Debug, Clone, PartialEq)]
struct Tokens {
    numbers: Vec<f64>,
    operators: Vec<Operator>,
}

fn tokenize(side: &str) -> Result<Tokens, ExpressionError> {
    if side.is_empty() {
        return Err(ExpressionError::Empty);
    }

    let mut numbers = Vec::new();
    let mut operators = Vec::new();
    let mut current = String::new();
    let mut last_operator_at = None;

    for (position, ch) in side.chars().enumerate() {
        if ch.is_ascii_digit() {
            current.push(ch);
            continue;
        }

        let Some(operator) = Operator::from_char(ch) else {
            return Err(ExpressionError::UnexpectedCharacter { ch, position });
        };

        // Leading sign belongs to the first number
        if position == 0 && matches!(operator, Operator::Add | Operator::Subtract) {
            current.push(ch);
            continue;
        }

        if !current.chars().any(|c| c.is_ascii_digit()) {
            return Err(ExpressionError::DanglingOperator { position });
        }

        numbers.push(parse_number(&current)?);
        current.clear();
        operators.push(operator);
        last_operator_at = Some(position);
    }

    if !current.chars().any(|c| c.is_ascii_digit()) {
        return match last_operator_at {
            Some(position) => Err(ExpressionError::DanglingOperator { position }),
            None if current.is_empty() => Err(ExpressionError::Empty),
            None => Err(ExpressionError::DanglingOperator { position: 0 }),
        };
    }
    numbers.push(parse_number(&current)?);

    Ok(Tokens { numbers, operators })
}

fn parse_number(text: &str) -> Result<f64, ExpressionError> {
    text.parse::<f64>()
        .map_err(|_| ExpressionError::InvalidNumber(text.to_string()))
}

/// Evaluate one side of an equation
///
/// # Errors
/// Returns `ExpressionError` if the side is empty, contains a character other
/// than digits and `+ - * /`, or has an operator without a following number.
///
/// Division by zero is not an error: it yields an IEEE infinity or NaN.
///
/// # Examples
/// ```
/// use numberle::core::evaluate;
///
/// assert_eq!(evaluate("1+2*3").unwrap(), 7.0);
/// assert_eq!(evaluate("-8+5").unwrap(), -3.0);
/// assert!(evaluate("1++2").is_err());
/// ```
pub fn evaluate(side: &str) -> Result<f64, ExpressionError> {
    let Tokens {
        mut numbers,
        mut operators,
    } = tokenize(side)?;

    // First pass: collapse * and / into the number sequence
    let mut i = 0;
    while i < operators.len() {
        if operators[i].binds_tighter() {
            let rhs = numbers.remove(i + 1);
            numbers[i] = operators[i].apply(numbers[i], rhs);
            operators.remove(i);
        } else {
            i += 1;
        }
    }

    // Second pass: + and - over what remains
    let mut result = numbers[0];
    for (operator, &number) in operators.iter().zip(&numbers[1..]) {
        result = operator.apply(result, number);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_single_number() {
        assert_eq!(evaluate("6").unwrap(), 6.0);
        assert_eq!(evaluate("0042").unwrap(), 42.0);
    }

    #[test]
    fn evaluate_leading_sign() {
        assert_eq!(evaluate("+5").unwrap(), 5.0);
        assert_eq!(evaluate("-3").unwrap(), -3.0);
        assert_eq!(evaluate("-8+5").unwrap(), -3.0);
        assert_eq!(evaluate("+9+1").unwrap(), 10.0);
    }

    #[test]
    fn evaluate_precedence() {
        assert_eq!(evaluate("1+4*2").unwrap(), 9.0);
        assert_eq!(evaluate("2*8-9").unwrap(), 7.0);
        assert_eq!(evaluate("1+6/3*2").unwrap(), 5.0);
    }

    #[test]
    fn evaluate_left_to_right() {
        // (8-3)-2, not 8-(3-2)
        assert_eq!(evaluate("8-3-2").unwrap(), 3.0);
        // (8/4)/2, not 8/(4/2)
        assert_eq!(evaluate("8/4/2").unwrap(), 1.0);
        assert_eq!(evaluate("-2*3").unwrap(), -6.0);
    }

    #[test]
    fn evaluate_fractional_division() {
        let value = evaluate("1/3").unwrap();
        assert!((value - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn evaluate_division_by_zero_is_not_finite() {
        assert!(evaluate("5/0").unwrap().is_infinite());
        assert!(evaluate("0/0").unwrap().is_nan());
    }

    #[test]
    fn evaluate_rejects_malformed() {
        assert_eq!(evaluate(""), Err(ExpressionError::Empty));
        assert_eq!(
            evaluate("1++2"),
            Err(ExpressionError::DanglingOperator { position: 2 })
        );
        assert_eq!(
            evaluate("12+"),
            Err(ExpressionError::DanglingOperator { position: 2 })
        );
        assert_eq!(
            evaluate("*3"),
            Err(ExpressionError::DanglingOperator { position: 0 })
        );
        assert_eq!(
            evaluate("-"),
            Err(ExpressionError::DanglingOperator { position: 0 })
        );
        assert_eq!(
            evaluate("1a"),
            Err(ExpressionError::UnexpectedCharacter { ch: 'a', position: 1 })
        );
    }

    #[test]
    fn error_display() {
        let err = ExpressionError::UnexpectedCharacter { ch: '=', position: 3 };
        assert_eq!(err.to_string(), "Unexpected character '=' at position 3");
    }
}

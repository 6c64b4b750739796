// Expression evaluation - joins token values and delegates to evalexpr

use crate::formula::token::Token;
use evalexpr::Value;

/// Sentinel shown when the expression cannot be evaluated.
pub const NOT_A_NUMBER: &str = "NaN";

/// Evaluate the formula built from `tokens`.
///
/// Token values are concatenated in sequence order with no separator and
/// handed to `evalexpr`. Any failure (syntax error, division error, empty
/// expression, non-numeric result) yields the `"NaN"` sentinel; this never
/// panics and never surfaces an error to the caller.
pub fn evaluate(tokens: &[Token]) -> String {
    let expression: String = tokens.iter().map(|t| t.value.as_str()).collect();
    evaluate_expression(&expression)
}

fn evaluate_expression(expression: &str) -> String {
    match evalexpr::eval(expression) {
        Ok(Value::Int(n)) => n.to_string(),
        Ok(Value::Float(n)) if n.is_finite() => n.to_string(),
        Ok(_) | Err(_) => NOT_A_NUMBER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: &str) -> Token {
        Token {
            name: value.to_string(),
            category: "number".to_string(),
            value: value.to_string(),
            id: "1".to_string(),
        }
    }

    #[test]
    fn test_evaluate_simple_sum() {
        let tokens = vec![number("3"), Token::operator("+"), number("4")];
        assert_eq!(evaluate(&tokens), "7");
    }

    #[test]
    fn test_evaluate_respects_precedence() {
        let tokens = vec![
            number("2"),
            Token::operator("+"),
            number("3"),
            Token::operator("*"),
            number("4"),
        ];
        assert_eq!(evaluate(&tokens), "14");
    }

    #[test]
    fn test_evaluate_parentheses_and_exponent() {
        let tokens = vec![
            Token::operator("("),
            number("1"),
            Token::operator("+"),
            number("1"),
            Token::operator(")"),
            Token::operator("^"),
            number("3"),
        ];
        assert_eq!(evaluate(&tokens), "8");
    }

    #[test]
    fn test_evaluate_float_result() {
        let tokens = vec![number("7.5"), Token::operator("-"), number("2")];
        assert_eq!(evaluate(&tokens), "5.5");
    }

    #[test]
    fn test_evaluate_empty_sequence_is_nan() {
        assert_eq!(evaluate(&[]), NOT_A_NUMBER);
    }

    #[test]
    fn test_evaluate_unmatched_paren_is_nan() {
        let tokens = vec![Token::operator("("), number("5")];
        assert_eq!(evaluate(&tokens), NOT_A_NUMBER);
    }

    #[test]
    fn test_evaluate_trailing_operator_is_nan() {
        let tokens = vec![number("3"), Token::operator("+")];
        assert_eq!(evaluate(&tokens), NOT_A_NUMBER);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let tokens = vec![number("6"), Token::operator("/"), number("4")];
        assert_eq!(evaluate(&tokens), evaluate(&tokens));
    }

    #[test]
    fn test_evaluate_never_panics_on_garbage() {
        let tokens = vec![number("@@"), Token::operator("+")];
        assert_eq!(evaluate(&tokens), NOT_A_NUMBER);
    }
}

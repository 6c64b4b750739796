use serde::Deserialize;

/// The single-character operator alphabet.
///
/// Recognition is substring containment in this string, not membership in a
/// character class. A freshly typed value commits as an operator only when it
/// is a substring of `OPERATORS`, which in practice restricts commits to
/// single characters (plus pasted adjacent pairs like `*/`).
pub const OPERATORS: &str = "+-*/()^";

/// One committed unit of the formula: either an operator or an entity picked
/// from the autocomplete source. Entities deserialize straight off the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Token {
    /// Display label shown on the tag chip.
    pub name: String,
    /// Discriminator: `"operator"` or the entity's category string.
    pub category: String,
    /// Fragment inserted into the evaluated expression.
    pub value: String,
    /// External identifier; `"0"` for locally synthesized operator tokens.
    pub id: String,
}

impl Token {
    /// Synthesize an operator token from a typed symbol.
    pub fn operator(symbol: &str) -> Self {
        Self {
            name: symbol.to_string(),
            category: "operator".to_string(),
            value: symbol.to_string(),
            id: "0".to_string(),
        }
    }

    /// True when `text` commits as an operator instead of entering the raw
    /// input field.
    pub fn is_operator_input(text: &str) -> bool {
        !text.is_empty() && OPERATORS.contains(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_token_fields() {
        let token = Token::operator("+");
        assert_eq!(token.name, "+");
        assert_eq!(token.category, "operator");
        assert_eq!(token.value, "+");
        assert_eq!(token.id, "0");
    }

    #[test]
    fn test_is_operator_input_single_chars() {
        for symbol in ["+", "-", "*", "/", "(", ")", "^"] {
            assert!(Token::is_operator_input(symbol), "expected {symbol} to commit");
        }
    }

    #[test]
    fn test_is_operator_input_rejects_empty() {
        assert!(!Token::is_operator_input(""));
    }

    #[test]
    fn test_is_operator_input_rejects_other_chars() {
        assert!(!Token::is_operator_input("a"));
        assert!(!Token::is_operator_input("7"));
        assert!(!Token::is_operator_input("%"));
    }

    #[test]
    fn test_is_operator_input_rejects_multi_char_words() {
        assert!(!Token::is_operator_input("ap"));
        assert!(!Token::is_operator_input("++"));
    }

    #[test]
    fn test_is_operator_input_accepts_adjacent_substring() {
        // Substring semantics: "*/" sits inside "+-*/()^" and commits as a
        // single token. Documented current behavior, reachable only by paste.
        assert!(Token::is_operator_input("*/"));
    }

    #[test]
    fn test_entity_token_deserializes() {
        let json = r#"{"name":"Apple","category":"fruit","value":"3","id":"1"}"#;
        let token: Token = serde_json::from_str(json).unwrap();
        assert_eq!(token.name, "Apple");
        assert_eq!(token.category, "fruit");
        assert_eq!(token.value, "3");
        assert_eq!(token.id, "1");
    }
}

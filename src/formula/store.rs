use crate::formula::token::Token;

/// Ordered, insertion-order collection of committed tokens. No uniqueness,
/// no undo history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    pub fn append(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn pop_last(&mut self) -> Option<Token> {
        self.tokens.pop()
    }

    /// Remove the token at `index`. Out-of-range indices are a silent no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<Token> {
        if index < self.tokens.len() {
            Some(self.tokens.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Concatenate token values in sequence order, no separator. This is the
    /// expression string handed to the evaluator and shown in the formula line.
    pub fn joined(&self) -> String {
        self.tokens.iter().map(|t| t.value.as_str()).collect()
    }
}

use crate::language::{ident::IdentId, span::Span};
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    Def,
    Return,
    If,
    Then,
    Fi,
    Goto,
    Call,
    With,
    End,

    LParen,
    RParen,
    Assign,
    Operator(BinaryOp),

    Label,
    Number(f64),
    Identifier(IdentId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Less,
    Greater,
    LessEq,
    GreaterEq,
    Eq,
    Add,
    Sub,
    Mul,
    Div,
}

/// Tolerance used by `==`.
pub const EQ_EPSILON: f64 = 0.00001;

impl TokenKind {
    /// Looks `word` up in the fixed keyword and punctuation vocabulary.
    pub fn from_word(word: &str) -> Option<TokenKind> {
        let kind = match word {
            "DEF" => TokenKind::Def,
            "RETURN" => TokenKind::Return,
            "IF" => TokenKind::If,
            "THEN" => TokenKind::Then,
            "FI" => TokenKind::Fi,
            "GOTO" => TokenKind::Goto,
            "CALL" => TokenKind::Call,
            "WITH" => TokenKind::With,
            "END" => TokenKind::End,
            "(" => TokenKind::LParen,
            ")" => TokenKind::RParen,
            "=" => TokenKind::Assign,
            "<" => TokenKind::Operator(BinaryOp::Less),
            ">" => TokenKind::Operator(BinaryOp::Greater),
            "<=" => TokenKind::Operator(BinaryOp::LessEq),
            ">=" => TokenKind::Operator(BinaryOp::GreaterEq),
            "==" => TokenKind::Operator(BinaryOp::Eq),
            "+" => TokenKind::Operator(BinaryOp::Add),
            "-" => TokenKind::Operator(BinaryOp::Sub),
            "*" => TokenKind::Operator(BinaryOp::Mul),
            "/" => TokenKind::Operator(BinaryOp::Div),
            _ => return None,
        };
        Some(kind)
    }

    /// Fixed spelling of the token, `None` for literals and identifiers.
    pub fn keyword(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Def => "DEF",
            TokenKind::Return => "RETURN",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Fi => "FI",
            TokenKind::Goto => "GOTO",
            TokenKind::Call => "CALL",
            TokenKind::With => "WITH",
            TokenKind::End => "END",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Assign => "=",
            TokenKind::Operator(op) => op.symbol(),
            TokenKind::Label => ":",
            TokenKind::Number(_) | TokenKind::Identifier(_) => return None,
        };
        Some(text)
    }

    pub fn is_unary_start(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier(_) | TokenKind::Number(_) | TokenKind::LParen
        )
    }
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Less => "<",
            BinaryOp::Greater => ">",
            BinaryOp::LessEq => "<=",
            BinaryOp::GreaterEq => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOp::Less | BinaryOp::Greater | BinaryOp::LessEq | BinaryOp::GreaterEq | BinaryOp::Eq
        )
    }

    /// Comparisons produce 1.0 or 0.0.
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        let truth = |b: bool| if b { 1.0 } else { 0.0 };
        match self {
            BinaryOp::Add => left + right,
            BinaryOp::Sub => left - right,
            BinaryOp::Mul => left * right,
            BinaryOp::Div => left / right,
            BinaryOp::Less => truth(left < right),
            BinaryOp::Greater => truth(left > right),
            BinaryOp::LessEq => truth(left <= right),
            BinaryOp::GreaterEq => truth(left >= right),
            BinaryOp::Eq => truth((left - right).abs() < EQ_EPSILON),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

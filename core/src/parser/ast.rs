use core::fmt;

use bigdecimal::BigDecimal;

use crate::lexer::TokenKind;
use crate::values::{DataType, number};

/// Operators of the binary expression node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Concat,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Concat => "&",
            BinaryOp::Eq => "=",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
        }
    }

    pub fn from_token(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            TokenKind::Ampersand => BinaryOp::Concat,
            TokenKind::Equal => BinaryOp::Eq,
            TokenKind::NotEqual => BinaryOp::NotEq,
            TokenKind::Less => BinaryOp::Lt,
            TokenKind::Greater => BinaryOp::Gt,
            TokenKind::LessEqual => BinaryOp::LtEq,
            TokenKind::GreaterEqual => BinaryOp::GtEq,
            _ => return None,
        };
        Some(op)
    }

    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Eq
                | BinaryOp::NotEq
                | BinaryOp::Lt
                | BinaryOp::Gt
                | BinaryOp::LtEq
                | BinaryOp::GtEq
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Number(BigDecimal),
}

impl Literal {
    pub fn data_type(&self) -> DataType {
        match self {
            Literal::Str(_) => DataType::String,
            Literal::Number(n) if number::is_integral(n) => DataType::Integer,
            Literal::Number(_) => DataType::Decimal,
        }
    }
}

/// Expression tree produced by the parser. Positions are byte offsets.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal {
        value: Literal,
        position: usize,
    },
    Identifier {
        name: String,
        position: usize,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
        position: usize,
    },
    Call {
        name: String,
        position: usize,
        args: Vec<Expr>,
    },
    Conditional {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    /// Static key/value text pairs. Values are never looked up in bindings.
    Map {
        entries: Vec<(String, String)>,
        position: usize,
    },
}

impl Expr {
    pub fn position(&self) -> usize {
        match self {
            Expr::Literal { position, .. }
            | Expr::Identifier { position, .. }
            | Expr::Binary { position, .. }
            | Expr::Call { position, .. }
            | Expr::Map { position, .. } => *position,
            Expr::Conditional { condition, .. } => condition.position(),
        }
    }
}

/// Fully parenthesized rendering, used for debugging and tests.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal {
                value: Literal::Str(s),
                ..
            } => write!(f, "'{}'", s),
            Expr::Literal {
                value: Literal::Number(n),
                ..
            } => f.write_str(&number::plain_string(n)),
            Expr::Identifier { name, .. } => f.write_str(name),
            Expr::Binary {
                op, left, right, ..
            } => write!(f, "({} {} {})", op, left, right),
            Expr::Call { name, args, .. } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(")")
            }
            Expr::Conditional {
                condition,
                then_branch,
                else_branch,
            } => write!(f, "(? {} {} {})", condition, then_branch, else_branch),
            Expr::Map { entries, .. } => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: '{}'", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

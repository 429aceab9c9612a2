/// Binding power of an infix rule, weakest first.
///
/// The parser keeps extending an expression only while the next token's
/// precedence is strictly greater than the current minimum, which makes
/// operators of equal precedence left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Assignment,
    Ternary,
    Comparison,
    Sum,
    Product,
    Prefix,
    Call,
}

impl Precedence {
    /// One step weaker, saturating at `Assignment`.
    pub fn lower(self) -> Self {
        match self {
            Precedence::Assignment | Precedence::Ternary => Precedence::Assignment,
            Precedence::Comparison => Precedence::Ternary,
            Precedence::Sum => Precedence::Comparison,
            Precedence::Product => Precedence::Sum,
            Precedence::Prefix => Precedence::Product,
            Precedence::Call => Precedence::Prefix,
        }
    }
}

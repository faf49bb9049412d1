//! Operator precedence for composing Cumin expressions.
//!
//! Each [`Order`] maps to a strength in tenths: the integer part is the
//! grammar's precedence class, the fractional part separates operators that
//! share a class but are not interchangeable (`-` vs `+`, `*` vs `/`).
//! Lower values bind tighter.

/// Syntactic context a generated expression is produced in or embedded into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Literals, identifiers, already-bracketed code.
    Atomic,
    New,
    Member,
    FunctionCall,
    Increment,
    Decrement,
    BitwiseNot,
    UnaryPlus,
    UnaryNegation,
    LogicalNot,
    Typeof,
    Void,
    Delete,
    Await,
    Exponentiation,
    Multiplication,
    Division,
    Modulus,
    Subtraction,
    Addition,
    BitwiseShift,
    Relational,
    In,
    Instanceof,
    Equality,
    BitwiseAnd,
    BitwiseXor,
    BitwiseOr,
    LogicalAnd,
    LogicalOr,
    Conditional,
    Assignment,
    Yield,
    Comma,
    /// No requirement: the caller never needs parentheses.
    None,
}

/// Pairs `(outer, inner)` that share a class yet compose without brackets.
///
/// `foo().bar`, `!!x`, `a * b * c`, `a || b || c` read the same either way.
const ASSOCIATIVE: &[(Order, Order)] = &[
    (Order::FunctionCall, Order::Member),
    (Order::FunctionCall, Order::FunctionCall),
    (Order::Member, Order::Member),
    (Order::Member, Order::FunctionCall),
    (Order::LogicalNot, Order::LogicalNot),
    (Order::Multiplication, Order::Multiplication),
    (Order::Addition, Order::Addition),
    (Order::LogicalAnd, Order::LogicalAnd),
    (Order::LogicalOr, Order::LogicalOr),
];

impl Order {
    /// Binding strength in tenths. Lower binds tighter.
    pub const fn precedence(self) -> u16 {
        match self {
            Order::Atomic => 0,
            Order::New => 11,
            Order::Member => 12,
            Order::FunctionCall => 20,
            Order::Increment | Order::Decrement => 30,
            Order::BitwiseNot => 41,
            Order::UnaryPlus => 42,
            Order::UnaryNegation => 43,
            Order::LogicalNot => 44,
            Order::Typeof => 45,
            Order::Void => 46,
            Order::Delete => 47,
            Order::Await => 48,
            Order::Exponentiation => 50,
            Order::Multiplication => 51,
            Order::Division => 52,
            Order::Modulus => 53,
            Order::Subtraction => 61,
            Order::Addition => 62,
            Order::BitwiseShift => 70,
            Order::Relational | Order::In | Order::Instanceof => 80,
            Order::Equality => 90,
            Order::BitwiseAnd => 100,
            Order::BitwiseXor => 110,
            Order::BitwiseOr => 120,
            Order::LogicalAnd => 130,
            Order::LogicalOr => 140,
            Order::Conditional => 150,
            Order::Assignment => 160,
            Order::Yield => 170,
            Order::Comma => 180,
            Order::None => 990,
        }
    }

    /// Grammar precedence class (integer part of the strength).
    pub const fn class(self) -> u16 {
        self.precedence() / 10
    }
}

/// Whether an `inner` expression must be bracketed inside an `outer` context.
///
/// Brackets are needed when the inner expression binds no tighter than its
/// context, except for atomic-in-atomic, none-in-none and the associative
/// pairs above.
pub fn needs_parens(outer: Order, inner: Order) -> bool {
    let outer_class = outer.class();
    let inner_class = inner.class();
    if outer_class > inner_class {
        return false;
    }
    if outer_class == inner_class && matches!(outer, Order::Atomic | Order::None) {
        return false;
    }
    !ASSOCIATIVE.contains(&(outer, inner))
}

/// Wrap `code` in parentheses when it binds looser than `outer` requires.
pub fn compose(code: String, inner: Order, outer: Order) -> String {
    if needs_parens(outer, inner) {
        format!("({code})")
    } else {
        code
    }
}

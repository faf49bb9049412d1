use crate::precedence::{Order, compose, needs_parens};

#[test]
fn lower_binds_tighter() {
    assert!(Order::Atomic.precedence() < Order::FunctionCall.precedence());
    assert!(Order::Multiplication.precedence() < Order::Addition.precedence());
    assert!(Order::LogicalAnd.precedence() < Order::LogicalOr.precedence());
    assert!(Order::Comma.precedence() < Order::None.precedence());
}

#[test]
fn subtraction_and_addition_share_a_class() {
    assert_eq!(Order::Subtraction.class(), Order::Addition.class());
    assert_ne!(Order::Subtraction, Order::Addition);
}

#[test]
fn or_inside_and_is_bracketed() {
    let code = compose("a || b".to_string(), Order::LogicalOr, Order::LogicalAnd);
    assert_eq!(format!("{code} && c"), "(a || b) && c");
}

#[test]
fn no_requirement_never_brackets() {
    for inner in [Order::LogicalOr, Order::Conditional, Order::Comma, Order::None] {
        assert!(!needs_parens(Order::None, inner), "{inner:?}");
    }
}

#[test]
fn tighter_inner_is_left_alone() {
    assert!(!needs_parens(Order::Addition, Order::Multiplication));
    assert!(!needs_parens(Order::LogicalAnd, Order::Equality));
    assert!(!needs_parens(Order::Member, Order::Atomic));
}

#[test]
fn same_class_is_bracketed_unless_associative() {
    assert!(needs_parens(Order::Subtraction, Order::Addition));
    assert!(needs_parens(Order::Addition, Order::Subtraction));
    assert!(!needs_parens(Order::Addition, Order::Addition));
    assert!(!needs_parens(Order::LogicalOr, Order::LogicalOr));
    assert!(!needs_parens(Order::Member, Order::FunctionCall));
    assert!(needs_parens(Order::Division, Order::Multiplication));
}

#[test]
fn atomic_in_atomic_is_bare() {
    assert!(!needs_parens(Order::Atomic, Order::Atomic));
    assert!(needs_parens(Order::Atomic, Order::Member));
}

#[test]
fn looser_inner_is_bracketed() {
    assert!(needs_parens(Order::Member, Order::Addition));
    assert!(needs_parens(Order::LogicalNot, Order::Equality));
    assert!(needs_parens(Order::Comma, Order::Comma));
}

//! End-to-end operator semantics through `apply_binary_operator`: domain
//! selection plus the built-in providers, checked against what the JVM itself
//! would produce.

use javelin_eval::{apply_binary_operator, BinaryOperator, ObjectRef, PrimitiveValue};

use BinaryOperator::*;
use PrimitiveValue::*;

fn eval(op: BinaryOperator, lhs: PrimitiveValue, rhs: PrimitiveValue) -> PrimitiveValue {
    apply_binary_operator(op, &lhs, &rhs).unwrap()
}

#[test]
fn integral_arithmetic_promotes_to_int() {
    assert_eq!(eval(Add, Int(5), Byte(3)), Int(8));
    assert_eq!(eval(Add, Byte(100), Byte(100)), Int(200));
    assert_eq!(eval(Subtract, Short(10), Char('\u{3}' as u16)), Int(7));
    assert_eq!(eval(Multiply, Char('d' as u16), Byte(3)), Int(300));
}

#[test]
fn long_operand_widens_the_result() {
    assert_eq!(eval(Add, Int(1), Long(2)), Long(3));
    assert_eq!(eval(Multiply, Long(1 << 40), Int(2)), Long(1 << 41));
}

#[test]
fn integer_overflow_wraps() {
    assert_eq!(eval(Add, Int(i32::MAX), Int(1)), Int(i32::MIN));
    assert_eq!(eval(Subtract, Long(i64::MIN), Long(1)), Long(i64::MAX));
}

#[test]
fn floating_arithmetic_follows_the_wider_operand() {
    assert_eq!(eval(Add, Double(2.5), Int(4)), Double(6.5));
    assert_eq!(eval(Add, Float(1.0), Char('A' as u16)), Float(66.0));
    assert_eq!(eval(Subtract, Long(10), Float(0.5)), Float(9.5));
    assert_eq!(eval(Multiply, Float(2.0), Double(0.25)), Double(0.5));
}

#[test]
fn comparisons_promote_then_compare() {
    assert_eq!(eval(Less, Byte(3), Long(4)), Boolean(true));
    assert_eq!(eval(GreaterOrEqual, Char('A' as u16), Int(65)), Boolean(true));
    assert_eq!(eval(Equal, Int(2), Double(2.0)), Boolean(true));
    assert_eq!(eval(NotEqual, Short(1), Short(1)), Boolean(false));
    assert_eq!(eval(Greater, Float(0.1), Double(0.2)), Boolean(false));
    assert_eq!(eval(LessOrEqual, Long(5), Byte(5)), Boolean(true));
}

#[test]
fn nan_comparisons_match_java() {
    assert_eq!(eval(Less, Double(f64::NAN), Double(0.0)), Boolean(false));
    assert_eq!(eval(Equal, Double(f64::NAN), Double(f64::NAN)), Boolean(false));
    assert_eq!(eval(NotEqual, Float(f32::NAN), Float(f32::NAN)), Boolean(true));
}

#[test]
fn repeated_evaluation_is_stable() {
    let lhs = Double(2.5);
    let rhs = Int(4);
    assert_eq!(
        apply_binary_operator(Add, &lhs, &rhs),
        apply_binary_operator(Add, &lhs, &rhs)
    );
}

#[test]
fn non_numeric_operands_fail_for_every_operator() {
    let object = Object(ObjectRef {
        id: 7,
        runtime_type: "java.lang.Object".to_string(),
    });
    let operators = [
        Add, Subtract, Multiply, Less, LessOrEqual, Greater, GreaterOrEqual, Equal, NotEqual,
    ];

    for op in operators {
        let err = apply_binary_operator(op, &object, &Int(1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown primitive: object java.lang.Object (id 7)"
        );
        apply_binary_operator(op, &Int(1), &Null).unwrap_err();
        apply_binary_operator(op, &Boolean(true), &Float(1.0)).unwrap_err();
        apply_binary_operator(op, &Void, &Void).unwrap_err();
    }
}

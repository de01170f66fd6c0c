//! Operation provider contract.
//!
//! One semantic operator (`+`, `<`, …) is one provider instance. Each trait
//! method covers exactly one ordered (lhs kind, rhs kind) pair, takes the raw
//! native payloads, and returns the result already tagged with the promoted
//! kind. The dispatch layer (`crate::dispatch`) only routes; which arithmetic
//! actually happens is entirely the provider's business.
//!
//! Methods are ordered pairs on purpose: `int_with_float` and `float_with_int`
//! are distinct slots and providers are never assumed commutative (`-` and `<`
//! are not).

use javelin_primitives::PrimitiveValue;

/// Integer-domain operations: the full 5×5 matrix over
/// {byte, short, char, int, long}.
///
/// Per Java binary numeric promotion, a conforming provider returns `int`
/// results unless either operand is `long`. Nothing here enforces that — a
/// comparison provider legitimately returns `Boolean` from every slot.
pub trait IntegerOperationProvider {
    fn byte_with_byte(&self, lhs: i8, rhs: i8) -> PrimitiveValue;
    fn byte_with_short(&self, lhs: i8, rhs: i16) -> PrimitiveValue;
    fn byte_with_char(&self, lhs: i8, rhs: u16) -> PrimitiveValue;
    fn byte_with_int(&self, lhs: i8, rhs: i32) -> PrimitiveValue;
    fn byte_with_long(&self, lhs: i8, rhs: i64) -> PrimitiveValue;

    fn short_with_byte(&self, lhs: i16, rhs: i8) -> PrimitiveValue;
    fn short_with_short(&self, lhs: i16, rhs: i16) -> PrimitiveValue;
    fn short_with_char(&self, lhs: i16, rhs: u16) -> PrimitiveValue;
    fn short_with_int(&self, lhs: i16, rhs: i32) -> PrimitiveValue;
    fn short_with_long(&self, lhs: i16, rhs: i64) -> PrimitiveValue;

    fn char_with_byte(&self, lhs: u16, rhs: i8) -> PrimitiveValue;
    fn char_with_short(&self, lhs: u16, rhs: i16) -> PrimitiveValue;
    fn char_with_char(&self, lhs: u16, rhs: u16) -> PrimitiveValue;
    fn char_with_int(&self, lhs: u16, rhs: i32) -> PrimitiveValue;
    fn char_with_long(&self, lhs: u16, rhs: i64) -> PrimitiveValue;

    fn int_with_byte(&self, lhs: i32, rhs: i8) -> PrimitiveValue;
    fn int_with_short(&self, lhs: i32, rhs: i16) -> PrimitiveValue;
    fn int_with_char(&self, lhs: i32, rhs: u16) -> PrimitiveValue;
    fn int_with_int(&self, lhs: i32, rhs: i32) -> PrimitiveValue;
    fn int_with_long(&self, lhs: i32, rhs: i64) -> PrimitiveValue;

    fn long_with_byte(&self, lhs: i64, rhs: i8) -> PrimitiveValue;
    fn long_with_short(&self, lhs: i64, rhs: i16) -> PrimitiveValue;
    fn long_with_char(&self, lhs: i64, rhs: u16) -> PrimitiveValue;
    fn long_with_int(&self, lhs: i64, rhs: i32) -> PrimitiveValue;
    fn long_with_long(&self, lhs: i64, rhs: i64) -> PrimitiveValue;
}

/// Floating-point-domain operations: every ordered pair with at least one
/// `float`/`double` operand (24 pairs, 7×7 minus the 5×5 integral matrix).
pub trait FloatingPointOperationProvider {
    fn byte_with_float(&self, lhs: i8, rhs: f32) -> PrimitiveValue;
    fn short_with_float(&self, lhs: i16, rhs: f32) -> PrimitiveValue;
    fn char_with_float(&self, lhs: u16, rhs: f32) -> PrimitiveValue;
    fn int_with_float(&self, lhs: i32, rhs: f32) -> PrimitiveValue;
    fn long_with_float(&self, lhs: i64, rhs: f32) -> PrimitiveValue;
    fn float_with_float(&self, lhs: f32, rhs: f32) -> PrimitiveValue;
    fn double_with_float(&self, lhs: f64, rhs: f32) -> PrimitiveValue;

    fn byte_with_double(&self, lhs: i8, rhs: f64) -> PrimitiveValue;
    fn short_with_double(&self, lhs: i16, rhs: f64) -> PrimitiveValue;
    fn char_with_double(&self, lhs: u16, rhs: f64) -> PrimitiveValue;
    fn int_with_double(&self, lhs: i32, rhs: f64) -> PrimitiveValue;
    fn long_with_double(&self, lhs: i64, rhs: f64) -> PrimitiveValue;
    fn float_with_double(&self, lhs: f32, rhs: f64) -> PrimitiveValue;
    fn double_with_double(&self, lhs: f64, rhs: f64) -> PrimitiveValue;

    fn float_with_byte(&self, lhs: f32, rhs: i8) -> PrimitiveValue;
    fn float_with_short(&self, lhs: f32, rhs: i16) -> PrimitiveValue;
    fn float_with_char(&self, lhs: f32, rhs: u16) -> PrimitiveValue;
    fn float_with_int(&self, lhs: f32, rhs: i32) -> PrimitiveValue;
    fn float_with_long(&self, lhs: f32, rhs: i64) -> PrimitiveValue;

    fn double_with_byte(&self, lhs: f64, rhs: i8) -> PrimitiveValue;
    fn double_with_short(&self, lhs: f64, rhs: i16) -> PrimitiveValue;
    fn double_with_char(&self, lhs: f64, rhs: u16) -> PrimitiveValue;
    fn double_with_int(&self, lhs: f64, rhs: i32) -> PrimitiveValue;
    fn double_with_long(&self, lhs: f64, rhs: i64) -> PrimitiveValue;
}

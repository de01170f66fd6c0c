//! Built-in operation providers, one per semantic operator.
//!
//! These implement both provider traits with the arithmetic the JVM itself
//! would perform: operands are widened to the promoted type (`int`, `long`,
//! `float`, or `double`), integer arithmetic wraps on overflow, and floating
//! arithmetic is plain IEEE-754 (so NaN compares the way Java's `<`/`==` do).
//!
//! Division and remainder are deliberately absent: a provider slot is
//! infallible, while Java integer `/` and `%` raise on a zero divisor. An
//! evaluator that wants them has to own that failure path itself.

use javelin_primitives::PrimitiveValue;

use crate::provider::{FloatingPointOperationProvider, IntegerOperationProvider};

macro_rules! arithmetic_provider {
    ($(#[$meta:meta])* $name:ident, $int_method:ident, $float_op:tt) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name;

        impl IntegerOperationProvider for $name {
            fn byte_with_byte(&self, lhs: i8, rhs: i8) -> PrimitiveValue {
                PrimitiveValue::Int(i32::from(lhs).$int_method(i32::from(rhs)))
            }
            fn byte_with_short(&self, lhs: i8, rhs: i16) -> PrimitiveValue {
                PrimitiveValue::Int(i32::from(lhs).$int_method(i32::from(rhs)))
            }
            fn byte_with_char(&self, lhs: i8, rhs: u16) -> PrimitiveValue {
                PrimitiveValue::Int(i32::from(lhs).$int_method(i32::from(rhs)))
            }
            fn byte_with_int(&self, lhs: i8, rhs: i32) -> PrimitiveValue {
                PrimitiveValue::Int(i32::from(lhs).$int_method(rhs))
            }
            fn byte_with_long(&self, lhs: i8, rhs: i64) -> PrimitiveValue {
                PrimitiveValue::Long(i64::from(lhs).$int_method(rhs))
            }

            fn short_with_byte(&self, lhs: i16, rhs: i8) -> PrimitiveValue {
                PrimitiveValue::Int(i32::from(lhs).$int_method(i32::from(rhs)))
            }
            fn short_with_short(&self, lhs: i16, rhs: i16) -> PrimitiveValue {
                PrimitiveValue::Int(i32::from(lhs).$int_method(i32::from(rhs)))
            }
            fn short_with_char(&self, lhs: i16, rhs: u16) -> PrimitiveValue {
                PrimitiveValue::Int(i32::from(lhs).$int_method(i32::from(rhs)))
            }
            fn short_with_int(&self, lhs: i16, rhs: i32) -> PrimitiveValue {
                PrimitiveValue::Int(i32::from(lhs).$int_method(rhs))
            }
            fn short_with_long(&self, lhs: i16, rhs: i64) -> PrimitiveValue {
                PrimitiveValue::Long(i64::from(lhs).$int_method(rhs))
            }

            fn char_with_byte(&self, lhs: u16, rhs: i8) -> PrimitiveValue {
                PrimitiveValue::Int(i32::from(lhs).$int_method(i32::from(rhs)))
            }
            fn char_with_short(&self, lhs: u16, rhs: i16) -> PrimitiveValue {
                PrimitiveValue::Int(i32::from(lhs).$int_method(i32::from(rhs)))
            }
            fn char_with_char(&self, lhs: u16, rhs: u16) -> PrimitiveValue {
                PrimitiveValue::Int(i32::from(lhs).$int_method(i32::from(rhs)))
            }
            fn char_with_int(&self, lhs: u16, rhs: i32) -> PrimitiveValue {
                PrimitiveValue::Int(i32::from(lhs).$int_method(rhs))
            }
            fn char_with_long(&self, lhs: u16, rhs: i64) -> PrimitiveValue {
                PrimitiveValue::Long(i64::from(lhs).$int_method(rhs))
            }

            fn int_with_byte(&self, lhs: i32, rhs: i8) -> PrimitiveValue {
                PrimitiveValue::Int(lhs.$int_method(i32::from(rhs)))
            }
            fn int_with_short(&self, lhs: i32, rhs: i16) -> PrimitiveValue {
                PrimitiveValue::Int(lhs.$int_method(i32::from(rhs)))
            }
            fn int_with_char(&self, lhs: i32, rhs: u16) -> PrimitiveValue {
                PrimitiveValue::Int(lhs.$int_method(i32::from(rhs)))
            }
            fn int_with_int(&self, lhs: i32, rhs: i32) -> PrimitiveValue {
                PrimitiveValue::Int(lhs.$int_method(rhs))
            }
            fn int_with_long(&self, lhs: i32, rhs: i64) -> PrimitiveValue {
                PrimitiveValue::Long(i64::from(lhs).$int_method(rhs))
            }

            fn long_with_byte(&self, lhs: i64, rhs: i8) -> PrimitiveValue {
                PrimitiveValue::Long(lhs.$int_method(i64::from(rhs)))
            }
            fn long_with_short(&self, lhs: i64, rhs: i16) -> PrimitiveValue {
                PrimitiveValue::Long(lhs.$int_method(i64::from(rhs)))
            }
            fn long_with_char(&self, lhs: i64, rhs: u16) -> PrimitiveValue {
                PrimitiveValue::Long(lhs.$int_method(i64::from(rhs)))
            }
            fn long_with_int(&self, lhs: i64, rhs: i32) -> PrimitiveValue {
                PrimitiveValue::Long(lhs.$int_method(i64::from(rhs)))
            }
            fn long_with_long(&self, lhs: i64, rhs: i64) -> PrimitiveValue {
                PrimitiveValue::Long(lhs.$int_method(rhs))
            }
        }

        impl FloatingPointOperationProvider for $name {
            fn byte_with_float(&self, lhs: i8, rhs: f32) -> PrimitiveValue {
                PrimitiveValue::Float(f32::from(lhs) $float_op rhs)
            }
            fn short_with_float(&self, lhs: i16, rhs: f32) -> PrimitiveValue {
                PrimitiveValue::Float(f32::from(lhs) $float_op rhs)
            }
            fn char_with_float(&self, lhs: u16, rhs: f32) -> PrimitiveValue {
                PrimitiveValue::Float(f32::from(lhs) $float_op rhs)
            }
            fn int_with_float(&self, lhs: i32, rhs: f32) -> PrimitiveValue {
                PrimitiveValue::Float(lhs as f32 $float_op rhs)
            }
            fn long_with_float(&self, lhs: i64, rhs: f32) -> PrimitiveValue {
                PrimitiveValue::Float(lhs as f32 $float_op rhs)
            }
            fn float_with_float(&self, lhs: f32, rhs: f32) -> PrimitiveValue {
                PrimitiveValue::Float(lhs $float_op rhs)
            }
            fn double_with_float(&self, lhs: f64, rhs: f32) -> PrimitiveValue {
                PrimitiveValue::Double(lhs $float_op f64::from(rhs))
            }

            fn byte_with_double(&self, lhs: i8, rhs: f64) -> PrimitiveValue {
                PrimitiveValue::Double(f64::from(lhs) $float_op rhs)
            }
            fn short_with_double(&self, lhs: i16, rhs: f64) -> PrimitiveValue {
                PrimitiveValue::Double(f64::from(lhs) $float_op rhs)
            }
            fn char_with_double(&self, lhs: u16, rhs: f64) -> PrimitiveValue {
                PrimitiveValue::Double(f64::from(lhs) $float_op rhs)
            }
            fn int_with_double(&self, lhs: i32, rhs: f64) -> PrimitiveValue {
                PrimitiveValue::Double(f64::from(lhs) $float_op rhs)
            }
            fn long_with_double(&self, lhs: i64, rhs: f64) -> PrimitiveValue {
                PrimitiveValue::Double(lhs as f64 $float_op rhs)
            }
            fn float_with_double(&self, lhs: f32, rhs: f64) -> PrimitiveValue {
                PrimitiveValue::Double(f64::from(lhs) $float_op rhs)
            }
            fn double_with_double(&self, lhs: f64, rhs: f64) -> PrimitiveValue {
                PrimitiveValue::Double(lhs $float_op rhs)
            }

            fn float_with_byte(&self, lhs: f32, rhs: i8) -> PrimitiveValue {
                PrimitiveValue::Float(lhs $float_op f32::from(rhs))
            }
            fn float_with_short(&self, lhs: f32, rhs: i16) -> PrimitiveValue {
                PrimitiveValue::Float(lhs $float_op f32::from(rhs))
            }
            fn float_with_char(&self, lhs: f32, rhs: u16) -> PrimitiveValue {
                PrimitiveValue::Float(lhs $float_op f32::from(rhs))
            }
            fn float_with_int(&self, lhs: f32, rhs: i32) -> PrimitiveValue {
                PrimitiveValue::Float(lhs $float_op rhs as f32)
            }
            fn float_with_long(&self, lhs: f32, rhs: i64) -> PrimitiveValue {
                PrimitiveValue::Float(lhs $float_op rhs as f32)
            }

            fn double_with_byte(&self, lhs: f64, rhs: i8) -> PrimitiveValue {
                PrimitiveValue::Double(lhs $float_op f64::from(rhs))
            }
            fn double_with_short(&self, lhs: f64, rhs: i16) -> PrimitiveValue {
                PrimitiveValue::Double(lhs $float_op f64::from(rhs))
            }
            fn double_with_char(&self, lhs: f64, rhs: u16) -> PrimitiveValue {
                PrimitiveValue::Double(lhs $float_op f64::from(rhs))
            }
            fn double_with_int(&self, lhs: f64, rhs: i32) -> PrimitiveValue {
                PrimitiveValue::Double(lhs $float_op f64::from(rhs))
            }
            fn double_with_long(&self, lhs: f64, rhs: i64) -> PrimitiveValue {
                PrimitiveValue::Double(lhs $float_op rhs as f64)
            }
        }
    };
}

macro_rules! comparison_provider {
    ($(#[$meta:meta])* $name:ident, $op:tt) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name;

        impl IntegerOperationProvider for $name {
            fn byte_with_byte(&self, lhs: i8, rhs: i8) -> PrimitiveValue {
                PrimitiveValue::Boolean(i32::from(lhs) $op i32::from(rhs))
            }
            fn byte_with_short(&self, lhs: i8, rhs: i16) -> PrimitiveValue {
                PrimitiveValue::Boolean(i32::from(lhs) $op i32::from(rhs))
            }
            fn byte_with_char(&self, lhs: i8, rhs: u16) -> PrimitiveValue {
                PrimitiveValue::Boolean(i32::from(lhs) $op i32::from(rhs))
            }
            fn byte_with_int(&self, lhs: i8, rhs: i32) -> PrimitiveValue {
                PrimitiveValue::Boolean(i32::from(lhs) $op rhs)
            }
            fn byte_with_long(&self, lhs: i8, rhs: i64) -> PrimitiveValue {
                PrimitiveValue::Boolean(i64::from(lhs) $op rhs)
            }

            fn short_with_byte(&self, lhs: i16, rhs: i8) -> PrimitiveValue {
                PrimitiveValue::Boolean(i32::from(lhs) $op i32::from(rhs))
            }
            fn short_with_short(&self, lhs: i16, rhs: i16) -> PrimitiveValue {
                PrimitiveValue::Boolean(i32::from(lhs) $op i32::from(rhs))
            }
            fn short_with_char(&self, lhs: i16, rhs: u16) -> PrimitiveValue {
                PrimitiveValue::Boolean(i32::from(lhs) $op i32::from(rhs))
            }
            fn short_with_int(&self, lhs: i16, rhs: i32) -> PrimitiveValue {
                PrimitiveValue::Boolean(i32::from(lhs) $op rhs)
            }
            fn short_with_long(&self, lhs: i16, rhs: i64) -> PrimitiveValue {
                PrimitiveValue::Boolean(i64::from(lhs) $op rhs)
            }

            fn char_with_byte(&self, lhs: u16, rhs: i8) -> PrimitiveValue {
                PrimitiveValue::Boolean(i32::from(lhs) $op i32::from(rhs))
            }
            fn char_with_short(&self, lhs: u16, rhs: i16) -> PrimitiveValue {
                PrimitiveValue::Boolean(i32::from(lhs) $op i32::from(rhs))
            }
            fn char_with_char(&self, lhs: u16, rhs: u16) -> PrimitiveValue {
                PrimitiveValue::Boolean(i32::from(lhs) $op i32::from(rhs))
            }
            fn char_with_int(&self, lhs: u16, rhs: i32) -> PrimitiveValue {
                PrimitiveValue::Boolean(i32::from(lhs) $op rhs)
            }
            fn char_with_long(&self, lhs: u16, rhs: i64) -> PrimitiveValue {
                PrimitiveValue::Boolean(i64::from(lhs) $op rhs)
            }

            fn int_with_byte(&self, lhs: i32, rhs: i8) -> PrimitiveValue {
                PrimitiveValue::Boolean(lhs $op i32::from(rhs))
            }
            fn int_with_short(&self, lhs: i32, rhs: i16) -> PrimitiveValue {
                PrimitiveValue::Boolean(lhs $op i32::from(rhs))
            }
            fn int_with_char(&self, lhs: i32, rhs: u16) -> PrimitiveValue {
                PrimitiveValue::Boolean(lhs $op i32::from(rhs))
            }
            fn int_with_int(&self, lhs: i32, rhs: i32) -> PrimitiveValue {
                PrimitiveValue::Boolean(lhs $op rhs)
            }
            fn int_with_long(&self, lhs: i32, rhs: i64) -> PrimitiveValue {
                PrimitiveValue::Boolean(i64::from(lhs) $op rhs)
            }

            fn long_with_byte(&self, lhs: i64, rhs: i8) -> PrimitiveValue {
                PrimitiveValue::Boolean(lhs $op i64::from(rhs))
            }
            fn long_with_short(&self, lhs: i64, rhs: i16) -> PrimitiveValue {
                PrimitiveValue::Boolean(lhs $op i64::from(rhs))
            }
            fn long_with_char(&self, lhs: i64, rhs: u16) -> PrimitiveValue {
                PrimitiveValue::Boolean(lhs $op i64::from(rhs))
            }
            fn long_with_int(&self, lhs: i64, rhs: i32) -> PrimitiveValue {
                PrimitiveValue::Boolean(lhs $op i64::from(rhs))
            }
            fn long_with_long(&self, lhs: i64, rhs: i64) -> PrimitiveValue {
                PrimitiveValue::Boolean(lhs $op rhs)
            }
        }

        impl FloatingPointOperationProvider for $name {
            fn byte_with_float(&self, lhs: i8, rhs: f32) -> PrimitiveValue {
                PrimitiveValue::Boolean(f32::from(lhs) $op rhs)
            }
            fn short_with_float(&self, lhs: i16, rhs: f32) -> PrimitiveValue {
                PrimitiveValue::Boolean(f32::from(lhs) $op rhs)
            }
            fn char_with_float(&self, lhs: u16, rhs: f32) -> PrimitiveValue {
                PrimitiveValue::Boolean(f32::from(lhs) $op rhs)
            }
            fn int_with_float(&self, lhs: i32, rhs: f32) -> PrimitiveValue {
                PrimitiveValue::Boolean((lhs as f32) $op rhs)
            }
            fn long_with_float(&self, lhs: i64, rhs: f32) -> PrimitiveValue {
                PrimitiveValue::Boolean((lhs as f32) $op rhs)
            }
            fn float_with_float(&self, lhs: f32, rhs: f32) -> PrimitiveValue {
                PrimitiveValue::Boolean(lhs $op rhs)
            }
            fn double_with_float(&self, lhs: f64, rhs: f32) -> PrimitiveValue {
                PrimitiveValue::Boolean(lhs $op f64::from(rhs))
            }

            fn byte_with_double(&self, lhs: i8, rhs: f64) -> PrimitiveValue {
                PrimitiveValue::Boolean(f64::from(lhs) $op rhs)
            }
            fn short_with_double(&self, lhs: i16, rhs: f64) -> PrimitiveValue {
                PrimitiveValue::Boolean(f64::from(lhs) $op rhs)
            }
            fn char_with_double(&self, lhs: u16, rhs: f64) -> PrimitiveValue {
                PrimitiveValue::Boolean(f64::from(lhs) $op rhs)
            }
            fn int_with_double(&self, lhs: i32, rhs: f64) -> PrimitiveValue {
                PrimitiveValue::Boolean(f64::from(lhs) $op rhs)
            }
            fn long_with_double(&self, lhs: i64, rhs: f64) -> PrimitiveValue {
                PrimitiveValue::Boolean((lhs as f64) $op rhs)
            }
            fn float_with_double(&self, lhs: f32, rhs: f64) -> PrimitiveValue {
                PrimitiveValue::Boolean(f64::from(lhs) $op rhs)
            }
            fn double_with_double(&self, lhs: f64, rhs: f64) -> PrimitiveValue {
                PrimitiveValue::Boolean(lhs $op rhs)
            }

            fn float_with_byte(&self, lhs: f32, rhs: i8) -> PrimitiveValue {
                PrimitiveValue::Boolean(lhs $op f32::from(rhs))
            }
            fn float_with_short(&self, lhs: f32, rhs: i16) -> PrimitiveValue {
                PrimitiveValue::Boolean(lhs $op f32::from(rhs))
            }
            fn float_with_char(&self, lhs: f32, rhs: u16) -> PrimitiveValue {
                PrimitiveValue::Boolean(lhs $op f32::from(rhs))
            }
            fn float_with_int(&self, lhs: f32, rhs: i32) -> PrimitiveValue {
                PrimitiveValue::Boolean(lhs $op rhs as f32)
            }
            fn float_with_long(&self, lhs: f32, rhs: i64) -> PrimitiveValue {
                PrimitiveValue::Boolean(lhs $op rhs as f32)
            }

            fn double_with_byte(&self, lhs: f64, rhs: i8) -> PrimitiveValue {
                PrimitiveValue::Boolean(lhs $op f64::from(rhs))
            }
            fn double_with_short(&self, lhs: f64, rhs: i16) -> PrimitiveValue {
                PrimitiveValue::Boolean(lhs $op f64::from(rhs))
            }
            fn double_with_char(&self, lhs: f64, rhs: u16) -> PrimitiveValue {
                PrimitiveValue::Boolean(lhs $op f64::from(rhs))
            }
            fn double_with_int(&self, lhs: f64, rhs: i32) -> PrimitiveValue {
                PrimitiveValue::Boolean(lhs $op f64::from(rhs))
            }
            fn double_with_long(&self, lhs: f64, rhs: i64) -> PrimitiveValue {
                PrimitiveValue::Boolean(lhs $op rhs as f64)
            }
        }
    };
}

arithmetic_provider!(
    /// Java `+` over numeric primitives.
    Addition, wrapping_add, +
);
arithmetic_provider!(
    /// Java `-` over numeric primitives.
    Subtraction, wrapping_sub, -
);
arithmetic_provider!(
    /// Java `*` over numeric primitives.
    Multiplication, wrapping_mul, *
);

comparison_provider!(
    /// Java `<`.
    LessThan, <
);
comparison_provider!(
    /// Java `<=`.
    LessOrEqual, <=
);
comparison_provider!(
    /// Java `>`.
    GreaterThan, >
);
comparison_provider!(
    /// Java `>=`.
    GreaterOrEqual, >=
);
comparison_provider!(
    /// Java `==` over numeric primitives (not reference equality).
    Equal, ==
);
comparison_provider!(
    /// Java `!=` over numeric primitives.
    NotEqual, !=
);

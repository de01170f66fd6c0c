//! Pairwise numeric dispatch.
//!
//! Routing follows Java binary numeric promotion: the integer entrypoint
//! covers the 5×5 integral matrix, the floating-point entrypoint covers every
//! pair involving a `float` or `double`. Resolution is two-level — outer match
//! on the right operand's kind, inner match on the left — and invokes exactly
//! one provider slot. Operands outside the table fail with
//! [`EvalError::UnknownPrimitive`] before any provider call.
//!
//! These functions never compute anything themselves and never log; they are
//! pure routing.

use javelin_primitives::PrimitiveValue;

use crate::error::{EvalError, EvalResult};
use crate::provider::{FloatingPointOperationProvider, IntegerOperationProvider};

/// Routes an integer-domain operation. Both operands must be one of
/// {byte, short, char, int, long}; `float`/`double` on either side is a
/// dispatch failure even though the model can represent them.
pub fn apply_integer_operation<P>(
    provider: &P,
    lhs: &PrimitiveValue,
    rhs: &PrimitiveValue,
) -> EvalResult<PrimitiveValue>
where
    P: IntegerOperationProvider + ?Sized,
{
    use PrimitiveValue::*;

    match rhs {
        Byte(b) => match lhs {
            Byte(a) => Ok(provider.byte_with_byte(*a, *b)),
            Short(a) => Ok(provider.short_with_byte(*a, *b)),
            Char(a) => Ok(provider.char_with_byte(*a, *b)),
            Int(a) => Ok(provider.int_with_byte(*a, *b)),
            Long(a) => Ok(provider.long_with_byte(*a, *b)),
            other => Err(EvalError::unknown_primitive(other)),
        },
        Short(b) => match lhs {
            Byte(a) => Ok(provider.byte_with_short(*a, *b)),
            Short(a) => Ok(provider.short_with_short(*a, *b)),
            Char(a) => Ok(provider.char_with_short(*a, *b)),
            Int(a) => Ok(provider.int_with_short(*a, *b)),
            Long(a) => Ok(provider.long_with_short(*a, *b)),
            other => Err(EvalError::unknown_primitive(other)),
        },
        Char(b) => match lhs {
            Byte(a) => Ok(provider.byte_with_char(*a, *b)),
            Short(a) => Ok(provider.short_with_char(*a, *b)),
            Char(a) => Ok(provider.char_with_char(*a, *b)),
            Int(a) => Ok(provider.int_with_char(*a, *b)),
            Long(a) => Ok(provider.long_with_char(*a, *b)),
            other => Err(EvalError::unknown_primitive(other)),
        },
        Int(b) => match lhs {
            Byte(a) => Ok(provider.byte_with_int(*a, *b)),
            Short(a) => Ok(provider.short_with_int(*a, *b)),
            Char(a) => Ok(provider.char_with_int(*a, *b)),
            Int(a) => Ok(provider.int_with_int(*a, *b)),
            Long(a) => Ok(provider.long_with_int(*a, *b)),
            other => Err(EvalError::unknown_primitive(other)),
        },
        Long(b) => match lhs {
            Byte(a) => Ok(provider.byte_with_long(*a, *b)),
            Short(a) => Ok(provider.short_with_long(*a, *b)),
            Char(a) => Ok(provider.char_with_long(*a, *b)),
            Int(a) => Ok(provider.int_with_long(*a, *b)),
            Long(a) => Ok(provider.long_with_long(*a, *b)),
            other => Err(EvalError::unknown_primitive(other)),
        },
        other => Err(EvalError::unknown_primitive(other)),
    }
}

/// Routes a floating-point-domain operation. At least one operand must be
/// `float` or `double`; when the right operand is integral, only a floating
/// left operand is legal.
pub fn apply_floating_point_operation<P>(
    provider: &P,
    lhs: &PrimitiveValue,
    rhs: &PrimitiveValue,
) -> EvalResult<PrimitiveValue>
where
    P: FloatingPointOperationProvider + ?Sized,
{
    use PrimitiveValue::*;

    match rhs {
        Byte(b) => match lhs {
            Float(a) => Ok(provider.float_with_byte(*a, *b)),
            Double(a) => Ok(provider.double_with_byte(*a, *b)),
            other => Err(EvalError::unknown_primitive(other)),
        },
        Short(b) => match lhs {
            Float(a) => Ok(provider.float_with_short(*a, *b)),
            Double(a) => Ok(provider.double_with_short(*a, *b)),
            other => Err(EvalError::unknown_primitive(other)),
        },
        Char(b) => match lhs {
            Float(a) => Ok(provider.float_with_char(*a, *b)),
            Double(a) => Ok(provider.double_with_char(*a, *b)),
            other => Err(EvalError::unknown_primitive(other)),
        },
        Int(b) => match lhs {
            Float(a) => Ok(provider.float_with_int(*a, *b)),
            Double(a) => Ok(provider.double_with_int(*a, *b)),
            other => Err(EvalError::unknown_primitive(other)),
        },
        Long(b) => match lhs {
            Float(a) => Ok(provider.float_with_long(*a, *b)),
            Double(a) => Ok(provider.double_with_long(*a, *b)),
            other => Err(EvalError::unknown_primitive(other)),
        },
        Float(b) => match lhs {
            Byte(a) => Ok(provider.byte_with_float(*a, *b)),
            Short(a) => Ok(provider.short_with_float(*a, *b)),
            Char(a) => Ok(provider.char_with_float(*a, *b)),
            Int(a) => Ok(provider.int_with_float(*a, *b)),
            Long(a) => Ok(provider.long_with_float(*a, *b)),
            Float(a) => Ok(provider.float_with_float(*a, *b)),
            Double(a) => Ok(provider.double_with_float(*a, *b)),
            other => Err(EvalError::unknown_primitive(other)),
        },
        Double(b) => match lhs {
            Byte(a) => Ok(provider.byte_with_double(*a, *b)),
            Short(a) => Ok(provider.short_with_double(*a, *b)),
            Char(a) => Ok(provider.char_with_double(*a, *b)),
            Int(a) => Ok(provider.int_with_double(*a, *b)),
            Long(a) => Ok(provider.long_with_double(*a, *b)),
            Float(a) => Ok(provider.float_with_double(*a, *b)),
            Double(a) => Ok(provider.double_with_double(*a, *b)),
            other => Err(EvalError::unknown_primitive(other)),
        },
        other => Err(EvalError::unknown_primitive(other)),
    }
}

//! Operator-level entry surface.
//!
//! This is what an expression evaluator actually calls: pick a
//! [`BinaryOperator`], hand over the two operand values, and let domain
//! selection plus pairwise dispatch find the right built-in provider slot.
//! Tracing lives here rather than in `dispatch`, which stays pure routing.

use std::fmt;

use javelin_primitives::PrimitiveValue;

use crate::dispatch::{apply_floating_point_operation, apply_integer_operation};
use crate::error::EvalResult;
use crate::ops::{
    Addition, Equal, GreaterOrEqual, GreaterThan, LessOrEqual, LessThan, Multiplication, NotEqual,
    Subtraction,
};
use crate::provider::{FloatingPointOperationProvider, IntegerOperationProvider};

/// Binary operators with a built-in provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    Equal,
    NotEqual,
}

impl BinaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Less => "<",
            BinaryOperator::LessOrEqual => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterOrEqual => ">=",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Applies `op` to two debuggee values with Java binary numeric promotion.
///
/// The floating-point domain is selected when either operand is `float` or
/// `double`, mirroring the JLS rule that a floating operand on either side
/// triggers floating promotion. Non-numeric operands fail with
/// [`crate::EvalError::UnknownPrimitive`].
pub fn apply_binary_operator(
    op: BinaryOperator,
    lhs: &PrimitiveValue,
    rhs: &PrimitiveValue,
) -> EvalResult<PrimitiveValue> {
    tracing::trace!(%op, %lhs, %rhs, "dispatching binary operator");
    match op {
        BinaryOperator::Add => route(&Addition, lhs, rhs),
        BinaryOperator::Subtract => route(&Subtraction, lhs, rhs),
        BinaryOperator::Multiply => route(&Multiplication, lhs, rhs),
        BinaryOperator::Less => route(&LessThan, lhs, rhs),
        BinaryOperator::LessOrEqual => route(&LessOrEqual, lhs, rhs),
        BinaryOperator::Greater => route(&GreaterThan, lhs, rhs),
        BinaryOperator::GreaterOrEqual => route(&GreaterOrEqual, lhs, rhs),
        BinaryOperator::Equal => route(&Equal, lhs, rhs),
        BinaryOperator::NotEqual => route(&NotEqual, lhs, rhs),
    }
}

fn route<P>(provider: &P, lhs: &PrimitiveValue, rhs: &PrimitiveValue) -> EvalResult<PrimitiveValue>
where
    P: IntegerOperationProvider + FloatingPointOperationProvider,
{
    if lhs.is_floating_point() || rhs.is_floating_point() {
        apply_floating_point_operation(provider, lhs, rhs)
    } else {
        apply_integer_operation(provider, lhs, rhs)
    }
}

//! Routing-matrix coverage for the dispatch entrypoints.
//!
//! The stub provider records every slot invocation (name plus the raw native
//! arguments) and tags its return value with the slot name, so each test can
//! assert both that exactly one slot fired and that the engine returned the
//! provider's result untouched.

use std::sync::Mutex;

use javelin_eval::provider::{FloatingPointOperationProvider, IntegerOperationProvider};
use javelin_eval::{
    apply_floating_point_operation, apply_integer_operation, ObjectRef, PrimitiveKind,
    PrimitiveValue,
};

#[derive(Default)]
struct RecordingProvider {
    calls: Mutex<Vec<String>>,
}

impl RecordingProvider {
    fn take_calls(&self) -> Vec<String> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }
}

/// Result value tagged with the provider slot that produced it.
fn slot_result(slot: &str) -> PrimitiveValue {
    PrimitiveValue::Object(ObjectRef {
        id: 0,
        runtime_type: slot.to_string(),
    })
}

macro_rules! recording_slots {
    ($trait_name:ident { $($method:ident($a:ty, $b:ty);)* }) => {
        impl $trait_name for RecordingProvider {
            $(
                fn $method(&self, lhs: $a, rhs: $b) -> PrimitiveValue {
                    self.calls
                        .lock()
                        .unwrap()
                        .push(format!("{}({lhs}, {rhs})", stringify!($method)));
                    slot_result(stringify!($method))
                }
            )*
        }
    };
}

recording_slots!(IntegerOperationProvider {
    byte_with_byte(i8, i8);
    byte_with_short(i8, i16);
    byte_with_char(i8, u16);
    byte_with_int(i8, i32);
    byte_with_long(i8, i64);
    short_with_byte(i16, i8);
    short_with_short(i16, i16);
    short_with_char(i16, u16);
    short_with_int(i16, i32);
    short_with_long(i16, i64);
    char_with_byte(u16, i8);
    char_with_short(u16, i16);
    char_with_char(u16, u16);
    char_with_int(u16, i32);
    char_with_long(u16, i64);
    int_with_byte(i32, i8);
    int_with_short(i32, i16);
    int_with_char(i32, u16);
    int_with_int(i32, i32);
    int_with_long(i32, i64);
    long_with_byte(i64, i8);
    long_with_short(i64, i16);
    long_with_char(i64, u16);
    long_with_int(i64, i32);
    long_with_long(i64, i64);
});

recording_slots!(FloatingPointOperationProvider {
    byte_with_float(i8, f32);
    short_with_float(i16, f32);
    char_with_float(u16, f32);
    int_with_float(i32, f32);
    long_with_float(i64, f32);
    float_with_float(f32, f32);
    double_with_float(f64, f32);
    byte_with_double(i8, f64);
    short_with_double(i16, f64);
    char_with_double(u16, f64);
    int_with_double(i32, f64);
    long_with_double(i64, f64);
    float_with_double(f32, f64);
    double_with_double(f64, f64);
    float_with_byte(f32, i8);
    float_with_short(f32, i16);
    float_with_char(f32, u16);
    float_with_int(f32, i32);
    float_with_long(f32, i64);
    double_with_byte(f64, i8);
    double_with_short(f64, i16);
    double_with_char(f64, u16);
    double_with_int(f64, i32);
    double_with_long(f64, i64);
});

const INTEGRAL: [PrimitiveKind; 5] = [
    PrimitiveKind::Byte,
    PrimitiveKind::Short,
    PrimitiveKind::Char,
    PrimitiveKind::Int,
    PrimitiveKind::Long,
];

const FLOATING: [PrimitiveKind; 2] = [PrimitiveKind::Float, PrimitiveKind::Double];

const ALL: [PrimitiveKind; 7] = [
    PrimitiveKind::Byte,
    PrimitiveKind::Short,
    PrimitiveKind::Char,
    PrimitiveKind::Int,
    PrimitiveKind::Long,
    PrimitiveKind::Float,
    PrimitiveKind::Double,
];

fn sample(kind: PrimitiveKind) -> PrimitiveValue {
    match kind {
        PrimitiveKind::Byte => PrimitiveValue::Byte(1),
        PrimitiveKind::Short => PrimitiveValue::Short(2),
        PrimitiveKind::Char => PrimitiveValue::Char(3),
        PrimitiveKind::Int => PrimitiveValue::Int(4),
        PrimitiveKind::Long => PrimitiveValue::Long(5),
        PrimitiveKind::Float => PrimitiveValue::Float(6.5),
        PrimitiveKind::Double => PrimitiveValue::Double(7.5),
    }
}

/// `Display` of the raw native payload `sample(kind)` carries.
fn sample_repr(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Byte => "1",
        PrimitiveKind::Short => "2",
        PrimitiveKind::Char => "3",
        PrimitiveKind::Int => "4",
        PrimitiveKind::Long => "5",
        PrimitiveKind::Float => "6.5",
        PrimitiveKind::Double => "7.5",
    }
}

fn expect_slot(provider: &RecordingProvider, result: &PrimitiveValue, lhs: PrimitiveKind, rhs: PrimitiveKind) {
    let slot = format!("{}_with_{}", lhs.name(), rhs.name());
    assert_eq!(
        *result,
        slot_result(&slot),
        "result should come from slot {slot}"
    );
    assert_eq!(
        provider.take_calls(),
        [format!("{slot}({}, {})", sample_repr(lhs), sample_repr(rhs))]
    );
}

#[test]
fn integer_matrix_routes_every_pair_to_its_own_slot() {
    let provider = RecordingProvider::default();
    for lhs in INTEGRAL {
        for rhs in INTEGRAL {
            let result =
                apply_integer_operation(&provider, &sample(lhs), &sample(rhs)).unwrap();
            expect_slot(&provider, &result, lhs, rhs);
        }
    }
}

#[test]
fn floating_point_matrix_routes_every_pair_to_its_own_slot() {
    let provider = RecordingProvider::default();
    // A floating right operand accepts all seven kinds on the left.
    for lhs in ALL {
        for rhs in FLOATING {
            let result =
                apply_floating_point_operation(&provider, &sample(lhs), &sample(rhs)).unwrap();
            expect_slot(&provider, &result, lhs, rhs);
        }
    }
    // An integral right operand only accepts a floating left operand.
    for lhs in FLOATING {
        for rhs in INTEGRAL {
            let result =
                apply_floating_point_operation(&provider, &sample(lhs), &sample(rhs)).unwrap();
            expect_slot(&provider, &result, lhs, rhs);
        }
    }
}

#[test]
fn dispatch_is_not_assumed_commutative() {
    let provider = RecordingProvider::default();

    let int_float =
        apply_floating_point_operation(&provider, &PrimitiveValue::Int(4), &PrimitiveValue::Float(6.5))
            .unwrap();
    let float_int =
        apply_floating_point_operation(&provider, &PrimitiveValue::Float(6.5), &PrimitiveValue::Int(4))
            .unwrap();

    assert_eq!(int_float, slot_result("int_with_float"));
    assert_eq!(float_int, slot_result("float_with_int"));
    assert_ne!(int_float, float_int);
    assert_eq!(
        provider.take_calls(),
        ["int_with_float(4, 6.5)", "float_with_int(6.5, 4)"]
    );
}

#[test]
fn int_with_byte_scenario() {
    let provider = RecordingProvider::default();
    let result =
        apply_integer_operation(&provider, &PrimitiveValue::Int(5), &PrimitiveValue::Byte(3))
            .unwrap();
    assert_eq!(result, slot_result("int_with_byte"));
    assert_eq!(provider.take_calls(), ["int_with_byte(5, 3)"]);
}

#[test]
fn double_with_int_scenario() {
    let provider = RecordingProvider::default();
    let result = apply_floating_point_operation(
        &provider,
        &PrimitiveValue::Double(2.5),
        &PrimitiveValue::Int(4),
    )
    .unwrap();
    assert_eq!(result, slot_result("double_with_int"));
    assert_eq!(provider.take_calls(), ["double_with_int(2.5, 4)"]);
}

#[test]
fn float_with_char_scenario() {
    let provider = RecordingProvider::default();
    let result = apply_floating_point_operation(
        &provider,
        &PrimitiveValue::Float(1.0),
        &PrimitiveValue::Char('A' as u16),
    )
    .unwrap();
    assert_eq!(result, slot_result("float_with_char"));
    assert_eq!(provider.take_calls(), ["float_with_char(1, 65)"]);
}

#[test]
fn integer_entrypoint_rejects_floating_operands() {
    let provider = RecordingProvider::default();

    let err =
        apply_integer_operation(&provider, &PrimitiveValue::Float(1.5), &PrimitiveValue::Int(1))
            .unwrap_err();
    assert_eq!(err.to_string(), "unknown primitive: float 1.5");

    let err =
        apply_integer_operation(&provider, &PrimitiveValue::Int(1), &PrimitiveValue::Double(0.5))
            .unwrap_err();
    assert_eq!(err.to_string(), "unknown primitive: double 0.5");

    assert!(provider.take_calls().is_empty(), "no slot may fire on the error path");
}

#[test]
fn floating_point_entrypoint_rejects_two_integral_operands() {
    let provider = RecordingProvider::default();
    for lhs in INTEGRAL {
        for rhs in INTEGRAL {
            let err = apply_floating_point_operation(&provider, &sample(lhs), &sample(rhs))
                .unwrap_err();
            // The right operand selects the table; the left operand is the one
            // with no legal entry.
            assert_eq!(
                err.to_string(),
                format!("unknown primitive: {}", sample(lhs).describe())
            );
        }
    }
    assert!(provider.take_calls().is_empty());
}

#[test]
fn non_numeric_operands_are_rejected_by_both_entrypoints() {
    let provider = RecordingProvider::default();
    let unknowns = [
        PrimitiveValue::Boolean(true),
        PrimitiveValue::Void,
        PrimitiveValue::Null,
        PrimitiveValue::Object(ObjectRef {
            id: 42,
            runtime_type: "java.lang.String".to_string(),
        }),
    ];

    for value in &unknowns {
        apply_integer_operation(&provider, value, &PrimitiveValue::Int(1)).unwrap_err();
        apply_integer_operation(&provider, &PrimitiveValue::Int(1), value).unwrap_err();
        apply_floating_point_operation(&provider, value, &PrimitiveValue::Float(1.0)).unwrap_err();
        apply_floating_point_operation(&provider, &PrimitiveValue::Float(1.0), value).unwrap_err();
    }

    let err = apply_integer_operation(&provider, &PrimitiveValue::Int(1), &unknowns[0])
        .unwrap_err();
    assert_eq!(err.to_string(), "unknown primitive: boolean true");
    assert!(provider.take_calls().is_empty());
}

#[test]
fn dispatch_is_idempotent_with_a_pure_provider() {
    let provider = RecordingProvider::default();
    let lhs = PrimitiveValue::Long(5);
    let rhs = PrimitiveValue::Char(3);

    let first = apply_integer_operation(&provider, &lhs, &rhs).unwrap();
    let second = apply_integer_operation(&provider, &lhs, &rhs).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        provider.take_calls(),
        ["long_with_char(5, 3)", "long_with_char(5, 3)"]
    );
}

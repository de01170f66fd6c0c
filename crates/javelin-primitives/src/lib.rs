//! Primitive value model for the Javelin expression evaluator.
//!
//! `javelin-eval` consumes this crate to route binary numeric operations over
//! values pulled out of a remote debuggee (stack frame slots, field reads,
//! array elements). The model is deliberately closed: the seven JVM numeric
//! primitive kinds carry their native-width payloads, and everything else a
//! debuggee can hand back (booleans, `void`, `null`, object references) is
//! representable so the dispatch layer can reject it explicitly instead of
//! panicking on an unexpected value.

use std::fmt;

pub type ObjectId = u64;

/// A value read from the debuggee.
///
/// `Char` holds the raw UTF-16 code unit exactly as JDWP transports it. A
/// debuggee `char` can be an unpaired surrogate, so the payload is `u16`
/// rather than a Rust `char`.
#[derive(Clone, Debug, PartialEq)]
pub enum PrimitiveValue {
    Byte(i8),
    Short(i16),
    Char(u16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
    Void,
    Null,
    Object(ObjectRef),
}

/// Reference to a debuggee-side object.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectRef {
    pub id: ObjectId,
    pub runtime_type: String,
}

/// The seven JVM numeric primitive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveKind {
    /// The Java keyword for this kind.
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    pub fn is_integral(self) -> bool {
        matches!(
            self,
            PrimitiveKind::Byte
                | PrimitiveKind::Short
                | PrimitiveKind::Char
                | PrimitiveKind::Int
                | PrimitiveKind::Long
        )
    }

    pub fn is_floating_point(self) -> bool {
        matches!(self, PrimitiveKind::Float | PrimitiveKind::Double)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl PrimitiveValue {
    /// Numeric kind of this value, or `None` for the non-numeric variants.
    pub fn kind(&self) -> Option<PrimitiveKind> {
        match self {
            PrimitiveValue::Byte(_) => Some(PrimitiveKind::Byte),
            PrimitiveValue::Short(_) => Some(PrimitiveKind::Short),
            PrimitiveValue::Char(_) => Some(PrimitiveKind::Char),
            PrimitiveValue::Int(_) => Some(PrimitiveKind::Int),
            PrimitiveValue::Long(_) => Some(PrimitiveKind::Long),
            PrimitiveValue::Float(_) => Some(PrimitiveKind::Float),
            PrimitiveValue::Double(_) => Some(PrimitiveKind::Double),
            PrimitiveValue::Boolean(_)
            | PrimitiveValue::Void
            | PrimitiveValue::Null
            | PrimitiveValue::Object(_) => None,
        }
    }

    pub fn is_integral(&self) -> bool {
        self.kind().is_some_and(PrimitiveKind::is_integral)
    }

    pub fn is_floating_point(&self) -> bool {
        self.kind().is_some_and(PrimitiveKind::is_floating_point)
    }

    /// Kind name plus rendered value, e.g. `"byte 3"` or `"boolean true"`.
    ///
    /// Used by `javelin-eval` to describe an operand it cannot dispatch on.
    pub fn describe(&self) -> String {
        let kind = match self {
            PrimitiveValue::Boolean(_) => "boolean",
            PrimitiveValue::Void => return "void".to_string(),
            PrimitiveValue::Null => return "null".to_string(),
            PrimitiveValue::Object(_) => "object",
            numeric => {
                // `kind()` is Some for every numeric variant.
                match numeric.kind() {
                    Some(kind) => kind.name(),
                    None => "unknown",
                }
            }
        };
        format!("{kind} {self}")
    }
}

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveValue::Byte(v) => write!(f, "{v}"),
            PrimitiveValue::Short(v) => write!(f, "{v}"),
            PrimitiveValue::Char(v) => match char::from_u32(u32::from(*v)) {
                Some(c) => write!(f, "'{c}'"),
                // Unpaired surrogate; render like javac's unicode escape.
                None => write!(f, "'\\u{v:04x}'"),
            },
            PrimitiveValue::Int(v) => write!(f, "{v}"),
            PrimitiveValue::Long(v) => write!(f, "{v}"),
            PrimitiveValue::Float(v) => write!(f, "{v}"),
            PrimitiveValue::Double(v) => write!(f, "{v}"),
            PrimitiveValue::Boolean(v) => write!(f, "{v}"),
            PrimitiveValue::Void => f.write_str("void"),
            PrimitiveValue::Null => f.write_str("null"),
            PrimitiveValue::Object(obj) => write!(f, "{} (id {})", obj.runtime_type, obj.id),
        }
    }
}

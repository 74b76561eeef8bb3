use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Width and signedness of an integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IntKind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
}

impl IntKind {
    pub fn is_signed(self) -> bool {
        matches!(
            self,
            IntKind::I8 | IntKind::I16 | IntKind::I32 | IntKind::I64 | IntKind::Isize
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IntKind::I8 => "i8",
            IntKind::I16 => "i16",
            IntKind::I32 => "i32",
            IntKind::I64 => "i64",
            IntKind::Isize => "isize",
            IntKind::U8 => "u8",
            IntKind::U16 => "u16",
            IntKind::U32 => "u32",
            IntKind::U64 => "u64",
            IntKind::Usize => "usize",
        }
    }
}

/// Precision of a floating point type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FloatKind {
    F32,
    F64,
}

impl FloatKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FloatKind::F32 => "f32",
            FloatKind::F64 => "f64",
        }
    }
}

/// Kinds that can be described but have no synthesis rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OpaqueKind {
    Chan,
    Func,
    Interface,
    UnsafePointer,
}

impl OpaqueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OpaqueKind::Chan => "chan",
            OpaqueKind::Func => "func",
            OpaqueKind::Interface => "interface",
            OpaqueKind::UnsafePointer => "unsafe_pointer",
        }
    }
}

/// Shape of a value to synthesize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDescriptor {
    Bool,
    Int {
        int: IntKind,
    },
    Float {
        float: FloatKind,
    },
    String,
    /// Calendar timestamp.
    Time,
    Pointer {
        to: Box<TypeDescriptor>,
    },
    Slice {
        of: Box<TypeDescriptor>,
    },
    Array {
        of: Box<TypeDescriptor>,
        len: usize,
    },
    Map {
        key: Box<TypeDescriptor>,
        value: Box<TypeDescriptor>,
    },
    Struct(StructDescriptor),
    /// Named alias of another type (`type Celsius float64`).
    Named {
        name: String,
        ty: Box<TypeDescriptor>,
    },
    Opaque {
        opaque: OpaqueKind,
    },
}

impl TypeDescriptor {
    pub fn int(kind: IntKind) -> Self {
        TypeDescriptor::Int { int: kind }
    }

    pub fn float(kind: FloatKind) -> Self {
        TypeDescriptor::Float { float: kind }
    }

    pub fn pointer(to: TypeDescriptor) -> Self {
        TypeDescriptor::Pointer { to: Box::new(to) }
    }

    pub fn slice(of: TypeDescriptor) -> Self {
        TypeDescriptor::Slice { of: Box::new(of) }
    }

    pub fn array(of: TypeDescriptor, len: usize) -> Self {
        TypeDescriptor::Array {
            of: Box::new(of),
            len,
        }
    }

    pub fn map(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        TypeDescriptor::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn named(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        TypeDescriptor::Named {
            name: name.into(),
            ty: Box::new(ty),
        }
    }

    pub fn opaque(kind: OpaqueKind) -> Self {
        TypeDescriptor::Opaque { opaque: kind }
    }

    /// Strips named aliases down to the underlying kind.
    pub fn resolved(&self) -> &TypeDescriptor {
        let mut current = self;
        while let TypeDescriptor::Named { ty, .. } = current {
            current = ty;
        }
        current
    }

    /// Declared type name, for named aliases and named structs.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            TypeDescriptor::Named { name, .. } => Some(name.as_str()),
            TypeDescriptor::Struct(desc) if !desc.name.is_empty() => Some(desc.name.as_str()),
            _ => None,
        }
    }

    /// Short kind label used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self.resolved() {
            TypeDescriptor::Bool => "bool",
            TypeDescriptor::Int { int } => int.as_str(),
            TypeDescriptor::Float { float } => float.as_str(),
            TypeDescriptor::String => "string",
            TypeDescriptor::Time => "time",
            TypeDescriptor::Pointer { .. } => "pointer",
            TypeDescriptor::Slice { .. } => "slice",
            TypeDescriptor::Array { .. } => "array",
            TypeDescriptor::Map { .. } => "map",
            TypeDescriptor::Struct(_) => "struct",
            TypeDescriptor::Named { .. } => "named",
            TypeDescriptor::Opaque { opaque } => opaque.as_str(),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Pointer { to } => write!(f, "*{to}"),
            TypeDescriptor::Slice { of } => write!(f, "[]{of}"),
            TypeDescriptor::Array { of, len } => write!(f, "[{len}]{of}"),
            TypeDescriptor::Map { key, value } => write!(f, "map[{key}]{value}"),
            TypeDescriptor::Struct(desc) if !desc.name.is_empty() => f.write_str(&desc.name),
            TypeDescriptor::Struct(_) => f.write_str("struct"),
            TypeDescriptor::Named { name, .. } => f.write_str(name),
            other => f.write_str(other.kind_name()),
        }
    }
}

/// Struct layout: ordered fields with their raw directives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StructDescriptor {
    #[serde(default)]
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl StructDescriptor {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// A single struct field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: TypeDescriptor,
    /// Raw directive text, e.g. `oneof:a,b,unique`.
    #[serde(default)]
    pub tag: String,
    /// Fields that cannot be set keep whatever value they already hold.
    #[serde(default = "default_settable")]
    pub settable: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
            tag: String::new(),
            settable: true,
        }
    }

    pub fn tagged(name: impl Into<String>, ty: TypeDescriptor, tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::new(name, ty)
        }
    }

    pub fn unsettable(mut self) -> Self {
        self.settable = false;
        self
    }
}

fn default_settable() -> bool {
    true
}

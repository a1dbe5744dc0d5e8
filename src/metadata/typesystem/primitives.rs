use std::fmt;

use strum::{EnumCount, EnumIter};

/// The primitive (single character) type descriptors of the DEX type system.
///
/// Every primitive descriptor is exactly one character long. Reference types (`L...;`) and
/// arrays (`[...`) are never primitives, which is why [`super::is_primitive_type`] can decide
/// primitiveness purely from the descriptor length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum PrimitiveType {
    /// `V` - only valid as a return type
    Void,
    /// `Z` - 8-bit boolean
    Boolean,
    /// `B` - 8-bit signed integer
    Byte,
    /// `S` - 16-bit signed integer
    Short,
    /// `C` - 16-bit UTF-16 code unit
    Char,
    /// `I` - 32-bit signed integer
    Int,
    /// `J` - 64-bit signed integer, occupies two registers
    Long,
    /// `F` - 32-bit IEEE754 float
    Float,
    /// `D` - 64-bit IEEE754 float, occupies two registers
    Double,
}

impl PrimitiveType {
    /// Returns the descriptor character for this primitive
    #[must_use]
    pub fn descriptor(&self) -> char {
        match self {
            PrimitiveType::Void => 'V',
            PrimitiveType::Boolean => 'Z',
            PrimitiveType::Byte => 'B',
            PrimitiveType::Short => 'S',
            PrimitiveType::Char => 'C',
            PrimitiveType::Int => 'I',
            PrimitiveType::Long => 'J',
            PrimitiveType::Float => 'F',
            PrimitiveType::Double => 'D',
        }
    }

    /// Returns the source-level keyword for this primitive (e.g. `int`)
    #[must_use]
    pub fn java_name(&self) -> &'static str {
        match self {
            PrimitiveType::Void => "void",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Char => "char",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }

    /// True for the 64-bit primitives (`J` and `D`)
    #[must_use]
    pub fn is_wide(&self) -> bool {
        matches!(self, PrimitiveType::Long | PrimitiveType::Double)
    }

    /// Parses a full descriptor string, which has to be exactly one primitive character
    #[must_use]
    pub fn from_descriptor(descriptor: &str) -> Option<Self> {
        let mut chars = descriptor.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => PrimitiveType::try_from(c).ok(),
            _ => None,
        }
    }
}

impl TryFrom<char> for PrimitiveType {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'V' => Ok(PrimitiveType::Void),
            'Z' => Ok(PrimitiveType::Boolean),
            'B' => Ok(PrimitiveType::Byte),
            'S' => Ok(PrimitiveType::Short),
            'C' => Ok(PrimitiveType::Char),
            'I' => Ok(PrimitiveType::Int),
            'J' => Ok(PrimitiveType::Long),
            'F' => Ok(PrimitiveType::Float),
            'D' => Ok(PrimitiveType::Double),
            other => Err(other),
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.java_name())
    }
}

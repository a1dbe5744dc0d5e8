//! Inspection and expansion of DEX type descriptor strings.
//!
//! Descriptors are the compact type encoding used throughout the DEX format: `I` for an int,
//! `Ljava/lang/String;` for a class, `[[J` for a two dimensional long array. Everything in
//! this module looks at the leading character only, except [`to_full_string`] which expands
//! the whole descriptor into its source form. No syntax validation takes place; malformed
//! descriptors produce best-effort results.

use crate::metadata::typesystem::PrimitiveType;

/// Leading character of an array descriptor
pub const TYPE_ARRAY: char = '[';
/// Leading character of an object descriptor
pub const TYPE_OBJECT: char = 'L';
/// Leading character of the 64-bit integer descriptor
pub const TYPE_LONG: char = 'J';
/// Leading character of the 64-bit float descriptor
pub const TYPE_DOUBLE: char = 'D';

/// Broad category of a type descriptor, decided by its first character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    /// `V`
    Void,
    /// Any primitive that fits into a single register
    Primitive,
    /// `J` or `D`, occupying two consecutive registers
    WidePrimitive,
    /// `L...;`
    Object,
    /// `[...`
    Array,
    /// Empty descriptor, or a leading character outside the DEX alphabet
    Unknown,
}

impl TypeCategory {
    /// Categorizes a descriptor from its leading character
    #[must_use]
    pub fn of(descriptor: &str) -> Self {
        match descriptor.chars().next() {
            Some(TYPE_ARRAY) => TypeCategory::Array,
            Some(TYPE_OBJECT) => TypeCategory::Object,
            Some(c) => match PrimitiveType::try_from(c) {
                Ok(PrimitiveType::Void) => TypeCategory::Void,
                Ok(p) if p.is_wide() => TypeCategory::WidePrimitive,
                Ok(_) => TypeCategory::Primitive,
                Err(_) => TypeCategory::Unknown,
            },
            None => TypeCategory::Unknown,
        }
    }

    /// True for object and array descriptors
    #[must_use]
    pub fn is_reference(&self) -> bool {
        matches!(self, TypeCategory::Object | TypeCategory::Array)
    }
}

/// Primitive descriptors are exactly one character long (`V` included).
#[must_use]
pub fn is_primitive_type(descriptor: &str) -> bool {
    descriptor.len() == 1
}

/// True if the descriptor starts with `J` or `D`
#[must_use]
pub fn is_wide_type(descriptor: &str) -> bool {
    matches!(descriptor.chars().next(), Some(TYPE_LONG | TYPE_DOUBLE))
}

/// True if the descriptor starts with `[`
#[must_use]
pub fn is_array_type(descriptor: &str) -> bool {
    descriptor.starts_with(TYPE_ARRAY)
}

/// Expands a descriptor into the conventional source-level type name.
///
/// Primitives become their keyword, classes have the `L`/`;` framing removed and package
/// separators turned into dots, arrays get one `[]` suffix per dimension. A descriptor that
/// cannot be expanded is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use dexscope::metadata::typesystem::to_full_string;
///
/// assert_eq!(to_full_string("I"), "int");
/// assert_eq!(to_full_string("Ljava/lang/String;"), "java.lang.String");
/// assert_eq!(to_full_string("[[J"), "long[][]");
/// ```
#[must_use]
pub fn to_full_string(descriptor: &str) -> String {
    let element = descriptor.trim_start_matches(TYPE_ARRAY);
    let dimensions = descriptor.len() - element.len();

    let mut full = if let Some(primitive) = PrimitiveType::from_descriptor(element) {
        primitive.java_name().to_string()
    } else if let Some(class) = element
        .strip_prefix(TYPE_OBJECT)
        .and_then(|rest| rest.strip_suffix(';'))
    {
        class.replace('/', ".")
    } else {
        return descriptor.to_string();
    };

    for _ in 0..dimensions {
        full.push_str("[]");
    }
    full
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category() {
        assert_eq!(TypeCategory::of("V"), TypeCategory::Void);
        assert_eq!(TypeCategory::of("I"), TypeCategory::Primitive);
        assert_eq!(TypeCategory::of("Z"), TypeCategory::Primitive);
        assert_eq!(TypeCategory::of("J"), TypeCategory::WidePrimitive);
        assert_eq!(TypeCategory::of("D"), TypeCategory::WidePrimitive);
        assert_eq!(TypeCategory::of("Lfoo/Bar;"), TypeCategory::Object);
        assert_eq!(TypeCategory::of("[J"), TypeCategory::Array);
        assert_eq!(TypeCategory::of("Q"), TypeCategory::Unknown);
        assert_eq!(TypeCategory::of(""), TypeCategory::Unknown);

        assert!(TypeCategory::Array.is_reference());
        assert!(!TypeCategory::WidePrimitive.is_reference());
    }

    #[test]
    fn test_predicates() {
        assert!(is_primitive_type("I"));
        assert!(is_primitive_type("V"));
        assert!(!is_primitive_type("[I"));
        assert!(!is_primitive_type("Ljava/lang/Object;"));

        assert!(is_wide_type("J"));
        assert!(is_wide_type("D"));
        assert!(!is_wide_type("[J"));
        assert!(!is_wide_type("Ljava/lang/Double;"));
        assert!(!is_wide_type(""));

        assert!(is_array_type("[Ljava/lang/Object;"));
        assert!(!is_array_type("Ljava/lang/Object;"));
    }

    #[test]
    fn test_full_string_primitives() {
        assert_eq!(to_full_string("V"), "void");
        assert_eq!(to_full_string("Z"), "boolean");
        assert_eq!(to_full_string("C"), "char");
        assert_eq!(to_full_string("D"), "double");
    }

    #[test]
    fn test_full_string_references() {
        assert_eq!(to_full_string("Lfoo/Bar;"), "foo.Bar");
        assert_eq!(to_full_string("LTopLevel;"), "TopLevel");
        assert_eq!(to_full_string("Lfoo/Outer$Inner;"), "foo.Outer$Inner");
        assert_eq!(to_full_string("[I"), "int[]");
        assert_eq!(
            to_full_string("[[Ljava/lang/String;"),
            "java.lang.String[][]"
        );
    }

    #[test]
    fn test_full_string_passthrough() {
        assert_eq!(to_full_string("Lunterminated"), "Lunterminated");
        assert_eq!(to_full_string("[Q"), "[Q");
        assert_eq!(to_full_string(""), "");
    }
}

//! Shorty descriptors.
//!
//! A shorty is the call shape of a method reduced to one character per type: the return
//! type first, then every parameter. Reference types (objects and arrays alike) collapse to
//! `L`, so methods that differ only in the classes they pass around share a shorty. DEX
//! stores it in every `proto_id_item`, and call-site resolution keys on it.

use crate::metadata::{method::MethodReference, typesystem::TYPE_OBJECT};

/// Shorty character of a single type descriptor.
///
/// Anything longer than one character is a reference and becomes `L`; a one-character
/// descriptor is kept as-is. An empty descriptor has no shorty character.
#[must_use]
pub fn shorty_type(type_descriptor: &str) -> Option<char> {
    let mut chars = type_descriptor.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        (Some(_), Some(_)) => Some(TYPE_OBJECT),
        (None, _) => None,
    }
}

/// Shorty of a signature: return type character followed by each parameter character.
///
/// # Examples
///
/// ```rust
/// use dexscope::metadata::method::shorty;
///
/// assert_eq!(shorty(["I", "Lfoo/Bar;", "[I"], "V"), "VILL");
/// assert_eq!(shorty(Vec::<&str>::new(), "J"), "J");
/// ```
#[must_use]
pub fn shorty<I, S>(parameter_types: I, return_type: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    shorty_type(return_type)
        .into_iter()
        .chain(
            parameter_types
                .into_iter()
                .filter_map(|ty| shorty_type(ty.as_ref())),
        )
        .collect()
}

/// Shorty of a call-site reference
#[must_use]
pub fn reference_shorty<R: MethodReference + ?Sized>(reference: &R) -> String {
    shorty(reference.parameter_types(), reference.return_type())
}

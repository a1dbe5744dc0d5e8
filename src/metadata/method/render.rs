//! Source-style rendering of method declarations.
//!
//! Produces strings such as `public static int parseInt(java.lang.String s, int radix)`.
//! Modifiers appear in canonical order, types are expanded to their source names, and
//! parameters whose debug names were stripped get a placeholder so every parameter is named.

use crate::metadata::{
    method::{Method, MethodParameter},
    typesystem::{is_array_type, is_primitive_type, to_full_string},
};

/// Placeholder for an unnamed primitive parameter
pub const PRIMITIVE_PLACEHOLDER: &str = "val";
/// Placeholder for an unnamed array parameter
pub const ARRAY_PLACEHOLDER: &str = "arr";
/// Placeholder for an unnamed object parameter
pub const OBJECT_PLACEHOLDER: &str = "obj";

/// Renders a method as a readable declaration.
///
/// # Examples
///
/// ```rust
/// use dexscope::metadata::{
///     accessflags::AccessFlags,
///     method::{to_source_style_string, MethodBuilder},
/// };
///
/// let method = MethodBuilder::new()
///     .access_flags(AccessFlags::PUBLIC | AccessFlags::STATIC)
///     .name("copyOf")
///     .return_type("[I")
///     .parameter("[I", None::<&str>)
///     .parameter("I", Some("newLength"))
///     .build()?;
///
/// assert_eq!(
///     to_source_style_string(&method),
///     "public static int[] copyOf(int[] arr, int newLength)"
/// );
/// # Ok::<(), dexscope::Error>(())
/// ```
#[must_use]
pub fn to_source_style_string<M: Method + ?Sized>(method: &M) -> String {
    let modifiers: String = method
        .access_flags()
        .for_method()
        .iter()
        .map(|flag| format!("{flag} "))
        .collect();

    let parameters = method
        .parameters()
        .iter()
        .map(render_parameter)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{modifiers}{} {}({parameters})",
        to_full_string(method.return_type()),
        method.name()
    )
}

/// Name used for a parameter without debug information
#[must_use]
pub fn placeholder_name(type_descriptor: &str) -> &'static str {
    if is_primitive_type(type_descriptor) {
        PRIMITIVE_PLACEHOLDER
    } else if is_array_type(type_descriptor) {
        ARRAY_PLACEHOLDER
    } else {
        OBJECT_PLACEHOLDER
    }
}

fn render_parameter<P: MethodParameter>(parameter: &P) -> String {
    let type_descriptor = parameter.type_descriptor();
    let name = parameter
        .name()
        .unwrap_or_else(|| placeholder_name(type_descriptor));

    format!("{} {name}", to_full_string(type_descriptor))
}

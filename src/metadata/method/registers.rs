//! Register accounting for method invocations.
//!
//! The arguments of a DEX call are passed in consecutive registers. `J` and `D` values take
//! two registers, everything else (narrow primitives, object and array references) takes one,
//! and instance methods receive `this` in one more register in front of the arguments. The
//! result must match the `ins_size` the callee reserves and the register range an
//! `invoke-*/range` instruction encodes.

use crate::metadata::{
    method::{classify::is_static, Method, MethodReference},
    typesystem::is_wide_type,
};

/// Number of registers a single argument of the given type occupies
#[must_use]
pub fn register_width(type_descriptor: &str) -> usize {
    if is_wide_type(type_descriptor) {
        2
    } else {
        1
    }
}

/// Number of registers the arguments of a call occupy, including the receiver of
/// non-static calls.
///
/// # Examples
///
/// ```rust
/// use dexscope::metadata::method::parameter_register_count;
///
/// let params = ["I", "J", "Lfoo/Bar;"];
/// assert_eq!(parameter_register_count(params, true), 4);
/// assert_eq!(parameter_register_count(params, false), 5);
/// ```
#[must_use]
pub fn parameter_register_count<I, S>(parameter_types: I, is_static: bool) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let arguments: usize = parameter_types
        .into_iter()
        .map(|ty| register_width(ty.as_ref()))
        .sum();

    if is_static {
        arguments
    } else {
        arguments + 1
    }
}

/// Register count for calling a declared method, staticness taken from its own flags
#[must_use]
pub fn method_parameter_register_count<M: Method + ?Sized>(method: &M) -> usize {
    parameter_register_count(method.parameter_types(), is_static(method))
}

/// Register count for a call-site reference; the caller knows whether the invoke is static
#[must_use]
pub fn reference_parameter_register_count<R: MethodReference + ?Sized>(
    reference: &R,
    is_static: bool,
) -> usize {
    parameter_register_count(reference.parameter_types(), is_static)
}

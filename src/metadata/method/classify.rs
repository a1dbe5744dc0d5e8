//! Dispatch kind and modifier predicates.
//!
//! Static, private and constructor methods can never be overridden, so DEX resolves them at
//! link time and stores them in the `direct_methods` list of a class; everything else goes
//! through virtual dispatch. Deciding which is which is a single mask test.

use crate::metadata::{
    accessflags::AccessFlags,
    method::{Method, MethodReference},
};

/// Flags that make a method direct
pub const DIRECT_MASK: AccessFlags = AccessFlags::STATIC
    .union(AccessFlags::PRIVATE)
    .union(AccessFlags::CONSTRUCTOR);

/// Name of the instance initializer
pub const CONSTRUCTOR_NAME: &str = "<init>";

/// True if the method is invoked without virtual dispatch
///
/// # Examples
///
/// ```rust
/// use dexscope::metadata::{accessflags::AccessFlags, method::{is_direct, MethodBuilder}};
///
/// let helper = MethodBuilder::new()
///     .access_flags(AccessFlags::PRIVATE)
///     .name("helper")
///     .return_type("V")
///     .build()?;
/// assert!(is_direct(&helper));
/// # Ok::<(), dexscope::Error>(())
/// ```
#[must_use]
pub fn is_direct<M: Method + ?Sized>(method: &M) -> bool {
    method.access_flags().intersects(DIRECT_MASK)
}

/// True if the method is resolved through virtual dispatch
#[must_use]
pub fn is_virtual<M: Method + ?Sized>(method: &M) -> bool {
    !is_direct(method)
}

/// True if the method has no body
#[must_use]
pub fn is_abstract<M: Method + ?Sized>(method: &M) -> bool {
    method.access_flags().contains(AccessFlags::ABSTRACT)
}

/// True if the method is an interface default method
#[must_use]
pub fn is_default<M: Method + ?Sized>(method: &M) -> bool {
    method.access_flags().contains(AccessFlags::DEFAULT)
}

/// True if the method takes no receiver
#[must_use]
pub fn is_static<M: Method + ?Sized>(method: &M) -> bool {
    method.access_flags().contains(AccessFlags::STATIC)
}

/// True if the reference names the instance initializer.
///
/// Only the name is compared, so this works on bare call-site references that carry no
/// flags. Static initializers (`<clinit>`) are not constructors.
#[must_use]
pub fn is_constructor<R: MethodReference + ?Sized>(reference: &R) -> bool {
    reference.name() == CONSTRUCTOR_NAME
}

/// Splits methods into the direct and virtual lists of a class, keeping their order
pub fn partition_methods<'a, M, I>(methods: I) -> (Vec<&'a M>, Vec<&'a M>)
where
    M: Method + 'a,
    I: IntoIterator<Item = &'a M>,
{
    methods.into_iter().partition(|method| is_direct(*method))
}

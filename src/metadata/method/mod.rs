//! Method metadata derivation for DEX methods.
//!
//! Given a method's access flags, name, return type and parameter list, this module answers
//! the questions that disassemblers, verifiers and code generators ask about it:
//!
//! - [`classify`]: direct or virtual dispatch, abstract / default / static / constructor
//! - [`registers`]: how many registers the arguments of a call occupy
//! - [`shorty`]: the compact one-letter-per-type call shape
//! - [`render`]: a readable, source-style declaration
//!
//! All of these are pure functions over the [`Method`], [`MethodReference`] and
//! [`MethodParameter`] abstractions. The DEX reader (or any other producer) implements the
//! traits; [`ImmutableMethod`] and friends are owned implementations for callers that do not
//! have their own.
//!
//! # Examples
//!
//! ```rust
//! use dexscope::metadata::{
//!     accessflags::AccessFlags,
//!     method::{
//!         is_direct, method_parameter_register_count, shorty, to_source_style_string,
//!         MethodBuilder, MethodReference,
//!     },
//! };
//!
//! let method = MethodBuilder::new()
//!     .access_flags(AccessFlags::PUBLIC | AccessFlags::STATIC)
//!     .name("max")
//!     .return_type("J")
//!     .parameter("J", Some("a"))
//!     .parameter("J", Some("b"))
//!     .build()?;
//!
//! assert!(is_direct(&method));
//! assert_eq!(method_parameter_register_count(&method), 4);
//! assert_eq!(shorty(method.parameter_types(), method.return_type()), "JJJ");
//! assert_eq!(
//!     to_source_style_string(&method),
//!     "public static long max(long a, long b)"
//! );
//! # Ok::<(), dexscope::Error>(())
//! ```

pub mod classify;
pub mod registers;
pub mod render;
pub mod shorty;
mod types;

pub use classify::{
    is_abstract, is_constructor, is_default, is_direct, is_static, is_virtual,
    partition_methods, CONSTRUCTOR_NAME, DIRECT_MASK,
};
pub use registers::{
    method_parameter_register_count, parameter_register_count,
    reference_parameter_register_count, register_width,
};
pub use render::to_source_style_string;
pub use shorty::{reference_shorty, shorty, shorty_type};
pub use types::{
    ImmutableMethod, ImmutableMethodParameter, ImmutableMethodReference, MethodBuilder,
    MethodReferenceBuilder,
};

use crate::metadata::accessflags::AccessFlags;

/// A single declared parameter of a method
pub trait MethodParameter {
    /// Type descriptor of the parameter (e.g. `I`, `Ljava/lang/String;`)
    fn type_descriptor(&self) -> &str;

    /// Source-level name, if debug information kept it
    fn name(&self) -> Option<&str>;
}

/// The signature side of a method, as seen from a call site.
///
/// No access flags are available through a reference; call sites only know what they
/// invoke, not how it was declared.
pub trait MethodReference {
    /// Simple name of the method (e.g. `toString`, `<init>`)
    fn name(&self) -> &str;

    /// Return type descriptor
    fn return_type(&self) -> &str;

    /// Parameter type descriptors in declaration order, excluding the receiver
    fn parameter_types(&self) -> Vec<&str>;
}

/// A declared method, with its modifiers and parameters
pub trait Method: MethodReference {
    /// Concrete parameter representation
    type Parameter: MethodParameter;

    /// Access flags from the method's `encoded_method` entry
    fn access_flags(&self) -> AccessFlags;

    /// Parameters in declaration order, excluding the receiver
    fn parameters(&self) -> &[Self::Parameter];
}

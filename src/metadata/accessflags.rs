//! Access flags of DEX classes, fields and methods.
//!
//! The DEX format stores modifiers as a single `u32` bitmask. Some bits carry a different
//! meaning depending on what they are attached to (`0x40` is `bridge` on a method but
//! `volatile` on a field), so the mask alone is not enough to produce keywords. This module
//! provides both views:
//!
//! - [`AccessFlags`]: the raw bitmask, composed and tested with the usual set operations
//! - [`AccessFlag`]: the named flags in canonical declaration order, each knowing its bit,
//!   its keyword and which targets it is valid for
//!
//! # Examples
//!
//! ```rust
//! use dexscope::metadata::accessflags::{AccessFlag, AccessFlags};
//!
//! let flags = AccessFlags::PUBLIC | AccessFlags::STATIC | AccessFlags::VARARGS;
//! assert_eq!(
//!     flags.for_method(),
//!     vec![AccessFlag::Public, AccessFlag::Static, AccessFlag::Varargs]
//! );
//! assert_eq!(flags.format_for_field(), "public static transient");
//! ```

use bitflags::bitflags;
use strum::{EnumCount, EnumIter, IntoEnumIterator};
use tracing::warn;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Access flag bitmask as stored in `access_flags` of DEX class, field and method items
    pub struct AccessFlags: u32 {
        /// Visible everywhere
        const PUBLIC = 0x0001;
        /// Only visible to the defining class
        const PRIVATE = 0x0002;
        /// Visible to the package and subclasses
        const PROTECTED = 0x0004;
        /// Not constructed with an outer `this` / no receiver
        const STATIC = 0x0008;
        /// Not subclassable / overridable / assignable after construction
        const FINAL = 0x0010;
        /// Method: lock acquired around the call (native methods only in DEX)
        const SYNCHRONIZED = 0x0020;
        /// Field: special access rules for thread safety
        const VOLATILE = 0x0040;
        /// Method: compiler generated, type-safe bridge
        const BRIDGE = 0x0040;
        /// Field: not saved by default serialization
        const TRANSIENT = 0x0080;
        /// Method: last argument is a "rest" argument
        const VARARGS = 0x0080;
        /// Method: implemented in native code
        const NATIVE = 0x0100;
        /// Class: multiply-implementable abstract class
        const INTERFACE = 0x0200;
        /// Class or method: not directly instantiable / no body
        const ABSTRACT = 0x0400;
        /// Method: strict floating point rules
        const STRICTFP = 0x0800;
        /// Not directly defined in source
        const SYNTHETIC = 0x1000;
        /// Class: declared as an annotation
        const ANNOTATION = 0x2000;
        /// Class or field: enumerated type or value
        const ENUM = 0x4000;
        /// Method: constructor or static initializer
        const CONSTRUCTOR = 0x1_0000;
        /// Method: declared `synchronized` in source
        const DECLARED_SYNCHRONIZED = 0x2_0000;
        /// Method: interface default method, set by the runtime
        const DEFAULT = 0x40_0000;
    }
}

impl AccessFlags {
    /// Builds a flag set from a raw `access_flags` value, dropping bits that carry no
    /// known meaning
    #[must_use]
    pub fn from_raw(raw: u32) -> Self {
        let flags = Self::from_bits_truncate(raw);
        let unknown = raw & !Self::all().bits();
        if unknown != 0 {
            warn!("Dropping unknown access flag bits {unknown:#x} from {raw:#x}");
        }
        flags
    }

    /// Named flags present in this mask which are valid on a method, in canonical order
    #[must_use]
    pub fn for_method(self) -> Vec<AccessFlag> {
        self.collect_valid(AccessFlag::is_valid_for_method)
    }

    /// Named flags present in this mask which are valid on a field, in canonical order
    #[must_use]
    pub fn for_field(self) -> Vec<AccessFlag> {
        self.collect_valid(AccessFlag::is_valid_for_field)
    }

    /// Named flags present in this mask which are valid on a class, in canonical order
    #[must_use]
    pub fn for_class(self) -> Vec<AccessFlag> {
        self.collect_valid(AccessFlag::is_valid_for_class)
    }

    /// Method keywords joined by single spaces
    #[must_use]
    pub fn format_for_method(self) -> String {
        join_keywords(&self.for_method())
    }

    /// Field keywords joined by single spaces
    #[must_use]
    pub fn format_for_field(self) -> String {
        join_keywords(&self.for_field())
    }

    /// Class keywords joined by single spaces
    #[must_use]
    pub fn format_for_class(self) -> String {
        join_keywords(&self.for_class())
    }

    fn collect_valid(self, valid: fn(&AccessFlag) -> bool) -> Vec<AccessFlag> {
        AccessFlag::iter()
            .filter(|flag| valid(flag) && self.contains(flag.value()))
            .collect()
    }
}

impl Default for AccessFlags {
    fn default() -> Self {
        AccessFlags::empty()
    }
}

fn join_keywords(flags: &[AccessFlag]) -> String {
    flags
        .iter()
        .map(AccessFlag::keyword)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A single named access flag.
///
/// The variant order is the canonical modifier order used when rendering declarations.
/// `Display` yields the keyword (e.g. `declared-synchronized`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum AccessFlag {
    /// `public`
    Public,
    /// `private`
    Private,
    /// `protected`
    Protected,
    /// `static`
    Static,
    /// `final`
    Final,
    /// `synchronized`
    Synchronized,
    /// `volatile`
    Volatile,
    /// `bridge`
    Bridge,
    /// `transient`
    Transient,
    /// `varargs`
    Varargs,
    /// `native`
    Native,
    /// `interface`
    Interface,
    /// `abstract`
    Abstract,
    /// `strictfp`
    Strictfp,
    /// `synthetic`
    Synthetic,
    /// `annotation`
    Annotation,
    /// `enum`
    Enum,
    /// `constructor`
    Constructor,
    /// `declared-synchronized`
    DeclaredSynchronized,
    /// `default`; runtime marker only, never rendered as a keyword
    Default,
}

impl AccessFlag {
    /// The bit this flag occupies
    #[must_use]
    pub fn value(&self) -> AccessFlags {
        match self {
            AccessFlag::Public => AccessFlags::PUBLIC,
            AccessFlag::Private => AccessFlags::PRIVATE,
            AccessFlag::Protected => AccessFlags::PROTECTED,
            AccessFlag::Static => AccessFlags::STATIC,
            AccessFlag::Final => AccessFlags::FINAL,
            AccessFlag::Synchronized => AccessFlags::SYNCHRONIZED,
            AccessFlag::Volatile => AccessFlags::VOLATILE,
            AccessFlag::Bridge => AccessFlags::BRIDGE,
            AccessFlag::Transient => AccessFlags::TRANSIENT,
            AccessFlag::Varargs => AccessFlags::VARARGS,
            AccessFlag::Native => AccessFlags::NATIVE,
            AccessFlag::Interface => AccessFlags::INTERFACE,
            AccessFlag::Abstract => AccessFlags::ABSTRACT,
            AccessFlag::Strictfp => AccessFlags::STRICTFP,
            AccessFlag::Synthetic => AccessFlags::SYNTHETIC,
            AccessFlag::Annotation => AccessFlags::ANNOTATION,
            AccessFlag::Enum => AccessFlags::ENUM,
            AccessFlag::Constructor => AccessFlags::CONSTRUCTOR,
            AccessFlag::DeclaredSynchronized => AccessFlags::DECLARED_SYNCHRONIZED,
            AccessFlag::Default => AccessFlags::DEFAULT,
        }
    }

    /// The source keyword of this flag
    #[must_use]
    pub fn keyword(&self) -> String {
        self.to_string()
    }

    /// True if the flag may appear on a method
    #[must_use]
    pub fn is_valid_for_method(&self) -> bool {
        matches!(
            self,
            AccessFlag::Public
                | AccessFlag::Private
                | AccessFlag::Protected
                | AccessFlag::Static
                | AccessFlag::Final
                | AccessFlag::Synchronized
                | AccessFlag::Bridge
                | AccessFlag::Varargs
                | AccessFlag::Native
                | AccessFlag::Abstract
                | AccessFlag::Strictfp
                | AccessFlag::Synthetic
                | AccessFlag::Constructor
                | AccessFlag::DeclaredSynchronized
        )
    }

    /// True if the flag may appear on a field
    #[must_use]
    pub fn is_valid_for_field(&self) -> bool {
        matches!(
            self,
            AccessFlag::Public
                | AccessFlag::Private
                | AccessFlag::Protected
                | AccessFlag::Static
                | AccessFlag::Final
                | AccessFlag::Volatile
                | AccessFlag::Transient
                | AccessFlag::Synthetic
                | AccessFlag::Enum
        )
    }

    /// True if the flag may appear on a class
    #[must_use]
    pub fn is_valid_for_class(&self) -> bool {
        matches!(
            self,
            AccessFlag::Public
                | AccessFlag::Private
                | AccessFlag::Protected
                | AccessFlag::Static
                | AccessFlag::Final
                | AccessFlag::Interface
                | AccessFlag::Abstract
                | AccessFlag::Synthetic
                | AccessFlag::Annotation
                | AccessFlag::Enum
        )
    }
}

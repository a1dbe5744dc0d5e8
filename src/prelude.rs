//! # dexscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and functions
//! from the dexscope library. Import this module to get quick access to everything needed
//! for deriving DEX method metadata.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all dexscope operations
pub use crate::Error;

/// The result type used throughout dexscope
pub use crate::Result;

// ================================================================================================
// Access Flags and Type Descriptors
// ================================================================================================

/// Access flag bitmask and named flags
pub use crate::metadata::accessflags::{AccessFlag, AccessFlags};

/// Type descriptor helpers
pub use crate::metadata::typesystem::{
    is_array_type, is_primitive_type, is_wide_type, to_full_string, PrimitiveType, TypeCategory,
};

// ================================================================================================
// Method Model
// ================================================================================================

/// Method abstractions implemented by descriptor producers
pub use crate::metadata::method::{Method, MethodParameter, MethodReference};

/// Owned method descriptors and their builders
pub use crate::metadata::method::{
    ImmutableMethod, ImmutableMethodParameter, ImmutableMethodReference, MethodBuilder,
    MethodReferenceBuilder,
};

// ================================================================================================
// Method Metadata Derivation
// ================================================================================================

/// Dispatch kind and modifier predicates
pub use crate::metadata::method::{
    is_abstract, is_constructor, is_default, is_direct, is_static, is_virtual,
    partition_methods, CONSTRUCTOR_NAME, DIRECT_MASK,
};

/// Register accounting
pub use crate::metadata::method::{
    method_parameter_register_count, parameter_register_count,
    reference_parameter_register_count, register_width,
};

/// Shorty descriptors
pub use crate::metadata::method::{reference_shorty, shorty, shorty_type};

/// Source-style rendering
pub use crate::metadata::method::to_source_style_string;

//! DEX type descriptors.
//!
//! The DEX format describes every type by a descriptor string whose first character decides
//! the category. This module offers the small amount of type knowledge the method metadata
//! layer needs: the primitive table, category inspection, and expansion of a descriptor into
//! its readable source form.
//!
//! # Key Components
//!
//! - [`PrimitiveType`]: The nine single-character primitive descriptors
//! - [`TypeCategory`]: Void / primitive / wide / object / array classification
//! - [`to_full_string`]: Descriptor to source name expansion
//!
//! # Examples
//!
//! ```rust
//! use dexscope::metadata::typesystem::{to_full_string, TypeCategory};
//!
//! assert_eq!(TypeCategory::of("J"), TypeCategory::WidePrimitive);
//! assert_eq!(to_full_string("[Landroid/os/Bundle;"), "android.os.Bundle[]");
//! ```

mod descriptor;
mod primitives;

pub use descriptor::{
    is_array_type, is_primitive_type, is_wide_type, to_full_string, TypeCategory, TYPE_ARRAY,
    TYPE_DOUBLE, TYPE_LONG, TYPE_OBJECT,
};
pub use primitives::PrimitiveType;

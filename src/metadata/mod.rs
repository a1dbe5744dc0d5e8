//! Metadata of DEX methods and the building blocks it is derived from.
//!
//! # Key Components
//!
//! - [`accessflags`] - Access flag bitmask and per-target modifier keywords
//! - [`typesystem`] - Type descriptor inspection and expansion
//! - [`method`] - Method classification, register accounting, shorty descriptors and
//!   source-style rendering
//!
//! # Examples
//!
//! ```rust
//! use dexscope::metadata::{
//!     accessflags::AccessFlags,
//!     method::{is_virtual, reference_shorty, MethodBuilder},
//! };
//!
//! let method = MethodBuilder::new()
//!     .access_flags(AccessFlags::PUBLIC)
//!     .name("equals")
//!     .return_type("Z")
//!     .parameter("Ljava/lang/Object;", Some("other"))
//!     .build()?;
//!
//! assert!(is_virtual(&method));
//! assert_eq!(reference_shorty(&method), "ZL");
//! # Ok::<(), dexscope::Error>(())
//! ```

/// Implementation of the DEX access flags
pub mod accessflags;
/// Implementation of method metadata derivation
pub mod method;
/// Implementation of DEX type descriptors
pub mod typesystem;

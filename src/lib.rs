// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # dexscope
//!
//! Method metadata derivation for Android DEX bytecode.
//!
//! Disassemblers, verifiers and code generators keep asking the same handful of questions
//! about a method: is it dispatched directly or virtually, how many registers do its
//! arguments take, what is its shorty, what does its declaration look like. `dexscope`
//! answers them from nothing more than the method's access flags, name, return type and
//! parameter types, with pure functions that are safe to call from any thread.
//!
//! ## Quick Start
//!
//! ```rust
//! use dexscope::prelude::*;
//!
//! let method = MethodBuilder::new()
//!     .access_flags(AccessFlags::PUBLIC)
//!     .name("substring")
//!     .return_type("Ljava/lang/String;")
//!     .parameter("I", Some("beginIndex"))
//!     .parameter("I", Some("endIndex"))
//!     .build()?;
//!
//! assert!(is_virtual(&method));
//! assert_eq!(method_parameter_register_count(&method), 3);
//! assert_eq!(reference_shorty(&method), "LII");
//! assert_eq!(
//!     to_source_style_string(&method),
//!     "public java.lang.String substring(int beginIndex, int endIndex)"
//! );
//! # Ok::<(), dexscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and functions
//! - [`metadata::accessflags`] - Access flag bitmask and modifier keywords
//! - [`metadata::typesystem`] - Type descriptor inspection and expansion
//! - [`metadata::method`] - Classification, register accounting, shorty, rendering
//! - [`Error`] and [`Result`] - Error handling for the construction boundary
//!
//! ## Error Handling
//!
//! The derivation functions are total and return plain values. Only the builders, which
//! check that names and type descriptors are non-empty, return [`Result`]:
//!
//! ```rust
//! use dexscope::{Error, metadata::method::MethodReferenceBuilder};
//!
//! match MethodReferenceBuilder::new().return_type("V").build() {
//!     Ok(_) => println!("built"),
//!     Err(Error::Empty(what)) => println!("missing {}", what),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use dexscope::prelude::*;
///
/// assert_eq!(shorty(["I", "[J"], "V"), "VIL");
/// ```
pub mod prelude;

/// Access flags, type descriptors and method metadata derivation for DEX methods
pub mod metadata;

/// `dexscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `dexscope` Error type
///
/// The main error type for all fallible operations in this crate.
pub use error::Error;

use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// The derivation functions in [`crate::metadata::method`] are total and never fail. Errors only
/// surface at the construction boundary, when owned method descriptors are assembled through
/// [`crate::metadata::method::MethodBuilder`] or
/// [`crate::metadata::method::MethodReferenceBuilder`].
///
/// # Examples
///
/// ```rust
/// use dexscope::{Error, metadata::method::MethodBuilder};
///
/// match MethodBuilder::new().name("run").return_type("").build() {
///     Ok(_) => unreachable!(),
///     Err(Error::Malformed { message, .. }) => {
///         assert!(message.contains("return type"));
///     }
///     Err(e) => panic!("unexpected error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A descriptor is damaged and could not be used.
    ///
    /// Raised when a name or type descriptor handed to a builder is unusable, such as an
    /// empty type descriptor. The error includes the source location where the malformation
    /// was detected for debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// A required value was never provided.
    ///
    /// Raised by builders when `build()` is called before a mandatory field, such as the
    /// method name, was set.
    #[error("Required value was not provided - {0}")]
    Empty(&'static str),
}

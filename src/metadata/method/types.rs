//! Owned method, method reference and parameter descriptors plus their builders.
//!
//! These are plain immutable values implementing [`Method`], [`MethodReference`] and
//! [`MethodParameter`]. The builders are the one place where inputs get checked: names and
//! type descriptors must be non-empty, since every derivation function downstream inspects
//! at least the first character of a descriptor.

use std::fmt;

use tracing::debug;

use crate::{
    metadata::{
        accessflags::AccessFlags,
        method::{render::to_source_style_string, Method, MethodParameter, MethodReference},
    },
    Error, Result,
};

/// Owned [`MethodParameter`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImmutableMethodParameter {
    /// Type descriptor
    pub type_descriptor: String,
    /// Debug name, if one was recorded
    pub name: Option<String>,
}

impl ImmutableMethodParameter {
    /// Creates a new parameter
    #[must_use]
    pub fn new(type_descriptor: impl Into<String>, name: Option<impl Into<String>>) -> Self {
        ImmutableMethodParameter {
            type_descriptor: type_descriptor.into(),
            name: name.map(Into::into),
        }
    }
}

impl MethodParameter for ImmutableMethodParameter {
    fn type_descriptor(&self) -> &str {
        &self.type_descriptor
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Owned [`MethodReference`], as found in a `method_id_item` referenced from a call site
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImmutableMethodReference {
    /// Simple method name
    pub name: String,
    /// Return type descriptor
    pub return_type: String,
    /// Parameter type descriptors
    pub parameter_types: Vec<String>,
}

impl MethodReference for ImmutableMethodReference {
    fn name(&self) -> &str {
        &self.name
    }

    fn return_type(&self) -> &str {
        &self.return_type
    }

    fn parameter_types(&self) -> Vec<&str> {
        self.parameter_types.iter().map(String::as_str).collect()
    }
}

impl fmt::Display for ImmutableMethodReference {
    /// Prototype notation, e.g. `max(JJ)J`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}){}",
            self.name,
            self.parameter_types.concat(),
            self.return_type
        )
    }
}

/// Owned [`Method`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImmutableMethod {
    /// Access flags
    pub access_flags: AccessFlags,
    /// Simple method name
    pub name: String,
    /// Return type descriptor
    pub return_type: String,
    /// Declared parameters
    pub parameters: Vec<ImmutableMethodParameter>,
}

impl ImmutableMethod {
    /// Strips modifiers and parameter names, leaving what a call site would see
    #[must_use]
    pub fn to_reference(&self) -> ImmutableMethodReference {
        ImmutableMethodReference {
            name: self.name.clone(),
            return_type: self.return_type.clone(),
            parameter_types: self
                .parameters
                .iter()
                .map(|param| param.type_descriptor.clone())
                .collect(),
        }
    }
}

impl MethodReference for ImmutableMethod {
    fn name(&self) -> &str {
        &self.name
    }

    fn return_type(&self) -> &str {
        &self.return_type
    }

    fn parameter_types(&self) -> Vec<&str> {
        self.parameters
            .iter()
            .map(|param| param.type_descriptor.as_str())
            .collect()
    }
}

impl Method for ImmutableMethod {
    type Parameter = ImmutableMethodParameter;

    fn access_flags(&self) -> AccessFlags {
        self.access_flags
    }

    fn parameters(&self) -> &[ImmutableMethodParameter] {
        &self.parameters
    }
}

impl fmt::Display for ImmutableMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_source_style_string(self))
    }
}

/// Builder for [`ImmutableMethod`]
///
/// # Required Fields
/// - `name`
/// - `return_type`
///
/// Access flags default to none, parameters to an empty list.
///
/// # Examples
///
/// ```rust
/// use dexscope::metadata::{accessflags::AccessFlags, method::MethodBuilder};
///
/// let method = MethodBuilder::new()
///     .access_flags(AccessFlags::PUBLIC)
///     .name("setTitle")
///     .return_type("V")
///     .parameter("Ljava/lang/CharSequence;", None::<&str>)
///     .build()?;
///
/// assert_eq!(method.to_string(), "public void setTitle(java.lang.CharSequence obj)");
/// # Ok::<(), dexscope::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MethodBuilder {
    access_flags: AccessFlags,
    name: Option<String>,
    return_type: Option<String>,
    parameters: Vec<ImmutableMethodParameter>,
}

impl MethodBuilder {
    /// Creates a new `MethodBuilder` with no flags and no parameters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access flags
    #[must_use]
    pub fn access_flags(mut self, access_flags: AccessFlags) -> Self {
        self.access_flags = access_flags;
        self
    }

    /// Sets the method name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the return type descriptor
    #[must_use]
    pub fn return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    /// Appends a parameter
    #[must_use]
    pub fn parameter(
        mut self,
        type_descriptor: impl Into<String>,
        name: Option<impl Into<String>>,
    ) -> Self {
        self.parameters
            .push(ImmutableMethodParameter::new(type_descriptor, name));
        self
    }

    /// Validates the collected values and produces the method
    ///
    /// # Errors
    /// - [`Error::Empty`] if the name or return type was never set
    /// - [`Error::Malformed`] if the name, the return type or a parameter type is empty
    pub fn build(self) -> Result<ImmutableMethod> {
        let (name, return_type) = check_signature(self.name, self.return_type)?;
        check_parameter_types(
            self.parameters
                .iter()
                .map(|param| param.type_descriptor.as_str()),
        )?;

        Ok(ImmutableMethod {
            access_flags: self.access_flags,
            name,
            return_type,
            parameters: self.parameters,
        })
    }
}

/// Builder for [`ImmutableMethodReference`]
///
/// # Required Fields
/// - `name`
/// - `return_type`
#[derive(Debug, Clone, Default)]
pub struct MethodReferenceBuilder {
    name: Option<String>,
    return_type: Option<String>,
    parameter_types: Vec<String>,
}

impl MethodReferenceBuilder {
    /// Creates a new, empty `MethodReferenceBuilder`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the method name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the return type descriptor
    #[must_use]
    pub fn return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    /// Appends a parameter type descriptor
    #[must_use]
    pub fn parameter_type(mut self, type_descriptor: impl Into<String>) -> Self {
        self.parameter_types.push(type_descriptor.into());
        self
    }

    /// Validates the collected values and produces the reference
    ///
    /// # Errors
    /// - [`Error::Empty`] if the name or return type was never set
    /// - [`Error::Malformed`] if the name, the return type or a parameter type is empty
    pub fn build(self) -> Result<ImmutableMethodReference> {
        let (name, return_type) = check_signature(self.name, self.return_type)?;
        check_parameter_types(self.parameter_types.iter().map(String::as_str))?;

        Ok(ImmutableMethodReference {
            name,
            return_type,
            parameter_types: self.parameter_types,
        })
    }
}

fn check_signature(
    name: Option<String>,
    return_type: Option<String>,
) -> Result<(String, String)> {
    let name = name.ok_or(Error::Empty("method name"))?;
    let return_type = return_type.ok_or(Error::Empty("return type"))?;

    if name.is_empty() {
        debug!("Rejecting method with an empty name");
        return Err(malformed_error!("Method name is empty"));
    }
    if return_type.is_empty() {
        debug!("Rejecting method {name} with an empty return type");
        return Err(malformed_error!(
            "Method {} has an empty return type descriptor",
            name
        ));
    }

    Ok((name, return_type))
}

fn check_parameter_types<'a>(types: impl Iterator<Item = &'a str>) -> Result<()> {
    for (index, type_descriptor) in types.enumerate() {
        if type_descriptor.is_empty() {
            debug!("Rejecting parameter {index} with an empty type descriptor");
            return Err(malformed_error!(
                "Parameter {} has an empty type descriptor",
                index
            ));
        }
    }
    Ok(())
}

use crate::metadata::{
    accessflags::AccessFlags,
    method::{ImmutableMethod, ImmutableMethodParameter, ImmutableMethodReference},
};

// Helper function to create a method whose parameters carry no debug names
pub fn create_method(
    access_flags: AccessFlags,
    name: &str,
    return_type: &str,
    parameter_types: &[&str],
) -> ImmutableMethod {
    let parameters: Vec<(&str, Option<&str>)> =
        parameter_types.iter().map(|ty| (*ty, None)).collect();
    create_named_method(access_flags, name, return_type, &parameters)
}

// Helper function to create a method with (type, name) parameter pairs
pub fn create_named_method(
    access_flags: AccessFlags,
    name: &str,
    return_type: &str,
    parameters: &[(&str, Option<&str>)],
) -> ImmutableMethod {
    ImmutableMethod {
        access_flags,
        name: name.to_string(),
        return_type: return_type.to_string(),
        parameters: parameters
            .iter()
            .map(|(ty, param_name)| ImmutableMethodParameter::new(*ty, *param_name))
            .collect(),
    }
}

// Helper function to create a bare call-site reference
pub fn create_reference(
    name: &str,
    return_type: &str,
    parameter_types: &[&str],
) -> ImmutableMethodReference {
    ImmutableMethodReference {
        name: name.to_string(),
        return_type: return_type.to_string(),
        parameter_types: parameter_types.iter().map(ToString::to_string).collect(),
    }
}

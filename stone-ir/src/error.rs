use thiserror::Error;

/// Result type for model queries.
pub type Result<T, E = ModelError> = std::result::Result<T, E>;

/// An inconsistency in the API model.
///
/// The front end is expected to reject these, so encountering one while
/// generating means the model handed to the generator is broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown namespace '{namespace}'")]
    UnknownNamespace { namespace: String },

    #[error("unknown type '{namespace}.{name}'")]
    UnknownType { namespace: String, name: String },

    #[error("alias '{namespace}.{name}' refers back to itself")]
    AliasCycle { namespace: String, name: String },

    #[error("struct '{namespace}.{name}' inherits from itself")]
    InheritanceCycle { namespace: String, name: String },

    #[error("'{namespace}.{name}' is used as the {role} of '{owner}' but is not a struct")]
    NotAStruct {
        namespace: String,
        name: String,
        role: &'static str,
        owner: String,
    },
}

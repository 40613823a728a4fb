use miette::Diagnostic;
use thiserror::Error;

/// Result type for mock generation (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Params(mimic_params::Error),

    #[error("interface '{name}' not found")]
    #[diagnostic(
        code(mimic::interface_not_found),
        help("available interfaces: {available}")
    )]
    InterfaceNotFound { name: String, available: String },

    #[error("malformed type graph at {location}: {reason}")]
    #[diagnostic(
        code(mimic::malformed_type_graph),
        help("the descriptor producer violated the input contract; fix the descriptor, not the generator")
    )]
    MalformedTypeGraph { location: String, reason: String },

    #[error("failed to decode interface descriptor")]
    #[diagnostic(code(mimic::descriptor_decode))]
    Descriptor {
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Wrap a parameter error.
    pub fn params(err: Box<mimic_params::Error>) -> Box<Self> {
        Box::new(Error::Params(*err))
    }

    /// Create an interface lookup error listing what the descriptor offers.
    pub fn interface_not_found<'a>(
        name: impl Into<String>,
        available: impl IntoIterator<Item = &'a str>,
    ) -> Box<Self> {
        let available = available.into_iter().collect::<Vec<_>>();
        Box::new(Error::InterfaceNotFound {
            name: name.into(),
            available: if available.is_empty() {
                "(none)".to_string()
            } else {
                available.join(", ")
            },
        })
    }

    /// Create a contract violation error.
    pub fn malformed(location: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::MalformedTypeGraph {
            location: location.into(),
            reason: reason.into(),
        })
    }

    /// Create a descriptor decode error.
    pub fn descriptor(source: serde_json::Error) -> Box<Self> {
        Box::new(Error::Descriptor { source })
    }
}

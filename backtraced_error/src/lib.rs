use std::backtrace::Backtrace;

/// How much of an offending body is kept in [SerdeJsonError::bad_input_sample].
pub const BAD_INPUT_SAMPLE_CHARS: usize = 256;

pub fn error_chain_to_pretty_formatted<E>(error: &E) -> String
where
    E: std::error::Error + ?Sized,
{
    let mut err = format!("{}", error);
    let mut source = error.source();
    while let Some(inner_err) = source {
        err.push_str(&format!("\nCaused by: \n{}", inner_err));
        source = inner_err.source();
    }
    err
}

#[derive(Debug, thiserror::Error)]
#[error("SerdeJsonError Context: {context}\n{bad_input_sample}\n{backtrace}")]
pub struct SerdeJsonError {
    #[source]
    pub source: serde_json::Error,
    pub context: String,
    pub bad_input_sample: String,
    pub backtrace: OptionBacktracePrettyPrinter,
}

impl SerdeJsonError {
    pub fn from_serde_json_error<S: Into<String>>(
        source: serde_json::Error,
        context: S,
        bad_input: &str,
    ) -> Self {
        Self {
            source,
            context: context.into(),
            bad_input_sample: bad_input.chars().take(BAD_INPUT_SAMPLE_CHARS).collect(),
            backtrace: OptionBacktracePrettyPrinter::capture(),
        }
    }
}

#[cfg(feature = "gloo")]
#[derive(Debug, thiserror::Error)]
#[error("GlooNetError Context: {context}\n{backtrace}")]
pub struct GlooNetError {
    #[source]
    pub source: gloo_net::Error,
    pub context: String,
    pub backtrace: OptionBacktracePrettyPrinter,
}

#[cfg(feature = "gloo")]
impl GlooNetError {
    pub fn from_gloo_net_error<S: Into<String>>(source: gloo_net::Error, context: S) -> Self {
        Self {
            source,
            context: context.into(),
            backtrace: OptionBacktracePrettyPrinter::capture(),
        }
    }
}

#[derive(Debug)]
pub struct OptionBacktracePrettyPrinter(pub Option<Backtrace>);

impl OptionBacktracePrettyPrinter {
    pub fn capture() -> Self {
        Self::from(Backtrace::capture())
    }
}

impl From<Backtrace> for OptionBacktracePrettyPrinter {
    fn from(value: Backtrace) -> Self {
        Self(Some(value))
    }
}
impl std::fmt::Display for OptionBacktracePrettyPrinter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.as_ref() {
            Some(child) => write!(f, "{}", child),
            None => write!(f, "No backtrace"),
        }
    }
}

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result of loading `falco.toml`; the error is boxed since it carries the source text.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The `falco.toml` text an error points into.
///
/// ```ignore
/// let ctx = SourceContext::new(content, "falco.toml");
/// return Err(ctx.duplicate_error("Product", "model in 'shop'", span));
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    fn error(&self, build: impl FnOnce(NamedSource<String>) -> Error) -> Box<Error> {
        Box::new(build(NamedSource::new(&self.filename, self.src.clone())))
    }

    /// TOML syntax or type error, labelled at the span toml reports.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        self.error(|src| Error::Parse { src, span, source })
    }

    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        let message = message.into();
        self.error(|src| Error::Validation {
            src,
            span: None,
            message,
        })
    }

    pub fn reserved_keyword_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        let (name, context) = (name.into(), context.into());
        self.error(|src| Error::ReservedKeyword {
            src,
            span,
            name,
            context,
        })
    }

    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        let (name, context, reason) = (name.into(), context.into(), reason.into());
        self.error(|src| Error::InvalidIdentifier {
            src,
            span,
            name,
            context,
            reason,
        })
    }

    /// A model or field declared twice; `span` points at the second declaration.
    pub fn duplicate_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        let (name, context) = (name.into(), context.into());
        self.error(|src| Error::Duplicate {
            src,
            span,
            name,
            context,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a falco.toml at the root of your Django project"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse falco.toml")]
    #[diagnostic(code(falco::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(falco::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a Python keyword")]
    #[diagnostic(
        code(falco::reserved_keyword),
        help("Django cannot use '{name}' as a {context} name")
    )]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("keyword used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(falco::invalid_identifier),
        help(
            "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("duplicate {context} '{name}'")]
    #[diagnostic(code(falco::duplicate_name))]
    Duplicate {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared again here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrfError>;

/// Errors raised by the extraction, trimming, naming and translation stages.
#[derive(Debug, Error)]
pub enum OrfError {
    #[error("no FASTA header found: {0}")]
    MalformedInput(String),

    #[error("bad interval on line {line}: {reason} ({text:?})")]
    MalformedInterval {
        line: usize,
        text: String,
        reason: String,
    },

    #[error("extraction of {interval} returned {tokens} tokens, expected a header and a sequence")]
    ExtractionMismatch { interval: String, tokens: usize },

    #[error("invalid symbol '{symbol}' at position {position}")]
    InvalidSequence { position: usize, symbol: char },

    #[error("no ATG start codon found")]
    NoStartCodon,

    #[error("unknown codon {codon:?} at position {position}")]
    UnknownCodon { position: usize, codon: String },

    #[error("no curated name for {header:?}")]
    UnresolvedName { header: String },

    #[error("reference error: {0}")]
    Reference(String),

    #[error("record {header:?}: {cause}")]
    Record { header: String, cause: Box<OrfError> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OrfError {
    /// Attach the header of the record being processed.
    pub fn in_record(self, header: impl Into<String>) -> Self {
        OrfError::Record {
            header: header.into(),
            cause: Box::new(self),
        }
    }

    /// Name of the underlying error kind, looking through record wrappers.
    pub fn kind(&self) -> &'static str {
        match self {
            OrfError::MalformedInput(_) => "MalformedInputError",
            OrfError::MalformedInterval { .. } => "MalformedIntervalError",
            OrfError::ExtractionMismatch { .. } => "ExtractionMismatchError",
            OrfError::InvalidSequence { .. } => "InvalidSequenceError",
            OrfError::NoStartCodon => "NoStartCodonError",
            OrfError::UnknownCodon { .. } => "UnknownCodonError",
            OrfError::UnresolvedName { .. } => "UnresolvedNameError",
            OrfError::Reference(_) => "ReferenceError",
            OrfError::Record { cause, .. } => cause.kind(),
            OrfError::Io(_) => "IoError",
        }
    }

    /// The innermost error, without record wrappers.
    pub fn root(&self) -> &OrfError {
        match self {
            OrfError::Record { cause, .. } => cause.root(),
            other => other,
        }
    }

    /// Content errors concern a single record and may be skipped on request.
    /// Everything else is structural and always aborts the run.
    pub fn is_record_content(&self) -> bool {
        matches!(
            self.root(),
            OrfError::InvalidSequence { .. } | OrfError::NoStartCodon | OrfError::UnknownCodon { .. }
        )
    }
}

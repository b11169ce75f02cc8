/// One FASTA entry: a free-text header and its sequence.
///
/// The sequence is always stored uppercase with all whitespace removed,
/// whatever the caller passed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    header: String,
    sequence: String,
}

impl SequenceRecord {
    pub fn new(header: impl Into<String>, sequence: &str) -> Self {
        Self {
            header: header.into(),
            sequence: canonicalize(sequence),
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Same sequence under a different header.
    pub fn with_header(&self, header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            sequence: self.sequence.clone(),
        }
    }

    /// Same header over a different sequence.
    pub fn with_sequence(&self, sequence: &str) -> Self {
        Self::new(self.header.clone(), sequence)
    }

    pub fn into_parts(self) -> (String, String) {
        (self.header, self.sequence)
    }
}

pub(crate) fn canonicalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Why a page-size entry was refused.
///
/// A refused entry never changes the committed page size or the current page;
/// the draft text is put back to the last accepted size.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageSizeError {
    #[error("page size '{input}' is not a whole number")]
    NotANumber { input: String },

    #[error("page size must be at least 1, got {value}")]
    NotPositive { value: i64 },
}

impl PageSizeError {
    pub fn not_a_number(input: impl Into<String>) -> Self {
        Self::NotANumber {
            input: input.into(),
        }
    }
}

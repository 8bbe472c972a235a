pub struct Validator;

impl Validator {
    /// Whitespace-only input counts as blank.
    pub fn is_blank(text: &str) -> bool {
        text.trim().is_empty()
    }
}

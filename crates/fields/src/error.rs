#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error("field {name}: size mismatch, expected {expected} cells, got {got}")]
    SizeMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
}

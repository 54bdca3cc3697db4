use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrieError {
    #[error("handler for '{pattern}' is already defined and cannot be reassigned")]
    HandlerAlreadyDefined { pattern: String },
}

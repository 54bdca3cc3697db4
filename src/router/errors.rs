use crate::path::PathError;
use crate::trie::TrieError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Trie(#[from] TrieError),
}

pub type RouterResult<T> = Result<T, RouterError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("divider '{divider}' is forbidden; ':' and '?' carry route syntax")]
    ForbiddenDivider { divider: char },
}

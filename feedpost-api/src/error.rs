#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Unknown content type {0:?}")]
    UnknownContentType(String),

    #[error("Unknown locale {0:?}")]
    UnknownLocale(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("there are no results to show details for")]
    NoResults,
    #[error("result {index} does not exist ({len} results shown)")]
    NoSuchResult { index: usize, len: usize },

    #[error("unknown theme {0:?} (expected \"light\" or \"dark\")")]
    UnknownTheme(String),
    #[error("failed to read theme file: {0}")]
    ThemeRead(std::io::Error),
    #[error("failed to write theme file: {0}")]
    ThemeWrite(std::io::Error),
    #[error("failed to parse theme file: {0}")]
    ThemeParse(serde_json::Error),
    #[error("failed to serialize theme: {0}")]
    ThemeSerialization(serde_json::Error),

    #[error("invalid proxy URL {0:?}")]
    InvalidProxyUrl(String),
    #[error("failed to build proxy HTTP client: {0}")]
    HttpClientBuild(reqwest::Error),
}

pub type FormResult<T> = std::result::Result<T, FormError>;

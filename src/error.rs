use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no menu program found on PATH (tried rofi, dmenu). pass one with --dmenu")]
    ResolverNotFound,
    #[error("no profile selected")]
    NoProfileSelected,
    #[error("dmenu call failed (code {}): {}", .code, String::from_utf8_lossy(.stderr))]
    SelectorInvocationFailed { code: i32, stderr: Vec<u8> },
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

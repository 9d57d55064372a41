use crate::error::{AppError, AppResult};

/// Turns raw user or menu input into a profile directory name.
pub fn normalize_profile_name(requested: &str) -> AppResult<String> {
    let trimmed = requested.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput("profile name is empty".to_string()));
    }

    if trimmed == "." || trimmed == ".." || trimmed.contains(['/', '\\', '\0']) {
        return Err(AppError::InvalidInput(format!(
            "invalid profile name: {trimmed:?}"
        )));
    }

    Ok(trimmed.to_string())
}

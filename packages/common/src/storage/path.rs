use super::error::StorageError;

fn check_common(path: &str) -> Result<(), StorageError> {
    if path.len() > 1024 {
        return Err(StorageError::InvalidPath(
            "path exceeds maximum length of 1024 bytes".into(),
        ));
    }

    if path.contains('\0') {
        return Err(StorageError::InvalidPath(
            "path must not contain null bytes".into(),
        ));
    }

    if path.chars().any(|c| c.is_ascii_control()) {
        return Err(StorageError::InvalidPath(
            "path must not contain control characters".into(),
        ));
    }

    if path.contains('\\') {
        return Err(StorageError::InvalidPath(
            "path must not contain backslashes".into(),
        ));
    }

    if path.starts_with('/') {
        return Err(StorageError::InvalidPath(
            "path must not start with '/'".into(),
        ));
    }

    Ok(())
}

fn check_segments<'a>(segments: impl Iterator<Item = &'a str>) -> Result<(), StorageError> {
    for segment in segments {
        match segment {
            "" => {
                return Err(StorageError::InvalidPath(
                    "path must not contain empty segments".into(),
                ));
            }
            "." | ".." => {
                return Err(StorageError::InvalidPath(
                    "path must not contain '.' or '..' segments".into(),
                ));
            }
            _ => {}
        }
    }
    Ok(())
}

/// Validates an object path such as `customerImage/C1/photo.png`.
pub fn validate_object_path(path: &str) -> Result<&str, StorageError> {
    if path.is_empty() {
        return Err(StorageError::InvalidPath("path cannot be empty".into()));
    }
    check_common(path)?;
    if path.ends_with('/') {
        return Err(StorageError::InvalidPath(
            "object path must not end with '/'".into(),
        ));
    }
    check_segments(path.split('/'))?;
    Ok(path)
}

/// Validates a folder prefix such as `customerImage/C1/`.
///
/// Prefixes must name at least one folder and end with `/`, so listing never
/// spills into sibling folders (`C1/` vs `C10/`) or the whole store.
pub fn validate_prefix(prefix: &str) -> Result<&str, StorageError> {
    check_common(prefix)?;
    let Some(folder) = prefix.strip_suffix('/') else {
        return Err(StorageError::InvalidPath("prefix must end with '/'".into()));
    };
    if folder.is_empty() {
        return Err(StorageError::InvalidPath(
            "prefix must name at least one folder".into(),
        ));
    }
    check_segments(folder.split('/'))?;
    Ok(prefix)
}

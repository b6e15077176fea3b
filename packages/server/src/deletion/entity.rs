use std::fmt;

use super::error::DeletionError;

/// The kinds of entity that own images and principals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Customer,
    Employee,
}

impl EntityKind {
    /// Capitalized name used in client-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Employee => "Employee",
        }
    }

    /// Literal segment naming this kind's image namespace in object storage.
    pub fn image_namespace(self) -> &'static str {
        match self {
            Self::Customer => "customerImage",
            Self::Employee => "employeeImage",
        }
    }

    /// Folder holding every auxiliary object of one entity: `<kind>Image/<id>/`.
    pub fn folder_prefix(self, id: &EntityId) -> String {
        format!("{}/{}/", self.image_namespace(), id)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated, non-empty entity identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityId(String);

impl EntityId {
    /// Validate a raw identifier taken from a request.
    ///
    /// Ids become a storage path segment, so separators and dot segments are
    /// rejected alongside empty input.
    pub fn parse(kind: EntityKind, raw: &str) -> Result<Self, DeletionError> {
        let id = raw.trim();
        if id.is_empty() {
            return Err(DeletionError::MissingId(kind));
        }
        if id == "." || id == ".." {
            return Err(DeletionError::InvalidId {
                kind,
                reason: "must not be a dot segment",
            });
        }
        if id.contains(['/', '\\']) {
            return Err(DeletionError::InvalidId {
                kind,
                reason: "must not contain path separators",
            });
        }
        if id.chars().any(char::is_control) {
            return Err(DeletionError::InvalidId {
                kind,
                reason: "must not contain control characters",
            });
        }
        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

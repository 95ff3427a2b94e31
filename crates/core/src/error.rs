/// Outcome of a domain operation that did not succeed.
///
/// Only two kinds are distinguished: the requested entity is absent, or
/// something else went wrong. Callers at the HTTP boundary map the first to
/// 404 and everything else to 500.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("There is no {entity} with {field} '{key}'")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        key: String,
    },

    #[error("Unhandled fault: {0}")]
    Fault(String),
}

impl CoreError {
    /// Build a `NotFound` for an entity keyed by its `code`.
    pub fn not_found_code(entity: &'static str, code: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            field: "code",
            key: code.into(),
        }
    }

    /// Build a `NotFound` for an entity keyed by its numeric `id`.
    pub fn not_found_id(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            field: "id",
            key: id.to_string(),
        }
    }
}

/// Convenience alias for domain operation results.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_key() {
        let err = CoreError::not_found_code("company", "fb");
        assert_eq!(err.to_string(), "There is no company with code 'fb'");
    }

    #[test]
    fn not_found_id_formats_number() {
        let err = CoreError::not_found_id("invoice", 42);
        assert_eq!(err.to_string(), "There is no invoice with id '42'");
    }
}

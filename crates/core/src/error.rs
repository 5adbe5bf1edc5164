use crate::types::DbId;

/// Domain errors surfaced to API clients.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Project",
            id: 7,
        };
        assert_eq!(err.to_string(), "Entity not found: Project with id 7");
    }
}

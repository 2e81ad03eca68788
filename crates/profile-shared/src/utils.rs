//! Utility functions

use uuid::Uuid;

/// Parses a path segment into a usable identifier.
///
/// Returns `None` for anything that is not a UUID, and for the nil UUID, which is
/// reserved for records that have not been stored yet.
pub fn parse_entity_id(s: &str) -> Option<Uuid> {
    Uuid::parse_str(s.trim()).ok().filter(|id| !id.is_nil())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entity_id() {
        let id = parse_entity_id("77777777-7777-7777-7777-777777777777");
        assert!(id.is_some());
        assert_eq!(id.unwrap().to_string(), "77777777-7777-7777-7777-777777777777");
    }

    #[test]
    fn test_parse_entity_id_rejects_trash_and_nil() {
        assert!(parse_entity_id("trash").is_none());
        assert!(parse_entity_id("").is_none());
        assert!(parse_entity_id("00000000-0000-0000-0000-000000000000").is_none());
    }
}

use mongodb::bson::oid::ObjectId;

/// Generates a new record id.
///
/// Ids are hex-encoded object ids so records moved between backends keep
/// the same id shape.
pub fn next_id() -> String {
    ObjectId::new().to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_hex() {
        let first = next_id();
        let second = next_id();

        assert_eq!(first.len(), 24);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(first, second);
    }
}

//! Prefixed string identifiers (`album-…`, `song-…`).

use uuid::Uuid;

const ID_LEN: usize = 16;

/// Generate `{prefix}-{16 lowercase alphanumerics}`.
pub fn new_id(prefix: &str) -> String {
    let raw = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, &raw[..ID_LEN])
}

#[cfg(test)]
mod tests {
    use super::new_id;

    #[test]
    fn ids_have_prefix_and_fixed_length() {
        let id = new_id("album");
        assert!(id.starts_with("album-"));
        assert_eq!(id.len(), "album-".len() + 16);
        assert!(id["album-".len()..].chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(new_id("song"), new_id("song"));
    }
}

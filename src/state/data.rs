/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the API layer and the UI layer.
use serde::Deserialize;

/// A single artwork record from the museum API.
///
/// Only `id` is guaranteed to be present; everything else is optional in
/// the API response and rendered with a placeholder when missing. Identity
/// and lookup are by `id` alone.
#[derive(Debug, Clone, Deserialize)]
pub struct Artwork {
    /// Stable unique identifier assigned by the API
    pub id: i64,
    /// Display title (empty for the occasional untitled record)
    #[serde(default)]
    pub title: String,
    /// IIIF image identifier, absent when no digitized image exists
    #[serde(default)]
    pub image_id: Option<String>,
    /// Artist name, absent for unattributed works
    #[serde(default)]
    pub artist_title: Option<String>,
    /// Place of origin
    #[serde(default)]
    pub place_of_origin: Option<String>,
    /// Physical dimensions as free text
    #[serde(default)]
    pub dimensions: Option<String>,
}

// Equality is by identifier only: an instance from the catalog and a
// structurally different one from the favorites list must compare equal.
impl PartialEq for Artwork {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Artwork {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_id() {
        let a = Artwork {
            id: 7,
            title: "Starry Night".to_string(),
            image_id: Some("abc".to_string()),
            artist_title: None,
            place_of_origin: None,
            dimensions: None,
        };
        let b = Artwork {
            id: 7,
            title: "A different title".to_string(),
            image_id: None,
            artist_title: Some("Someone".to_string()),
            place_of_origin: None,
            dimensions: None,
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": 27992,
            "title": "A Sunday on La Grande Jatte",
            "image_id": "1adf2696-8489-499b-cad2-821d7fde4b33",
            "artist_title": "Georges Seurat",
            "place_of_origin": "France",
            "dimensions": "207.5 × 308.1 cm"
        }"#;
        let artwork: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(artwork.id, 27992);
        assert_eq!(artwork.title, "A Sunday on La Grande Jatte");
        assert_eq!(artwork.artist_title.as_deref(), Some("Georges Seurat"));
    }

    #[test]
    fn test_deserialize_partial_record() {
        // The API omits or nulls fields freely; only id is guaranteed.
        let json = r#"{"id": 5, "image_id": null}"#;
        let artwork: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(artwork.id, 5);
        assert_eq!(artwork.title, "");
        assert!(artwork.image_id.is_none());
        assert!(artwork.artist_title.is_none());
    }
}

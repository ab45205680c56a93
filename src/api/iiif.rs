//! IIIF image URL construction.
//!
//! Artworks carry an optional image identifier; the museum serves the
//! actual pixels through a IIIF Image API endpoint. Two sizes are used:
//! a width-constrained rendition for gallery cards and a larger one for
//! the detail view. These are pure functions of the image id.

/// Base path of the museum's IIIF Image API server
const IIIF_BASE: &str = "https://www.artic.edu/iiif/2";

/// Width in pixels requested for gallery card images
const CARD_WIDTH: u32 = 800;

/// Width in pixels requested for the detail view image
const DETAIL_WIDTH: u32 = 1200;

fn sized_url(image_id: &str, width: u32) -> String {
    format!("{IIIF_BASE}/{image_id}/full/{width},/0/default.jpg")
}

/// URL of the card-sized rendition of an image.
pub fn thumbnail_url(image_id: &str) -> String {
    sized_url(image_id, CARD_WIDTH)
}

/// URL of the detail-sized rendition of an image.
pub fn detail_url(image_id: &str) -> String {
    sized_url(image_id, DETAIL_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_url_shape() {
        assert_eq!(
            thumbnail_url("1adf2696-8489-499b-cad2-821d7fde4b33"),
            "https://www.artic.edu/iiif/2/1adf2696-8489-499b-cad2-821d7fde4b33/full/800,/0/default.jpg"
        );
    }

    #[test]
    fn test_detail_url_shape() {
        assert_eq!(
            detail_url("1adf2696-8489-499b-cad2-821d7fde4b33"),
            "https://www.artic.edu/iiif/2/1adf2696-8489-499b-cad2-821d7fde4b33/full/1200,/0/default.jpg"
        );
    }
}

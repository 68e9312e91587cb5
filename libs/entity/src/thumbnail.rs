use serde::{Deserialize, Serialize};

/// Either a flat placeholder colour or a picture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Thumbnail {
    Color(String),
    ImageUrl(String),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deserialize_tagged() {
        // Act
        let color: Thumbnail =
            serde_json::from_str(r##"{ "color": "#888888" }"##).unwrap();
        let image: Thumbnail = serde_json::from_str(
            r#"{ "image_url": "https://picsum.photos/seed/1/400" }"#,
        )
        .unwrap();

        // Assert
        assert_eq!(color, Thumbnail::Color("#888888".to_string()));
        assert_eq!(
            image,
            Thumbnail::ImageUrl("https://picsum.photos/seed/1/400".to_string())
        );
    }

    #[test]
    fn test_reject_bare_string() {
        // Act
        let result = serde_json::from_str::<Thumbnail>(r##""#888888""##);

        // Assert
        assert!(result.is_err());
    }
}

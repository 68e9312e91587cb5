use serde::Serialize;

/// Presentation units a path can lead to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum View {
    #[serde(rename = "BlogPosts")]
    #[strum(serialize = "BlogPosts")]
    PostList,
    #[serde(rename = "BlogPostDetail")]
    #[strum(serialize = "BlogPostDetail")]
    PostDetail,
    About,
    Contact,
    Pricing,
    Profile,
    NotFound,
}

impl View {
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Informational views answering with configured text only.
    pub fn is_static_page(self) -> bool {
        matches!(
            self,
            View::About | View::Contact | View::Pricing | View::Profile
        )
    }

    /// Key of the `[pages.<key>]` config table for static pages.
    pub fn page_key(self) -> Option<&'static str> {
        match self {
            View::About => Some("about"),
            View::Contact => Some("contact"),
            View::Pricing => Some("pricing"),
            View::Profile => Some("profile"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(View::PostList.name(), "BlogPosts");
        assert_eq!(View::PostDetail.name(), "BlogPostDetail");
        assert_eq!(View::About.to_string(), "About");
        assert_eq!(
            serde_json::to_string(&View::PostDetail).unwrap(),
            "\"BlogPostDetail\""
        );
    }

    #[test]
    fn test_static_pages_have_keys() {
        for view in View::iter() {
            assert_eq!(view.is_static_page(), view.page_key().is_some());
        }
    }
}

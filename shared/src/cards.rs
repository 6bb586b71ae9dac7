//! Card identity types.

use serde::{Deserialize, Serialize};

/// A card's image file name. The server identifies hand and played cards by
/// image, so this is the card identity on the client side.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CardImage(pub String);

impl CardImage {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardImage {
    fn from(s: &str) -> Self {
        CardImage(s.to_string())
    }
}

impl From<String> for CardImage {
    fn from(s: String) -> Self {
        CardImage(s)
    }
}

impl std::fmt::Display for CardImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An entry in the shared discard pile. The server keys discard entries by
/// id next to the image; the `(id, image)` pair identifies an entry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiscardCard {
    pub id: u64,
    pub image: CardImage,
}

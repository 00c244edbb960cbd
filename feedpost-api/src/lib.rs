use std::fmt;

use chrono::Utc;

mod content;
pub mod date;
mod error;
mod feed;
mod locale;

pub use content::{ContentBlock, RawContentBlock, INERT_HREF};
pub use error::Error;
pub use feed::{parse_feed, PostData, RawFeed, RawPost};
pub use locale::{Labels, Locale};

pub type Time = chrono::DateTime<Utc>;

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub role: String,
    pub avatar_url: String,
}

/// Identifies a comment within the post that holds it
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CommentId(pub u64);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
}

use anyhow::Context;

use crate::{Author, ContentBlock, PostId, RawContentBlock, Time};

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RawFeed {
    pub posts: Vec<RawPost>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPost {
    pub id: PostId,
    pub author: Author,
    pub published_at: Time,
    pub content: Vec<RawContentBlock>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostData {
    pub id: PostId,
    pub author: Author,
    pub published_at: Time,
    pub content: Vec<ContentBlock>,
}

impl PostData {
    /// Converts the wire form, dropping the content blocks that are not understood
    pub fn from_raw(raw: RawPost) -> PostData {
        let id = raw.id;
        let content = raw
            .content
            .into_iter()
            .filter_map(|b| match ContentBlock::from_raw(b) {
                Ok(b) => Some(b),
                Err(e) => {
                    tracing::warn!(post=?id, "dropping content block: {e}");
                    None
                }
            })
            .collect();
        PostData {
            id,
            author: raw.author,
            published_at: raw.published_at,
            content,
        }
    }
}

pub fn parse_feed(json: &str) -> anyhow::Result<Vec<PostData>> {
    let feed: RawFeed = serde_json::from_str(json).context("parsing feed document")?;
    tracing::debug!("parsed feed with {} posts", feed.posts.len());
    Ok(feed.posts.into_iter().map(PostData::from_raw).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const FEED: &str = r#"{
        "posts": [
            {
                "id": 1,
                "author": {
                    "name": "Jane Cooper",
                    "role": "Web Developer",
                    "avatarUrl": "https://example.org/jane.png"
                },
                "publishedAt": "2022-05-03T20:00:00Z",
                "content": [
                    { "type": "paragraph", "content": "hello" },
                    { "type": "link", "content": "world" },
                    { "type": "unknown", "content": "z" }
                ]
            }
        ]
    }"#;

    #[test]
    fn unknown_blocks_are_dropped() {
        let posts = parse_feed(FEED).unwrap();
        assert_eq!(posts.len(), 1);
        let post = &posts[0];
        assert_eq!(post.id, PostId(1));
        assert_eq!(post.author.avatar_url, "https://example.org/jane.png");
        assert_eq!(
            post.published_at,
            Utc.with_ymd_and_hms(2022, 5, 3, 20, 0, 0).unwrap(),
        );
        assert_eq!(
            post.content,
            vec![
                ContentBlock::Paragraph {
                    text: String::from("hello")
                },
                ContentBlock::Link {
                    text: String::from("world"),
                    href: String::from("#"),
                },
            ],
        );
    }

    #[test]
    fn empty_feed() {
        assert_eq!(parse_feed(r#"{"posts": []}"#).unwrap(), Vec::new());
    }

    #[test]
    fn malformed_feed_is_an_error() {
        let err = parse_feed(r#"{"posts": [{"id": 1}]}"#).unwrap_err();
        assert!(format!("{err:#}").starts_with("parsing feed document"));
        assert!(parse_feed("not json").is_err());
    }
}

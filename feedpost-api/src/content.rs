use crate::Error;

/// Target given to links whose source data carries no url
pub const INERT_HREF: &str = "#";

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ContentBlock {
    Paragraph { text: String },
    Link { text: String, href: String },
}

/// Content block as it appears in feed documents
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RawContentBlock {
    #[serde(rename = "type")]
    pub typ: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ContentBlock {
    pub fn from_raw(raw: RawContentBlock) -> Result<ContentBlock, Error> {
        match &raw.typ as &str {
            "paragraph" => Ok(ContentBlock::Paragraph { text: raw.content }),
            "link" => Ok(ContentBlock::Link {
                text: raw.content,
                href: raw.url.unwrap_or_else(|| String::from(INERT_HREF)),
            }),
            _ => Err(Error::UnknownContentType(raw.typ)),
        }
    }
}

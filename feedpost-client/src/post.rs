use crate::api::{Comment, CommentId, Locale};

pub const SEED_COMMENT: &str = "post muito bacana, hein!";

/// Local state of one rendered post: its comment thread and the comment being written
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostState {
    comments: Vec<Comment>,
    draft: String,
    validation_message: Option<String>,
    next_id: u64,
}

impl Default for PostState {
    fn default() -> PostState {
        PostState::with_comments([SEED_COMMENT])
    }
}

impl PostState {
    pub fn new() -> PostState {
        PostState::default()
    }

    pub fn with_comments<I, S>(comments: I) -> PostState
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut this = PostState {
            comments: Vec::new(),
            draft: String::new(),
            validation_message: None,
            next_id: 0,
        };
        for c in comments {
            this.push_comment(c.into());
        }
        this
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn validation_message(&self) -> Option<&str> {
        self.validation_message.as_deref()
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.draft.is_empty()
    }

    fn push_comment(&mut self, text: String) -> CommentId {
        let id = CommentId(self.next_id);
        self.next_id += 1;
        self.comments.push(Comment { id, text });
        id
    }

    /// Appends the draft to the comment list and clears it
    ///
    /// This does not check the draft is non-empty, the submit control is
    /// expected to be disabled in that case.
    pub fn submit_comment(&mut self) -> CommentId {
        let text = std::mem::take(&mut self.draft);
        let id = self.push_comment(text);
        tracing::debug!(comment=?id, "submitted comment");
        id
    }

    pub fn change_draft(&mut self, text: String) {
        self.validation_message = None;
        self.draft = text;
    }

    pub fn flag_draft_invalid(&mut self, locale: Locale) {
        self.validation_message = Some(String::from(locale.labels().required_field));
    }

    /// Returns whether a comment was actually removed
    pub fn delete_comment(&mut self, id: CommentId) -> bool {
        let len_before = self.comments.len();
        self.comments.retain(|c| c.id != id);
        let removed = self.comments.len() != len_before;
        if !removed {
            tracing::warn!(comment=?id, "attempted to delete a comment that does not exist");
        }
        removed
    }

    /// Removes every comment whose text is exactly `text`, returning how many were removed
    pub fn delete_comments_with_text(&mut self, text: &str) -> usize {
        let len_before = self.comments.len();
        self.comments.retain(|c| c.text != text);
        len_before - self.comments.len()
    }
}

use serde::Serialize;

/// Session-scoped record of one conversation: user prompts and model
/// replies, index-aligned by turn number.
///
/// Invariant: `replies.len() <= prompts.len() <= replies.len() + 1`; at
/// most one prompt is ever awaiting its reply.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ConversationStore {
    prompts: Vec<String>,
    replies: Vec<String>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a submitted prompt and returns its turn index.
    pub fn push_prompt(&mut self, text: String) -> usize {
        debug_assert_eq!(self.prompts.len(), self.replies.len());
        self.prompts.push(text);
        self.prompts.len() - 1
    }

    /// Records the reply for the pending prompt.
    pub fn push_reply(&mut self, text: String) {
        debug_assert_eq!(self.prompts.len(), self.replies.len() + 1);
        self.replies.push(text);
    }

    pub fn has_pending_prompt(&self) -> bool {
        self.prompts.len() > self.replies.len()
    }

    /// Turns in submission order; the reply is `None` while a prompt is
    /// still awaiting one.
    pub fn turns(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.prompts
            .iter()
            .enumerate()
            .map(|(i, prompt)| (prompt.as_str(), self.replies.get(i).map(String::as_str)))
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn replies(&self) -> &[String] {
        &self.replies
    }
}

//! Per-book comment thread state

use crate::model::{Comment, Session};

/// Comment currently being edited in place
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentEdit {
    pub id: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CommentAction {
    /// Switch the thread to another book, dropping loaded comments
    Reset(String),
    /// Server listing for `book_id`; ignored once the thread shows another book
    Loaded {
        book_id: String,
        comments: Vec<Comment>,
    },
    SetNewText(String),
    Added(Comment),
    StartEdit(CommentEdit),
    SetEditText(String),
    CancelEdit,
    Edited { id: String, text: String },
    Deleted(String),
}

/// Comments for a single book plus the local input state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommentThread {
    pub book_id: String,
    pub comments: Vec<Comment>,
    pub new_text: String,
    pub editing: Option<CommentEdit>,
}

impl CommentThread {
    pub fn new(book_id: impl Into<String>) -> Self {
        Self {
            book_id: book_id.into(),
            ..Default::default()
        }
    }

    pub fn find(&self, id: &str) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    /// Whether `session` may edit or delete the comment with this id
    pub fn can_modify(&self, id: &str, session: &Session) -> bool {
        self.find(id).is_some_and(|c| c.is_authored_by(session))
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.as_ref().is_some_and(|e| e.id == id)
    }

    pub fn apply(&mut self, action: CommentAction) {
        match action {
            CommentAction::Reset(book_id) => *self = Self::new(book_id),
            CommentAction::Loaded { book_id, comments } => {
                if book_id != self.book_id {
                    return;
                }
                // Comments posted while the listing was in flight stay
                let pending: Vec<Comment> = self
                    .comments
                    .drain(..)
                    .filter(|c| !comments.iter().any(|loaded| loaded.id == c.id))
                    .collect();
                self.comments = comments;
                self.comments.extend(pending);
            }
            CommentAction::SetNewText(text) => self.new_text = text,
            CommentAction::Added(comment) => {
                self.comments.push(comment);
                self.new_text.clear();
            }
            CommentAction::StartEdit(edit) => self.editing = Some(edit),
            CommentAction::SetEditText(text) => {
                if let Some(edit) = self.editing.as_mut() {
                    edit.text = text;
                }
            }
            CommentAction::CancelEdit => self.editing = None,
            CommentAction::Edited { id, text } => {
                if let Some(comment) = self.comments.iter_mut().find(|c| c.id == id) {
                    comment.text = text;
                }
                if self.is_editing(&id) {
                    self.editing = None;
                }
            }
            CommentAction::Deleted(id) => {
                self.comments.retain(|c| c.id != id);
                if self.is_editing(&id) {
                    self.editing = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: &str, user: &str, text: &str) -> Comment {
        Comment {
            id: id.to_string(),
            book_id: "b1".to_string(),
            user: user.to_string(),
            text: text.to_string(),
        }
    }

    fn thread() -> CommentThread {
        let mut thread = CommentThread::new("b1");
        thread.apply(CommentAction::Loaded {
            book_id: "b1".to_string(),
            comments: vec![
                comment("c1", "alice", "Loved it"),
                comment("c2", "bob", "Too long"),
            ],
        });
        thread
    }

    #[test]
    fn only_author_can_modify() {
        let thread = thread();
        let alice = Session::User("alice".to_string());
        assert!(thread.can_modify("c1", &alice));
        assert!(!thread.can_modify("c2", &alice));
        assert!(!thread.can_modify("c1", &Session::Anonymous));
        assert!(!thread.can_modify("missing", &alice));
    }

    #[test]
    fn added_comment_clears_input() {
        let mut thread = thread();
        thread.apply(CommentAction::SetNewText("Again".to_string()));
        thread.apply(CommentAction::Added(comment("c3", "alice", "Again")));
        assert_eq!(thread.comments.len(), 3);
        assert!(thread.new_text.is_empty());
    }

    #[test]
    fn edit_cycle_updates_text_in_place() {
        let mut thread = thread();
        thread.apply(CommentAction::StartEdit(CommentEdit {
            id: "c1".to_string(),
            text: "Loved it".to_string(),
        }));
        thread.apply(CommentAction::SetEditText("Loved it twice".to_string()));
        assert!(thread.is_editing("c1"));

        thread.apply(CommentAction::Edited {
            id: "c1".to_string(),
            text: "Loved it twice".to_string(),
        });
        assert_eq!(thread.comments[0].text, "Loved it twice");
        assert_eq!(thread.comments[1].text, "Too long");
        assert_eq!(thread.editing, None);
    }

    #[test]
    fn deleting_edited_comment_drops_edit_state() {
        let mut thread = thread();
        thread.apply(CommentAction::StartEdit(CommentEdit {
            id: "c2".to_string(),
            text: String::new(),
        }));
        thread.apply(CommentAction::Deleted("c2".to_string()));
        assert_eq!(thread.comments, vec![comment("c1", "alice", "Loved it")]);
        assert_eq!(thread.editing, None);
    }

    #[test]
    fn reset_switches_book() {
        let mut thread = thread();
        thread.apply(CommentAction::Reset("b2".to_string()));
        assert_eq!(thread, CommentThread::new("b2"));
    }

    #[test]
    fn stale_listing_is_ignored() {
        let mut thread = CommentThread::new("b2");
        thread.apply(CommentAction::Loaded {
            book_id: "b1".to_string(),
            comments: vec![comment("c1", "alice", "Loved it")],
        });
        assert!(thread.comments.is_empty());
    }

    #[test]
    fn listing_keeps_comments_added_before_it_arrived() {
        let mut thread = CommentThread::new("b1");
        thread.apply(CommentAction::Added(comment("n1", "alice", "First!")));
        thread.apply(CommentAction::Loaded {
            book_id: "b1".to_string(),
            comments: vec![
                comment("c1", "bob", "Old news"),
                comment("n1", "alice", "First!"),
            ],
        });
        assert_eq!(
            thread.comments,
            vec![
                comment("c1", "bob", "Old news"),
                comment("n1", "alice", "First!"),
            ]
        );

        let mut thread = CommentThread::new("b1");
        thread.apply(CommentAction::Added(comment("n2", "alice", "Fresh")));
        thread.apply(CommentAction::Loaded {
            book_id: "b1".to_string(),
            comments: vec![comment("c1", "bob", "Old news")],
        });
        let ids: Vec<&str> = thread.comments.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c1", "n2"]);
    }
}

mod support;

use shelf_common::{
    ApiError, CommentAction, CommentEdit, CommentThread, Controller, MemorySessionStore, Session,
};
use support::{comment, tracing_init, ScriptedApi};

fn setup() -> (Controller<ScriptedApi, MemorySessionStore>, CommentThread) {
    tracing_init();
    let api = ScriptedApi::new();
    *api.comments.borrow_mut() = vec![
        comment("c1", "alice", "Loved it"),
        comment("c2", "bob", "Too long"),
    ];
    (
        Controller::new(api, MemorySessionStore::new()),
        CommentThread::new("1"),
    )
}

fn alice() -> Session {
    Session::User("alice".to_string())
}

async fn loaded() -> (Controller<ScriptedApi, MemorySessionStore>, CommentThread) {
    let (ctl, mut thread) = setup();
    if let Some(action) = ctl.load_comments(&thread.book_id).await {
        thread.apply(action);
    }
    (ctl, thread)
}

#[tokio::test]
async fn loads_comments_for_book() {
    let (ctl, thread) = loaded().await;
    assert_eq!(thread.comments.len(), 2);
    assert_eq!(ctl.api().calls.borrow().as_slice(), ["GET /api/Comments/1"]);
}

#[tokio::test]
async fn load_failure_keeps_thread_empty() {
    let (ctl, thread) = setup();
    ctl.api().fail_next(ApiError::Network("offline".to_string()));
    assert_eq!(ctl.load_comments(&thread.book_id).await, None);
    assert!(thread.comments.is_empty());
}

#[tokio::test]
async fn add_comment_posts_as_session_user() {
    let (ctl, mut thread) = loaded().await;
    thread.apply(CommentAction::SetNewText("Read it twice".to_string()));

    let action = ctl.add_comment(&thread, &alice()).await;
    assert!(matches!(action, Some(CommentAction::Added(_))));
    if let Some(action) = action {
        thread.apply(action);
    }

    let payloads = ctl.api().comment_payloads.borrow();
    assert_eq!(payloads[0].user, "alice");
    assert_eq!(payloads[0].book_id, "1");
    assert_eq!(thread.comments.len(), 3);
    assert_eq!(thread.comments[2].text, "Read it twice");
    assert!(thread.new_text.is_empty());
}

#[tokio::test]
async fn blank_or_anonymous_comments_are_not_sent() {
    let (ctl, mut thread) = loaded().await;
    thread.apply(CommentAction::SetNewText("   ".to_string()));
    assert_eq!(ctl.add_comment(&thread, &alice()).await, None);

    thread.apply(CommentAction::SetNewText("Hello".to_string()));
    assert_eq!(ctl.add_comment(&thread, &Session::Anonymous).await, None);

    assert_eq!(ctl.api().call_count(), 1);
}

#[tokio::test]
async fn author_can_edit_own_comment() {
    let (ctl, mut thread) = loaded().await;
    thread.apply(CommentAction::StartEdit(CommentEdit {
        id: "c1".to_string(),
        text: "Loved it".to_string(),
    }));
    thread.apply(CommentAction::SetEditText("Loved it more".to_string()));

    if let Some(action) = ctl.save_comment_edit(&thread, &alice()).await {
        thread.apply(action);
    }

    assert_eq!(
        ctl.api().calls.borrow().last().map(String::as_str),
        Some("PUT /api/Comments/c1")
    );
    assert_eq!(thread.comments[0].text, "Loved it more");
    assert_eq!(thread.editing, None);
}

#[tokio::test]
async fn other_users_comments_cannot_be_changed() {
    let (ctl, mut thread) = loaded().await;
    thread.apply(CommentAction::StartEdit(CommentEdit {
        id: "c2".to_string(),
        text: "Hijacked".to_string(),
    }));

    assert_eq!(ctl.save_comment_edit(&thread, &alice()).await, None);
    assert_eq!(ctl.delete_comment(&thread, "c2", &alice()).await, None);
    assert_eq!(ctl.api().call_count(), 1);
    assert_eq!(thread.comments[1].text, "Too long");
}

#[tokio::test]
async fn author_can_delete_own_comment() {
    let (ctl, mut thread) = loaded().await;
    if let Some(action) = ctl.delete_comment(&thread, "c1", &alice()).await {
        thread.apply(action);
    }
    assert_eq!(thread.comments, vec![comment("c2", "bob", "Too long")]);
}

#[tokio::test]
async fn failed_delete_keeps_comment() {
    let (ctl, mut thread) = loaded().await;
    ctl.api().fail_next(ApiError::Status {
        status: 500,
        body: String::new(),
    });
    if let Some(action) = ctl.delete_comment(&thread, "c1", &alice()).await {
        thread.apply(action);
    }
    assert_eq!(thread.comments.len(), 2);
}

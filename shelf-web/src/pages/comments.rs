//! Stateful comment thread for one book

use crate::pages::AppController;
use dioxus::prelude::*;
use shelf_common::{AppState, CommentAction, CommentThread};
use shelf_ui::BookCommentsView;
use std::rc::Rc;

fn dispatch(mut thread: Signal<CommentThread>, action: Option<CommentAction>) {
    if let Some(action) = action {
        thread.write().apply(action);
    }
}

/// Loads the thread when mounted and again whenever `book_id` changes
#[component]
pub fn BookComments(book_id: String) -> Element {
    let ctl: Rc<AppController> = use_context();
    let state: Signal<AppState> = use_context();
    let thread = use_signal(|| CommentThread::new(book_id.clone()));

    use_effect(use_reactive((&book_id,), {
        let ctl = ctl.clone();
        move |(book_id,)| {
            dispatch(thread, Some(CommentAction::Reset(book_id.clone())));
            let ctl = ctl.clone();
            spawn(async move {
                dispatch(thread, ctl.load_comments(&book_id).await);
            });
        }
    }));

    let session = state.read().session.clone();
    let add_ctl = ctl.clone();
    let add_session = session.clone();
    let edit_ctl = ctl.clone();
    let edit_session = session.clone();
    let delete_ctl = ctl.clone();
    let delete_session = session.clone();

    rsx! {
        BookCommentsView {
            thread: thread(),
            session,
            on_new_text: move |text| dispatch(thread, Some(CommentAction::SetNewText(text))),
            on_add: move |_| {
                let ctl = add_ctl.clone();
                let session = add_session.clone();
                let current = thread.read().clone();
                spawn(async move {
                    dispatch(thread, ctl.add_comment(&current, &session).await);
                });
            },
            on_start_edit: move |edit| dispatch(thread, Some(CommentAction::StartEdit(edit))),
            on_edit_text: move |text| dispatch(thread, Some(CommentAction::SetEditText(text))),
            on_save_edit: move |_| {
                let ctl = edit_ctl.clone();
                let session = edit_session.clone();
                let current = thread.read().clone();
                spawn(async move {
                    dispatch(thread, ctl.save_comment_edit(&current, &session).await);
                });
            },
            on_cancel_edit: move |_| dispatch(thread, Some(CommentAction::CancelEdit)),
            on_delete: move |id: String| {
                let ctl = delete_ctl.clone();
                let session = delete_session.clone();
                let current = thread.read().clone();
                spawn(async move {
                    dispatch(thread, ctl.delete_comment(&current, &id, &session).await);
                });
            },
        }
    }
}

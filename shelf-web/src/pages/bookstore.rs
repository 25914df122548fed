//! Root page: owns the app state and wires views to the controller

use crate::api::HttpApi;
use crate::files::read_selected_file;
use crate::pages::BookComments;
use crate::session::BrowserSession;
use dioxus::prelude::*;
use shelf_common::{Action, AppState, Controller, DraftField, FormMode, View};
use shelf_ui::{
    AppLayoutView, AuthFormView, BookFormView, BookListView, CommentsSlot, NavbarView,
    NoticeDialogView, IMAGE_INPUT_ID, PDF_INPUT_ID,
};
use std::rc::Rc;

pub type AppController = Controller<HttpApi, BrowserSession>;

/// Feed a handler's outcome back into the store
fn dispatch(mut state: Signal<AppState>, action: Option<Action>) {
    if let Some(action) = action {
        state.write().apply(action);
    }
}

#[component]
pub fn Bookstore() -> Element {
    let ctl = use_context_provider(|| {
        Rc::new(AppController::new(HttpApi::default(), BrowserSession))
    });
    let state = use_context_provider({
        let ctl = ctl.clone();
        move || Signal::new(ctl.restore())
    });

    // Book list is public, load it regardless of the session
    use_effect({
        let ctl = ctl.clone();
        move || {
            let ctl = ctl.clone();
            spawn(async move {
                dispatch(state, ctl.fetch_books().await);
            });
        }
    });

    let (view, logged_in, form_key, notice) = {
        let current = state.read();
        (
            current.view,
            current.is_logged_in(),
            current.form_key().unwrap_or_default(),
            current.notice.clone(),
        )
    };

    // Each form mode gets its own mount so file inputs start empty
    let page = match (view.auth_mode(), view.form_mode()) {
        (Some(mode), _) => {
            let ctl = ctl.clone();
            let credentials = state.read().credentials.clone();
            rsx! {
                AuthFormView {
                    mode,
                    username: credentials.username,
                    password: credentials.password,
                    on_username_change: move |value| dispatch(state, Some(Action::SetUsername(value))),
                    on_password_change: move |value| dispatch(state, Some(Action::SetPassword(value))),
                    on_submit: move |mode| {
                        let ctl = ctl.clone();
                        let credentials = state.read().credentials.clone();
                        spawn(async move {
                            dispatch(state, ctl.authenticate(&credentials, mode).await);
                        });
                    },
                }
            }
        }
        (None, Some(FormMode::Add)) => rsx! {
            BookFormPage { key: "{form_key}", mode: FormMode::Add }
        },
        (None, Some(FormMode::Edit)) => rsx! {
            BookFormPage { key: "{form_key}", mode: FormMode::Edit }
        },
        (None, None) => {
            let comments = CommentsSlot(Rc::new(|book_id: String| {
                rsx! {
                    BookComments { book_id }
                }
            }));
            rsx! {
                BookListView {
                    books: state.read().books.clone(),
                    logged_in,
                    on_edit: move |book| dispatch(state, Some(Action::BeginEdit(book))),
                    on_delete: move |id| dispatch(state, Some(Action::RequestDelete(id))),
                    comments,
                }
            }
        }
    };

    let overlay = notice.map(|notice| {
        let ctl = ctl.clone();
        rsx! {
            NoticeDialogView {
                notice,
                on_dismiss: move |_| dispatch(state, Some(Action::DismissNotice)),
                on_confirm: move |id: String| {
                    dispatch(state, Some(Action::DismissNotice));
                    let ctl = ctl.clone();
                    let session = state.read().session.clone();
                    spawn(async move {
                        dispatch(state, ctl.delete_book(&session, &id).await);
                    });
                },
            }
        }
    });

    let logout_ctl = ctl.clone();

    rsx! {
        AppLayoutView {
            navbar: rsx! {
                NavbarView {
                    logged_in,
                    on_navigate: move |view: View| dispatch(state, Some(Action::Navigate(view))),
                    on_logout: move |_| dispatch(state, Some(logout_ctl.logout())),
                }
            },
            overlay,
            {page}
        }
    }
}

/// Add or edit form bound to the shared store
#[component]
fn BookFormPage(mode: FormMode) -> Element {
    let ctl: Rc<AppController> = use_context();
    let state: Signal<AppState> = use_context();

    let (draft, image_preview, pdf_preview) = {
        let current = state.read();
        (
            current.draft.clone(),
            current.image_preview(),
            current.pdf_preview(),
        )
    };

    rsx! {
        BookFormView {
            mode,
            draft,
            image_preview,
            pdf_preview,
            on_field_change: move |(field, value): (DraftField, String)| {
                dispatch(state, Some(Action::EditDraft(field, value)));
            },
            on_image_selected: move |_| {
                spawn(async move {
                    let file = read_selected_file(IMAGE_INPUT_ID).await;
                    dispatch(state, file.map(Action::SelectImage));
                });
            },
            on_pdf_selected: move |_| {
                spawn(async move {
                    let file = read_selected_file(PDF_INPUT_ID).await;
                    dispatch(state, file.map(Action::SelectPdf));
                });
            },
            on_submit: move |_| {
                let ctl = ctl.clone();
                let form = state.read().form();
                spawn(async move {
                    let outcome = match mode {
                        FormMode::Add => ctl.add_book(&form).await,
                        FormMode::Edit => ctl.save_edit(&form).await,
                    };
                    dispatch(state, outcome);
                });
            },
        }
    }
}

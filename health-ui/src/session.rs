use crate::api::fetch_current_user;
use api_structs::ui::user::CurrentUser;
use api_structs::Role;
use backtraced_error::error_chain_to_pretty_formatted;
use leptos::logging::log;
use leptos::{
    component, expect_context, provide_context, spawn_local, view, ChildrenFn, IntoView,
    ReadSignal, SignalGet, SignalSet,
};
use leptos_router::Redirect;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Loading,
    Anonymous,
    Authenticated(CurrentUser),
}

/// The signed in user, fetched once when the app mounts and shared through context.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    pub state: ReadSignal<SessionState>,
}

pub fn provide_session() -> Session {
    let (state_r, state_w) = leptos::create_signal(SessionState::Loading);
    spawn_local(async move {
        match fetch_current_user().await {
            Ok(user) => {
                log!("Signed in as {} ({:?})", user.email, user.role);
                state_w.set(SessionState::Authenticated(user));
            }
            Err(e) => {
                log!("No session: {}", error_chain_to_pretty_formatted(&e));
                state_w.set(SessionState::Anonymous);
            }
        }
    });
    let session = Session { state: state_r };
    provide_context(session);
    session
}

pub fn expect_session() -> Session {
    expect_context::<Session>()
}

/// Renders `children` only for users of `role`.
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let session = expect_session();
    move || match session.state.get() {
        SessionState::Loading => ().into_view(),
        SessionState::Anonymous => view! { <Redirect path="/login"/> }.into_view(),
        SessionState::Authenticated(user) if user.role == role => children().into_view(),
        SessionState::Authenticated(_) => view! { <Redirect path="/"/> }.into_view(),
    }
}

/// Sends users to the landing page of their role.
#[component]
pub fn LandingRedirect() -> impl IntoView {
    let session = expect_session();
    move || match session.state.get() {
        SessionState::Loading => ().into_view(),
        SessionState::Anonymous => view! { <Redirect path="/login"/> }.into_view(),
        SessionState::Authenticated(user) => {
            view! { <Redirect path=user.role.landing_path()/> }.into_view()
        }
    }
}

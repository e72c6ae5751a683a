use leptos::logging::log;
use leptos::*;

mod analytics;
mod api;
mod graph_creation;
mod session;
mod viewport;
use analytics::HealthAnalytics;
use api_structs::Role;
use leptos_router::*;
use session::{provide_session, LandingRedirect, RequireRole};

const API_SERVER_URL_NO_TRAILING_SLASH: &str = match option_env!("API_SERVER_URL_NO_TRAILING_SLASH")
{
    Some(url) => url,
    None => "http://localhost:8000",
};

fn main() {
    _ = console_log::init();
    console_error_panic_hook::set_once();
    mount_to_body(|| view! {   <App/> });
    log!("Loaded up!");
}

#[component]
pub fn App() -> impl IntoView {
    provide_session();
    view! {
        <>
            <header>
                <nav class="navigation">
                    <a class="navigation__button" href="/">"Home"</a>
                    <a class="navigation__button" href="/health-analytics">"Health Analytics"</a>
                </nav>
            </header>
                <Router>
                    <Routes>
                        <Route
                              path="/"
                              view=move || view! { <LandingRedirect/> }
                            />
                        <Route
                              path="/user-landing"
                              view=move || view! {
                                    <RequireRole role=Role::StandardUser>
                                        <UserLanding/>
                                    </RequireRole>
                                }
                            />
                        <Route
                              path="/health-analytics"
                              view=move || view! {
                                    <RequireRole role=Role::StandardUser>
                                        <HealthAnalytics/>
                                    </RequireRole>
                                }
                            />
                        <Route
                              path="/login"
                              view=move || view! {
                                    <div class="message-page">
                                        <p>"Sign in to see your health analytics."</p>
                                    </div>
                                }
                            />
                        <Route
                              path="/*any"
                              view=move || view! {
                                    <div class="message-page">
                                        <h1>"Page not found"</h1>
                                        <a href="/">"Back to start"</a>
                                    </div>
                                }
                            />
                    </Routes>
                </Router>
        </>
    }
}

#[component]
fn UserLanding() -> impl IntoView {
    let session = session::expect_session();
    let greeting = move || match session.state.get() {
        session::SessionState::Authenticated(user) => format!("Welcome, {}", user.name),
        _ => "Welcome".to_string(),
    };
    view! {
        <div class="welcome-panel">
            <h1>{greeting}</h1>
            <a class="button--contained" href="/health-analytics">"View Health Analytics"</a>
        </div>
    }
}

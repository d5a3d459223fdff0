// In Google Cloud console
// Set
// - Redirect_url: http://localhost:8080/auth/google
// - Host: http://localhost:8080
// And then you will get your client_id.
// Set .env file
// ```.env
// client_id="your_client_id"
// redirect_uri="http://localhost:8080/auth/google"
// ```
// finally ```cargo run --example axum_server```
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use anyhow::Context;
use axum::{
    Router,
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect},
    routing::get,
};
use axum_extra::extract::{CookieJar, cookie::Cookie};
use http::StatusCode;
use serde::Deserialize;
use tiny_google_signin::{
    config::{Config, ConfigBuilder},
    request::build_and_redirect,
    state_token::StateToken,
};
use tracing::error;
use url::Url;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log settings
    tracing_subscriber::fmt::init();

    // Read environment
    let client_id = read_env("client_id")?;
    let redirect_uri = read_env("redirect_uri")?;

    // Build Config once; a fresh request is built from it per sign-in
    let config = ConfigBuilder::new()
        .client_id(&client_id)
        .redirect_uri(&redirect_uri)
        .build();

    // application state that hold Config
    let app_state = AppState::new(config);
    // Binding listener
    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
    // Settings Router
    // '/': The sign-in page with the trigger button
    // '/auth/sign-in': Builds the authorization request and redirects
    // '/auth/google': The callback path that is set in google console
    let app = Router::new()
        .route("/", get(index))
        .route("/auth/sign-in", get(sign_in))
        .route("/auth/google", get(call_back))
        .with_state(Arc::new(app_state));

    axum::serve(listener, app).await?;
    anyhow::Ok(())
}

static COOKIE_KEY: &str = "state_token";

async fn index() -> Html<&'static str> {
    Html(r#"<a href="/auth/sign-in"><button><h2>-&gt; Sign In</h2></button></a>"#)
}

async fn sign_in(
    State(app_state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, StatusCode> {
    // Generate a state token for each request
    let state = StateToken::new().map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    // Create Cookie that hold session of the state token
    // Cookie_Key -- State_Token_Key
    //               State_Token_Key -- State_Token_Value(in memory or redis)
    let state_key = Uuid::new_v4().to_string();
    let cookie = Cookie::new(COOKIE_KEY, state_key.clone());
    // Insert StateToken into Memory(Redis)
    {
        app_state
            .token
            .lock()
            .unwrap()
            .insert(state_key, state.clone());
    }

    // The Navigator here is the HTTP redirect response
    let mut target: Option<Url> = None;
    let mut navigator = |url: &Url| target = Some(url.clone());
    build_and_redirect(&app_state.config, Some(&state), &mut navigator).map_err(|e| {
        error!("Failed to build authorization request: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let url = target.ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok((jar.add(cookie), Redirect::to(url.as_str())))
}

#[derive(Debug, Deserialize)]
struct CallbackParams {
    code: String,
    state: String,
}

// The callback collaborator's side of the contract: verify the echoed state
// against the one persisted at sign-in, then hand the code to the backend.
async fn call_back(
    State(app_state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, StatusCode> {
    // Get cookie
    let cookie = jar.get(COOKIE_KEY).ok_or(StatusCode::BAD_REQUEST)?;
    let stored: StateToken;
    {
        // This block for early unlock
        let lock = app_state.token.lock().unwrap();
        stored = lock
            .get(cookie.value())
            .ok_or(StatusCode::BAD_REQUEST)?
            .to_owned();
    }
    // Reject the callback when the echoed state does not match
    if stored.value() != params.state {
        return Err(StatusCode::UNAUTHORIZED);
    }

    // Exchange `params.code` for tokens on your backend here
    Ok(format!("authorization code: {}", params.code))
}

// Get env from .env file
fn read_env(key: &str) -> anyhow::Result<String> {
    dotenvy::var(key).context("Failed to read env")
}

#[derive(Debug, Clone)]
struct AppState {
    config: Config,
    token: Arc<Mutex<HashMap<String, StateToken>>>,
}

impl AppState {
    fn new(config: Config) -> Self {
        Self {
            config,
            token: Arc::default(),
        }
    }
}

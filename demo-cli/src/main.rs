//! Minimal hosting shell for the session library.
//!
//! Builds the session context once, runs initialization, then interprets
//! `NavigationIntent`s from a small command loop. Useful against a locally
//! running backend (`API_BASE_URL`).

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use talent_session::{
    ApiClient, AuthApi, FileTokenStore, LoginCredentials, NavigationIntent, ProfileApi,
    RecordingNavigator, RouteAccess, Session, SessionHandle, SessionManager, UserType,
    require_auth,
};

fn interpret(intent: NavigationIntent) {
    match intent {
        NavigationIntent::ToLogin => println!("-> login screen"),
        NavigationIntent::ToDashboard => println!("-> dashboard"),
    }
}

fn describe(session: &Session) {
    match session {
        Session::Initializing => println!("session: initializing"),
        Session::Unauthenticated => println!("session: signed out"),
        Session::Authenticated(user) => {
            println!("session: {} ({:?})", user.email, user.user_type);
            // The capability check a shell would use to show/hide entries
            let recruiter_tools = require_auth(session, &[UserType::Recruiter]);
            if recruiter_tools == RouteAccess::Grant {
                println!("         recruiter tools available");
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // The session context is built exactly once per process.
    let store = Arc::new(FileTokenStore::from_env());
    let navigator = Arc::new(RecordingNavigator::new());
    let client = Arc::new(ApiClient::from_env(store.clone(), navigator.clone())?);
    let manager = Arc::new(SessionManager::new(
        store,
        Arc::new(AuthApi::new(client.clone())),
        Arc::new(ProfileApi::new(client)),
    ));
    let session = SessionHandle::new(manager.clone());

    describe(&manager.initialize().await);
    println!("commands: login <email> <password> | whoami | logout | quit");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("login") => {
                let (Some(username), Some(password)) = (parts.next(), parts.next()) else {
                    println!("usage: login <email> <password>");
                    continue;
                };
                let credentials = LoginCredentials {
                    username: username.to_string(),
                    password: password.to_string(),
                };
                match session.login(&credentials).await {
                    Ok(intent) => interpret(intent),
                    Err(e) => println!("login failed: {e}"),
                }
            }
            Some("whoami") => describe(&session.snapshot()),
            Some("logout") => interpret(session.logout()),
            Some("quit") => break,
            Some(other) => println!("unknown command: {other}"),
            None => {}
        }

        // Forced navigations from 401 resets surface here
        for intent in navigator.drain() {
            tracing::warn!("forced navigation");
            interpret(intent);
        }
    }

    Ok(())
}

//! Session context: the current access credential, shared via Leptos context
//! instead of ambient global state

use gatehouse_common::auth::LoginResponse;
use leptos::*;

const TOKEN_KEY: &str = "gatehouse_token";
const USERNAME_KEY: &str = "gatehouse_username";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionData {
    pub token: Option<String>,
    pub username: Option<String>,
}

impl SessionData {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

pub type Session = RwSignal<SessionData>;

/// Create the session signal, restore any persisted sign-in, and provide
/// it as context. Called once at the app root.
pub fn provide_session() -> Session {
    let session = create_rw_signal(SessionData::default());

    if let Some(storage) = local_storage() {
        if let (Ok(Some(token)), Ok(Some(username))) =
            (storage.get_item(TOKEN_KEY), storage.get_item(USERNAME_KEY))
        {
            session.set(SessionData {
                token: Some(token),
                username: Some(username),
            });
        }
    }

    provide_context(session);
    session
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("session context must be provided")
}

pub fn sign_in(session: Session, login: &LoginResponse) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, &login.access_token);
        let _ = storage.set_item(USERNAME_KEY, &login.username);
    }

    session.set(SessionData {
        token: Some(login.access_token.clone()),
        username: Some(login.username.clone()),
    });
}

pub fn sign_out(session: Session) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USERNAME_KEY);
    }

    session.set(SessionData::default());
}

/// Read the token without subscribing to later session changes.
/// Used by loaders that capture the credential once at mount.
pub fn token_untracked(session: Session) -> Option<String> {
    session.with_untracked(|data| data.token.clone())
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

use crate::api::{ApiClient, ApiError};
use crate::model::{AuthResponse, LoginRequest, SignupRequest, User};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Explicit session object passed by reference to whatever needs it, instead
/// of ambient global state. Initialized once at startup from the persisted
/// token file and torn down on logout.
#[derive(Debug)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
    token_path: PathBuf,
}

impl Session {
    /// Read any previously persisted token. A missing or empty file simply
    /// yields an anonymous session.
    pub fn init<P: Into<PathBuf>>(token_path: P) -> Self {
        let token_path = token_path.into();
        let token = fs::read_to_string(&token_path)
            .ok()
            .map(|contents| contents.trim().to_string())
            .filter(|token| !token.is_empty());
        if token.is_some() {
            debug!("restored persisted session token");
        }

        Self {
            token,
            user: None,
            token_path,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    fn establish(&mut self, user: Option<User>, token: Option<String>) {
        self.user = user;
        if let Some(token) = token {
            if let Some(parent) = self.token_path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Err(err) = fs::write(&self.token_path, &token) {
                warn!(error = %err, path = %self.token_path.display(), "could not persist session token");
            }
            self.token = Some(token);
        }
    }

    /// Drop the in-memory state and the persisted token file.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
        let _ = fs::remove_file(&self.token_path);
    }
}

pub async fn login(
    api: &ApiClient,
    session: &mut Session,
    email: &str,
    password: &str,
) -> Result<bool, ApiError> {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let response: AuthResponse = api.post("/auth/login", &request, None).await?;

    if response.success && response.user.is_some() {
        session.establish(response.user, response.token);
        info!(email, "login succeeded");
        Ok(true)
    } else {
        info!(
            email,
            message = response.message.as_deref().unwrap_or_default(),
            "login rejected"
        );
        Ok(false)
    }
}

pub async fn signup(
    api: &ApiClient,
    session: &mut Session,
    name: &str,
    email: &str,
    password: &str,
) -> Result<bool, ApiError> {
    let request = SignupRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };
    let response: AuthResponse = api.post("/auth/signup", &request, None).await?;

    if response.success && response.user.is_some() {
        session.establish(response.user, response.token);
        info!(email, "signup succeeded");
        Ok(true)
    } else {
        Ok(false)
    }
}

/// The session is cleared regardless of what the backend says about the
/// logout call.
pub async fn logout(api: &ApiClient, session: &mut Session) {
    let result: Result<AuthResponse, ApiError> = api
        .post("/auth/logout", &serde_json::json!({}), Some(session))
        .await;
    if let Err(err) = result {
        warn!(error = %err, "logout request failed");
    }
    session.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::test_helpers::scratch_path;

    #[test]
    fn init_without_a_token_file_is_anonymous() {
        let session = Session::init(scratch_path("token-missing"));
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
        assert!(session.user().is_none());
    }

    #[test]
    fn establish_persists_and_init_restores() {
        let path = scratch_path("token-roundtrip");
        let mut session = Session::init(&path);
        session.establish(None, Some("abc123".to_string()));
        assert!(session.is_authenticated());

        let restored = Session::init(&path);
        assert_eq!(restored.token(), Some("abc123"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn clear_removes_the_persisted_token() {
        let path = scratch_path("token-clear");
        let mut session = Session::init(&path);
        session.establish(None, Some("abc123".to_string()));

        session.clear();
        assert!(!session.is_authenticated());
        assert!(!path.exists());

        let reopened = Session::init(&path);
        assert!(!reopened.is_authenticated());
    }

    #[test]
    fn blank_token_file_counts_as_anonymous() {
        let path = scratch_path("token-blank");
        std::fs::write(&path, "  \n").unwrap();

        let session = Session::init(&path);
        assert!(!session.is_authenticated());

        std::fs::remove_file(&path).ok();
    }
}

use dioxus::prelude::*;
use shared::user::User;

#[cfg(feature = "server")]
use crate::auth::{self, AuthError, AUTH_COOKIE_NAME};
#[cfg(feature = "server")]
use crate::config::CONFIG;
#[cfg(feature = "server")]
use tower_cookies::Cookies;
#[cfg(feature = "server")]
use tracing::{info, warn};

/// The user owning the session cookie, or `None` when nobody is signed in.
#[get("/api/public/auth/whoami", cookies: Cookies)]
pub async fn whoami() -> Result<Option<User>, ServerFnError> {
    let token = cookies
        .get(AUTH_COOKIE_NAME)
        .map(|c| c.value().to_string());

    match auth::resolve_user(token.as_deref(), CONFIG.secret_key()) {
        Ok(user) => {
            info!("Resolved session for {}", user.display_netid());
            Ok(Some(user))
        }
        Err(AuthError::MissingToken) => Ok(None),
        Err(e) => {
            warn!("Rejected session cookie: {}", e);
            Ok(None)
        }
    }
}

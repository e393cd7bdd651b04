//! Flash-message plumbing over a signed cookie.
//!
//! A handler that redirects attaches one message with [`redirect_with`]. The
//! next page render picks it up through the [`Flashes`] extractor, shows it,
//! and clears the cookie.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Redirect, Response};
use museum_core::flash::{self, Flash};

use crate::config::ServerConfig;
use crate::state::AppState;

pub const FLASH_COOKIE: &str = "museum_flash";

/// Messages to show on the page being rendered.
///
/// Starts with whatever arrived in the flash cookie; handlers add messages
/// that belong to the current response with [`Flashes::push`].
#[derive(Debug, Default)]
pub struct Flashes {
    messages: Vec<Flash>,
    from_cookie: bool,
}

impl Flashes {
    pub fn push(&mut self, flash: Flash) {
        self.messages.push(flash);
    }

    pub fn messages(&self) -> &[Flash] {
        &self.messages
    }

    /// Whether a cookie was consumed and must be cleared by the response.
    pub fn consumed_cookie(&self) -> bool {
        self.from_cookie
    }
}

impl FromRequestParts<AppState> for Flashes {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(raw) = find_cookie(parts, FLASH_COOKIE) else {
            return Ok(Flashes::default());
        };

        let messages = match flash::decode(&state.config.secret_key, raw) {
            Some(flash) => vec![flash],
            None => {
                tracing::debug!("Discarding flash cookie with a bad signature");
                Vec::new()
            }
        };

        Ok(Flashes {
            messages,
            from_cookie: true,
        })
    }
}

/// Redirect (303) to `to`, carrying `flash` to the next page.
pub fn redirect_with(config: &ServerConfig, to: &str, flash: Flash) -> Response {
    let cookie = format!(
        "{FLASH_COOKIE}={}; {}",
        flash::encode(&config.secret_key, &flash),
        cookie_attributes(config)
    );
    with_cookie(Redirect::to(to).into_response(), &cookie)
}

/// Attach a `Set-Cookie` that removes the flash cookie.
pub fn clear_cookie(config: &ServerConfig, response: Response) -> Response {
    let cookie = format!("{FLASH_COOKIE}=; Max-Age=0; {}", cookie_attributes(config));
    with_cookie(response, &cookie)
}

fn cookie_attributes(config: &ServerConfig) -> &'static str {
    if config.secure_cookies() {
        "Path=/; HttpOnly; SameSite=Lax; Secure"
    } else {
        "Path=/; HttpOnly; SameSite=Lax"
    }
}

fn with_cookie(mut response: Response, cookie: &str) -> Response {
    match HeaderValue::from_str(cookie) {
        Ok(value) => {
            response.headers_mut().append(SET_COOKIE, value);
        }
        Err(e) => tracing::error!(error = %e, "Flash cookie is not a valid header value"),
    }
    response
}

/// Find a cookie by name across every `Cookie` header.
fn find_cookie<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

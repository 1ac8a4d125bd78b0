//! Request handlers.

use std::collections::HashMap;

use axum::{
    Form, Json,
    extract::{Query, State},
    http::{HeaderMap, header::COOKIE, header::SET_COOKIE},
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::ApiResult;
use super::state::AppState;
use crate::html;
use crate::installer::{InstallerOutput, PageRequest};
use crate::session::{SESSION_COOKIE, SessionData, SessionId};
use crate::startup::SettingsStatus;

/// Installer location, also the redirect target after a completed step.
pub const INSTALLER_PATH: &str = "/install";

/// Query parameters for the installer.
#[derive(Debug, Deserialize)]
pub struct InstallerQuery {
    /// Requested page name.
    #[serde(default)]
    pub p: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: state.site.version.clone(),
    })
}

/// Site entry point.
///
/// Serves the application once the site is configured and an explanation
/// with a link to the installer otherwise.
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Response> {
    let status = state.site.settings_status().await;
    if status == SettingsStatus::Configured {
        return Ok("Hello world!".into_response());
    }

    let installer_started = match session_id_from_headers(&headers) {
        Some(id) => state
            .sessions
            .load(&id)
            .await?
            .is_some_and(|data| data.has_installer_data()),
        None => false,
    };

    debug!(?status, installer_started, "serving no-config page");
    Ok(Html(render_no_config(&state, status, installer_started)).into_response())
}

/// Show an installer page.
pub async fn installer_view(
    State(state): State<AppState>,
    Query(query): Query<InstallerQuery>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    run_installer(&state, &headers, &query.p, PageRequest::view()).await
}

/// Submit an installer page.
pub async fn installer_submit(
    State(state): State<AppState>,
    Query(query): Query<InstallerQuery>,
    headers: HeaderMap,
    Form(params): Form<HashMap<String, String>>,
) -> ApiResult<Response> {
    run_installer(&state, &headers, &query.p, PageRequest::submit(params)).await
}

async fn run_installer(
    state: &AppState,
    headers: &HeaderMap,
    requested: &str,
    request: PageRequest,
) -> ApiResult<Response> {
    let (id, mut data, new_session) = start_session(state, headers).await?;
    let fingerprint = state.site.fingerprint.as_str();

    let wizard_state = data.get(fingerprint).cloned().unwrap_or_default();
    let advance = state.wizard.advance(wizard_state, requested, &request);
    let continued = advance.continued();

    if advance.is_complete() {
        if data.remove(fingerprint).is_some() {
            info!(session = %id, "installation complete, installer state cleared");
        }
    } else {
        data.put(fingerprint, advance.state);
    }
    state.sessions.save(&id, data).await?;

    let response = if continued {
        Redirect::to(INSTALLER_PATH).into_response()
    } else {
        Html(advance.output).into_response()
    };

    if new_session {
        let cookie = session_cookie(state, headers, &id);
        Ok((AppendHeaders([(SET_COOKIE, cookie)]), response).into_response())
    } else {
        Ok(response)
    }
}

/// Resume the client's session or start a new one.
///
/// Returns the session id, its data and whether the session is new.
async fn start_session(
    state: &AppState,
    headers: &HeaderMap,
) -> ApiResult<(SessionId, SessionData, bool)> {
    let existing = match session_id_from_headers(headers) {
        Some(id) => state.sessions.load(&id).await?.map(|data| (id, data)),
        None => None,
    };
    if let Some((id, data)) = existing {
        return Ok((id, data, false));
    }

    let id = state.sessions.start().await?;
    let data = state.sessions.load(&id).await?.unwrap_or_default();
    Ok((id, data, true))
}

fn session_id_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|cookie_header| cookie_value(cookie_header, SESSION_COOKIE))
        .and_then(SessionId::parse)
}

fn cookie_value<'a>(cookie_header: &'a str, cookie_name: &str) -> Option<&'a str> {
    cookie_header.split(';').map(str::trim).find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        if name.trim() == cookie_name {
            Some(value.trim())
        } else {
            None
        }
    })
}

/// Whether the client reached us over HTTPS, directly or through a proxy.
fn is_https(headers: &HeaderMap) -> bool {
    headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|proto| proto.eq_ignore_ascii_case("https"))
}

fn session_cookie(state: &AppState, headers: &HeaderMap, id: &SessionId) -> String {
    let secure_flag = if state.site.secure_cookies || is_https(headers) {
        " Secure;"
    } else {
        ""
    };
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax;{} Max-Age={}",
        SESSION_COOKIE, id, secure_flag, state.session_max_age
    )
}

fn render_no_config(state: &AppState, status: SettingsStatus, installer_started: bool) -> String {
    let site = &state.site;
    let mut output = InstallerOutput::new(format!("SciClope {}", site.version));
    let mut section = output.scope("section", &[("class", "sc-noconfig")]);

    section.add_html(&html::element("h1", &[], &format!("SciClope {}", site.version)));
    section.add_html(&html::element(
        "p",
        &[("class", "sc-path")],
        &format!("Installation path: {}", site.install_path.display()),
    ));
    let notice = if status.exists() {
        format!(
            "A settings file was found at {}, but it could not be read.",
            site.settings_file.display()
        )
    } else {
        "No settings file was found. SciClope has to be set up before it can be used.".to_string()
    };
    section.add_html(&html::element("p", &[], &notice));

    let link = if installer_started {
        "Continue the installation"
    } else {
        "Set up SciClope"
    };
    section.add_html(&html::element("a", &[("href", INSTALLER_PATH)], link));
    section.close();

    output.finish()
}

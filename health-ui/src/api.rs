use crate::API_SERVER_URL_NO_TRAILING_SLASH;
use api_structs::ui::analytics::{parse_health_metrics, HealthMetric};
use api_structs::ui::user::CurrentUser;
use backtraced_error::{GlooNetError, SerdeJsonError};
use gloo_net::http::{Request, Response};
use tracing::{debug, info};
use web_sys::RequestCredentials;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Network(#[from] GlooNetError),
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error(transparent)]
    Decode(#[from] SerdeJsonError),
}

/// Health risk history of the signed in user.
pub async fn fetch_health_analytics() -> Result<Vec<HealthMetric>, ApiError> {
    let body = get_text("/api/health-analytics").await?;
    let rows = parse_health_metrics(&body)?;
    info!("Got {} health analytics rows back", rows.len());
    Ok(rows)
}

/// Resolves the auth cookie into a user, fails with a 401 status when signed out.
pub async fn fetch_current_user() -> Result<CurrentUser, ApiError> {
    let body = get_text("/user/me").await?;
    serde_json::from_str(&body)
        .map_err(|e| SerdeJsonError::from_serde_json_error(e, "decoding /user/me", &body).into())
}

async fn get_text(path: &str) -> Result<String, ApiError> {
    let url = format!("{}{}", API_SERVER_URL_NO_TRAILING_SLASH, path);
    debug!("Sending GET {url}");
    let response: Response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| GlooNetError::from_gloo_net_error(e, format!("sending GET {url}")))?;
    if !response.ok() {
        return Err(ApiError::Status {
            url,
            status: response.status(),
        });
    }
    let body = response
        .text()
        .await
        .map_err(|e| GlooNetError::from_gloo_net_error(e, format!("reading body of {url}")))?;
    Ok(body)
}

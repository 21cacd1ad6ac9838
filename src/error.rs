use serde::Deserialize;
use thiserror::Error;

/// Failures surfaced by the panel API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response, with the first error detail the panel reported
    #[error("Request failed with status code {status}")]
    Http { status: u16, detail: Option<String> },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response from panel: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Debug, Deserialize)]
pub struct PanelErrorBody {
    #[serde(default)]
    pub errors: Vec<PanelErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct PanelErrorDetail {
    pub detail: String,
}

impl PanelErrorBody {
    /// Detail of the first reported error, if the body is a panel error document.
    pub fn first_detail(body: &str) -> Option<String> {
        serde_json::from_str::<PanelErrorBody>(body)
            .ok()
            .and_then(|body| body.errors.into_iter().next())
            .map(|error| error.detail)
            .filter(|detail| !detail.is_empty())
    }
}

/// Turn an API failure into the message shown to the user.
pub fn to_human_message(error: &ApiError) -> String {
    match error {
        ApiError::Http {
            detail: Some(detail),
            ..
        } => detail.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_message_prefers_panel_detail() {
        let error = ApiError::Http {
            status: 404,
            detail: Some("not found".to_string()),
        };
        assert_eq!(to_human_message(&error), "not found");
    }

    #[test]
    fn test_human_message_falls_back_to_status() {
        let error = ApiError::Http {
            status: 500,
            detail: None,
        };
        assert_eq!(
            to_human_message(&error),
            "Request failed with status code 500"
        );
    }

    #[test]
    fn test_first_detail() {
        let body = r#"{"errors":[{"code":"NotFoundHttpException","status":"404","detail":"The requested resource could not be found on the server."}]}"#;
        assert_eq!(
            PanelErrorBody::first_detail(body).as_deref(),
            Some("The requested resource could not be found on the server.")
        );
        assert_eq!(PanelErrorBody::first_detail("<html>"), None);
        assert_eq!(PanelErrorBody::first_detail(r#"{"errors":[]}"#), None);
    }
}

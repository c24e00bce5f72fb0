//! Blocking HTTP transport for [`HttpRequest`] values.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// An agent configured for the todo API.
///
/// Status-as-error is disabled so 4xx/5xx responses come back as data; status
/// interpretation belongs to the `parse_*` methods, not the transport.
pub fn default_agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

/// Execute one round-trip and return the response as plain data.
pub fn execute(agent: &ureq::Agent, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
    let result = match (req.method, req.body.as_deref()) {
        (HttpMethod::Get, _) => agent.get(&req.url).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.url).call(),
        (HttpMethod::Post, Some(body)) => {
            let mut builder = agent.post(&req.url);
            for (name, value) in &req.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            builder.send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.url).send_empty(),
    };

    let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(HttpResponse { status, body })
}

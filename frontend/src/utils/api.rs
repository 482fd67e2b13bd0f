use gloo_net::http::Request;
use gloo_net::Error as GlooError;
use crate::config;
use serde::Serialize;

/// Thin client for the UmamiBox server; paths are joined onto the configured backend URL.
pub struct Api;

pub struct RequestWrapper {
    request: Request,
    path: String,
    method: &'static str,
}

impl RequestWrapper {
    fn new(path: &str, method: &'static str) -> Self {
        let full_url = format!("{}{}", config::get_backend_url(), path);
        let request = match method {
            "POST" => Request::post(&full_url),
            _ => Request::get(&full_url),
        };

        Self {
            request,
            path: path.to_string(),
            method,
        }
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, serde_json::Error> {
        let body_string = serde_json::to_string(data)?;
        self.request = self
            .request
            .header("Content-Type", "application/json")
            .body(body_string);
        Ok(self)
    }

    pub async fn send(self) -> Result<gloo_net::http::Response, GlooError> {
        let response = self.request.send().await;
        match &response {
            Ok(resp) if !resp.ok() => {
                log::warn!("{} {} returned {}", self.method, self.path, resp.status());
            }
            Err(e) => log::error!("{} {} failed: {}", self.method, self.path, e),
            _ => {}
        }
        response
    }
}

impl Api {
    pub fn get(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "GET")
    }

    pub fn post(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "POST")
    }
}

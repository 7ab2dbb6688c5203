use crate::core::{Demo, PatternKind, Result, Transcript};
use crate::utils::validation::validate_positive_number;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

pub trait Server {
    fn handle_request(&mut self, url: &str, method: &str) -> Response;
}

#[derive(Debug, Default)]
pub struct Application;

impl Server for Application {
    fn handle_request(&mut self, url: &str, method: &str) -> Response {
        match (url, method) {
            ("/app/status", "GET") => Response::new(200, "Ok"),
            ("/create/user", "POST") => Response::new(201, "User Created"),
            _ => Response::new(404, "Not Ok"),
        }
    }
}

/// Rate-limiting proxy: each URL is forwarded at most `max_allowed_requests` times.
pub struct Nginx<S: Server> {
    app: S,
    max_allowed_requests: usize,
    rate_limiter: HashMap<String, usize>,
}

impl Nginx<Application> {
    pub fn new(max_allowed_requests: usize) -> Result<Self> {
        Self::with_server(Application, max_allowed_requests)
    }
}

impl<S: Server> Nginx<S> {
    pub fn with_server(app: S, max_allowed_requests: usize) -> Result<Self> {
        validate_positive_number("proxy.max_allowed_requests", max_allowed_requests, 1)?;
        Ok(Self {
            app,
            max_allowed_requests,
            rate_limiter: HashMap::new(),
        })
    }

    fn check_rate_limiting(&mut self, url: &str) -> bool {
        let counter = self.rate_limiter.entry(url.to_string()).or_insert(1);
        if *counter > self.max_allowed_requests {
            return false;
        }
        *counter += 1;
        true
    }
}

impl<S: Server> Server for Nginx<S> {
    fn handle_request(&mut self, url: &str, method: &str) -> Response {
        if !self.check_rate_limiting(url) {
            tracing::debug!("Rate limit reached for {}", url);
            return Response::new(403, "Not Allowed");
        }
        self.app.handle_request(url, method)
    }
}

pub struct ProxyDemo {
    max_allowed_requests: usize,
}

impl ProxyDemo {
    pub fn new(max_allowed_requests: usize) -> Self {
        Self {
            max_allowed_requests,
        }
    }
}

impl Default for ProxyDemo {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_ALLOWED_REQUESTS)
    }
}

#[async_trait::async_trait]
impl Demo for ProxyDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Proxy
    }

    async fn run(&self) -> Result<Transcript> {
        let mut transcript = Transcript::new(self.kind());
        let mut nginx = Nginx::new(self.max_allowed_requests)?;

        let requests = [
            ("/app/status", "GET"),
            ("/app/status", "GET"),
            ("/app/status", "GET"),
            ("/create/user", "POST"),
            ("/create/user", "GET"),
        ];
        for (url, method) in requests {
            let response = nginx.handle_request(url, method);
            transcript.extend([
                format!("Url: {}", url),
                format!("HttpCode: {}", response.status),
                format!("Body: {}", response.body),
            ]);
        }

        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_url_is_served_max_times() {
        let mut nginx = Nginx::new(2).unwrap();
        assert_eq!(nginx.handle_request("/app/status", "GET").status, 200);
        assert_eq!(nginx.handle_request("/app/status", "GET").status, 200);
        assert_eq!(
            nginx.handle_request("/app/status", "GET"),
            Response::new(403, "Not Allowed")
        );
        // A different URL has its own budget.
        assert_eq!(nginx.handle_request("/create/user", "POST").status, 201);
    }

    #[test]
    fn test_denied_requests_do_not_reach_the_app() {
        struct Counting(usize);
        impl Server for Counting {
            fn handle_request(&mut self, _url: &str, _method: &str) -> Response {
                self.0 += 1;
                Response::new(200, "Ok")
            }
        }

        let mut nginx = Nginx::with_server(Counting(0), 1).unwrap();
        for _ in 0..5 {
            nginx.handle_request("/x", "GET");
        }
        assert_eq!(nginx.app.0, 1);
    }

    #[test]
    fn test_unknown_route_is_404() {
        let mut nginx = Nginx::new(2).unwrap();
        assert_eq!(
            nginx.handle_request("/create/user", "GET"),
            Response::new(404, "Not Ok")
        );
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        assert!(Nginx::new(0).is_err());
    }

    #[tokio::test]
    async fn test_demo_transcript() {
        let transcript = ProxyDemo::default().run().await.unwrap();
        let codes: Vec<&str> = transcript
            .lines
            .iter()
            .filter(|line| line.starts_with("HttpCode"))
            .map(String::as_str)
            .collect();
        assert_eq!(
            codes,
            vec![
                "HttpCode: 200",
                "HttpCode: 200",
                "HttpCode: 403",
                "HttpCode: 201",
                "HttpCode: 404",
            ]
        );
    }
}

use crate::core::{Demo, PatternKind, Result, Transcript};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, validate_range};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub port: u16,
    pub timeout: Duration,
    pub max_connections: usize,
    pub tls: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 80,
            timeout: Duration::from_secs(30),
            max_connections: 100,
            tls: false,
        }
    }
}

pub type ServerOption = Box<dyn FnOnce(&mut ServerSettings) -> Result<()> + Send>;

pub fn with_port(port: u16) -> ServerOption {
    Box::new(move |settings: &mut ServerSettings| {
        validate_range("port", port, 1, u16::MAX)?;
        settings.port = port;
        Ok(())
    })
}

pub fn with_timeout(timeout: Duration) -> ServerOption {
    Box::new(move |settings: &mut ServerSettings| {
        settings.timeout = timeout;
        Ok(())
    })
}

pub fn with_max_connections(max_connections: usize) -> ServerOption {
    Box::new(move |settings: &mut ServerSettings| {
        validate_positive_number("max_connections", max_connections, 1)?;
        settings.max_connections = max_connections;
        Ok(())
    })
}

pub fn with_tls() -> ServerOption {
    Box::new(|settings: &mut ServerSettings| {
        settings.tls = true;
        Ok(())
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub host: String,
    pub settings: ServerSettings,
}

impl Server {
    /// Options are applied in order over the defaults; later options win.
    pub fn new(host: impl Into<String>, options: Vec<ServerOption>) -> Result<Self> {
        let host = host.into();
        validate_non_empty_string("host", &host)?;

        let mut settings = ServerSettings::default();
        for option in options {
            option(&mut settings)?;
        }
        Ok(Self { host, settings })
    }

    pub fn address(&self) -> String {
        let scheme = if self.settings.tls { "https" } else { "http" };
        format!("{}://{}:{}", scheme, self.host, self.settings.port)
    }

    pub fn describe(&self) -> String {
        format!(
            "Server {} (timeout {}s, max connections {})",
            self.address(),
            self.settings.timeout.as_secs(),
            self.settings.max_connections
        )
    }
}

pub struct FunctionalOptionsDemo;

#[async_trait::async_trait]
impl Demo for FunctionalOptionsDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::FunctionalOptions
    }

    async fn run(&self) -> Result<Transcript> {
        let mut transcript = Transcript::new(self.kind());

        let plain = Server::new("localhost", Vec::new())?;
        transcript.line(plain.describe());

        let tuned = Server::new(
            "localhost",
            vec![
                with_port(8443),
                with_tls(),
                with_timeout(Duration::from_secs(5)),
                with_max_connections(1000),
            ],
        )?;
        transcript.line(tuned.describe());

        match Server::new("localhost", vec![with_max_connections(0)]) {
            Ok(server) => transcript.line(server.describe()),
            Err(e) => transcript.line(format!("Rejected: {}", e)),
        }

        Ok(transcript)
    }
}

use crate::app::patterns::demo_for;
use crate::core::{ConfigProvider, Demo, PatternKind, Transcript};
use crate::utils::error::Result;
use std::io::Write;
use std::time::Instant;

/// Runs the selected demos one after another, in the order they were selected.
pub struct CatalogEngine {
    demos: Vec<Box<dyn Demo>>,
}

impl CatalogEngine {
    pub fn new(demos: Vec<Box<dyn Demo>>) -> Self {
        Self { demos }
    }

    /// An empty pattern list selects every pattern.
    pub fn from_config(config: &dyn ConfigProvider) -> Result<Self> {
        let kinds = if config.patterns().is_empty() {
            PatternKind::ALL.to_vec()
        } else {
            config
                .patterns()
                .iter()
                .map(|name| name.parse::<PatternKind>())
                .collect::<Result<Vec<_>>>()?
        };

        let demos = kinds.into_iter().map(|kind| demo_for(kind, config)).collect();
        Ok(Self::new(demos))
    }

    pub fn kinds(&self) -> Vec<PatternKind> {
        self.demos.iter().map(|demo| demo.kind()).collect()
    }

    pub async fn run(&self) -> Result<Vec<Transcript>> {
        let mut transcripts = Vec::with_capacity(self.demos.len());
        for demo in &self.demos {
            transcripts.push(self.run_one(demo.as_ref()).await?);
        }
        Ok(transcripts)
    }

    /// Like [`run`](Self::run), writing each transcript to `out` as soon as its demo finishes.
    pub async fn run_to<W: Write + Send>(&self, out: &mut W) -> Result<Vec<Transcript>> {
        let mut transcripts = Vec::with_capacity(self.demos.len());
        for demo in &self.demos {
            let transcript = self.run_one(demo.as_ref()).await?;
            write_transcript(out, &transcript)?;
            transcripts.push(transcript);
        }
        out.flush()?;
        Ok(transcripts)
    }

    async fn run_one(&self, demo: &dyn Demo) -> Result<Transcript> {
        let kind = demo.kind();
        tracing::info!("Running {} demo", kind);
        let started = Instant::now();

        match demo.run().await {
            Ok(transcript) => {
                tracing::debug!(
                    "{} demo produced {} lines in {:?}",
                    kind,
                    transcript.lines.len(),
                    started.elapsed()
                );
                Ok(transcript)
            }
            Err(e) => {
                tracing::error!("{} demo failed: {}", kind, e);
                Err(e)
            }
        }
    }
}

pub fn write_transcript<W: Write>(out: &mut W, transcript: &Transcript) -> Result<()> {
    writeln!(out, "=== {} ===", transcript.pattern)?;
    for line in &transcript.lines {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PatternError;

    struct MockConfig {
        patterns: Vec<String>,
    }

    impl ConfigProvider for MockConfig {
        fn patterns(&self) -> &[String] {
            &self.patterns
        }

        fn max_allowed_requests(&self) -> usize {
            2
        }

        fn concurrent_callers(&self) -> usize {
            8
        }
    }

    struct FailingDemo;

    #[async_trait::async_trait]
    impl Demo for FailingDemo {
        fn kind(&self) -> PatternKind {
            PatternKind::Visitor
        }

        async fn run(&self) -> Result<Transcript> {
            Err(PatternError::DemoFailed {
                pattern: "visitor".to_string(),
                message: "boom".to_string(),
            })
        }
    }

    #[test]
    fn test_empty_selection_means_all() {
        let engine = CatalogEngine::from_config(&MockConfig { patterns: vec![] }).unwrap();
        assert_eq!(engine.kinds(), PatternKind::ALL.to_vec());
    }

    #[test]
    fn test_selection_keeps_order() {
        let config = MockConfig {
            patterns: vec!["visitor".to_string(), "adapter".to_string()],
        };
        let engine = CatalogEngine::from_config(&config).unwrap();
        assert_eq!(engine.kinds(), vec![PatternKind::Visitor, PatternKind::Adapter]);
    }

    #[test]
    fn test_unknown_pattern_is_rejected() {
        let config = MockConfig {
            patterns: vec!["bridge".to_string()],
        };
        assert!(matches!(
            CatalogEngine::from_config(&config),
            Err(PatternError::UnknownPattern { .. })
        ));
    }

    #[tokio::test]
    async fn test_run_to_writes_headers_and_lines() {
        let config = MockConfig {
            patterns: vec!["adapter".to_string()],
        };
        let engine = CatalogEngine::from_config(&config).unwrap();
        let mut out = Vec::new();
        let transcripts = engine.run_to(&mut out).await.unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(transcripts.len(), 1);
        assert!(printed.starts_with("=== adapter ===\n"));
        assert!(printed.contains("USB connector is plugged into windows machine."));
    }

    #[tokio::test]
    async fn test_failure_stops_the_run() {
        let engine = CatalogEngine::new(vec![
            Box::new(crate::app::patterns::adapter::AdapterDemo),
            Box::new(FailingDemo),
            Box::new(crate::app::patterns::builder::BuilderDemo),
        ]);
        let mut out = Vec::new();
        assert!(engine.run_to(&mut out).await.is_err());

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("=== adapter ==="));
        assert!(!printed.contains("=== builder ==="));
    }
}

use crate::core::{Demo, PatternKind, Result, Transcript};
use crate::utils::error::PatternError;
use crate::utils::validation::validate_non_empty_string;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computer {
    pub mainboard: String,
    pub cpu: String,
    pub memory: String,
    pub graphics: String,
    pub display: String,
    pub operating_system: String,
}

impl Computer {
    pub fn summary(&self) -> String {
        format!(
            "{} | {} | {} | {} | {} | {}",
            self.mainboard, self.cpu, self.memory, self.graphics, self.display, self.operating_system
        )
    }
}

#[derive(Debug, Clone)]
pub struct ComputerBuilder {
    mainboard: Option<String>,
    cpu: Option<String>,
    memory: Option<String>,
    graphics: Option<String>,
    display: Option<String>,
    operating_system: Option<String>,
}

impl ComputerBuilder {
    pub fn new() -> Self {
        Self {
            mainboard: None,
            cpu: None,
            memory: None,
            graphics: None,
            display: None,
            operating_system: Some("Default OS".to_string()),
        }
    }

    pub fn mainboard(mut self, mainboard: impl Into<String>) -> Self {
        self.mainboard = Some(mainboard.into());
        self
    }

    pub fn cpu(mut self, cpu: impl Into<String>) -> Self {
        self.cpu = Some(cpu.into());
        self
    }

    pub fn memory(mut self, memory: impl Into<String>) -> Self {
        self.memory = Some(memory.into());
        self
    }

    pub fn graphics(mut self, graphics: impl Into<String>) -> Self {
        self.graphics = Some(graphics.into());
        self
    }

    pub fn display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    pub fn operating_system(mut self, operating_system: impl Into<String>) -> Self {
        self.operating_system = Some(operating_system.into());
        self
    }

    pub fn without_operating_system(mut self) -> Self {
        self.operating_system = None;
        self
    }

    /// Fills unset parts with defaults; a computer without an OS is not shipped.
    pub fn build(self) -> Result<Computer> {
        let operating_system = self.operating_system.ok_or_else(|| PatternError::BuildError {
            message: "install failed: no operating system".to_string(),
        })?;
        validate_non_empty_string("operating_system", &operating_system)?;

        Ok(Computer {
            mainboard: self
                .mainboard
                .unwrap_or_else(|| "Default mainboard".to_string()),
            cpu: self.cpu.unwrap_or_else(|| "Default CPU".to_string()),
            memory: self.memory.unwrap_or_else(|| "Default memory".to_string()),
            graphics: self
                .graphics
                .unwrap_or_else(|| "Default graphics card".to_string()),
            display: self.display.unwrap_or_else(|| "Default display".to_string()),
            operating_system,
        })
    }
}

impl Default for ComputerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct BuilderDemo;

#[async_trait::async_trait]
impl Demo for BuilderDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Builder
    }

    async fn run(&self) -> Result<Transcript> {
        let mut transcript = Transcript::new(self.kind());

        let default = ComputerBuilder::new().build()?;
        transcript.line(default.summary());

        let workstation = ComputerBuilder::new()
            .cpu("16-core CPU")
            .memory("64GB")
            .graphics("RTX card")
            .operating_system("Linux")
            .build()?;
        transcript.line(workstation.summary());

        match ComputerBuilder::new().without_operating_system().build() {
            Ok(computer) => transcript.line(computer.summary()),
            Err(e) => transcript.line(format!("Rejected: {}", e)),
        }

        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_unset_parts() {
        let computer = ComputerBuilder::new().cpu("fast").build().unwrap();
        assert_eq!(computer.cpu, "fast");
        assert_eq!(computer.mainboard, "Default mainboard");
        assert_eq!(computer.operating_system, "Default OS");
    }

    #[test]
    fn test_missing_operating_system_fails() {
        let err = ComputerBuilder::new()
            .without_operating_system()
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "Build failed: install failed: no operating system");
    }

    #[test]
    fn test_blank_operating_system_fails() {
        assert!(ComputerBuilder::new().operating_system(" ").build().is_err());
    }

    #[tokio::test]
    async fn test_demo_transcript() {
        let transcript = BuilderDemo.run().await.unwrap();
        assert_eq!(transcript.lines.len(), 3);
        assert!(transcript.lines[1].contains("16-core CPU"));
        assert!(transcript.lines[1].ends_with("Linux"));
        assert_eq!(
            transcript.lines[2],
            "Rejected: Build failed: install failed: no operating system"
        );
    }
}

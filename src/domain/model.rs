use crate::utils::error::PatternError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    AbstractFactory,
    Adapter,
    Builder,
    ChainOfResponsibility,
    Decorator,
    Facade,
    FunctionalOptions,
    Mediator,
    Memento,
    Observer,
    Prototype,
    Proxy,
    ServiceLocator,
    SimpleFactory,
    Singleton,
    Specification,
    Strategy,
    Visitor,
}

impl PatternKind {
    pub const ALL: [PatternKind; 18] = [
        PatternKind::AbstractFactory,
        PatternKind::Adapter,
        PatternKind::Builder,
        PatternKind::ChainOfResponsibility,
        PatternKind::Decorator,
        PatternKind::Facade,
        PatternKind::FunctionalOptions,
        PatternKind::Mediator,
        PatternKind::Memento,
        PatternKind::Observer,
        PatternKind::Prototype,
        PatternKind::Proxy,
        PatternKind::ServiceLocator,
        PatternKind::SimpleFactory,
        PatternKind::Singleton,
        PatternKind::Specification,
        PatternKind::Strategy,
        PatternKind::Visitor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::AbstractFactory => "abstract-factory",
            PatternKind::Adapter => "adapter",
            PatternKind::Builder => "builder",
            PatternKind::ChainOfResponsibility => "chain-of-responsibility",
            PatternKind::Decorator => "decorator",
            PatternKind::Facade => "facade",
            PatternKind::FunctionalOptions => "functional-options",
            PatternKind::Mediator => "mediator",
            PatternKind::Memento => "memento",
            PatternKind::Observer => "observer",
            PatternKind::Prototype => "prototype",
            PatternKind::Proxy => "proxy",
            PatternKind::ServiceLocator => "service-locator",
            PatternKind::SimpleFactory => "simple-factory",
            PatternKind::Singleton => "singleton",
            PatternKind::Specification => "specification",
            PatternKind::Strategy => "strategy",
            PatternKind::Visitor => "visitor",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            PatternKind::AbstractFactory => "families of related products behind one factory trait",
            PatternKind::Adapter => "make an incompatible machine fit the expected port",
            PatternKind::Builder => "assemble a computer step by step with defaults",
            PatternKind::ChainOfResponsibility => "pass a request up a chain of managers",
            PatternKind::Decorator => "wrap beverages and outfits with extra behaviour",
            PatternKind::Facade => "one fund trades across several holdings",
            PatternKind::FunctionalOptions => "configure a server with option closures",
            PatternKind::Mediator => "a station manager coordinates trains",
            PatternKind::Memento => "undo and redo over recorded service snapshots",
            PatternKind::Observer => "weather displays subscribe to measurements",
            PatternKind::Prototype => "clone fighters from a prototype registry",
            PatternKind::Proxy => "rate-limiting proxy in front of an application",
            PatternKind::ServiceLocator => "resolve services lazily or by type from a registry",
            PatternKind::SimpleFactory => "pick a PDF convertor by file type",
            PatternKind::Singleton => "one instance under many concurrent callers",
            PatternKind::Specification => "compose business rules with and/or/not",
            PatternKind::Strategy => "swap database connectors and duck behaviours",
            PatternKind::Visitor => "render shapes as JSON, XML and area",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        PatternKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| PatternError::UnknownPattern {
                name: s.to_string(),
            })
    }
}

/// Ordered output produced by one demo run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    pub pattern: PatternKind,
    pub lines: Vec<String>,
}

impl Transcript {
    pub fn new(pattern: PatternKind) -> Self {
        Self {
            pattern,
            lines: Vec::new(),
        }
    }

    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_kind_round_trips_through_name() {
        for kind in PatternKind::ALL {
            assert_eq!(kind.name().parse::<PatternKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_pattern_kind_accepts_snake_case_and_spaces() {
        assert_eq!(
            " Chain_Of_Responsibility ".parse::<PatternKind>().unwrap(),
            PatternKind::ChainOfResponsibility
        );
        assert!("bridge".parse::<PatternKind>().is_err());
        assert_eq!(
            "service_locator".parse::<PatternKind>().unwrap(),
            PatternKind::ServiceLocator
        );
    }

    #[test]
    fn test_transcript_collects_lines() {
        let mut transcript = Transcript::new(PatternKind::Proxy);
        transcript.line("first");
        transcript.extend(["second", "third"]);
        assert_eq!(transcript.lines.len(), 3);
        assert!(transcript.contains("sec"));
    }
}

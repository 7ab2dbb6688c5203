use crate::core::{Demo, PatternKind, Result, Transcript};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Leave,
    Raise,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub kind: RequestKind,
    pub content: String,
    pub number: u32,
}

impl Request {
    pub fn leave(content: impl Into<String>, days: u32) -> Self {
        Self {
            kind: RequestKind::Leave,
            content: content.into(),
            number: days,
        }
    }

    pub fn raise(content: impl Into<String>, amount: u32) -> Self {
        Self {
            kind: RequestKind::Raise,
            content: content.into(),
            number: amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Approved,
    Deferred,
}

/// Decides what this manager can, or `None` to pass the request up.
type Rule = fn(&Request) -> Option<Verdict>;

pub struct Manager {
    title: &'static str,
    name: String,
    rule: Rule,
    superior: Option<Box<Manager>>,
}

impl Manager {
    /// Approves leave of up to two days.
    pub fn common_manager(name: impl Into<String>) -> Self {
        Self::new("CommonManager", name, |request| match request.kind {
            RequestKind::Leave if request.number <= 2 => Some(Verdict::Approved),
            _ => None,
        })
    }

    /// Approves leave of up to five days.
    pub fn majordomo(name: impl Into<String>) -> Self {
        Self::new("Majordomo", name, |request| match request.kind {
            RequestKind::Leave if request.number <= 5 => Some(Verdict::Approved),
            _ => None,
        })
    }

    /// Final say: any leave, raises up to 500; larger raises are deferred.
    pub fn general_manager(name: impl Into<String>) -> Self {
        Self::new("GeneralManager", name, |request| match request.kind {
            RequestKind::Leave => Some(Verdict::Approved),
            RequestKind::Raise if request.number <= 500 => Some(Verdict::Approved),
            RequestKind::Raise => Some(Verdict::Deferred),
        })
    }

    fn new(title: &'static str, name: impl Into<String>, rule: Rule) -> Self {
        Self {
            title,
            name: name.into(),
            rule,
            superior: None,
        }
    }

    pub fn with_superior(mut self, superior: Manager) -> Self {
        self.superior = Some(Box::new(superior));
        self
    }

    pub fn handle(&self, request: &Request) -> String {
        match (self.rule)(request) {
            Some(Verdict::Approved) => format!(
                "{} {}: {} amount {} approved",
                self.title, self.name, request.content, request.number
            ),
            Some(Verdict::Deferred) => format!(
                "{} {}: {} amount {} will be considered later",
                self.title, self.name, request.content, request.number
            ),
            None => match &self.superior {
                Some(superior) => {
                    tracing::debug!("{} {} passes request to superior", self.title, self.name);
                    superior.handle(request)
                }
                None => format!("No one handled: {} amount {}", request.content, request.number),
            },
        }
    }
}

pub fn default_chain() -> Manager {
    Manager::common_manager("jinli").with_superior(
        Manager::majordomo("zongjian").with_superior(Manager::general_manager("zhongjingli")),
    )
}

pub struct ChainOfResponsibilityDemo;

#[async_trait::async_trait]
impl Demo for ChainOfResponsibilityDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::ChainOfResponsibility
    }

    async fn run(&self) -> Result<Transcript> {
        let mut transcript = Transcript::new(self.kind());
        let chain = default_chain();

        let requests = [
            Request::leave("I need leave", 1),
            Request::leave("I need leave", 4),
            Request::leave("I still need leave", 10),
            Request::raise("I want a raise", 500),
            Request::raise("I want a bigger raise", 1000),
        ];
        for request in &requests {
            transcript.line(chain.handle(request));
        }

        let lone = Manager::common_manager("solo");
        transcript.line(lone.handle(&Request::raise("I want a raise", 10)));

        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_climb_until_handled() {
        let chain = default_chain();
        assert!(chain
            .handle(&Request::leave("leave", 2))
            .starts_with("CommonManager jinli"));
        assert!(chain
            .handle(&Request::leave("leave", 3))
            .starts_with("Majordomo zongjian"));
        assert!(chain
            .handle(&Request::leave("leave", 30))
            .starts_with("GeneralManager zhongjingli"));
    }

    #[test]
    fn test_general_manager_defers_large_raise() {
        let line = default_chain().handle(&Request::raise("raise", 501));
        assert_eq!(
            line,
            "GeneralManager zhongjingli: raise amount 501 will be considered later"
        );
    }

    #[test]
    fn test_end_of_chain_without_decision() {
        let line = Manager::majordomo("m").handle(&Request::raise("raise", 1));
        assert_eq!(line, "No one handled: raise amount 1");
    }

    #[tokio::test]
    async fn test_demo_transcript() {
        let transcript = ChainOfResponsibilityDemo.run().await.unwrap();
        assert_eq!(transcript.lines.len(), 6);
        assert_eq!(
            transcript.lines[0],
            "CommonManager jinli: I need leave amount 1 approved"
        );
        assert_eq!(
            transcript.lines[1],
            "Majordomo zongjian: I need leave amount 4 approved"
        );
        assert_eq!(
            transcript.lines[3],
            "GeneralManager zhongjingli: I want a raise amount 500 approved"
        );
        assert_eq!(transcript.lines[5], "No one handled: I want a raise amount 10");
    }
}

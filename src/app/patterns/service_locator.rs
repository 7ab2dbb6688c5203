use crate::core::{Demo, PatternKind, Result, Transcript};
use crate::utils::error::PatternError;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

pub trait ServiceA: Send + Sync {
    fn execute(&self) -> String;
}

pub trait ServiceB: Send + Sync {
    fn execute(&self) -> String;
}

#[derive(Debug, Default)]
pub struct DefaultServiceA;

impl ServiceA for DefaultServiceA {
    fn execute(&self) -> String {
        "ServiceA is doing its work".to_string()
    }
}

#[derive(Debug, Default)]
pub struct DefaultServiceB;

impl ServiceB for DefaultServiceB {
    fn execute(&self) -> String {
        "ServiceB is doing its work".to_string()
    }
}

/// Two lookup styles: fixed accessors created on first use, and a registry keyed by type.
#[derive(Default)]
pub struct ServiceLocator {
    service_a: OnceLock<Arc<dyn ServiceA>>,
    service_b: OnceLock<Arc<dyn ServiceB>>,
    registry: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
}

impl ServiceLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global() -> &'static ServiceLocator {
        static INSTANCE: OnceLock<ServiceLocator> = OnceLock::new();
        INSTANCE.get_or_init(ServiceLocator::new)
    }

    pub fn service_a(&self) -> Arc<dyn ServiceA> {
        Arc::clone(self.service_a.get_or_init(|| {
            tracing::debug!("Creating ServiceA on first use");
            Arc::new(DefaultServiceA)
        }))
    }

    pub fn service_b(&self) -> Arc<dyn ServiceB> {
        Arc::clone(self.service_b.get_or_init(|| {
            tracing::debug!("Creating ServiceB on first use");
            Arc::new(DefaultServiceB)
        }))
    }

    /// Registers `instance` under its type, replacing any earlier registration.
    pub fn register<T: Send + Sync + 'static>(&self, instance: T) {
        self.registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TypeId::of::<T>(), Box::new(Arc::new(instance)));
    }

    pub fn get<T: Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<T>())
            .and_then(|service| service.downcast_ref::<Arc<T>>())
            .cloned()
            .ok_or_else(|| PatternError::MissingService {
                name: type_name::<T>().to_string(),
            })
    }

    pub fn is_registered<T: 'static>(&self) -> bool {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<T>())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mailer {
    pub sender: String,
}

impl Mailer {
    pub fn send(&self, to: &str) -> String {
        format!("Mail from {} to {}", self.sender, to)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Clock {
    pub zone: &'static str,
}

pub struct ServiceLocatorDemo;

#[async_trait::async_trait]
impl Demo for ServiceLocatorDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::ServiceLocator
    }

    async fn run(&self) -> Result<Transcript> {
        let mut transcript = Transcript::new(self.kind());
        let locator = ServiceLocator::new();

        transcript.line(locator.service_a().execute());
        transcript.line(locator.service_b().execute());

        locator.register(Mailer {
            sender: "marsonshine".to_string(),
        });
        let mailer = locator.get::<Mailer>()?;
        transcript.line(mailer.send("summerzhu"));

        match locator.get::<Clock>() {
            Ok(clock) => transcript.line(format!("Clock in {}", clock.zone)),
            Err(e) => transcript.line(format!("Rejected: {}", e)),
        }

        Ok(transcript)
    }
}

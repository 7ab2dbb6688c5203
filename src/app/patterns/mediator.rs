use crate::core::{Demo, PatternKind, Result, Transcript};
use std::collections::{HashMap, VecDeque};

pub trait Mediator {
    fn can_arrive(&mut self, train: &str) -> bool;
    /// `train` is leaving. Returns the waiting train the platform passed to, if any.
    fn notify_about_departure(&mut self, train: &str) -> Option<String>;
}

pub trait Train {
    fn name(&self) -> &str;
    fn kind(&self) -> &'static str;

    fn arrive(&self, mediator: &mut dyn Mediator) -> String {
        if mediator.can_arrive(self.name()) {
            format!("{} {}: Arrived", self.kind(), self.name())
        } else {
            format!("{} {}: Arrival blocked, waiting", self.kind(), self.name())
        }
    }

    fn depart(&self, mediator: &mut dyn Mediator) -> (String, Option<String>) {
        let line = format!("{} {}: Leaving", self.kind(), self.name());
        (line, mediator.notify_about_departure(self.name()))
    }

    fn permit_arrival(&self) -> String {
        format!("{} {}: Arrival permitted, arriving", self.kind(), self.name())
    }
}

pub struct PassengerTrain {
    name: String,
}

impl PassengerTrain {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Train for PassengerTrain {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "PassengerTrain"
    }
}

pub struct FreightTrain {
    name: String,
}

impl FreightTrain {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Train for FreightTrain {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "FreightTrain"
    }
}

/// Owns the single platform. Waiting trains are served first come, first served.
#[derive(Debug)]
pub struct StationManager {
    occupant: Option<String>,
    queue: VecDeque<String>,
}

impl StationManager {
    pub fn new() -> Self {
        Self {
            occupant: None,
            queue: VecDeque::new(),
        }
    }

    pub fn waiting(&self) -> usize {
        self.queue.len()
    }

    pub fn occupant(&self) -> Option<&str> {
        self.occupant.as_deref()
    }
}

impl Default for StationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Mediator for StationManager {
    fn can_arrive(&mut self, train: &str) -> bool {
        match self.occupant.as_deref() {
            None => {
                self.occupant = Some(train.to_string());
                true
            }
            Some(current) if current == train => true,
            Some(_) => {
                if !self.queue.iter().any(|waiting| waiting == train) {
                    self.queue.push_back(train.to_string());
                }
                false
            }
        }
    }

    fn notify_about_departure(&mut self, train: &str) -> Option<String> {
        if self.occupant.as_deref() != Some(train) {
            // Only the occupant frees the platform; a waiting train just leaves the queue.
            self.queue.retain(|waiting| waiting != train);
            return None;
        }
        self.occupant = self.queue.pop_front();
        self.occupant.clone()
    }
}

pub struct MediatorDemo;

impl MediatorDemo {
    fn depart(
        trains: &HashMap<String, Box<dyn Train + Send + Sync>>,
        name: &str,
        station: &mut StationManager,
        transcript: &mut Transcript,
    ) {
        let Some(train) = trains.get(name) else {
            tracing::warn!("No train named {}", name);
            return;
        };
        let (line, next) = train.depart(station);
        transcript.line(line);
        if let Some(next) = next.and_then(|next| trains.get(&next)) {
            transcript.line(next.permit_arrival());
        }
    }
}

#[async_trait::async_trait]
impl Demo for MediatorDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Mediator
    }

    async fn run(&self) -> Result<Transcript> {
        let mut transcript = Transcript::new(self.kind());
        let mut station = StationManager::new();

        let mut trains: HashMap<String, Box<dyn Train + Send + Sync>> = HashMap::new();
        trains.insert("P1".to_string(), Box::new(PassengerTrain::new("P1")));
        trains.insert("F1".to_string(), Box::new(FreightTrain::new("F1")));
        trains.insert("P2".to_string(), Box::new(PassengerTrain::new("P2")));

        for name in ["P1", "F1", "P2"] {
            if let Some(train) = trains.get(name) {
                transcript.line(train.arrive(&mut station));
            }
        }
        tracing::debug!("{} trains waiting for the platform", station.waiting());

        for name in ["P1", "F1", "P2"] {
            Self::depart(&trains, name, &mut station, &mut transcript);
        }

        Ok(transcript)
    }
}

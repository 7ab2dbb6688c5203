use crate::core::{Demo, PatternKind, Result, Transcript};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MotorType {
    Kawasaki,
    Honda,
    Suzuki,
    Ducati,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceData {
    pub id: usize,
    pub personal_name: String,
    pub model: MotorType,
    pub price: f32,
    pub date: DateTime<Utc>,
}

impl ServiceData {
    pub fn new(personal_name: impl Into<String>, model: MotorType, price: f32, date: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            personal_name: personal_name.into(),
            model,
            price,
            date,
        }
    }
}

impl fmt::Display for ServiceData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{} {} {:?} {:.2} {}}}",
            self.id,
            self.personal_name,
            self.model,
            self.price,
            self.date.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// Snapshots with a cursor. Position 0 means "before the first change";
/// position `n` refers to the `n`th recorded snapshot.
#[derive(Debug, Default)]
pub struct History {
    snapshots: Vec<ServiceData>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a change at the position after the cursor, overwriting the snapshot
    /// stored there. Later snapshots stay reachable through redo.
    pub fn record(&mut self, mut data: ServiceData) -> ServiceData {
        let index = self.cursor;
        self.cursor += 1;
        data.id = self.cursor;
        match self.snapshots.get_mut(index) {
            Some(slot) => *slot = data.clone(),
            None => self.snapshots.push(data.clone()),
        }
        data
    }

    pub fn undo(&mut self) -> Option<&ServiceData> {
        self.cursor = self.cursor.saturating_sub(1);
        self.current()
    }

    pub fn redo(&mut self) -> Option<&ServiceData> {
        if self.cursor < self.snapshots.len() {
            self.cursor += 1;
        }
        self.current()
    }

    pub fn current(&self) -> Option<&ServiceData> {
        self.cursor
            .checked_sub(1)
            .and_then(|index| self.snapshots.get(index))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

fn describe(snapshot: Option<&ServiceData>) -> String {
    match snapshot {
        Some(data) => format!("1 : {}", data),
        None => "1 : <nothing recorded>".to_string(),
    }
}

pub struct MementoDemo;

#[async_trait::async_trait]
impl Demo for MementoDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Memento
    }

    async fn run(&self) -> Result<Transcript> {
        let mut transcript = Transcript::new(self.kind());
        let mut history = History::new();
        let rule = "-".repeat(100);

        let services = [
            ("marsonshine", MotorType::Honda, 15200.0),
            ("summerzhu", MotorType::Kawasaki, 22350.0),
            ("xixi", MotorType::Suzuki, 52220.0),
        ];
        for (name, model, price) in services {
            let recorded = history.record(ServiceData::new(name, model, price, Utc::now()));
            transcript.line(recorded.to_string());
        }

        let line = describe(history.undo());
        transcript.extend([line, rule.clone()]);
        let line = describe(history.undo());
        transcript.extend([line, rule.clone()]);
        let line = describe(history.redo());
        transcript.extend([line, rule.clone()]);
        let line = describe(history.redo());
        transcript.extend([line, rule]);

        tracing::debug!("History cursor at {} of {}", history.cursor(), history.len());
        Ok(transcript)
    }
}

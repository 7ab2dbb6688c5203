use crate::core::{Demo, PatternKind, Result, Transcript};

/// The port the client knows how to use.
pub trait LightningPort {
    fn insert_into_lightning_port(&self) -> Vec<String>;
}

pub struct Mac;

impl LightningPort for Mac {
    fn insert_into_lightning_port(&self) -> Vec<String> {
        vec!["Lightning connector is plugged into mac machine.".to_string()]
    }
}

/// Only speaks USB; cannot be handed to the client directly.
pub struct Windows;

impl Windows {
    pub fn insert_into_usb_port(&self) -> String {
        "USB connector is plugged into windows machine.".to_string()
    }
}

pub struct WindowsAdapter {
    machine: Windows,
}

impl WindowsAdapter {
    pub fn new(machine: Windows) -> Self {
        Self { machine }
    }
}

impl LightningPort for WindowsAdapter {
    fn insert_into_lightning_port(&self) -> Vec<String> {
        vec![
            "Adapter converts Lightning signal to USB.".to_string(),
            self.machine.insert_into_usb_port(),
        ]
    }
}

pub struct Client;

impl Client {
    pub fn insert_lightning_connector(&self, computer: &dyn LightningPort) -> Vec<String> {
        let mut lines = vec!["Client inserts Lightning connector into computer.".to_string()];
        lines.extend(computer.insert_into_lightning_port());
        lines
    }
}

pub struct AdapterDemo;

#[async_trait::async_trait]
impl Demo for AdapterDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Adapter
    }

    async fn run(&self) -> Result<Transcript> {
        let mut transcript = Transcript::new(self.kind());
        let client = Client;

        transcript.extend(client.insert_lightning_connector(&Mac));

        let adapter = WindowsAdapter::new(Windows);
        transcript.extend(client.insert_lightning_connector(&adapter));

        Ok(transcript)
    }
}

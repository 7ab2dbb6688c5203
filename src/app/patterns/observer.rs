use crate::core::{Demo, PatternKind, Result, Transcript};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub temperature: f32,
    pub humidity: f32,
    pub pressure: f32,
}

pub trait Observer: Send {
    fn update(&mut self, measurements: &Measurements);
    fn display(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(u64);

pub trait Subject {
    fn register(&mut self, observer: Box<dyn Observer>) -> ObserverId;
    fn remove(&mut self, id: ObserverId) -> bool;
    fn notify_all(&mut self) -> Vec<String>;
}

#[derive(Default)]
pub struct WeatherData {
    observers: Vec<(ObserverId, Box<dyn Observer>)>,
    next_id: u64,
    measurements: Option<Measurements>,
}

impl WeatherData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Stores the reading and returns what each observer displayed, in notification order.
    pub fn set_measurements(&mut self, temperature: f32, humidity: f32, pressure: f32) -> Vec<String> {
        self.measurements = Some(Measurements {
            temperature,
            humidity,
            pressure,
        });
        self.measurements_changed()
    }

    fn measurements_changed(&mut self) -> Vec<String> {
        self.notify_all()
    }
}

impl Subject for WeatherData {
    fn register(&mut self, observer: Box<dyn Observer>) -> ObserverId {
        self.next_id += 1;
        let id = ObserverId(self.next_id);
        self.observers.push((id, observer));
        id
    }

    /// Swap-removes: the last observer takes the removed one's slot.
    fn remove(&mut self, id: ObserverId) -> bool {
        match self.observers.iter().position(|(existing, _)| *existing == id) {
            Some(index) => {
                self.observers.swap_remove(index);
                true
            }
            None => false,
        }
    }

    fn notify_all(&mut self) -> Vec<String> {
        let Some(measurements) = self.measurements else {
            return Vec::new();
        };
        self.observers
            .iter_mut()
            .map(|(_, observer)| {
                observer.update(&measurements);
                observer.display()
            })
            .collect()
    }
}

pub struct StatDisplay {
    max_temp: f32,
    min_temp: f32,
    temp_sum: f32,
    num_readings: u32,
}

impl StatDisplay {
    pub fn new() -> Self {
        Self {
            max_temp: 0.0,
            min_temp: 200.0,
            temp_sum: 0.0,
            num_readings: 0,
        }
    }
}

impl Default for StatDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for StatDisplay {
    fn update(&mut self, measurements: &Measurements) {
        let temp = measurements.temperature;
        self.temp_sum += temp;
        self.num_readings += 1;

        if temp > self.max_temp {
            self.max_temp = temp;
        }
        if temp < self.min_temp {
            self.min_temp = temp;
        }
    }

    fn display(&self) -> String {
        let avg = if self.num_readings == 0 {
            0.0
        } else {
            self.temp_sum / self.num_readings as f32
        };
        format!(
            "Avg/Max/Min temperature = {:.1}/{:.1}/{:.1}",
            avg, self.max_temp, self.min_temp
        )
    }
}

#[derive(Default)]
pub struct ForecastDisplay {
    current_pressure: f32,
    last_pressure: f32,
}

impl ForecastDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Observer for ForecastDisplay {
    fn update(&mut self, measurements: &Measurements) {
        self.last_pressure = self.current_pressure;
        self.current_pressure = measurements.pressure;
    }

    fn display(&self) -> String {
        let outlook = if self.current_pressure > self.last_pressure {
            "Improving weather on the way!"
        } else if self.current_pressure < self.last_pressure {
            "Watch out for cooler, rainy weather!"
        } else {
            "More of the same."
        };
        format!("Forecast : {}", outlook)
    }
}

#[derive(Default)]
pub struct CurrentConditionsDisplay {
    temperature: f32,
    humidity: f32,
}

impl CurrentConditionsDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Observer for CurrentConditionsDisplay {
    fn update(&mut self, measurements: &Measurements) {
        self.temperature = measurements.temperature;
        self.humidity = measurements.humidity;
    }

    fn display(&self) -> String {
        format!(
            "Current conditions: {:.1}F degrees and {:.1}% humidity",
            self.temperature, self.humidity
        )
    }
}

pub struct ObserverDemo;

#[async_trait::async_trait]
impl Demo for ObserverDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Observer
    }

    async fn run(&self) -> Result<Transcript> {
        let mut transcript = Transcript::new(self.kind());
        let mut weather = WeatherData::new();

        let current = weather.register(Box::new(CurrentConditionsDisplay::new()));
        weather.register(Box::new(StatDisplay::new()));
        weather.register(Box::new(ForecastDisplay::new()));

        for (temperature, humidity, pressure) in [(80.0, 65.0, 30.4), (82.0, 70.0, 29.2), (78.0, 90.0, 29.2)] {
            transcript.extend(weather.set_measurements(temperature, humidity, pressure));
        }

        if weather.remove(current) {
            tracing::debug!("Removed current conditions display");
            transcript.line("-- current conditions display unsubscribed --");
        }
        transcript.extend(weather.set_measurements(62.0, 90.0, 28.1));

        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_display_tracks_avg_max_min() {
        let mut weather = WeatherData::new();
        weather.register(Box::new(StatDisplay::new()));

        assert_eq!(
            weather.set_measurements(80.0, 65.0, 30.4),
            vec!["Avg/Max/Min temperature = 80.0/80.0/80.0"]
        );
        weather.set_measurements(82.0, 70.0, 29.2);
        assert_eq!(
            weather.set_measurements(78.0, 90.0, 29.2),
            vec!["Avg/Max/Min temperature = 80.0/82.0/78.0"]
        );
    }

    #[test]
    fn test_forecast_follows_pressure_trend() {
        let mut weather = WeatherData::new();
        weather.register(Box::new(ForecastDisplay::new()));

        assert_eq!(
            weather.set_measurements(80.0, 65.0, 30.4),
            vec!["Forecast : Improving weather on the way!"]
        );
        assert_eq!(
            weather.set_measurements(82.0, 70.0, 29.2),
            vec!["Forecast : Watch out for cooler, rainy weather!"]
        );
        assert_eq!(
            weather.set_measurements(78.0, 90.0, 29.2),
            vec!["Forecast : More of the same."]
        );
    }

    #[test]
    fn test_remove_swaps_last_observer_into_slot() {
        let mut weather = WeatherData::new();
        let first = weather.register(Box::new(CurrentConditionsDisplay::new()));
        weather.register(Box::new(StatDisplay::new()));
        weather.register(Box::new(ForecastDisplay::new()));

        assert!(weather.remove(first));
        assert_eq!(weather.observer_count(), 2);

        let lines = weather.set_measurements(70.0, 50.0, 30.0);
        assert!(lines[0].starts_with("Forecast"));
        assert!(lines[1].starts_with("Avg/Max/Min"));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut weather = WeatherData::new();
        let id = weather.register(Box::new(StatDisplay::new()));
        assert!(weather.remove(id));
        assert!(!weather.remove(id));
        assert_eq!(weather.observer_count(), 0);
    }

    #[test]
    fn test_notify_without_measurements_is_silent() {
        let mut weather = WeatherData::new();
        weather.register(Box::new(StatDisplay::new()));
        assert!(weather.notify_all().is_empty());
    }

    #[tokio::test]
    async fn test_demo_transcript() {
        let transcript = ObserverDemo.run().await.unwrap();
        assert_eq!(
            transcript.lines[0],
            "Current conditions: 80.0F degrees and 65.0% humidity"
        );
        assert_eq!(transcript.lines.len(), 12);
        assert_eq!(
            transcript.lines[10],
            "Forecast : Watch out for cooler, rainy weather!"
        );
        assert_eq!(
            transcript.lines[11],
            "Avg/Max/Min temperature = 75.5/82.0/62.0"
        );
    }
}

use crate::core::{Demo, PatternKind, Result, Transcript};

/// Price in cents.
pub trait Beverage {
    fn cost(&self) -> u32;
    fn description(&self) -> String;
}

pub struct DarkRoast;

impl Beverage for DarkRoast {
    fn cost(&self) -> u32 {
        99
    }

    fn description(&self) -> String {
        "Dark Roast Coffee".to_string()
    }
}

pub struct Espresso;

impl Beverage for Espresso {
    fn cost(&self) -> u32 {
        199
    }

    fn description(&self) -> String {
        "Espresso".to_string()
    }
}

pub struct Mocha {
    beverage: Box<dyn Beverage>,
}

impl Mocha {
    pub fn new(beverage: Box<dyn Beverage>) -> Box<dyn Beverage> {
        Box::new(Self { beverage })
    }
}

impl Beverage for Mocha {
    fn cost(&self) -> u32 {
        self.beverage.cost() + 20
    }

    fn description(&self) -> String {
        format!("{}, Mocha", self.beverage.description())
    }
}

pub struct Whip {
    beverage: Box<dyn Beverage>,
}

impl Whip {
    pub fn new(beverage: Box<dyn Beverage>) -> Box<dyn Beverage> {
        Box::new(Self { beverage })
    }
}

impl Beverage for Whip {
    fn cost(&self) -> u32 {
        self.beverage.cost() + 10
    }

    fn description(&self) -> String {
        format!("{}, Whip", self.beverage.description())
    }
}

// Clothing decorators: each piece optionally wraps the piece worn beneath it.

pub trait Finery {
    fn pieces(&self) -> Vec<&'static str>;
}

pub struct TShirts {
    inner: Option<Box<dyn Finery>>,
}

impl TShirts {
    pub fn new(inner: Option<Box<dyn Finery>>) -> Box<dyn Finery> {
        Box::new(Self { inner })
    }
}

impl Finery for TShirts {
    fn pieces(&self) -> Vec<&'static str> {
        let mut pieces = vec!["T-shirt"];
        if let Some(inner) = &self.inner {
            pieces.extend(inner.pieces());
        }
        pieces
    }
}

pub struct BigTrouser {
    inner: Option<Box<dyn Finery>>,
}

impl BigTrouser {
    pub fn new(inner: Option<Box<dyn Finery>>) -> Box<dyn Finery> {
        Box::new(Self { inner })
    }
}

impl Finery for BigTrouser {
    fn pieces(&self) -> Vec<&'static str> {
        let mut pieces = vec!["baggy trousers"];
        if let Some(inner) = &self.inner {
            pieces.extend(inner.pieces());
        }
        pieces
    }
}

pub struct Person {
    name: String,
    finery: Option<Box<dyn Finery>>,
}

impl Person {
    pub fn new(name: impl Into<String>, finery: Option<Box<dyn Finery>>) -> Self {
        Self {
            name: name.into(),
            finery,
        }
    }

    /// Worn pieces outer to inner, then the person.
    pub fn show(&self) -> String {
        match &self.finery {
            Some(finery) => format!("{}, dressed up {}", finery.pieces().join(", "), self.name),
            None => format!("dressed up {}", self.name),
        }
    }
}

pub struct DecoratorDemo;

#[async_trait::async_trait]
impl Demo for DecoratorDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Decorator
    }

    async fn run(&self) -> Result<Transcript> {
        let mut transcript = Transcript::new(self.kind());

        let mut beverage: Box<dyn Beverage> = Box::new(DarkRoast);
        beverage = Mocha::new(beverage);
        beverage = Mocha::new(beverage);
        beverage = Whip::new(beverage);
        transcript.line(format!("{},{}", beverage.cost(), beverage.description()));

        let espresso = Whip::new(Box::new(Espresso));
        transcript.line(format!("{},{}", espresso.cost(), espresso.description()));

        let person = Person::new(
            "marsonshine",
            Some(BigTrouser::new(Some(TShirts::new(None)))),
        );
        transcript.line(person.show());

        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condiments_stack_cost_and_description() {
        let beverage = Whip::new(Mocha::new(Mocha::new(Box::new(DarkRoast))));
        assert_eq!(beverage.cost(), 149);
        assert_eq!(
            beverage.description(),
            "Dark Roast Coffee, Mocha, Mocha, Whip"
        );
    }

    #[test]
    fn test_finery_lists_outer_to_inner() {
        let person = Person::new("ann", Some(TShirts::new(Some(BigTrouser::new(None)))));
        assert_eq!(person.show(), "T-shirt, baggy trousers, dressed up ann");
        assert_eq!(Person::new("bob", None).show(), "dressed up bob");
    }

    #[tokio::test]
    async fn test_demo_transcript() {
        let transcript = DecoratorDemo.run().await.unwrap();
        assert_eq!(transcript.lines[0], "149,Dark Roast Coffee, Mocha, Mocha, Whip");
        assert_eq!(transcript.lines[1], "209,Espresso, Whip");
        assert_eq!(
            transcript.lines[2],
            "baggy trousers, T-shirt, dressed up marsonshine"
        );
    }
}

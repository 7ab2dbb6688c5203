use crate::core::{Demo, PatternKind, Result, Transcript};
use std::fmt::Debug;

pub trait Connector: Debug + Send + Sync {
    fn connect(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct MssqlConnection {
    pub connection_string: String,
}

impl Connector for MssqlConnection {
    fn connect(&self) -> String {
        format!("Connecting to MSSQL with {}", self.connection_string)
    }
}

#[derive(Debug, Clone)]
pub struct OracleConnection {
    pub connection_string: String,
}

impl Connector for OracleConnection {
    fn connect(&self) -> String {
        format!("Connecting to Oracle with {}", self.connection_string)
    }
}

pub struct DbConnection {
    db: Box<dyn Connector>,
}

impl DbConnection {
    pub fn new(db: Box<dyn Connector>) -> Self {
        Self { db }
    }

    pub fn db_connect(&self) -> String {
        self.db.connect()
    }
}

// Ducks: behaviours are composed, not inherited.

pub trait Flyer: Debug + Send + Sync {
    fn fly(&self) -> String;
}

pub trait Quacker: Debug + Send + Sync {
    fn quack(&self) -> String;
}

#[derive(Debug, Clone, Default)]
pub struct FlyWithWings;

impl Flyer for FlyWithWings {
    fn fly(&self) -> String {
        "I'm flying!!".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FlyNoWay {
    pub no_of_wings: u32,
}

impl Flyer for FlyNoWay {
    fn fly(&self) -> String {
        "I can't fly.".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FlyRocketPowered;

impl Flyer for FlyRocketPowered {
    fn fly(&self) -> String {
        "I'm flying with a rocket!".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Quack;

impl Quacker for Quack {
    fn quack(&self) -> String {
        "Quack".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Squeak;

impl Quacker for Squeak {
    fn quack(&self) -> String {
        "Squeak".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MuteQuack;

impl Quacker for MuteQuack {
    fn quack(&self) -> String {
        "<< Silence >>".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Speak {
    pub speech: String,
}

impl Quacker for Speak {
    fn quack(&self) -> String {
        self.speech.clone()
    }
}

pub trait IDuck {
    fn display(&self) -> String;
    fn perform_fly(&self) -> String;
    fn perform_quack(&self) -> String;
    fn swim(&self) -> String;
}

#[derive(Debug)]
pub struct Duck {
    flyer: Box<dyn Flyer>,
    quacker: Box<dyn Quacker>,
}

impl Duck {
    pub fn new(flyer: Box<dyn Flyer>, quacker: Box<dyn Quacker>) -> Self {
        Self { flyer, quacker }
    }

    pub fn set_flyer(&mut self, flyer: Box<dyn Flyer>) {
        self.flyer = flyer;
    }

    pub fn set_quacker(&mut self, quacker: Box<dyn Quacker>) {
        self.quacker = quacker;
    }
}

impl Default for Duck {
    fn default() -> Self {
        Self::new(Box::new(FlyNoWay::default()), Box::new(MuteQuack))
    }
}

impl IDuck for Duck {
    fn display(&self) -> String {
        "I'm a duck.".to_string()
    }

    fn perform_fly(&self) -> String {
        self.flyer.fly()
    }

    fn perform_quack(&self) -> String {
        self.quacker.quack()
    }

    fn swim(&self) -> String {
        "All ducks float, even decoys!".to_string()
    }
}

macro_rules! duck_kind {
    ($name:ident, $display:expr, $flyer:expr, $quacker:expr) => {
        #[derive(Debug)]
        pub struct $name {
            duck: Duck,
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    duck: Duck::new(Box::new($flyer), Box::new($quacker)),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl IDuck for $name {
            fn display(&self) -> String {
                $display.to_string()
            }

            fn perform_fly(&self) -> String {
                self.duck.perform_fly()
            }

            fn perform_quack(&self) -> String {
                self.duck.perform_quack()
            }

            fn swim(&self) -> String {
                self.duck.swim()
            }
        }
    };
}

duck_kind!(MallardDuck, "I'm a real Mallard duck.", FlyWithWings, Quack);
duck_kind!(RedheadDuck, "I'm a real Redhead duck.", FlyWithWings, Quack);
duck_kind!(RubberDuck, "I'm a rubber duckie.", FlyNoWay::default(), Squeak);
duck_kind!(DecoyDuck, "I'm a duck decoy.", FlyNoWay::default(), MuteQuack);

pub struct StrategyDemo;

#[async_trait::async_trait]
impl Demo for StrategyDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Strategy
    }

    async fn run(&self) -> Result<Transcript> {
        let mut transcript = Transcript::new(self.kind());

        let connection = DbConnection::new(Box::new(MssqlConnection {
            connection_string: "mssql:user:password".to_string(),
        }));
        transcript.line(connection.db_connect());
        let connection = DbConnection::new(Box::new(OracleConnection {
            connection_string: "oracle:user:password".to_string(),
        }));
        transcript.line(connection.db_connect());

        let ducks: [(&str, Box<dyn IDuck + Send + Sync>); 4] = [
            ("MallardDuck", Box::new(MallardDuck::new())),
            ("RedheadDuck", Box::new(RedheadDuck::new())),
            ("RubberDuck", Box::new(RubberDuck::new())),
            ("DecoyDuck", Box::new(DecoyDuck::new())),
        ];
        for (name, duck) in &ducks {
            transcript.extend([
                name.to_string(),
                duck.display(),
                duck.perform_fly(),
                duck.perform_quack(),
                duck.swim(),
            ]);
        }

        let mut model = Duck::default();
        model.set_flyer(Box::new(FlyRocketPowered));
        transcript.line(format!("Model duck: {}", model.perform_fly()));

        let mut donald = Duck::default();
        transcript.line(donald.display());
        transcript.line(format!("{:?}", donald));

        donald.set_flyer(Box::new(FlyNoWay::default()));
        donald.set_quacker(Box::new(MuteQuack));
        transcript.line(format!("{:?}", donald));
        transcript.line(donald.perform_quack());

        donald.set_flyer(Box::new(FlyNoWay { no_of_wings: 2 }));
        donald.set_quacker(Box::new(Speak {
            speech: "Aw, phooey!".to_string(),
        }));
        transcript.line(format!("{:?}", donald));
        transcript.line(donald.perform_quack());

        Ok(transcript)
    }
}

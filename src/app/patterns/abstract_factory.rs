use crate::core::{Demo, PatternKind, Result, Transcript};
use crate::utils::error::PatternError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    pub logo: String,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shirt {
    pub logo: String,
    pub size: u32,
}

/// Produces one family of matching products.
pub trait SportsFactory {
    fn brand(&self) -> &'static str;
    fn make_shoe(&self) -> Shoe;
    fn make_shirt(&self) -> Shirt;
}

pub struct Adidas;

impl SportsFactory for Adidas {
    fn brand(&self) -> &'static str {
        "adidas"
    }

    fn make_shoe(&self) -> Shoe {
        Shoe {
            logo: "adidas".to_string(),
            size: 14,
        }
    }

    fn make_shirt(&self) -> Shirt {
        Shirt {
            logo: "adidas".to_string(),
            size: 14,
        }
    }
}

pub struct Nike;

impl SportsFactory for Nike {
    fn brand(&self) -> &'static str {
        "nike"
    }

    fn make_shoe(&self) -> Shoe {
        Shoe {
            logo: "nike".to_string(),
            size: 14,
        }
    }

    fn make_shirt(&self) -> Shirt {
        Shirt {
            logo: "nike".to_string(),
            size: 14,
        }
    }
}

pub fn sports_factory(brand: &str) -> Result<Box<dyn SportsFactory>> {
    match brand.to_ascii_lowercase().as_str() {
        "adidas" => Ok(Box::new(Adidas)),
        "nike" => Ok(Box::new(Nike)),
        _ => Err(PatternError::UnsupportedVariant {
            kind: "brand".to_string(),
            name: brand.to_string(),
        }),
    }
}

fn describe_family(factory: &dyn SportsFactory, transcript: &mut Transcript) {
    let shoe = factory.make_shoe();
    let shirt = factory.make_shirt();
    transcript.line(format!("Shoe: logo {}, size {}", shoe.logo, shoe.size));
    transcript.line(format!("Shirt: logo {}, size {}", shirt.logo, shirt.size));
}

pub struct AbstractFactoryDemo;

#[async_trait::async_trait]
impl Demo for AbstractFactoryDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::AbstractFactory
    }

    async fn run(&self) -> Result<Transcript> {
        let mut transcript = Transcript::new(self.kind());

        for brand in ["adidas", "nike"] {
            let factory = sports_factory(brand)?;
            transcript.line(format!("[{}]", factory.brand()));
            describe_family(factory.as_ref(), &mut transcript);
        }

        match sports_factory("puma") {
            Ok(_) => transcript.line("puma unexpectedly accepted"),
            Err(e) => {
                tracing::debug!("Rejected brand: {}", e);
                transcript.line(format!("Rejected: {}", e));
            }
        }

        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_produce_matching_families() {
        for brand in ["adidas", "Nike"] {
            let factory = sports_factory(brand).unwrap();
            assert_eq!(factory.make_shoe().logo, factory.make_shirt().logo);
            assert_eq!(factory.make_shoe().logo, factory.brand());
        }
    }

    #[test]
    fn test_unknown_brand_is_rejected() {
        let err = sports_factory("puma").err().unwrap();
        assert!(matches!(err, PatternError::UnsupportedVariant { .. }));
        assert_eq!(err.to_string(), "Unsupported brand: puma");
    }

    #[tokio::test]
    async fn test_demo_transcript() {
        let transcript = AbstractFactoryDemo.run().await.unwrap();
        assert_eq!(transcript.lines[0], "[adidas]");
        assert_eq!(transcript.lines[1], "Shoe: logo adidas, size 14");
        assert_eq!(transcript.lines[3], "[nike]");
        assert_eq!(
            transcript.lines.last().unwrap(),
            "Rejected: Unsupported brand: puma"
        );
    }
}

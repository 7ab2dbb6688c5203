use crate::core::{Demo, PatternKind, Result, Transcript};

/// One of the subsystems the fund trades in. Each keeps its own position.
pub trait Holding: Send + Sync {
    fn name(&self) -> &'static str;
    fn units(&self) -> u32;
    fn buy(&mut self) -> String;
    fn sell(&mut self) -> String;
}

macro_rules! holding {
    ($name:ident, $label:expr) => {
        #[derive(Debug, Default)]
        pub struct $name {
            units: u32,
        }

        impl Holding for $name {
            fn name(&self) -> &'static str {
                $label
            }

            fn units(&self) -> u32 {
                self.units
            }

            fn buy(&mut self) -> String {
                self.units += 1;
                format!("{} bought", $label)
            }

            fn sell(&mut self) -> String {
                if self.units == 0 {
                    return format!("{} has nothing to sell", $label);
                }
                self.units -= 1;
                format!("{} sold", $label)
            }
        }
    };
}

holding!(StockOne, "Stock one");
holding!(StockTwo, "Stock two");
holding!(StockThree, "Stock three");
holding!(NationalDebt, "National debt");
holding!(Realty, "Realty");

/// A single entry point over every holding; investors never touch the subsystems.
pub struct Fund {
    holdings: Vec<Box<dyn Holding>>,
}

impl Fund {
    pub fn new() -> Self {
        Self {
            holdings: vec![
                Box::new(StockOne::default()),
                Box::new(StockTwo::default()),
                Box::new(StockThree::default()),
                Box::new(NationalDebt::default()),
                Box::new(Realty::default()),
            ],
        }
    }

    pub fn buy(&mut self) -> Vec<String> {
        self.holdings.iter_mut().map(|holding| holding.buy()).collect()
    }

    pub fn sell(&mut self) -> Vec<String> {
        self.holdings.iter_mut().map(|holding| holding.sell()).collect()
    }

    pub fn positions(&self) -> String {
        self.holdings
            .iter()
            .map(|holding| format!("{}={}", holding.name(), holding.units()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for Fund {
    fn default() -> Self {
        Self::new()
    }
}

pub struct FacadeDemo;

#[async_trait::async_trait]
impl Demo for FacadeDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Facade
    }

    async fn run(&self) -> Result<Transcript> {
        let mut transcript = Transcript::new(self.kind());

        // Without the facade the investor has to know every subsystem.
        let mut stock = StockOne::default();
        let mut debt = NationalDebt::default();
        transcript.extend([stock.buy(), debt.buy()]);

        let mut fund = Fund::new();
        transcript.extend(fund.buy());
        transcript.line(format!("Positions: {}", fund.positions()));
        transcript.extend(fund.sell());
        transcript.line(format!("Positions: {}", fund.positions()));

        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fund_trades_every_holding() {
        let mut fund = Fund::new();
        assert_eq!(
            fund.buy(),
            vec![
                "Stock one bought",
                "Stock two bought",
                "Stock three bought",
                "National debt bought",
                "Realty bought",
            ]
        );
        assert_eq!(
            fund.positions(),
            "Stock one=1, Stock two=1, Stock three=1, National debt=1, Realty=1"
        );
    }

    #[test]
    fn test_selling_without_position_is_refused() {
        let mut realty = Realty::default();
        assert_eq!(realty.sell(), "Realty has nothing to sell");
        realty.buy();
        assert_eq!(realty.sell(), "Realty sold");
        assert_eq!(realty.units(), 0);
    }

    #[tokio::test]
    async fn test_demo_transcript() {
        let transcript = FacadeDemo.run().await.unwrap();
        assert_eq!(transcript.lines.len(), 14);
        assert_eq!(transcript.lines[0], "Stock one bought");
        assert_eq!(transcript.lines[1], "National debt bought");
        assert_eq!(
            transcript.lines[7],
            "Positions: Stock one=1, Stock two=1, Stock three=1, National debt=1, Realty=1"
        );
        assert_eq!(transcript.lines[12], "Realty sold");
        assert!(transcript.lines[13].ends_with("Realty=0"));
    }
}

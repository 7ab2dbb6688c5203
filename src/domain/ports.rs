use crate::domain::model::{PatternKind, Transcript};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    /// Patterns to run, in order. Empty means all of them.
    fn patterns(&self) -> &[String];
    fn max_allowed_requests(&self) -> usize;
    fn concurrent_callers(&self) -> usize;
}

#[async_trait]
pub trait Demo: Send + Sync {
    fn kind(&self) -> PatternKind;
    async fn run(&self) -> Result<Transcript>;
}

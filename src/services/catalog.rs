use crate::config::DashboardConfig;
use crate::models::{Kpi, SalesLine, TrainingSession};

/// Fixed dashboard content: KPI tiles, the sales breakdown and the training
/// schedule. Nothing here is ever written back.
#[derive(Clone)]
pub struct Catalog {
    content: DashboardConfig,
}

impl Catalog {
    pub fn new(content: DashboardConfig) -> Self {
        Self { content }
    }

    pub fn kpis(&self) -> &[Kpi] {
        &self.content.kpis
    }

    pub fn sales(&self) -> &[SalesLine] {
        &self.content.sales
    }

    pub fn total_revenue(&self) -> u64 {
        self.content.sales.iter().map(|line| line.revenue).sum()
    }

    pub fn training_sessions(&self) -> &[TrainingSession] {
        &self.content.training
    }

    /// Confirms a booking for a listed session. Slot counts are not
    /// decremented.
    pub fn book(&self, session: &str) -> Option<&TrainingSession> {
        self.content.training.iter().find(|s| s.session == session)
    }
}

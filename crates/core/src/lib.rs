pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use models::{
    plan::{Period, PlanResult},
    projection::{CalculationResponse, CalculationResult},
    request::{CalculationRequest, RawCalculationRequest},
    settings::Settings,
    summary::ProjectionSummary,
};
use services::{
    calculator::CompoundingCalculator, plan_service::PlanService, summary_service::SummaryService,
};
use storage::{format::HistoryCollection, history_store::HistoryStore};
use tracing::debug;

use errors::CoreError;

/// Main entry point for the compound-growth core library.
/// Holds the settings, the history store and every service that operates on them.
#[must_use]
pub struct GrowthCalculator {
    settings: Settings,
    store: HistoryStore,
    calculator: CompoundingCalculator,
    plan_service: PlanService,
    summary_service: SummaryService,
}

impl std::fmt::Debug for GrowthCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrowthCalculator")
            .field("settings", &self.settings)
            .field("history_path", &self.store.path())
            .finish()
    }
}

impl Default for GrowthCalculator {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl GrowthCalculator {
    /// Build a calculator whose history store lives at `settings.history_path`.
    pub fn new(settings: Settings) -> Self {
        let store = HistoryStore::new(settings.history_path.clone());
        Self::build(settings, store)
    }

    /// Build a calculator around an explicit store, keeping default settings
    /// for everything else.
    pub fn with_store(store: HistoryStore) -> Self {
        let settings = Settings {
            history_path: store.path().to_path_buf(),
            ..Settings::default()
        };
        Self::build(settings, store)
    }

    // ── Calculation ─────────────────────────────────────────────────

    /// Project a balance month by month, recording every month.
    pub fn calculate(&self, request: &CalculationRequest) -> CalculationResult {
        self.calculator.compute(request)
    }

    /// Project a balance and return only the rounded final total.
    #[must_use]
    pub fn calculate_total(&self, request: &CalculationRequest) -> f64 {
        self.calculator.compute_total(request)
    }

    /// Project a balance and append its history to the store.
    pub fn calculate_and_save(
        &self,
        request: &CalculationRequest,
    ) -> Result<CalculationResult, CoreError> {
        let result = self.calculator.compute(request);
        self.store.save(&result.history)?;
        Ok(result)
    }

    /// Break a finished projection down into contributions and growth.
    pub fn summarize(
        &self,
        request: &CalculationRequest,
        result: &CalculationResult,
    ) -> ProjectionSummary {
        self.summary_service.summarize(request, result)
    }

    /// Simulate a chained multi-period plan.
    pub fn simulate_plan(&self, periods: &[Period]) -> PlanResult {
        self.plan_service.simulate(periods)
    }

    // ── Request boundary ────────────────────────────────────────────

    /// Coerce a wire request and answer it.
    pub fn handle_request(
        &self,
        raw: &RawCalculationRequest,
    ) -> Result<CalculationResponse, CoreError> {
        debug!(?raw, "request received");
        let request = raw.coerce()?;
        Ok(self.calculator.compute(&request).into())
    }

    /// Coerce a wire request, answer it and append its history to the store.
    pub fn handle_request_and_save(
        &self,
        raw: &RawCalculationRequest,
    ) -> Result<CalculationResponse, CoreError> {
        debug!(?raw, "request received");
        let request = raw.coerce()?;
        Ok(self.calculate_and_save(&request)?.into())
    }

    /// Answer a JSON request body with a JSON response body.
    /// The body must be a JSON object.
    pub fn handle_json(&self, body: &str) -> Result<String, CoreError> {
        let raw = RawCalculationRequest::from_json(body)?;
        let response = self.handle_request(&raw)?;
        serde_json::to_string(&response)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize response: {e}")))
    }

    // ── History ─────────────────────────────────────────────────────

    /// Append a history to the store.
    pub fn save_history(&self, history: &[f64]) -> Result<(), CoreError> {
        self.store.save(history)
    }

    /// Every saved history, oldest first.
    pub fn load_history(&self) -> Result<HistoryCollection, CoreError> {
        self.store.load()
    }

    /// Number of saved histories.
    pub fn saved_count(&self) -> Result<usize, CoreError> {
        Ok(self.store.load()?.len())
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(settings: Settings, store: HistoryStore) -> Self {
        Self {
            settings,
            store,
            calculator: CompoundingCalculator::new(),
            plan_service: PlanService::new(),
            summary_service: SummaryService::new(),
        }
    }
}

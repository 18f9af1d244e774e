use ecoscore::survey::{Category, SurveySubmission};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Canned responses mirroring the survey's default picker state.
pub(crate) fn sample_submission() -> SurveySubmission {
    let mut submission = SurveySubmission::default();
    submission.record(Category::Transportation, 2);
    submission.record(Category::Appliances, 3);
    submission.record(Category::Diet, 1);
    submission.record(Category::Shopping, 2);
    submission.record(Category::EnergyUsage, 1);
    submission.record(Category::WasteManagement, 3);
    submission.record(Category::WaterUsage, 2);
    submission
}

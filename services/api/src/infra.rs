use interview_hub::config::{AppEnvironment, OrganizationConfig};
use interview_hub::workflows::interviews::{
    InMemoryCatalog, InterviewService, InterviewServiceError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) settings: SettingsView,
}

/// Organization settings shown on the settings page.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SettingsView {
    pub(crate) environment: AppEnvironment,
    pub(crate) company_name: String,
    pub(crate) admin_email: String,
}

impl SettingsView {
    pub(crate) fn new(environment: AppEnvironment, organization: &OrganizationConfig) -> Self {
        Self {
            environment,
            company_name: organization.company_name.clone(),
            admin_email: organization.admin_email.clone(),
        }
    }
}

/// Interview service over a freshly seeded in-process catalog.
pub(crate) fn seeded_service() -> Result<InterviewService<InMemoryCatalog>, InterviewServiceError>
{
    InterviewService::new(Arc::new(InMemoryCatalog::seeded()))
}

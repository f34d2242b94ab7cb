use crate::dto::HealthRes;

/// Simple health service shared by the API surfaces.
///
/// Provides a standardised way to check that the imprex service is up.
#[derive(Clone)]
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Health check without creating an instance.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "imprex is alive".into(),
        }
    }

    pub fn check_health_instance(&self) -> HealthRes {
        Self::check_health()
    }
}

impl Default for HealthService {
    fn default() -> Self {
        Self::new()
    }
}

use crate::dto::HealthRes;

/// Simple health service for the lookup proxy.
///
/// Reports process liveness only; the upstream registry is not contacted.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Creates a new instance of HealthService.
    pub fn new() -> Self {
        Self
    }

    /// Static method to check health without creating an instance
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "DocSage lookup proxy is alive".into(),
        }
    }
}

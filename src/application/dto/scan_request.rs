/// ScanRequest - Request DTO for the environment scan use case
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Whether the dependency tree tool may be installed when it is missing
    pub auto_install: bool,
}

impl ScanRequest {
    pub fn new(auto_install: bool) -> Self {
        Self { auto_install }
    }
}

impl Default for ScanRequest {
    fn default() -> Self {
        Self::new(true)
    }
}

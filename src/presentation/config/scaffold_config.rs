/// In-memory wiring for demos: no database, canned model output, one fixed bearer token.
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    pub enabled: bool,
    pub mock_response_delay_ms: u64,
    pub token: String,
    pub email: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            enabled: std::env::var("SCAFFOLD_MODE")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
            mock_response_delay_ms: std::env::var("MOCK_RESPONSE_DELAY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            token: std::env::var("SCAFFOLD_TOKEN").unwrap_or_else(|_| "scaffold-token".to_string()),
            email: std::env::var("SCAFFOLD_EMAIL")
                .unwrap_or_else(|_| "learner@example.com".to_string()),
        }
    }
}

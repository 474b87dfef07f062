pub mod analytics;
pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use crate::services::analysis_service::AnalysisService;
use crate::store::Ledger;
use reqwest::Client;

#[derive(Clone)]
pub struct AppState {
    pub ledger: Ledger,
    pub analysis_service: AnalysisService,
}

impl AppState {
    pub fn new(ledger: Ledger) -> Self {
        let config = crate::config::get_config();
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .unwrap();

        let analysis_service = AnalysisService::new(config.gemini_api_key.clone(), http_client);

        Self {
            ledger,
            analysis_service,
        }
    }
}

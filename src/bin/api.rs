use std::sync::Arc;

use briefly::ai::{InferenceClient, SummaryGenerator};
use briefly::api::handler;
use briefly::core::config::AppConfig;
use briefly::service::{ServiceSettings, SummaryService};
use lambda_runtime::{run, service_fn};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    briefly::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        lambda_runtime::Error::from(e)
    })?;

    // A missing model is reported through /health and 503s, not a crashed cold start.
    let generator: Option<Arc<dyn SummaryGenerator>> = match InferenceClient::from_config(&config)
    {
        Ok(Some(client)) => {
            info!(model = %client.model_name(), "Inference client ready");
            Some(Arc::new(client))
        }
        Ok(None) => {
            warn!("HF_API_TOKEN is not set; summarization is unavailable");
            None
        }
        Err(e) => {
            error!("Failed to initialize inference client: {}", e);
            None
        }
    };

    let service = Arc::new(SummaryService::new(
        generator,
        ServiceSettings::from(&config),
    ));

    run(service_fn(move |event| {
        let service = Arc::clone(&service);
        async move { handler(&service, event).await }
    }))
    .await
}

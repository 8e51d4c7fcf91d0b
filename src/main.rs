use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use callguard::application::services::{
    AnalysisService, ClassificationService, SpeechTranscriber,
};
use callguard::infrastructure::audio::{TranscriptionEngineFactory, WavConverter};
use callguard::infrastructure::classifier::{ClassifierArtifacts, RecurrentTextClassifier};
use callguard::infrastructure::observability::{TracingConfig, init_tracing};
use callguard::infrastructure::storage::LocalUploadStore;
use callguard::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        TracingConfig::new(
            environment.as_str(),
            settings.logging.level.clone(),
            settings.logging.enable_json,
        ),
        settings.server.port,
    );

    let classifier_settings = &settings.classifier;
    let classifier = RecurrentTextClassifier::load(
        &ClassifierArtifacts {
            vocabulary: &classifier_settings.vocabulary_path,
            config: &classifier_settings.config_path,
            weights: &classifier_settings.weights_path,
        },
        classifier_settings.sequence_length,
    )
    .context("Error loading tokenizer or model")?;

    let transcription = &settings.transcription;
    let engine = TranscriptionEngineFactory::create(
        transcription.provider,
        Some(transcription.language.clone()),
        transcription.api_key.clone(),
        transcription.base_url.clone(),
        transcription.model.clone(),
    )
    .context("Failed to configure transcription engine")?;

    tracing::info!(
        service = engine.service_name(),
        timeout_secs = transcription.timeout_secs,
        "Transcription engine configured"
    );

    let upload_store = Arc::new(
        LocalUploadStore::new(settings.uploads.directory.clone())
            .context("Failed to prepare uploads directory")?,
    );

    let transcriber = SpeechTranscriber::new(
        Arc::new(WavConverter),
        engine,
        Duration::from_secs(transcription.timeout_secs),
    );
    let classification =
        ClassificationService::new(Arc::new(classifier), classifier_settings.threshold);

    let analysis_service = Arc::new(AnalysisService::new(
        upload_store,
        transcriber,
        classification,
        settings.uploads.retain_originals,
    ));

    let state = AppState {
        analysis_service,
        max_upload_bytes: settings.max_upload_bytes(),
    };

    let router = create_router(state);

    let ip = settings
        .server
        .host
        .parse::<IpAddr>()
        .with_context(|| format!("Invalid server host: {}", settings.server.host))?;
    let addr = SocketAddr::new(ip, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

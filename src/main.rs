use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

mod bootstrap;

use pt_app::{EngineHandle, ExtractSelection, PipelineEngine, TranslateSelection};
use pt_core::gate::DebounceGate;
use pt_core::ports::{PresenterPort, SettingsPort};
use pt_core::settings::Settings;
use pt_infra::{FileSettingsRepository, HttpTranslator};
use pt_platform::{
    default_monitor, EnigoCopyKeystroke, LogPresenter, RoutingPresenter, SystemClipboard,
};

#[tokio::main]
async fn main() -> Result<()> {
    bootstrap::init_tracing_subscriber()?;
    info!("starting poptrans v{}", env!("CARGO_PKG_VERSION"));

    let settings_path = FileSettingsRepository::default_path()?;
    let settings_repo = FileSettingsRepository::new(&settings_path);
    let mut settings = settings_repo.load().await.context("load settings")?;
    info!(path = %settings_path.display(), "settings loaded");

    if let Ok(api_key) = std::env::var("POPTRANS_API_KEY") {
        settings.translation.api_key = api_key;
    }
    if settings.translation.api_key.is_empty() {
        warn!("no API key configured; the translation endpoint will reject requests");
    }

    let (engine_handle, engine_task) = start_pipeline(&settings)?;

    // Terminal failures here leave the process alive but inert: the user
    // can grant the permission and restart without a crash loop.
    let mut monitor = default_monitor();
    match monitor.start(engine_handle.events()) {
        Ok(()) => info!("input monitor installed"),
        Err(e) => error!(error = %e, "input monitor unavailable, translation is disabled"),
    }

    match signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => error!(error = %e, "failed to wait for shutdown signal"),
    }

    engine_handle.shutdown().await;
    match tokio::time::timeout(Duration::from_secs(5), engine_task).await {
        Ok(_) => info!("pipeline stopped cleanly"),
        Err(_) => warn!("timed out waiting for the pipeline to stop"),
    }

    info!("poptrans stopped");
    Ok(())
}

fn start_pipeline(settings: &Settings) -> Result<(EngineHandle, JoinHandle<()>)> {
    let clipboard = Arc::new(SystemClipboard::new().context("open system clipboard")?);
    let keystrokes = Arc::new(EnigoCopyKeystroke::new());
    let translator =
        Arc::new(HttpTranslator::new(&settings.translation).context("build translation client")?);
    let presenter = build_presenter(settings);

    let extract = Arc::new(ExtractSelection::new(
        clipboard,
        keystrokes,
        settings.extraction.copy_settle(),
    ));
    let translate = Arc::new(TranslateSelection::new(translator, presenter));
    let gate = DebounceGate::new(settings.trigger.debounce_policy());

    let (engine, handle) = PipelineEngine::new(gate, extract, translate);
    let task = tokio::spawn(engine.run());
    Ok((handle, task))
}

fn build_presenter(settings: &Settings) -> Arc<dyn PresenterPort> {
    #[cfg(target_os = "macos")]
    let notifier: Arc<dyn PresenterPort> = Arc::new(pt_platform::OsaNotificationPresenter);
    #[cfg(not(target_os = "macos"))]
    let notifier: Arc<dyn PresenterPort> = Arc::new(LogPresenter);

    Arc::new(RoutingPresenter::new(
        notifier,
        Arc::new(LogPresenter),
        settings.presentation.notification_max_chars,
    ))
}

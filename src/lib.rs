pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::{Arc, OnceLock};

use crate::config::{Config, LogFormat};
use crate::database::result_store::LocalResultStore;
use crate::database::store::LocalStore;
use crate::error::Result;
use crate::services::{
    catalog_service::QuizCatalog, experience_service::ExperienceService,
    session_service::QuizSession, user_service::UserService,
};
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
pub struct Portal {
    pub store: LocalStore,
    pub catalog: Arc<QuizCatalog>,
    pub results: Arc<LocalResultStore>,
    pub user_service: UserService,
    pub experience_service: ExperienceService,
}

impl Portal {
    pub fn new(config: &Config) -> Result<Self> {
        let store = LocalStore::open(&config.data_dir)?;

        let catalog = match &config.catalog_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading quiz catalog from file");
                QuizCatalog::from_path(path)?
            }
            None => QuizCatalog::builtin()?,
        };

        Ok(Self {
            catalog: Arc::new(catalog),
            results: Arc::new(LocalResultStore::new(store.clone())),
            user_service: UserService::new(store.clone()),
            experience_service: ExperienceService::new(store.clone()),
            store,
        })
    }

    /// Loads `.env` and the process config, installs tracing in the
    /// configured format, then builds the portal.
    pub fn from_env() -> Result<Self> {
        config::init_config()?;
        let config = config::get_config()?;
        init_tracing(config.log_format);
        Self::new(config)
    }

    pub fn new_session(&self) -> QuizSession {
        QuizSession::new(Arc::clone(&self.catalog), self.results.clone())
    }
}

static TRACING_FORMAT: OnceLock<LogFormat> = OnceLock::new();

/// Installs the global fmt subscriber. `RUST_LOG` overrides the default
/// `info` filter. Later calls are no-ops.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    if installed.is_ok() {
        let _ = TRACING_FORMAT.set(format);
    }
}

/// Format of the subscriber installed by [`init_tracing`], if any.
pub fn tracing_format() -> Option<LogFormat> {
    TRACING_FORMAT.get().copied()
}

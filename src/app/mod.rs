//! Application state shared by every command: immutable content, the
//! outbound clients, and the one quiz session of this app instance.

use crate::catalog::{CatalogError, Catalogs};
use crate::config::{AppConfig, ConfigError, FeedbackCredentials};
use crate::export::{self, ExportError, ExportedDocument, ImageError, LogoFetcher};
use crate::feedback::{self, AirtableSink, FeedbackError, FeedbackSink, SinkError, UnconfiguredSink};
use crate::scoring::ContentMissing;
use crate::session::{Session, SessionError};
use crate::views::story::Downloadable;
use crate::views::{AnalysisView, Footer, IntrospectionView, ModePanel, StartView, StoryView, ViewError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("HTTP client error: {0}")]
    Client(#[from] ImageError),
    #[error("Feedback sink error: {0}")]
    Sink(#[from] SinkError),
}

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("A document is only available for a single dominant archetype")]
    NotAvailable,
    #[error(transparent)]
    ContentMissing(#[from] ContentMissing),
    #[error(transparent)]
    Export(#[from] ExportError),
}

pub struct AppState {
    config: AppConfig,
    catalogs: Catalogs,
    session: Mutex<Session>,
    sink: Arc<dyn FeedbackSink>,
    logo: LogoFetcher,
}

impl AppState {
    /// Loads catalogs and builds the outbound clients. Missing feedback
    /// credentials are not fatal; submissions then report the problem.
    pub fn initialize(config: AppConfig) -> Result<Self, AppError> {
        let catalogs = Catalogs::load(&config.catalog)?;

        let sink: Arc<dyn FeedbackSink> = match FeedbackCredentials::from_env() {
            Ok(credentials) => {
                let sink = AirtableSink::new(&config.feedback, credentials)?;
                info!(endpoint = %sink.endpoint(), "feedback sink configured");
                Arc::new(sink)
            }
            Err(e) => {
                warn!(error = %e, "feedback submissions are disabled");
                Arc::new(UnconfiguredSink::new(e.to_string()))
            }
        };

        let logo = LogoFetcher::new(
            &config.assets.logo_url,
            Duration::from_secs(config.assets.logo_timeout_seconds),
        )?;

        Ok(Self::new(config, catalogs, sink, logo))
    }

    pub fn new(config: AppConfig, catalogs: Catalogs, sink: Arc<dyn FeedbackSink>, logo: LogoFetcher) -> Self {
        let session = Session::new();
        info!(session = %session.id(), "session started");
        Self {
            config,
            catalogs,
            session: Mutex::new(session),
            sink,
            logo,
        }
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// A panic while holding the lock cannot leave the session half-written,
    /// so a poisoned lock is still safe to use.
    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn start_view(&self) -> StartView {
        StartView::render(&self.config.assets)
    }

    pub fn introspection_view(&self) -> IntrospectionView {
        IntrospectionView::render(&self.catalogs.questions, &self.session())
    }

    pub fn select_answer(&self, question_id: &str, option: usize) -> Result<IntrospectionView, SessionError> {
        let mut session = self.session();
        session.select(&self.catalogs.questions, question_id, option)?;
        Ok(IntrospectionView::render(&self.catalogs.questions, &session))
    }

    pub fn clear_answer(&self, question_id: &str) -> IntrospectionView {
        let mut session = self.session();
        session.clear(question_id);
        IntrospectionView::render(&self.catalogs.questions, &session)
    }

    pub fn story_view(&self) -> StoryView {
        StoryView::render(&self.catalogs, &self.session())
    }

    pub async fn download_story(&self) -> Result<ExportedDocument, DownloadError> {
        let downloadable = {
            let session = self.session();
            let outcome = session.outcome(&self.catalogs)?;
            Downloadable::from_outcome(&outcome).ok_or(DownloadError::NotAvailable)?
        };

        let document = export::export_story(
            &self.logo,
            self.config.assets.logo_width_inches,
            downloadable.document(),
        )
        .await?;
        Ok(document)
    }

    pub fn analysis_view(&self) -> AnalysisView {
        AnalysisView::render(&self.catalogs.modes, self.session().feedback_draft())
    }

    pub fn mode_panel(&self, selection: &str) -> Result<ModePanel, ViewError> {
        ModePanel::render(&self.catalogs.modes, &self.config.assets, selection)
    }

    /// The draft is kept until the sink accepts it, so a failed submission
    /// can be retried without retyping.
    pub async fn submit_feedback(&self, text: &str) -> Result<&'static str, FeedbackError> {
        self.session().set_feedback_draft(text);

        feedback::submit_feedback(self.sink.as_ref(), text).await?;

        self.session().clear_feedback_draft();
        Ok(feedback::SUCCESS_MESSAGE)
    }

    pub fn footer(&self) -> Footer {
        Footer::render()
    }
}

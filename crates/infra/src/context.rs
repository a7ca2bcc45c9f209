//! Wiring for a running dashboard session

use std::sync::Arc;

use tracing::info;
use veggieworld_core::ports::{Clock, DownloadSink, Notifier, SystemClock};
use veggieworld_core::{ExportRequest, ExportService, RecordStore, RosterService, TeamRoster};
use veggieworld_domain::{ChatbotLog, Config, Customer, Order, Result, SystemLog};

use crate::download::FileSystemDownloadSink;
use crate::notify::{FanoutNotifier, RecordingNotifier, TracingNotifier};
use crate::seed;

/// Page stores, roster and export service built from one [`Config`]
pub struct DashboardContext {
    pub config: Config,
    pub orders: RecordStore<Order>,
    pub customers: RecordStore<Customer>,
    pub chatbot_logs: RecordStore<ChatbotLog>,
    pub system_logs: RecordStore<SystemLog>,
    pub roster: RosterService,
    pub exports: ExportService,
    notices: Arc<RecordingNotifier>,
}

impl DashboardContext {
    /// Build a context that writes exports to `config.export.output_dir`.
    ///
    /// # Errors
    /// Returns an error if a seed fixture is malformed or repeats an id.
    pub fn from_config(config: Config) -> Result<Self> {
        let sink = Arc::new(FileSystemDownloadSink::from_config(&config.export));
        Self::with_ports(config, sink, Arc::new(SystemClock))
    }

    /// Build a context around caller-supplied ports.
    ///
    /// Notices are logged and also queued for [`DashboardContext::take_notices`].
    ///
    /// # Errors
    /// Returns an error if a seed fixture is malformed or repeats an id.
    pub fn with_ports(
        config: Config,
        sink: Arc<dyn DownloadSink>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let notices = Arc::new(RecordingNotifier::new());
        let notifier: Arc<dyn Notifier> = Arc::new(
            FanoutNotifier::new().with_target(notices.clone()).with_target(Arc::new(TracingNotifier)),
        );

        let roster = TeamRoster::new(seed::team_members()?, &config.roster.primary_admin_id)?;
        let exports = ExportService::new(sink, notifier.clone(), clock)
            .with_sample_rows(config.export.sample_rows);

        let context = Self {
            orders: RecordStore::new(seed::orders()?)?,
            customers: RecordStore::new(seed::customers()?)?,
            chatbot_logs: RecordStore::new(seed::chatbot_logs()?)?,
            system_logs: RecordStore::new(seed::system_logs()?)?,
            roster: RosterService::new(roster, notifier),
            exports,
            notices,
            config,
        };

        info!(
            orders = context.orders.len(),
            customers = context.customers.len(),
            team = context.roster.members().len(),
            "dashboard_context_ready"
        );
        Ok(context)
    }

    /// Request preselected with the configured default format, no date
    /// range and no status filter.
    pub fn default_export_request(&self) -> ExportRequest {
        ExportRequest::new(self.config.export.default_format)
    }

    /// Notices raised since the last call, oldest first.
    pub fn take_notices(&self) -> Vec<veggieworld_domain::Notice> {
        self.notices.drain()
    }
}

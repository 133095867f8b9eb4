//! Bulk jobs: one sequential pass over a list of monitors
//!
//! Every job prints each item's raw response as soon as it arrives and keeps
//! going when an item fails. Only a failed `list` call, which leaves nothing
//! to iterate over, aborts a job.

use super::report::BatchReport;
use crate::api::{ApiResponse, ListQuery, Monitor, MonitorClient, MonitorStatus};
use crate::utils::error::Result;
use std::io::Write;
use tracing::{info, warn};

/// Switches shared by every job
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Print the requests instead of sending mutating ones
    pub dry_run: bool,
    /// Only touch fetched monitors whose name or URL contains this text
    pub filter: Option<String>,
}

impl RunOptions {
    /// Whether a fetched monitor passes the name filter
    pub fn matches(&self, monitor: &Monitor) -> bool {
        match &self.filter {
            Some(needle) => monitor.name.contains(needle) || monitor.url.contains(needle),
            None => true,
        }
    }
}

/// Runs bulk jobs against one account, printing to `out`
pub struct BulkRunner<'a, W: Write> {
    client: &'a MonitorClient,
    options: RunOptions,
    out: W,
}

impl<'a, W: Write> BulkRunner<'a, W> {
    pub fn new(client: &'a MonitorClient, options: RunOptions, out: W) -> Self {
        Self {
            client,
            options,
            out,
        }
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Register every monitor with `PUT /api/monitors`
    pub async fn create_all(&mut self, monitors: &[Monitor]) -> Result<BatchReport> {
        let mut report = BatchReport::new("create");
        info!("Creating {} monitors", monitors.len());

        for monitor in monitors {
            writeln!(self.out, "{}", monitor.name)?;

            if self.options.dry_run {
                let body = serde_json::to_string(monitor)?;
                writeln!(self.out, "DRY RUN PUT {} {}", self.client.monitors_url(), body)?;
                report.record_planned();
                continue;
            }

            match self.client.create(monitor).await {
                Ok(response) => {
                    self.print_response(&response)?;
                    report.record_response(&monitor.name, &response);
                }
                Err(e) => {
                    warn!("Failed to create {}: {}", monitor.name, e);
                    writeln!(self.out, "error: {}", e)?;
                    report.record_error(&monitor.name, &e);
                }
            }
        }

        info!("{}", report);
        Ok(report)
    }

    /// Set every matching monitor to `paused`
    pub async fn pause_all(&mut self) -> Result<BatchReport> {
        self.set_status_all(MonitorStatus::Paused, "pause").await
    }

    /// Set every matching monitor back to `active`
    pub async fn resume_all(&mut self) -> Result<BatchReport> {
        self.set_status_all(MonitorStatus::Active, "resume").await
    }

    async fn set_status_all(&mut self, status: MonitorStatus, job: &str) -> Result<BatchReport> {
        let monitors = self.fetch_targets().await?;
        let mut report = BatchReport::new(job);

        for monitor in &monitors {
            let Some(id) = monitor.id.as_deref() else {
                warn!("Skipping monitor '{}' without id", monitor.name);
                report.record_skip();
                continue;
            };

            if monitor.status == status {
                writeln!(self.out, "{} already {}", id, status)?;
                report.record_skip();
                continue;
            }

            writeln!(self.out, "{}", id)?;

            if self.options.dry_run {
                writeln!(
                    self.out,
                    "DRY RUN POST {} status={}",
                    self.client.monitor_url(id)?,
                    status
                )?;
                report.record_planned();
                continue;
            }

            match self.client.set_status(monitor, status.clone()).await {
                Ok(response) => {
                    self.print_response(&response)?;
                    report.record_response(id, &response);
                }
                Err(e) => {
                    warn!("Failed to set {} to {}: {}", id, status, e);
                    writeln!(self.out, "error: {}", e)?;
                    report.record_error(id, &e);
                }
            }
        }

        info!("{}", report);
        Ok(report)
    }

    /// Delete every matching monitor
    pub async fn delete_all(&mut self) -> Result<BatchReport> {
        let monitors = self.fetch_targets().await?;
        let mut report = BatchReport::new("delete");

        for monitor in &monitors {
            let Some(id) = monitor.id.as_deref() else {
                warn!("Skipping monitor '{}' without id", monitor.name);
                report.record_skip();
                continue;
            };

            writeln!(self.out, "{}", id)?;

            if self.options.dry_run {
                writeln!(self.out, "DRY RUN DELETE {}", self.client.monitor_url(id)?)?;
                report.record_planned();
                continue;
            }

            match self.client.delete(id).await {
                Ok(response) => {
                    self.print_response(&response)?;
                    report.record_response(id, &response);
                }
                Err(e) => {
                    warn!("Failed to delete {}: {}", id, e);
                    writeln!(self.out, "error: {}", e)?;
                    report.record_error(id, &e);
                }
            }
        }

        info!("{}", report);
        Ok(report)
    }

    /// Print one tab-separated line per monitor; returns how many were printed
    pub async fn list_all(&mut self, query: ListQuery) -> Result<usize> {
        let monitors: Vec<Monitor> = self
            .client
            .list(query)
            .await?
            .into_iter()
            .filter(|m| self.options.matches(m))
            .collect();

        for monitor in &monitors {
            writeln!(
                self.out,
                "{}\t{}\t{}\t{}\t{}\t{}",
                monitor.id.as_deref().unwrap_or("-"),
                monitor.status,
                monitor.method,
                monitor
                    .frequency
                    .map_or_else(|| "-".to_string(), |f| format!("{}s", f)),
                monitor.name,
                monitor.url
            )?;
        }

        Ok(monitors.len())
    }

    /// All monitors of the account that pass the filter
    async fn fetch_targets(&mut self) -> Result<Vec<Monitor>> {
        let monitors = self.client.list(ListQuery::default()).await?;
        let total = monitors.len();

        let selected: Vec<Monitor> = monitors
            .into_iter()
            .filter(|m| self.options.matches(m))
            .collect();

        info!("Fetched {} monitors, {} selected", total, selected.len());
        Ok(selected)
    }

    fn print_response(&mut self, response: &ApiResponse) -> Result<()> {
        writeln!(self.out, "{}", response)?;
        writeln!(self.out, "{}", response.body)?;
        Ok(())
    }
}

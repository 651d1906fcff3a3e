//! Run Batch use case
//!
//! Runs one consensus round per dependency update and aggregates the judged
//! plans into a single deduplicated report.

use crate::ports::progress::{BatchProgress, NoProgress};
use crate::ports::round_logger::{NoRoundLogger, RoundLogger};
use crate::ports::text_completion::TextCompletion;
use crate::use_cases::run_round::{RunRoundInput, RunRoundUseCase};
use concord_domain::{
    BulkReport, PackageBreakingChange, PromptTemplate, RoundResult, TaskContext, UpdateItem,
    UpdatePlan, dedup_code_changes,
};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Default bound on concurrently running item rounds.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Input for the RunBatch use case
#[derive(Debug, Clone)]
pub struct RunBatchInput {
    /// The dependency updates to analyze, one round each
    pub items: Vec<UpdateItem>,
    /// Shared context merged into every item's round (project root, files)
    pub context: TaskContext,
}

impl RunBatchInput {
    pub fn new(items: Vec<UpdateItem>) -> Self {
        Self {
            items,
            context: TaskContext::new(),
        }
    }

    pub fn with_context(mut self, context: TaskContext) -> Self {
        self.context = context;
        self
    }
}

/// Use case for analyzing a batch of dependency updates
///
/// Items are independent, so their rounds run concurrently up to a bounded
/// worker count. Aggregation and deduplication run single-threaded after
/// all rounds complete, replaying items in input order — merge rules are
/// order-sensitive, so completion order must not leak into the report.
pub struct RunBatchUseCase<G: TextCompletion + 'static> {
    gateway: Arc<G>,
    logger: Arc<dyn RoundLogger>,
    concurrency: usize,
}

impl<G: TextCompletion + 'static> RunBatchUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            logger: Arc::new(NoRoundLogger),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn RoundLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Execute the batch with no progress reporting or cancellation.
    pub async fn execute(&self, input: RunBatchInput) -> BulkReport {
        self.execute_with(input, &NoProgress, CancellationToken::new())
            .await
    }

    /// Execute the batch with progress callbacks and a cancellation token.
    ///
    /// Batch success is independent of any item's success: a failed or
    /// abandoned item becomes a `failed_packages` entry and processing
    /// continues. On cancellation, in-flight rounds are abandoned and
    /// already-completed items are retained in the partial report.
    pub async fn execute_with(
        &self,
        input: RunBatchInput,
        progress: &dyn BatchProgress,
        cancel: CancellationToken,
    ) -> BulkReport {
        let items = input.items;

        info!(
            items = items.len(),
            concurrency = self.concurrency,
            "Starting batch analysis"
        );
        progress.on_batch_start(items.len());

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut join_set = JoinSet::new();

        for (index, item) in items.iter().enumerate() {
            let gateway = Arc::clone(&self.gateway);
            let logger = Arc::clone(&self.logger);
            let semaphore = Arc::clone(&semaphore);
            let cancel = cancel.clone();

            let task = PromptTemplate::update_task(item);
            let context = item_context(&input.context, &items, index);

            join_set.spawn(async move {
                let work = async move {
                    // Closed-semaphore errors cannot happen; treat them as
                    // an abandoned item rather than panicking.
                    let _permit = semaphore.acquire_owned().await.ok()?;
                    let round = RunRoundUseCase::new(gateway).with_logger(logger);
                    Some(
                        round
                            .execute(RunRoundInput::new(task).with_context(context))
                            .await,
                    )
                };

                tokio::select! {
                    // Cancellation wins over a simultaneously ready round
                    biased;
                    _ = cancel.cancelled() => (index, None),
                    outcome = work => (index, outcome),
                }
            });
        }

        let mut outcomes: Vec<Option<RoundResult>> = vec![None; items.len()];
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, outcome)) => {
                    if let Some(result) = &outcome {
                        progress.on_item_complete(&items[index].package, result.success);
                    }
                    outcomes[index] = outcome;
                }
                Err(e) => {
                    warn!("Batch worker join error: {e}");
                }
            }
        }
        progress.on_batch_complete();

        reduce(&items, outcomes)
    }
}

/// Per-item context: the shared batch context plus the item's versions and
/// a capped summary of the other updates in flight.
fn item_context(base: &TaskContext, items: &[UpdateItem], index: usize) -> TaskContext {
    let item = &items[index];

    let mut context = base.clone();
    context.insert("package".into(), item.package.clone().into());
    context.insert("current_version".into(), item.old_version.clone().into());
    context.insert("target_version".into(), item.new_version.clone().into());

    let peers = PromptTemplate::batch_peer_summary(items, index);
    if !peers.is_empty() {
        context.insert("concurrent_updates".into(), peers.into());
    }

    context
}

/// Single-threaded reduce over the collected outcomes, in input order.
fn reduce(items: &[UpdateItem], outcomes: Vec<Option<RoundResult>>) -> BulkReport {
    let mut breaking_changes = Vec::new();
    let mut working_changes = Vec::new();
    let mut failed_packages = Vec::new();

    for (item, outcome) in items.iter().zip(outcomes) {
        match outcome {
            Some(result) if result.success => {
                match UpdatePlan::from_suggestion(&result.selected_suggestion) {
                    Some(plan) => {
                        for change in plan.breaking_changes {
                            breaking_changes.push(PackageBreakingChange {
                                package: item.package.clone(),
                                old_version: item.old_version.clone(),
                                new_version: item.new_version.clone(),
                                change,
                            });
                        }
                        for mut change in plan.code_changes {
                            change.package = Some(item.package.clone());
                            working_changes.push(change);
                        }
                    }
                    None => {
                        debug!(package = %item.package, "Round offered no structured plan");
                    }
                }
            }
            Some(result) => {
                warn!(
                    package = %item.package,
                    error = result.error.as_deref().unwrap_or("unknown"),
                    "Item analysis failed"
                );
                failed_packages.push(item.package.clone());
            }
            // Abandoned: cancelled before the round finished
            None => failed_packages.push(item.package.clone()),
        }
    }

    BulkReport {
        breaking_changes,
        code_changes: dedup_code_changes(working_changes),
        packages_analyzed: items.len(),
        failed_packages,
    }
}

//! Run Round use case
//!
//! Orchestrates one consensus round: profile dispatch, generation, judging.

use crate::ports::round_logger::{NoRoundLogger, RoundEvent, RoundLogger};
use crate::ports::text_completion::{CompletionError, TextCompletion};
use concord_domain::{
    Decision, DomainError, Profile, ProfileSet, PromptTemplate, RawResponse, RoundResult,
    Suggestion, TaskContext, parse_decision, parse_suggestion,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Internal round failure. Surfaced to callers as `RoundResult::failure`,
/// never as an `Err`.
#[derive(Error, Debug)]
enum RoundError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

/// Input for the RunRound use case
#[derive(Debug, Clone)]
pub struct RunRoundInput {
    /// The task description; its content drives profile-set dispatch
    pub task: String,
    /// Free-form context serialized into every prompt
    pub context: TaskContext,
}

impl RunRoundInput {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            context: TaskContext::new(),
        }
    }

    pub fn with_context(mut self, context: TaskContext) -> Self {
        self.context = context;
        self
    }
}

/// Use case for running a single generate-then-judge consensus round
pub struct RunRoundUseCase<G: TextCompletion + 'static> {
    gateway: Arc<G>,
    logger: Arc<dyn RoundLogger>,
}

impl<G: TextCompletion + 'static> RunRoundUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            logger: Arc::new(NoRoundLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn RoundLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute one consensus round.
    ///
    /// Any provider error during generation or judging fails the whole
    /// round: the result carries `success = false` and the error message,
    /// and no partial suggestions are surfaced.
    pub async fn execute(&self, input: RunRoundInput) -> RoundResult {
        match self.run_round(&input).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Consensus round failed: {e}");
                RoundResult::failure(e.to_string())
            }
        }
    }

    async fn run_round(&self, input: &RunRoundInput) -> Result<RoundResult, RoundError> {
        let profiles = ProfileSet::for_task(&input.task);
        if profiles.generators.is_empty() {
            return Err(DomainError::NoGenerators.into());
        }

        info!(
            generators = profiles.generators.len(),
            judge = %profiles.judge.name,
            "Starting consensus round"
        );

        let suggestions = self.generate(&profiles.generators, input).await?;
        let decision = self.judge(&profiles.judge, input, &suggestions).await?;

        info!(selected = %decision.agent_name, "Judge selected a suggestion");
        self.logger.log(RoundEvent::new(
            "round_judged",
            json!({
                "task": &input.task,
                "selected_agent": &decision.agent_name,
                "reasoning": &decision.reasoning,
                "suggestions": &suggestions,
            }),
        ));

        Ok(RoundResult::from_decision(decision, suggestions))
    }

    /// Invoke the completion capability once per generator profile, in
    /// profile order. Errors propagate — fail-fast per round.
    async fn generate(
        &self,
        generators: &[Profile],
        input: &RunRoundInput,
    ) -> Result<Vec<Suggestion>, CompletionError> {
        let prompt = PromptTemplate::generator_prompt(&input.task, &input.context);

        let mut suggestions = Vec::with_capacity(generators.len());
        for profile in generators {
            debug!(profile = %profile.name, "Requesting suggestion");
            let raw = self
                .gateway
                .complete(&profile.system_prompt(), &prompt)
                .await?;
            suggestions.push(parse_suggestion(&profile.name, &RawResponse::from(raw)));
        }

        Ok(suggestions)
    }

    async fn judge(
        &self,
        judge: &Profile,
        input: &RunRoundInput,
        suggestions: &[Suggestion],
    ) -> Result<Decision, RoundError> {
        let prompt = PromptTemplate::judge_prompt(&input.task, suggestions, &input.context);
        let raw = self
            .gateway
            .complete(&judge.system_prompt(), &prompt)
            .await?;

        parse_decision(&RawResponse::from(raw), suggestions)
            .ok_or(RoundError::Domain(DomainError::NoSuggestions))
    }
}

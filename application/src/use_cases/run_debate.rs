//! Run Debate use case
//!
//! Drives the fixed six-turn debate protocol: openings, rebuttals, final
//! positions, then report compilation. The order and count of invocations
//! is fully deterministic; only the text of each utterance is delegated
//! to the generation gateway.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::trace_logger::{NoTraceLogger, TraceEvent, TraceLogger};
use crate::use_cases::persona_invoker::PersonaInvoker;
use debate_domain::{
    DebatePrompt, DebateSpec, DirectiveKind, IncompleteTranscript, OrderViolation, Persona, Phase,
    Report, Speaker, Topic, Transcript, TranscriptEntry, Turn,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can end a debate run without a report
///
/// A failed turn invalidates the entire run: there is no mid-debate
/// recovery, and a partial debate has no defined meaning. The partial
/// transcript travels with the error so callers can persist the trace.
#[derive(Error, Debug)]
pub enum RunDebateError {
    #[error("debate aborted in phase '{phase}': {source}")]
    Aborted {
        phase: Phase,
        source: GatewayError,
        transcript: Transcript,
    },

    #[error("debate cancelled in phase '{phase}'")]
    Cancelled { phase: Phase, transcript: Transcript },

    /// Internal invariant violation - a defect in the controller itself
    #[error("protocol order violated: {0}")]
    Order(#[from] OrderViolation),

    /// Internal invariant violation - a defect in the controller itself
    #[error("report compilation failed: {0}")]
    Incomplete(#[from] IncompleteTranscript),
}

impl RunDebateError {
    /// The transcript accumulated before the run ended, if any
    pub fn transcript(&self) -> Option<&Transcript> {
        match self {
            RunDebateError::Aborted { transcript, .. }
            | RunDebateError::Cancelled { transcript, .. } => Some(transcript),
            _ => None,
        }
    }
}

/// Input for the RunDebate use case
#[derive(Debug, Clone)]
pub struct RunDebateInput {
    /// The validated run specification
    pub spec: DebateSpec,
    /// Cooperative cancellation, checked before each invocation
    pub cancel: CancellationToken,
}

impl RunDebateInput {
    pub fn new(spec: DebateSpec) -> Self {
        Self {
            spec,
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }
}

/// Complete result of a successful debate run
#[derive(Debug, Clone, Serialize)]
pub struct DebateOutcome {
    /// The frozen six-entry transcript
    pub transcript: Transcript,
    /// The compiled report
    pub report: Report,
}

/// Use case for running one debate
///
/// One instance per concurrent run is fine: the phase and transcript are
/// owned exclusively by the executing call, so independent runs share
/// nothing mutable.
pub struct RunDebateUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    trace: Arc<dyn TraceLogger>,
}

impl<G: LlmGateway + 'static> RunDebateUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            trace: Arc::new(NoTraceLogger),
        }
    }

    /// Attach a structured trace logger for the raw interaction record
    pub fn with_trace_logger(mut self, trace: Arc<dyn TraceLogger>) -> Self {
        self.trace = trace;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunDebateInput) -> Result<DebateOutcome, RunDebateError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunDebateInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<DebateOutcome, RunDebateError> {
        let spec = &input.spec;
        info!(
            "Starting debate on '{}' with model {}",
            spec.topic(),
            spec.model()
        );

        let pro = Persona::advocate_for();
        let con = Persona::advocate_against();

        let mut transcript = Transcript::new();
        let mut phase = Phase::Start;

        // Generation phases, in fixed protocol order
        while let Some(turn) = phase.turn() {
            if input.cancel.is_cancelled() {
                warn!("Debate cancelled before phase '{}'", phase.as_str());
                return Err(RunDebateError::Cancelled { phase, transcript });
            }

            progress.on_phase_start(&phase);

            let persona = match turn.speaker {
                Speaker::Pro => &pro,
                Speaker::Con => &con,
            };
            let (directive, context) = Self::build_invocation(&turn, spec.topic(), &transcript);

            debug!(
                "Phase '{}': invoking {} ({} chars of context)",
                phase.as_str(),
                persona.name,
                context.len()
            );
            self.trace.log(TraceEvent::new(
                "invocation",
                serde_json::json!({
                    "phase": phase.as_str(),
                    "speaker": turn.speaker,
                    "persona": persona.name,
                    "directive": directive,
                    "context_chars": context.len(),
                }),
            ));

            let invoker = PersonaInvoker::new(self.gateway.as_ref(), spec.model(), persona);
            let text = match invoker.invoke(&directive, &context).await {
                Ok(text) => text,
                Err(source) => {
                    warn!("Phase '{}' failed: {}", phase.as_str(), source);
                    self.trace.log(TraceEvent::new(
                        "debate_aborted",
                        serde_json::json!({
                            "phase": phase.as_str(),
                            "cause": source.to_string(),
                            "entries_so_far": transcript.len(),
                        }),
                    ));
                    return Err(RunDebateError::Aborted {
                        phase,
                        source,
                        transcript,
                    });
                }
            };

            let entry = TranscriptEntry::new(turn.speaker, phase, transcript.len(), text);
            self.trace
                .log(TraceEvent::new("transcript_entry", serde_json::json!(entry)));

            transcript.append(entry.clone())?;
            progress.on_entry(&entry);
            progress.on_phase_complete(&phase);
            phase = phase.next();
        }

        // phase == Reporting: freeze the transcript and compile
        if input.cancel.is_cancelled() {
            return Err(RunDebateError::Cancelled { phase, transcript });
        }
        progress.on_phase_start(&phase);
        debug!("Compiling report from {} entries", transcript.len());

        let report = Report::compile(&transcript, spec.topic())?;
        self.trace.log(TraceEvent::new(
            "report_compiled",
            serde_json::json!({
                "topic": report.topic,
                "sections": report.sections.len(),
            }),
        ));
        progress.on_phase_complete(&phase);

        info!("Debate complete: {} entries", transcript.len());
        Ok(DebateOutcome { transcript, report })
    }

    /// Build the directive and context for one turn from debate history
    fn build_invocation(turn: &Turn, topic: &Topic, transcript: &Transcript) -> (String, String) {
        match turn.directive {
            DirectiveKind::Opening => (DebatePrompt::opening_directive(topic), String::new()),
            DirectiveKind::Rebuttal => {
                // The opponent's opening: Pro opened at index 0, Con at 1
                let opening_index = match turn.speaker {
                    Speaker::Con => 0,
                    Speaker::Pro => 1,
                };
                let context = transcript
                    .entry(opening_index)
                    .map(|e| e.text.clone())
                    .unwrap_or_default();
                (DebatePrompt::rebuttal_directive(topic), context)
            }
            DirectiveKind::Summary => {
                (DebatePrompt::summary_directive(topic), transcript.render_history())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use debate_domain::Model;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays a scripted sequence of generation results, recording every
    /// prompt it was sent.
    struct ScriptedGateway {
        script: Mutex<VecDeque<Result<String, GatewayError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGateway {
        fn new(script: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                script: Mutex::new(script.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn ok_turns(n: usize) -> Self {
            Self::new((0..n).map(|i| Ok(format!("turn {i}"))).collect())
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        async fn generate(
            &self,
            _model: &Model,
            _system_prompt: &str,
            directive: &str,
        ) -> Result<String, GatewayError> {
            self.prompts.lock().unwrap().push(directive.to_string());
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(GatewayError::ServiceError("script exhausted".into())))
        }
    }

    fn spec() -> DebateSpec {
        DebateSpec::new("Social media should be regulated", 20, Model::default()).unwrap()
    }

    #[tokio::test]
    async fn test_successful_run_produces_six_entries_in_order() {
        let gateway = Arc::new(ScriptedGateway::ok_turns(6));
        let use_case = RunDebateUseCase::new(Arc::clone(&gateway));

        let outcome = use_case.execute(RunDebateInput::new(spec())).await.unwrap();

        assert_eq!(outcome.transcript.len(), 6);
        assert_eq!(gateway.calls(), 6);

        let phases: Vec<Phase> = outcome
            .transcript
            .snapshot()
            .iter()
            .map(|e| e.phase)
            .collect();
        assert_eq!(phases, Phase::GENERATION_ORDER.to_vec());

        let indices: Vec<usize> = outcome
            .transcript
            .snapshot()
            .iter()
            .map(|e| e.sequence_index)
            .collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);

        assert_eq!(outcome.report.sections.len(), 6);
    }

    #[tokio::test]
    async fn test_speaker_attribution_is_protocol_assigned() {
        let gateway = Arc::new(ScriptedGateway::ok_turns(6));
        let use_case = RunDebateUseCase::new(Arc::clone(&gateway));

        let outcome = use_case.execute(RunDebateInput::new(spec())).await.unwrap();
        let entries = outcome.transcript.snapshot();

        for index in [0, 3, 4] {
            assert_eq!(entries[index].speaker, Speaker::Pro, "entry {index}");
        }
        for index in [1, 2, 5] {
            assert_eq!(entries[index].speaker, Speaker::Con, "entry {index}");
        }
    }

    #[tokio::test]
    async fn test_failure_on_third_invocation_aborts_with_two_entries() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok("pro opening".into()),
            Ok("con opening".into()),
            Err(GatewayError::ServiceError("boom".into())),
        ]));
        let use_case = RunDebateUseCase::new(Arc::clone(&gateway));

        let err = use_case
            .execute(RunDebateInput::new(spec()))
            .await
            .unwrap_err();

        match err {
            RunDebateError::Aborted {
                phase,
                source,
                transcript,
            } => {
                assert_eq!(phase, Phase::AwaitingConRebuttal);
                assert_eq!(source, GatewayError::ServiceError("boom".into()));
                assert_eq!(transcript.len(), 2);
            }
            other => panic!("expected Aborted, got {other:?}"),
        }
        assert_eq!(gateway.calls(), 3);
    }

    #[tokio::test]
    async fn test_rate_limit_on_first_turn_aborts_immediately() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Err(GatewayError::RateLimited)]));
        let use_case = RunDebateUseCase::new(Arc::clone(&gateway));

        let err = use_case
            .execute(RunDebateInput::new(spec()))
            .await
            .unwrap_err();

        match err {
            RunDebateError::Aborted {
                phase, transcript, ..
            } => {
                assert_eq!(phase, Phase::Start);
                assert!(transcript.is_empty());
            }
            other => panic!("expected Aborted, got {other:?}"),
        }
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_context_threads_prior_statements() {
        let gateway = Arc::new(ScriptedGateway::ok_turns(6));
        let use_case = RunDebateUseCase::new(Arc::clone(&gateway));

        use_case.execute(RunDebateInput::new(spec())).await.unwrap();

        let prompts = gateway.prompts.lock().unwrap();
        // Openings see the topic only
        assert!(!prompts[0].contains("turn"));
        assert!(!prompts[1].contains("turn"));
        // Con rebuts the Pro opening, Pro rebuts the Con opening
        assert!(prompts[2].contains("turn 0"));
        assert!(!prompts[2].contains("turn 1"));
        assert!(prompts[3].contains("turn 1"));
        assert!(!prompts[3].contains("turn 0"));
        // Summaries see the full prior transcript
        for prior in 0..4 {
            assert!(prompts[4].contains(&format!("turn {prior}")));
        }
        for prior in 0..5 {
            assert!(prompts[5].contains(&format!("turn {prior}")));
        }
    }

    #[tokio::test]
    async fn test_cancellation_before_first_turn_makes_no_calls() {
        let gateway = Arc::new(ScriptedGateway::ok_turns(6));
        let use_case = RunDebateUseCase::new(Arc::clone(&gateway));

        let cancel = CancellationToken::new();
        cancel.cancel();
        let input = RunDebateInput::new(spec()).with_cancellation(cancel);

        let err = use_case.execute(input).await.unwrap_err();
        match err {
            RunDebateError::Cancelled { phase, transcript } => {
                assert_eq!(phase, Phase::Start);
                assert!(transcript.is_empty());
            }
            other => panic!("expected Cancelled, got {other:?}"),
        }
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_generation_aborts_the_run() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok("  ".into())]));
        let use_case = RunDebateUseCase::new(Arc::clone(&gateway));

        let err = use_case
            .execute(RunDebateInput::new(spec()))
            .await
            .unwrap_err();
        match err {
            RunDebateError::Aborted { phase, source, .. } => {
                assert_eq!(phase, Phase::Start);
                assert_eq!(source, GatewayError::EmptyResponse);
            }
            other => panic!("expected Aborted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_compile_is_idempotent_over_the_frozen_transcript() {
        let gateway = Arc::new(ScriptedGateway::ok_turns(6));
        let use_case = RunDebateUseCase::new(Arc::clone(&gateway));

        let outcome = use_case.execute(RunDebateInput::new(spec())).await.unwrap();
        let spec = spec();
        let again = Report::compile(&outcome.transcript, spec.topic()).unwrap();
        assert_eq!(outcome.report, again);
    }
}

use std::fmt;

use crate::catalog::{Candidate, CandidateSource, CatalogError, Fetched};
use crate::exclusions::ExclusionSet;

/// Fixed cap on catalog fetches per discovery call.
pub const ATTEMPT_BUDGET: u32 = 10;

/// Terminal result of one discovery call.
#[derive(Debug)]
pub enum FetchOutcome {
    /// A candidate passed the exclusion filter.
    Accepted(Candidate),
    /// The attempt budget was consumed without an acceptable candidate.
    Exhausted,
    /// A fetch failed at the transport layer; the call aborted immediately.
    TransportError(CatalogError),
}

/// The states one discovery call moves through.
///
/// `Idle → Fetching → {Fetching (loop), Accepted, Exhausted, Failed}`.
/// Nothing is carried over between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Fetching { attempt: u32 },
    Accepted,
    Exhausted,
    Failed,
}

impl State {
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Accepted | State::Exhausted | State::Failed)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Idle => write!(f, "IDLE"),
            State::Fetching { attempt } => write!(f, "FETCHING {attempt}/{ATTEMPT_BUDGET}"),
            State::Accepted => write!(f, "ACCEPTED"),
            State::Exhausted => write!(f, "EXHAUSTED"),
            State::Failed => write!(f, "FAILED"),
        }
    }
}

/// Draw candidates until one passes the exclusion filter, bounded by
/// [`ATTEMPT_BUDGET`].
///
/// Attempts are strictly sequential; each fetch is fully awaited before the
/// next begins. A transport failure aborts the whole call at once: network
/// and parse problems are not worth masking with retries, whereas "no breed
/// data" and "matched an exclusion" are expected, retryable outcomes. The
/// exclusion set is read-only here; mutating it belongs to the session.
///
/// Each state transition is reported to `observe` (the spinner in the
/// terminal UI; pass `|_| {}` when nothing is watching).
pub async fn discover(
    source: &impl CandidateSource,
    exclusions: &ExclusionSet,
    mut observe: impl FnMut(State),
) -> FetchOutcome {
    for attempt in 1..=ATTEMPT_BUDGET {
        observe(State::Fetching { attempt });

        let fetched = match source.fetch_one().await {
            Ok(fetched) => fetched,
            Err(err) => {
                observe(State::Failed);
                return FetchOutcome::TransportError(err);
            }
        };

        let candidate = match fetched {
            Fetched::Candidate(candidate) => candidate,
            // Valid but unusable response; consumes the attempt.
            Fetched::SkippedNoBreed => continue,
        };

        if exclusions.bans(&candidate) {
            continue;
        }

        observe(State::Accepted);
        return FetchOutcome::Accepted(candidate);
    }

    observe(State::Exhausted);
    FetchOutcome::Exhausted
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Plays back a fixed sequence of fetch results and counts calls.
    struct ScriptedSource {
        script: Mutex<VecDeque<Result<Fetched, CatalogError>>>,
        calls: AtomicU32,
    }

    impl ScriptedSource {
        fn new(script: Vec<Result<Fetched, CatalogError>>) -> Self {
            Self {
                script: Mutex::new(script.into()),
                calls: AtomicU32::new(0),
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl CandidateSource for ScriptedSource {
        async fn fetch_one(&self) -> Result<Fetched, CatalogError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .expect("script exhausted")
        }
    }

    fn cat(name: &str, origin: &str, life_span: &str) -> Result<Fetched, CatalogError> {
        Ok(Fetched::Candidate(Candidate {
            id: format!("id-{name}"),
            image_url: "https://example.com/cat.jpg".into(),
            name: name.into(),
            origin: origin.into(),
            life_span_label: life_span.into(),
        }))
    }

    fn skipped() -> Result<Fetched, CatalogError> {
        Ok(Fetched::SkippedNoBreed)
    }

    fn transport_error() -> Result<Fetched, CatalogError> {
        Err(CatalogError::ApiError {
            status: 500,
            message: "boom".into(),
        })
    }

    fn banning(values: &[&str]) -> ExclusionSet {
        let mut set = ExclusionSet::new();
        for v in values {
            set.add(*v);
        }
        set
    }

    #[tokio::test]
    async fn accepts_first_candidate_not_banned() {
        let source = ScriptedSource::new(vec![
            cat("Siamese", "Thailand", "12 - 15"),
            cat("Persian", "Iran (Persia)", "14 - 15"),
            cat("Maine Coon", "United States", "12 - 15"),
        ]);
        let exclusions = banning(&["Persian"]);

        let outcome = discover(&source, &exclusions, |_| {}).await;
        match outcome {
            FetchOutcome::Accepted(c) => assert_eq!(c.name, "Siamese"),
            other => panic!("expected Accepted, got {other:?}"),
        }
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn skips_banned_candidates_until_one_passes() {
        let source = ScriptedSource::new(vec![
            cat("Mau", "Egypt", "18 - 20"),
            cat("Mau", "Egypt", "18 - 20"),
            cat("Siamese", "Thailand", "12 - 15"),
        ]);
        let exclusions = banning(&["Egypt"]);

        let outcome = discover(&source, &exclusions, |_| {}).await;
        match outcome {
            FetchOutcome::Accepted(c) => assert_eq!(c.name, "Siamese"),
            other => panic!("expected Accepted, got {other:?}"),
        }
        assert_eq!(source.calls(), 3);
    }

    #[tokio::test]
    async fn all_banned_exhausts_after_exactly_ten_calls() {
        // Script more than the budget to prove the cap holds.
        let source = ScriptedSource::new(
            (0..15).map(|_| cat("Mau", "Egypt", "18 - 20")).collect(),
        );
        let exclusions = banning(&["Egypt"]);

        let outcome = discover(&source, &exclusions, |_| {}).await;
        assert!(matches!(outcome, FetchOutcome::Exhausted));
        assert_eq!(source.calls(), 10);
    }

    #[tokio::test]
    async fn transport_error_aborts_without_further_calls() {
        let source = ScriptedSource::new(vec![
            cat("Mau", "Egypt", "18 - 20"),
            cat("Mau", "Egypt", "18 - 20"),
            transport_error(),
            cat("Siamese", "Thailand", "12 - 15"),
        ]);
        let exclusions = banning(&["Egypt"]);

        let outcome = discover(&source, &exclusions, |_| {}).await;
        assert!(matches!(outcome, FetchOutcome::TransportError(_)));
        assert_eq!(source.calls(), 3);
    }

    #[tokio::test]
    async fn transport_error_on_first_attempt() {
        let source = ScriptedSource::new(vec![transport_error()]);
        let exclusions = ExclusionSet::new();

        let outcome = discover(&source, &exclusions, |_| {}).await;
        assert!(matches!(outcome, FetchOutcome::TransportError(_)));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn all_skipped_run_exhausts() {
        let source = ScriptedSource::new((0..10).map(|_| skipped()).collect());
        let exclusions = ExclusionSet::new();

        let outcome = discover(&source, &exclusions, |_| {}).await;
        assert!(matches!(outcome, FetchOutcome::Exhausted));
        assert_eq!(source.calls(), 10);
    }

    #[tokio::test]
    async fn skipped_then_accepted() {
        let source = ScriptedSource::new(vec![skipped(), cat("Siamese", "Thailand", "12 - 15")]);
        let exclusions = ExclusionSet::new();

        let outcome = discover(&source, &exclusions, |_| {}).await;
        assert!(matches!(outcome, FetchOutcome::Accepted(_)));
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn rejects_on_any_of_the_three_attributes() {
        let source = ScriptedSource::new(vec![
            cat("Siamese", "Thailand", "12 - 15"),
            cat("Bengal", "United States", "12 - 16"),
        ]);
        // Banned by life-span label, not by name or origin.
        let exclusions = banning(&["12 - 15"]);

        let outcome = discover(&source, &exclusions, |_| {}).await;
        match outcome {
            FetchOutcome::Accepted(c) => assert_eq!(c.name, "Bengal"),
            other => panic!("expected Accepted, got {other:?}"),
        }
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn empty_exclusion_set_accepts_first_usable() {
        let source = ScriptedSource::new(vec![cat("Persian", "Iran (Persia)", "14 - 15")]);
        let exclusions = ExclusionSet::new();

        let outcome = discover(&source, &exclusions, |_| {}).await;
        assert!(matches!(outcome, FetchOutcome::Accepted(_)));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn states_are_observed_in_order() {
        let source = ScriptedSource::new(vec![
            cat("Mau", "Egypt", "18 - 20"),
            transport_error(),
        ]);
        let exclusions = banning(&["Egypt"]);

        let mut states = Vec::new();
        let outcome = discover(&source, &exclusions, |s| states.push(s)).await;

        assert!(matches!(outcome, FetchOutcome::TransportError(_)));
        assert_eq!(
            states,
            vec![
                State::Fetching { attempt: 1 },
                State::Fetching { attempt: 2 },
                State::Failed,
            ]
        );
    }

    #[tokio::test]
    async fn accepted_state_follows_last_fetch() {
        let source = ScriptedSource::new(vec![cat("Siamese", "Thailand", "12 - 15")]);
        let exclusions = ExclusionSet::new();

        let mut states = Vec::new();
        discover(&source, &exclusions, |s| states.push(s)).await;

        assert_eq!(states, vec![State::Fetching { attempt: 1 }, State::Accepted]);
    }

    #[test]
    fn state_display() {
        assert_eq!(State::Idle.to_string(), "IDLE");
        assert_eq!(State::Fetching { attempt: 3 }.to_string(), "FETCHING 3/10");
        assert_eq!(State::Accepted.to_string(), "ACCEPTED");
        assert_eq!(State::Exhausted.to_string(), "EXHAUSTED");
        assert_eq!(State::Failed.to_string(), "FAILED");
    }

    #[test]
    fn terminal_states() {
        assert!(!State::Idle.is_terminal());
        assert!(!State::Fetching { attempt: 1 }.is_terminal());
        assert!(State::Accepted.is_terminal());
        assert!(State::Exhausted.is_terminal());
        assert!(State::Failed.is_terminal());
    }
}

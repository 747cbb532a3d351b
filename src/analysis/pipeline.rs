use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use crate::constants::DEFAULT_ORACLE_SCORE;
use crate::content::{AnalysisDepth, ArticleContent, ArticleRole};
use crate::hashing::run_fingerprint;
use crate::oracle::{
    CandidateResult, Oracle, ParseOutcome, PromptEvidence, build_oracle_request,
    parse_oracle_response,
};
use crate::scoring::{ScoreBreakdown, blend, classify, score_issues};
use crate::segment::comparison_summary;

use super::error::AnalysisError;
use super::types::{AnalysisResult, AnalysisSummary, SeverityCounts};

/// Runs one subject/reference comparison: segmentation, a single oracle call, then
/// deterministic scoring of whatever the oracle reported.
#[derive(Clone)]
pub struct Analyzer {
    oracle: Arc<dyn Oracle>,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer").finish_non_exhaustive()
    }
}

impl Analyzer {
    pub fn new(oracle: Arc<dyn Oracle>) -> Self {
        Self { oracle }
    }

    /// Analyzes `subject` against `reference`.
    ///
    /// Fails fast with [`AnalysisError::InputMissing`] before any oracle call when either
    /// article has no body text. The oracle is called exactly once and never retried.
    #[instrument(
        skip_all,
        fields(run_id = tracing::field::Empty, depth = %depth, topic = %subject.title)
    )]
    pub async fn analyze(
        &self,
        subject: &ArticleContent,
        reference: &ArticleContent,
        depth: AnalysisDepth,
    ) -> Result<AnalysisResult, AnalysisError> {
        if subject.is_blank() {
            return Err(AnalysisError::InputMissing {
                role: ArticleRole::Subject,
            });
        }
        if reference.is_blank() {
            return Err(AnalysisError::InputMissing {
                role: ArticleRole::Reference,
            });
        }

        let run_id = format!("{:016x}", run_fingerprint(subject, reference));
        tracing::Span::current().record("run_id", tracing::field::display(&run_id));

        let evidence = PromptEvidence::gather(subject, reference);
        info!(
            subject_segments = evidence.subject_segments.len(),
            reference_segments = evidence.reference_segments.len(),
            subject_anchors = evidence.subject_anchors.len(),
            reference_anchors = evidence.reference_anchors.len(),
            summary = %comparison_summary(&evidence.subject_segments, &evidence.reference_segments),
            "Segmentation complete"
        );

        let request = build_oracle_request(subject, reference, depth, &evidence);
        info!(
            prompt_chars = request.prompt.len(),
            max_output_tokens = request.max_output_tokens,
            "Oracle invoked"
        );

        let raw = self.oracle.invoke(&request).await.map_err(|e| {
            error!(error = %e, "Oracle call failed");
            AnalysisError::from(e)
        })?;

        let candidate = match parse_oracle_response(&raw) {
            ParseOutcome::Parsed(candidate) => candidate,
            ParseOutcome::Malformed { reason, excerpt } => {
                error!(%reason, %excerpt, "Oracle response malformed");
                return Err(AnalysisError::OracleResponseMalformed { reason, excerpt });
            }
        };

        info!(
            issues = candidate.issues.len(),
            defaulted = candidate.defaulted.len(),
            "Oracle response parsed"
        );
        for field in &candidate.defaulted {
            warn!(field = %field, "Oracle field missing or invalid, default applied");
        }

        Ok(finalize(candidate))
    }
}

/// Blend inputs for a candidate: the oracle's score (or the default) and the
/// deterministic score of its issues.
pub fn score_breakdown(candidate: &CandidateResult) -> ScoreBreakdown {
    let deterministic_score = score_issues(&candidate.issues);
    let (oracle_score, oracle_score_defaulted) = match candidate.oracle_score {
        Some(score) => (score, false),
        None => (DEFAULT_ORACLE_SCORE, true),
    };

    ScoreBreakdown {
        oracle_score,
        oracle_score_defaulted,
        deterministic_score,
        blended_score: blend(oracle_score, f64::from(deterministic_score)),
    }
}

/// Turns a validated candidate into the final result. Counts, score and verdict are
/// recomputed here; the oracle's own tallies and verdict are discarded.
pub fn finalize(candidate: CandidateResult) -> AnalysisResult {
    let counts = SeverityCounts::from_issues(&candidate.issues);
    let breakdown = score_breakdown(&candidate);
    let verdict = classify(breakdown.blended_score, counts.critical, counts.high);

    info!(
        oracle_score = breakdown.oracle_score,
        oracle_score_defaulted = breakdown.oracle_score_defaulted,
        deterministic_score = breakdown.deterministic_score,
        blended_score = breakdown.blended_score,
        verdict = %verdict,
        "Score blended"
    );
    if let Some(claimed) = candidate
        .oracle_verdict
        .as_deref()
        .filter(|claimed| *claimed != verdict.as_str())
    {
        debug!(oracle_verdict = claimed, verdict = %verdict, "Oracle verdict overridden");
    }

    let verdict_explanation = candidate
        .verdict_explanation
        .unwrap_or_else(|| default_explanation(&counts));

    AnalysisResult {
        summary: AnalysisSummary {
            overall_score: breakdown.blended_score,
            total_issues: counts.total(),
            critical_issues: counts.critical,
            high_issues: counts.high,
            medium_issues: counts.medium,
            low_issues: counts.low,
            verdict,
            verdict_explanation,
        },
        issues: candidate.issues,
        topic_overview: candidate.topic_overview,
        key_differences: candidate.key_differences,
        agreement_areas: candidate.agreement_areas,
    }
}

fn default_explanation(counts: &SeverityCounts) -> String {
    format!(
        "Analysis found {} issues with {} critical and {} high severity problems.",
        counts.total(),
        counts.critical,
        counts.high
    )
}

//! Instruction and evidence payload for the oracle.

use crate::constants::{MAX_SEGMENT_MAP_ENTRIES, ORACLE_TEMPERATURE};
use crate::content::{AnalysisDepth, ArticleContent};
use crate::segment::{
    ContentSegment, comparison_summary, extract_factual_anchors, segment_content,
};
use crate::similarity::find_relevant_evidence;

use super::types::OracleRequest;

const RULE: &str = "===============================================================";

/// Segments and anchors for both articles, computed once per run.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptEvidence {
    pub subject_segments: Vec<ContentSegment>,
    pub reference_segments: Vec<ContentSegment>,
    pub subject_anchors: Vec<String>,
    pub reference_anchors: Vec<String>,
}

impl PromptEvidence {
    /// Segments both articles and extracts their factual anchors.
    pub fn gather(subject: &ArticleContent, reference: &ArticleContent) -> Self {
        Self {
            subject_segments: segment_content(&subject.raw_text, &subject.sections),
            reference_segments: segment_content(&reference.raw_text, &reference.sections),
            subject_anchors: extract_factual_anchors(&subject.raw_text),
            reference_anchors: extract_factual_anchors(&reference.raw_text),
        }
    }

    /// Alignment hints: each subject segment with its closest reference section.
    pub fn segment_map(&self) -> String {
        let lines: Vec<String> = self
            .subject_segments
            .iter()
            .take(MAX_SEGMENT_MAP_ENTRIES)
            .map(|segment| {
                let target = match find_relevant_evidence(&segment.text, &self.reference_segments)
                {
                    Some((best, score)) => format!(
                        "closest reference section \"{}\" (overlap {:.2})",
                        best.heading, score
                    ),
                    None => "no overlapping reference section".to_string(),
                };
                format!(
                    "- [{}] {} claims -> {}\n",
                    segment.heading,
                    segment.claims.len(),
                    target
                )
            })
            .collect();

        if lines.is_empty() {
            "- no subject segments extracted\n".to_string()
        } else {
            lines.concat()
        }
    }
}

/// Truncates `text` to at most `max_chars` characters on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn anchor_line(anchors: &[String]) -> String {
    if anchors.is_empty() {
        "No specific facts extracted".to_string()
    } else {
        anchors.join(", ")
    }
}

/// Builds the single request sent to the oracle for this run.
pub fn build_oracle_request(
    subject: &ArticleContent,
    reference: &ArticleContent,
    depth: AnalysisDepth,
    evidence: &PromptEvidence,
) -> OracleRequest {
    OracleRequest {
        system_instructions: system_instructions(depth, evidence),
        prompt: user_prompt(subject, reference, depth),
        max_output_tokens: depth.max_output_tokens(),
        temperature: ORACLE_TEMPERATURE,
    }
}

fn system_instructions(depth: AnalysisDepth, evidence: &PromptEvidence) -> String {
    let mode = depth.as_str().to_uppercase();
    let coverage = match depth {
        AnalysisDepth::Quick => "Focus on the 5-10 most significant issues",
        AnalysisDepth::Comprehensive => {
            "Analyze EVERY claim systematically - aim for 10-20 issues if problems exist"
        }
    };

    format!(
        r#"You are an expert fact-checker, bias analyst and content verification specialist. Perform a rigorous {mode} analysis of an AI-generated encyclopedia article (the SUBJECT) against an established reference article (the REFERENCE), which is the ground truth.

## ANALYSIS PROTOCOL

### Stage 1: Claim extraction
- Identify every factual claim in the SUBJECT
- Focus on dates, statistics, names, events, relationships, definitions and causal statements

### Stage 2: Cross-reference
- Look up each claim in the REFERENCE
- Mark it VERIFIED, CONTRADICTED, UNVERIFIED or PARTIALLY SUPPORTED

### Stage 3: Issue classification
1. factual_error (critical/high): direct contradiction of reference facts
2. hallucination (critical): fabricated information with no basis in the reference
3. bias (medium/high): loaded language, one-sided framing, opinion stated as fact
4. missing_context (medium): important reference information omitted
5. misleading (high): technically true but deceptive framing
6. outdated (low/medium): stale statistics or superseded information

### Stage 4: Severity assessment
- critical: fundamentally wrong, harmful if believed
- high: seriously misrepresents the topic
- medium: affects understanding
- low: minor inaccuracy or stylistic concern

### Stage 5: Scoring
Start at 100 and deduct 25 per critical, 15 per high, 8 per medium and 3 per low issue. Minimum 0.

## CROSS-REFERENCE HINTS
Structure: {structure}
Subject anchors: {subject_anchors}
Reference anchors: {reference_anchors}

Segment map (subject section -> closest reference section by word overlap):
{segment_map}
## OUTPUT CONTRACT
Respond with ONLY one JSON object, no markdown and no text before or after it:

{{
  "summary": {{
    "overallScore": <number 0-100 from the scoring stage>,
    "totalIssues": <number>,
    "criticalIssues": <number>,
    "highIssues": <number>,
    "mediumIssues": <number>,
    "lowIssues": <number>,
    "verdict": "<reliable|mostly_reliable|questionable|unreliable>",
    "verdictExplanation": "<2-3 sentence explanation of the verdict>"
  }},
  "issues": [
    {{
      "id": "issue-1",
      "type": "<factual_error|hallucination|bias|missing_context|misleading|outdated>",
      "severity": "<low|medium|high|critical>",
      "title": "<concise issue title>",
      "description": "<what is wrong and why it matters>",
      "subjectExcerpt": "<exact quote from the SUBJECT>",
      "referenceEvidence": "<exact quote from the REFERENCE>",
      "recommendation": "<specific actionable fix>"
    }}
  ],
  "topicOverview": "<overview of the topic>",
  "keyDifferences": ["<difference>", "..."],
  "agreementAreas": ["<area of agreement>", "..."]
}}

## GUIDELINES
- Be thorough but fair; acknowledge where the SUBJECT is accurate
- Quote exactly, never paraphrase
- Every issue needs evidence from both articles
- {coverage}
- Consider the cumulative effect of many small issues
- Hallucinations are the most serious finding"#,
        subject_anchors = anchor_line(&evidence.subject_anchors),
        reference_anchors = anchor_line(&evidence.reference_anchors),
        segment_map = evidence.segment_map(),
        structure = comparison_summary(&evidence.subject_segments, &evidence.reference_segments),
    )
}

fn user_prompt(subject: &ArticleContent, reference: &ArticleContent, depth: AnalysisDepth) -> String {
    let budget = depth.char_budget();
    let article = |label: &str, article: &ArticleContent| {
        format!(
            "{RULE}\n{label}\n{RULE}\nTitle: {}\nURL: {}\n\n{}\n",
            article.title,
            article.source_url.as_deref().unwrap_or("N/A"),
            truncate_chars(&article.raw_text, budget)
        )
    };

    format!(
        "Perform a {depth} fact-check analysis comparing these two articles:\n\n{}\n{}\n{RULE}\nTASK\n{RULE}\n\
         1. Compare the SUBJECT against the REFERENCE systematically\n\
         2. Identify factual errors, hallucinations, bias and misleading statements\n\
         3. Quote exact evidence from both articles\n\
         4. Compute the trust score with the weighted deductions\n\
         5. Return ONLY the JSON object",
        article("SUBJECT ARTICLE (AI-generated, under review)", subject),
        article("REFERENCE ARTICLE (ground truth)", reference),
    )
}

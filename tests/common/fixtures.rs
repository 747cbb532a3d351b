//! Article and oracle-reply fixtures for integration tests.

use trustlens::{ArticleContent, Section};

pub const TOPIC: &str = "Marie Curie";

/// Two criticals, one high, three lows; oracle score 45.
pub const MIXED_ORACLE_REPLY: &str = r#"Here is my analysis:
```json
{
  "summary": {"overallScore": 45, "verdict": "unreliable", "verdictExplanation": "Several dates and awards are wrong."},
  "issues": [
    {"id": "issue-1", "type": "factual_error", "severity": "critical", "title": "Wrong birth year",
     "description": "Birth year is given as 1869.", "subjectExcerpt": "born in 1869",
     "referenceEvidence": "born 7 November 1867", "recommendation": "Correct the year."},
    {"id": "issue-2", "type": "hallucination", "severity": "critical", "title": "Invented award",
     "description": "Claims a third Nobel Prize.", "subjectExcerpt": "her third Nobel Prize",
     "referenceEvidence": "two Nobel Prizes", "recommendation": "Remove the claim."},
    {"id": "issue-3", "type": "missing_context", "severity": "high", "title": "Omitted collaborator",
     "description": "Pierre Curie is not mentioned.", "subjectExcerpt": "she discovered polonium",
     "referenceEvidence": "with Pierre Curie", "recommendation": "Mention the collaboration."},
    {"id": "issue-4", "type": "outdated", "severity": "low", "title": "Old museum name",
     "description": "Uses a former museum name.", "subjectExcerpt": "the Radium Institute museum",
     "referenceEvidence": "Musee Curie", "recommendation": "Use the current name."},
    {"id": "issue-5", "type": "bias", "severity": "low", "title": "Loaded wording",
     "description": "Describes rivals pejoratively.", "subjectExcerpt": "jealous rivals",
     "referenceEvidence": "contemporaries", "recommendation": "Use neutral wording."},
    {"id": "issue-6", "type": "misleading", "severity": "low", "title": "Overstated first",
     "description": "Overstates a first.", "subjectExcerpt": "the first scientist ever",
     "referenceEvidence": "the first woman to win a Nobel Prize", "recommendation": "Qualify it."}
  ],
  "topicOverview": "Biography of a physicist and chemist.",
  "keyDifferences": ["Birth year", "Number of Nobel Prizes"],
  "agreementAreas": ["Nationality", "Field of research"]
}
```"#;

/// Oracle score 80 with a single low issue.
pub const CLEAN_ORACLE_REPLY: &str = r#"{
  "summary": {"overallScore": 80, "verdictExplanation": "Largely consistent with the reference."},
  "issues": [
    {"id": "issue-1", "type": "outdated", "severity": "low", "title": "Old museum name",
     "description": "Uses a former museum name.", "subjectExcerpt": "the Radium Institute museum",
     "referenceEvidence": "Musee Curie", "recommendation": "Use the current name."}
  ],
  "topicOverview": "Biography of a physicist and chemist.",
  "keyDifferences": [],
  "agreementAreas": ["Nobel Prizes"]
}"#;

pub fn subject_article() -> ArticleContent {
    ArticleContent::new(
        TOPIC,
        "Marie Curie was a Polish and naturalised-French physicist and chemist born in 1869. \
         She won her third Nobel Prize in 1935 after she discovered polonium.",
    )
    .with_sections(vec![
        Section::new(
            "Early life",
            "Marie Curie was born in 1869 in Warsaw, then part of the Russian Empire. \
             She studied at the Flying University before moving to Paris in 1891.",
        ),
        Section::new(
            "Scientific career",
            "She discovered polonium and radium and won her third Nobel Prize in 1935. \
             Jealous rivals doubted her results for years afterwards.",
        ),
    ])
    .with_source_url("https://grokipedia.com/page/Marie_Curie")
    .with_fetched_at("2025-06-01T08:00:00.000Z")
}

pub fn reference_article() -> ArticleContent {
    ArticleContent::new(
        TOPIC,
        "Marie Salomea Sklodowska-Curie was a Polish and naturalised-French physicist and \
         chemist, born 7 November 1867. She won two Nobel Prizes.",
    )
    .with_sections(vec![
        Section::new(
            "Early life",
            "Maria Sklodowska was born in Warsaw on 7 November 1867. \
             She attended the Flying University and moved to Paris in 1891.",
        ),
        Section::new(
            "Scientific career",
            "With Pierre Curie she discovered polonium and radium in 1898. \
             She was the first woman to win a Nobel Prize and the only person to win in two sciences.",
        ),
    ])
}

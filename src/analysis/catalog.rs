use std::sync::{Arc, LazyLock};

use rand::Rng;

use super::record::{AnalysisRecord, CredibilityStatus, ImmunityTip};

/// The fixed set of records the mock engine chooses from.
static CANONICAL_RECORDS: LazyLock<[Arc<AnalysisRecord>; 3]> = LazyLock::new(|| {
    [
        Arc::new(AnalysisRecord {
            credibility_score: 85,
            status: CredibilityStatus::Verified,
            explanation: "This content shows strong journalistic standards with proper \
                attribution, balanced reporting, and verifiable facts. The language is \
                neutral and sources are credible."
                .into(),
            red_flags: Vec::new(),
            sources: strings(&["Reuters", "Associated Press", "Government Records"]),
            immunity_tip: ImmunityTip {
                title: "Look for Source Attribution".into(),
                description: "Credible news always cites specific sources and provides \
                    context. Notice how this article mentions where information came from."
                    .into(),
                pattern: "Multiple independent sources + specific quotes + official records"
                    .into(),
            },
        }),
        Arc::new(AnalysisRecord {
            credibility_score: 35,
            status: CredibilityStatus::Suspicious,
            explanation: "This content contains several warning signs of potential \
                misinformation including emotional language, lack of credible sources, \
                and unverified claims."
                .into(),
            red_flags: strings(&[
                "Uses highly emotional language designed to provoke anger",
                "Makes claims without citing credible sources",
                "Contains absolute statements without nuance",
                "Appeals to conspiracy theories",
            ]),
            sources: strings(&["Unverified social media posts", "Anonymous sources"]),
            immunity_tip: ImmunityTip {
                title: "Emotional Manipulation Alert".into(),
                description: "Be wary of content that tries to make you angry or scared \
                    without providing solid evidence. This often indicates bias or \
                    manipulation."
                    .into(),
                pattern: "Strong emotions + weak evidence = Red flag".into(),
            },
        }),
        Arc::new(AnalysisRecord {
            credibility_score: 15,
            status: CredibilityStatus::Misleading,
            explanation: "This content shows clear signs of misinformation with false \
                claims, misleading statistics, and deliberate manipulation of facts."
                .into(),
            red_flags: strings(&[
                "Contains factually incorrect information",
                "Misrepresents statistical data",
                "Uses outdated or irrelevant information",
                "Lacks any credible source verification",
            ]),
            sources: strings(&["No credible sources found"]),
            immunity_tip: ImmunityTip {
                title: "Fact-Check Before Sharing".into(),
                description: "Always verify claims through multiple independent sources \
                    before believing or sharing. This content failed basic fact-checking."
                    .into(),
                pattern: "Unverified claims + missing context = Misinformation".into(),
            },
        }),
    ]
});

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

/// All canonical records, in authoring order.
pub fn canonical_records() -> &'static [Arc<AnalysisRecord>] {
    CANONICAL_RECORDS.as_slice()
}

/// Pick one canonical record uniformly at random.
pub fn select() -> Arc<AnalysisRecord> {
    select_with(&mut rand::rng())
}

/// Pick one canonical record using the provided generator.
///
/// Returns a shared handle to the canonical record; nothing is copied.
pub fn select_with<R: Rng>(rng: &mut R) -> Arc<AnalysisRecord> {
    let records = canonical_records();
    let index = rng.random_range(0..records.len());
    Arc::clone(&records[index])
}

use crate::models::FitBreakdown;

pub const FALLBACK_RATIONALE: &str = "Partial match across multiple criteria";
const SEPARATOR: &str = "; ";

/// Human-readable explanation built from the rounded breakdown.
///
/// Fragments appear in a fixed order: tags, audience, performance, budget,
/// reliability.
pub fn generate_rationale(breakdown: &FitBreakdown) -> String {
    let rules: [(&str, f64, f64); 5] = [
        ("Relevant tags", breakdown.tags, 0.5),
        ("Good audience fit", breakdown.audience_overlap, 0.4),
        ("High performance", breakdown.performance, 0.6),
        ("Price compatible with budget", breakdown.budget_fit, 0.7),
        ("Reliable delivery", breakdown.reliability, 0.8),
    ];

    let reasons: Vec<String> = rules
        .iter()
        .filter(|(_, value, threshold)| value > threshold)
        .map(|(label, value, _)| format!("{} ({})", label, pct(*value)))
        .collect();

    if reasons.is_empty() {
        return FALLBACK_RATIONALE.to_string();
    }

    reasons.join(SEPARATOR)
}

#[inline]
fn pct(value: f64) -> String {
    format!("{}%", (value * 100.0).round() as i64)
}

use crate::model::RoundResult;

#[must_use]
pub fn render_history(history: &[RoundResult]) -> String {
    if history.is_empty() {
        return "No rounds yet.\n".to_string();
    }
    let mut lines: Vec<String> = Vec::with_capacity(history.len());
    for (i, result) in history.iter().enumerate() {
        let course = if result.round.course.name.is_empty() {
            "Golf Course"
        } else {
            result.round.course.name.as_str()
        };
        let scores: Vec<String> = result
            .round
            .players
            .iter()
            .filter_map(|p| result.totals.get(&p.id).map(|t| format!("{} {}", p.name, t.gross)))
            .collect();
        lines.push(format!(
            "{:>3}. {}  {} ({} holes)  won by {}  [{}]",
            i + 1,
            result.finished_at.format("%Y-%m-%d"),
            course,
            result.round.holes,
            result.winner_names().join(", "),
            scores.join(", ")
        ));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

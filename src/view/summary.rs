use super::signed;
use crate::model::{HoleCount, RoundResult};

#[must_use]
pub fn render_summary(result: &RoundResult) -> String {
    let names = result.winner_names();
    let heading = match names.len() {
        0 => "No winner".to_string(),
        1 => format!("Winner: {}", names[0]),
        _ => format!("Tie: {}", names.join(", ")),
    };
    let mut lines = vec![heading];

    for player in &result.round.players {
        let Some(stats) = result.totals.get(&player.id) else {
            continue;
        };
        let marker = if result.is_winner(&player.id) { "*" } else { " " };
        let mut line = format!(
            "{marker} {:<20} {:>3}  {:>4}",
            player.name,
            stats.gross,
            signed(stats.vs_par)
        );
        if result.round.holes == HoleCount::Eighteen {
            line.push_str(&format!("  out {} in {}", stats.front9, stats.back9));
        }
        line.push_str(&format!(
            "  est. handicap diff {:.1}",
            stats.estimated_handicap_differential
        ));
        lines.push(line);
    }
    lines.push("Handicap figures are a single-round estimate, not an official index.".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

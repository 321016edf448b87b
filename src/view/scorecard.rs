use super::signed;
use crate::model::{HoleScore, Player, Round};
use crate::score::{back9_total, front9_total, total, vs_par};

const UNSET: &str = "—";

fn finish(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[must_use]
pub fn render_setup(round: &Round) -> String {
    let name = if round.course.name.is_empty() {
        "(unnamed course)"
    } else {
        round.course.name.as_str()
    };
    let pars: Vec<String> = round.course.pars.iter().map(i32::to_string).collect();
    let mut lines = vec![
        format!(
            "{name}  {} holes  rating {:.1}  slope {}",
            round.holes, round.course.rating, round.course.slope
        ),
        format!("Pars: {}  (total {})", pars.join(" "), round.par_total()),
    ];
    if round.players.is_empty() {
        lines.push("Add players to start".to_string());
    }
    lines.extend(
        round
            .players
            .iter()
            .enumerate()
            .map(|(i, player)| format!("  {}. {}", i + 1, player.name)),
    );
    finish(&lines)
}

/// One line per player with running gross and vs par.
#[must_use]
pub fn render_scorecard(round: &Round) -> String {
    let course = if round.course.name.is_empty() {
        "Golf Course"
    } else {
        round.course.name.as_str()
    };
    let mut lines = vec![format!("{course}  par {}", round.par_total())];
    for (i, player) in round.players.iter().enumerate() {
        lines.push(format!(
            "  {}. {:<20} {:>3}  {:>4}  ({}/{} holes)",
            i + 1,
            player.name,
            total(player),
            running_vs_par(player, round),
            player.holes_played(),
            round.holes
        ));
    }
    if round.is_complete() && !round.players.is_empty() {
        lines.push("All holes entered, ready to end the round.".to_string());
    }
    finish(&lines)
}

/// Hole-by-hole card for one player.
#[must_use]
pub fn render_player_card(round: &Round, player: &Player) -> String {
    let mut lines = vec![player.name.clone()];
    for (hole, stroke) in player.strokes.iter().enumerate().take(round.holes.count()) {
        let par = round.course.pars.get(hole).copied().unwrap_or_default();
        lines.push(match stroke {
            Some(s) => {
                let diff = s - par;
                format!(
                    "  hole {:>2}  par {}  {:>2}  {:>3}  {}",
                    hole + 1,
                    par,
                    s,
                    signed(diff),
                    HoleScore::from_diff(diff)
                )
            }
            None => format!("  hole {:>2}  par {}  {UNSET}", hole + 1, par),
        });
    }
    if round.holes.count() == 18 {
        lines.push(format!(
            "  front {}  back {}",
            front9_total(player),
            back9_total(player)
        ));
    }
    lines.push(format!(
        "  total {}  {}",
        total(player),
        running_vs_par(player, round)
    ));
    finish(&lines)
}

fn running_vs_par(player: &Player, round: &Round) -> String {
    if total(player) == 0 {
        UNSET.to_string()
    } else {
        signed(vs_par(player, &round.course))
    }
}

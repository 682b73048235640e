use crate::render::{LeaderboardView, NO_DATA_MESSAGE};

const HEADERS: [&str; 5] = ["#", "Username", "Clan", "Rank", "Score"];

/// Plain-text leaderboard for the terminal.
///
/// Failures come first, one per line, then the table (or the no-data line).
pub fn render_table(view: &LeaderboardView) -> String {
    let mut out = String::new();

    for error in &view.errors {
        out.push_str(&format!("⚠️  {error}\n"));
    }
    if !view.errors.is_empty() {
        out.push('\n');
    }

    out.push_str(&format!("Ranking by: {}\n", view.selector.label()));

    if view.is_empty() {
        out.push_str(NO_DATA_MESSAGE);
        out.push('\n');
        return out;
    }

    let cells: Vec<[String; 5]> = view
        .rows
        .iter()
        .map(|row| {
            let position = match row.medal {
                Some(medal) => format!("{} {}", row.position, medal),
                None => row.position.to_string(),
            };
            [
                position,
                row.username.clone(),
                row.clan.clone(),
                row.rank_name.clone(),
                row.score.to_string(),
            ]
        })
        .collect();

    let widths: Vec<usize> = (0..HEADERS.len())
        .map(|col| {
            cells
                .iter()
                .map(|r| r[col].chars().count())
                .chain(std::iter::once(HEADERS[col].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = HEADERS
        .iter()
        .zip(&widths)
        .map(|(h, &w)| pad(h, w))
        .collect();
    out.push_str(&format!("| {} |\n", header.join(" | ")));

    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&format!("|-{}-|\n", rule.join("-|-")));

    for row in &cells {
        let padded: Vec<String> = row.iter().zip(&widths).map(|(c, &w)| pad(c, w)).collect();
        out.push_str(&format!("| {} |\n", padded.join(" | ")));
    }

    out
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

use std::fmt::Write;

use crate::render::{LeaderboardView, NO_DATA_MESSAGE};

const STYLE: &str = "body{font-family:sans-serif;margin:2em;}\
form{display:flex;gap:.8em;align-items:center;margin:1em 0;}\
input[name=users]{flex:1;}\
table{border-collapse:collapse;min-width:40em;}\
th,td{border:1px solid #ccc;padding:.4em .8em;text-align:left;}\
td.score{text-align:right;}\
tr.gold{background:#fff4c2;}tr.silver{background:#eef0f2;}tr.bronze{background:#f6e3d4;}\
p.error{color:#b00020;}";

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn row_class(position: usize) -> &'static str {
    match position {
        1 => " class=\"gold\"",
        2 => " class=\"silver\"",
        3 => " class=\"bronze\"",
        _ => "",
    }
}

/// Full leaderboard page.
///
/// `users` is echoed back into the input field. `message` is an optional
/// notice shown above the table, e.g. for empty input.
pub fn render_page(view: Option<&LeaderboardView>, users: &str, message: Option<&str>) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Codewars Leaderboard</title>\n");
    let _ = writeln!(html, "<style>{STYLE}</style>\n</head>\n<body>");
    html.push_str("<h1>🏆 Codewars Leaderboard</h1>\n");

    html.push_str("<form method=\"get\" action=\"/\">\n");
    html.push_str("<label for=\"users\">Usernames:</label>\n");
    let _ = writeln!(
        html,
        "<input id=\"users\" name=\"users\" placeholder=\"e.g. CodeYourFuture, SallyMcGrath\" value=\"{}\">",
        escape_html(users)
    );
    html.push_str("<button type=\"submit\">Show Rankings</button>\n");
    html.push_str("<label for=\"by\">Ranking by:</label>\n");

    match view {
        Some(view) => {
            html.push_str("<select id=\"by\" name=\"by\" onchange=\"this.form.submit()\">\n");
            for option in &view.options {
                let _ = writeln!(
                    html,
                    "<option value=\"{}\"{}>{}</option>",
                    escape_html(&option.value),
                    if option.selected { " selected" } else { "" },
                    escape_html(&option.label)
                );
            }
            html.push_str("</select>\n");
        }
        None => html.push_str("<select id=\"by\" name=\"by\" disabled></select>\n"),
    }
    html.push_str("</form>\n");

    if let Some(message) = message {
        let _ = writeln!(html, "<p class=\"error\" role=\"alert\">{}</p>", escape_html(message));
    }

    if let Some(view) = view {
        for error in &view.errors {
            let _ = writeln!(html, "<p class=\"error\" role=\"alert\">⚠️ {}</p>", escape_html(error));
        }
        write_table(&mut html, view);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn write_table(html: &mut String, view: &LeaderboardView) {
    html.push_str("<table>\n<thead><tr><th scope=\"col\">#</th><th scope=\"col\">Username</th>");
    html.push_str("<th scope=\"col\">Clan</th><th scope=\"col\">Rank</th><th scope=\"col\">Score</th></tr></thead>\n<tbody>\n");

    if view.is_empty() {
        let _ = writeln!(html, "<tr><td colspan=\"5\">{NO_DATA_MESSAGE}</td></tr>");
    }

    for row in &view.rows {
        let _ = writeln!(
            html,
            "<tr{}><td><strong>#{}</strong> {}</td><td><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></td><td>{}</td><td>{}</td><td class=\"score\">{}</td></tr>",
            row_class(row.position),
            row.position,
            row.medal.unwrap_or(""),
            escape_html(&row.profile_url),
            escape_html(&row.username),
            escape_html(&row.clan),
            escape_html(&row.rank_name),
            row.score
        );
    }

    html.push_str("</tbody>\n</table>\n");
}

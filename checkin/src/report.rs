use crate::reward::{ClaimResult, GameResultSet};
use chrono::{DateTime, TimeZone};
use colored::Colorize;
use std::fmt::Display;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 7] = ["UID", "이름", "레벨", "서버", "일수", "성공", "보상"];

#[derive(Clone, Copy)]
enum Align {
    Center,
    Right,
}

const ALIGN: [Align; 7] = [
    Align::Center,
    Align::Center,
    Align::Center,
    Align::Center,
    Align::Center,
    Align::Right,
    Align::Right,
];

pub(crate) fn timestamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    now.format("%Y-%m-%d %I:%M:%S %p").to_string()
}

/// Prints every game's table inside one panel titled with `title`.
pub(crate) fn print(results: &[GameResultSet], title: &str) {
    if results.is_empty() {
        return;
    }
    println!("{}", render(results, title));
}

pub(crate) fn render(results: &[GameResultSet], title: &str) -> String {
    let mut lines = Vec::new();
    for (i, set) in results.iter().enumerate() {
        if i > 0 {
            lines.push(Line::plain(String::new()));
        }
        lines.extend(table(set));
    }
    panel(&lines, title)
}

/// A rendered line plus its width on screen, which ANSI styling doesn't change.
struct Line {
    text: String,
    width: usize,
}

impl Line {
    fn plain(text: String) -> Self {
        let width = text.width();
        Self { text, width }
    }
}

fn cells(result: &ClaimResult) -> [String; 7] {
    [
        result.uid.clone(),
        result.name.clone(),
        result.level.clone(),
        result.server.clone(),
        result.day.clone(),
        result.status.glyph().to_string(),
        result.reward.clone(),
    ]
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let gap = width.saturating_sub(text.width());
    match align {
        Align::Center => {
            let left = gap / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(gap - left))
        }
        Align::Right => format!("{}{text}", " ".repeat(gap)),
    }
}

fn border(widths: &[usize; 7], left: &str, joint: &str, right: &str) -> Line {
    let inner: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    Line::plain(format!("{left}{}{right}", inner.join(joint)))
}

fn table(set: &GameResultSet) -> Vec<Line> {
    let header = HEADERS.map(str::to_string);
    let rows: Vec<[String; 7]> = set.rewards.iter().map(cells).collect();

    let mut widths = header.clone().map(|h| h.width());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.width());
        }
    }

    let total = widths.iter().sum::<usize>() + 3 * widths.len() + 1;
    let render_row = |cells: &[String; 7], header: bool| {
        let styled: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let padded = pad(cell, widths[col], ALIGN[col]);
                match (header, col) {
                    (true, _) => padded.bold().to_string(),
                    (false, 0) => padded.dimmed().to_string(),
                    (false, 6) => padded.green().to_string(),
                    _ => padded,
                }
            })
            .collect();
        Line {
            text: format!("│ {} │", styled.join(" │ ")),
            width: total,
        }
    };

    let title = format!("🎮{}", set.game);
    let mut lines = vec![Line {
        text: pad(&title, total, Align::Center).bold().to_string(),
        width: total.max(title.width()),
    }];
    lines.push(border(&widths, "┌", "┬", "┐"));
    lines.push(render_row(&header, true));
    lines.push(border(&widths, "├", "┼", "┤"));
    for cells in &rows {
        lines.push(render_row(cells, false));
    }
    lines.push(border(&widths, "└", "┴", "┘"));
    lines
}

fn panel(lines: &[Line], title: &str) -> String {
    let title = format!(" {title} ");
    let inner = lines
        .iter()
        .map(|line| line.width)
        .max()
        .unwrap_or(0)
        .max(title.width() + 2);

    let fill = inner + 2 - title.width();
    let left = fill / 2;
    let mut out = vec![format!(
        "╭{}{title}{}╮",
        "─".repeat(left),
        "─".repeat(fill - left)
    )];
    for line in lines {
        out.push(format!(
            "│ {}{} │",
            line.text,
            " ".repeat(inner - line.width)
        ));
    }
    out.push(format!("╰{}╯", "─".repeat(inner + 2)));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reward::ClaimStatus;
    use chrono::{FixedOffset, TimeZone};
    use hoyolab::Game;

    fn results() -> Vec<GameResultSet> {
        let success = ClaimResult {
            uid: "812■■■■■8".into(),
            level: "60".into(),
            name: "Traveler".into(),
            server: "Asia".into(),
            status: ClaimStatus::Success,
            day: "3".into(),
            reward: "Primogem x60".into(),
            succeeded: true,
        };
        vec![GameResultSet {
            game: Game::Genshin,
            rewards: vec![success, ClaimResult::failed()],
        }]
    }

    #[test]
    fn renders_one_row_per_account() {
        let rendered = render(&results(), "2026-10-18 09:00:00 AM");

        assert!(rendered.contains("2026-10-18 09:00:00 AM"));
        assert!(rendered.contains("🎮GENSHIN"));
        assert!(rendered.contains("812■■■■■8"));
        assert!(rendered.contains("Primogem x60"));
        assert!(rendered.contains("✅"));
        assert!(rendered.contains("❌"));
        assert!(!rendered.contains("812345678"));
    }

    #[test]
    fn panel_rows_share_one_width() {
        let rendered = render(&results(), "title");
        let widths: Vec<usize> = rendered
            .lines()
            .map(|line| strip_ansi(line).width())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
    }

    #[test]
    fn timestamp_uses_twelve_hour_clock() {
        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        let now = offset.with_ymd_and_hms(2026, 10, 18, 21, 5, 7).unwrap();
        assert_eq!(timestamp(&now), "2026-10-18 09:05:07 PM");
    }

    fn strip_ansi(line: &str) -> String {
        let mut out = String::new();
        let mut chars = line.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }
}

//! Result rendering for the terminal.

use owo_colors::OwoColorize;
use rust_decimal::Decimal;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::search::TradePath;

#[derive(Tabled)]
struct PathRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Legs")]
    legs: usize,
    #[tabled(rename = "Route")]
    route: String,
    #[tabled(rename = "Net profit")]
    profit: String,
}

/// Print the top ranked paths as a summary table, then the best path leg
/// by leg.
pub fn print_paths(paths: &[TradePath], top: usize) {
    if paths.is_empty() {
        println!("No profitable routes found.");
        return;
    }

    let shown = &paths[..top.min(paths.len())];

    let rows: Vec<PathRow> = shown
        .iter()
        .enumerate()
        .map(|(index, path)| PathRow {
            rank: index + 1,
            legs: path.legs().len(),
            route: route_summary(path),
            profit: colored_profit(path.net_profit()),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    if let Some(best) = shown.first() {
        println!();
        println!("Best route:");
        println!("{best}");
    }
}

/// Emit the top ranked paths as JSON for scripting.
pub fn print_json(paths: &[TradePath], top: usize) -> serde_json::Result<()> {
    let shown = &paths[..top.min(paths.len())];
    println!("{}", serde_json::to_string_pretty(shown)?);

    Ok(())
}

/// Short chain of post names: `Olisar -> Grim HEX -> Levski`.
fn route_summary(path: &TradePath) -> String {
    let mut stops: Vec<&str> = path.legs().iter().map(|leg| terminal(&leg.origin)).collect();
    if let Some(last) = path.legs().last() {
        stops.push(terminal(&last.destination));
    }

    stops.join(" -> ")
}

fn terminal(key: &str) -> &str {
    key.rsplit(" > ").next().unwrap_or(key)
}

fn colored_profit(profit: Decimal) -> String {
    let rendered = format!("{profit} cr");

    if profit > Decimal::ZERO {
        rendered.green().to_string()
    } else {
        rendered.red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_takes_last_path_segment() {
        assert_eq!(terminal("Stanton > Crusader > Port Olisar"), "Port Olisar");
        assert_eq!(terminal("Levski"), "Levski");
    }
}

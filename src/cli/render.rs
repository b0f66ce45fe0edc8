use crate::Chips;
use crate::history::Record;
use crate::roster::Roster;
use crate::settlement::Bet;
use colored::ColoredString;
use colored::Colorize;

/// Signed amount in k, green for gains and red for losses.
pub fn amount(chips: Chips) -> ColoredString {
    let text = format!("{:+}k", chips);
    match chips.signum() {
        1 => text.green(),
        -1 => text.red(),
        _ => text.normal(),
    }
}

pub fn roster(roster: &Roster, bet: Bet) -> String {
    let mut out = format!("{} {}\n", "bet unit".bold(), bet);
    if roster.is_empty() {
        out.push_str("  no players seated\n");
    }
    for (i, player) in roster.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {:<16}{:>10}\n",
            i + 1,
            player.name(),
            amount(player.balance())
        ));
    }
    if let Err(e) = roster.validate() {
        out.push_str(&format!("{}\n", e.to_string().yellow()));
    }
    out
}

pub fn record(record: &Record) -> String {
    let mut out = format!("{}  {}\n", record.kind().to_string().bold(), record.time().dimmed());
    for detail in record.details() {
        out.push_str(&format!(
            "    {:<28}{:>10}\n",
            format!("{} ({})", detail.name(), detail.note()),
            amount(detail.amount())
        ));
    }
    out
}

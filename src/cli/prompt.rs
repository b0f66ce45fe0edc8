use crate::Leaves;
use crate::MAX_LEAVES;
use crate::MIN_LEAVES;
use crate::id::ID;
use crate::id::Unique;
use crate::roster::Player;
use crate::roster::Roster;
use crate::settlement::Loser;
use crate::settlement::Outcome;
use dialoguer::Confirm;
use dialoguer::Input;
use dialoguer::Select;

/// Yes/no gate for destructive actions. Defaults to no.
pub fn confirm(prompt: &str) -> anyhow::Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

/// Index of the chosen label, or None if the prompt was dismissed.
pub fn choose(prompt: &str, labels: &[&str]) -> anyhow::Result<Option<usize>> {
    Ok(Select::new()
        .with_prompt(prompt)
        .items(labels)
        .default(0)
        .interact_opt()?)
}

/// A seated player other than those in `exclude`.
pub fn player(
    prompt: &str,
    roster: &Roster,
    exclude: &[ID<Player>],
) -> anyhow::Result<Option<ID<Player>>> {
    let choices = roster
        .iter()
        .filter(|p| !exclude.contains(&p.id()))
        .collect::<Vec<&Player>>();
    if choices.is_empty() {
        anyhow::bail!("no players to choose from");
    }
    let labels = choices.iter().map(|p| p.name()).collect::<Vec<&str>>();
    Ok(choose(prompt, &labels)?.map(|i| choices[i].id()))
}

/// How a loser finished: a leaf count, or `c` for Cóng.
pub fn loser(player: &Player) -> anyhow::Result<Loser> {
    let raw = Input::<String>::new()
        .with_prompt(format!(
            "{}: leaves left ({}-{}) or c for Cóng",
            player.name(),
            MIN_LEAVES,
            MAX_LEAVES
        ))
        .validate_with(|i: &String| -> Result<(), String> { parse_loser(i).map(|_| ()) })
        .report(false)
        .interact_text()?;
    let (congealed, leaves) = parse_loser(&raw).map_err(anyhow::Error::msg)?;
    Ok(Loser::new(player.id(), congealed, leaves))
}

/// `c`/`cong`/`cóng` for congealed, otherwise a leaf count in range.
pub fn parse_loser(input: &str) -> Result<(bool, Leaves), String> {
    let input = input.trim().to_lowercase();
    if matches!(input.as_str(), "c" | "cong" | "cóng") {
        return Ok((true, 0));
    }
    let leaves = input
        .parse::<Leaves>()
        .map_err(|_| format!("Enter {}-{} leaves, or c for Cóng", MIN_LEAVES, MAX_LEAVES))?;
    if !(MIN_LEAVES..=MAX_LEAVES).contains(&leaves) {
        return Err(format!(
            "At most {} leaves ({}-{}); Cóng counts as 15",
            MAX_LEAVES, MIN_LEAVES, MAX_LEAVES
        ));
    }
    Ok((false, leaves))
}

/// Walks through a normal round: the winner, then every other seat.
pub fn normal(roster: &Roster) -> anyhow::Result<Option<Outcome>> {
    let Some(winner) = player("Who went out first (Về Nhất)?", roster, &[])? else {
        return Ok(None);
    };
    let losers = roster
        .iter()
        .filter(|p| p.id() != winner)
        .map(loser)
        .collect::<anyhow::Result<Vec<Loser>>>()?;
    Ok(Some(Outcome::Normal { winner, losers }))
}

/// Walks through a Báo Sâm: the reporter, the result, and who caught it.
pub fn declare(roster: &Roster) -> anyhow::Result<Option<Outcome>> {
    let Some(reporter) = player("Who declared (Báo Sâm)?", roster, &[])? else {
        return Ok(None);
    };
    let Some(result) = choose("Result", &["Thành công (made it)", "Thất bại (failed)"])? else {
        return Ok(None);
    };
    let success = result == 0;
    let blocker = match success {
        true => None,
        false => {
            let others = roster
                .iter()
                .filter(|p| p.id() != reporter)
                .collect::<Vec<&Player>>();
            let labels = std::iter::once("Nobody (Làng ăn, split)")
                .chain(others.iter().map(|p| p.name()))
                .collect::<Vec<&str>>();
            match choose("Who caught it (Bắt Sâm)?", &labels)? {
                None => return Ok(None),
                Some(0) => None,
                Some(i) => Some(others[i - 1].id()),
            }
        }
    };
    Ok(Some(Outcome::Declare {
        reporter,
        success,
        blocker,
    }))
}

/// Walks through a Chặt Heo: the chopper, then the victim.
pub fn slam(roster: &Roster) -> anyhow::Result<Option<Outcome>> {
    let Some(chopper) = player("Who chopped (Người Chặt)?", roster, &[])? else {
        return Ok(None);
    };
    let Some(victim) = player("Who was chopped (Bị Chặt)?", roster, &[chopper])? else {
        return Ok(None);
    };
    Ok(Some(Outcome::Slam { chopper, victim }))
}

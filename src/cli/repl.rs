use super::*;
use crate::Config;
use crate::Session;
use crate::error::ValidationError;
use crate::id::ID;
use crate::roster::Player;
use crate::save::Directory;
use crate::save::Store;
use crate::settlement::Bet;
use crate::settlement::Kind;
use crate::settlement::Outcome;
use colored::Colorize;
use std::io::Write;

/// Interactive scorekeeper bound to a session and the store it saves to.
pub struct CLI<S: Store> {
    session: Session,
    store: S,
}

impl CLI<Directory> {
    /// Opens the session saved under the configured home directory.
    pub fn new(config: &Config) -> Self {
        let store = Directory::new(config.home());
        let session = Session::load(&store);
        Self::with(session, store)
    }
}

impl<S: Store> CLI<S> {
    pub fn with(session: Session, store: S) -> Self {
        Self { session, store }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        log::info!("launching scorekeeper");
        print!("{}", render::roster(self.session.roster(), self.session.bet()));
        loop {
            print!("> ");
            std::io::stdout().flush()?;
            let ref mut input = String::new();
            if std::io::stdin().read_line(input)? == 0 {
                break;
            }
            match input.trim() {
                "" => continue,
                "quit" => break,
                "exit" => break,
                line => match self.handle(line) {
                    Err(e) => eprintln!("{}", e.to_string().red()),
                    Ok(_) => continue,
                },
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, line: &str) -> anyhow::Result<()> {
        match Command::parse_line(line)? {
            Command::Players => Ok(print!(
                "{}",
                render::roster(self.session.roster(), self.session.bet())
            )),
            Command::Add { name } => {
                let id = self.session.add(&name.join(" "))?;
                self.commit();
                Ok(println!("seated {}", self.name(id)))
            }
            Command::Remove { player } => {
                let id = self.resolve(&player)?;
                self.session.roster().player(id)?;
                if self.session.roster().len() <= crate::MIN_PLAYERS {
                    anyhow::bail!(ValidationError::RosterTooSmall {
                        min: crate::MIN_PLAYERS
                    });
                }
                let question = format!("Remove {}? Their history lines stay.", self.name(id));
                if prompt::confirm(&question)? {
                    let player = self.session.remove(id)?;
                    self.commit();
                    println!("unseated {}", player.name());
                }
                Ok(())
            }
            Command::Bet { amount: None } => Ok(println!("bet unit {}", self.session.bet())),
            Command::Bet {
                amount: Some(amount),
            } => {
                self.session.set_bet(Bet::try_from(amount)?);
                self.commit();
                Ok(println!(
                    "bet unit {} (Chặt Heo now {}k)",
                    self.session.bet(),
                    self.session.bet().scale(crate::SLAM_BASE)?
                ))
            }
            Command::Round => {
                self.session.roster().validate()?;
                let labels = [Kind::Normal.label(), "Báo Sâm", Kind::Slam.label()];
                match prompt::choose("Kind of round", &labels)? {
                    Some(0) => self.interactive(prompt::normal),
                    Some(1) => self.interactive(prompt::declare),
                    Some(_) => self.interactive(prompt::slam),
                    None => Ok(()),
                }
            }
            Command::Normal => self.interactive(prompt::normal),
            Command::Declare => self.interactive(prompt::declare),
            Command::Slam {
                chopper: Some(chopper),
                victim: Some(victim),
            } => {
                let chopper = self.resolve(&chopper)?;
                let victim = self.resolve(&victim)?;
                self.record(Outcome::Slam { chopper, victim })
            }
            Command::Slam { .. } => self.interactive(prompt::slam),
            Command::History { count } => {
                if self.session.history().is_empty() {
                    println!("no rounds yet");
                }
                for record in self.session.history().iter().take(count) {
                    print!("{}", render::record(record));
                }
                Ok(())
            }
            Command::Reset => {
                if prompt::confirm("Clear every balance and the whole history?")? {
                    self.session.reset();
                    self.commit();
                    println!("all balances zeroed");
                }
                Ok(())
            }
        }
    }

    /// Runs an input flow against the current table, then records its
    /// outcome unless the user backed out.
    fn interactive<F>(&mut self, flow: F) -> anyhow::Result<()>
    where
        F: FnOnce(&crate::roster::Roster) -> anyhow::Result<Option<Outcome>>,
    {
        self.session.roster().validate()?;
        match flow(self.session.roster())? {
            Some(outcome) => self.record(outcome),
            None => Ok(()),
        }
    }

    fn record(&mut self, outcome: Outcome) -> anyhow::Result<()> {
        let record = self.session.settle(&outcome)?;
        self.commit();
        print!("{}", render::record(&record));
        Ok(())
    }

    fn resolve(&self, query: &str) -> anyhow::Result<ID<Player>> {
        self.session
            .roster()
            .find(query)
            .ok_or_else(|| anyhow::anyhow!("no player matches '{}'", query))
    }

    fn name(&self, id: ID<Player>) -> &str {
        self.session.roster().name(id).unwrap_or("?")
    }

    fn commit(&mut self) {
        self.session.save(&mut self.store);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::Memory;

    fn cli(names: &[&str]) -> CLI<Memory> {
        let mut cli = CLI::with(Session::default(), Memory::default());
        for name in names {
            cli.handle(&format!("add {}", name)).unwrap();
        }
        cli
    }

    fn balances(cli: &CLI<Memory>) -> Vec<crate::Chips> {
        cli.session().roster().iter().map(Player::balance).collect()
    }

    #[test]
    fn commands_persist() {
        let mut cli = cli(&["Lan Anh", "Minh"]);
        cli.handle("bet 3").unwrap();
        cli.handle("slam 2 1").unwrap();
        assert_eq!(balances(&cli), vec![-60, 60]);
        let stored = Session::load(&cli.store);
        assert_eq!(&stored, cli.session());
        assert_eq!(stored.bet().get(), 3);
    }

    #[test]
    fn errors_leave_session_alone() {
        let mut cli = cli(&["Lan", "Minh"]);
        let before = cli.session().clone();
        assert!(cli.handle("bet 0").is_err());
        assert!(cli.handle("slam Lan Lan").is_err());
        assert!(cli.handle("slam Lan Tuấn").is_err());
        assert!(cli.handle("remove Lan").is_err());
        assert!(cli.handle("add   ").is_err());
        assert_eq!(cli.session(), &before);
    }

    #[test]
    fn sixth_player_is_turned_away() {
        let mut cli = cli(&["A", "B", "C", "D", "E"]);
        assert!(cli.handle("add F").is_err());
        assert_eq!(cli.session().roster().len(), 5);
    }

    #[test]
    fn rounds_need_a_full_table() {
        let mut cli = cli(&["A"]);
        assert!(cli.handle("round").is_err());
        assert!(cli.handle("normal").is_err());
        assert!(cli.handle("slam").is_err());
    }
}

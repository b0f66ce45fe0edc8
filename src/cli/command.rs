use crate::Chips;
use clap::Parser;

/// One line typed at the `> ` prompt.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub enum Command {
    #[command(about = "List players, balances and the bet unit", alias = "ls")]
    Players,
    #[command(about = "Seat a new player")]
    Add {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    #[command(about = "Unseat a player (by name or seat number)", alias = "rm")]
    Remove {
        #[arg(required = true)]
        player: String,
    },
    #[command(about = "Show or change the bet unit")]
    Bet {
        #[arg(allow_negative_numbers = true)]
        amount: Option<Chips>,
    },
    #[command(about = "Record a round, choosing the kind interactively", alias = "new")]
    Round,
    #[command(about = "Record a normal round (Ván Thường)", alias = "win")]
    Normal,
    #[command(about = "Record a declaration (Báo Sâm)", alias = "sam")]
    Declare,
    #[command(about = "Record a pig chop (Chặt Heo)", alias = "chat")]
    Slam {
        chopper: Option<String>,
        victim: Option<String>,
    },
    #[command(about = "Show the most recent rounds", alias = "log")]
    History {
        #[arg(default_value_t = 10)]
        count: usize,
    },
    #[command(about = "Zero every balance and clear the history")]
    Reset,
}

impl Command {
    /// Parses a prompt line the way a shell would split it.
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(std::iter::once("> ").chain(line.split_whitespace()))
    }
}

use samloc::Session;
use samloc::roster::Player;
use samloc::save::BET_KEY;
use samloc::save::Directory;
use samloc::save::HISTORY_KEY;
use samloc::save::PLAYERS_KEY;
use samloc::save::Store;
use samloc::settlement::Bet;
use samloc::settlement::Kind;
use samloc::settlement::Loser;
use samloc::settlement::Outcome;

fn evening() -> Session {
    let mut session = Session::default();
    let lan = session.add("Lan").unwrap();
    let minh = session.add("Minh").unwrap();
    let tuan = session.add("Tuấn").unwrap();
    session.set_bet(Bet::try_from(2).unwrap());
    session
        .settle(&Outcome::Normal {
            winner: lan,
            losers: vec![Loser::holding(minh, 4), Loser::congealed(tuan)],
        })
        .unwrap();
    session
        .settle(&Outcome::Declare {
            reporter: minh,
            success: false,
            blocker: None,
        })
        .unwrap();
    session
}

#[test]
fn directory_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let ref mut store = Directory::new(dir.path());
    let session = evening();
    session.save(store);
    assert!(store.path(PLAYERS_KEY).exists());
    assert!(store.path(HISTORY_KEY).exists());
    assert_eq!(store.get(BET_KEY).unwrap().as_deref(), Some("2"));
    let restored = Session::load(store);
    assert_eq!(restored, session);
    let balances = restored.roster().iter().map(Player::balance).collect::<Vec<_>>();
    assert_eq!(balances, vec![8 + 30 + 40, -8 - 80, -30 + 40]);
    assert_eq!(restored.history().latest().unwrap().kind(), Kind::Forfeit);
}

#[test]
fn missing_directory_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = Directory::new(dir.path().join("nowhere"));
    assert_eq!(Session::load(&store), Session::default());
}

#[test]
fn corrupt_files_fall_back_per_key() {
    let dir = tempfile::tempdir().unwrap();
    let ref mut store = Directory::new(dir.path());
    let session = evening();
    session.save(store);
    std::fs::write(store.path(PLAYERS_KEY), "[{\"id\": 7}]").unwrap();
    std::fs::write(store.path(BET_KEY), "lots").unwrap();
    let restored = Session::load(store);
    assert!(restored.roster().is_empty());
    assert_eq!(restored.history(), session.history());
    assert_eq!(restored.bet(), Bet::default());
}

#[test]
fn stored_history_matches_expected_shape() {
    let dir = tempfile::tempdir().unwrap();
    let ref mut store = Directory::new(dir.path());
    evening().save(store);
    let raw = std::fs::read_to_string(store.path(HISTORY_KEY)).unwrap();
    let json = serde_json::from_str::<serde_json::Value>(&raw).unwrap();
    assert_eq!(json[0]["type"], "Đền Sâm");
    assert_eq!(json[0]["details"][0]["name"], "Minh");
    assert_eq!(json[0]["details"][0]["amount"], -80);
    assert_eq!(json[0]["details"][0]["note"], "Đền Sâm");
    assert_eq!(json[0]["details"][1]["note"], "Được chia tiền đền");
    assert_eq!(json[1]["type"], "Ván Thường");
    assert_eq!(json[1]["details"][2]["note"], "Về Nhất");
    assert!(json[0]["id"].is_i64());
}

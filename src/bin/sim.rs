use clap::Parser;
use serde_json::json;
use strategist::{
    init_logging, Field, GameStatus, InMemoryTransport, Referee, RefereeConfig, Session,
    StandardFleet, TurnController, DEFAULT_MAX_TURNS,
};

/// Play two strategists against each other through the local referee.
#[derive(Parser)]
struct Args {
    #[arg(long, default_value_t = 0)]
    seed_a: u64,
    #[arg(long, default_value_t = 1)]
    seed_b: u64,
    #[arg(long, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: u32,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let (server_a, client_a) = InMemoryTransport::pair();
    let (server_b, client_b) = InMemoryTransport::pair();

    let config = RefereeConfig {
        max_turns: args.max_turns,
        ..RefereeConfig::default()
    };
    let mut referee = Referee::new(config, Box::new(server_a), Box::new(server_b));

    let mut a = Session::new(
        TurnController::with_seed(Field::default(), StandardFleet::default(), args.seed_a),
        Box::new(client_a),
    );
    let mut b = Session::new(
        TurnController::with_seed(Field::default(), StandardFleet::default(), args.seed_b),
        Box::new(client_b),
    );

    let (statuses, res_a, res_b) = tokio::try_join!(referee.run(), a.run(), b.run())?;

    let winner = match statuses {
        [GameStatus::Won, _] => Some("player1"),
        [_, GameStatus::Won] => Some("player2"),
        _ => None,
    };
    let result = json!({
        "player1": {"status": format!("{:?}", res_a), "turns": a.controller().turn() - 1},
        "player2": {"status": format!("{:?}", res_b), "turns": b.controller().turn() - 1},
        "winner": winner,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

use clap::Parser;
use log::info;
use strategist::{init_logging, Field, Session, StandardFleet, TcpTransport, TurnController};

#[derive(Parser)]
#[command(author, version, about = "Automated player for the fleet battle server", long_about = None)]
struct Cli {
    /// Hostname of the server, e.g. localhost
    host: String,
    /// Port of the server, e.g. 2000
    port: u16,
    #[arg(long, default_value_t = 0, help = "Random seed of the player")]
    seed: u64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    info!("connecting to {}:{} with seed {}", cli.host, cli.port, cli.seed);
    let transport = TcpTransport::connect((cli.host.as_str(), cli.port)).await?;

    let controller = TurnController::with_seed(Field::default(), StandardFleet::default(), cli.seed);
    let mut session = Session::new(controller, Box::new(transport));
    let status = session.run().await?;
    info!("final result: {:?}", status);
    Ok(())
}

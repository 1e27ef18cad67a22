mod cli;
mod config;
mod gateways;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    cli::run()
}

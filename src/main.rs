use clap::Parser;

use shortener::config::{Cli, StaticConfig};
use shortener::runtime::modes::run_server;
use shortener::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match StaticConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    // 日志 guard 必须存活到进程结束
    let _log_guard = match init_logging(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    run_server(&config).await
}

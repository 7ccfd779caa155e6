use colored::Colorize;
use ipnet_acl::config::Config;
use ipnet_acl::server::get_server_information;
use ipnet_acl::{any_has_address, parse_network_list};
use std::error::Error;
use std::net::IpAddr;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();

    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("server-info") => {
            let config = Config::from_env()?;
            let info = get_server_information(&config).await?;
            println!(
                "{}/{}.{}",
                info.name, info.version_major, info.version_minor
            );
        }
        Some(networks) if args.len() >= 3 => {
            let networks = parse_network_list(networks)
                .map_err(|e| format!("Invalid network list: {e}"))?;

            for arg in &args[2..] {
                let addr: IpAddr = arg
                    .parse()
                    .map_err(|e| format!("Invalid address {arg:?}: {e}"))?;
                let verdict = if any_has_address(&networks, addr) {
                    "allowed".green()
                } else {
                    "denied".red()
                };
                println!("{addr} {verdict}");
            }
        }
        _ => {
            eprintln!("Usage: ipnet-acl <network,...> <address> [address...]");
            eprintln!("       ipnet-acl server-info");
            std::process::exit(2);
        }
    }

    Ok(())
}

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fixerio::{Fixerio, HistoricalDate, Query};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
pub struct Cli {
	access_key: String,
	/// Use the HTTPS endpoint.
	#[clap(long)]
	secure: bool,
	#[clap(subcommand)]
	command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
	Latest {
		#[clap(long)]
		base: Option<String>,
		symbols: Vec<String>,
	},
	Historical {
		date: NaiveDate,
		#[clap(long)]
		base: Option<String>,
		symbols: Vec<String>,
	},
}

fn query(base: Option<String>, symbols: Vec<String>) -> Query {
	let query = Query::new().symbols(symbols);
	match base {
		Some(base) => query.base(base),
		None => query,
	}
}

fn main() {
	tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
	let cli = Cli::parse();
	let client = Fixerio::builder(cli.access_key).secure(cli.secure).build();

	let response = match cli.command {
		CliCommand::Latest { base, symbols } => client.latest(query(base, symbols)),
		CliCommand::Historical { date, base, symbols } => {
			client.historical_rates(HistoricalDate::from(date), query(base, symbols))
		}
	};
	match response {
		Ok(body) => println!("{}", serde_json::to_string_pretty(&body).unwrap()),
		Err(error) => {
			eprintln!("{error}");
			std::process::exit(1);
		}
	}
}

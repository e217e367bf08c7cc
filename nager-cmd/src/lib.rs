//! Command implementations for the Nager.Date CLI.
//!
//! Provides subcommands for listing countries, inspecting country detail,
//! and querying public holidays and long weekends.

use clap::Subcommand;

pub mod query;

#[derive(Subcommand)]
pub enum Command {
    /// List every country the service has holiday data for
    Countries,

    /// Show full country detail: official name, region, borders
    Info {
        /// ISO 3166-1 alpha-2 country code, e.g. "US"
        #[arg(short, long)]
        country: String,
    },

    /// List public holidays for a year and country
    Holidays {
        /// ISO 3166-1 alpha-2 country code
        #[arg(short, long)]
        country: String,

        /// Year to query (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// List long weekends for a year and country
    LongWeekends {
        /// ISO 3166-1 alpha-2 country code
        #[arg(short, long)]
        country: String,

        /// Year to query (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Check whether today is a public holiday
    Today {
        /// ISO 3166-1 alpha-2 country code
        #[arg(short, long)]
        country: String,

        /// UTC offset in hours deciding what "today" means
        #[arg(long, allow_negative_numbers = true)]
        offset: Option<i32>,
    },

    /// List upcoming public holidays for a country (next 365 days)
    Next {
        /// ISO 3166-1 alpha-2 country code
        #[arg(short, long)]
        country: String,
    },

    /// List upcoming public holidays worldwide (next 7 days)
    NextWorldwide,

    /// Show the service name and version
    Version,
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Countries => query::run_countries().await,
        Command::Info { country } => query::run_info(&country).await,
        Command::Holidays { country, year } => query::run_holidays(&country, year).await,
        Command::LongWeekends { country, year } => query::run_long_weekends(&country, year).await,
        Command::Today { country, offset } => query::run_today(&country, offset).await,
        Command::Next { country } => query::run_next(&country).await,
        Command::NextWorldwide => query::run_next_worldwide().await,
        Command::Version => query::run_version().await,
    }
}

//! Query implementations for the Nager.Date CLI.

use chrono::{Datelike, Local};
use log::info;
use nager_api::NagerClient;

fn year_or_current(year: Option<i32>) -> i32 {
    year.unwrap_or_else(|| Local::now().year())
}

/// List every available country as "CODE  Name".
pub async fn run_countries() -> anyhow::Result<()> {
    let nager = NagerClient::connect(None).await?;
    let countries = nager.available_countries().await?;
    info!("{} countries available", countries.len());
    for country in &countries {
        println!("{}  {}", country.code(), country.name());
    }
    Ok(())
}

/// Show full detail for one country.
pub async fn run_info(country: &str) -> anyhow::Result<()> {
    let nager = NagerClient::connect(None).await?;
    let country = nager.resolve(country).await?;
    let details = country.details().await?;

    println!("{} ({})", country.name(), country.code());
    println!("  official name: {}", details.official_name());
    println!("  region:        {}", details.region());
    let borders = details.borders();
    if borders.is_empty() {
        println!("  borders:       none");
    } else {
        let names: Vec<&str> = borders.iter().map(|b| b.name()).collect();
        println!("  borders:       {}", names.join(", "));
    }
    Ok(())
}

/// List public holidays for a year and country.
pub async fn run_holidays(country: &str, year: Option<i32>) -> anyhow::Result<()> {
    let year = year_or_current(year);
    let nager = NagerClient::connect(None).await?;
    let holidays = nager.public_holidays(year, country).await?;
    info!("{} holidays in {} for {}", holidays.len(), year, country);
    for holiday in &holidays {
        println!("{}", holiday);
    }
    Ok(())
}

/// List long weekends for a year and country.
pub async fn run_long_weekends(country: &str, year: Option<i32>) -> anyhow::Result<()> {
    let year = year_or_current(year);
    let nager = NagerClient::connect(None).await?;
    let weekends = nager.long_weekends(year, country).await?;
    info!("{} long weekends in {} for {}", weekends.len(), year, country);
    for weekend in &weekends {
        let bridge = if weekend.need_bridge_day() {
            ", bridge day needed"
        } else {
            ""
        };
        println!("{} ({} days{})", weekend, weekend.day_count(), bridge);
    }
    Ok(())
}

/// Say whether today is a public holiday in the given country.
pub async fn run_today(country: &str, offset: Option<i32>) -> anyhow::Result<()> {
    let nager = NagerClient::connect(None).await?;
    let country = nager.resolve_summary(country).await?;
    if country.is_today_public_holiday(offset).await? {
        println!("Today is a public holiday in {}", country.name());
    } else {
        println!("Today is not a public holiday in {}", country.name());
    }
    Ok(())
}

/// List upcoming public holidays for a country.
pub async fn run_next(country: &str) -> anyhow::Result<()> {
    let nager = NagerClient::connect(None).await?;
    let country = nager.resolve_summary(country).await?;
    let holidays = country.next_public_holidays().await?;
    info!("{} upcoming holidays for {}", holidays.len(), country.name());
    for holiday in &holidays {
        println!("{}", holiday);
    }
    Ok(())
}

/// List upcoming public holidays worldwide.
pub async fn run_next_worldwide() -> anyhow::Result<()> {
    let nager = NagerClient::connect(None).await?;
    let holidays = nager.next_public_holidays_worldwide().await?;
    info!("{} upcoming holidays worldwide", holidays.len());
    for holiday in &holidays {
        println!("{}  {}", holiday.country_code(), holiday);
    }
    Ok(())
}

/// Show the service name and version.
pub async fn run_version() -> anyhow::Result<()> {
    let nager = NagerClient::connect(None).await?;
    println!("{} {}", nager.name(), nager.version());
    Ok(())
}

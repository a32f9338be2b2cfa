use anyhow::{Context, Result, ensure};
use std::net::SocketAddr;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_DAYS: u32 = 7;

pub(crate) fn server_addr_from_env() -> Result<SocketAddr> {
    parse_addr(std::env::var("SOLETRACK_ADDR").ok())
}

pub(crate) fn window_days_from_env() -> Result<u32> {
    parse_days(std::env::var("SOLETRACK_DAYS").ok())
}

fn parse_addr(text: Option<String>) -> Result<SocketAddr> {
    let addr_text = text.unwrap_or_else(|| DEFAULT_ADDR.to_string());
    addr_text
        .parse()
        .with_context(|| format!("invalid SOLETRACK_ADDR: {addr_text}"))
}

fn parse_days(text: Option<String>) -> Result<u32> {
    let Some(days_text) = text else {
        return Ok(DEFAULT_DAYS);
    };
    let days: u32 = days_text
        .parse()
        .with_context(|| format!("invalid SOLETRACK_DAYS: {days_text}"))?;
    ensure!(days > 0, "SOLETRACK_DAYS must be at least 1");
    Ok(days)
}

use super::Cli;
use crate::core::{AddressResolver, Prompt};
use crate::geocoding::{Geocoder, GoogleGeocoder};
use crate::storage::{ConfigRecord, ConfigStore};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::info;

pub fn run(args: Cli) -> Result<()> {
    let store = match args.config {
        Some(path) => ConfigStore::new(path),
        None => ConfigStore::open_default()?,
    };
    let geocoder = GoogleGeocoder::with_endpoint(args.geocode_url)?;

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout().lock());

    let record = bootstrap(&store, &geocoder, &mut prompt)?;
    report(prompt.output(), &record)
}

/// 首次运行时解析地址，然后加载配置
pub fn bootstrap<G, R, W>(
    store: &ConfigStore,
    geocoder: G,
    prompt: &mut Prompt<R, W>,
) -> Result<ConfigRecord>
where
    G: Geocoder,
    R: BufRead,
    W: Write,
{
    if !store.exists()? {
        info!("No configuration at {:?}, starting setup", store.path());
        AddressResolver::new(geocoder, &mut *prompt).setup(store)?;
    }

    let record = store.load()?;
    prompt.say(&format!("Configuration loaded from {}", store.path().display()))?;
    Ok(record)
}

/// 输出配置的四个字段
pub fn report<W: Write>(out: &mut W, record: &ConfigRecord) -> Result<()> {
    writeln!(out, "Api Key \t: {}", record.api_key)?;
    writeln!(out, "Address \t: {}", record.address)?;
    writeln!(out, "Lat \t\t: {:.6}", record.latitude)?;
    writeln!(out, "Lng \t\t: {:.6}", record.longitude)?;
    out.flush()?;
    Ok(())
}

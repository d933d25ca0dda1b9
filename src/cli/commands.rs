use anyhow::{bail, Context, Result};
use log::{info, warn};

use super::{AddRecordArgs, Cli, Commands, RecordCommands, ZoneCommands};
use crate::api::{
    models::DnsRecord,
    technitium::parse_ipv4,
    DnsApiClient, TechnitiumClient,
};

pub async fn run(cli: Cli) -> Result<()> {
    let settings = cli.connection_settings()?;
    info!("Connecting to {}:{}", settings.host, settings.port);

    let mut client = TechnitiumClient::new(&settings.host, settings.port, settings.credentials)?;
    execute(&mut client, &cli.command).await
}

/// Run `command` inside a session. The session is ended whether or not the
/// command succeeds.
pub async fn execute<C: DnsApiClient>(client: &mut C, command: &Commands) -> Result<()> {
    if let Commands::Record {
        action: RecordCommands::Add(args),
    } = command
    {
        parse_ipv4(&args.ip)?;
    }

    client
        .start_session()
        .await
        .context("Failed to start session")?;

    let outcome = dispatch(client, command).await;

    if let Err(e) = client.end_session().await {
        warn!("Failed to end session: {}", e);
    }

    outcome
}

async fn dispatch<C: DnsApiClient>(client: &C, command: &Commands) -> Result<()> {
    match command {
        Commands::Zone {
            action: ZoneCommands::List,
        } => {
            for zone in client.list_zones().await? {
                println!("{}\t{}", zone.name, zone.r#type);
            }
        }
        Commands::Record {
            action: RecordCommands::List { zone },
        } => {
            for record in client.list_records(zone).await? {
                println!("{}\t{}\t{}", record.name, record.r#type, record.ttl);
            }
        }
        Commands::Record {
            action: RecordCommands::Add(args),
        } => add_record(client, args).await?,
    }

    Ok(())
}

/// Add an A record after checking that the zone exists and that no record
/// with the same name is already present.
pub async fn add_record<C: DnsApiClient>(client: &C, args: &AddRecordArgs) -> Result<()> {
    let zones = client.list_zones().await?;
    if !zones.iter().any(|zone| zone.name == args.zone) {
        bail!("The zone '{}' could not be found.", args.zone);
    }

    let fqdn = DnsRecord::fqdn(&args.subdomain, &args.zone);
    let records = client.list_records(&args.zone).await?;
    if records.iter().any(|record| record.name == fqdn) {
        bail!("The record for '{}' already exists.", fqdn);
    }

    if args.dry_run {
        info!("Dry run: would add A record {} -> {}", fqdn, args.ip);
        return Ok(());
    }

    client
        .add_record(&args.zone, &args.subdomain, &args.ip)
        .await
        .with_context(|| format!("Failed to add record '{}'", fqdn))?;
    info!("Added A record {} -> {}", fqdn, args.ip);

    Ok(())
}

use anyhow::{bail, Context, Result};
use marine_indicators::{
    cli::{Cli, Commands, SourceArgs},
    config::HarmonizerConfig,
    harmonize::Harmonizer,
    logging::init_logging,
    model::UnifiedTable,
    schema::{describe, COUNTRY_TABLE, INDICATOR_LABELS},
    ui::LogUi,
    views::{indicator_options, IndicatorReport},
    writer::{export_to_json, export_to_sqlite},
};
use std::collections::BTreeMap;
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(&cli.log);

    match cli.command {
        Commands::Harmonize {
            sources,
            output_db,
            json,
        } => {
            let start = Instant::now();
            let mut ui = LogUi::new();
            let table = build_harmonizer(&sources)?.run(&mut ui)?;

            println!("Unified table: {} rows", table.len());
            for (source, count) in rows_per_source(&table) {
                println!("  {:<24} {}", source, count);
            }

            if let Some(db) = output_db {
                let written = export_to_sqlite(&table, &db, &mut ui)?;
                println!("Wrote {} observations to {:?}", written, db);
            }
            if let Some(path) = json {
                export_to_json(&table, &path)?;
                println!("Wrote JSON to {:?}", path);
            }

            println!("Done in {:.1}s", start.elapsed().as_secs_f64());
        }

        Commands::View { sources, indicator } => {
            let harmonizer = build_harmonizer(&sources)?;
            let table = harmonizer.run(&mut LogUi::new())?;
            let prefix = &harmonizer.config().indicator_prefix;
            let Some(report) = IndicatorReport::build(&table, &indicator, prefix) else {
                bail!(
                    "Unknown indicator '{}'. Available: {}",
                    indicator,
                    indicator_options(&table).join(", ")
                );
            };
            let json = serde_json::to_string_pretty(&report).context("Failed to render views")?;
            println!("{}", json);
        }

        Commands::Indicators => {
            println!("Indicators:\n");
            for &(code, label) in INDICATOR_LABELS {
                println!("  {:<46} {}\n  {:<46} {}", code, label, "", describe(code));
            }
        }

        Commands::Countries => {
            println!("Countries:\n");
            for country in COUNTRY_TABLE {
                println!(
                    "  {}  {:<34} {:>9.4} {:>10.4}",
                    country.code, country.name, country.latitude, country.longitude
                );
            }
        }
    }

    Ok(())
}

fn build_harmonizer(sources: &SourceArgs) -> Result<Harmonizer> {
    let config = HarmonizerConfig::load(sources.config.as_deref())?
        .with_lookup_policy(sources.lookup_policy);
    Ok(Harmonizer::new(config, &sources.data_dir))
}

fn rows_per_source(table: &UnifiedTable) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for row in table {
        *counts.entry(row.observation.data_source.as_str()).or_insert(0) += 1;
    }
    counts
}

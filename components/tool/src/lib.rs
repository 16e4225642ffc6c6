pub mod cli;

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use config::Configuration;
use filter::GapFilter;
use log::info;
use paging::{MemoryLookup, PageAssembler, PageRequest};

pub use crate::cli::Cli;
use crate::cli::{CheckArgs, Commands, FilterArgs, PageArgs};

pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Check(args) => check(args, out),
        Commands::Describe(args) => describe(args, out),
        Commands::Page(args) => page(args, out),
    }
}

fn build_filter(args: &FilterArgs) -> anyhow::Result<GapFilter> {
    let filter = GapFilter::build(&args.gaps, args.direction, args.near, args.far)?;
    Ok(filter)
}

fn check<W: Write>(args: &CheckArgs, out: &mut W) -> anyhow::Result<()> {
    let filter = build_filter(&args.filter)?;
    for seq_id in &args.seq_ids {
        let verdict = if filter.is_known_gap(*seq_id) {
            "gap"
        } else {
            "unknown"
        };
        writeln!(out, "{}\t{}", seq_id, verdict)?;
    }
    Ok(())
}

fn describe<W: Write>(args: &FilterArgs, out: &mut W) -> anyhow::Result<()> {
    let filter = build_filter(args)?;
    writeln!(
        out,
        "direction: {}, window: {}",
        filter.direction(),
        filter.window()
    )?;
    if filter.is_empty() {
        writeln!(out, "no gaps")?;
    }
    for gap in filter.gaps() {
        writeln!(out, "{}", gap)?;
    }
    Ok(())
}

fn page<W: Write>(args: &PageArgs, out: &mut W) -> anyhow::Result<()> {
    let configuration = match &args.config {
        Some(path) => Configuration::from_file(Path::new(path))?,
        None => {
            let mut configuration = Configuration::default();
            configuration.check_and_apply()?;
            configuration
        }
    };
    info!("Paging with {:?}", configuration.paging);

    let lookup: MemoryLookup = args.present.iter().copied().collect();
    let assembler = PageAssembler::new(Arc::new(configuration.paging), lookup);
    let request = PageRequest {
        gaps: args.filter.gaps.clone(),
        direction: args.filter.direction,
        cursor: args.filter.near,
        far: args.filter.far,
        page_size: args.page_size,
    };
    let page = assembler.assemble(&request)?;

    let seq_ids = page
        .seq_ids
        .iter()
        .map(|seq_id| seq_id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    writeln!(out, "seq ids: {}", seq_ids)?;
    writeln!(out, "skipped: {}", page.skipped)?;
    writeln!(out, "probed: {}", page.probed)?;
    match page.next_cursor {
        Some(cursor) => writeln!(out, "next cursor: {}", cursor)?,
        None => writeln!(out, "next cursor: -")?,
    }
    Ok(())
}

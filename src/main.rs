use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use strutils::cli::output::OutputFormat;
use strutils::{
    cli, patterns, permute_splits, sos_on, variate_compounds, variation_table, Case, Config,
    VariationError, VariationGroup, VariationTable,
};

#[derive(Parser, Debug)]
#[command(name = "strutils")]
#[command(version, about = "Generate variations of compound identifiers", long_about = None)]
struct Cli {
    /// Delimiter that separates components of the input
    #[arg(long, global = true, value_name = "DELIM")]
    split_at: Option<String>,

    /// Delimiter used to stitch output components together
    #[arg(long, global = true, value_name = "DELIM")]
    stitch_with: Option<String>,

    /// Transform applied to each component (capitalize, upper, lower, identity)
    #[arg(short, long, global = true)]
    using: Option<Case>,

    /// Emit at most this many variations per command
    #[arg(long, global = true)]
    limit: Option<usize>,

    /// Output format (text, json)
    #[arg(short = 'o', long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Config file to use instead of ./.strutils.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Split a compound, transform its components and stitch every combination
    Sos {
        compound: String,
    },
    /// Permute the components of one or more compounds
    Permute {
        #[arg(required = true)]
        strings: Vec<String>,
    },
    /// Transform and (optionally) permute compounds
    Variate {
        #[arg(required = true)]
        compounds: Vec<String>,

        /// Run the permutation stage even if a config file disables it
        #[arg(long, conflicts_with = "no_permute")]
        permute: bool,

        /// Skip the permutation stage
        #[arg(long)]
        no_permute: bool,
    },
    /// Build a table of variations across several stitch delimiters
    Table {
        #[arg(required = true)]
        compounds: Vec<String>,

        /// Stitch delimiter for one block of rows (repeatable)
        #[arg(long = "stitcher", value_name = "DELIM")]
        stitchers: Vec<String>,

        /// Run the permutation stage even if a config file disables it
        #[arg(long, conflicts_with = "no_permute")]
        permute: bool,

        /// Skip the permutation stage
        #[arg(long)]
        no_permute: bool,
    },
    /// Abbreviate a two-part compound
    Patterns {
        compound: String,
    },
}

impl Commands {
    /// `--permute` / `--no-permute` as an override of the configured default.
    fn permute_override(&self) -> Option<bool> {
        match self {
            Commands::Variate {
                permute, no_permute, ..
            }
            | Commands::Table {
                permute, no_permute, ..
            } => permute_flag(*permute, *no_permute),
            _ => None,
        }
    }
}

fn permute_flag(permute: bool, no_permute: bool) -> Option<bool> {
    match (permute, no_permute) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "strutils", &mut io::stdout());
        return Ok(());
    }

    cli::logging::init_logging(cli.verbose, !cli.no_color)?;

    let Some(command) = cli.command else {
        anyhow::bail!("No command specified. Use --help for usage information.");
    };

    let config = Config::load(
        cli.config.clone(),
        cli.split_at.clone(),
        cli.stitch_with.clone(),
        cli.using,
        command.permute_override(),
    )?;
    let colored = !cli.no_color;
    let limit = cli.limit.unwrap_or(usize::MAX);

    match run(command, &config, limit)? {
        Report::Groups(groups) => {
            cli::output::print_groups(&groups, colored, &cli.format)?;
            if let OutputFormat::Text = cli.format {
                let total = groups.iter().map(|g| g.variations.len()).sum();
                cli::output::print_summary(total, groups.len(), colored);
            }
        }
        Report::Table(table) => {
            cli::output::print_table(&table, colored, &cli.format)?;
        }
    }

    Ok(())
}

enum Report {
    Groups(Vec<VariationGroup>),
    Table(VariationTable),
}

fn run(command: Commands, config: &Config, limit: usize) -> Result<Report> {
    let split_at = config.split_at.as_str();
    let stitch_with = config.stitch_with.as_str();

    let groups = match command {
        Commands::Sos { compound } => {
            let variations = sos_on(compound.as_str(), config.transform, split_at, stitch_with);
            vec![collect_group(compound, variations, limit)?]
        }
        Commands::Permute { strings } => {
            let input = strings.join(", ");
            let variations = permute_splits(strings, stitch_with, split_at);
            vec![collect_group(input, variations, limit)?]
        }
        Commands::Variate { compounds, .. } => {
            let permutate = config.permutate;
            let mut groups = Vec::with_capacity(compounds.len());
            let mut remaining = limit;
            for compound in compounds {
                let variations = variate_compounds(
                    compound.as_str(),
                    config.transform,
                    permutate,
                    split_at,
                    stitch_with,
                );
                let group = collect_group(compound, variations, remaining)?;
                remaining = remaining.saturating_sub(group.variations.len());
                groups.push(group);
            }
            groups
        }
        Commands::Patterns { compound } => {
            let variations = patterns(compound.as_str(), split_at, stitch_with);
            vec![collect_group(compound, variations, limit)?]
        }
        Commands::Table {
            compounds,
            stitchers,
            ..
        } => {
            let stitchers = if stitchers.is_empty() {
                config.table_stitchers()
            } else {
                stitchers
            };
            let table = variation_table(
                &compounds,
                &stitchers,
                config.transform,
                config.permutate,
                split_at,
            )
            .context("Failed to build variation table")?;
            return Ok(Report::Table(table));
        }
    };

    Ok(Report::Groups(groups))
}

fn collect_group<I>(input: String, variations: I, limit: usize) -> Result<VariationGroup>
where
    I: Iterator<Item = Result<String, VariationError>>,
{
    let variations = variations
        .take(limit)
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to generate variations of '{}'", input))?;
    Ok(VariationGroup { input, variations })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permute_flag() {
        assert_eq!(permute_flag(false, false), None);
        assert_eq!(permute_flag(true, false), Some(true));
        assert_eq!(permute_flag(false, true), Some(false));
    }

    #[test]
    fn test_permute_flags_conflict() {
        let result = Cli::try_parse_from(["strutils", "variate", "a_b", "--permute", "--no-permute"]);
        assert!(result.is_err());
    }
}

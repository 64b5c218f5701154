use crate::utils::{AlnScoring, DistanceMetric, Result};
use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="alntrace",
          version=&**FULL_VERSION,
          about="Run-length encoding and indel refinement of pairwise alignment traces",
          long_about = None,
          disable_help_subcommand = true,
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Align sequence pairs and report normalized CIGARs")]
    Align(AlignArgs),
    #[clap(about = "Refine existing CIGARs against their sequences")]
    Refine(RefineArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("align")))]
#[command(arg_required_else_help(true))]
pub struct AlignArgs {
    #[clap(required = true)]
    #[clap(short = 's')]
    #[clap(long = "sequences")]
    #[clap(help = "Indexed FASTA with query and target sequences")]
    #[clap(value_name = "FASTA")]
    #[arg(value_parser = check_file_exists)]
    pub sequences_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'p')]
    #[clap(long = "pairs")]
    #[clap(help = "TSV file with 'query target' name pairs")]
    #[clap(value_name = "PAIRS")]
    #[arg(value_parser = check_file_exists)]
    pub pairs_path: PathBuf,

    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(help = "Output TSV path ('-' for stdout, '.gz' for compressed output)")]
    #[clap(value_name = "OUTPUT")]
    #[clap(default_value = "-")]
    #[arg(value_parser = check_prefix_path)]
    pub output_path: String,

    #[clap(short = 't')]
    #[clap(long = "threads")]
    #[clap(help = "Number of threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "1")]
    #[arg(value_parser = threads_in_range)]
    pub num_threads: usize,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "distance")]
    #[clap(value_name = "DISTANCE")]
    #[clap(help = "Distance metric of the aligner (indel, edit or affine)")]
    #[clap(default_value = "affine")]
    #[arg(value_parser = distance_from_string)]
    pub distance: DistanceMetric,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "aln-scoring")]
    #[clap(value_name = "SCORING")]
    #[clap(help = "Gap-affine penalties (non-negative values): MISM,GAPO,GAPE")]
    #[clap(default_value = "4,6,2")]
    #[arg(value_parser = scoring_from_string)]
    pub aln_scoring: AlnScoring,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "no-refine")]
    #[clap(help = "Report the aligner trace without collapsing adjacent indels")]
    pub no_refine: bool,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("refine")))]
#[command(arg_required_else_help(true))]
pub struct RefineArgs {
    #[clap(required = true)]
    #[clap(short = 's')]
    #[clap(long = "sequences")]
    #[clap(help = "Indexed FASTA with query and target sequences")]
    #[clap(value_name = "FASTA")]
    #[arg(value_parser = check_file_exists)]
    pub sequences_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'a')]
    #[clap(long = "alignments")]
    #[clap(help = "TSV file with 'query target cigar' alignments (extended CIGAR)")]
    #[clap(value_name = "ALIGNMENTS")]
    #[arg(value_parser = check_file_exists)]
    pub alignments_path: PathBuf,

    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(help = "Output TSV path ('-' for stdout, '.gz' for compressed output)")]
    #[clap(value_name = "OUTPUT")]
    #[clap(default_value = "-")]
    #[arg(value_parser = check_prefix_path)]
    pub output_path: String,

    #[clap(short = 't')]
    #[clap(long = "threads")]
    #[clap(help = "Number of threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "1")]
    #[arg(value_parser = threads_in_range)]
    pub num_threads: usize,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_prefix_path(s: &str) -> Result<String> {
    if s == "-" {
        return Ok(s.to_string());
    }
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(s.to_string())
}

fn threads_in_range(s: &str) -> Result<usize> {
    let thread: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid thread number", s))?;
    if thread >= 1 {
        Ok(thread)
    } else {
        Err("Number of threads must be at least 1".into())
    }
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn distance_from_string(s: &str) -> Result<DistanceMetric> {
    DistanceMetric::from_name(s).ok_or_else(|| {
        format!(
            "Unknown distance metric '{}'. Expected 'indel', 'edit' or 'affine'",
            s
        )
    })
}

fn scoring_from_string(s: &str) -> Result<AlnScoring> {
    const NUM_EXPECTED_VALUES: usize = 3;
    let values: Vec<i32> = s.split(',').filter_map(|x| x.parse().ok()).collect();
    if values.len() != NUM_EXPECTED_VALUES {
        return Err(format!(
            "Expected {} comma-separated values in scoring. Got {} -> {}",
            NUM_EXPECTED_VALUES,
            values.len(),
            s
        ));
    }

    if values.iter().any(|&val| val < 0) {
        return Err(format!(
            "Negative values are not allowed in scoring. Got {}.",
            s
        ));
    }

    Ok(AlnScoring {
        mism_scr: values[0],
        gapo_scr: values[1],
        gape_scr: values[2],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_from_string() {
        assert_eq!(
            scoring_from_string("4,6,2"),
            Ok(AlnScoring {
                mism_scr: 4,
                gapo_scr: 6,
                gape_scr: 2,
            })
        );
        assert_eq!(
            scoring_from_string("4,6"),
            Err("Expected 3 comma-separated values in scoring. Got 2 -> 4,6".to_string())
        );
        assert_eq!(
            scoring_from_string("4,-6,2"),
            Err("Negative values are not allowed in scoring. Got 4,-6,2.".to_string())
        );
    }

    #[test]
    fn test_threads_in_range() {
        assert_eq!(threads_in_range("8"), Ok(8));
        assert!(threads_in_range("0").is_err());
        assert!(threads_in_range("many").is_err());
    }

    #[test]
    fn test_distance_from_string() {
        assert_eq!(distance_from_string("edit"), Ok(DistanceMetric::Edit));
        assert!(distance_from_string("manhattan").is_err());
    }

    #[test]
    fn test_check_prefix_path_accepts_stdout() {
        assert_eq!(check_prefix_path("-"), Ok("-".to_string()));
        assert!(check_prefix_path("/nonexistent_dir_for_test/out.tsv").is_err());
    }

    #[test]
    fn test_parse_align_command() {
        let cli = Cli::try_parse_from([
            "alntrace",
            "-vv",
            "align",
            "--sequences",
            "Cargo.toml",
            "--pairs",
            "Cargo.toml",
            "--distance",
            "indel",
            "--no-refine",
        ])
        .unwrap();
        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Command::Align(args) => {
                assert_eq!(args.distance, DistanceMetric::Indel);
                assert!(args.no_refine);
                assert_eq!(args.output_path, "-");
                assert_eq!(args.num_threads, 1);
            }
            Command::Refine(_) => panic!("Expected align command"),
        }
    }
}

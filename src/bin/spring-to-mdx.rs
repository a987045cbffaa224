//! spring-to-mdx - Convert blog markdown to Mintlify-compatible MDX
//!
//! Usage:
//!   spring-to-mdx convert input.md -o output.mdx
//!   spring-to-mdx --input-dir ./posts --mapping topic-mapping.properties --output-dir blog/
//!   spring-to-mdx --validate blog/

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgGroup, CommandFactory, Parser as ClapParser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};

use spring_mdx::batch::{BatchConverter, BatchReport, TopicMapping};
use spring_mdx::mdx::MdxConverter;
use spring_mdx::options::Config;
use spring_mdx::validate::{run_link_checker, validate_dir, LinkCheck, ValidationSummary};

#[derive(ValueEnum, Clone, Debug)]
enum ReportFormat {
    /// JSON format
    Json,
    /// Human-readable text
    Text,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a single markdown file
    Convert {
        /// Input markdown file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output MDX file (writes to stdout if not specified)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },
}

#[derive(ClapParser)]
#[command(
    version,
    about = "Convert blog markdown to Mintlify-compatible MDX",
    long_about = "Converts markdown posts to MDX that a JSX-based renderer accepts, \
                  and validates existing MDX trees.\n\n\
                  - convert: convert one file (to stdout unless -o is given)\n\
                  - --input-dir/--mapping/--output-dir: convert a mapped tree, then validate it\n\
                  - --validate [DIR]: only validate (default: blog/)"
)]
#[command(group(
    ArgGroup::new("batch")
        .args(["input_dir", "mapping", "output_dir", "skip_validation"])
        .multiple(true)
        .conflicts_with("validate")
))]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Directory of markdown sources (batch mode)
    #[arg(long, value_name = "DIR")]
    input_dir: Option<PathBuf>,

    /// Topic mapping properties file (batch mode)
    #[arg(long, value_name = "FILE")]
    mapping: Option<PathBuf>,

    /// Directory to write MDX files to (batch mode)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Do not validate the output directory after a batch run
    #[arg(long)]
    skip_validation: bool,

    /// Validate MDX files in a directory
    #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = "blog/")]
    validate: Option<PathBuf>,

    /// Do not run the external link checker after validation
    #[arg(long)]
    no_link_check: bool,

    /// Config file (TOML)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Write a report of the batch or validation run
    #[arg(long, value_name = "REPORT_FILE")]
    report: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value = "json")]
    report_format: ReportFormat,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn init_logger(filter_level: log::LevelFilter) {
    if let Err(e) = simplelog::TermLogger::init(
        filter_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialize logger: {}", e);
    }
}

fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_logger(args.verbose.log_level_filter());

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<ExitCode> {
    let config = Config::load_or_default(args.config.as_deref())?;
    let mut link_checker = config.validate.link_checker.clone();
    if args.no_link_check {
        link_checker.clear();
    }

    if let Some(Command::Convert { input, output }) = &args.command {
        let converter = MdxConverter::new(config.convert)?;
        convert_single(&converter, input, output.as_deref())?;
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(dir) = &args.validate {
        let passed = validate(dir, &link_checker, &args)?;
        return Ok(exit_code(passed));
    }

    if args.input_dir.is_some() || args.mapping.is_some() || args.output_dir.is_some() {
        let (Some(input_dir), Some(mapping), Some(output_dir)) =
            (&args.input_dir, &args.mapping, &args.output_dir)
        else {
            eprintln!("Batch mode requires --input-dir, --mapping, and --output-dir");
            return Ok(ExitCode::FAILURE);
        };
        let converter = MdxConverter::new(config.convert)?;
        let passed = batch_convert(converter, input_dir, mapping, output_dir, &link_checker, &args)?;
        return Ok(exit_code(passed));
    }

    eprintln!("{}", Cli::command().render_help());
    Ok(ExitCode::FAILURE)
}

fn exit_code(passed: bool) -> ExitCode {
    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn convert_single(converter: &MdxConverter, input: &Path, output: Option<&Path>) -> Result<()> {
    let doc = converter.convert_file(input, None)?;
    let mdx = doc.render();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create {}", parent.display()))?;
                }
            }
            fs::write(path, &mdx).with_context(|| format!("failed to write {}", path.display()))?;
            println!("Converted: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            writer.write_all(mdx.as_bytes())?;
            writer.flush()?;
        }
    }

    Ok(())
}

fn batch_convert(
    converter: MdxConverter,
    input_dir: &Path,
    mapping_file: &Path,
    output_dir: &Path,
    link_checker: &[String],
    args: &Cli,
) -> Result<bool> {
    let start_time = Instant::now();
    let mapping = TopicMapping::load(mapping_file)?;
    let outcome = BatchConverter::new(converter, mapping).run(input_dir, output_dir)?;

    println!(
        "\nConverted: {} files, Warnings: {}",
        outcome.converted.len(),
        outcome.skipped.len()
    );

    let mut report = BatchReport::new(input_dir, output_dir, outcome);
    let mut passed = true;
    if !args.skip_validation {
        println!();
        print_validation_header(output_dir);
        let summary = validate_dir(output_dir)?;
        passed = finish_validation(&summary, link_checker);
        report.validation = Some(summary);
    }
    report.duration_ms = start_time.elapsed().as_millis() as u64;

    if let Some(report_path) = &args.report {
        let content = match args.report_format {
            ReportFormat::Json => report.to_json()?,
            ReportFormat::Text => report.to_text(),
        };
        write_report(report_path, &content)?;
    }

    Ok(passed)
}

fn validate(dir: &Path, link_checker: &[String], args: &Cli) -> Result<bool> {
    print_validation_header(dir);
    let summary = validate_dir(dir)?;
    let passed = finish_validation(&summary, link_checker);

    if let Some(report_path) = &args.report {
        let content = match args.report_format {
            ReportFormat::Json => summary.to_json()?,
            ReportFormat::Text => summary.to_text(),
        };
        write_report(report_path, &content)?;
    }

    Ok(passed)
}

fn print_validation_header(dir: &Path) {
    println!("Validating MDX files in {} ...\n", dir.display());
}

/// Print validation results and run the link checker if everything passed
fn finish_validation(summary: &ValidationSummary, link_checker: &[String]) -> bool {
    for file in summary.failures() {
        eprintln!("FAIL: {}", file.path.display());
        for issue in &file.issues {
            eprintln!("  {}", issue);
        }
    }

    println!(
        "\nValidated {} files, {} with issues.",
        summary.files_checked(),
        summary.files_with_issues()
    );

    if !summary.passed() {
        if !link_checker.is_empty() {
            println!(
                "\nRun `{}` for full renderer-level validation.",
                link_checker.join(" ")
            );
        }
        return false;
    }

    println!("All files passed static checks.");
    if link_checker.is_empty() {
        return true;
    }

    println!("\nRunning `{}` ...", link_checker.join(" "));
    let outcome = run_link_checker(link_checker);
    if let LinkCheck::Unavailable(reason) = &outcome {
        eprintln!("Could not run {}: {}", link_checker.join(" "), reason);
        eprintln!("Install with: npm i -g mintlify");
    }
    !outcome.is_failure()
}

fn write_report(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("✓ Report written to {}", path.display());
    Ok(())
}

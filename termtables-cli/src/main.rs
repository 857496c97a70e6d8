mod args;
mod error;

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use termtables::{defaults, max_columns, OutputMode, Table};

use args::Args;
use error::CliError;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("termtables: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    init_logging(args)?;
    configure_defaults(args);

    let input = open_input(args.input.as_deref())?;
    let records = read_records(input)?;
    log::info!("read {} records", records.len());

    let mut table = Table::new();
    fill_table(&mut table, args, records);

    let output = table.render();
    if table.mode() == OutputMode::Terminal {
        warn_if_too_wide(&output, max_columns());
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn init_logging(args: &Args) -> Result<(), CliError> {
    let level = args.log_level();

    match &args.log_file {
        Some(path) => {
            let log_file = File::create(path).map_err(|source| CliError::LogFile {
                path: path.display().to_string(),
                source,
            })?;
            WriteLogger::init(level.max(LevelFilter::Debug), Config::default(), log_file)?;
        }
        None => {
            TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
        }
    }
    Ok(())
}

/// Sets the process-wide defaults that [`Table::new`] picks up.
fn configure_defaults(args: &Args) {
    if args.utf8 {
        defaults::enable_utf8();
    } else if !args.ascii {
        defaults::enable_utf8_per_locale();
    }

    match OutputMode::from(args.mode) {
        OutputMode::Terminal => {}
        OutputMode::Markdown => defaults::set_mode_markdown(true),
        OutputMode::Html => defaults::set_mode_html(true),
    }
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            log::debug!("reading {}", path.display());
            Ok(Box::new(File::open(path)?))
        }
        _ => {
            log::debug!("reading stdin");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}

/// Every record of the input; records may differ in length.
fn read_records(input: impl Read) -> Result<Vec<csv::StringRecord>, CliError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

fn fill_table(table: &mut Table, args: &Args, records: Vec<csv::StringRecord>) {
    if let Some(title) = &args.title {
        table.add_title(title.as_str());
    }
    if args.skip_border {
        table.style_mut().skip_border = true;
    }

    let mut records = records.into_iter();
    if !args.no_headers {
        if let Some(headers) = records.next() {
            table.add_headers(headers.iter());
        }
    }

    for record in records {
        table.add_row(record.iter());
    }

    for column in &args.alignments {
        table.set_column_alignment(column.alignment, &[column.column]);
    }
}

fn warn_if_too_wide(output: &str, max: usize) -> bool {
    let widest = output
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let too_wide = widest > max;
    if too_wide {
        log::warn!("table is {widest} columns wide, terminal has {max}");
    }
    too_wide
}

#[cfg(test)]
mod tests {
    use super::*;
    use termtables::Defaults;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("termtables").chain(extra.iter().copied())).unwrap()
    }

    fn render(csv: &str, extra: &[&str]) -> String {
        let args = args(extra);
        let records = read_records(csv.as_bytes()).unwrap();
        let mut table = Table::with_defaults(&Defaults::new().mode(args.mode.into()));
        fill_table(&mut table, &args, records);
        table.render()
    }

    #[test]
    fn test_first_record_is_headers() {
        let output = render("Name,Value\nhey,you\nken,1234\n", &[]);
        assert_eq!(
            output,
            "+------+-------+\n\
             | Name | Value |\n\
             +------+-------+\n\
             | hey  | you   |\n\
             | ken  | 1234  |\n\
             +------+-------+\n"
        );
    }

    #[test]
    fn test_no_headers_with_title_and_alignment() {
        let output = render(
            "hey,you\nken,1234\n",
            &["--no-headers", "--title", "Example", "--align", "2=right"],
        );
        assert_eq!(
            output,
            "+------------+\n\
             |  Example   |\n\
             +-----+------+\n\
             | hey |  you |\n\
             | ken | 1234 |\n\
             +-----+------+\n"
        );
    }

    #[test]
    fn test_ragged_csv() {
        let output = render("a,b,c\nd\n", &["--no-headers", "--skip-border"]);
        assert_eq!(output, "| a | b | c |\n| d |   |   |\n");
    }

    #[test]
    fn test_markdown_mode() {
        let output = render("X,Y\na|b,c\n", &["--mode", "markdown"]);
        assert_eq!(output, "| X        | Y |\n|----------|---|\n| a&#x7c;b | c |\n");
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let err = read_records(&b"a,\xff\n"[..]).unwrap_err();
        assert!(matches!(err, CliError::Csv(_)));
    }

    #[test]
    fn test_warn_if_too_wide() {
        assert!(warn_if_too_wide("+--+\n|ab|\n", 3));
        assert!(!warn_if_too_wide("+--+\n|ab|\n", 4));
        assert!(!warn_if_too_wide("", 80));
    }
}

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use tabq::dataset::{self, Record};
use tabq::filter::{tag, FilterModel};
use tabq::options::{self, FilterOption};
use tabq::schema::FieldTypes;
use tabq::table::{self, Column};
use tabq::{source, values};

#[derive(Parser)]
#[command(name = "tabq", about = "Filter record tables with field/operator/value predicates")]
struct Cli {
    #[arg(long, env = "TABQ_DATA", help = "YAML file or directory of records (default: sample table)")]
    data: Option<PathBuf>,

    #[arg(long, env = "TABQ_SCHEMA", help = "YAML mapping of field to numeric, text or date")]
    schema: Option<PathBuf>,

    #[arg(
        short,
        long = "filter",
        value_name = "FIELD:OPERATOR:VALUE",
        help = "Filter to apply; repeat to combine with AND"
    )]
    filters: Vec<String>,

    #[arg(long, help = "Read additional filters from stdin, one per line")]
    stdin: bool,

    #[arg(long, help = "List unique values for a field")]
    values: Option<String>,

    #[arg(long, help = "Show count for each value (use with --values)")]
    count: bool,

    #[arg(long, help = "List the available filter options")]
    options: bool,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    #[arg(long, default_value = "name", help = "Field printed by --format keys")]
    key: String,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Yaml,
    Keys,
}

struct Session {
    records: Vec<Record>,
    types: FieldTypes,
    columns: Vec<Column>,
    options: Vec<FilterOption>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let session = match load_session(&cli) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    if cli.options {
        return run_options_mode(&session.options);
    }

    if let Some(field) = &cli.values {
        return run_values_mode(&session, field, cli.count);
    }

    run_query_mode(&cli, &session)
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_session(cli: &Cli) -> tabq::Result<Session> {
    let explicit = match &cli.schema {
        Some(path) => FieldTypes::load(path)?,
        None => FieldTypes::new(),
    };

    let Some(path) = &cli.data else {
        let types = dataset::sample_types().merge(explicit);
        return Ok(Session {
            records: dataset::sample_records(),
            types,
            columns: table::sample_columns(),
            options: options::sample_options(),
        });
    };

    let records = dataset::load(path)?;
    let types = FieldTypes::infer(&records).merge(explicit);
    tracing::info!(count = records.len(), path = %path.display(), "loaded records");

    Ok(Session {
        columns: table::columns_for(&records),
        options: options::options_for(&types),
        records,
        types,
    })
}

fn run_options_mode(options: &[FilterOption]) -> ExitCode {
    if options.is_empty() {
        return ExitCode::from(1);
    }

    for option in options {
        println!("{}\t{}", option.key(), option.label);
    }

    ExitCode::from(0)
}

fn run_values_mode(session: &Session, field: &str, show_count: bool) -> ExitCode {
    let counts = values::collect_values(&session.records, field);

    if counts.is_empty() {
        return ExitCode::from(1);
    }

    let lines = values::format_values(counts, session.types.type_of(field), show_count);
    for line in lines {
        println!("{}", line);
    }

    ExitCode::from(0)
}

fn run_query_mode(cli: &Cli, session: &Session) -> ExitCode {
    let mut tags = cli.filters.clone();
    if cli.stdin {
        tags.extend(source::read_lines_from_stdin());
    }

    let mut model = FilterModel::new();
    if let Err(e) = model.stage_tags(&tags) {
        eprintln!("Filter error: {}", e);
        return ExitCode::from(2);
    }

    let active: Vec<String> = model.filters().iter().map(tag::encode).collect();
    tracing::info!(filters = ?active, "applying filters");

    let visible = model.apply(&session.records, &session.types);
    if visible.is_empty() {
        return ExitCode::from(1);
    }

    match cli.format {
        Format::Table => {
            for line in table::render(&visible, &session.columns) {
                println!("{}", line);
            }
        }
        Format::Yaml => match serde_yaml::to_string(&visible) {
            Ok(out) => print!("{}", out),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(2);
            }
        },
        Format::Keys => {
            for record in &visible {
                println!("{}", record.text(&cli.key).unwrap_or_default());
            }
        }
    }

    ExitCode::from(0)
}

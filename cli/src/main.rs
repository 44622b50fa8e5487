mod check_runner;

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use codespan_reporting::diagnostic::Diagnostic;
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use tracing_subscriber::EnvFilter;

use ckscript::ScanError;
use ckscript::extract::FieldExtractor;
use ckscript::format::reindent;
use ckscript::localization::{LocalizationFile, parse_keys};
use ckscript::template::{TemplateCatalog, TemplateError, TemplateParams};
use schema::SchemaConfig;

#[derive(Parser)]
#[command(name = "ckscript", version, about = "Crusader Kings III mod script tools")]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log more (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the field names used in a directory of script files
    Extract(ExtractArgs),

    /// Compare declared schemas against the fields used in the game files
    Check(CheckArgs),

    /// Reindent a script file with tabs
    Fmt(FmtArgs),

    /// Generate a building, decision, trait or event scaffold
    Template(TemplateArgs),

    /// Generate the localization entries of a scaffold
    Loc(LocArgs),
}

#[derive(clap::Args)]
struct ExtractArgs {
    /// Directory scanned recursively
    dir: PathBuf,

    /// Brace depth of the fields (1 = fields of top-level entities)
    #[arg(short, long, default_value_t = 1)]
    depth: usize,

    /// Script file extension
    #[arg(long, default_value = "txt")]
    ext: String,
}

#[derive(clap::Args)]
struct CheckArgs {
    /// Schema-check configuration (TOML)
    #[arg(required_unless_present = "init")]
    config: Option<PathBuf>,

    /// Write the TOML report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Exit with status 1 when any schema has gaps
    #[arg(long)]
    strict: bool,

    /// Print a starting configuration and exit
    #[arg(long)]
    init: bool,
}

#[derive(clap::Args)]
struct FmtArgs {
    /// Script file to reindent
    file: PathBuf,

    /// Only report whether the file would change (exit 1 if so)
    #[arg(long)]
    check: bool,

    /// Rewrite the file in place instead of printing it
    #[arg(short, long, conflicts_with = "check")]
    write: bool,
}

#[derive(clap::Args)]
struct TemplateArgs {
    /// List the available templates and exit
    #[arg(long)]
    list: bool,

    /// Template id, e.g. building.economy
    #[arg(required_unless_present = "list")]
    id: Option<String>,

    /// Script key of the new entity, e.g. grand_library
    #[arg(required_unless_present = "list")]
    key: Option<String>,

    /// Display name used in localization (derived from the key by default)
    #[arg(long)]
    name: Option<String>,
}

#[derive(clap::Args)]
struct LocArgs {
    /// Template id
    id: String,

    /// Script key of the entity
    key: String,

    #[arg(short, long, default_value = "english")]
    language: String,

    /// Display name (derived from the key by default)
    #[arg(long)]
    name: Option<String>,

    /// Existing localization file; only keys it lacks are generated
    #[arg(long)]
    existing: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.no_color);

    let exit_code = match cli.command {
        Command::Extract(args) => do_extract(args),
        Command::Check(args) => do_check(args, cli.no_color),
        Command::Fmt(args) => do_fmt(args, cli.no_color),
        Command::Template(args) => do_template(args),
        Command::Loc(args) => do_loc(args),
    };
    process::exit(exit_code);
}

fn init_tracing(verbose: u8, no_color: bool) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!no_color)
        .init();
}

fn do_extract(args: ExtractArgs) -> i32 {
    let extraction = FieldExtractor::new(args.depth)
        .with_extension(args.ext)
        .extract(&args.dir);

    for field in &extraction.fields {
        println!("{}", field);
    }
    tracing::info!(
        fields = extraction.fields.len(),
        problems = extraction.errors.len(),
        "extraction finished"
    );

    // Unreadable files were already logged; only an unusable root is an error.
    let root_missing = extraction.errors.iter().any(|e| {
        matches!(
            e,
            ScanError::NotFound { .. } | ScanError::NotADirectory { .. }
        )
    });
    if root_missing { 1 } else { 0 }
}

fn do_check(args: CheckArgs, no_color: bool) -> i32 {
    if args.init {
        print!("{}", SchemaConfig::default_toml());
        return 0;
    }
    let Some(path) = args.config.as_deref() else {
        eprintln!("error: a configuration file is required");
        return 2;
    };

    let Some(text) = read_source(path) else {
        return 1;
    };
    let mut files = SimpleFiles::new();
    let file_id = files.add(path.display().to_string(), text.clone());

    let config = match SchemaConfig::from_toml(&text) {
        Ok(config) => config.relative_to(path.parent().unwrap_or_else(|| Path::new("."))),
        Err(error) => {
            emit_diagnostics(&files, &[error.to_diagnostic(file_id)], no_color);
            return 1;
        }
    };

    let outcome = schema::run_check(&config);
    check_runner::print_summary(path, &outcome, no_color);

    let report = match outcome.report.to_toml() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: cannot serialize report: {}", e);
            return 1;
        }
    };
    match &args.output {
        Some(output) => {
            if let Err(e) = fs::write(output, report) {
                eprintln!("error: cannot write '{}': {}", output.display(), e);
                return 1;
            }
            eprintln!("report written to {}", output.display());
        }
        None => print!("{}", report),
    }

    if args.strict && outcome.has_gaps() { 1 } else { 0 }
}

fn do_fmt(args: FmtArgs, no_color: bool) -> i32 {
    let Some(source) = read_source(&args.file) else {
        return 1;
    };
    let mut files = SimpleFiles::new();
    let file_id = files.add(args.file.display().to_string(), source.clone());

    let result = reindent(&source, file_id);
    let diagnostics: Vec<_> = result.warnings.iter().map(|w| w.to_diagnostic()).collect();
    emit_diagnostics(&files, &diagnostics, no_color);

    if args.check {
        if result.text == source {
            return 0;
        }
        eprintln!("{} is not formatted", args.file.display());
        return 1;
    }

    if args.write {
        if result.text != source {
            if let Err(e) = fs::write(&args.file, &result.text) {
                eprintln!("error: cannot write '{}': {}", args.file.display(), e);
                return 1;
            }
            tracing::info!(path = %args.file.display(), "reformatted");
        }
        return 0;
    }

    print!("{}", result.text);
    0
}

fn do_template(args: TemplateArgs) -> i32 {
    let catalog = TemplateCatalog::builtin();

    if args.list {
        for entry in catalog.entries() {
            println!("{:<20} {:<9} {}", entry.id, entry.kind(), entry.description);
        }
        return 0;
    }
    let (Some(id), Some(key)) = (args.id.as_deref(), args.key.as_deref()) else {
        eprintln!("error: a template id and a key are required");
        return 2;
    };

    match catalog.render(id, &template_params(key, args.name)) {
        Ok(rendered) => {
            eprintln!("# goes in {}/", rendered.kind.game_dir());
            print!("{}", rendered.script);
            0
        }
        Err(error) => {
            report_template_error(&catalog, &error);
            1
        }
    }
}

fn do_loc(args: LocArgs) -> i32 {
    let catalog = TemplateCatalog::builtin();
    let rendered = match catalog.render(&args.id, &template_params(&args.key, args.name)) {
        Ok(rendered) => rendered,
        Err(error) => {
            report_template_error(&catalog, &error);
            return 1;
        }
    };

    let existing: BTreeSet<String> = match &args.existing {
        Some(path) => match read_source(path) {
            Some(text) => parse_keys(&text),
            None => return 1,
        },
        None => BTreeSet::new(),
    };

    let mut file = LocalizationFile::new(&args.language);
    for (key, text) in &rendered.localization {
        if !existing.contains(key) {
            file.add(key, text);
        }
    }
    if file.keys().next().is_none() {
        eprintln!("all {} keys are already localized", rendered.localization.len());
        return 0;
    }

    eprintln!(
        "# goes in localization/{}/{}",
        file.language(),
        file.file_name(&args.key)
    );
    print!("{}", file.render());
    0
}

fn template_params(key: &str, name: Option<String>) -> TemplateParams {
    let params = TemplateParams::new(key);
    match name {
        Some(name) => params.with_display_name(name),
        None => params,
    }
}

fn report_template_error(catalog: &TemplateCatalog, error: &TemplateError) {
    eprintln!("error: {}", error);
    if let TemplateError::UnknownTemplate(_) = error {
        eprintln!(
            "available: {}",
            catalog
                .entries()
                .map(|e| e.id)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
}

fn read_source(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(s) => Some(s),
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", path.display(), e);
            None
        }
    }
}

fn emit_diagnostics(
    files: &SimpleFiles<String, String>,
    diagnostics: &[Diagnostic<usize>],
    no_color: bool,
) {
    let color_choice = if no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let writer = StandardStream::stderr(color_choice);
    let config = term::Config::default();
    for diagnostic in diagnostics {
        let _ = term::emit_to_write_style(&mut writer.lock(), &config, files, diagnostic);
    }
}

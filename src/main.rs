use clap::Parser;

mod diagnostics;
mod doc;
mod model;
mod render;
mod spec;

pub type Result<T> = anyhow::Result<T>;

const EXIT_OK: u8 = 0;
const EXIT_NO_INPUT_FILES: u8 = 3;
const EXIT_BAD_SPEC: u8 = 4;

#[derive(Parser)]
#[command(name = "keycheck")]
#[command(
    about = "Check YAML or JSON documents for the presence or absence of key paths",
    long_about = "Check YAML or JSON files for specific paths, and print a message if\n\
                  those paths are present/missing. Useful for checking for missing\n\
                  keys or deprecated targets in your YAML and JSON documents."
)]
struct Cli {
    /// (REQUIRED) The specification file containing a list of paths to
    /// check in your json/yaml documents. This can be YAML or JSON.
    #[arg(short = 's', long)]
    specfile: Option<String>,

    /// Prints the version.
    #[arg(short = 'v', long)]
    version: bool,

    /// YAML or JSON documents to check.
    files: Vec<String>,
}

fn main() -> std::process::ExitCode {
    std::process::ExitCode::from(run(Cli::parse()))
}

fn run(cli: Cli) -> u8 {
    // User asked for the version. Stop here if so.
    if cli.version {
        println!("keycheck {}", env!("CARGO_PKG_VERSION"));
        return EXIT_OK;
    }

    if cli.files.is_empty() {
        diagnostics::error("positional arguments are required (documents to check)");
        return EXIT_NO_INPUT_FILES;
    }

    // 1) Load + parse the spec file into the target list. Anything wrong
    //    with the spec file is fatal: without it there is nothing to check.
    let Some(specfile) = cli.specfile.as_deref() else {
        diagnostics::error("--specfile is required");
        return EXIT_BAD_SPEC;
    };
    let targets = match spec::load_targets(specfile) {
        Ok(targets) => targets,
        Err(err) => {
            diagnostics::error(format!("unable to load spec file {}: {:#}", specfile, err));
            return EXIT_BAD_SPEC;
        }
    };

    // 2) Check every document, sequentially. Per-file failures are
    //    reported and skipped; they do not change the exit code.
    for file in &cli.files {
        println!("============> Results for file: {}", file);
        match check_file(file, &targets) {
            Ok(rendered) => print!("{}", rendered),
            Err(err) => diagnostics::warn(format!("skipping {}: {:#}", file, err)),
        }
        println!();
    }

    EXIT_OK
}

/// Evaluate one document file against the target list and render the
/// triggered warnings.
fn check_file(path: &str, targets: &[spec::Target]) -> Result<String> {
    let document = doc::load_document(path)?;
    let warnings = model::evaluate_document(&document, targets);
    Ok(render::render_warnings(&warnings))
}

mod cli_host;

use clap::{Parser, ValueEnum};
use cli_host::CliHost;
use std::path::{Path, PathBuf};
use std::{fs, process};
use unscope_lib::host::{copy_output, run};
use unscope_lib::{convert_many, ConvertOptions, HostError, SelectorMapper};

#[derive(Parser)]
#[command(name = "unscope")]
#[command(about = "Rewrite VTEX scoped class names into clean and :global() stylesheets")]
struct Args {
    /// Input stylesheets. Reads stdin when omitted or `-`.
    inputs: Vec<PathBuf>,

    /// Regroup rules into nested SCSS.
    #[arg(long)]
    scss: bool,

    /// Flat mode only: keep pseudo selectors and media queries.
    #[arg(long, conflicts_with = "scss")]
    keep_pseudos: bool,

    /// Write the clean output here instead of stdout.
    #[arg(long)]
    clean_out: Option<PathBuf>,

    /// Write the global output here instead of stdout.
    #[arg(long)]
    global_out: Option<PathBuf>,

    /// Copy one of the outputs to the clipboard.
    #[arg(long, value_enum)]
    copy: Option<CopyTarget>,

    /// Log conversion details.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum CopyTarget {
    Clean,
    Global,
}

impl From<CopyTarget> for SelectorMapper {
    fn from(target: CopyTarget) -> Self {
        match target {
            CopyTarget::Clean => SelectorMapper::Clean,
            CopyTarget::Global => SelectorMapper::Global,
        }
    }
}

fn main() {
    let args: Args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run_cli(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_cli(args: Args) -> Result<(), HostError> {
    let options = ConvertOptions {
        nested: args.scss,
        keep_pseudos_and_media: args.keep_pseudos,
    };

    if args.inputs.len() > 1 {
        if args.clean_out.is_some() || args.global_out.is_some() || args.copy.is_some() {
            eprintln!("--clean-out, --global-out and --copy are ignored with several inputs");
        }
        return convert_files(&args.inputs, &options);
    }

    let input = args
        .inputs
        .into_iter()
        .next()
        .filter(|path| path.as_path() != Path::new("-"));
    let mut host = CliHost::new(input, options, args.clean_out, args.global_out);
    let conversion = run(&mut host)?;

    if let Some(target) = args.copy {
        if copy_output(&mut host, conversion.get(target.into())) {
            eprintln!("Copied!");
        } else {
            eprintln!("Copy failed");
        }
    }
    Ok(())
}

/// Convert every file and write `<stem>.clean.<ext>` / `<stem>.global.<ext>`
/// next to it.
fn convert_files(paths: &[PathBuf], options: &ConvertOptions) -> Result<(), HostError> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let css = fs::read_to_string(path).map_err(|source| HostError::Read {
            path: path.clone(),
            source,
        })?;
        sources.push(css);
    }

    let conversions = convert_many(&sources, options);
    for (path, conversion) in paths.iter().zip(&conversions) {
        for mapper in [SelectorMapper::Clean, SelectorMapper::Global] {
            let out = sibling_output(path, mapper, options.nested);
            fs::write(&out, conversion.get(mapper)).map_err(|source| HostError::Write {
                path: out.clone(),
                source,
            })?;
            log::info!("wrote {}", out.display());
        }
    }
    Ok(())
}

fn sibling_output(path: &Path, mapper: SelectorMapper, nested: bool) -> PathBuf {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("output");
    let ext = if nested {
        "scss"
    } else {
        path.extension().and_then(|s| s.to_str()).unwrap_or("css")
    };
    path.with_file_name(format!("{}.{}.{}", stem, mapper.name(), ext))
}

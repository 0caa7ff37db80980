use anyhow::{Context, Result, bail};
use blockmark_config::Config;
use blockmark_engine::{
    Extensions, HtmlOptions, HtmlRenderer, MarkdownRenderer, Options, Tree, parse_document,
    parsing::snapshot, render_to_vec,
};
use clap::{Parser, ValueEnum};
use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Markdown,
    /// Indented outline of the parsed tree
    Tree,
}

#[derive(Parser)]
#[command(name = "blockmark")]
#[command(about = "Render markdown to HTML, canonical markdown or a tree outline")]
#[command(version)]
struct Args {
    /// Markdown file to read; standard input when omitted
    input: Option<PathBuf>,

    /// Configuration file path (defaults to ~/.config/blockmark/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Enable an extension by name, e.g. `tables` or `definition_lists`
    #[arg(short = 'e', long = "extension", value_name = "NAME")]
    extensions: Vec<String>,

    /// Start from no extensions instead of the configured set
    #[arg(long)]
    no_extensions: bool,

    /// Bound on block and inline recursion
    #[arg(long)]
    max_nesting: Option<usize>,

    /// Wrap HTML output in a complete page
    #[arg(long)]
    complete_page: bool,

    /// Title of the complete page
    #[arg(long)]
    title: Option<String>,

    /// Write output here instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Save the effective settings to the config file instead of rendering
    #[arg(long)]
    write_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    if args.write_config {
        let path = write_config(&args)?;
        log::info!("Wrote config to {}", path.display());
        return Ok(());
    }

    let config = effective_config(&args, load_config(&args)?)?;

    let input = read_input(args.input.as_ref())?;
    log::debug!("read {} bytes", input.len());

    let tree = parse_document(&input, &config.parser);
    let output = render(&tree, args.format, config.html)?;

    match &args.output {
        Some(path) => fs::write(path, &output)
            .with_context(|| format!("Failed to write output to {}", path.display()))?,
        None => io::stdout()
            .write_all(&output)
            .context("Failed to write output")?,
    }
    Ok(())
}

fn config_path(args: &Args) -> PathBuf {
    match &args.config {
        Some(path) => Config::expand_path(path),
        None => Config::config_path(),
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let config_path = config_path(args);

    match Config::load_from_path(&config_path)? {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        }
        None if args.config.is_some() && !args.write_config => {
            bail!("Config file {} does not exist", config_path.display())
        }
        None => Ok(Config::default()),
    }
}

/// Stored settings with the command-line overrides applied.
fn effective_config(args: &Args, mut config: Config) -> Result<Config> {
    config.parser = parser_options(args, &config)?;
    config.html.complete_page |= args.complete_page;
    if let Some(title) = &args.title {
        config.html.title = title.clone();
    }
    Ok(config)
}

fn write_config(args: &Args) -> Result<PathBuf> {
    let config = effective_config(args, load_config(args)?)?;
    let path = config_path(args);
    config
        .save_to_path(&path)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(path)
}

fn parser_options(args: &Args, config: &Config) -> Result<Options> {
    let mut options = config.parser.clone();
    if args.no_extensions {
        options.extensions = Extensions::empty();
    }
    for name in &args.extensions {
        options.extensions |= extension_by_name(name)?;
    }
    if let Some(max_nesting) = args.max_nesting {
        options.max_nesting = max_nesting;
    }
    Ok(options)
}

/// Looks up an extension flag by its name in any case, `-` and `_` alike.
fn extension_by_name(name: &str) -> Result<Extensions> {
    let flag = name.trim().to_ascii_uppercase().replace('-', "_");
    Extensions::from_name(&flag).with_context(|| {
        let known: Vec<_> = Extensions::all()
            .iter_names()
            .map(|(name, _)| name.to_ascii_lowercase())
            .collect();
        format!("Unknown extension '{name}' (known: {})", known.join(", "))
    })
}

fn read_input(path: Option<&PathBuf>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut input = Vec::new();
            io::stdin()
                .read_to_end(&mut input)
                .context("Failed to read standard input")?;
            Ok(input)
        }
    }
}

fn render(tree: &Tree, format: Format, html: HtmlOptions) -> Result<Vec<u8>> {
    let output = match format {
        Format::Html => render_to_vec(tree, &mut HtmlRenderer::new(html))?,
        Format::Markdown => render_to_vec(tree, &mut MarkdownRenderer::new())?,
        Format::Tree => snapshot::normalize(tree).to_string().into_bytes(),
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn extension_names_are_forgiving() {
        assert_eq!(extension_by_name("tables").unwrap(), Extensions::TABLES);
        assert_eq!(
            extension_by_name("definition-lists").unwrap(),
            Extensions::DEFINITION_LISTS
        );
        assert_eq!(
            extension_by_name("NO_INTRA_EMPHASIS").unwrap(),
            Extensions::NO_INTRA_EMPHASIS
        );
    }

    #[test]
    fn unknown_extension_lists_known_ones() {
        let err = extension_by_name("footnotes").unwrap_err().to_string();
        assert!(err.contains("footnotes"));
        assert!(err.contains("tables"));
    }

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from([
            "blockmark",
            "--no-extensions",
            "-e",
            "tables",
            "--max-nesting",
            "4",
        ]);
        let options = parser_options(&args, &Config::default()).unwrap();
        assert_eq!(options.extensions, Extensions::TABLES);
        assert_eq!(options.max_nesting, 4);
    }

    #[test]
    fn write_config_saves_effective_settings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blockmark").join("config.toml");
        let args = Args::parse_from([
            "blockmark",
            "--config",
            path.to_str().unwrap(),
            "--write-config",
            "--no-extensions",
            "-e",
            "tables",
            "--complete-page",
        ]);

        assert_eq!(write_config(&args).unwrap(), path);

        let saved = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(saved.parser.extensions, Extensions::TABLES);
        assert!(saved.html.complete_page);
    }
}

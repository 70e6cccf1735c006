use anyhow::{Context, Result, bail};
use evergreen_config::Config;
use evergreen_engine::{Element, Processor};
use std::{
    env,
    io::{self, Read},
    path::PathBuf,
};

#[derive(Debug, Default, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    file: Option<PathBuf>,
    json: bool,
}

fn usage(program: &str) -> String {
    format!("Usage: {program} [--config <path>] [--json] [file|-]")
}

fn parse_args(args: &[String]) -> Result<Args> {
    let program = args.first().map(String::as_str).unwrap_or("evergreen");
    let mut parsed = Args::default();
    let mut rest = args.iter().skip(1);

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--config" => {
                let Some(path) = rest.next() else {
                    bail!("--config needs a path\n{}", usage(program));
                };
                parsed.config = Some(PathBuf::from(path));
            }
            "--json" => parsed.json = true,
            "-h" | "--help" => bail!("{}", usage(program)),
            "-" => parsed.file = None,
            flag if flag.starts_with("--") => bail!("unknown option {flag}\n{}", usage(program)),
            file => {
                if parsed.file.is_some() {
                    bail!("only one input file is supported\n{}", usage(program));
                }
                parsed.file = Some(PathBuf::from(file));
            }
        }
    }
    Ok(parsed)
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            log::info!("Using config file from CLI argument: {}", path.display());
            Config::load_from_path(path)?
                .with_context(|| format!("config file {} not found", path.display()))?
        }
        None => {
            let path = Config::config_path();
            match Config::load()? {
                Some(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                None => {
                    log::debug!("No config at {}, using defaults", path.display());
                    Config::default()
                }
            }
        }
    };
    Ok(loaded)
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            Ok(content)
        }
    }
}

/// One line per element, children indented two spaces under their parent.
fn render_outline(elements: &[Element]) -> Vec<String> {
    let mut out = vec![];
    for element in elements {
        render_into(element, 0, &mut out);
    }
    out
}

fn render_into(el: &Element, depth: usize, out: &mut Vec<String>) {
    let mut line = format!("{}{}", "  ".repeat(depth), el.element);
    if let Some(tag) = &el.tag {
        line.push_str(&format!("<{tag}>"));
    }
    if let Some(id) = &el.id {
        line.push_str(&format!("#{id}"));
    }
    for class in &el.classes {
        line.push_str(&format!(".{class}"));
    }
    if let Some(dest) = &el.dest {
        line.push_str(&format!(" -> {dest}"));
    }
    if !el.text.is_empty() {
        line.push_str(&format!(" {:?}", el.text));
    }
    out.push(line);

    for child in &el.children {
        render_into(child, depth + 1, out);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let args = parse_args(&args)?;

    let config = load_config(args.config.as_ref())?;
    let input = read_input(args.file.as_ref())?;

    let mut processor = Processor::new(input.lines()).with_options(config.parser);
    let elements = processor.parse().context("failed to parse document")?;
    log::debug!("{} root elements", elements.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(elements)?);
    } else {
        for line in render_outline(elements) {
            println!("{line}");
        }
    }
    Ok(())
}

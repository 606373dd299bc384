use anyhow::{Context, Result};
use blockmark_config::Config;
use blockmark_engine::{HtmlOptions, HtmlRenderer, markup};
use std::{
    env,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
    process,
};

fn html_options(config: &Config) -> HtmlOptions {
    HtmlOptions {
        title: config.title.clone(),
        stylesheet: config
            .stylesheet
            .as_ref()
            .map(|path| path.to_string_lossy().into_owned()),
        styled: config.styled,
    }
}

fn open_input(input: Option<&PathBuf>) -> Result<Box<dyn BufRead>> {
    match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Converts `input` (or stdin) to HTML written to `out`.
fn run<W: Write>(input: Option<&PathBuf>, config: &Config, out: W) -> Result<()> {
    let reader = open_input(input)?;
    let mut renderer = HtmlRenderer::with_options(out, html_options(config));
    markup(reader, &mut renderer).context("Failed to convert input")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let input = match args.len() {
        1 => None,
        2 if args[1] == "-" => None,
        2 => Some(PathBuf::from(&args[1])),
        _ => {
            eprintln!("Usage: {} [INPUT]", args[0]);
            eprintln!("Reads plain text from INPUT (or stdin) and writes HTML to stdout.");
            process::exit(1);
        }
    };

    let config_path = Config::config_path();
    log::debug!("Config path: {}", config_path.display());
    let config = Config::load_from_path(&config_path)?;

    match &input {
        Some(path) => log::debug!("Reading {}", path.display()),
        None => log::debug!("Reading stdin"),
    }

    let stdout = io::stdout();
    run(input.as_ref(), &config, BufWriter::new(stdout.lock()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn options_follow_config() {
        let config = Config {
            title: "Mine".to_string(),
            styled: false,
            stylesheet: Some(PathBuf::from("/srv/site.css")),
        };
        let options = html_options(&config);

        assert_eq!(options.title, "Mine");
        assert!(!options.styled);
        assert_eq!(options.stylesheet.as_deref(), Some("/srv/site.css"));
    }

    #[test]
    fn converts_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("notes.txt");
        std::fs::write(&input, "Notes\n\n- one\n\n- two\n").unwrap();

        let config = Config {
            styled: false,
            ..Config::default()
        };
        let mut out = Vec::new();
        run(Some(&input), &config, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<html><head><title>blockmark</title></head><body>\n\
             <h1>\nNotes\n</h1>\n\
             <ul>\n<li>\none\n</li>\n<li>\ntwo\n</li>\n</ul>\n\
             </body></html>\n"
        );
    }

    #[test]
    fn missing_input_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("absent.txt");

        let err = run(Some(&input), &Config::default(), Vec::new()).unwrap_err();

        assert!(err.to_string().contains("Failed to open input file"));
    }
}

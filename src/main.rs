mod error;
mod font_builder;
mod input;
mod preview;
mod stylesheet;
mod svg_parser;
mod template;

use anyhow::Result;
use clap::Parser;
use font_builder::FontForge;
use input::InputPaths;
use std::path::{Path, PathBuf};
use template::Placeholders;

#[derive(Parser)]
#[command(name = "icongen", version)]
#[command(about = "Generate CSS, HTML preview and TTF assets from an SVG icon font")]
struct Cli {
    /// SVG font (with or without the .svg extension) or a directory of SVG fonts
    infile: PathBuf,

    /// Skip the CSS stylesheet
    #[arg(short = 'c', long = "no-css", alias = "css")]
    no_css: bool,

    /// Skip the HTML preview
    #[arg(short = 'H', long = "no-html", alias = "html")]
    no_html: bool,

    /// Skip compiling the TTF font
    #[arg(short = 't', long = "no-ttf", alias = "ttf")]
    no_ttf: bool,

    /// Prefix for the generated CSS class names
    #[arg(short, long, default_value_t = String::new())]
    prefix: String,

    /// FontForge executable used to compile the TTF font
    #[arg(long, default_value = "fontforge")]
    fontforge: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Settings for a whole run, fixed once the command line is parsed
#[derive(Debug, Clone)]
struct Config {
    infile: PathBuf,
    generate_css: bool,
    generate_html: bool,
    generate_ttf: bool,
    prefix: String,
    fontforge: PathBuf,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            infile: cli.infile,
            generate_css: !cli.no_css,
            generate_html: !cli.no_html,
            generate_ttf: !cli.no_ttf,
            prefix: cli.prefix,
            fontforge: cli.fontforge,
        }
    }
}

#[derive(Debug, Default)]
struct Report {
    fonts: usize,
    files: usize,
    skipped: usize,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = Config::from(cli);

    match run(&config) {
        Ok(report) => {
            if report.skipped > 0 {
                println!(
                    "Skipped {} glyphs without a name or unicode value",
                    report.skipped
                );
            }
            println!(
                "\nDone! {} fonts processed, {} files written.",
                report.fonts, report.files
            );
        }
        Err(e) => {
            println!("{:#}", e);
            std::process::exit(1);
        }
    }
}

/// Initialize logging based on verbosity flag.
fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();

    if let Some(level) = default_level(verbose, std::env::var_os("RUST_LOG").is_some()) {
        builder.filter_level(level);
    }

    builder.init();
}

/// Level forced on the logger, if any. `-v` always wins; otherwise a
/// `RUST_LOG` filter is left untouched.
fn default_level(verbose: bool, env_filter: bool) -> Option<log::LevelFilter> {
    if verbose {
        Some(log::LevelFilter::Debug)
    } else if env_filter {
        None
    } else {
        Some(log::LevelFilter::Warn)
    }
}

fn run(config: &Config) -> Result<Report> {
    let mut report = Report::default();

    for infile in input::collect_inputs(&config.infile)? {
        process_input(&infile, config, &mut report)?;
    }

    Ok(report)
}

fn process_input(infile: &Path, config: &Config, report: &mut Report) -> Result<()> {
    let paths = InputPaths::resolve(infile);
    log::info!("Processing {} as '{}'", paths.svg.display(), paths.name);

    let fonts = svg_parser::load_fonts(&paths.svg)?;

    for font in &fonts {
        let placeholders = Placeholders::new(&config.prefix, font, &paths);

        if config.generate_css {
            stylesheet::generate_stylesheet(
                font,
                &config.prefix,
                &placeholders,
                &paths.css_template,
                &paths.css,
            )?;
            println!("Generated: {}", paths.css.display());
            report.files += 1;
        }

        if config.generate_html {
            preview::generate_preview(
                font,
                &config.prefix,
                &placeholders,
                &paths.html_template,
                &paths.html,
            )?;
            println!("Generated: {}", paths.html.display());
            report.files += 1;
        }

        report.fonts += 1;
        report.skipped += font.skipped;
    }

    if config.generate_ttf {
        let fontforge = FontForge::locate(&config.fontforge)?;

        if fontforge.compile(&paths.svg, &paths.ttf)? {
            println!("Generated: {}", paths.ttf.display());
            report.files += 1;

            let glyphs = font_builder::compiled_glyphs(&fonts);
            match font_builder::verify_font(&paths.ttf, glyphs) {
                Ok(0) => {}
                Ok(missing) => log::warn!(
                    "{} glyphs are not mapped in {}",
                    missing,
                    paths.ttf.display()
                ),
                Err(e) => log::warn!("{:#}", e),
            }
        }
    }

    Ok(())
}

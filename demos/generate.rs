use std::io::Read;
use std::path::PathBuf;

use clap::Parser;

use bvt_rs::generator::Generator;
use bvt_rs::observation::parse_observations;
use bvt_rs::render::RenderConfig;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// JavaScript source file (reads stdin when omitted).
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Read observation lines (`variable condition value`) from this file instead of JavaScript.
    #[clap(long, value_name = "FILE", conflicts_with = "input")]
    observations: Option<PathBuf>,

    /// Line printed between index entries.
    #[clap(long, value_name = "STR", default_value = "|")]
    separator: String,

    /// Log level.
    #[clap(long, value_name = "LEVEL", default_value = "info")]
    log_level: simplelog::LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let generator = Generator::new(RenderConfig {
        separator: args.separator.clone(),
        ..RenderConfig::default()
    });

    let time_total = std::time::Instant::now();
    let report = match &args.observations {
        Some(path) => {
            let input = std::fs::read_to_string(path)?;
            generator.run(&parse_observations(&input)?)
        }
        None => {
            let source = match &args.input {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut s = String::new();
                    std::io::stdin().read_to_string(&mut s)?;
                    s
                }
            };
            generator.run_source(&source)?
        }
    };
    log::info!("Generated in {:.3} ms", time_total.elapsed().as_secs_f64() * 1000.0);

    println!("{}", report);

    Ok(())
}

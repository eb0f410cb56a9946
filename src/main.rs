use clap::Parser;

use imgscii::cli::Args;
use imgscii::config::Config;
use imgscii::sink::Target;
use imgscii::{palette, quantizer, sink, source};

fn main() {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(args.config.as_deref())?;

    // CLI flags win over config values, config over built-in defaults.
    let width = args.width.unwrap_or(config.render.width);
    let height = args.height.unwrap_or(config.render.height);
    let gamma = !args.no_gamma && config.render.gamma;

    let glyphs = args.palette.or(config.palette.glyphs);
    let custom: Vec<char> = glyphs.as_deref().map(palette::parse).unwrap_or_default();
    let palette: &[char] = if custom.is_empty() {
        palette::DEFAULT_PALETTE
    } else {
        &custom
    };

    let grid = source::load(&args.input, width, height, gamma)?;
    let ascii = quantizer::render(&grid.pixels, grid.width, palette)?;

    let target = args.output.map(Target::File).unwrap_or_default();
    sink::write(&ascii, &target)?;
    Ok(())
}

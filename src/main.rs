use clap::Parser;
use log::info;

use matgen::cli::CliArgs;
use matgen::generate;

fn init_logger(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    use simplelog::*;

    let mut cb = ConfigBuilder::new();
    cb.set_location_level(LevelFilter::Off);
    cb.set_target_level(LevelFilter::Off);
    cb.set_thread_level(LevelFilter::Off);
    let config = cb.build();

    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}

fn run(args: &CliArgs) -> matgen::Result<String> {
    info!("args: {:?}", args);

    let spec = args.matrix_spec();
    let mut factory = args.factory();
    let writer = args.writer();

    let generated = generate(&mut factory, &spec, &writer, &args.output)?;

    let mut output = String::new();
    match &generated.notice {
        Some(notice) => output.push_str(&format!("{}\n", notice)),
        None => output.push_str(&format!("Matrix saved as: {}\n", generated.path.display())),
    }
    output.push_str(&generated.info.to_string());
    Ok(output)
}

fn main() {
    let args = CliArgs::parse();

    if let Err(e) = init_logger(args.log_level()) {
        eprintln!("failed to initialize logger: {e}");
    }

    match run(&args) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("\x1b[0;31merror\x1b[0m: {e}");
            std::process::exit(1)
        }
    }
}

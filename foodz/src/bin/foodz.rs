use clap::Parser;
use foodz::app::FoodzCliArguments;

fn main() {
    env_logger::init();
    let args = FoodzCliArguments::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running foodz: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

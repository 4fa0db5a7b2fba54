use clap::Parser;
use hexroute::app::HexRouteApp;

fn main() {
    env_logger::init();
    let args = HexRouteApp::parse();
    match args.op.run(args.configuration_file.as_ref()) {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running hexroute: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

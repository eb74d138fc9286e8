#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
use herdbook_chrome::{setup::generate_native_options, setup_logging, Args, DataPath, HerdbookApp};
use tracing::{error, info, warn};

fn main() {
    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    let (args, unrecognized) = Args::parse(&raw_args);

    let path = match &args.datapath {
        Some(datapath) => DataPath::new(datapath),
        None => DataPath::default(),
    };

    #[allow(unused_variables)] // need guard to live for lifetime of program
    let guard = setup_logging(&path);

    std::panic::set_hook(Box::new(|panic_info| {
        error!("Herdbook panicked: {:?}", panic_info);
    }));

    for arg in &unrecognized {
        warn!("unrecognized argument: {arg}");
    }

    info!("starting herdbook {}", env!("CARGO_PKG_VERSION"));

    let res = eframe::run_native(
        "Herdbook",
        generate_native_options(),
        Box::new(move |cc| {
            let app = HerdbookApp::new(&args, &path);
            app.apply_theme(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    );

    if let Err(err) = res {
        error!("herdbook exited with error: {err}");
    }
}

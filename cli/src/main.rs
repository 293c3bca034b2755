mod commands;
mod terminal;

use commands::{CommandLine, capture, report, scan};
use terminal::{logging, print};
use wavescan_common::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();
    print::banner();

    // Environment is read exactly once; everything downstream takes &cfg.
    let cfg = Config::from_env();
    print::config_lines(&cfg);

    if commands.is_empty() {
        print::print_status("nothing to do, try --scan (see --help)");
        return Ok(());
    }

    let mut networks = Vec::new();

    if commands.scan {
        print::header("scanning nearby networks");
        networks = scan::scan().await;
    }

    if commands.simulate_capture {
        print::header("simulated handshake capture");
        capture::simulate_capture(&networks, &cfg);
    }

    if commands.unsafe_allow_capture {
        print::header("unsafe capture confirmation");
        capture::unsafe_allow_capture();
    }

    if let Some(path) = &commands.report {
        print::header("writing report");
        report::report(&networks, path);
    }

    print::end_of_program();
    Ok(())
}

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(120);

pub struct SpinnerHandle {
    spinner: ProgressBar,
}

impl SpinnerHandle {
    pub fn set_message(&self, msg: String) {
        self.spinner.set_message(msg);
    }

    /// Prints a line above the spinner without tearing it.
    pub fn println(&self, msg: &str) {
        self.spinner.println(msg);
    }

    pub fn finish_and_clear(&self) {
        self.spinner.finish_and_clear();
    }
}

pub fn start(initial: &str) -> SpinnerHandle {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .expect("static spinner template is valid")
        .tick_strings(&["▹▹▹", "▸▹▹", "▹▸▹", "▹▹▸", "▹▹▹"]);

    pb.set_style(style);
    pb.set_message(initial.to_string());
    pb.enable_steady_tick(TICK_INTERVAL);

    SpinnerHandle { spinner: pb }
}

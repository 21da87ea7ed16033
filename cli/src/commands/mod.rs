use std::time::{Duration, Instant};

mod data;
mod endpoint;
mod trial;

pub use data::{handle_prep_baseline, handle_prep_data};
pub use endpoint::{handle_invoke, handle_resolve};
pub use trial::handle_create_trial;

/// Always shown, on stderr so command output stays pipeable.
fn report_elapsed(label: &str, start: Instant) {
    eprintln!("{}", elapsed_message(label, start.elapsed()));
}

fn elapsed_message(label: &str, elapsed: Duration) -> String {
    format!("{} complete in: {:.2?}", label, elapsed)
}

//! clean-folder's main application entry point.

use clean_folder::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    logger::init_logger,
    prompt::DialoguerPrompter,
    reveal::platform_revealer,
    shell::{Session, Shell},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let prompt = DialoguerPrompter::new();
    let revealer = platform_revealer();

    let session = Session::new(args.initial_base_dir().display().to_string(), args.name);
    let mut shell = Shell::new(&prompt, &*revealer, session);
    shell.run()
}

//! User-facing verbose output and logger setup.
//!
//! Library code logs through the `log` facade; `init_logger` installs
//! `env_logger` for the binary.

/// Default filter when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "info" } else { "warn" }
}

pub fn init_logger(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or(default_filter(verbose));
    // A second init (e.g. in tests) is harmless.
    let _ = env_logger::Builder::from_env(env).try_init();
}

pub fn print_verbose(verbose: bool, msg: &str) {
    if verbose {
        println!("Verbose: {}", msg);
    }
}

use env_logger::Env;

/// Install the `env_logger` backend for the `log` facade.
///
/// `RUST_LOG` wins when set; otherwise `-v` selects `debug` for this crate
/// and the default is `warn`. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,poke_pager=debug"
    } else {
        "warn"
    };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}

pub fn print_verbose(verbose: bool, msg: &str) {
    if verbose {
        println!("Verbose: {}", msg);
    }
}

/// Report a failure on stderr and through the `log` facade.
pub fn log_error(msg: &str) {
    log::error!("{}", msg);
    eprintln!("Error: {}", msg);
}

/// Report a recoverable problem on stderr and through the `log` facade.
pub fn log_warning(msg: &str) {
    log::warn!("{}", msg);
    eprintln!("Warning: {}", msg);
}

/// Console output gated on `--verbose`, mirrored to the `log` facade.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn log(&self, msg: &str) {
        log::debug!("{}", msg);
        print_verbose(self.enabled, msg);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

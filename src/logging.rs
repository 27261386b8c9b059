use env_logger::Env;

/// Initialize logging. Respects RUST_LOG if set, otherwise defaults to info.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}

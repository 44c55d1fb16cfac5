/// Initializes env_logger on stderr: debug output with `verbose`,
/// otherwise warnings only so stdout stays clean for the deployments.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

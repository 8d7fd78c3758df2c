use untangle::UntangleConfig;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("untangle v{} starting", env!("CARGO_PKG_VERSION"));
    untangle::run_untangle(UntangleConfig::default())
}

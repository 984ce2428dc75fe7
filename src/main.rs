use kiosk_tui::{
    config::{IgnoredValue, KioskConfig},
    ui::app::App,
    util::{hook::set_panic_hook, log::initialize_logging},
};

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> color_eyre::Result<()> {
    let config = setup()?;

    let mut app = App::new(config)?;
    app.run().await
}

fn setup() -> color_eyre::Result<KioskConfig> {
    color_eyre::install()?;
    dotenv::dotenv().ok();
    let (config, ignored) = KioskConfig::from_env();
    set_panic_hook();
    initialize_logging(&config.data_dir)?;
    ignored.iter().for_each(IgnoredValue::log);
    Ok(config)
}

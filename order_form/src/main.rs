mod app;
mod currency;
mod error;
mod numeric;
mod settings;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::OrderFormApp;
use crate::settings::FormSettings;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "order_form=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_settings() -> Result<FormSettings> {
    match settings::default_settings_path() {
        Some(path) => FormSettings::load(&path)
            .with_context(|| format!("loading settings from {}", path.display())),
        None => {
            tracing::warn!("no config directory available; using default settings");
            Ok(FormSettings::default())
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let settings = load_settings()?;
    tracing::info!(
        pair = %settings.asset_pair,
        market_price_ore = settings.market_price_ore,
        market_locale = currency::MARKET.locale.tag(),
        total_locale = currency::TOTAL.locale.tag(),
        "starting order form"
    );

    let title = settings.window_title.clone();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([576.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        native_options,
        Box::new(move |_cc| Box::new(OrderFormApp::new(&settings))),
    )
    .map_err(|e| anyhow!("eframe error: {e}"))
}

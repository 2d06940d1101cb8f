use lanes_demo::AppLauncher;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Cadence Animation Lanes ===");
    println!("Press the big button to race the five lanes, and again to send them home.");
    println!("Pass a .ttf path or set CADENCE_FONT if no text shows up.");
    println!();

    let mut launcher = AppLauncher::new()
        .with_title("Animation lanes")
        .with_size(480, 900);
    if let Some(font) = std::env::args_os().nth(1) {
        launcher = launcher.with_font_path(font);
    }
    launcher.run()
}

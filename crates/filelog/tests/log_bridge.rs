//! Routing third-party `log` macros through the default instance.

use filelog::FormatFlags;
use tempfile::TempDir;

#[test]
fn log_crate_macros_reach_category_files() {
    let dir = TempDir::new().unwrap();
    filelog::init(
        filelog::FileLogger::new()
            .with_dir(dir.path())
            .with_flags(FormatFlags::empty()),
    )
    .unwrap();
    filelog::compat::init_log_bridge().unwrap();

    log::info!("via bridge");
    log::warn!("warned");
    log::trace!("folded into debug");
    filelog::close().unwrap();

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let read = |category: &str| {
        std::fs::read_to_string(dir.path().join(format!("{today}_{category}.log"))).unwrap()
    };
    assert_eq!(read("info"), "info via bridge\n");
    assert_eq!(read("warn"), "warn warned\n");
    assert_eq!(read("debug"), "debug folded into debug\n");
}

use std::io::{self, BufWriter};

use env_logger::Env;
use log::{debug, info};

use crate::error::Result;
use crate::library::{headers, seed};
use crate::session::Session;
use crate::table::TrackTable;

mod settings;

/// Start one interactive session on stdin/stdout.
///
/// Logs go to stderr (`RUST_LOG`, default `warn`) so they never mix with the table.
pub fn run() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let settings = settings::load_settings();

    let tracks = seed::load(&settings.library)?;
    info!(
        "loaded {} tracks from {}",
        tracks.len(),
        settings
            .library
            .seed_path
            .as_deref()
            .map_or_else(|| "built-in sample".to_string(), |p| p.display().to_string())
    );

    debug!("columns: {}", headers().join(", "));

    let mut session = Session::new(
        tracks,
        TrackTable::new(settings.table.clone()),
        &settings.session,
    );

    let stdin = io::stdin();
    let mut stdout = BufWriter::new(io::stdout().lock());
    let summary = session.run(stdin.lock(), &mut stdout)?;
    let keys = session.sorter().keys();
    debug!(
        "session {:?} after {} lines; {} sort keys: {}",
        session.state(),
        summary.accepted + summary.rejected,
        keys.len(),
        keys
    );
    Ok(())
}

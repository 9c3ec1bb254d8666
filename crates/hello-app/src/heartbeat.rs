//! Liveness heartbeat: the current time printed on its own line every few
//! seconds.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use hello_core::clock::Clock;
use tokio::task::JoinHandle;
use tracing::warn;

/// Delay between heartbeats.
pub const HEARTBEAT_PERIOD: Duration = Duration::from_secs(5);

/// Write one `HH:MM:SS` line to `out`, then sleep for `period`, forever.
///
/// Sleep-based, so the cadence drifts by however long each write takes. A
/// failed write is logged and the loop carries on.
pub async fn run<W>(clock: Arc<dyn Clock>, period: Duration, mut out: W)
where
    W: Write + Send,
{
    loop {
        let stamp = hello_core::now(clock.as_ref());
        if let Err(e) = writeln!(out, "{stamp}").and_then(|()| out.flush()) {
            warn!(error = %e, "failed to write heartbeat");
        }
        tokio::time::sleep(period).await;
    }
}

/// Spawn the heartbeat onto the runtime at [`HEARTBEAT_PERIOD`], writing to
/// `out` (stdout in the binary).
///
/// The task is never cancelled; it ends when the runtime shuts down.
pub fn spawn<W>(clock: Arc<dyn Clock>, out: W) -> JoinHandle<()>
where
    W: Write + Send + 'static,
{
    spawn_with(clock, HEARTBEAT_PERIOD, out)
}

/// Spawn the heartbeat with an explicit period and sink.
pub fn spawn_with<W>(clock: Arc<dyn Clock>, period: Duration, out: W) -> JoinHandle<()>
where
    W: Write + Send + 'static,
{
    tokio::spawn(run(clock, period, out))
}

//! Spawns the one outbound inference request on a background thread.

use std::sync::Arc;
use std::sync::mpsc;

use tokio::runtime::Runtime;

use crate::core::api::AskClient;
use crate::core::config::Config;

use super::PendingReply;

/// Issue one request for `prompt`. The result arrives on the returned
/// channel and is drained from the event loop. There is no cancellation;
/// the thread runs to completion.
pub(super) fn spawn_ask(rt: &Arc<Runtime>, config: Arc<Config>, prompt: String) -> PendingReply {
    let (result_tx, result_rx) = mpsc::channel();
    let rt_clone = Arc::clone(rt);

    std::thread::spawn(move || {
        let client = AskClient::new(&config.api_url);
        let result = rt_clone.block_on(client.ask(&prompt));
        let _ = result_tx.send(result);
    });

    PendingReply { result_rx }
}

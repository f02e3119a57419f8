//! Push-style snapshot feed.
//!
//! The persistence subscription sends whole snapshots over a channel; each
//! one replaces the list's current snapshot. Diffs are not supported.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::record::CredentialRecord;
use crate::session::CredentialList;

/// Why the feed stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedExit {
    /// The sender side was dropped.
    Closed { applied: usize },
    /// The token fired.
    Cancelled { applied: usize },
}

impl FeedExit {
    pub fn applied(&self) -> usize {
        match self {
            Self::Closed { applied } | Self::Cancelled { applied } => *applied,
        }
    }
}

/// Applies snapshots from `rx` to `list` until the channel closes or
/// `token` is cancelled. `on_update` runs after every replacement.
///
/// The receiver is consumed; nothing of the subscription outlives the call.
pub async fn run_snapshot_feed<F>(
    list: &mut CredentialList,
    mut rx: mpsc::Receiver<Vec<CredentialRecord>>,
    token: CancellationToken,
    mut on_update: F,
) -> FeedExit
where
    F: FnMut(&CredentialList),
{
    let mut applied = 0;

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::info!("Snapshot feed cancelled after {} snapshots", applied);
                return FeedExit::Cancelled { applied };
            }
            next = rx.recv() => match next {
                Some(snapshot) => {
                    list.replace_snapshot(snapshot);
                    applied += 1;
                    on_update(&*list);
                }
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::info!("Snapshot feed closed after {} snapshots", applied);
                    return FeedExit::Closed { applied };
                }
            },
        }
    }
}

use tokio::sync::mpsc;

/// Handle used by request handlers to report an unrecoverable failure
///
/// Raising the signal does not stop the process by itself; `main` waits on
/// the matching [`FatalReceiver`] and returns the cause, which terminates the
/// server.
#[derive(Clone)]
pub struct FatalSignal {
    tx: mpsc::UnboundedSender<anyhow::Error>,
}

pub struct FatalReceiver {
    rx: mpsc::UnboundedReceiver<anyhow::Error>,
}

pub fn channel() -> (FatalSignal, FatalReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (FatalSignal { tx }, FatalReceiver { rx })
}

impl FatalSignal {
    pub fn raise(&self, err: anyhow::Error) {
        tracing::error!("Fatal error: {:#}", err);
        // Receiver is gone only when the process is already exiting
        let _ = self.tx.send(err);
    }
}

impl FatalReceiver {
    /// Wait for the first raised error
    pub async fn recv(&mut self) -> Option<anyhow::Error> {
        self.rx.recv().await
    }

    /// Non-blocking check, used by tests
    #[cfg(test)]
    pub fn try_recv(&mut self) -> Option<anyhow::Error> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_raise_delivers_cause() {
        let (signal, mut receiver) = channel();
        signal.clone().raise(anyhow::anyhow!("disk full"));

        let err = receiver.recv().await.unwrap();
        assert_eq!(err.to_string(), "disk full");
        assert!(receiver.try_recv().is_none());
    }

    #[test]
    fn test_raise_without_receiver_does_not_panic() {
        let (signal, receiver) = channel();
        drop(receiver);
        signal.raise(anyhow::anyhow!("ignored"));
    }
}

use std::{
    sync::Mutex,
    time::Duration,
};

use abilityfx::{
    battle::{
        ItemTransferRequest,
        ItemTransferService,
    },
    error::Error,
};
use async_trait::async_trait;

/// An [`ItemTransferService`] that takes some time to approve each transfer.
///
/// Useful for checking that dispatch order holds across suspension points.
#[derive(Debug)]
pub struct DelayedItemTransfers {
    delay: Duration,
    allow: bool,
    requests: Mutex<Vec<ItemTransferRequest>>,
}

impl DelayedItemTransfers {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            allow: true,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Rejects every transfer.
    pub fn rejecting(mut self) -> Self {
        self.allow = false;
        self
    }

    /// All transfers requested so far, in order.
    pub fn requests(&self) -> Vec<ItemTransferRequest> {
        match self.requests.lock() {
            Ok(requests) => requests.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl ItemTransferService for DelayedItemTransfers {
    fn can_transfer(&self, _: &ItemTransferRequest) -> bool {
        self.allow
    }

    async fn transfer(&self, request: ItemTransferRequest) -> Result<bool, Error> {
        tokio::time::sleep(self.delay).await;
        match self.requests.lock() {
            Ok(mut requests) => requests.push(request),
            Err(poisoned) => poisoned.into_inner().push(request),
        }
        Ok(self.allow)
    }
}

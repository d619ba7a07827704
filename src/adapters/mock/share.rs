//! Mock share target recording every request.

use std::sync::Mutex;

use crate::traits::{ShareRequest, ShareTarget};

#[derive(Debug, Default)]
pub struct MockShare {
    requests: Mutex<Vec<ShareRequest>>,
}

impl MockShare {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request shared so far, in order.
    pub fn requests(&self) -> Vec<ShareRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ShareTarget for MockShare {
    fn share(&self, request: ShareRequest) {
        self.requests.lock().unwrap().push(request);
    }
}

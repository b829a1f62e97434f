use std::{
    io,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
        Mutex,
    },
};

use async_trait::async_trait;
use bytes::Bytes;
use katalog::logging::error_chain_message;
use katalog_storage::{BlobKey, BlobStore, BlobStoreError};


/// A call that reached a [`FaultInjectingBlobStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlobStoreCall {
    Exists { key: String },
    Put { key: String },
    Delete { key: String },
}


/// Wraps another [`BlobStore`], recording every call
/// and optionally failing `put` or `delete`.
pub struct FaultInjectingBlobStore {
    inner: Arc<dyn BlobStore>,

    fail_puts: AtomicBool,

    fail_deletes: AtomicBool,

    calls: Mutex<Vec<BlobStoreCall>>,

    last_injected_error_message: Mutex<Option<String>>,
}

impl FaultInjectingBlobStore {
    pub fn new(inner: Arc<dyn BlobStore>) -> Self {
        Self {
            inner,
            fail_puts: AtomicBool::new(false),
            fail_deletes: AtomicBool::new(false),
            calls: Mutex::new(Vec::new()),
            last_injected_error_message: Mutex::new(None),
        }
    }

    pub fn set_fail_puts(&self, fail_puts: bool) {
        self.fail_puts.store(fail_puts, Ordering::SeqCst);
    }

    pub fn set_fail_deletes(&self, fail_deletes: bool) {
        self.fail_deletes.store(fail_deletes, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<BlobStoreCall> {
        self.calls.lock().expect("call log lock poisoned").clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().expect("call log lock poisoned").clear();
    }

    /// Full message (including sources) of the last error this store injected.
    pub fn last_injected_error_message(&self) -> Option<String> {
        self.last_injected_error_message
            .lock()
            .expect("error message lock poisoned")
            .clone()
    }

    fn record_call(&self, call: BlobStoreCall) {
        self.calls.lock().expect("call log lock poisoned").push(call);
    }

    fn inject(&self, error: BlobStoreError) -> BlobStoreError {
        *self
            .last_injected_error_message
            .lock()
            .expect("error message lock poisoned") = Some(error_chain_message(&error));

        error
    }
}

#[async_trait]
impl BlobStore for FaultInjectingBlobStore {
    async fn exists(&self, key: &BlobKey) -> Result<bool, BlobStoreError> {
        self.record_call(BlobStoreCall::Exists {
            key: key.to_string(),
        });

        self.inner.exists(key).await
    }

    async fn put(&self, key: &BlobKey, contents: Bytes) -> Result<(), BlobStoreError> {
        self.record_call(BlobStoreCall::Put {
            key: key.to_string(),
        });

        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(self.inject(BlobStoreError::UnableToWrite {
                key: key.to_string(),
                error: io::Error::new(io::ErrorKind::Other, "simulated storage failure"),
            }));
        }

        self.inner.put(key, contents).await
    }

    async fn delete(&self, key: &BlobKey) -> Result<(), BlobStoreError> {
        self.record_call(BlobStoreCall::Delete {
            key: key.to_string(),
        });

        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(self.inject(BlobStoreError::UnableToDelete {
                key: key.to_string(),
                error: io::Error::new(io::ErrorKind::Other, "simulated storage failure"),
            }));
        }

        self.inner.delete(key).await
    }
}

use std::sync::Mutex;

use katalog::categories::{CategoryOperation, OperationFailureSink};


#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedFailure {
    pub operation: CategoryOperation,

    pub message: String,
}


/// [`OperationFailureSink`] that keeps every reported failure in memory.
#[derive(Default)]
pub struct RecordingFailureSink {
    failures: Mutex<Vec<RecordedFailure>>,
}

impl RecordingFailureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded_failures(&self) -> Vec<RecordedFailure> {
        self.failures
            .lock()
            .expect("failure sink lock poisoned")
            .clone()
    }
}

impl OperationFailureSink for RecordingFailureSink {
    fn record_failure(&self, operation: CategoryOperation, message: &str) {
        self.failures
            .lock()
            .expect("failure sink lock poisoned")
            .push(RecordedFailure {
                operation,
                message: message.to_string(),
            });
    }
}

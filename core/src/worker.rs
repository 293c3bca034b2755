//! Background job dispatch.
//!
//! Slow work (external processes, file I/O, simulated delays) runs on a
//! worker thread and reports progress through a channel, so the
//! interactive context only ever polls a receiver and is never blocked.
//! One dispatch owns one thread: everything a job does is strictly
//! sequential within that batch, while independently dispatched jobs have
//! no ordering between them. Jobs run to completion; there is no
//! cancellation.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

/// Progress message emitted by a running job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JobEvent {
    /// Free-form status line for the operator.
    Log(String),
    /// A capture placeholder file was written.
    CaptureStored(PathBuf),
    /// One step of the batch failed; the batch continues.
    Failed(String),
}

/// Handed to a job for emitting progress. Send failures are ignored: a
/// receiver that went away must not take the worker down with it.
pub struct JobSink {
    tx: Sender<JobEvent>,
}

impl JobSink {
    pub fn emit(&self, event: JobEvent) {
        let _ = self.tx.send(event);
    }

    pub fn log(&self, message: impl Into<String>) {
        self.emit(JobEvent::Log(message.into()));
    }
}

/// Runs the job on a fresh worker thread and returns the event receiver.
/// Channel disconnect signals that the batch has finished.
pub fn dispatch<F>(job: F) -> Receiver<JobEvent>
where
    F: FnOnce(&JobSink) + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let sink = JobSink { tx };
        job(&sink);
    });
    rx
}

//! Backend commands queued from UI to backend worker.

use client_core::PendingSubmission;

pub enum BackendCommand {
    SubmitOrder(PendingSubmission),
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::SubmitOrder(_) => "submit_order",
        }
    }
}

use std::sync::mpsc::TryRecvError;

use super::GenaiController;
use super::jobs::JobMessage;

impl GenaiController {
    /// Drain worker results and apply them.
    ///
    /// Each settle handler restores its own controls, so cleanup runs for
    /// every outcome in the order the responses arrived.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            };
            match message {
                JobMessage::ModelSwitched { version, result } => {
                    self.finish_model_switch(version, result);
                }
                JobMessage::ReportFinished(result) => self.finish_report(result),
                JobMessage::PolicyFinished(result) => self.finish_policy(result),
                JobMessage::QaAnswered(result) => self.finish_qa(result),
                JobMessage::SummaryFinished(result) => self.finish_summary(result),
                JobMessage::ConfigSaved(result) => self.finish_config_save(result),
            }
        }
    }
}

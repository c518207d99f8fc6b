//! Worker-thread plumbing for backend calls.

use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::thread;

use crate::genai_gateway::api::{self, ConfigRequest, GatewayError, ReportRequest};
use crate::model::ModelVersion;

/// Outcome of one backend call, delivered to the frame loop.
pub(crate) enum JobMessage {
    ModelSwitched {
        version: ModelVersion,
        result: Result<(), GatewayError>,
    },
    ReportFinished(Result<String, GatewayError>),
    PolicyFinished(Result<String, GatewayError>),
    QaAnswered(Result<String, GatewayError>),
    SummaryFinished(Result<String, GatewayError>),
    ConfigSaved(Result<(), GatewayError>),
}

/// One in-progress guard per interaction; a guarded `begin_*` is a no-op
/// while its previous call has not settled.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    pub(super) switch_in_progress: bool,
    pub(super) report_in_progress: bool,
    pub(super) policy_in_progress: bool,
    pub(super) qa_in_progress: bool,
    pub(super) summary_in_progress: bool,
    pub(super) config_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = channel();
        Self {
            message_tx,
            message_rx,
            switch_in_progress: false,
            report_in_progress: false,
            policy_in_progress: false,
            qa_in_progress: false,
            summary_in_progress: false,
            config_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn any_in_progress(&self) -> bool {
        self.switch_in_progress
            || self.report_in_progress
            || self.policy_in_progress
            || self.qa_in_progress
            || self.summary_in_progress
            || self.config_in_progress
    }

    pub(super) fn begin_model_switch(&mut self, base_url: String, version: ModelVersion) {
        if self.switch_in_progress {
            return;
        }
        self.switch_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = api::switch_model(&base_url, version);
            let _ = tx.send(JobMessage::ModelSwitched { version, result });
        });
    }

    pub(super) fn clear_model_switch(&mut self) {
        self.switch_in_progress = false;
    }

    pub(super) fn begin_report(&mut self, base_url: String, request: ReportRequest) {
        if self.report_in_progress {
            return;
        }
        self.report_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = api::generate_report(&base_url, &request);
            let _ = tx.send(JobMessage::ReportFinished(result));
        });
    }

    pub(super) fn clear_report(&mut self) {
        self.report_in_progress = false;
    }

    pub(super) fn begin_policy(
        &mut self,
        base_url: String,
        prompt: String,
        version: ModelVersion,
    ) {
        if self.policy_in_progress {
            return;
        }
        self.policy_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = api::suggest_policy(&base_url, &prompt, version);
            let _ = tx.send(JobMessage::PolicyFinished(result));
        });
    }

    pub(super) fn clear_policy(&mut self) {
        self.policy_in_progress = false;
    }

    pub(super) fn begin_qa(&mut self, base_url: String, question: String, version: ModelVersion) {
        if self.qa_in_progress {
            return;
        }
        self.qa_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = api::ask_question(&base_url, &question, version);
            let _ = tx.send(JobMessage::QaAnswered(result));
        });
    }

    pub(super) fn clear_qa(&mut self) {
        self.qa_in_progress = false;
    }

    pub(super) fn begin_summary(&mut self, base_url: String, text: String) {
        if self.summary_in_progress {
            return;
        }
        self.summary_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = api::summarize(&base_url, &text);
            let _ = tx.send(JobMessage::SummaryFinished(result));
        });
    }

    pub(super) fn clear_summary(&mut self) {
        self.summary_in_progress = false;
    }

    pub(super) fn begin_config_save(&mut self, base_url: String, request: ConfigRequest) {
        if self.config_in_progress {
            return;
        }
        self.config_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = api::save_config(&base_url, &request);
            let _ = tx.send(JobMessage::ConfigSaved(result));
        });
    }

    pub(super) fn clear_config_save(&mut self) {
        self.config_in_progress = false;
    }
}

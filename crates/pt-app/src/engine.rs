//! Pipeline engine - the single-task actor at the center of the tool.
//!
//! The engine owns the debounce gate and the serialization of clipboard
//! extraction. Platform code only ever talks to it through channels: the
//! input monitor pushes raw [`InputEvent`]s from the OS callback thread
//! with a non-blocking send, and settle checks re-enter the loop as
//! commands from spawned timer tasks. Because the gate state is touched
//! exclusively inside this task there is no locking anywhere.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use pt_core::gate::{DebounceGate, GateDecision};
use pt_core::input::InputEvent;

use crate::usecases::{ExtractSelection, TranslateSelection};

/// Control messages delivered into the engine loop alongside input events.
#[derive(Debug, Clone, Copy)]
pub enum EngineCommand {
    /// A settle timer fired; `scheduled_from` is the event time the timer
    /// was scheduled against, compared for staleness by the gate.
    SettleCheck { scheduled_from: Instant },
    Shutdown,
}

/// Cloneable handle for feeding and stopping a running engine.
#[derive(Clone)]
pub struct EngineHandle {
    events_tx: mpsc::Sender<InputEvent>,
    command_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    /// Sender handed to the input monitor; hook callbacks use `try_send`.
    pub fn events(&self) -> mpsc::Sender<InputEvent> {
        self.events_tx.clone()
    }

    pub async fn shutdown(&self) {
        if self.command_tx.send(EngineCommand::Shutdown).await.is_err() {
            debug!("engine already stopped");
        }
    }
}

pub struct PipelineEngine {
    gate: DebounceGate,
    events_rx: mpsc::Receiver<InputEvent>,
    command_tx: mpsc::Sender<EngineCommand>,
    command_rx: mpsc::Receiver<EngineCommand>,
    extract: Arc<ExtractSelection>,
    translate: Arc<TranslateSelection>,
    shutting_down: bool,
}

impl PipelineEngine {
    pub fn new(
        gate: DebounceGate,
        extract: Arc<ExtractSelection>,
        translate: Arc<TranslateSelection>,
    ) -> (Self, EngineHandle) {
        // Input events outpace everything else; the hook side drops on a
        // full queue rather than blocking the OS delivery path.
        let (events_tx, events_rx) = mpsc::channel(256);
        let (command_tx, command_rx) = mpsc::channel(16);

        let engine = Self {
            gate,
            events_rx,
            command_tx: command_tx.clone(),
            command_rx,
            extract,
            translate,
            shutting_down: false,
        };
        let handle = EngineHandle {
            events_tx,
            command_tx,
        };
        (engine, handle)
    }

    pub async fn run(mut self) {
        info!(policy = ?self.gate.policy(), "pipeline engine started");
        while !self.shutting_down {
            tokio::select! {
                Some(event) = self.events_rx.recv() => {
                    self.handle_input(event).await;
                }
                Some(command) = self.command_rx.recv() => {
                    self.handle_command(command).await;
                }
                else => break,
            }
        }
        info!("pipeline engine stopped");
    }

    async fn handle_input(&mut self, event: InputEvent) {
        match self.gate.observe(event) {
            GateDecision::Ignore => {}
            GateDecision::Trigger => {
                self.run_session().await;
            }
            GateDecision::CheckAfter(delay) => {
                let command_tx = self.command_tx.clone();
                let scheduled_from = event.at;
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    if command_tx
                        .send(EngineCommand::SettleCheck { scheduled_from })
                        .await
                        .is_err()
                    {
                        debug!("engine stopped before settle check fired");
                    }
                });
            }
        }
    }

    async fn handle_command(&mut self, command: EngineCommand) {
        match command {
            EngineCommand::SettleCheck { scheduled_from } => {
                if self.gate.confirm(scheduled_from) {
                    self.run_session().await;
                } else {
                    debug!("stale settle check dropped");
                }
            }
            EngineCommand::Shutdown => {
                self.shutting_down = true;
            }
        }
    }

    /// One selection session: extraction inline, translation spawned.
    ///
    /// Awaiting the extraction here is what serializes clipboard ownership;
    /// a trigger firing mid-extraction waits in the inbox instead of
    /// interleaving clipboard access. Translation, by contrast, is spawned:
    /// several sessions may have requests in flight at once, each presents
    /// independently.
    async fn run_session(&self) {
        let text = match self.extract.execute().await {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!("no selection captured");
                return;
            }
            Err(e) => {
                warn!(error = %e, "selection extraction failed");
                return;
            }
        };

        info!(chars = text.chars().count(), "selection captured");
        let translate = Arc::clone(&self.translate);
        tokio::spawn(async move {
            translate.execute(text).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::time::timeout;

    use pt_core::error::TranslateError;
    use pt_core::gate::DebouncePolicy;
    use pt_core::ports::{ClipboardPort, CopyKeystrokePort, PresenterPort, TranslatorPort};
    use pt_core::translation::{Presentation, TranslationRequest};

    struct TestClipboard {
        content: Mutex<Option<String>>,
    }

    impl ClipboardPort for TestClipboard {
        fn read_text(&self) -> Result<Option<String>> {
            Ok(self.content.lock().unwrap().clone())
        }

        fn write_text(&self, text: &str) -> Result<()> {
            *self.content.lock().unwrap() = Some(text.to_string());
            Ok(())
        }

        fn clear(&self) -> Result<()> {
            *self.content.lock().unwrap() = None;
            Ok(())
        }
    }

    struct TestCopyKeystroke {
        clipboard: Arc<TestClipboard>,
        selection: Option<String>,
        copies: Mutex<u32>,
    }

    impl CopyKeystrokePort for TestCopyKeystroke {
        fn synthesize_copy(&self) -> Result<()> {
            *self.copies.lock().unwrap() += 1;
            if let Some(selection) = &self.selection {
                *self.clipboard.content.lock().unwrap() = Some(selection.clone());
            }
            Ok(())
        }
    }

    struct TestTranslator {
        reply: Result<String, ()>,
    }

    #[async_trait]
    impl TranslatorPort for TestTranslator {
        async fn translate(&self, _request: &TranslationRequest) -> Result<String, TranslateError> {
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(()) => Err(TranslateError::Network("connection refused".to_string())),
            }
        }
    }

    struct TestPresenter {
        tx: mpsc::Sender<Presentation>,
    }

    #[async_trait]
    impl PresenterPort for TestPresenter {
        async fn present(&self, presentation: Presentation) -> Result<()> {
            self.tx
                .send(presentation)
                .await
                .map_err(|err| anyhow::anyhow!("presenter send failed: {err}"))
        }
    }

    struct Harness {
        handle: EngineHandle,
        clipboard: Arc<TestClipboard>,
        copies: Arc<TestCopyKeystroke>,
        presented_rx: mpsc::Receiver<Presentation>,
    }

    fn spawn_engine(
        policy: DebouncePolicy,
        prior_clipboard: Option<&str>,
        selection: Option<&str>,
        reply: Result<String, ()>,
    ) -> Harness {
        let clipboard = Arc::new(TestClipboard {
            content: Mutex::new(prior_clipboard.map(str::to_string)),
        });
        let copies = Arc::new(TestCopyKeystroke {
            clipboard: clipboard.clone(),
            selection: selection.map(str::to_string),
            copies: Mutex::new(0),
        });
        let (presented_tx, presented_rx) = mpsc::channel(8);

        let extract = Arc::new(ExtractSelection::new(
            clipboard.clone(),
            copies.clone(),
            Duration::from_millis(100),
        ));
        let translate = Arc::new(TranslateSelection::new(
            Arc::new(TestTranslator { reply }),
            Arc::new(TestPresenter { tx: presented_tx }),
        ));

        let (engine, handle) = PipelineEngine::new(DebounceGate::new(policy), extract, translate);
        tokio::spawn(engine.run());

        Harness {
            handle,
            clipboard,
            copies,
            presented_rx,
        }
    }

    const RECV_WAIT: Duration = Duration::from_secs(5);

    #[tokio::test(start_paused = true)]
    async fn double_click_drives_one_full_session() {
        let mut harness = spawn_engine(
            DebouncePolicy::DoubleClick {
                threshold: Duration::from_millis(500),
            },
            Some("X"),
            Some("selected text"),
            Ok("翻译文本".to_string()),
        );

        let t0 = Instant::now();
        let events = harness.handle.events();
        events.send(InputEvent::press_down(t0)).await.unwrap();
        events
            .send(InputEvent::press_down(t0 + Duration::from_millis(200)))
            .await
            .unwrap();

        let presented = timeout(RECV_WAIT, harness.presented_rx.recv())
            .await
            .expect("presentation timed out")
            .expect("presenter channel closed");

        assert_eq!(presented.title, "翻译结果");
        assert_eq!(presented.body, "翻译文本");
        assert_eq!(harness.clipboard.read_text().unwrap().as_deref(), Some("X"));

        // No second presentation for the same pair.
        assert!(timeout(Duration::from_millis(500), harness.presented_rx.recv())
            .await
            .is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn release_burst_yields_exactly_one_extraction() {
        let harness = spawn_engine(
            DebouncePolicy::SettleAfterRelease {
                delay: Duration::from_millis(100),
            },
            Some("X"),
            None,
            Ok(String::new()),
        );

        let t0 = Instant::now();
        let events = harness.handle.events();
        for i in 0..5u64 {
            events
                .send(InputEvent::press_up(t0 + Duration::from_millis(i * 20)))
                .await
                .unwrap();
        }

        // Let every settle timer fire and drain.
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(*harness.copies.copies.lock().unwrap(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn no_selection_never_presents() {
        let mut harness = spawn_engine(
            DebouncePolicy::SettleAfterRelease {
                delay: Duration::from_millis(100),
            },
            Some("X"),
            None,
            Ok("unused".to_string()),
        );

        harness
            .handle
            .events()
            .send(InputEvent::press_up(Instant::now()))
            .await
            .unwrap();

        assert!(timeout(Duration::from_secs(1), harness.presented_rx.recv())
            .await
            .is_err());
        assert_eq!(harness.clipboard.read_text().unwrap().as_deref(), Some("X"));
    }

    #[tokio::test(start_paused = true)]
    async fn translation_failure_presents_placeholder_once() {
        let mut harness = spawn_engine(
            DebouncePolicy::SettleAfterRelease {
                delay: Duration::from_millis(100),
            },
            None,
            Some("bonjour"),
            Err(()),
        );

        harness
            .handle
            .events()
            .send(InputEvent::press_up(Instant::now()))
            .await
            .unwrap();

        let presented = timeout(RECV_WAIT, harness.presented_rx.recv())
            .await
            .expect("presentation timed out")
            .expect("presenter channel closed");

        assert_eq!(presented.title, "翻译结果");
        assert_eq!(presented.body, "翻译失败");

        assert!(timeout(Duration::from_millis(500), harness.presented_rx.recv())
            .await
            .is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_stops_the_loop() {
        let harness = spawn_engine(
            DebouncePolicy::SettleAfterRelease {
                delay: Duration::from_millis(100),
            },
            None,
            None,
            Ok(String::new()),
        );

        harness.handle.shutdown().await;
        tokio::time::sleep(Duration::from_millis(10)).await;

        // The loop has exited and dropped its receiver.
        assert!(harness
            .handle
            .events()
            .try_send(InputEvent::press_up(Instant::now()))
            .is_err());
    }
}

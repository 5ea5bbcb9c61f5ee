use std::path::PathBuf;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, warn};

use super::sink::create_sink;
use super::types::{AudioError, AudioOutput};

/// Plays catalog tracks through the default output device.
pub struct RodioOutput {
    stream: OutputStream,
    /// Resolved media file per catalog index.
    sources: Vec<Option<PathBuf>>,
    sink: Option<Sink>,
}

impl RodioOutput {
    pub fn open(sources: Vec<Option<PathBuf>>) -> Result<Self, AudioError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| AudioError::NoDevice(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped, which would land on the TUI.
        stream.log_on_drop(false);
        Ok(Self {
            stream,
            sources,
            sink: None,
        })
    }
}

impl AudioOutput for RodioOutput {
    fn play(&mut self, index: usize) -> Result<(), AudioError> {
        self.stop();
        let path = self
            .sources
            .get(index)
            .cloned()
            .flatten()
            .ok_or(AudioError::NoSource { index })?;

        let sink = create_sink(&self.stream, &path)?;
        sink.play();
        debug!("playing {}", path.display());
        self.sink = Some(sink);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }

    fn finished(&self) -> bool {
        self.sink.as_ref().map(|s| s.empty()).unwrap_or(false)
    }
}

/// Stand-in used when no device is available: every start fails.
pub struct NullOutput {
    reason: String,
}

impl NullOutput {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl AudioOutput for NullOutput {
    fn play(&mut self, _index: usize) -> Result<(), AudioError> {
        Err(AudioError::NoDevice(self.reason.clone()))
    }

    fn stop(&mut self) {}

    fn finished(&self) -> bool {
        false
    }
}

/// Open the default device, degrading to `NullOutput` when there is none.
pub fn open_output(sources: Vec<Option<PathBuf>>) -> Box<dyn AudioOutput> {
    match RodioOutput::open(sources) {
        Ok(out) => Box::new(out),
        Err(e) => {
            warn!("{e}; playback is disabled");
            Box::new(NullOutput::new(e.to_string()))
        }
    }
}

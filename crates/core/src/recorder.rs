//! Voice note recorder.
//!
//! Wraps a platform audio source behind [`AudioCapture`] so the
//! state machine (permission, elapsed ticking, playback, download,
//! simulated send) is testable without a microphone.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::constants::VOICE_SEND_DELAY;
use crate::error::{DashboardError, DashboardResult};
use crate::ops::{simulate_transport, OpState};

/// Encodings tried in order; the first the platform supports wins.
pub const PREFERRED_ENCODINGS: [&str; 4] =
    ["audio/webm", "audio/ogg", "audio/mp4", "audio/wav"];

const FALLBACK_ENCODING: &str = "audio/webm";

/// A platform audio source.
pub trait AudioCapture {
    /// Requests microphone access and begins capturing.
    ///
    /// # Errors
    ///
    /// [`DashboardError::MicrophoneDenied`] when the user refuses
    /// permission.
    fn open(&mut self) -> DashboardResult<()>;

    /// Whether the platform can encode to this MIME type.
    fn supports(&self, mime: &str) -> bool;

    /// Stops capturing and returns the recorded bytes.
    fn finish(&mut self) -> Vec<u8>;
}

/// A finished recording held in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoiceClip {
    pub id: Uuid,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl VoiceClip {
    fn extension(&self) -> &'static str {
        match self.mime {
            "audio/ogg" => "ogg",
            "audio/mp4" => "mp4",
            "audio/wav" => "wav",
            _ => "webm",
        }
    }
}

/// Recorder state machine over one [`AudioCapture`].
#[derive(Clone, Debug)]
pub struct VoiceRecorder<C> {
    capture: C,
    recording: bool,
    mime: &'static str,
    elapsed_secs: u32,
    clip: Option<VoiceClip>,
    playing: bool,
    pub send_state: OpState,
}

impl<C: AudioCapture> VoiceRecorder<C> {
    pub fn new(capture: C) -> Self {
        Self {
            capture,
            recording: false,
            mime: FALLBACK_ENCODING,
            elapsed_secs: 0,
            clip: None,
            playing: false,
            send_state: OpState::default(),
        }
    }

    /// Starts recording, replacing any previous clip once stopped.
    ///
    /// # Errors
    ///
    /// Already recording, or microphone permission denied.
    pub fn start(&mut self) -> DashboardResult<()> {
        if self.recording {
            return Err(DashboardError::AlreadyRecording);
        }
        self.capture.open()?;
        self.mime = PREFERRED_ENCODINGS
            .iter()
            .copied()
            .find(|mime| self.capture.supports(mime))
            .unwrap_or(FALLBACK_ENCODING);
        self.elapsed_secs = 0;
        self.recording = true;
        Ok(())
    }

    /// One-second timer tick while recording; ignored otherwise.
    pub fn tick(&mut self) {
        if self.recording {
            self.elapsed_secs += 1;
        }
    }

    /// Stops recording and stores the clip. A no-op when idle.
    pub fn stop(&mut self) {
        if !self.recording {
            return;
        }
        let bytes = self.capture.finish();
        self.clip = Some(VoiceClip {
            id: Uuid::new_v4(),
            mime: self.mime,
            bytes,
        });
        self.recording = false;
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn clip(&self) -> Option<&VoiceClip> {
        self.clip.as_ref()
    }

    /// Elapsed recording time as `m:ss`.
    pub fn elapsed_label(&self) -> String {
        format!("{}:{:02}", self.elapsed_secs / 60, self.elapsed_secs % 60)
    }

    /// Toggles playback of the stored clip.
    ///
    /// # Errors
    ///
    /// There is nothing to play.
    pub fn toggle_playback(&mut self) -> DashboardResult<bool> {
        if self.clip.is_none() {
            return Err(DashboardError::NoRecording);
        }
        self.playing = !self.playing;
        Ok(self.playing)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Download artifact name for the stored clip.
    ///
    /// # Errors
    ///
    /// There is nothing to download.
    pub fn download_name(&self, now: DateTime<Utc>) -> DashboardResult<String> {
        let clip = self.clip.as_ref().ok_or(DashboardError::NoRecording)?;
        Ok(format!(
            "voice_note_{}.{}",
            now.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            clip.extension()
        ))
    }

    /// Discards the clip and resets playback and elapsed time.
    pub fn delete(&mut self) {
        self.clip = None;
        self.elapsed_secs = 0;
        self.playing = false;
    }

    /// Simulated upload; the clip is discarded after a successful send.
    ///
    /// # Errors
    ///
    /// Nothing recorded, or a send already in flight.
    pub async fn send(&mut self, patient_name: &str) -> DashboardResult<String> {
        if self.clip.is_none() {
            return Err(DashboardError::NoRecording);
        }
        self.send_state.begin()?;
        simulate_transport(VOICE_SEND_DELAY).await;
        self.send_state.succeed();
        self.delete();
        Ok(format!("Voice note sent successfully to {patient_name}!"))
    }
}

/// In-memory capture for tests and demos.
#[derive(Clone, Debug)]
pub struct MockCapture {
    pub permission_granted: bool,
    pub supported: Vec<&'static str>,
    pub bytes: Vec<u8>,
}

impl Default for MockCapture {
    fn default() -> Self {
        Self {
            permission_granted: true,
            supported: vec!["audio/webm"],
            bytes: vec![0u8; 16],
        }
    }
}

impl AudioCapture for MockCapture {
    fn open(&mut self) -> DashboardResult<()> {
        if self.permission_granted {
            Ok(())
        } else {
            Err(DashboardError::MicrophoneDenied)
        }
    }

    fn supports(&self, mime: &str) -> bool {
        self.supported.contains(&mime)
    }

    fn finish(&mut self) -> Vec<u8> {
        self.bytes.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> VoiceRecorder<MockCapture> {
        VoiceRecorder::new(MockCapture::default())
    }

    #[test]
    fn denied_permission_surfaces_the_browser_message() {
        let mut rec = VoiceRecorder::new(MockCapture {
            permission_granted: false,
            ..MockCapture::default()
        });
        let err = rec.start().expect_err("denied");
        assert_eq!(
            err.to_string(),
            "Microphone access denied. Please enable permissions in your browser."
        );
        assert!(!rec.is_recording());
    }

    #[test]
    fn encoding_falls_back_down_the_preference_list() {
        let mut rec = VoiceRecorder::new(MockCapture {
            supported: vec!["audio/mp4", "audio/wav"],
            ..MockCapture::default()
        });
        rec.start().expect("granted");
        rec.stop();
        let name = rec.download_name(Utc::now()).expect("clip stored");
        assert!(name.starts_with("voice_note_"));
        assert!(name.ends_with(".mp4"));
    }

    #[test]
    fn ticking_and_labels() {
        let mut rec = recorder();
        rec.tick();
        assert_eq!(rec.elapsed_label(), "0:00", "idle ticks are ignored");

        rec.start().expect("granted");
        for _ in 0..65 {
            rec.tick();
        }
        assert_eq!(rec.elapsed_label(), "1:05");
        assert!(matches!(rec.start(), Err(DashboardError::AlreadyRecording)));
    }

    #[test]
    fn playback_requires_a_clip_and_toggles() {
        let mut rec = recorder();
        assert!(matches!(
            rec.toggle_playback(),
            Err(DashboardError::NoRecording)
        ));

        rec.start().expect("granted");
        rec.stop();
        assert!(rec.toggle_playback().expect("clip stored"));
        assert!(!rec.toggle_playback().expect("toggles off"));
    }

    #[test]
    fn delete_resets_everything() {
        let mut rec = recorder();
        rec.start().expect("granted");
        rec.tick();
        rec.stop();
        assert!(rec.clip().is_some());

        rec.delete();
        assert!(rec.clip().is_none());
        assert_eq!(rec.elapsed_label(), "0:00");
        assert!(!rec.is_playing());
    }

    #[tokio::test(start_paused = true)]
    async fn send_confirms_and_discards_the_clip() {
        let mut rec = recorder();
        assert!(matches!(
            rec.send("Kwame Mensah").await,
            Err(DashboardError::NoRecording)
        ));

        rec.start().expect("granted");
        rec.stop();
        let confirmation = rec.send("Kwame Mensah").await.expect("send completes");
        assert_eq!(confirmation, "Voice note sent successfully to Kwame Mensah!");
        assert!(rec.clip().is_none());
        assert!(rec.send_state.is_succeeded());
    }
}

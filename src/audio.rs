//! Audio playback.
//!
//! Sound is best-effort. A missing device gives a silent backend, a missing
//! cue file gives a silent cue, and a broken music track is logged and
//! skipped. None of it is ever reported back to game logic.

use crate::assets::{read_asset, AssetError};
use crate::config::GameConfig;
use crate::events::{Cue, EventQueue, GameEvent, Track};
use rodio::source::Buffered;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device: {0}")]
    Stream(#[from] rodio::StreamError),
    #[error("could not create audio sink: {0}")]
    Sink(#[from] rodio::PlayError),
    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// Something that can make noise on command
pub trait AudioOutput {
    fn play_cue(&mut self, cue: Cue);
    fn play_music(&mut self, track: Track);
    fn stop_music(&mut self);
}

/// Route every pending audio event to `audio`
pub fn dispatch(events: &mut EventQueue, audio: &mut dyn AudioOutput) {
    for event in events.drain() {
        match event {
            GameEvent::PlayCue(cue) => audio.play_cue(cue),
            GameEvent::PlayMusic(track) => audio.play_music(track),
            GameEvent::StopMusic => audio.stop_music(),
        }
    }
}

/// Backend used when no output device is available
#[derive(Default)]
pub struct SilentAudio;

impl AudioOutput for SilentAudio {
    fn play_cue(&mut self, _cue: Cue) {}
    fn play_music(&mut self, _track: Track) {}
    fn stop_music(&mut self) {}
}

type CueSound = Buffered<Decoder<Cursor<Vec<u8>>>>;

/// Decode a cue fully into memory so it can be replayed without disk access
fn load_cue(path: &Path) -> Result<CueSound, AssetError> {
    let bytes = read_asset(path)?;
    let decoder = Decoder::new(Cursor::new(bytes)).map_err(|e| AssetError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(decoder.buffered())
}

pub struct RodioAudio {
    // Dropping the stream stops all output, so it must outlive the sinks.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    cues: HashMap<Cue, CueSound>,
    music: Option<Sink>,
    sound_dir: PathBuf,
    master_volume: f32,
    music_volume: f32,
}

impl RodioAudio {
    /// Open the default output device and preload every cue
    pub fn open(config: &GameConfig) -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default()?;

        let mut cues = HashMap::new();
        for cue in Cue::ALL {
            match load_cue(&config.sound_path(cue.file_name())) {
                Ok(sound) => {
                    cues.insert(cue, sound);
                }
                Err(e) => log::warn!("{}; {:?} cue will be silent", e, cue),
            }
        }

        Ok(Self {
            _stream: stream,
            handle,
            cues,
            music: None,
            sound_dir: config.asset_dir.join("sounds"),
            master_volume: config.master_volume,
            music_volume: config.music_volume,
        })
    }

    fn start_track(&self, track: Track) -> Result<Sink, AudioError> {
        let path = self.sound_dir.join(track.file_name());
        let file = File::open(&path).map_err(|source| AssetError::Io {
            path: path.clone(),
            source,
        })?;
        let source = Decoder::new_looped(BufReader::new(file)).map_err(|e| AssetError::Decode {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let sink = Sink::try_new(&self.handle)?;
        sink.set_volume(self.master_volume * self.music_volume);
        sink.append(source);
        Ok(sink)
    }
}

impl AudioOutput for RodioAudio {
    fn play_cue(&mut self, cue: Cue) {
        let Some(sound) = self.cues.get(&cue) else {
            return;
        };
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.set_volume(self.master_volume);
                sink.append(sound.clone());
                sink.detach();
            }
            Err(e) => log::debug!("could not play {:?}: {}", cue, e),
        }
    }

    fn play_music(&mut self, track: Track) {
        self.stop_music();
        match self.start_track(track) {
            Ok(sink) => self.music = Some(sink),
            Err(e) => log::warn!("music {:?} unavailable: {}", track, e),
        }
    }

    fn stop_music(&mut self) {
        if let Some(sink) = self.music.take() {
            sink.stop();
        }
    }
}

/// Open the real audio backend, or a silent one if there is no device
pub fn open_audio(config: &GameConfig) -> Box<dyn AudioOutput> {
    match RodioAudio::open(config) {
        Ok(audio) => Box::new(audio),
        Err(e) => {
            log::warn!("{}; running without sound", e);
            Box::new(SilentAudio)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingAudio {
        log: Vec<String>,
    }

    impl AudioOutput for RecordingAudio {
        fn play_cue(&mut self, cue: Cue) {
            self.log.push(format!("cue {:?}", cue));
        }
        fn play_music(&mut self, track: Track) {
            self.log.push(format!("music {:?}", track));
        }
        fn stop_music(&mut self) {
            self.log.push("stop".to_string());
        }
    }

    #[test]
    fn test_dispatch_routes_in_order_and_drains() {
        let mut events = EventQueue::new();
        events.push(GameEvent::PlayMusic(Track::NameEntry));
        events.push(GameEvent::PlayCue(Cue::Drip));
        events.push(GameEvent::StopMusic);

        let mut audio = RecordingAudio::default();
        dispatch(&mut events, &mut audio);

        assert_eq!(audio.log, ["music NameEntry", "cue Drip", "stop"]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_silent_audio_swallows_everything() {
        let mut events = EventQueue::new();
        events.push(GameEvent::PlayCue(Cue::Deny));
        events.push(GameEvent::PlayMusic(Track::GameTheme));
        dispatch(&mut events, &mut SilentAudio);
        assert!(events.is_empty());
    }

    #[test]
    fn test_missing_cue_file_is_an_error_not_a_panic() {
        let err = load_cue(Path::new("assets/nope/deny.wav")).err().unwrap();
        assert!(matches!(err, AssetError::Io { .. }));
    }
}

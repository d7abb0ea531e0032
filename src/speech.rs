//! Text-to-Speech
//!
//! Reads recipe instructions aloud through the Web Speech API. A `Narrator`
//! owns its "currently speaking" slot; toggling while it speaks cancels.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    SpeechSynthesis, SpeechSynthesisErrorCode, SpeechSynthesisErrorEvent, SpeechSynthesisUtterance,
    SpeechSynthesisVoice,
};

use crate::config::SpeechSettings;
use crate::notify::use_notifier;

pub const READ_LABEL: &str = "🔊 Изчети стъпките";
pub const STOP_LABEL: &str = "⏸️ Спри четенето";
pub const MSG_UNSUPPORTED: &str = "Text-to-Speech не е поддържан от този браузър";
pub const MSG_SPEECH_FAILED: &str = "Грешка при четенето";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    #[error("speech synthesis is not supported")]
    Unsupported,
    #[error("speech synthesis failed: {0}")]
    Browser(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Idle,
    Speaking,
}

/// What a toggle should do to the synthesizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechCommand {
    Speak,
    Cancel,
}

/// Playback notifications delivered to the button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    Started,
    Ended,
    Cancelled,
    Failed,
}

impl PlaybackEvent {
    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackEvent::Started)
    }
}

pub fn button_label(playing: bool) -> &'static str {
    if playing {
        STOP_LABEL
    } else {
        READ_LABEL
    }
}

/// The speaking slot, decoupled from the browser
#[derive(Debug, Default)]
pub struct SpeechSlot {
    state: PlaybackState,
}

impl SpeechSlot {
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// `synth_speaking` is the synthesizer's own view; a slot that thinks it
    /// is speaking while the synthesizer is silent starts over.
    pub fn toggle(&mut self, synth_speaking: bool) -> SpeechCommand {
        if self.state == PlaybackState::Speaking && synth_speaking {
            self.state = PlaybackState::Idle;
            SpeechCommand::Cancel
        } else {
            self.state = PlaybackState::Speaking;
            SpeechCommand::Speak
        }
    }

    /// Playback ended or failed on its own
    pub fn finish(&mut self) {
        self.state = PlaybackState::Idle;
    }
}

/// Index of the first voice whose language starts with `prefix`
pub fn pick_voice<'a>(langs: impl IntoIterator<Item = &'a str>, prefix: &str) -> Option<usize> {
    langs.into_iter().position(|lang| lang.starts_with(prefix))
}

fn synthesizer() -> Result<SpeechSynthesis, SpeechError> {
    let window = web_sys::window().ok_or(SpeechError::Unsupported)?;
    let supported = js_sys::Reflect::has(&window, &JsValue::from_str("speechSynthesis")).unwrap_or(false);
    if !supported {
        return Err(SpeechError::Unsupported);
    }
    window.speech_synthesis().map_err(|_| SpeechError::Unsupported)
}

/// Ask for the voice list early; some browsers only fill it after
/// `voiceschanged` fires.
pub fn prime_voices() {
    if let Ok(synth) = synthesizer() {
        let _ = synth.get_voices();
        let reload = Closure::<dyn FnMut()>::new(move || {
            if let Ok(synth) = synthesizer() {
                let _ = synth.get_voices();
            }
        });
        synth.set_onvoiceschanged(Some(reload.as_ref().unchecked_ref()));
        reload.forget();
    }
}

type Handler = Closure<dyn FnMut(JsValue)>;

pub struct Narrator {
    settings: SpeechSettings,
    slot: Rc<RefCell<SpeechSlot>>,
    // Kept alive while their utterance can still call them
    handlers: RefCell<Vec<Handler>>,
}

impl Narrator {
    pub fn new(settings: SpeechSettings) -> Self {
        Self {
            settings,
            slot: Rc::new(RefCell::new(SpeechSlot::default())),
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Start reading `text`, or stop if this narrator is speaking
    pub fn toggle(&self, text: &str, on_event: impl Fn(PlaybackEvent) + Clone + 'static) -> Result<(), SpeechError> {
        let synth = synthesizer()?;

        let command = self.slot.borrow_mut().toggle(synth.speaking());
        match command {
            SpeechCommand::Cancel => {
                synth.cancel();
                on_event(PlaybackEvent::Cancelled);
                Ok(())
            }
            SpeechCommand::Speak => self.speak(&synth, text, on_event).map_err(|e| {
                self.slot.borrow_mut().finish();
                e
            }),
        }
    }

    fn speak(
        &self,
        synth: &SpeechSynthesis,
        text: &str,
        on_event: impl Fn(PlaybackEvent) + Clone + 'static,
    ) -> Result<(), SpeechError> {
        let utterance = SpeechSynthesisUtterance::new_with_text(text)
            .map_err(|e| SpeechError::Browser(format!("{:?}", e)))?;

        let voices: Vec<SpeechSynthesisVoice> = synth
            .get_voices()
            .iter()
            .filter_map(|v| v.dyn_into::<SpeechSynthesisVoice>().ok())
            .collect();
        let langs: Vec<String> = voices.iter().map(|v| v.lang()).collect();
        if let Some(idx) = pick_voice(langs.iter().map(String::as_str), &self.settings.voice_prefix) {
            utterance.set_voice(Some(&voices[idx]));
        }
        utterance.set_lang(&self.settings.lang);
        utterance.set_rate(self.settings.rate);
        utterance.set_pitch(self.settings.pitch);

        let started = {
            let on_event = on_event.clone();
            Handler::new(move |_: JsValue| on_event(PlaybackEvent::Started))
        };
        let ended = {
            let on_event = on_event.clone();
            let slot = self.slot.clone();
            Handler::new(move |_: JsValue| {
                slot.borrow_mut().finish();
                on_event(PlaybackEvent::Ended);
            })
        };
        let failed = {
            let slot = self.slot.clone();
            Handler::new(move |event: JsValue| {
                slot.borrow_mut().finish();
                // cancel() surfaces as an error event in some browsers
                let code = event.dyn_ref::<SpeechSynthesisErrorEvent>().map(|e| e.error());
                if matches!(code, Some(SpeechSynthesisErrorCode::Interrupted | SpeechSynthesisErrorCode::Canceled)) {
                    on_event(PlaybackEvent::Cancelled);
                } else {
                    log::error!("[TTS] playback failed: {:?}", code);
                    on_event(PlaybackEvent::Failed);
                }
            })
        };
        utterance.set_onstart(Some(started.as_ref().unchecked_ref()));
        utterance.set_onend(Some(ended.as_ref().unchecked_ref()));
        utterance.set_onerror(Some(failed.as_ref().unchecked_ref()));

        // The previous utterance has finished or been cancelled by now
        *self.handlers.borrow_mut() = vec![started, ended, failed];

        synth.speak(&utterance);
        Ok(())
    }
}

/// Button reading `text` aloud
#[component]
pub fn ReadAloudButton(#[prop(into)] text: String, settings: SpeechSettings) -> impl IntoView {
    let notifier = use_notifier();
    let narrator = StoredValue::new_local(Narrator::new(settings));
    let (playing, set_playing) = signal(false);

    let on_event = move |event: PlaybackEvent| {
        set_playing.set(event.is_playing());
        if event == PlaybackEvent::Failed {
            notifier.error(MSG_SPEECH_FAILED);
        }
    };

    let toggle = move |_: leptos::ev::MouseEvent| {
        let result = narrator.with_value(|n| n.toggle(&text, on_event));
        if let Err(err) = result {
            log::warn!("[TTS] {}", err);
            set_playing.set(false);
            match err {
                SpeechError::Unsupported => notifier.error(MSG_UNSUPPORTED),
                SpeechError::Browser(_) => notifier.error(MSG_SPEECH_FAILED),
            }
        }
    };

    view! {
        <button
            class=move || if playing.get() { "btn btn-tts playing" } else { "btn btn-tts" }
            on:click=toggle
        >
            {move || button_label(playing.get())}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_while_idle_speaks() {
        let mut slot = SpeechSlot::default();
        assert_eq!(slot.toggle(false), SpeechCommand::Speak);
        assert_eq!(slot.state(), PlaybackState::Speaking);
    }

    #[test]
    fn test_toggle_while_speaking_cancels() {
        let mut slot = SpeechSlot::default();
        slot.toggle(false);
        assert_eq!(slot.toggle(true), SpeechCommand::Cancel);
        assert_eq!(slot.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_stale_slot_starts_over() {
        let mut slot = SpeechSlot::default();
        slot.toggle(false);
        // synthesizer went quiet without an end event
        assert_eq!(slot.toggle(false), SpeechCommand::Speak);
        slot.finish();
        assert_eq!(slot.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_pick_voice_by_prefix() {
        let langs = ["en-US", "de-DE", "bg-BG", "bg"];
        assert_eq!(pick_voice(langs, "bg"), Some(2));
        assert_eq!(pick_voice(["en-US"], "bg"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(button_label(false), READ_LABEL);
        assert_eq!(button_label(true), STOP_LABEL);
        assert!(PlaybackEvent::Started.is_playing());
        assert!(!PlaybackEvent::Failed.is_playing());
    }
}

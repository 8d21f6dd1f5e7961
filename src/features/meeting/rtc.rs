//! Bindings to the external ConferenceKit browser SDK.
//!
//! The SDK owns the media session end to end (signaling, negotiation, track
//! management); this module only surfaces its connect/publish/attach surface
//! behind a small Rust wrapper. Callback closures live inside [`RoomHandle`]
//! so they stay valid for the life of the room and are released when the
//! user leaves.

use crate::app_lib::AppError;
use crate::features::meeting::types::ChatMessage;
use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::MediaStream;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ConferenceKit, js_name = RoomSession)]
    type RoomSession;

    #[wasm_bindgen(constructor, js_namespace = ConferenceKit, js_class = "RoomSession")]
    fn new(server_url: &str, token: &str) -> RoomSession;

    #[wasm_bindgen(method)]
    fn connect(this: &RoomSession) -> Promise;

    #[wasm_bindgen(method)]
    fn disconnect(this: &RoomSession);

    /// Resolves to the local camera+microphone `MediaStream`.
    #[wasm_bindgen(method, js_name = publishCamera)]
    fn publish_camera(this: &RoomSession) -> Promise;

    /// Resolves to the local screen-capture `MediaStream`.
    #[wasm_bindgen(method, js_name = startScreenShare)]
    fn start_screen_share(this: &RoomSession) -> Promise;

    #[wasm_bindgen(method, js_name = stopScreenShare)]
    fn stop_screen_share(this: &RoomSession);

    #[wasm_bindgen(method, js_name = setMicrophoneEnabled)]
    fn set_microphone_enabled(this: &RoomSession, enabled: bool);

    #[wasm_bindgen(method, js_name = setCameraEnabled)]
    fn set_camera_enabled(this: &RoomSession, enabled: bool);

    #[wasm_bindgen(method, js_name = sendData)]
    fn send_data(this: &RoomSession, payload: &str);

    #[wasm_bindgen(method, js_name = onTrack)]
    fn on_track(this: &RoomSession, callback: &js_sys::Function);

    #[wasm_bindgen(method, js_name = onData)]
    fn on_data(this: &RoomSession, callback: &js_sys::Function);

    #[wasm_bindgen(method, js_name = onParticipantLeft)]
    fn on_participant_left(this: &RoomSession, callback: &js_sys::Function);
}

fn map_sdk_error(context: &str, error: JsValue) -> AppError {
    let detail = error
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(&error, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| "unknown SDK error".to_string());
    AppError::Network(format!("{context}: {detail}"))
}

/// A connected meeting room. Dropping the handle drops the registered
/// callbacks, so call [`RoomHandle::leave`] first.
pub struct RoomHandle {
    session: RoomSession,
    track_callback: Option<Closure<dyn FnMut(MediaStream, String)>>,
    data_callback: Option<Closure<dyn FnMut(String)>>,
    left_callback: Option<Closure<dyn FnMut(String)>>,
}

impl RoomHandle {
    /// Connects to `room` on the meeting server and returns a live handle.
    pub async fn connect(server_url: &str, token: &str) -> Result<Self, AppError> {
        if server_url.trim().is_empty() {
            return Err(AppError::Config(
                "Meeting server is not configured.".to_string(),
            ));
        }

        let session = RoomSession::new(server_url, token);
        JsFuture::from(session.connect())
            .await
            .map_err(|err| map_sdk_error("Failed to join the meeting", err))?;

        Ok(Self {
            session,
            track_callback: None,
            data_callback: None,
            left_callback: None,
        })
    }

    /// Publishes camera and microphone; the returned stream is attached to
    /// the local preview element.
    pub async fn publish_camera(&self) -> Result<MediaStream, AppError> {
        let stream = JsFuture::from(self.session.publish_camera())
            .await
            .map_err(|err| map_sdk_error("Failed to publish camera", err))?;
        Ok(MediaStream::from(stream))
    }

    /// Starts screen capture. The returned future does not borrow the
    /// handle, so callers can await it outside the handle's storage cell.
    pub fn start_screen_share(
        &self,
    ) -> impl std::future::Future<Output = Result<MediaStream, AppError>> {
        let pending = JsFuture::from(self.session.start_screen_share());
        async move {
            let stream = pending
                .await
                .map_err(|err| map_sdk_error("Failed to share screen", err))?;
            Ok(MediaStream::from(stream))
        }
    }

    pub fn stop_screen_share(&self) {
        self.session.stop_screen_share();
    }

    pub fn set_muted(&self, muted: bool) {
        self.session.set_microphone_enabled(!muted);
    }

    pub fn set_camera_enabled(&self, enabled: bool) {
        self.session.set_camera_enabled(enabled);
    }

    /// Sends a chat message over the room data channel.
    pub fn send_chat(&self, message: &ChatMessage) -> Result<(), AppError> {
        let payload = serde_json::to_string(message)
            .map_err(|err| AppError::Serialization(format!("Failed to encode chat: {err}")))?;
        self.session.send_data(&payload);
        Ok(())
    }

    /// Registers the remote-track callback: `(stream, participant)`.
    pub fn on_remote_track(&mut self, mut callback: impl FnMut(MediaStream, String) + 'static) {
        let closure = Closure::new(move |stream: MediaStream, participant: String| {
            callback(stream, participant);
        });
        self.session.on_track(closure.as_ref().unchecked_ref());
        self.track_callback = Some(closure);
    }

    /// Registers the chat callback. Payloads that are not chat JSON are
    /// ignored; the channel is shared with future message kinds.
    pub fn on_chat(&mut self, mut callback: impl FnMut(ChatMessage) + 'static) {
        let closure = Closure::new(move |payload: String| {
            if let Ok(message) = serde_json::from_str::<ChatMessage>(&payload) {
                callback(message);
            }
        });
        self.session.on_data(closure.as_ref().unchecked_ref());
        self.data_callback = Some(closure);
    }

    /// Registers the participant-left callback with the participant name.
    pub fn on_participant_left(&mut self, mut callback: impl FnMut(String) + 'static) {
        let closure = Closure::new(move |participant: String| {
            callback(participant);
        });
        self.session
            .on_participant_left(closure.as_ref().unchecked_ref());
        self.left_callback = Some(closure);
    }

    /// Disconnects from the room.
    pub fn leave(&self) {
        self.session.disconnect();
    }
}

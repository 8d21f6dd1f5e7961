//! Video meeting room. Joins the room named in the URL with a grant from the
//! backend, publishes the local camera, and renders remote participants as
//! they arrive. The SDK handle and media streams are main-thread only, so
//! all of it lives in local storage signals.

use crate::app_lib::{config::AppConfig, theme::Theme, AppError};
use crate::components::{AppShell, Button, ErrorBanner, Spinner};
use crate::features::auth::guards::RequireAuth;
use crate::features::auth::state::use_auth;
use crate::features::meeting::client;
use crate::features::meeting::rtc::RoomHandle;
use crate::features::meeting::types::ChatMessage;
use crate::routes::paths;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params};
use leptos_router::params::Params;
use web_sys::MediaStream;

#[derive(Params, PartialEq, Clone)]
struct MeetingParams {
    room: Option<String>,
}

#[component]
pub fn MeetingRoomPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <MeetingRoom />
            </RequireAuth>
        </AppShell>
    }
}

#[derive(Clone, PartialEq)]
enum RoomPhase {
    Connecting,
    Connected,
    Failed(AppError),
}

#[component]
fn MeetingRoom() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let params = use_params::<MeetingParams>();
    let room_name = move || {
        params
            .get()
            .ok()
            .and_then(|params| params.room)
            .unwrap_or_default()
    };

    let phase = RwSignal::new(RoomPhase::Connecting);
    let room = StoredValue::new_local(None::<RoomHandle>);
    let remote_streams = RwSignal::new_local(Vec::<(String, MediaStream)>::new());
    let messages = RwSignal::new(Vec::<ChatMessage>::new());
    let (muted, set_muted) = signal(false);
    let (camera_on, set_camera_on) = signal(true);
    let (sharing, set_sharing) = signal(false);

    let local_video: NodeRef<html::Video> = NodeRef::new();

    Effect::new(move |_| {
        let name = room_name();
        if name.trim().is_empty() {
            return;
        }
        spawn_local(async move {
            match join_room(&name, remote_streams, messages, local_video).await {
                Ok(handle) => {
                    room.set_value(Some(handle));
                    phase.set(RoomPhase::Connected);
                }
                Err(err) => phase.set(RoomPhase::Failed(err)),
            }
        });
    });

    on_cleanup(move || {
        room.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.leave();
            }
        });
    });

    let toggle_mute = move |_| {
        let next = !muted.get_untracked();
        room.with_value(|handle| {
            if let Some(handle) = handle {
                handle.set_muted(next);
            }
        });
        set_muted.set(next);
    };

    let toggle_camera = move |_| {
        let next = !camera_on.get_untracked();
        room.with_value(|handle| {
            if let Some(handle) = handle {
                handle.set_camera_enabled(next);
            }
        });
        set_camera_on.set(next);
    };

    let toggle_share = move |_| {
        if sharing.get_untracked() {
            room.with_value(|handle| {
                if let Some(handle) = handle {
                    handle.stop_screen_share();
                }
            });
            set_sharing.set(false);
        } else {
            let share = room.with_value(|handle| {
                handle.as_ref().map(|handle| handle.start_screen_share())
            });
            if let Some(future) = share {
                spawn_local(async move {
                    if future.await.is_ok() {
                        set_sharing.set(true);
                    }
                });
            }
        }
    };

    let leave = move |_| {
        room.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.leave();
            }
        });
        navigate(paths::INTERVIEWS, Default::default());
    };

    let send_chat = Callback::new(move |body: String| {
        let sender = auth
            .username
            .get_untracked()
            .unwrap_or_else(|| "me".to_string());
        let message = ChatMessage {
            sender,
            body,
            sent_at_ms: crate::app_lib::clock::now_ms(),
        };
        let sent = room.with_value(|handle| match handle {
            Some(handle) => handle.send_chat(&message).is_ok(),
            None => false,
        });
        if sent {
            messages.update(|list| list.push(message));
        }
    });

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    {move || format!("Meeting: {}", room_name())}
                </h1>
                <button
                    type="button"
                    class="text-sm text-red-600 hover:text-red-800 dark:text-red-400"
                    on:click=leave
                >
                    "Leave"
                </button>
            </div>

            {move || match phase.get() {
                RoomPhase::Failed(err) => view! { <ErrorBanner error=err /> }.into_any(),
                RoomPhase::Connecting => view! {
                    <div class="py-12 text-center">
                        <Spinner />
                        <p class="mt-2 text-sm text-gray-500 dark:text-gray-400">
                            "Joining the room..."
                        </p>
                    </div>
                }
                .into_any(),
                RoomPhase::Connected => view! {
                    <div class="flex items-center gap-3">
                        <Button on_click=Callback::new(toggle_mute)>
                            {move || if muted.get() { "Unmute" } else { "Mute" }}
                        </Button>
                        <Button on_click=Callback::new(toggle_camera)>
                            {move || if camera_on.get() { "Camera off" } else { "Camera on" }}
                        </Button>
                        <Button on_click=Callback::new(toggle_share)>
                            {move || if sharing.get() { "Stop sharing" } else { "Share screen" }}
                        </Button>
                    </div>
                }
                .into_any(),
            }}

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-4">
                <div class="lg:col-span-2 space-y-4">
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <div class=format!("{} p-2", Theme::CARD)>
                            <video
                                node_ref=local_video
                                autoplay
                                muted
                                playsinline
                                class="w-full rounded bg-black aspect-video"
                            ></video>
                            <p class="mt-1 text-xs text-gray-500 dark:text-gray-400">"You"</p>
                        </div>
                        <For
                            each=move || remote_streams.get()
                            key=|(participant, _)| participant.clone()
                            children=|(participant, stream): (String, MediaStream)| {
                                view! { <RemoteVideo participant=participant stream=stream /> }
                            }
                        />
                    </div>
                </div>
                <ChatPanel messages=messages.into() on_send=send_chat />
            </div>
        </div>
    }
}

async fn join_room(
    name: &str,
    remote_streams: RwSignal<Vec<(String, MediaStream)>, LocalStorage>,
    messages: RwSignal<Vec<ChatMessage>>,
    local_video: NodeRef<html::Video>,
) -> Result<RoomHandle, AppError> {
    let grant = client::fetch_grant(name).await?;
    let server_url = grant
        .server_url
        .unwrap_or_else(|| AppConfig::load().meeting_server_url);

    let mut handle = RoomHandle::connect(&server_url, &grant.token).await?;

    handle.on_remote_track(move |stream, participant| {
        remote_streams.update(|list| {
            list.retain(|(existing, _)| *existing != participant);
            list.push((participant, stream));
        });
    });
    handle.on_participant_left(move |participant| {
        remote_streams.update(|list| list.retain(|(existing, _)| *existing != participant));
    });
    handle.on_chat(move |message| {
        messages.update(|list| list.push(message));
    });

    let local_stream = handle.publish_camera().await?;
    if let Some(video) = local_video.get_untracked() {
        video.set_src_object(Some(&local_stream));
    }

    Ok(handle)
}

#[component]
fn RemoteVideo(participant: String, stream: MediaStream) -> impl IntoView {
    let video: NodeRef<html::Video> = NodeRef::new();

    Effect::new(move |_| {
        if let Some(element) = video.get() {
            element.set_src_object(Some(&stream));
        }
    });

    view! {
        <div class=format!("{} p-2", Theme::CARD)>
            <video
                node_ref=video
                autoplay
                playsinline
                class="w-full rounded bg-black aspect-video"
            ></video>
            <p class="mt-1 text-xs text-gray-500 dark:text-gray-400">{participant}</p>
        </div>
    }
}

#[component]
fn ChatPanel(messages: Signal<Vec<ChatMessage>>, on_send: Callback<String>) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());

    let submit = move |event: leptos::ev::SubmitEvent| {
        event.prevent_default();
        let body = draft.get_untracked().trim().to_string();
        if body.is_empty() {
            return;
        }
        on_send.run(body);
        set_draft.set(String::new());
    };

    view! {
        <div class=format!("{} flex flex-col h-96", Theme::CARD)>
            <div class="px-4 py-3 border-b border-gray-200 dark:border-gray-700">
                <h2 class="text-sm font-medium text-gray-900 dark:text-white">"Chat"</h2>
            </div>
            <div class="flex-1 overflow-y-auto px-4 py-3 space-y-2">
                <For
                    each=move || messages.get()
                    key=|message| (message.sender.clone(), message.sent_at_ms)
                    children=|message: ChatMessage| {
                        view! {
                            <div class="text-sm">
                                <span class="font-medium text-gray-900 dark:text-white">
                                    {message.sender.clone()}
                                </span>
                                <span class="ml-2 text-gray-700 dark:text-gray-300">
                                    {message.body.clone()}
                                </span>
                            </div>
                        }
                    }
                />
            </div>
            <form class="flex gap-2 p-3 border-t border-gray-200 dark:border-gray-700" on:submit=submit>
                <input
                    type="text"
                    class=Theme::INPUT
                    placeholder="Type a message"
                    prop:value=move || draft.get()
                    on:input=move |event| set_draft.set(event_target_value(&event))
                />
                <Button button_type="submit">"Send"</Button>
            </form>
        </div>
    }
}

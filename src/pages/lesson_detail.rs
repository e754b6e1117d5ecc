//! Lesson detail page: version history plus every lesson workflow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `/lessons/:lesson_id` through `use_lesson`. Each workflow section owns
//! its form signals and calls one mutation from `crate::hooks`; messages are
//! set only after the request resolves.
//!
//! DESIGN
//! ======
//! Sections mount once the lesson first loads and stay mounted across
//! background refetches, so form input and notices survive invalidation.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::notice::{Notice, NoticeLine};
use crate::components::version_card::VersionCard;
use crate::hooks::classroom::{self, use_classroom_connection, use_classroom_pushes};
use crate::hooks::lessons::{create_share, create_version, differentiate, restore_version, use_lesson};
use crate::hooks::query::use_cache;
use crate::net::api;
use crate::net::types::{DifferentiationAudience, ExportFormat, LessonDetail, ShareCreateResponse};
use crate::state::lesson_detail::{
    ASSIGNMENT_POSTED, CONNECT_ERROR, CONNECTED, DEFAULT_SHARE_HOURS, DIFFERENTIATE_ERROR, DiffForm, EXPORT_ERROR,
    PUSH_ERROR, PushForm, RESTORE_ERROR, SHARE_ERROR, VERSION_SAVE_ERROR, VERSION_STATUSES, VersionForm,
    differentiate_success, export_button_label, export_downloaded_message, export_filename, gdoc_ready_message,
    is_current, parse_share_expiry, sort_versions_desc, try_begin_export,
};
use crate::state::query_cache::QueryState;
use crate::util::browser;
use crate::util::format::format_timestamp;

#[component]
pub fn LessonDetailPage() -> impl IntoView {
    let params = use_params_map();
    let lesson_id = Signal::derive(move || params.read().get("lesson_id").unwrap_or_default());
    let query = use_lesson(move || lesson_id.get());
    let detail = Memo::new(move |_| query.get().into_data());

    view! {
        <section class="lesson-detail-page">
            <a href="/lessons" class="back-link">"← Back to lessons"</a>
            <Show
                when=move || detail.with(Option::is_some)
                fallback=move || {
                    if matches!(query.get(), QueryState::Failed(_)) {
                        view! {
                            <div class="page-error">
                                <p>"Unable to load this lesson."</p>
                                <a href="/lessons" class="button">"Go back"</a>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! { <p class="page-status">"Loading lesson…"</p> }.into_any()
                    }
                }
            >
                <LessonHeader detail=detail />
                <NewVersionSection lesson_id=lesson_id />
                <DifferentiateSection lesson_id=lesson_id />
                <ShareSection lesson_id=lesson_id />
                <VersionHistory lesson_id=lesson_id detail=detail />
                <ExportSection lesson_id=lesson_id detail=detail />
                <ClassroomSection lesson_id=lesson_id />
            </Show>
        </section>
    }
}

#[component]
fn LessonHeader(detail: Memo<Option<LessonDetail>>) -> impl IntoView {
    move || {
        detail.get().map(|d| {
            let meta = format!("Grade {} · {}", d.summary.grade_level, d.summary.subject);
            view! {
                <header class="lesson-header">
                    <div>
                        <h1>{d.summary.title}</h1>
                        <p class="lesson-header__meta">{meta}</p>
                    </div>
                    <span class="lesson-header__status">{d.summary.status}</span>
                    <ul class="lesson-header__tags">
                        {d.summary.tags.into_iter().map(|tag| view! { <li class="tag">{tag}</li> }).collect_view()}
                    </ul>
                </header>
            }
        })
    }
}

#[component]
fn NewVersionSection(lesson_id: Signal<String>) -> impl IntoView {
    let cache = use_cache();
    let form = RwSignal::new(VersionForm::default());
    let saving = RwSignal::new(false);
    let failed = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        saving.set(true);
        failed.set(false);
        let payload = form.get_untracked().to_payload();
        let id = lesson_id.get_untracked();
        leptos::task::spawn_local(async move {
            match create_version(cache, id, payload).await {
                Ok(_) => form.set(VersionForm::default()),
                Err(e) => {
                    leptos::logging::error!("create version failed: {e}");
                    failed.set(true);
                }
            }
            saving.set(false);
        });
    };

    view! {
        <section class="panel">
            <h2>"New version"</h2>
            <form class="version-form" on:submit=on_submit>
                <label>
                    "Objective"
                    <textarea
                        rows="3"
                        placeholder="Students will..."
                        prop:value=move || form.get().objective
                        on:input=move |ev| form.update(|f| f.objective = event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Teacher notes (Markdown)"
                    <textarea
                        rows="6"
                        placeholder="### Introduction"
                        prop:value=move || form.get().teacher_script_md
                        on:input=move |ev| form.update(|f| f.teacher_script_md = event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Status"
                    <select
                        prop:value=move || form.get().status
                        on:change=move |ev| form.update(|f| f.status = event_target_value(&ev))
                    >
                        {VERSION_STATUSES
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                </label>
                <button type="submit" class="button" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving…" } else { "Save version" }}
                </button>
                <Show when=move || failed.get()>
                    <p class="notice notice--error">{VERSION_SAVE_ERROR}</p>
                </Show>
            </form>
        </section>
    }
}

#[component]
fn DifferentiateSection(lesson_id: Signal<String>) -> impl IntoView {
    let cache = use_cache();
    let form = RwSignal::new(DiffForm::default());
    let pending = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        notice.set(None);
        pending.set(true);
        let payload = form.get_untracked().to_payload();
        let id = lesson_id.get_untracked();
        leptos::task::spawn_local(async move {
            let audience = payload.audience;
            match differentiate(cache, id, payload).await {
                Ok(_) => {
                    notice.set(Some(Notice::Success(differentiate_success(audience))));
                    form.update(|f| f.notes.clear());
                }
                Err(e) => {
                    leptos::logging::error!("differentiate failed: {e}");
                    notice.set(Some(Notice::Error(DIFFERENTIATE_ERROR.to_owned())));
                }
            }
            pending.set(false);
        });
    };

    view! {
        <section class="panel">
            <h2>"Differentiate"</h2>
            <form class="diff-form" on:submit=on_submit>
                <label>
                    "Audience"
                    <select
                        prop:value=move || form.get().audience.as_str()
                        on:change=move |ev| {
                            let audience = DifferentiationAudience::parse(&event_target_value(&ev)).unwrap_or_default();
                            form.update(|f| f.audience = audience);
                        }
                    >
                        {DifferentiationAudience::ALL
                            .into_iter()
                            .map(|a| view! { <option value=a.as_str()>{a.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Notes (optional)"
                    <textarea
                        rows="3"
                        placeholder="Add context about the student's needs or focus areas."
                        prop:value=move || form.get().notes
                        on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                    ></textarea>
                </label>
                <button type="submit" class="button" disabled=move || pending.get()>
                    {move || if pending.get() { "Creating…" } else { "Create differentiated version" }}
                </button>
                <NoticeLine notice=notice />
            </form>
        </section>
    }
}

#[component]
fn ShareSection(lesson_id: Signal<String>) -> impl IntoView {
    let expiry = RwSignal::new(DEFAULT_SHARE_HOURS.to_owned());
    let pending = RwSignal::new(false);
    let result = RwSignal::new(None::<ShareCreateResponse>);
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        error.set(None);
        let request = match parse_share_expiry(&expiry.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        pending.set(true);
        let id = lesson_id.get_untracked();
        leptos::task::spawn_local(async move {
            match create_share(id, request).await {
                Ok(share) => result.set(Some(share)),
                Err(e) => {
                    leptos::logging::error!("share link failed: {e}");
                    result.set(None);
                    error.set(Some(SHARE_ERROR));
                }
            }
            pending.set(false);
        });
    };

    view! {
        <section class="panel">
            <h2>"Share"</h2>
            <p>"Generate a read-only link to share the latest version with colleagues or administrators."</p>
            <form class="share-form" on:submit=on_submit>
                <label>
                    "Expires in (hours)"
                    <input
                        type="number"
                        min="1"
                        placeholder="72"
                        prop:value=move || expiry.get()
                        on:input=move |ev| expiry.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="button" disabled=move || pending.get()>
                    {move || if pending.get() { "Generating…" } else { "Generate link" }}
                </button>
            </form>
            {move || error.get().map(|message| view! { <p class="notice notice--error">{message}</p> })}
            {move || {
                result
                    .get()
                    .map(|share| {
                        let expires = share.expires_at.as_deref().map(|at| format!("Expires {}", format_timestamp(at)));
                        view! {
                            <div class="share-result">
                                <p>
                                    "Share URL: "
                                    <a href=share.url.clone() target="_blank" rel="noreferrer">{share.url.clone()}</a>
                                </p>
                                {expires.map(|text| view! { <p class="share-result__expires">{text}</p> })}
                            </div>
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn VersionHistory(lesson_id: Signal<String>, detail: Memo<Option<LessonDetail>>) -> impl IntoView {
    let cache = use_cache();
    let restoring = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let versions = Memo::new(move |_| {
        detail.with(|d| {
            d.as_ref().map_or_else(Vec::new, |d| {
                sort_versions_desc(&d.versions)
                    .into_iter()
                    .map(|v| {
                        let current = is_current(d, &v);
                        (v, current)
                    })
                    .collect::<Vec<_>>()
            })
        })
    });

    let on_restore = Callback::new(move |version_no: i64| {
        if restoring.get_untracked() {
            return;
        }
        restoring.set(true);
        notice.set(None);
        let id = lesson_id.get_untracked();
        leptos::task::spawn_local(async move {
            if let Err(e) = restore_version(cache, id, version_no).await {
                leptos::logging::error!("restore failed: {e}");
                notice.set(Some(Notice::Error(RESTORE_ERROR.to_owned())));
            }
            restoring.set(false);
        });
    });

    view! {
        <section class="panel">
            <h2>"Version history"</h2>
            <NoticeLine notice=notice />
            <div class="version-list">
                <For
                    each=move || versions.get()
                    key=|(v, current)| (v.id.clone(), *current)
                    children=move |(version, current)| {
                        view! {
                            <VersionCard version=version current=current on_restore=on_restore restoring=restoring />
                        }
                    }
                />
            </div>
        </section>
    }
}

/// Run one export and produce its success message.
async fn run_export(lesson_id: &str, format: ExportFormat, title: Option<&str>) -> Result<String, String> {
    if format.is_binary() {
        let bytes = api::download_lesson_export(lesson_id, format)
            .await
            .map_err(|e| e.to_string())?;
        browser::download_bytes(&bytes, &export_filename(title, format), format.mime_type())?;
        Ok(export_downloaded_message(format))
    } else {
        let doc = api::fetch_gdoc_export(lesson_id).await.map_err(|e| e.to_string())?;
        Ok(gdoc_ready_message(&doc.title))
    }
}

#[component]
fn ExportSection(lesson_id: Signal<String>, detail: Memo<Option<LessonDetail>>) -> impl IntoView {
    let exporting = RwSignal::new(None::<ExportFormat>);
    let message = RwSignal::new(None::<String>);

    let on_export = move |format: ExportFormat| {
        let mut claimed = false;
        exporting.update(|slot| claimed = try_begin_export(slot, format));
        if !claimed {
            return;
        }
        message.set(None);
        let id = lesson_id.get_untracked();
        let title = detail.with_untracked(|d| d.as_ref().map(|d| d.summary.title.clone()));
        leptos::task::spawn_local(async move {
            match run_export(&id, format, title.as_deref()).await {
                Ok(text) => message.set(Some(text)),
                Err(e) => {
                    leptos::logging::error!("export {} failed: {e}", format.as_str());
                    message.set(Some(EXPORT_ERROR.to_owned()));
                }
            }
            exporting.set(None);
        });
    };

    view! {
        <section class="panel">
            <h2>"Export"</h2>
            <div class="export-buttons">
                {ExportFormat::ALL
                    .into_iter()
                    .map(|format| {
                        view! {
                            <button
                                type="button"
                                class="button button--ghost"
                                disabled=move || exporting.get().is_some()
                                on:click=move |_| on_export(format)
                            >
                                {move || export_button_label(format, exporting.get())}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || message.get().map(|text| view! { <p class="export-message">{text}</p> })}
        </section>
    }
}

#[component]
fn ClassroomSection(lesson_id: Signal<String>) -> impl IntoView {
    let cache = use_cache();
    let connection = use_classroom_connection();
    let pushes = use_classroom_pushes(move || lesson_id.get());
    let connecting = RwSignal::new(false);
    let connect_notice = RwSignal::new(None::<Notice>);
    let form = RwSignal::new(PushForm::default());
    let posting = RwSignal::new(false);
    let push_notice = RwSignal::new(None::<Notice>);

    let on_connect = move |_| {
        if connecting.get() {
            return;
        }
        connecting.set(true);
        connect_notice.set(None);
        leptos::task::spawn_local(async move {
            match classroom::connect(cache).await {
                Ok(_) => connect_notice.set(Some(Notice::Success(CONNECTED.to_owned()))),
                Err(e) => {
                    leptos::logging::error!("classroom connect failed: {e}");
                    connect_notice.set(Some(Notice::Error(CONNECT_ERROR.to_owned())));
                }
            }
            connecting.set(false);
        });
    };

    let on_push = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if posting.get() {
            return;
        }
        let request = match form.get_untracked().to_request(&lesson_id.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                push_notice.set(Some(Notice::Error(message.to_owned())));
                return;
            }
        };
        posting.set(true);
        push_notice.set(None);
        leptos::task::spawn_local(async move {
            match classroom::push_assignment(cache, request).await {
                Ok(_) => {
                    form.set(PushForm::default());
                    push_notice.set(Some(Notice::Success(ASSIGNMENT_POSTED.to_owned())));
                }
                Err(e) => {
                    leptos::logging::error!("classroom push failed: {e}");
                    push_notice.set(Some(Notice::Error(PUSH_ERROR.to_owned())));
                }
            }
            posting.set(false);
        });
    };

    view! {
        <section class="panel">
            <h2>"Google Classroom"</h2>
            <div class="classroom-connect">
                <button type="button" class="button" disabled=move || connecting.get() on:click=on_connect>
                    {move || if connecting.get() { "Connecting…" } else { "Connect Classroom" }}
                </button>
                {move || {
                    connection
                        .get()
                        .map(|c| view! { <span class="classroom-connect__status">{format!("Linked via {}", c.provider)}</span> })
                }}
                <NoticeLine notice=connect_notice />
            </div>
            <form class="push-form" on:submit=on_push>
                <label>
                    "Course ID"
                    <input
                        required
                        prop:value=move || form.get().course_id
                        on:input=move |ev| form.update(|f| f.course_id = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Topic ID"
                    <input
                        prop:value=move || form.get().topic_id
                        on:input=move |ev| form.update(|f| f.topic_id = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Due Date"
                    <input
                        type="datetime-local"
                        prop:value=move || form.get().due_date
                        on:input=move |ev| form.update(|f| f.due_date = event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="button" disabled=move || posting.get()>
                    {move || if posting.get() { "Posting…" } else { "Post Assignment" }}
                </button>
                <NoticeLine notice=push_notice />
            </form>
            <ul class="push-list">
                {move || {
                    pushes
                        .get()
                        .into_iter()
                        .map(|push| {
                            let when = format_timestamp(&push.created_at);
                            let external = push.external_assignment_id.unwrap_or_default();
                            view! {
                                <li class="push-list__item">
                                    <span class="push-list__status">{push.status}</span>
                                    <span class="push-list__external">{external}</span>
                                    <span class="push-list__created">{when}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}

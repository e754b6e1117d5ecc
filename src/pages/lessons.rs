//! Lessons page: filterable list plus the create-lesson form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::lesson_card::LessonCard;
use crate::components::notice::{Notice, NoticeLine};
use crate::hooks::lessons::{create_lesson, use_lessons};
use crate::hooks::query::use_cache;
use crate::net::api::LessonFilters;
use crate::state::lessons::{CREATE_ERROR, FilterInputs, NewLessonForm};
use crate::state::query_cache::QueryState;

#[component]
pub fn LessonsPage() -> impl IntoView {
    let cache = use_cache();
    let navigate = use_navigate();

    let inputs = RwSignal::new(FilterInputs::default());
    let filters = RwSignal::new(LessonFilters::default());
    let lessons = use_lessons(move || filters.get());

    let show_create = RwSignal::new(false);
    let form = RwSignal::new(NewLessonForm::default());
    let saving = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);
    let created_id = RwSignal::new(None::<String>);

    Effect::new(move || {
        if let Some(lesson_id) = created_id.get() {
            created_id.set(None);
            navigate(&format!("/lessons/{lesson_id}"), NavigateOptions::default());
        }
    });

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        filters.set(inputs.get_untracked().to_filters());
    };
    let on_clear = move |_| {
        inputs.set(FilterInputs::default());
        filters.set(LessonFilters::default());
    };

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let payload = match form.get_untracked().to_payload() {
            Ok(payload) => payload,
            Err(message) => {
                notice.set(Some(Notice::Error(message.to_owned())));
                return;
            }
        };
        notice.set(None);
        saving.set(true);
        leptos::task::spawn_local(async move {
            match create_lesson(cache, payload).await {
                Ok(lesson) => {
                    form.set(NewLessonForm::default());
                    show_create.set(false);
                    created_id.set(Some(lesson.summary.id));
                }
                Err(e) => {
                    leptos::logging::error!("create lesson failed: {e}");
                    notice.set(Some(Notice::Error(CREATE_ERROR.to_owned())));
                }
            }
            saving.set(false);
        });
    };

    view! {
        <section class="lessons-page">
            <header class="page-header">
                <h1>"Lessons"</h1>
                <button type="button" class="button" on:click=move |_| show_create.update(|v| *v = !*v)>
                    "Create lesson"
                </button>
            </header>

            <Show when=move || show_create.get()>
                <form class="lesson-form" on:submit=on_create>
                    <label>
                        "Title"
                        <input
                            prop:value=move || form.get().title
                            on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Subject"
                        <input
                            prop:value=move || form.get().subject
                            on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Grade level"
                        <input
                            prop:value=move || form.get().grade_level
                            on:input=move |ev| form.update(|f| f.grade_level = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Language"
                        <input
                            prop:value=move || form.get().language
                            on:input=move |ev| form.update(|f| f.language = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Tags"
                        <input
                            placeholder="comma, separated"
                            prop:value=move || form.get().tags
                            on:input=move |ev| form.update(|f| f.tags = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Objective"
                        <textarea
                            rows="3"
                            prop:value=move || form.get().objective
                            on:input=move |ev| form.update(|f| f.objective = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label>
                        "Duration (minutes)"
                        <input
                            type="number"
                            min="1"
                            prop:value=move || form.get().duration_minutes
                            on:input=move |ev| form.update(|f| f.duration_minutes = event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" class="button" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving…" } else { "Save lesson" }}
                    </button>
                    <NoticeLine notice=notice />
                </form>
            </Show>

            <form class="filter-bar" on:submit=on_filter>
                <input
                    placeholder="Subject"
                    prop:value=move || inputs.get().subject
                    on:input=move |ev| inputs.update(|i| i.subject = event_target_value(&ev))
                />
                <input
                    placeholder="Grade level"
                    prop:value=move || inputs.get().grade_level
                    on:input=move |ev| inputs.update(|i| i.grade_level = event_target_value(&ev))
                />
                <input
                    placeholder="Tags (comma separated)"
                    prop:value=move || inputs.get().tags
                    on:input=move |ev| inputs.update(|i| i.tags = event_target_value(&ev))
                />
                <button type="submit" class="button">"Apply filters"</button>
                <button type="button" class="button button--ghost" on:click=on_clear>"Clear"</button>
            </form>

            {move || match lessons.get() {
                QueryState::Disabled | QueryState::Loading => view! { <p class="page-status">"Loading lessons…"</p> }.into_any(),
                QueryState::Failed(_) => view! { <p class="page-error">"Unable to load lessons."</p> }.into_any(),
                QueryState::Ready(list) if list.is_empty() => {
                    view! { <p class="page-status">"No lessons yet."</p> }.into_any()
                }
                QueryState::Ready(list) => {
                    view! {
                        <div class="lesson-grid">
                            {list.into_iter().map(|lesson| view! { <LessonCard lesson=lesson /> }).collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

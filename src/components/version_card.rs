//! One entry in a lesson's version history.
//!
//! DESIGN
//! ======
//! The current version is badged and offers no restore; every other version
//! exposes a restore button wired to the page's restore workflow.

use leptos::prelude::*;

use crate::net::types::LessonVersion;
use crate::util::format::{format_duration, format_timestamp};
use crate::util::markdown::render_markdown_html;

#[component]
pub fn VersionCard(
    version: LessonVersion,
    current: bool,
    on_restore: Callback<i64>,
    #[prop(into)] restoring: Signal<bool>,
) -> impl IntoView {
    let version_no = version.version_no;
    let created = format!("Created {}", format_timestamp(&version.created_at));
    let duration = format_duration(version.duration_minutes);
    let script_html = version.teacher_script_md.as_deref().map(render_markdown_html);

    view! {
        <article class="version-card" class:version-card--current=current>
            <header class="version-card__header">
                <div>
                    <h3>{format!("Version {version_no}")}</h3>
                    <p class="version-card__created">{created}</p>
                </div>
                {if current {
                    view! { <span class="version-card__badge">"Current"</span> }.into_any()
                } else {
                    view! {
                        <button
                            type="button"
                            class="version-card__restore"
                            disabled=move || restoring.get()
                            on:click=move |_| on_restore.run(version_no)
                        >
                            "Restore"
                        </button>
                    }
                        .into_any()
                }}
            </header>
            {version.objective.map(|objective| view! { <p class="version-card__objective">{objective}</p> })}
            {duration.map(|d| view! { <p class="version-card__duration">{d}</p> })}
            {script_html.map(|html| view! { <div class="version-card__script markdown-body" inner_html=html></div> })}
        </article>
    }
}

//! Card for one lesson in the list.

use leptos::prelude::*;

use crate::net::types::LessonSummary;
use crate::util::format::format_timestamp;

#[component]
pub fn LessonCard(lesson: LessonSummary) -> impl IntoView {
    let href = format!("/lessons/{}", lesson.id);
    let meta = format!("Grade {} · {}", lesson.grade_level, lesson.subject);
    let updated = format!("Updated {}", format_timestamp(&lesson.updated_at));

    view! {
        <article class="lesson-card">
            <a href=href class="lesson-card__title">{lesson.title}</a>
            <p class="lesson-card__meta">{meta}</p>
            <span class="lesson-card__status">{lesson.status}</span>
            <ul class="lesson-card__tags">
                {lesson.tags.into_iter().map(|tag| view! { <li class="tag">{tag}</li> }).collect_view()}
            </ul>
            <p class="lesson-card__updated">{updated}</p>
        </article>
    }
}

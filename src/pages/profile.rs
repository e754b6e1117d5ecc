//! Profile page: display name and teaching preferences.

use leptos::prelude::*;

use crate::components::notice::{Notice, NoticeLine};
use crate::hooks::profile::update_profile;
use crate::hooks::query::use_cache;
use crate::hooks::session::use_auth;
use crate::state::profile::{PROFILE_ERROR, PROFILE_SAVED, ProfileForm, user_locale};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let cache = use_cache();
    let auth = use_auth();
    let form = RwSignal::new(ProfileForm::from_user(auth.user().as_ref()));
    let saving = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        notice.set(None);
        saving.set(true);
        let payload = form.get_untracked().to_payload(auth.user().as_ref());
        leptos::task::spawn_local(async move {
            match update_profile(cache, payload).await {
                Ok(_) => notice.set(Some(Notice::Success(PROFILE_SAVED.to_owned()))),
                Err(e) => {
                    leptos::logging::error!("profile update failed: {e}");
                    notice.set(Some(Notice::Error(PROFILE_ERROR.to_owned())));
                }
            }
            saving.set(false);
        });
    };

    let email = move || auth.state().get().user.map(|u| u.email).unwrap_or_default();
    let role = move || {
        auth.state()
            .get()
            .user
            .map_or_else(|| "teacher".to_owned(), |u| u.primary_role().to_owned())
    };
    let locale = move || user_locale(auth.state().get().user.as_ref()).to_owned();

    view! {
        <section class="profile-page">
            <header class="page-header">
                <h1>"Your Profile"</h1>
                <p>"Update your preferences so LessonGen can personalise lesson suggestions."</p>
            </header>
            <form class="profile-form" on:submit=on_submit>
                <label>
                    "Full name"
                    <input
                        type="text"
                        placeholder="Taylor Teacher"
                        prop:value=move || form.get().full_name
                        on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Preferred subjects"
                    <input
                        placeholder="Science, Mathematics"
                        prop:value=move || form.get().subjects
                        on:input=move |ev| form.update(|f| f.subjects = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Preferred grade levels"
                    <input
                        placeholder="4, 5"
                        prop:value=move || form.get().grades
                        on:input=move |ev| form.update(|f| f.grades = event_target_value(&ev))
                    />
                </label>
                <dl class="profile-facts">
                    <dt>"Email"</dt>
                    <dd>{email}</dd>
                    <dt>"Role"</dt>
                    <dd>{role}</dd>
                    <dt>"Locale"</dt>
                    <dd>{locale}</dd>
                </dl>
                <button type="submit" class="button" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving…" } else { "Save profile" }}
                </button>
                <NoticeLine notice=notice />
            </form>
        </section>
    }
}

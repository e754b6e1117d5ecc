//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::app_layout::AppLayout;
use crate::hooks::session::provide_auth;
use crate::pages::{
    dashboard::DashboardPage, lesson_detail::LessonDetailPage, lessons::LessonsPage, login::LoginPage,
    not_found::NotFoundPage, profile::ProfilePage,
};
use crate::state::query_cache::QueryCache;
use crate::util::auth::{HOME_PATH, RouteAccess, RouteGuard};

/// Root application component.
///
/// Provides the shared query cache and auth session, then sets up
/// client-side routing with every page behind a [`RouteGuard`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cache = RwSignal::new(QueryCache::default());
    provide_context(cache);
    provide_auth();

    view! {
        <Title text="LessonGen"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <RouteGuard access=RouteAccess::LoginOnly><LoginPage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! {
                        <RouteGuard access=RouteAccess::Protected>
                            <AppLayout><DashboardPage/></AppLayout>
                        </RouteGuard>
                    }
                />
                <Route
                    path=StaticSegment("lessons")
                    view=|| view! {
                        <RouteGuard access=RouteAccess::Protected>
                            <AppLayout><LessonsPage/></AppLayout>
                        </RouteGuard>
                    }
                />
                <Route
                    path=(StaticSegment("lessons"), ParamSegment("lesson_id"))
                    view=|| view! {
                        <RouteGuard access=RouteAccess::Protected>
                            <AppLayout><LessonDetailPage/></AppLayout>
                        </RouteGuard>
                    }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! {
                        <RouteGuard access=RouteAccess::Protected>
                            <AppLayout><ProfilePage/></AppLayout>
                        </RouteGuard>
                    }
                />
            </Routes>
        </Router>
    }
}

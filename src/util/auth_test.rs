use super::*;

#[test]
fn loading_waits_on_every_route() {
    assert_eq!(gate(SessionStatus::Loading, RouteAccess::Protected), GateDecision::Wait);
    assert_eq!(gate(SessionStatus::Loading, RouteAccess::LoginOnly), GateDecision::Wait);
}

#[test]
fn protected_routes_render_only_when_authenticated() {
    for status in [SessionStatus::Loading, SessionStatus::Authenticated, SessionStatus::Unauthenticated] {
        let renders = gate(status, RouteAccess::Protected) == GateDecision::Render;
        assert_eq!(renders, status == SessionStatus::Authenticated, "status {status:?}");
    }
}

#[test]
fn signed_out_user_is_sent_to_login() {
    assert_eq!(
        gate(SessionStatus::Unauthenticated, RouteAccess::Protected),
        GateDecision::Redirect("/login")
    );
    assert_eq!(gate(SessionStatus::Unauthenticated, RouteAccess::LoginOnly), GateDecision::Render);
}

#[test]
fn signed_in_user_skips_login() {
    assert_eq!(
        gate(SessionStatus::Authenticated, RouteAccess::LoginOnly),
        GateDecision::Redirect("/dashboard")
    );
}

use super::*;

#[test]
fn ignore_policy_never_signs_out() {
    let err = ApiError::Status { status: 401, message: None };
    assert!(!should_sign_out(AuthFailurePolicy::Ignore, &err));
}

#[test]
fn logout_policy_signs_out_on_401_only() {
    assert!(should_sign_out(AuthFailurePolicy::Logout, &ApiError::Status { status: 401, message: None }));
    assert!(!should_sign_out(AuthFailurePolicy::Logout, &ApiError::Status { status: 500, message: None }));
    assert!(!should_sign_out(AuthFailurePolicy::Logout, &ApiError::Transport("offline".into())));
}

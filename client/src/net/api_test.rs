use super::*;

#[test]
fn session_from_login_keeps_typed_email_and_api_name() {
    let resp = LoginResponse {
        token: "abc".to_owned(),
        admin_id: Some(3),
        name: Some("Mona".to_owned()),
        message: Some("Login successful".to_owned()),
    };
    let session = session_from_login(resp, "  mona@example.com ");
    assert_eq!(session.token, "abc");
    assert_eq!(session.profile.admin_id, Some(3));
    assert_eq!(session.profile.name, "Mona");
    assert_eq!(session.profile.email, "mona@example.com");
}

#[test]
fn session_from_login_without_name_falls_back_in_header() {
    let resp = LoginResponse { token: "t".to_owned(), ..LoginResponse::default() };
    let session = session_from_login(resp, "a@x.com");
    assert_eq!(session.profile.display_name(), "Admin");
}

#[test]
fn login_response_decodes_api_body() {
    let resp: LoginResponse = serde_json::from_str(
        r#"{"token":"abc","admin_id":1,"name":"A","message":"Login successful"}"#,
    )
    .unwrap();
    assert_eq!(resp.token, "abc");
    assert_eq!(resp.name.as_deref(), Some("A"));
}

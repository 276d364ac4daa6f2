use super::*;

#[test]
fn validate_login_input_accepts_all_fields() {
    let request = validate_login_input("T01", "teller1@example.com", "correct").unwrap();
    assert_eq!(request.terminal_id, "T01");
    assert_eq!(request.username, "teller1@example.com");
    assert_eq!(request.password, "correct");
}

#[test]
fn validate_login_input_requires_every_field() {
    assert_eq!(
        validate_login_input("", "teller1@example.com", "correct"),
        Err("All fields are required")
    );
    assert_eq!(validate_login_input("T01", "", "correct"), Err("All fields are required"));
    assert_eq!(
        validate_login_input("T01", "teller1@example.com", ""),
        Err("All fields are required")
    );
}

#[test]
fn validate_login_input_keeps_values_untrimmed() {
    let request = validate_login_input(" T01 ", "u", " p ").unwrap();
    assert_eq!(request.terminal_id, " T01 ");
    assert_eq!(request.password, " p ");
}

#[test]
fn submit_label_reflects_loading() {
    assert_eq!(submit_label(false), "Login");
    assert_eq!(submit_label(true), "Logging in...");
}

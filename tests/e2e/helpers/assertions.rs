use serde_json::Value;
use uuid::Uuid;

/// Shape shared by every problem response
pub fn assert_problem_response(problem: &Value, expected_status: u16) {
    assert_eq!(problem.get("status").and_then(|v| v.as_u64()), Some(expected_status as u64));
    assert!(problem.get("title").and_then(|v| v.as_str()).is_some());
    assert!(problem.get("detail").and_then(|v| v.as_str()).is_some());
    assert!(problem.get("timestamp").and_then(|v| v.as_str()).is_some());

    let error_id = problem
        .get("errorId")
        .and_then(|v| v.as_str())
        .expect("Missing errorId");
    assert!(Uuid::parse_str(error_id).is_ok(), "errorId is not a UUID: {}", error_id);
}

/// Pointers of the problem's field errors, sorted
pub fn problem_pointers(problem: &Value) -> Vec<String> {
    let mut pointers: Vec<String> = problem
        .get("errors")
        .and_then(|v| v.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.get("pointer").and_then(|p| p.as_str()))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    pointers.sort();
    pointers
}

pub fn assert_user_response(user: &Value) {
    assert!(user.get("id").and_then(|v| v.as_str()).is_some());
    assert!(user.get("username").and_then(|v| v.as_str()).is_some());
    assert!(user.get("email").and_then(|v| v.as_str()).is_some());
    assert!(user.get("createdBy").and_then(|v| v.as_str()).is_some());
    assert!(user.get("createdAt").is_some());
    assert_eq!(user.get("version").and_then(|v| v.as_i64()), Some(0));
    assert_eq!(user.get("deleted").and_then(|v| v.as_bool()), Some(false));

    // Secrets never leave the server
    assert!(user.get("password").is_none());
    assert!(user.get("passwordHash").is_none());
}

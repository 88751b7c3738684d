use super::*;
use serde_json::json;

#[test]
fn role_and_sentiment_wire_strings() {
    assert_eq!(serde_json::to_value(Role::Manager).unwrap(), json!("manager"));
    assert_eq!(serde_json::to_value(Role::Employee).unwrap(), json!("employee"));
    assert_eq!(serde_json::to_value(Sentiment::Neutral).unwrap(), json!("neutral"));
    assert_eq!(Sentiment::from_str("negative"), Some(Sentiment::Negative));
    assert_eq!(Sentiment::from_str("angry"), None);
}

#[test]
fn user_response_decodes() {
    let user: UserResponse = serde_json::from_value(json!({
        "id": 1,
        "name": "M",
        "email": "m@x.io",
        "role": "manager"
    }))
    .unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.role, Role::Manager);
    assert_eq!(user.manager_id, None);
}

#[test]
fn register_omits_blank_manager_id() {
    let body = RegisterRequest {
        name: "E".into(),
        email: "e@x.io".into(),
        password: "p".into(),
        role: Role::Employee,
        manager_id: None,
    };
    let value = serde_json::to_value(&body).unwrap();
    assert!(value.get("manager_id").is_none());
}

#[test]
fn register_sends_null_manager_id_for_managers() {
    let body = RegisterRequest {
        name: "M".into(),
        email: "m@x.io".into(),
        password: "p".into(),
        role: Role::Manager,
        manager_id: Some(None),
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value.get("manager_id"), Some(&json!(null)));
}

#[test]
fn feedback_update_skips_absent_fields() {
    let patch = FeedbackUpdate {
        sentiment: Some(Sentiment::Positive),
        ..Default::default()
    };
    let value = serde_json::to_value(&patch).unwrap();
    assert_eq!(value, json!({ "sentiment": "positive" }));
}

#[test]
fn feedback_response_decodes_without_updated_at() {
    let fb: FeedbackResponse = serde_json::from_value(json!({
        "id": 9,
        "employee_id": 3,
        "strengths": "clear writing",
        "areas_to_improve": "estimation",
        "sentiment": "positive",
        "created_at": "2024-01-15T10:00:00",
        "acknowledged": false
    }))
    .unwrap();
    assert_eq!(fb.id, 9);
    assert!(fb.updated_at.is_none());
    assert!(!fb.acknowledged);
}

#[test]
fn anonymous_peer_feedback_has_no_author() {
    let fb: PeerFeedbackResponse = serde_json::from_value(json!({
        "id": 4,
        "to_employee_id": 2,
        "strengths": "s",
        "areas_to_improve": "a",
        "sentiment": "neutral",
        "is_anonymous": true,
        "acknowledged": false
    }))
    .unwrap();
    assert!(fb.is_anonymous);
    assert!(fb.from_employee_id.is_none());
    assert!(fb.from_employee_name.is_none());
}

#[test]
fn token_response_decodes() {
    let token: TokenResponse =
        serde_json::from_value(json!({ "access_token": "T", "token_type": "bearer" })).unwrap();
    assert_eq!(token.access_token, "T");
    assert_eq!(token.token_type, "bearer");
}

#[test]
fn notification_decodes() {
    let n: NotificationResponse = serde_json::from_value(json!({
        "id": 7,
        "message": "hi",
        "is_read": false,
        "created_at": "2024-01-15T10:00:00"
    }))
    .unwrap();
    assert_eq!(n.id, 7);
    assert!(!n.is_read);
}

#[test]
fn manager_dashboard_decodes_sentiment_trends() {
    let d: ManagerDashboardResponse = serde_json::from_value(json!({
        "team_size": 5,
        "feedback_count": 12,
        "sentiment_trends": { "positive": 8, "neutral": 3, "negative": 1 }
    }))
    .unwrap();
    assert_eq!(d.sentiment_trends.get("positive"), Some(&8));
    assert_eq!(d.sentiment_trends.len(), 3);
}

#[test]
fn employee_dashboard_defaults_to_empty_timeline() {
    let d: EmployeeDashboardResponse = serde_json::from_value(json!({})).unwrap();
    assert!(d.feedback_timeline.is_empty());
}

#[test]
fn comment_shape_covers_both_families() {
    // Server includes feedback_id or assignment_id; the client ignores it.
    let c: CommentResponse = serde_json::from_value(json!({
        "id": 1,
        "feedback_id": 9,
        "employee_id": 3,
        "employee_name": "E",
        "content": "nice",
        "created_at": "2024-01-15T10:00:00",
        "updated_at": "2024-01-15T11:00:00"
    }))
    .unwrap();
    assert_eq!(c.employee_name, "E");
    assert!(crate::date::was_edited(
        c.created_at.as_deref(),
        c.updated_at.as_deref()
    ));
}

#[test]
fn error_body_decodes_detail() {
    let e: ErrorBody = serde_json::from_value(json!({ "detail": "Invalid credentials" })).unwrap();
    assert_eq!(e.detail, "Invalid credentials");
}

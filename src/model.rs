use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::BoardError;

/// One activity as the server sends it. The roster may arrive under either
/// `members` or `participants`.
///
/// Scalar fields are kept as raw JSON so a single odd value (a `null`
/// description, a float capacity) still renders instead of failing the load.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct RawActivity {
    #[serde(default)]
    pub description: Value,
    #[serde(default)]
    pub schedule: Value,
    #[serde(default)]
    pub max_participants: Value,
    #[serde(default)]
    pub members: Option<Vec<Value>>,
    #[serde(default)]
    pub participants: Option<Vec<Value>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: Value,
    pub participants: Vec<String>,
}

/// Text for a JSON scalar as it would be printed on the page. `null` is empty,
/// whole floats drop their fraction.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

impl Activity {
    pub fn from_raw(name: String, raw: RawActivity) -> Self {
        // `members` wins whenever it is present, even if empty.
        let participants = raw
            .members
            .or(raw.participants)
            .unwrap_or_default()
            .iter()
            .map(display_text)
            .collect();
        Self {
            name,
            description: display_text(&raw.description),
            schedule: display_text(&raw.schedule),
            max_participants: raw.max_participants,
            participants,
        }
    }

    /// Capacity text shown on the card. This is the raw `max_participants`
    /// value, not the number of free slots.
    pub fn availability(&self) -> String {
        match &self.max_participants {
            Value::Null => "unknown".to_string(),
            other => format!("{} spots", display_text(other)),
        }
    }
}

/// Everything one `GET /activities` returned, in server order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub activities: Vec<Activity>,
}

impl Snapshot {
    pub fn from_json(body: &str) -> Result<Self, BoardError> {
        let map: Map<String, Value> = serde_json::from_str(body)?;
        let mut activities = Vec::with_capacity(map.len());
        for (name, details) in map {
            let raw: RawActivity = serde_json::from_value(details)?;
            activities.push(Activity::from_raw(name, raw));
        }
        Ok(Self { activities })
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }
}

/// Body of a signup/unregister reply. Both fields are optional on the wire,
/// and `detail` is a list on validation errors.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ServerNote {
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ServerNote {
    pub fn message_text(&self) -> Option<&str> {
        self.message.as_ref().and_then(Value::as_str)
    }

    pub fn detail_text(&self) -> Option<&str> {
        self.detail.as_ref().and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub ok: bool,
    pub note: ServerNote,
}

impl Reply {
    /// Any JSON object counts as a reply, whatever its status. Only a body
    /// that is not JSON at all is an error.
    pub fn from_body(ok: bool, body: &str) -> Result<Self, BoardError> {
        let note: ServerNote = serde_json::from_str(body)?;
        Ok(Self { ok, note })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_server_order() {
        let body = r#"{
            "Zumba": {"description": "z", "schedule": "Mon", "max_participants": 5, "participants": []},
            "Art Club": {"description": "a", "schedule": "Tue", "max_participants": 3, "participants": []},
            "Chess Club": {"description": "c", "schedule": "Fri", "max_participants": 12, "participants": []}
        }"#;
        let snap = Snapshot::from_json(body).unwrap();
        let names: Vec<_> = snap.names().collect();
        assert_eq!(names, vec!["Zumba", "Art Club", "Chess Club"]);
    }

    #[test]
    fn members_take_precedence_over_participants() {
        let raw = RawActivity {
            members: Some(vec![]),
            participants: Some(vec![Value::from("a@x.com")]),
            ..Default::default()
        };
        let a = Activity::from_raw("Chess".into(), raw);
        assert!(a.participants.is_empty());
    }

    #[test]
    fn falls_back_to_participants_then_empty() {
        let body = r#"{
            "One": {"description": "d", "schedule": "s", "max_participants": 2, "participants": ["p@x.com"]},
            "Two": {"description": "d", "schedule": "s", "max_participants": 2}
        }"#;
        let snap = Snapshot::from_json(body).unwrap();
        assert_eq!(snap.activities[0].participants, vec!["p@x.com".to_string()]);
        assert!(snap.activities[1].participants.is_empty());
    }

    #[test]
    fn availability_shows_raw_capacity() {
        let a = Activity::from_raw(
            "Chess".into(),
            RawActivity {
                max_participants: Value::from(12),
                members: Some(vec![Value::from("a@x.com"), Value::from("b@x.com")]),
                ..Default::default()
            },
        );
        assert_eq!(a.availability(), "12 spots");

        let unknown = Activity::from_raw("Gym".into(), RawActivity::default());
        assert_eq!(unknown.availability(), "unknown");
    }

    #[test]
    fn rejects_non_object_payloads() {
        assert!(matches!(
            Snapshot::from_json("[1, 2, 3]"),
            Err(BoardError::Decode(_))
        ));
        assert!(Snapshot::from_json(r#"{"Chess": 7}"#).is_err());
    }

    #[test]
    fn server_note_tolerates_missing_fields() {
        let note: ServerNote = serde_json::from_str("{}").unwrap();
        assert_eq!(note, ServerNote::default());
        let note: ServerNote = serde_json::from_str(r#"{"detail": "Not found"}"#).unwrap();
        assert_eq!(note.detail_text(), Some("Not found"));
    }

    #[test]
    fn validation_detail_list_is_not_text() {
        let body = r#"{"detail": [{"loc": ["query", "email"], "msg": "field required", "type": "value_error.missing"}]}"#;
        let note: ServerNote = serde_json::from_str(body).unwrap();
        assert!(note.detail.is_some());
        assert_eq!(note.detail_text(), None);
        assert_eq!(note.message_text(), None);
    }

    #[test]
    fn rejected_reply_with_validation_body_decodes() {
        let reply = Reply::from_body(false, r#"{"detail": [{"msg": "field required"}]}"#).unwrap();
        assert!(!reply.ok);
        assert_eq!(reply.note.detail_text(), None);

        assert!(matches!(
            Reply::from_body(false, "<html>Bad Gateway</html>"),
            Err(BoardError::Decode(_))
        ));
    }

    #[test]
    fn odd_field_values_still_render_every_card() {
        let body = r#"{
            "Chess Club": {"description": null, "schedule": "Fridays", "max_participants": 12.0, "participants": ["a@x.com"]},
            "Drama": {"description": "Acting", "schedule": null, "max_participants": "ten", "members": null, "participants": ["d@x.com"]},
            "Gym Class": {"description": "Sports", "schedule": "Mondays", "max_participants": 30}
        }"#;
        let snap = Snapshot::from_json(body).unwrap();
        assert_eq!(snap.len(), 3);

        let chess = &snap.activities[0];
        assert_eq!(chess.description, "");
        assert_eq!(chess.availability(), "12 spots");

        let drama = &snap.activities[1];
        assert_eq!(drama.schedule, "");
        assert_eq!(drama.availability(), "ten spots");
        assert_eq!(drama.participants, vec!["d@x.com".to_string()]);

        assert_eq!(snap.activities[2].availability(), "30 spots");
    }

    #[test]
    fn display_text_keeps_fractional_capacity() {
        assert_eq!(display_text(&serde_json::json!(12.5)), "12.5");
        assert_eq!(display_text(&serde_json::json!(-3)), "-3");
        assert_eq!(display_text(&serde_json::json!(true)), "true");
    }
}

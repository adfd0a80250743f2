use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub name: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_json_shape() {
        let note = Note {
            name: "todo".to_string(),
            text: "buy milk".to_string(),
        };

        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(json, r#"{"name":"todo","text":"buy milk"}"#);
    }

    #[test]
    fn test_note_tolerates_extra_fields() {
        let note: Note =
            serde_json::from_str(r#"{"name":"todo","text":"buy milk","stars":5}"#).unwrap();
        assert_eq!(note.name, "todo");
        assert_eq!(note.text, "buy milk");
    }

    #[test]
    fn test_note_requires_both_fields() {
        assert!(serde_json::from_str::<Note>(r#"{"name":"todo"}"#).is_err());
        assert!(serde_json::from_str::<Note>(r#"{"name":"todo","text":7}"#).is_err());
    }
}

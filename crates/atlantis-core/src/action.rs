use serde::Serialize;

/// A worker's move for one turn.
///
/// Unlike most tagged enums in this codebase this one is serialize-only: the
/// driver only ever emits `Action`s, never parses them back in. The default
/// externally-tagged `derive(Serialize)` already produces the wire shape in
/// `SPEC_FULL.md` §6 verbatim — `{"Nom": 5}` for the one-field tuple variant,
/// `{"Pass": {"pearl_id": 5, "to_worker": 1}}` for the struct variant — so no
/// custom serializer is written here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    Nom(u64),
    Pass { pearl_id: u64, to_worker: usize },
}

impl Action {
    pub fn is_nom(&self) -> bool {
        matches!(self, Action::Nom(_))
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Action::Pass { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nom_serializes_as_bare_id() {
        assert_eq!(serde_json::to_string(&Action::Nom(5)).unwrap(), r#"{"Nom":5}"#);
    }

    #[test]
    fn pass_serializes_as_nested_object() {
        let action = Action::Pass {
            pearl_id: 5,
            to_worker: 1,
        };
        assert_eq!(
            serde_json::to_string(&action).unwrap(),
            r#"{"Pass":{"pearl_id":5,"to_worker":1}}"#
        );
    }
}

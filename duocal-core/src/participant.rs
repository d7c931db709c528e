//! The two people sharing a calendar.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DuocalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Participant {
    /// The local user
    #[serde(rename = "self")]
    Me,
    #[serde(rename = "partner")]
    Partner,
}

impl Participant {
    pub const ALL: [Participant; 2] = [Participant::Me, Participant::Partner];

    pub fn as_str(self) -> &'static str {
        match self {
            Participant::Me => "self",
            Participant::Partner => "partner",
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Participant {
    type Err = DuocalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "self" | "me" => Ok(Participant::Me),
            "partner" => Ok(Participant::Partner),
            _ => Err(DuocalError::InvalidValue {
                field: "participant",
                value: s.to_string(),
            }),
        }
    }
}

/// Who takes part in an event. Serialized as a list (`["self", "partner"]`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Participant>", from = "Vec<Participant>")]
pub struct ParticipantSet {
    me: bool,
    partner: bool,
}

impl ParticipantSet {
    pub fn empty() -> Self {
        ParticipantSet::default()
    }

    pub fn both() -> Self {
        ParticipantSet {
            me: true,
            partner: true,
        }
    }

    pub fn only(participant: Participant) -> Self {
        let mut set = ParticipantSet::empty();
        set.insert(participant);
        set
    }

    fn slot(&mut self, participant: Participant) -> &mut bool {
        match participant {
            Participant::Me => &mut self.me,
            Participant::Partner => &mut self.partner,
        }
    }

    pub fn contains(&self, participant: Participant) -> bool {
        match participant {
            Participant::Me => self.me,
            Participant::Partner => self.partner,
        }
    }

    pub fn insert(&mut self, participant: Participant) {
        *self.slot(participant) = true;
    }

    pub fn remove(&mut self, participant: Participant) {
        *self.slot(participant) = false;
    }

    /// Add the participant if absent, remove it if present.
    pub fn toggle(&mut self, participant: Participant) {
        let slot = self.slot(participant);
        *slot = !*slot;
    }

    pub fn is_empty(&self) -> bool {
        !self.me && !self.partner
    }

    pub fn is_both(&self) -> bool {
        self.me && self.partner
    }

    pub fn len(&self) -> usize {
        usize::from(self.me) + usize::from(self.partner)
    }

    pub fn iter(&self) -> impl Iterator<Item = Participant> + '_ {
        Participant::ALL.into_iter().filter(|p| self.contains(*p))
    }
}

impl FromIterator<Participant> for ParticipantSet {
    fn from_iter<I: IntoIterator<Item = Participant>>(iter: I) -> Self {
        let mut set = ParticipantSet::empty();
        for participant in iter {
            set.insert(participant);
        }
        set
    }
}

impl From<Vec<Participant>> for ParticipantSet {
    fn from(list: Vec<Participant>) -> Self {
        list.into_iter().collect()
    }
}

impl From<ParticipantSet> for Vec<Participant> {
    fn from(set: ParticipantSet) -> Self {
        set.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_and_removes() {
        let mut set = ParticipantSet::both();
        set.toggle(Participant::Partner);
        assert!(set.contains(Participant::Me));
        assert!(!set.contains(Participant::Partner));

        set.toggle(Participant::Me);
        assert!(set.is_empty());

        set.toggle(Participant::Partner);
        assert_eq!(set, ParticipantSet::only(Participant::Partner));
    }

    #[test]
    fn len_and_iter_follow_members() {
        assert_eq!(ParticipantSet::empty().len(), 0);
        assert_eq!(ParticipantSet::both().len(), 2);
        let members: Vec<_> = ParticipantSet::only(Participant::Partner).iter().collect();
        assert_eq!(members, vec![Participant::Partner]);
    }

    #[test]
    fn serializes_as_list() {
        let json = serde_json::to_string(&ParticipantSet::both()).unwrap();
        assert_eq!(json, r#"["self","partner"]"#);

        let set: ParticipantSet = serde_json::from_str(r#"["partner","partner"]"#).unwrap();
        assert_eq!(set, ParticipantSet::only(Participant::Partner));
    }

    #[test]
    fn parse_participant() {
        assert_eq!("self".parse::<Participant>().unwrap(), Participant::Me);
        assert_eq!("Me".parse::<Participant>().unwrap(), Participant::Me);
        assert_eq!("partner".parse::<Participant>().unwrap(), Participant::Partner);
        assert!("both".parse::<Participant>().is_err());
    }
}

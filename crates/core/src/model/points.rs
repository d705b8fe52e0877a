use serde::{Deserialize, Serialize};
use std::fmt;

/// The catalog's fixed, ordered set of point values.
pub const POINT_VALUES: [Points; 5] = [
    Points(100),
    Points(200),
    Points(300),
    Points(400),
    Points(500),
];

//
// ─── POINTS ────────────────────────────────────────────────────────────────────
//

/// Point value of a question.
///
/// Any `u32` can be wrapped; only the values in [`POINT_VALUES`] belong to a
/// [`PointGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Points(u32);

impl Points {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Group classification. Values outside the catalog table map to `None`.
    #[must_use]
    pub const fn group(self) -> Option<PointGroup> {
        match self.0 {
            100 | 200 => Some(PointGroup::A),
            300 | 400 => Some(PointGroup::B),
            500 => Some(PointGroup::C),
            _ => None,
        }
    }

    /// Returns true if this is one of the catalog's point values.
    #[must_use]
    pub fn is_known(self) -> bool {
        POINT_VALUES.contains(&self)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── GROUPS ────────────────────────────────────────────────────────────────────
//

/// Per-group session limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupQuota {
    /// Max questions drawable from the group per session.
    pub pick: u8,
    /// Max draws from the group that may use risk mode.
    pub risk: u8,
}

/// Fixed bucket of point values carrying its own quotas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PointGroup {
    /// Lowest two point values.
    A,
    /// Middle two point values.
    B,
    /// Highest point value.
    C,
}

impl PointGroup {
    pub const ALL: [PointGroup; 3] = [PointGroup::A, PointGroup::B, PointGroup::C];

    #[must_use]
    pub const fn quota(self) -> GroupQuota {
        match self {
            PointGroup::A => GroupQuota { pick: 2, risk: 2 },
            PointGroup::B => GroupQuota { pick: 6, risk: 2 },
            PointGroup::C => GroupQuota { pick: 2, risk: 2 },
        }
    }

    /// Point values aggregated by this group, ascending.
    pub fn points(self) -> impl Iterator<Item = Points> {
        POINT_VALUES
            .into_iter()
            .filter(move |p| p.group() == Some(self))
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PointGroup::A => 0,
            PointGroup::B => 1,
            PointGroup::C => 2,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            PointGroup::A => "Group A",
            PointGroup::B => "Group B",
            PointGroup::C => "Group C",
        }
    }
}

impl fmt::Display for PointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            PointGroup::A => "A",
            PointGroup::B => "B",
            PointGroup::C => "C",
        };
        f.write_str(letter)
    }
}

//
// ─── DRAW MODE ─────────────────────────────────────────────────────────────────
//

/// How a drawn question is scored once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    /// Full points when correct, nothing lost when wrong.
    #[default]
    Safe,
    /// Bonus when correct, fixed penalty when wrong.
    Risk,
}

impl DrawMode {
    /// Maps a mode tag to a mode. Anything other than `"risk"` is safe.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag == "risk" { Self::Risk } else { Self::Safe }
    }

    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            DrawMode::Safe => "safe",
            DrawMode::Risk => "risk",
        }
    }

    #[must_use]
    pub const fn is_risk(self) -> bool {
        matches!(self, DrawMode::Risk)
    }
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_follows_the_fixed_table() {
        assert_eq!(Points::new(100).group(), Some(PointGroup::A));
        assert_eq!(Points::new(200).group(), Some(PointGroup::A));
        assert_eq!(Points::new(300).group(), Some(PointGroup::B));
        assert_eq!(Points::new(400).group(), Some(PointGroup::B));
        assert_eq!(Points::new(500).group(), Some(PointGroup::C));
    }

    #[test]
    fn unknown_points_have_no_group() {
        assert_eq!(Points::new(0).group(), None);
        assert_eq!(Points::new(250).group(), None);
        assert_eq!(Points::new(600).group(), None);
        assert!(!Points::new(600).is_known());
    }

    #[test]
    fn group_points_partition_the_catalog_values() {
        let mut all: Vec<Points> = PointGroup::ALL.into_iter().flat_map(PointGroup::points).collect();
        all.sort();
        assert_eq!(all, POINT_VALUES.to_vec());
        assert_eq!(
            PointGroup::B.points().collect::<Vec<_>>(),
            vec![Points::new(300), Points::new(400)]
        );
    }

    #[test]
    fn quotas_sum_to_session_length() {
        let picks: u32 = PointGroup::ALL.iter().map(|g| u32::from(g.quota().pick)).sum();
        assert_eq!(picks, 10);
        assert!(PointGroup::ALL.iter().all(|g| g.quota().risk == 2));
    }

    #[test]
    fn any_tag_other_than_risk_is_safe() {
        assert_eq!(DrawMode::from_tag("risk"), DrawMode::Risk);
        assert_eq!(DrawMode::from_tag("safe"), DrawMode::Safe);
        assert_eq!(DrawMode::from_tag("RISK"), DrawMode::Safe);
        assert_eq!(DrawMode::from_tag(""), DrawMode::Safe);
    }
}

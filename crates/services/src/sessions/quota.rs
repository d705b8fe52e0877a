use quiz_core::model::PointGroup;

/// Draw and risk usage for one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupUsage {
    pub drawn: u8,
    pub risk_used: u8,
}

/// Per-group usage counters for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuotaLedger {
    usage: [GroupUsage; 3],
}

impl QuotaLedger {
    #[must_use]
    pub fn usage(&self, group: PointGroup) -> GroupUsage {
        self.usage[group.index()]
    }

    #[must_use]
    pub fn has_pick_left(&self, group: PointGroup) -> bool {
        self.usage(group).drawn < group.quota().pick
    }

    #[must_use]
    pub fn has_risk_left(&self, group: PointGroup) -> bool {
        self.usage(group).risk_used < group.quota().risk
    }

    /// Sum of drawn counters across all groups.
    #[must_use]
    pub fn total_drawn(&self) -> u8 {
        self.usage.iter().map(|u| u.drawn).sum()
    }

    /// Commit a draw. Quota checks happen before this is called.
    pub(crate) fn record(&mut self, group: PointGroup, risk: bool) {
        let usage = &mut self.usage[group.index()];
        usage.drawn += 1;
        if risk {
            usage.risk_used += 1;
        }
    }
}

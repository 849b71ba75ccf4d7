// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::{Duration, Instant};

use crate::model::TableId;

/// How long a duplicate-placement glow stays lit.
pub const GLOW_DURATION: Duration = Duration::from_millis(2000);

/// Transient highlight marking a rejected duplicate table placement.
///
/// Idle → Glowing → Idle on deadline expiry. There is no cancel operation: a
/// second duplicate drop during an active glow simply restarts the deadline,
/// and expiring an already-clear glow is a no-op. Deadlines are compared
/// against caller-supplied `Instant`s so tests control time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlowState {
    glowing: Option<(TableId, Instant)>,
}

impl GlowState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lights (or re-lights) the glow for `table_id`.
    pub fn activate(&mut self, table_id: TableId, now: Instant) {
        self.glowing = Some((table_id, now + GLOW_DURATION));
    }

    /// Expires the glow once its deadline passes. Safe to call at any time.
    pub fn tick(&mut self, now: Instant) {
        if let Some((_, deadline)) = &self.glowing {
            if *deadline <= now {
                self.glowing = None;
            }
        }
    }

    /// The table currently glowing, if its deadline has not passed.
    pub fn glowing_table(&self, now: Instant) -> Option<&TableId> {
        match &self.glowing {
            Some((table_id, deadline)) if *deadline > now => Some(table_id),
            _ => None,
        }
    }

    pub fn is_glowing(&self, table_id: &TableId, now: Instant) -> bool {
        self.glowing_table(now) == Some(table_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{GlowState, GLOW_DURATION};
    use crate::model::TableId;
    use std::time::{Duration, Instant};

    fn tid(value: &str) -> TableId {
        TableId::new(value).expect("table id")
    }

    #[test]
    fn glow_expires_after_exactly_the_fixed_duration() {
        let start = Instant::now();
        let mut glow = GlowState::new();
        glow.activate(tid("a"), start);

        assert!(glow.is_glowing(&tid("a"), start + GLOW_DURATION - Duration::from_millis(1)));
        assert!(!glow.is_glowing(&tid("a"), start + GLOW_DURATION));

        glow.tick(start + GLOW_DURATION);
        assert_eq!(glow.glowing_table(start + GLOW_DURATION), None);
    }

    #[test]
    fn late_expiry_of_an_already_clear_glow_is_a_no_op() {
        let start = Instant::now();
        let mut glow = GlowState::new();
        glow.activate(tid("a"), start);

        glow.tick(start + GLOW_DURATION);
        let cleared = glow.clone();

        // A timer scheduled by an earlier activation fires again, long after
        // the state already changed.
        glow.tick(start + GLOW_DURATION * 2);
        assert_eq!(glow, cleared);
    }

    #[test]
    fn duplicate_drop_during_active_glow_restarts_the_deadline() {
        let start = Instant::now();
        let mut glow = GlowState::new();
        glow.activate(tid("a"), start);
        glow.activate(tid("a"), start + Duration::from_millis(1500));

        // The first activation's deadline passes without clearing anything.
        glow.tick(start + GLOW_DURATION);
        assert!(glow.is_glowing(&tid("a"), start + GLOW_DURATION));

        glow.tick(start + Duration::from_millis(1500) + GLOW_DURATION);
        assert_eq!(glow.glowing_table(start + Duration::from_millis(1500) + GLOW_DURATION), None);
    }

    #[test]
    fn a_new_duplicate_takes_over_the_glow() {
        let start = Instant::now();
        let mut glow = GlowState::new();
        glow.activate(tid("a"), start);
        glow.activate(tid("b"), start + Duration::from_millis(100));

        assert!(!glow.is_glowing(&tid("a"), start + Duration::from_millis(200)));
        assert!(glow.is_glowing(&tid("b"), start + Duration::from_millis(200)));
    }
}

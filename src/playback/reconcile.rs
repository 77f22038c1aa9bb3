/// Where the current value of a [`Reconciled`] cell came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Written optimistically by the controller; may still be contradicted.
    Tentative,
    /// Reported by the engine or ambient window.
    Authoritative,
}

/// Cached state with an explicit reconciliation rule.
///
/// Local writes go through [`Reconciled::propose`] and are tentative. Engine notifications go
/// through [`Reconciled::confirm`] and always override, whatever the prior provenance. Within
/// each kind the most recent write wins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reconciled<T> {
    value: T,
    provenance: Provenance,
}

impl<T: Copy + PartialEq> Reconciled<T> {
    /// Initial value, treated as authoritative.
    pub fn new(value: T) -> Self {
        Self {
            value,
            provenance: Provenance::Authoritative,
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.value
    }

    /// Source of the current value.
    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// True while an optimistic write has not been confirmed.
    pub fn is_tentative(&self) -> bool {
        self.provenance == Provenance::Tentative
    }

    /// Optimistic local write. Returns whether the value changed.
    pub fn propose(&mut self, value: T) -> bool {
        let changed = self.value != value;
        self.value = value;
        self.provenance = Provenance::Tentative;
        changed
    }

    /// Authoritative write. Returns whether the value changed.
    pub fn confirm(&mut self, value: T) -> bool {
        let changed = self.value != value;
        self.value = value;
        self.provenance = Provenance::Authoritative;
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/reconcile.rs"]
mod tests;

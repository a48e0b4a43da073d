//! Hard-stop contact tracking.

use ps_piston::HardStop;

/// First contact times with each hard stop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrokeEvents {
    /// End time of the first step that finished against the extended stop (s)
    pub extended_at: Option<f64>,
    /// End time of the first step that finished against the retracted stop (s)
    pub retracted_at: Option<f64>,
    /// Number of steps that ended in a stop contact
    pub contacts: usize,
}

impl StrokeEvents {
    pub(crate) fn observe(&mut self, t: f64, stop: Option<HardStop>) {
        let Some(stop) = stop else {
            return;
        };
        self.contacts += 1;
        let slot = match stop {
            HardStop::Extended => &mut self.extended_at,
            HardStop::Retracted => &mut self.retracted_at,
        };
        if slot.is_none() {
            tracing::debug!(?stop, t_s = t, "first hard stop contact");
            *slot = Some(t);
        }
    }
}

//! Piecewise-constant port pressure commands.

use crate::error::{SimError, SimResult};

/// Port pressures held from `t_start` until the next segment begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PortSegment {
    /// Segment start time (s)
    pub t_start: f64,
    /// Extension port pressure (Pa or psi, see the owning plant)
    pub ext_pressure: f64,
    /// Retraction port pressure (Pa or psi, see the owning plant)
    pub ret_pressure: f64,
}

/// Ordered list of port pressure segments.
///
/// Before the first segment starts, the first segment applies.
#[derive(Clone, Debug, PartialEq)]
pub struct PortSchedule {
    segments: Vec<PortSegment>,
}

impl PortSchedule {
    /// # Errors
    /// Fails if the list is empty, holds non-finite values, or start times
    /// are not strictly increasing.
    pub fn new(segments: Vec<PortSegment>) -> SimResult<Self> {
        if segments.is_empty() {
            return Err(SimError::InvalidSchedule {
                what: "at least one segment is required",
            });
        }
        for seg in &segments {
            if !(seg.t_start.is_finite()
                && seg.ext_pressure.is_finite()
                && seg.ret_pressure.is_finite())
            {
                return Err(SimError::InvalidSchedule {
                    what: "segment values must be finite",
                });
            }
        }
        if segments.windows(2).any(|w| w[1].t_start <= w[0].t_start) {
            return Err(SimError::InvalidSchedule {
                what: "segment start times must be strictly increasing",
            });
        }
        Ok(Self { segments })
    }

    /// Same pressures for the whole run.
    pub fn constant(ext_pressure: f64, ret_pressure: f64) -> Self {
        Self {
            segments: vec![PortSegment {
                t_start: 0.0,
                ext_pressure,
                ret_pressure,
            }],
        }
    }

    /// Segment active at time `t`.
    pub fn at(&self, t: f64) -> &PortSegment {
        let idx = self.segments.partition_point(|seg| seg.t_start <= t);
        &self.segments[idx.saturating_sub(1)]
    }

    pub fn segments(&self) -> &[PortSegment] {
        &self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(t_start: f64, ext_pressure: f64) -> PortSegment {
        PortSegment {
            t_start,
            ext_pressure,
            ret_pressure: 14.7,
        }
    }

    #[test]
    fn lookup_picks_active_segment() {
        let sched =
            PortSchedule::new(vec![seg(0.0, 14.7), seg(0.1, 120.0), seg(0.5, 14.7)]).unwrap();
        assert_eq!(sched.at(0.0).ext_pressure, 14.7);
        assert_eq!(sched.at(0.099).ext_pressure, 14.7);
        assert_eq!(sched.at(0.1).ext_pressure, 120.0);
        assert_eq!(sched.at(0.3).ext_pressure, 120.0);
        assert_eq!(sched.at(2.0).ext_pressure, 14.7);
    }

    #[test]
    fn times_before_first_segment_use_it() {
        let sched = PortSchedule::new(vec![seg(0.2, 90.0)]).unwrap();
        assert_eq!(sched.at(0.0).ext_pressure, 90.0);
    }

    #[test]
    fn rejects_empty_and_unsorted() {
        assert!(PortSchedule::new(vec![]).is_err());
        assert!(PortSchedule::new(vec![seg(0.5, 1.0), seg(0.1, 2.0)]).is_err());
        assert!(PortSchedule::new(vec![seg(0.1, 1.0), seg(0.1, 2.0)]).is_err());
        assert!(PortSchedule::new(vec![seg(0.0, f64::NAN)]).is_err());
    }

    #[test]
    fn constant_schedule() {
        let sched = PortSchedule::constant(120.0, 14.7);
        assert_eq!(sched.at(123.0).ext_pressure, 120.0);
        assert_eq!(sched.segments().len(), 1);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn lookup_returns_last_started_segment(
                gaps in prop::collection::vec(1e-3_f64..1.0, 1..8),
                t in 0.0_f64..10.0,
            ) {
                let mut t_start = 0.0;
                let segments: Vec<PortSegment> = gaps
                    .iter()
                    .enumerate()
                    .map(|(i, gap)| {
                        let seg = seg(t_start, i as f64);
                        t_start += gap;
                        seg
                    })
                    .collect();
                let sched = PortSchedule::new(segments.clone()).unwrap();

                let expected = segments
                    .iter()
                    .rev()
                    .find(|s| s.t_start <= t)
                    .unwrap_or(&segments[0]);
                prop_assert_eq!(sched.at(t), expected);
            }
        }
    }
}

//! The four-need model.
//!
//! Each need is a value in `[NEED_MIN, NEED_MAX]` where 0 means fully
//! satisfied and 100 means maximally unmet.  Needs only ever rise through
//! [`Needs::decay`] and only ever fall through [`Needs::reduce`].

/// Lower bound of every need (fully satisfied).
pub const NEED_MIN: f64 = 0.0;
/// Upper bound of every need (maximally unmet).
pub const NEED_MAX: f64 = 100.0;

/// One of the four need dimensions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NeedKind {
    Hunger,
    Sleep,
    Social,
    Fun,
}

impl NeedKind {
    pub const ALL: [NeedKind; 4] = [NeedKind::Hunger, NeedKind::Sleep, NeedKind::Social, NeedKind::Fun];

    pub fn as_str(self) -> &'static str {
        match self {
            NeedKind::Hunger => "hunger",
            NeedKind::Sleep  => "sleep",
            NeedKind::Social => "social",
            NeedKind::Fun    => "fun",
        }
    }
}

impl std::fmt::Display for NeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── NeedRates ─────────────────────────────────────────────────────────────────

/// Per-second increase of each need.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NeedRates {
    pub hunger: f64,
    pub sleep:  f64,
    pub social: f64,
    /// Boredom.
    pub fun:    f64,
}

impl NeedRates {
    pub const HUNGER: f64 = 0.5;
    pub const SLEEP:  f64 = 0.3;
    pub const SOCIAL: f64 = 0.2;
    pub const FUN:    f64 = 0.4;

    #[inline]
    pub fn get(&self, kind: NeedKind) -> f64 {
        match kind {
            NeedKind::Hunger => self.hunger,
            NeedKind::Sleep  => self.sleep,
            NeedKind::Social => self.social,
            NeedKind::Fun    => self.fun,
        }
    }
}

impl Default for NeedRates {
    fn default() -> Self {
        Self {
            hunger: Self::HUNGER,
            sleep:  Self::SLEEP,
            social: Self::SOCIAL,
            fun:    Self::FUN,
        }
    }
}

// ── Needs ─────────────────────────────────────────────────────────────────────

/// Current need values of one agent.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Needs {
    pub hunger: f64,
    pub sleep:  f64,
    pub social: f64,
    pub fun:    f64,
}

impl Needs {
    /// All four needs at the same value (clamped into range).
    pub fn uniform(value: f64) -> Self {
        let v = clamp_need(value);
        Self { hunger: v, sleep: v, social: v, fun: v }
    }

    #[inline]
    pub fn get(&self, kind: NeedKind) -> f64 {
        match kind {
            NeedKind::Hunger => self.hunger,
            NeedKind::Sleep  => self.sleep,
            NeedKind::Social => self.social,
            NeedKind::Fun    => self.fun,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, kind: NeedKind) -> &mut f64 {
        match kind {
            NeedKind::Hunger => &mut self.hunger,
            NeedKind::Sleep  => &mut self.sleep,
            NeedKind::Social => &mut self.social,
            NeedKind::Fun    => &mut self.fun,
        }
    }

    /// Set `kind` to `value`, clamped into `[NEED_MIN, NEED_MAX]`.
    pub fn set(&mut self, kind: NeedKind, value: f64) {
        *self.get_mut(kind) = clamp_need(value);
    }

    /// Raise every need by `rate * dt_secs`, then clamp.
    ///
    /// `dt_secs` must be `>= 0`; callers at the simulation boundary enforce
    /// this.  A zero delta leaves the values untouched.
    pub fn decay(&mut self, rates: &NeedRates, dt_secs: f64) {
        for kind in NeedKind::ALL {
            let v = self.get_mut(kind);
            *v = clamp_need(*v + rates.get(kind) * dt_secs);
        }
    }

    /// Lower `kind` by `amount`, flooring at `NEED_MIN`.
    pub fn reduce(&mut self, kind: NeedKind, amount: f64) {
        let v = self.get_mut(kind);
        *v = (*v - amount).max(NEED_MIN);
    }

    /// Iterator of `(kind, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (NeedKind, f64)> + '_ {
        NeedKind::ALL.into_iter().map(|k| (k, self.get(k)))
    }
}

impl Default for Needs {
    fn default() -> Self {
        Self::uniform(50.0)
    }
}

#[inline]
fn clamp_need(v: f64) -> f64 {
    v.clamp(NEED_MIN, NEED_MAX)
}

use std::f32::consts::TAU;

/// Easing curves used by the page animations.
///
/// Names follow the GSAP vocabulary the page markup was designed against:
/// `power2` is a cubic curve and `power3` a quartic one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    None,
    Power2Out,
    Power3Out,
    Power3InOut,
    ElasticOut { amplitude: f32, period: f32 },
}

impl Ease {
    pub const fn elastic_out(amplitude: f32, period: f32) -> Self {
        Ease::ElasticOut { amplitude, period }
    }

    /// Map linear progress in [0, 1] to eased progress. Endpoints are exact.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::None => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power3InOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
            Ease::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Power2Out
    }
}

// GSAP's elastic: amplitude below 1 shortens the period instead of damping
fn elastic_out(t: f32, amplitude: f32, period: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let a = amplitude.max(1.0);
    let base_period = if period > 0.0 { period } else { 0.3 };
    let p = base_period / amplitude.min(1.0).max(1e-3);
    let shift = p / TAU * (1.0 / a).asin();
    a * 2f32.powf(-10.0 * t) * ((t - shift) * TAU / p).sin() + 1.0
}

#[inline]
pub fn lerp(from: f32, to: f32, k: f32) -> f32 {
    from + (to - from) * k
}

use std::f64::consts::TAU;

pub const WAVE_COUNT: usize = 3;

// (r, g, b) pairs for the left and right gradient stops of each wave
pub const WAVE_GRADIENTS: [[(u8, u8, u8); 2]; WAVE_COUNT] = [
    [(102, 126, 234), (118, 75, 162)],
    [(79, 172, 254), (0, 242, 254)],
    [(240, 147, 251), (245, 87, 108)],
];
pub const WAVE_ALPHA: f32 = 0.1;

/// One layer of the background animation:
/// `y(x) = baseline + amplitude * sin(frequency * x + phase)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Wave {
    pub index: usize,
    pub amplitude: f64,
    pub frequency: f64,
    pub speed: f64,
    pub phase: f64,
    pub baseline: f64,
    pub colors: [String; 2],
}

impl Wave {
    pub fn new(index: usize, height: f64) -> Self {
        let i = index as f64;
        let [left, right] = WAVE_GRADIENTS[index % WAVE_GRADIENTS.len()];
        Self {
            index,
            amplitude: 30.0 + i * 10.0,
            frequency: 0.002 - i * 0.0003,
            speed: 0.02 + i * 0.01,
            phase: 0.0,
            baseline: baseline_for(index, height),
            colors: [rgba(left, WAVE_ALPHA), rgba(right, WAVE_ALPHA)],
        }
    }

    #[inline]
    pub fn y_at(&self, x: f64) -> f64 {
        self.baseline + (self.frequency * x + self.phase).sin() * self.amplitude
    }

    /// Move the phase forward one frame. The phase wraps at a full turn, which
    /// leaves the traced curve unchanged.
    pub fn advance(&mut self) {
        self.phase = (self.phase + self.speed).rem_euclid(TAU);
    }

    pub fn resize(&mut self, height: f64) {
        self.baseline = baseline_for(self.index, height);
    }

    /// Closed outline of the filled wave: bottom-left corner, one sample per
    /// pixel column across `0..=width`, then bottom-right corner.
    pub fn outline(&self, width: u32, height: f64) -> impl Iterator<Item = (f64, f64)> + '_ {
        let columns = (0..=width).map(move |x| {
            let x = x as f64;
            (x, self.y_at(x))
        });
        std::iter::once((0.0, height))
            .chain(columns)
            .chain(std::iter::once((width as f64, height)))
    }
}

#[inline]
fn baseline_for(index: usize, height: f64) -> f64 {
    height * (0.4 + index as f64 * 0.15)
}

pub fn rgba((r, g, b): (u8, u8, u8), alpha: f32) -> String {
    format!("rgba({r}, {g}, {b}, {alpha})")
}

/// Phase advance between two consecutive samples, accounting for the wrap.
#[inline]
pub fn phase_delta(before: f64, after: f64) -> f64 {
    (after - before).rem_euclid(TAU)
}

pub fn default_waves(height: f64) -> Vec<Wave> {
    (0..WAVE_COUNT).map(|i| Wave::new(i, height)).collect()
}

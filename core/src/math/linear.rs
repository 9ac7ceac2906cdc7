/// Continuous linear mapping between two intervals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// A collapsed domain maps every value to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + (r1 - r0) * t
    }

    /// Roughly `count` human-friendly tick values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Integer tick bounds and an increment; a negative increment
/// denotes the reciprocal step, which keeps sub-unit ticks exact.
fn tick_bounds(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (i1, i2, inc) = if power < 0.0 {
        let scaled = 10f64.powf(-power) / factor;
        let mut i1 = (start * scaled).round();
        let mut i2 = (stop * scaled).round();
        if i1 / scaled < start {
            i1 += 1.0;
        }
        if i2 / scaled > stop {
            i2 -= 1.0;
        }
        (i1, i2, -scaled)
    } else {
        let scaled = 10f64.powf(power) * factor;
        let mut i1 = (start / scaled).round();
        let mut i2 = (stop / scaled).round();
        if i1 * scaled < start {
            i1 += 1.0;
        }
        if i2 * scaled > stop {
            i2 -= 1.0;
        }
        (i1, i2, scaled)
    };

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_bounds(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Nice tick values (multiples of 1, 2 or 5 times a power of ten) covering
/// `[start, stop]`, returned in the same direction as the arguments.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_bounds(stop, start, count as f64)
    } else {
        tick_bounds(start, stop, count as f64)
    };
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let value = |k: f64| if inc < 0.0 { k / -inc } else { k * inc };
    (0..n)
        .map(|i| {
            if reverse {
                value(i2 - i as f64)
            } else {
                value(i1 + i as f64)
            }
        })
        .collect()
}

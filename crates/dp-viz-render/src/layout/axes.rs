/// Axis configuration with tick generation and data→pixel mapping.
#[derive(Debug, Clone)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub label: String,
    pub tick_positions: Vec<f64>,
    pub tick_labels: Vec<String>,
    pub minor_ticks: Vec<f64>,
}

impl Axis {
    /// Auto-scale linear axis with "nice number" ticks.
    pub fn auto_linear(data_min: f64, data_max: f64, target_ticks: usize) -> Self {
        let (nice_min, nice_max, step) = nice_range(data_min, data_max, target_ticks);
        let mut ticks = Vec::new();
        let mut labels = Vec::new();
        let mut i = 0;
        loop {
            let v = nice_min + i as f64 * step;
            if v > nice_max + step * 0.01 {
                break;
            }
            ticks.push(v);
            labels.push(format_tick(v, step));
            i += 1;
        }

        Self {
            min: nice_min,
            max: nice_max,
            label: String::new(),
            minor_ticks: minor_ticks(&ticks, nice_min, nice_max, step),
            tick_positions: ticks,
            tick_labels: labels,
        }
    }

    /// Axis spanning exactly `[min, max]` with ticks only at integers.
    ///
    /// Used for discrete data where a tick at 2.5 would be meaningless.
    pub fn integer(min: f64, max: f64, target_ticks: usize) -> Self {
        let (min, max) = if (max - min).abs() < 1e-12 { (min - 1.0, max + 1.0) } else { (min, max) };
        let rough = (max - min) / (target_ticks.max(2) - 1) as f64;
        let step = nice_step(rough).max(1.0).round();

        let first = (min / step).ceil() as i64;
        let last = (max / step).floor() as i64;
        let ticks: Vec<f64> = (first..=last).map(|k| k as f64 * step).collect();
        let labels = ticks.iter().map(|&v| format_tick(v, step)).collect();

        Self {
            min,
            max,
            label: String::new(),
            minor_ticks: Vec::new(),
            tick_positions: ticks,
            tick_labels: labels,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Map a data value to pixel coordinate.
    pub fn data_to_pixel(&self, value: f64, px_min: f64, px_max: f64) -> f64 {
        let frac = (value - self.min) / (self.max - self.min);
        px_min + frac * (px_max - px_min)
    }
}

/// Minor ticks: 5 subdivisions per major, skipping major positions.
fn minor_ticks(ticks: &[f64], min: f64, max: f64, step: f64) -> Vec<f64> {
    let minor_step = step / 5.0;
    let mut minor = Vec::new();
    let mut i = 0;
    loop {
        let mv = min + i as f64 * minor_step;
        if mv > max + minor_step * 0.01 {
            break;
        }
        if !ticks.iter().any(|t| (t - mv).abs() < minor_step * 0.01) {
            minor.push(mv);
        }
        i += 1;
    }
    minor
}

/// "Nice numbers" algorithm for pleasant tick spacing.
fn nice_range(data_min: f64, data_max: f64, target_ticks: usize) -> (f64, f64, f64) {
    if (data_max - data_min).abs() < 1e-15 {
        return (data_min - 1.0, data_max + 1.0, 1.0);
    }
    let range = data_max - data_min;
    let rough_step = range / (target_ticks.max(2) - 1) as f64;
    let step = nice_step(rough_step);
    let nice_min = (data_min / step).floor() * step;
    let nice_max = (data_max / step).ceil() * step;
    (nice_min, nice_max, step)
}

fn nice_step(rough: f64) -> f64 {
    let exp = rough.abs().log10().floor();
    let frac = rough / 10.0_f64.powf(exp);
    let nice_frac = if frac <= 1.5 {
        1.0
    } else if frac <= 3.5 {
        2.0
    } else if frac <= 7.5 {
        5.0
    } else {
        10.0
    };
    nice_frac * 10.0_f64.powf(exp)
}

fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };
    // Avoid "-0"
    let v = if value.abs() < step * 0.01 { 0.0 } else { value };
    if decimals == 0 {
        format!("{}", v.round() as i64)
    } else {
        format!("{:.prec$}", v, prec = decimals)
    }
}

//! Scoring demo state: four measurement inputs, the last computed score, and
//! the chart series every submission appends to.

use chrono::{Local, NaiveDate};
use thiserror::Error;

// ───────────────────────────────────────── fields ────────────

/// One of the four measurement inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    WaterTemperature,
    Salinity,
    Turbulence,
    MoonPhase,
}

impl Field {
    /// Display order in the form.
    pub const ALL: [Field; 4] = [
        Field::WaterTemperature,
        Field::Salinity,
        Field::Turbulence,
        Field::MoonPhase,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::WaterTemperature => "Water temperature (°C)",
            Field::Salinity => "Salinity (ppt)",
            Field::Turbulence => "Turbulence (0-10)",
            Field::MoonPhase => "Moon phase (0 = new, 10 = full)",
        }
    }

    /// Nominal range of the matching form control.
    pub fn range(self) -> (f64, f64) {
        match self {
            Field::WaterTemperature | Field::Salinity => (0.0, 40.0),
            Field::Turbulence | Field::MoonPhase => (0.0, 10.0),
        }
    }

    pub fn step(self) -> f64 {
        1.0
    }

    pub fn clamp(self, value: f64) -> f64 {
        let (lo, hi) = self.range();
        value.clamp(lo, hi)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{field}: `{raw}` is not a number")]
    NotANumber { field: &'static str, raw: String },
    #[error("{field}: value must be finite")]
    NotFinite { field: &'static str },
}

/// Parse a typed value for `field`.  Accepts any finite number; range is not
/// checked here.
pub fn parse_input(field: Field, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        field: field.label(),
        raw: trimmed.to_string(),
    })?;
    if !value.is_finite() {
        return Err(InputError::NotFinite {
            field: field.label(),
        });
    }
    Ok(value)
}

// ───────────────────────────────────────── inputs ────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementInputs {
    pub water_temperature: f64,
    pub salinity: f64,
    pub turbulence: f64,
    pub moon_phase: f64,
}

impl Default for MeasurementInputs {
    fn default() -> Self {
        Self {
            water_temperature: 20.0,
            salinity: 30.0,
            turbulence: 5.0,
            moon_phase: 5.0,
        }
    }
}

impl MeasurementInputs {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::WaterTemperature => self.water_temperature,
            Field::Salinity => self.salinity,
            Field::Turbulence => self.turbulence,
            Field::MoonPhase => self.moon_phase,
        }
    }

    fn slot(&mut self, field: Field) -> &mut f64 {
        match field {
            Field::WaterTemperature => &mut self.water_temperature,
            Field::Salinity => &mut self.salinity,
            Field::Turbulence => &mut self.turbulence,
            Field::MoonPhase => &mut self.moon_phase,
        }
    }

    /// `floor((temp + salinity + turbulence + (10 - moon)) / 4)`.
    ///
    /// Moon phase is inverted: darker nights favour a visible bloom.
    pub fn score(&self) -> i64 {
        let sum =
            self.water_temperature + self.salinity + self.turbulence + (10.0 - self.moon_phase);
        (sum / 4.0).floor() as i64
    }
}

// ───────────────────────────────────────── series ────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    /// `YYYY-MM-DD`.
    pub label: String,
    pub value: i64,
}

impl ScoreRecord {
    pub fn new(date: NaiveDate, value: i64) -> Self {
        Self {
            label: date.format("%Y-%m-%d").to_string(),
            value,
        }
    }
}

/// Historical points every demo starts with.
fn seeded_series() -> Vec<ScoreRecord> {
    [
        ("2024-06-01", 12),
        ("2024-06-08", 15),
        ("2024-06-15", 9),
        ("2024-06-22", 14),
    ]
    .into_iter()
    .map(|(label, value)| ScoreRecord {
        label: label.to_string(),
        value,
    })
    .collect()
}

// ───────────────────────────────────────── demo ──────────────

/// State owned by one scoring demo instance.
#[derive(Debug, Clone)]
pub struct ScoringDemo {
    inputs: MeasurementInputs,
    current_score: i64,
    series: Vec<ScoreRecord>,
    /// Clamp every `set_input` value into the field's nominal range.
    clamp_inputs: bool,
}

impl Default for ScoringDemo {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ScoringDemo {
    pub fn new(clamp_inputs: bool) -> Self {
        Self {
            inputs: MeasurementInputs::default(),
            current_score: 0,
            series: seeded_series(),
            clamp_inputs,
        }
    }

    pub fn inputs(&self) -> &MeasurementInputs {
        &self.inputs
    }

    pub fn current_score(&self) -> i64 {
        self.current_score
    }

    pub fn series(&self) -> &[ScoreRecord] {
        &self.series
    }

    pub fn badge_visible(&self) -> bool {
        self.current_score > 0
    }

    /// Overwrite one input.  Out-of-range values are kept as-is unless the
    /// demo was built with `clamp_inputs`.
    pub fn set_input(&mut self, field: Field, value: f64) {
        let value = if self.clamp_inputs {
            field.clamp(value)
        } else {
            value
        };
        *self.inputs.slot(field) = value;
    }

    /// Move `field` by `steps` steps, bounded to its nominal range the way a
    /// slider would be.
    pub fn nudge(&mut self, field: Field, steps: i32) {
        let current = self.inputs.get(field);
        let next = field.clamp(current + field.step() * f64::from(steps));
        *self.inputs.slot(field) = next;
    }

    /// Score the current inputs and log the result under today's date.
    pub fn submit(&mut self) -> &ScoreRecord {
        self.submit_on(Local::now().date_naive())
    }

    pub fn submit_on(&mut self, date: NaiveDate) -> &ScoreRecord {
        self.current_score = self.inputs.score();
        self.series.push(ScoreRecord::new(date, self.current_score));
        tracing::debug!(score = self.current_score, points = self.series.len(), "score submitted");
        &self.series[self.series.len() - 1]
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validate::{Validate, ValidationError, require_non_empty};

/// One sampled value of a project-level metric series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub id: i64,
    pub project_id: i64,
    pub metric_type: String,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMetric {
    pub metric_type: String,
    pub value: f64,
    /// Defaults to the time the store accepts the sample.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl NewMetric {
    pub fn into_record(self, id: i64, project_id: i64, now: DateTime<Utc>) -> Metric {
        Metric {
            id,
            project_id,
            metric_type: self.metric_type,
            value: self.value,
            timestamp: self.timestamp.unwrap_or(now),
        }
    }
}

impl Validate for NewMetric {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("metricType", &self.metric_type)?;
        if !self.value.is_finite() {
            return Err(ValidationError::new("value", "must be a finite number"));
        }
        Ok(())
    }
}

//! Risk assessment records. Scores and levels are stored values only.

use serde::{Deserialize, Serialize};

use mitra::forms::RISK_FACTOR;
use mitra::schema::{FieldType, Number, Schema, Text};
use mitra::{RiskFactor, RiskLevel};

use crate::response::ResponseShape;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub id: String,
    pub student_id: String,
    /// 0 to 10.
    pub score: f64,
    pub level: RiskLevel,
    pub factors: Vec<RiskFactor>,
    pub recommendations: Vec<String>,
    pub assessed_at: String,
    pub assessed_by: String,
}

impl ResponseShape for RiskAssessment {
    fn shape() -> FieldType {
        Schema::new()
            .field("id", Text::new())
            .field("studentId", Text::new())
            .field("score", Number::new().min(0.0).max(10.0))
            .field("level", FieldType::one_of(RiskLevel::VALUES))
            .field("factors", FieldType::array(RISK_FACTOR.clone()))
            .field("recommendations", FieldType::array(Text::new()))
            .field("assessedAt", Text::new())
            .field("assessedBy", Text::new())
            .into()
    }
}

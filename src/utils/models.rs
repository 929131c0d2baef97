use serde::{ Deserialize, Serialize };
use std::fmt;

// 输入的城市数据（字段名与原始数据一致）
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RawCityRecord {
    pub name: String,
    pub country: String,
    pub country_code: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub population: Option<u64>,
    pub timezone: String,
    #[serde(default)]
    pub admin1: Option<String>,
}

impl RawCityRecord {
    // 缺省的人口按 0 处理
    pub fn population_or_default(&self) -> u64 {
        self.population.unwrap_or(0)
    }
}

// 输出的城市数据，id 是排序后的名次（从1开始），重新生成后可能变化
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub id: u32,
    pub name: String,
    pub country: String,
    pub country_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub admin1: String,
    pub population: u64,
}

impl LocationRecord {
    pub fn from_raw(id: u32, raw: &RawCityRecord) -> Self {
        LocationRecord {
            id,
            name: raw.name.clone(),
            country: raw.country.clone(),
            country_code: raw.country_code.clone(),
            latitude: raw.lat,
            longitude: raw.lon,
            timezone: raw.timezone.clone(),
            admin1: raw.admin1.clone().unwrap_or_default(),
            population: raw.population_or_default(),
        }
    }
}

// 需要检测的接口
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSpec {
    pub label: String,
    pub url: String,
}

impl EndpointSpec {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        EndpointSpec { label: label.into(), url: url.into() }
    }
}

// 单个接口的检测结果，只有 Fail 会影响总体结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    WarnStatus(u16),
    WarnTimeout,
    Fail(String),
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Fail(_))
    }

    // CSV报告中的状态列
    pub fn status(&self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::WarnStatus(_) | Outcome::WarnTimeout => "warn",
            Outcome::Fail(_) => "fail",
        }
    }

    pub fn detail(&self) -> String {
        match self {
            Outcome::Ok => String::new(),
            Outcome::WarnStatus(code) => format!("Status {}", code),
            Outcome::WarnTimeout => "Timeout".to_string(),
            Outcome::Fail(message) => message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResult {
    pub label: String,
    pub url: String,
    pub outcome: Outcome,
}

// 报告中的一行，例如 "[WARN] RainViewer Maps - Timeout"
impl fmt::Display for EndpointResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Ok => write!(f, "[OK]   {}", self.label),
            Outcome::WarnStatus(_) | Outcome::WarnTimeout => {
                write!(f, "[WARN] {} - {}", self.label, self.outcome.detail())
            }
            Outcome::Fail(message) => write!(f, "[FAIL] {} - {}", self.label, message),
        }
    }
}

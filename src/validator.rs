use crate::errors::ValidateError;
use crate::utils::files::write_to_csv;
use crate::utils::http::probe;
use crate::utils::models::{ EndpointResult, EndpointSpec };

use log::debug;
use reqwest::Client;
use std::{ io::Write, path::Path, time::Duration };

// 每个请求的超时
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const SEPARATOR_WIDTH: usize = 50;

const ENDPOINTS: &[(&str, &str)] = &[
    (
        "Open-Meteo Forecast",
        "https://api.open-meteo.com/v1/forecast?latitude=40.7&longitude=-74&current=temperature_2m",
    ),
    ("Open-Meteo Geocoding", "https://geocoding-api.open-meteo.com/v1/search?name=test"),
    ("RainViewer Maps", "https://api.rainviewer.com/public/weather-maps.json"),
];

pub fn default_endpoints() -> Vec<EndpointSpec> {
    ENDPOINTS.iter()
        .map(|&(label, url)| EndpointSpec::new(label, url))
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub results: Vec<EndpointResult>,
}

impl ValidationReport {
    // 只有连接层面的失败才算不可用，状态码异常、超时只是警告
    pub fn all_reachable(&self) -> bool {
        !self.results.iter().any(|r| r.outcome.is_failure())
    }

    // CSV格式：label,url,status,detail
    pub fn to_csv_rows(&self) -> Vec<Vec<String>> {
        let header = ["label", "url", "status", "detail"].map(str::to_string).to_vec();
        std::iter
            ::once(header)
            .chain(
                self.results
                    .iter()
                    .map(|r| {
                        vec![
                            r.label.clone(),
                            r.url.clone(),
                            r.outcome.status().to_string(),
                            r.outcome.detail()
                        ]
                    })
            )
            .collect()
    }

    pub fn write_csv(&self, path: &Path) -> Result<(), ValidateError> {
        write_to_csv(path, self.to_csv_rows()).map_err(|source| ValidateError::Report {
            path: path.to_path_buf(),
            source,
        })
    }
}

// 按顺序逐个检测（不并发），每个接口输出一行结果
pub async fn validate_endpoints<W: Write>(
    client: &Client,
    endpoints: &[EndpointSpec],
    out: &mut W
) -> Result<ValidationReport, ValidateError> {
    writeln!(out, "Validating API endpoints...")?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;

    let mut report = ValidationReport::default();
    for spec in endpoints {
        let result = probe(client, spec).await;
        writeln!(out, "{}", result)?;
        report.results.push(result);
    }

    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    debug!(
        "Checked {} endpoints, {} failed",
        report.results.len(),
        report.results
            .iter()
            .filter(|r| r.outcome.is_failure())
            .count()
    );
    Ok(report)
}

// 最后的总结，不影响退出码
pub fn write_summary<W: Write>(out: &mut W, all_reachable: bool) -> std::io::Result<()> {
    if all_reachable {
        writeln!(out, "\nAll API endpoints are accessible!")
    } else {
        writeln!(out, "\nSome API endpoints are not accessible.")?;
        writeln!(out, "The app may have issues fetching weather data.")
    }
}

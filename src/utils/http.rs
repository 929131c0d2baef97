use crate::errors::ValidateError;
use crate::utils::models::{ EndpointResult, EndpointSpec, Outcome };

use log::debug;
use reqwest::Client;
use std::{ error::Error, time::{ Duration, Instant } };
use url::Url;

// 构建HTTP客户端，所有请求共用同一个超时
pub fn build_client(timeout: Duration) -> Result<Client, ValidateError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

// 对单个接口发送GET请求，并对结果进行分类
pub async fn probe(client: &Client, spec: &EndpointSpec) -> EndpointResult {
    // 从URL中获取域名，只用于日志
    let host = Url::parse(&spec.url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| spec.url.clone());

    let start_time = Instant::now();
    let outcome = classify(client.get(&spec.url).send().await);
    debug!(
        "GET {} | {} | {} ms",
        host,
        outcome.status(),
        start_time.elapsed().as_millis()
    );

    EndpointResult {
        label: spec.label.clone(),
        url: spec.url.clone(),
        outcome,
    }
}

fn classify(response: reqwest::Result<reqwest::Response>) -> Outcome {
    match response {
        Ok(resp) if resp.status().is_success() => Outcome::Ok,
        Ok(resp) => Outcome::WarnStatus(resp.status().as_u16()),
        Err(e) if e.is_timeout() => Outcome::WarnTimeout,
        Err(e) => Outcome::Fail(error_chain(&e)),
    }
}

// reqwest 的错误信息只有最外层，需要把 source 一层层拼起来才能看到 DNS/拒绝连接等原因
fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

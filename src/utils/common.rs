use std::time::Duration;

// 计算程序运行的总时长，转换为人类易读的单位
pub fn format_duration(duration: Duration) -> (f64, &'static str) {
    if duration.as_secs() > 0 {
        (duration.as_secs_f64(), "s")
    } else if duration.as_millis() > 0 {
        (duration.as_millis() as f64, "ms")
    } else if duration.as_micros() > 0 {
        (duration.as_micros() as f64, "µs")
    } else {
        (duration.as_nanos() as f64, "ns")
    }
}

use crate::errors::GenerateError;
use crate::utils::files::write_json_pretty;
use crate::utils::models::{ LocationRecord, RawCityRecord };

use log::{ debug, info };
use std::{ cmp::Reverse, path::Path };

// 相对于前端项目根目录
pub const DEFAULT_OUTPUT_PATH: &str = "src/data/cities.json";

// 按人口降序排列（稳定排序，人口相同的保持输入顺序），排序后再编号，坐标不做校验
pub fn build_locations(records: &[RawCityRecord]) -> Vec<LocationRecord> {
    let mut ordered: Vec<&RawCityRecord> = records.iter().collect();
    ordered.sort_by_key(|record| Reverse(record.population_or_default()));

    ordered
        .into_iter()
        .zip(1..)
        .map(|(raw, id)| LocationRecord::from_raw(id, raw))
        .collect()
}

// 写入 cities.json（覆盖旧文件），返回写入的城市数量
pub fn generate<P: AsRef<Path>>(
    records: &[RawCityRecord],
    output_path: P
) -> Result<usize, GenerateError> {
    let output_path = output_path.as_ref();
    let locations = build_locations(records);
    if let Some(top) = locations.first() {
        debug!("Top ranked city: {} ({})", top.name, top.population);
    }

    write_json_pretty(output_path, &locations)?;
    info!("Wrote {} location records to {}", locations.len(), output_path.display());
    Ok(locations.len())
}

// 内置的主要城市列表（演示用的子集）
pub fn major_cities() -> Vec<RawCityRecord> {
    MAJOR_CITIES.iter()
        .map(|&(name, country, country_code, lat, lon, population, timezone, admin1)| {
            RawCityRecord {
                name: name.to_string(),
                country: country.to_string(),
                country_code: country_code.to_string(),
                lat,
                lon,
                population: Some(population),
                timezone: timezone.to_string(),
                admin1: Some(admin1.to_string()),
            }
        })
        .collect()
}

type CityRow = (&'static str, &'static str, &'static str, f64, f64, u64, &'static str, &'static str);

// (name, country, country_code, lat, lon, population, timezone, admin1)
const MAJOR_CITIES: &[CityRow] = &[
    ("New York", "United States", "US", 40.7128, -74.006, 8336817, "America/New_York", "New York"),
    ("Los Angeles", "United States", "US", 34.0522, -118.2437, 3979576, "America/Los_Angeles", "California"),
    ("Chicago", "United States", "US", 41.8781, -87.6298, 2693976, "America/Chicago", "Illinois"),
    ("London", "United Kingdom", "GB", 51.5074, -0.1278, 8982000, "Europe/London", "England"),
    ("Paris", "France", "FR", 48.8566, 2.3522, 2161000, "Europe/Paris", "Île-de-France"),
    ("Tokyo", "Japan", "JP", 35.6762, 139.6503, 13960000, "Asia/Tokyo", "Tokyo"),
    ("Sydney", "Australia", "AU", -33.8688, 151.2093, 5312000, "Australia/Sydney", "New South Wales"),
    ("Berlin", "Germany", "DE", 52.52, 13.405, 3644826, "Europe/Berlin", "Berlin"),
    ("Toronto", "Canada", "CA", 43.6532, -79.3832, 2731571, "America/Toronto", "Ontario"),
    ("Mumbai", "India", "IN", 19.076, 72.8777, 12442373, "Asia/Kolkata", "Maharashtra"),
    ("São Paulo", "Brazil", "BR", -23.5505, -46.6333, 12325232, "America/Sao_Paulo", "São Paulo"),
    ("Singapore", "Singapore", "SG", 1.3521, 103.8198, 5850342, "Asia/Singapore", "Singapore"),
    ("Dubai", "United Arab Emirates", "AE", 25.2048, 55.2708, 3331420, "Asia/Dubai", "Dubai"),
    ("Hong Kong", "Hong Kong", "HK", 22.3193, 114.1694, 7500700, "Asia/Hong_Kong", "Hong Kong"),
    ("Seoul", "South Korea", "KR", 37.5665, 126.978, 9776000, "Asia/Seoul", "Seoul"),
    ("Mexico City", "Mexico", "MX", 19.4326, -99.1332, 8918653, "America/Mexico_City", "Mexico City"),
    ("Amsterdam", "Netherlands", "NL", 52.3676, 4.9041, 872680, "Europe/Amsterdam", "North Holland"),
    ("Rome", "Italy", "IT", 41.9028, 12.4964, 2873000, "Europe/Rome", "Lazio"),
    ("Madrid", "Spain", "ES", 40.4168, -3.7038, 3223000, "Europe/Madrid", "Community of Madrid"),
    ("Stockholm", "Sweden", "SE", 59.3293, 18.0686, 975904, "Europe/Stockholm", "Stockholm County"),
];

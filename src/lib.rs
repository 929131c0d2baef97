pub mod errors;
pub mod generator;
pub mod utils;
pub mod validator;

pub use errors::{ GenerateError, ValidateError };
pub use generator::{ build_locations, generate, major_cities };
pub use utils::models::{ EndpointResult, EndpointSpec, LocationRecord, Outcome, RawCityRecord };
pub use validator::{ default_endpoints, validate_endpoints, ValidationReport };

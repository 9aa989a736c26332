/// Environment variable containing the DynamoDB table name
pub const EXPONENT_TABLE_NAME: &str = "EXPONENT_TABLE_NAME";
/// Table used when `EXPONENT_TABLE_NAME` is unset
pub const DEFAULT_TABLE_NAME: &str = "mathExponentDb";

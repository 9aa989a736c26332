use model::env::{DEFAULT_TABLE_NAME, EXPONENT_TABLE_NAME};

/// Process configuration, read once at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table_name: String,
}

impl Config {
    /// Pull the table name from the environment, falling back to the default table.
    pub fn from_env() -> Self {
        let table_name: String = std::env::var(EXPONENT_TABLE_NAME)
            .ok()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());

        Config { table_name }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use model::env::{DEFAULT_TABLE_NAME, EXPONENT_TABLE_NAME};
    use std::env;
    use test_utils::{setup_default_env, TEST_TABLE};

    // Single test so the environment isn't mutated concurrently
    #[test]
    fn config_reads_table_name_from_env() {
        setup_default_env();
        assert_eq!(TEST_TABLE, Config::from_env().table_name);

        unsafe {
            env::set_var(EXPONENT_TABLE_NAME, "  ");
        }
        assert_eq!(DEFAULT_TABLE_NAME, Config::from_env().table_name);

        unsafe {
            env::remove_var(EXPONENT_TABLE_NAME);
        }
        assert_eq!(DEFAULT_TABLE_NAME, Config::from_env().table_name);
    }
}

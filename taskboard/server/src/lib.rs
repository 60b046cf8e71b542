pub mod config {
    use serde::Deserialize;

    #[derive(Deserialize, Debug, Clone)]
    pub struct Config {
        pub db_url: String,
        #[serde(default = "default_port")]
        pub port: u16,
        /// Origins allowed to call the API from a browser.
        #[serde(default = "default_allowed_origins")]
        pub allowed_origins: Vec<String>,
    }

    impl Config {
        /// Loads configuration from environment variables.
        ///
        /// `ALLOWED_ORIGINS` is read as a comma separated list.
        pub fn from_env() -> anyhow::Result<Self> {
            Self::from_source(config::Environment::default())
        }

        fn from_source(environment: config::Environment) -> anyhow::Result<Self> {
            let settings = config::Config::builder()
                .add_source(
                    environment
                        .try_parsing(true)
                        .list_separator(",")
                        .with_list_parse_key("allowed_origins"),
                )
                .build()?;

            let config: Config = settings.try_deserialize()?;
            Ok(config)
        }
    }

    fn default_port() -> u16 {
        8080
    }

    fn default_allowed_origins() -> Vec<String> {
        vec![
            "http://localhost:3000".to_string(),
            "http://localhost:8080".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ]
    }

}
pub mod entities;
pub mod task;
pub mod web;

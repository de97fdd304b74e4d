use std::env::var;

use dotenvy::dotenv;

const DEFAULT_MINIMUM_ADULT_AGE: u32 = 18;

pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    pub database_url: String,
    pub minimum_adult_age: u32,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();

        Ok(Config {
            port: var("PORT")
                .map_err(|_| "An error occured while getting PORT env param")?
                .parse::<u16>()
                .map_err(|_| "An error occured while parsing PORT env param")?,
            scheme: var("SCHEME").map_err(|_| "An error occured while getting SCHEME env param")?,
            host: var("HOST").map_err(|_| "An error occured while getting HOST env param")?,
            database_url: var("DATABASE_URL")
                .map_err(|_| "An error occured while getting DATABASE_URL env param")?,
            minimum_adult_age: match var("MINIMUM_ADULT_AGE") {
                Ok(raw) => raw
                    .parse::<u32>()
                    .map_err(|_| "An error occured while parsing MINIMUM_ADULT_AGE env param")?,
                Err(_) => DEFAULT_MINIMUM_ADULT_AGE,
            },
        })
    }
}

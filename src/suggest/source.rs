use crate::config::Config;
use crate::formula::token::Token;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("could not build HTTP client: {0}")]
    Client(String),
}

/// Remote entity listing. The query never goes over the wire; callers filter
/// the returned entities client-side.
pub trait SuggestionSource {
    fn fetch(&self) -> Result<Vec<Token>, FetchError>;
}

/// HTTP GET source decoding a JSON array of entities.
pub struct HttpSource {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpSource {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

impl SuggestionSource for HttpSource {
    fn fetch(&self) -> Result<Vec<Token>, FetchError> {
        let entities = self
            .client
            .get(&self.endpoint)
            .send()?
            .error_for_status()?
            .json::<Vec<Token>>()?;
        Ok(entities)
    }
}
